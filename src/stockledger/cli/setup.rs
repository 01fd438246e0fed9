use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stock", bin_name = "stock", version)]
#[command(about = "Keep a stock ledger in a plain text file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Inventory file (overrides STOCKLEDGER_FILE and the config)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new item to the inventory
    #[command(alias = "c")]
    Capture(CaptureArgs),

    /// Show every item
    #[command(aliases = ["view", "ls"])]
    List,

    /// Show the lowest-stock items, or add stock to one of them
    #[command(alias = "r")]
    Restock {
        /// Row number of the item to restock (as shown by `stock restock`)
        row: Option<usize>,

        /// Quantity to add
        #[arg(short, long, requires = "row")]
        add: Option<String>,
    },

    /// Find items by product code
    #[command(alias = "s")]
    Search {
        /// Product code, e.g. SKU00012
        code: String,
    },

    /// Show the total stock value of each item
    #[command(alias = "vi")]
    Value,

    /// Show the highest-stock items, or put one of them on sale
    #[command(alias = "sale")]
    Discount {
        /// Row number of the item to discount (as shown by `stock discount`)
        row: Option<usize>,

        /// New price, lower than the current one
        #[arg(short, long, requires = "row")]
        price: Option<String>,
    },

    /// Check the inventory file format and print any errors
    Validate,

    /// Get or set configuration
    Config {
        /// Configuration key (inventory-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct CaptureArgs {
    /// Country of origin
    #[arg(long)]
    pub country: String,

    /// Product code (SKU#####)
    #[arg(long)]
    pub code: String,

    /// Product name
    #[arg(long)]
    pub product: String,

    /// Unit cost
    #[arg(long)]
    pub cost: String,

    /// Quantity in stock
    #[arg(long)]
    pub quantity: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_restock_with_row_and_amount() {
        let cli = Cli::try_parse_from(["stock", "restock", "2", "--add", "5"]).unwrap();
        match cli.command {
            Some(Commands::Restock { row, add }) => {
                assert_eq!(row, Some(2));
                assert_eq!(add.as_deref(), Some("5"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn amount_without_row_is_rejected() {
        assert!(Cli::try_parse_from(["stock", "restock", "--add", "5"]).is_err());
        assert!(Cli::try_parse_from(["stock", "discount", "--price", "5"]).is_err());
    }

    #[test]
    fn global_file_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["stock", "list", "--file", "shoes.txt"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("shoes.txt")));
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn capture_requires_every_field() {
        assert!(Cli::try_parse_from(["stock", "capture", "--code", "SKU00001"]).is_err());
        let cli = Cli::try_parse_from([
            "stock", "c", "--country", "France", "--code", "SKU00001", "--product", "Shoe",
            "--cost", "10", "--quantity", "3",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Capture(_))));
    }
}
