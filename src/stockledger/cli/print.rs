use colored::Colorize;
use stockledger::api::{CmdMessage, ItemValue, ListedRecord, MessageLevel};
use stockledger::config::LedgerConfig;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

const RECORD_HEADERS: [&str; 6] = ["No.", "Country", "Code", "Product", "Cost", "Quantity"];
const VALUE_HEADERS: [&str; 4] = ["No.", "Code", "Product", "Total Value"];

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_records(heading: &str, records: &[ListedRecord]) {
    if records.is_empty() {
        println!("No items found.");
        return;
    }
    println!("{}", heading.bold());
    println!("{}", render_records(records));
}

pub(super) fn print_values(values: &[ItemValue]) {
    if values.is_empty() {
        println!("No items found.");
        return;
    }
    println!("{}", "Total value of items in stock:".bold());
    println!("{}", render_values(values));
}

pub(super) fn print_config(config: &LedgerConfig) {
    println!("inventory-file = {}", config.inventory_file);
}

pub(super) fn render_records(records: &[ListedRecord]) -> String {
    let mut table = new_table(&RECORD_HEADERS);
    for lr in records {
        table.add_row(vec![
            Cell::new(lr.row),
            Cell::new(&lr.record.country),
            Cell::new(&lr.record.code),
            Cell::new(&lr.record.product),
            Cell::new(lr.record.cost),
            Cell::new(lr.record.quantity),
        ]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    table.to_string()
}

pub(super) fn render_values(values: &[ItemValue]) -> String {
    let mut table = new_table(&VALUE_HEADERS);
    for v in values {
        table.add_row(vec![
            Cell::new(v.row),
            Cell::new(&v.code),
            Cell::new(&v.product),
            Cell::new(v.total),
        ]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    table.to_string()
}

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(headers.iter().map(|h| Cell::new(h).add_attribute(Attribute::Bold)));
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
