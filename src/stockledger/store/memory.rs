use super::LedgerStore;
use crate::error::{LedgerError, Result};
use std::io;
use std::path::PathBuf;

const MEMORY_LOCATION: &str = "inventory.txt";

/// In-memory inventory text for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    contents: Option<String>,
    fail_writes: bool,
}

impl InMemoryStore {
    /// A store with no contents: reading it reports a missing file.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: &str) -> Self {
        Self {
            contents: Some(contents.to_string()),
            fail_writes: false,
        }
    }

    /// Every later write fails, leaving the contents untouched.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl LedgerStore for InMemoryStore {
    fn read_lines(&self) -> Result<Vec<String>> {
        self.contents
            .as_ref()
            .map(|c| c.lines().map(str::to_string).collect())
            .ok_or_else(|| LedgerError::MissingFile(self.location()))
    }

    fn write_all(&mut self, contents: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::Other, "write refused"));
        }
        self.contents = Some(contents.to_string());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from(MEMORY_LOCATION)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::format::HEADER;

    /// Builds inventory text row by row.
    pub struct StoreFixture {
        lines: Vec<String>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                lines: vec![HEADER.to_string()],
            }
        }

        pub fn with_row(
            mut self,
            country: &str,
            code: &str,
            product: &str,
            cost: &str,
            qty: u64,
        ) -> Self {
            self.lines
                .push(format!("{},{},{},{},{}", country, code, product, cost, qty));
            self
        }

        /// One row per quantity, with generated codes `SKU00001`, `SKU00002`, ...
        pub fn with_quantities(mut self, quantities: &[u64]) -> Self {
            for qty in quantities {
                let n = self.lines.len();
                self.lines
                    .push(format!("France,SKU{:05},Item {},50,{}", n, n, qty));
            }
            self
        }

        pub fn text(&self) -> String {
            let mut text = self.lines.join("\n");
            text.push('\n');
            text
        }

        pub fn store(&self) -> InMemoryStore {
            InMemoryStore::with_contents(&self.text())
        }
    }
}
