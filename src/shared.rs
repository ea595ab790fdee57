use std::sync::{Mutex, MutexGuard};

use crate::parser::Parser;
use crate::table::ArgTable;

/// An `ArgTable` that can be re-parsed while other threads read it.
///
/// A replacement table is built outside the lock and swapped in whole, so a
/// reader sees either the old table or the new one.
#[derive(Debug, Default)]
pub struct SharedArgTable {
    parser: Parser,
    inner: Mutex<ArgTable>,
}
impl SharedArgTable {
    pub fn new(parser: Parser) -> SharedArgTable {
        SharedArgTable {
            parser: parser,
            inner: Mutex::new(ArgTable::default()),
        }
    }

    pub fn from_table(table: ArgTable) -> SharedArgTable {
        SharedArgTable {
            parser: Parser::new(),
            inner: Mutex::new(table),
        }
    }

    // the table is only ever replaced whole, so a poisoned lock still guards
    // a consistent value
    fn lock(&self) -> MutexGuard<'_, ArgTable> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn reparse(&self, input: Vec<String>) {
        let table = self.parser.parse(input);
        let keys = table.len();
        *self.lock() = table;
        tracing::debug!(keys, "swapped argument table");
    }

    pub fn snapshot(&self) -> ArgTable {
        self.lock().clone()
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.lock().is_set(key)
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.lock().get_bool(key, default)
    }

    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.lock().get_string(key, default).to_string()
    }

    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.lock().get_int(key, default)
    }

    pub fn soft_set(&self, key: &str, value: &str) -> bool {
        self.lock().soft_set(key, value)
    }

    pub fn soft_set_bool(&self, key: &str, value: bool) -> bool {
        self.lock().soft_set_bool(key, value)
    }
}
