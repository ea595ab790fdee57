//! Resolves `-flag=value` style arguments into an [`ArgTable`].
//!
//! ```no_run
//! let args = argtable::argtable!();
//! let verbose = args.get_bool("-verbose", false);
//! let port = args.get_int("-port", 8333);
//! let datadir = args.get_string("-datadir", "~/.data");
//! ```
//!
//! `--flag` and `-flag` are the same key, and the first occurrence of a key
//! wins. `-noflag` sets `-flag` to false (or true for `-noflag=0`) unless
//! `-flag` itself was given.

extern crate bit_set;

pub mod errors;
pub use errors::*;

mod convert;

mod parser;
pub use parser::Parser;

mod table;
pub use table::ArgTable;

mod shared;
pub use shared::SharedArgTable;

#[cfg(test)] mod test_strings;
#[cfg(test)] mod test_negation;

#[macro_export]
macro_rules! argtable {
    () => {{
        $crate::ArgTable::from_args()
    }};
    ($args:ident) => {{
        $crate::ArgTable::from_strings($args)
    }};
    ($args:expr) => {{
        $crate::ArgTable::from_strings($args)
    }};
}
