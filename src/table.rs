use std::collections::HashMap;
use std::env;
use std::ffi::OsString;
use std::str::FromStr;

use crate::convert;
use crate::errors::Error;
use crate::parser::Parser;

const NEGATION_PREFIX: &str = "-no";

/// Flag names resolved to their string values.
///
/// Keys are canonical: they always carry a single leading `-`, whatever
/// prefix was used on the command line. A bare flag is stored with an empty
/// value. The first occurrence of a key wins; later ones are only visible
/// through [`ArgTable::get_all`].
#[derive(Debug, Clone, Default)]
pub struct ArgTable {
    args: Vec<String>,
    values: HashMap<String, String>,
    multi: HashMap<String, Vec<String>>,
    unused: bit_set::BitSet,
}
impl ArgTable {
    pub fn from_strings(input: Vec<String>) -> ArgTable {
        Parser::new().parse(input)
    }

    pub fn from_args() -> ArgTable {
        let args = env::args().collect::<Vec<String>>();
        ArgTable::from_strings(args)
    }

    pub fn try_from_args_os() -> Result<ArgTable, Error> {
        let args = env::args_os().collect::<Vec<OsString>>();
        Parser::new().parse_os(args)
    }


    //----------------------------------------------------------------
    // building
    //----------------------------------------------------------------

    pub(crate) fn with_args(args: Vec<String>) -> ArgTable {
        let count = args.len();
        ArgTable {
            args: args,
            values: HashMap::with_capacity(count),
            multi: HashMap::with_capacity(count),
            unused: bit_set::BitSet::with_capacity(count),
        }
    }

    pub(crate) fn raw(&self, idx: usize) -> &str {
        self.args[idx].as_str()
    }

    pub(crate) fn mark_unused(&mut self, idx: usize) {
        self.unused.insert(idx);
    }

    // returns false when the key was already present and the value was dropped
    pub(crate) fn insert_literal(&mut self, key: &str, value: &str) -> bool {
        self.multi.entry(key.to_string()).or_insert_with(Vec::new).push(value.to_string());
        if self.values.contains_key(key) {
            return false;
        }
        self.values.insert(key.to_string(), value.to_string());
        true
    }

    // derives -X from every literal -noX that has no literal -X beside it.
    // must run after all literal entries are in.
    pub(crate) fn resolve_negations(&mut self) -> usize {
        let mut derived: Vec<(String, &'static str)> = vec!();
        for (key, value) in self.values.iter() {
            if !key.starts_with(NEGATION_PREFIX) || key.len() == NEGATION_PREFIX.len() {
                continue;
            }
            let positive = format!("-{}", &key[NEGATION_PREFIX.len()..]);
            if self.values.contains_key(&positive) {
                continue;
            }
            // -noX=0 is a double negative
            derived.push((positive, convert::bool_value(!convert::is_true(value))));
        }

        let count = derived.len();
        for (positive, value) in derived {
            tracing::debug!(key = %positive, value, "derived from negated flag");
            self.values.insert(positive, value.to_string());
        }
        count
    }


    //----------------------------------------------------------------
    // lookups
    //----------------------------------------------------------------

    pub fn is_set(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            Some(v) => convert::is_true(v),
            None => default,
        }
    }

    pub fn get_string<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.values.get(key) {
            Some(v) => v.as_str(),
            None => default,
        }
    }

    /// Integer view of `key`.
    ///
    /// `default` is only used when the key is absent. A present value with
    /// no leading digits (`-n=NaN`, or a bare `-n`) yields 0.
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        match self.values.get(key) {
            Some(v) => convert::leading_int(v),
            None => default,
        }
    }

    pub fn get_parsed<T: FromStr>(&self, key: &str) -> Result<Option<T>, Error>
        where <T as FromStr>::Err: std::fmt::Display
    {
        let val = match self.values.get(key) {
            Some(v) => v,
            None => return Ok(None),
        };
        T::from_str(val)
            .map(Some)
            .map_err(|e| Error::ConstructionError(key.to_string(), format!("{}", e)))
    }

    /// Every literal value given for `key`, in input order.
    pub fn get_all(&self, key: &str) -> &[String] {
        match self.multi.get(key) {
            Some(vals) => vals.as_slice(),
            None => &[],
        }
    }


    //----------------------------------------------------------------
    // soft sets
    //----------------------------------------------------------------

    pub fn soft_set(&mut self, key: &str, value: &str) -> bool {
        if self.is_set(key) {
            return false;
        }
        self.insert_literal(key, value)
    }

    pub fn soft_set_bool(&mut self, key: &str, value: bool) -> bool {
        self.soft_set(key, convert::bool_value(value))
    }


    //----------------------------------------------------------------
    // inspection
    //----------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> Vec<&str> {
        let mut keys = self.values.keys().map(|k| k.as_str()).collect::<Vec<&str>>();
        keys.sort_unstable();
        keys
    }

    /// Tokens that were not recognized as flags, with their argv index.
    pub fn unused(&self) -> Vec<(usize, &str)> {
        self.unused.iter().map(|i| (i, self.args[i].as_str())).collect()
    }
}
