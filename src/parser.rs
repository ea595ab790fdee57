use std::ffi::OsString;

use crate::errors::Error;
use crate::table::ArgTable;

/// Parse configuration. The defaults match `ArgTable::from_strings`.
#[derive(Debug, Clone)]
pub struct Parser {
    slash_prefix: bool,
    skip_program_name: bool,
}
impl Default for Parser {
    fn default() -> Parser {
        Parser {
            slash_prefix: false,
            skip_program_name: true,
        }
    }
}
impl Parser {
    pub fn new() -> Parser {
        Parser::default()
    }

    /// Accept `/flag` as a spelling of `-flag`.
    pub fn slash_prefix<'a>(&'a mut self, enabled: bool) -> &'a mut Parser {
        self.slash_prefix = enabled;
        self
    }

    /// When disabled, argv[0] is treated as a regular token.
    pub fn skip_program_name<'a>(&'a mut self, enabled: bool) -> &'a mut Parser {
        self.skip_program_name = enabled;
        self
    }

    fn first_index(&self) -> usize {
        if self.skip_program_name { 1 } else { 0 }
    }


    //----------------------------------------------------------------
    // tokenizing
    //----------------------------------------------------------------

    // returns (key, value) for tokens that are flags, None for anything else
    fn split_flag<'t>(&self, token: &'t str) -> Option<(String, &'t str)> {
        let (body, value) = match token.find('=') {
            Some(eq) => (&token[..eq], &token[eq + 1..]),
            None => (token, ""),
        };

        let name = if body.starts_with("--") {
            &body[2..]
        } else if body.starts_with('-') {
            &body[1..]
        } else if self.slash_prefix && body.starts_with('/') {
            &body[1..]
        } else {
            return None;
        };

        // covers "-", "--", and "-=value"
        if name.is_empty() {
            return None;
        }

        Some((format!("-{}", name), value))
    }


    //----------------------------------------------------------------
    // parse
    //----------------------------------------------------------------

    pub fn parse(&self, input: Vec<String>) -> ArgTable {
        let count = input.len();
        let mut table = ArgTable::with_args(input);
        let mut flags: usize = 0;

        // pass 1: literal entries, first occurrence wins
        for i in self.first_index()..count {
            let token = table.raw(i).to_string();
            match self.split_flag(&token) {
                Some((key, value)) => {
                    flags += 1;
                    if !table.insert_literal(&key, value) {
                        tracing::trace!(index = i, key = %key, "duplicate flag ignored");
                    }
                }
                None => {
                    tracing::trace!(index = i, token = %token, "not a flag");
                    table.mark_unused(i);
                }
            }
        }

        // pass 2: -noX implies -X unless -X was given literally
        let derived = table.resolve_negations();

        tracing::debug!(
            tokens = count.saturating_sub(self.first_index()),
            flags,
            derived,
            keys = table.len(),
            "parsed arguments"
        );
        table
    }

    pub fn parse_os(&self, input: Vec<OsString>) -> Result<ArgTable, Error> {
        let first = self.first_index();
        let mut args: Vec<String> = Vec::with_capacity(input.len());
        for (i, os) in input.into_iter().enumerate() {
            match os.into_string() {
                Ok(s) => args.push(s),
                // the program name is never inspected, so lossy is fine there
                Err(os) if i < first => args.push(os.to_string_lossy().into_owned()),
                Err(_) => return Err(Error::InvalidUnicode(i)),
            }
        }
        Ok(self.parse(args))
    }
}
