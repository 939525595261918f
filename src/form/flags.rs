//! src/form/flags.rs
//!
//! String key/value store mirroring the form's hidden fields.
//!
//! Visibility flags hold the literal strings "True"/"False"; selected flags hold
//! an identifying token or the empty string. The surrounding host supplies the
//! initial values (server state on the original page); the toggler only reads
//! and rewrites them.

use std::collections::HashMap;

/// Literal written into a visibility flag when its panel is shown.
pub const TRUE: &str = "True";

/// Literal written into a visibility flag when its panel is hidden.
pub const FALSE: &str = "False";

/// Hidden-field store. Missing keys read as the empty string.
#[derive(Clone, Debug, Default)]
pub struct FlagStore {
    values: HashMap<String, String>,
}

impl FlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from (name, value) pairs, e.g. server-restored state.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { values }
    }

    /// Read a field; absent fields read as "".
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }

    /// Write "True"/"False" into a visibility flag.
    pub fn set_bool(&mut self, name: &str, visible: bool) {
        self.set(name, if visible { TRUE } else { FALSE });
    }

    /// True iff the field holds the literal "True".
    pub fn is_true(&self, name: &str) -> bool {
        self.get(name) == TRUE
    }
}
