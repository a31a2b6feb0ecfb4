//! Error type for the locale crate.

use thiserror::Error;

/// Errors produced when resolving a language name.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocaleError {
    /// The language name does not match any supported language.
    #[error("unknown language '{name}' (expected one of: en, th, es)")]
    UnknownLanguage {
        /// The name as it appeared in the input.
        name: String,
    },
}
