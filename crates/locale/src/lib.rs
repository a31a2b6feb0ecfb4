//! # tethys-locale
//!
//! Display strings for reports in English, Thai and Spanish.
//!
//! Every user-facing string in a rendered report is identified by a
//! [`Label`] and resolved through [`label`] for a given [`Language`].
//! English is the reference table and is complete by construction; the
//! other tables fall back to English for any entry they do not carry,
//! so a missing translation can never panic or leak a placeholder.
//!
//! ## Quick Start
//!
//! ```
//! use tethys_locale::{label, Label, Language};
//!
//! assert_eq!(label(Language::English, Label::AnnualSavings), "Annual Savings");
//! assert_eq!(label(Language::Thai, Label::Payback), "ระยะเวลาคืนทุน");
//!
//! // A language name coming from a flag or a config file.
//! let lang = Language::parse("th").unwrap();
//! assert_eq!(lang, Language::Thai);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`language`] | Supported report languages and name parsing |
//! | [`text`] | Label keys and per-language string tables |
//! | [`error`] | Locale error type |

pub mod error;
pub mod language;
pub mod text;

pub use error::LocaleError;
pub use language::Language;
pub use text::{label, Label};
