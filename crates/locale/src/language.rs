//! Report languages.

use crate::error::LocaleError;

/// A language a report can be rendered in.
///
/// English is the default and the reference translation table; see
/// [`crate::text::label`] for the fallback rule the other languages use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Language {
    #[default]
    English = 0,
    Thai = 1,
    Spanish = 2,
}

impl Language {
    /// All supported languages, in table order.
    pub const ALL: [Language; 3] = [Language::English, Language::Thai, Language::Spanish];

    /// ISO 639-1 code, as used in flags and config files.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Thai => "th",
            Language::Spanish => "es",
        }
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Thai => "Thai",
            Language::Spanish => "Spanish",
        }
    }

    /// Parses a language from its ISO code or English name.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn parse(name: &str) -> Result<Language, LocaleError> {
        match name.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "th" | "tha" | "thai" => Ok(Language::Thai),
            "es" | "spa" | "spanish" => Ok(Language::Spanish),
            _ => Err(LocaleError::UnknownLanguage { name: name.into() }),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_parse() {
        for lang in Language::ALL {
            assert_eq!(Language::parse(lang.code()), Ok(lang));
            assert_eq!(Language::parse(lang.name()), Ok(lang));
        }
    }

    #[test]
    fn parse_is_case_and_whitespace_insensitive() {
        assert_eq!(Language::parse("  EN "), Ok(Language::English));
        assert_eq!(Language::parse("Thai"), Ok(Language::Thai));
        assert_eq!(Language::parse("SPANISH"), Ok(Language::Spanish));
    }

    #[test]
    fn unknown_language_keeps_the_original_spelling() {
        let err = Language::parse(" Klingon ").unwrap_err();
        assert_eq!(
            err,
            LocaleError::UnknownLanguage {
                name: " Klingon ".into()
            }
        );
    }

    #[test]
    fn english_is_the_default() {
        assert_eq!(Language::default(), Language::English);
    }
}
