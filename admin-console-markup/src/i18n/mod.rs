//! Internationalization (i18n)
//!
//! Plain Rust structs checked at compile time; no runtime lookup tables.

mod en_us;
mod fr_fr;
pub mod keys;

pub use keys::*;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    EnUs,
    FrFr,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::FrFr]
    }

    /// Name of the language in the language itself.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::FrFr => "Français",
        }
    }

    /// BCP 47 code, also used as the document `lang`.
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::FrFr => "fr-FR",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "fr-FR" | "fr" => Some(Language::FrFr),
            _ => None,
        }
    }

    pub fn texts(self) -> &'static Translations {
        match self {
            Language::EnUs => &en_us::TRANSLATIONS,
            Language::FrFr => &fr_fr::TRANSLATIONS,
        }
    }
}

/// Substitute `{key}` placeholders of a translation.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |text, (key, value)| {
            text.replace(&format!("{{{key}}}"), value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Language::from_code("fr"), Some(Language::FrFr));
        assert_eq!(Language::from_code("de"), None);
    }

    #[test]
    fn placeholders_are_filled() {
        let text = fill(
            Language::EnUs.texts().pagination.page_of,
            &[("page", "2"), ("pages", "3")],
        );
        assert_eq!(text, "Page 2 of 3");
    }
}
