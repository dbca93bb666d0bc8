//! Internationalization (i18n)
//!
//! Plain Rust structs of `&'static str`: type-checked at compile time, no
//! runtime lookup.

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
pub mod keys;
mod pt_br;

pub use keys::*;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English (United States)
    #[default]
    EnUs,
    /// Portuguese (Brazil)
    PtBr,
}

impl Language {
    /// Language code (BCP 47)
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::PtBr => "pt-BR",
        }
    }

    /// Parse a language code
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "pt-BR" | "pt" => Some(Language::PtBr),
            _ => None,
        }
    }
}

/// Current language index
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// Translations for the current language
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &pt_br::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

/// Switch the current language
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::PtBr => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}
