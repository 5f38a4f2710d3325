//! Condition phrase translation.
//!
//! The service already answers in the requested language for most phrases;
//! the table covers the common ones it leaves in English.

use crate::locale::Locale;

const SPANISH_CONDITIONS: &[(&str, &str)] = &[
    ("Sunny", "Soleado"),
    ("Clear", "Despejado"),
    ("Partly cloudy", "Parcialmente nublado"),
    ("Cloudy", "Nublado"),
    ("Overcast", "Cubierto"),
    ("Mist", "Neblina"),
    ("Patchy rain possible", "Posibilidad de lluvia"),
    ("Light rain", "Lluvia ligera"),
    ("Moderate rain", "Lluvia moderada"),
    ("Heavy rain", "Lluvia fuerte"),
];

/// Read-only phrase lookup. Unknown phrases pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationTable {
    entries: &'static [(&'static str, &'static str)],
}

impl TranslationTable {
    pub const fn spanish() -> Self {
        Self {
            entries: SPANISH_CONDITIONS,
        }
    }

    /// Passthrough table.
    pub const fn empty() -> Self {
        Self { entries: &[] }
    }

    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Es => Self::spanish(),
            Locale::En => Self::empty(),
        }
    }

    /// Exact-match lookup; returns `phrase` itself when there is no entry.
    pub fn translate<'a>(&self, phrase: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(source, _)| *source == phrase)
            .map_or(phrase, |&(_, target)| target)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self::spanish()
    }
}
