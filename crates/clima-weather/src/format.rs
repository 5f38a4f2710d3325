//! Reshapes raw forecast days into display rows.

use chrono::{Datelike, NaiveDate};

use crate::locale::Locale;
use crate::translate::TranslationTable;
use crate::types::{DisplayDay, RawForecastDay, FORECAST_DAYS};

/// Date pattern used for every locale.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Formatter {
    locale: Locale,
    table: TranslationTable,
}

impl Formatter {
    /// Formatter with the locale's own translation table.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            table: TranslationTable::for_locale(locale),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Format one day. `index` is the day's position in the fetched sequence.
    ///
    /// The weekday comes straight from the calendar date, so no timezone is
    /// involved. Only the first row may be labelled as today.
    pub fn format(&self, raw: &RawForecastDay, index: usize, today: NaiveDate) -> DisplayDay {
        let day_of_week = if index == 0 && raw.date == today {
            self.locale.today_label().to_string()
        } else {
            capitalize_first(self.locale.weekday_name(raw.date.weekday()))
        };

        DisplayDay {
            date: raw.date.format(DATE_FORMAT).to_string(),
            day_of_week,
            max_temp: raw.max_temp_c,
            min_temp: raw.min_temp_c,
            pop: raw.chance_of_rain,
            condition: self.table.translate(&raw.condition).to_string(),
        }
    }

    /// Format the first `FORECAST_DAYS` entries, keeping source order.
    pub fn format_all(&self, days: &[RawForecastDay], today: NaiveDate) -> Vec<DisplayDay> {
        days.iter()
            .take(FORECAST_DAYS)
            .enumerate()
            .map(|(index, raw)| self.format(raw, index, today))
            .collect()
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
