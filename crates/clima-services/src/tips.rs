//! Tip arithmetic and the in-memory calculation history.

use std::collections::VecDeque;

use serde::Serialize;
use uuid::Uuid;

/// One calculation, amounts already rendered with two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipEntry {
    pub id: Uuid,
    pub consumption: String,
    pub rate: f64,
    pub tip: String,
    pub total: String,
}

impl TipEntry {
    /// Rate as typed: `15`, `12.5`
    pub fn rate_label(&self) -> String {
        format_rate(self.rate)
    }
}

/// Parse a typed amount or rate. Anything non-numeric, non-finite or not
/// strictly positive is rejected.
pub fn parse_positive(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Round to cents, halves away from zero. The nudge absorbs binary noise
/// such as `1.005` being stored as `1.00499999...`.
pub fn round2(value: f64) -> f64 {
    ((value * 100.0) + 1e-9_f64.copysign(value)).round() / 100.0
}

/// tip = round2(C·R/100), total = round2(C + tip).
///
/// Returns `None` when the consumption text is not a positive number or the
/// rate is not positive; callers add nothing to the history in that case.
pub fn calculate(consumption_text: &str, rate: f64) -> Option<TipEntry> {
    let consumption = parse_positive(consumption_text)?;
    if !rate.is_finite() || rate <= 0.0 {
        return None;
    }

    let tip = round2(consumption * rate / 100.0);
    let total = round2(consumption + tip);

    Some(TipEntry {
        id: Uuid::new_v4(),
        consumption: format!("{:.2}", round2(consumption)),
        rate,
        tip: format!("{:.2}", tip),
        total: format!("{:.2}", total),
    })
}

pub fn format_rate(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{:.0}", rate)
    } else {
        rate.to_string()
    }
}

/// Newest-first list of calculations. Unbounded; lives as long as the screen.
#[derive(Debug, Clone, Default)]
pub struct TipHistory {
    entries: VecDeque<TipEntry>,
}

impl TipHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: TipEntry) {
        tracing::debug!("Tip entry {}: {} + {}%", entry.id, entry.consumption, entry.rate);
        self.entries.push_front(entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &TipEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&TipEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
