//! Tip calculator screen.

use clima_core::Screen;
use clima_services::tips::{self, format_rate, parse_positive, TipEntry, TipHistory};

pub const SCREEN_ID: &str = "propinas";

#[derive(Debug, Clone)]
pub struct TipsModel {
    amount: String,
    custom_rate: String,
    selected: Option<f64>,
    presets: Vec<f64>,
    history: TipHistory,
}

impl TipsModel {
    pub fn new(presets: Vec<f64>) -> Self {
        Self {
            amount: String::new(),
            custom_rate: String::new(),
            selected: None,
            presets,
            history: TipHistory::new(),
        }
    }

    pub fn set_amount(&mut self, text: &str) {
        self.amount = text.to_string();
    }

    pub fn set_custom_rate(&mut self, text: &str) {
        self.custom_rate = text.to_string();
    }

    pub fn presets(&self) -> &[f64] {
        &self.presets
    }

    pub fn selected(&self) -> Option<f64> {
        self.selected
    }

    pub fn history(&self) -> &TipHistory {
        &self.history
    }

    /// Tap a preset button: select it, clear the custom field, calculate.
    ///
    /// Returns the new entry, or `None` when the index is out of range or
    /// the amount is not a positive number.
    pub fn select_preset(&mut self, index: usize) -> Option<&TipEntry> {
        let rate = *self.presets.get(index)?;
        self.selected = Some(rate);
        self.custom_rate.clear();
        self.calculate(rate)
    }

    /// Submit the custom rate field. Invalid or non-positive rates are
    /// ignored and leave the selection untouched.
    pub fn submit_custom(&mut self) -> Option<&TipEntry> {
        let rate = parse_positive(&self.custom_rate)?;
        self.selected = None;
        self.calculate(rate)
    }

    fn calculate(&mut self, rate: f64) -> Option<&TipEntry> {
        match tips::calculate(&self.amount, rate) {
            Some(entry) => {
                self.history.push(entry);
                self.history.latest()
            }
            None => {
                tracing::debug!("Ignoring tip calculation for amount {:?}", self.amount);
                None
            }
        }
    }

    fn render_presets(&self) -> String {
        self.presets
            .iter()
            .map(|rate| {
                let label = format!("{}%", format_rate(*rate));
                if self.selected == Some(*rate) {
                    format!("({})", label)
                } else {
                    format!("[{}]", label)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for TipsModel {
    fn default() -> Self {
        Self::new(vec![10.0, 15.0, 20.0])
    }
}

impl Screen for TipsModel {
    fn id(&self) -> &'static str {
        SCREEN_ID
    }

    fn title(&self) -> String {
        "Calculadora de Propinas".to_string()
    }

    fn render(&self) -> String {
        let mut lines = vec![
            self.title(),
            String::new(),
            format!("Monto del consumo: {}", self.amount),
            format!("Porcentaje de propina: {}", self.render_presets()),
            format!("Porcentaje personalizado: {}", self.custom_rate),
            String::new(),
            "Historial de cálculos".to_string(),
        ];

        for entry in self.history.iter() {
            lines.push(format!(
                "  Consumo: ${} | Propina: {}% (${}) | Total: ${}",
                entry.consumption,
                entry.rate_label(),
                entry.tip,
                entry.total
            ));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_selection_calculates() {
        let mut model = TipsModel::default();
        model.set_amount("150.00");
        model.set_custom_rate("7");

        let entry = model.select_preset(1).unwrap();
        assert_eq!(entry.tip, "22.50");
        assert_eq!(entry.total, "172.50");
        assert_eq!(model.selected(), Some(15.0));
        assert_eq!(model.history().len(), 1);
        assert!(model.render().contains("Porcentaje personalizado: \n"));
    }

    #[test]
    fn test_invalid_amount_adds_nothing() {
        let mut model = TipsModel::default();
        model.set_amount("abc");
        assert!(model.select_preset(0).is_none());
        // The button still shows as selected
        assert_eq!(model.selected(), Some(10.0));
        assert!(model.history().is_empty());
    }

    #[test]
    fn test_out_of_range_preset() {
        let mut model = TipsModel::default();
        model.set_amount("100");
        assert!(model.select_preset(3).is_none());
        assert_eq!(model.selected(), None);
    }

    #[test]
    fn test_custom_rate() {
        let mut model = TipsModel::default();
        model.set_amount("80");
        model.select_preset(0);

        model.set_custom_rate("12.5");
        let entry = model.submit_custom().unwrap();
        assert_eq!(entry.tip, "10.00");
        assert_eq!(model.selected(), None);
    }

    #[test]
    fn test_invalid_custom_rate_ignored() {
        let mut model = TipsModel::default();
        model.set_amount("80");
        model.select_preset(2);

        for text in ["", "0", "-3", "x"] {
            model.set_custom_rate(text);
            assert!(model.submit_custom().is_none());
        }
        assert_eq!(model.selected(), Some(20.0));
        assert_eq!(model.history().len(), 1);
    }

    #[test]
    fn test_render_lists_newest_first() {
        let mut model = TipsModel::default();
        model.set_amount("100");
        model.select_preset(0);
        model.set_amount("200");
        model.select_preset(2);

        let text = model.render();
        assert!(text.contains("[10%] [15%] (20%)"));
        let newer = text.find("Consumo: $200.00 | Propina: 20% ($40.00) | Total: $240.00").unwrap();
        let older = text.find("Consumo: $100.00 | Propina: 10% ($10.00) | Total: $110.00").unwrap();
        assert!(newer < older);
    }
}
