use crate::shared::number_format::{
    format_count, format_count_digits, format_currency, format_currency_digits, format_percent,
    format_share, has_digits, parse_count,
    parse_currency, parse_share,
};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Fixed role of a metric on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    Revenue,
    Drinks,
    Ticket,
    Share,
}

impl MetricKey {
    /// All keys in card display order.
    pub const ALL: [MetricKey; 4] = [
        MetricKey::Revenue,
        MetricKey::Drinks,
        MetricKey::Ticket,
        MetricKey::Share,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKey::Revenue => "revenue",
            MetricKey::Drinks => "drinks",
            MetricKey::Ticket => "ticket",
            MetricKey::Share => "share",
        }
    }

    /// Icon name understood by the frontend `icon()` helper.
    pub fn icon_name(&self) -> &'static str {
        match self {
            MetricKey::Revenue => "dollar",
            MetricKey::Drinks => "beer",
            MetricKey::Ticket => "tag",
            MetricKey::Share => "pie",
        }
    }

    /// Unit is part of the metric's identity, never edited.
    pub fn unit(&self) -> Unit {
        match self {
            MetricKey::Revenue | MetricKey::Ticket => Unit::Currency,
            MetricKey::Drinks => Unit::Count,
            MetricKey::Share => Unit::Percent,
        }
    }
}

/// Which half of the current/target pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    Current,
    Target,
}

impl MetricField {
    pub const ALL: [MetricField; 2] = [MetricField::Current, MetricField::Target];
}

/// Formatting and parsing strategy of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Currency,
    Count,
    Percent,
}

impl Unit {
    /// Value as shown on the cards.
    pub fn format_display(&self, value: f64) -> String {
        match self {
            Unit::Currency => format_currency(value),
            Unit::Count => format_count(value),
            Unit::Percent => format_percent(value),
        }
    }

    /// Value as seeded into an edit form input.
    pub fn format_input(&self, value: f64) -> String {
        match self {
            Unit::Currency => format_currency(value),
            Unit::Count => format_count(value),
            Unit::Percent => format_share(value),
        }
    }

    /// Lenient inverse of [`Unit::format_input`].
    pub fn parse_input(&self, input: &str) -> f64 {
        match self {
            Unit::Currency => parse_currency(input),
            Unit::Count => parse_count(input),
            Unit::Percent => parse_share(input),
        }
    }

    /// Turns raw keystroke input into the text kept in the form.
    ///
    /// Currency and count are stripped to digits and regrouped as text, so
    /// no digit is lost however long the input; a field with no digits left
    /// becomes empty. Percent text passes through as is.
    pub fn reformat_keystroke(&self, raw: &str) -> String {
        match self {
            Unit::Percent => raw.to_string(),
            Unit::Currency | Unit::Count if !has_digits(raw) => String::new(),
            Unit::Currency => format_currency_digits(raw),
            Unit::Count => format_count_digits(raw),
        }
    }
}

// ---------------------------------------------------------------------------
// Metric
// ---------------------------------------------------------------------------

/// One tracked business quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub current: f64,
    pub target: f64,
    pub unit: Unit,
    pub description: Option<String>,
}

impl Metric {
    pub fn new(label: &str, current: f64, target: f64, unit: Unit) -> Self {
        Self {
            label: label.to_string(),
            current,
            target,
            unit,
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn value(&self, field: MetricField) -> f64 {
        match field {
            MetricField::Current => self.current,
            MetricField::Target => self.target,
        }
    }

    /// `current / target` in percent, clamped to `[0, 100]`; `0` without a target.
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.current, self.target)
    }

    /// Same ratio without clamping, for labels that may read above 100%.
    pub fn raw_progress_percent(&self) -> f64 {
        raw_progress_percent(self.current, self.target)
    }

    pub fn remaining(&self) -> f64 {
        (self.target - self.current).max(0.0)
    }

    pub fn is_goal_met(&self) -> bool {
        self.target > 0.0 && self.current >= self.target
    }
}

/// Unclamped progress ratio. Zero or negative targets give `0`.
///
/// An overflowing ratio stays infinite; only an undefined one (`inf / inf`)
/// reads as `0`.
pub fn raw_progress_percent(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    let ratio = current / target * 100.0;
    if ratio.is_nan() {
        0.0
    } else {
        ratio
    }
}

/// Clamped to `[0, 100]`; exactly `100` whenever the goal is met.
pub fn progress_percent(current: f64, target: f64) -> f64 {
    if target > 0.0 && current >= target {
        return 100.0;
    }
    raw_progress_percent(current, target).clamp(0.0, 100.0)
}

// ---------------------------------------------------------------------------
// Metric set
// ---------------------------------------------------------------------------

/// The four committed metrics. Replaced wholesale, never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    pub revenue: Metric,
    pub drinks: Metric,
    pub ticket: Metric,
    pub share: Metric,
}

impl MetricSet {
    pub fn get(&self, key: MetricKey) -> &Metric {
        match key {
            MetricKey::Revenue => &self.revenue,
            MetricKey::Drinks => &self.drinks,
            MetricKey::Ticket => &self.ticket,
            MetricKey::Share => &self.share,
        }
    }

    fn get_mut(&mut self, key: MetricKey) -> &mut Metric {
        match key {
            MetricKey::Revenue => &mut self.revenue,
            MetricKey::Drinks => &mut self.drinks,
            MetricKey::Ticket => &mut self.ticket,
            MetricKey::Share => &mut self.share,
        }
    }

    /// Copy of this set with one value replaced.
    pub fn with_value(&self, key: MetricKey, field: MetricField, value: f64) -> MetricSet {
        let mut next = self.clone();
        let metric = next.get_mut(key);
        match field {
            MetricField::Current => metric.current = value,
            MetricField::Target => metric.target = value,
        }
        next
    }
}

impl Default for MetricSet {
    fn default() -> Self {
        Self {
            revenue: Metric::new("Faturamento", 69634.24, 230000.00, Unit::Currency)
                .with_description("Acumulado até a presente data"),
            drinks: Metric::new("Venda de Drinks", 682.0, 3000.0, Unit::Count)
                .with_description("Quantidade de drinks vendidos"),
            ticket: Metric::new("Ticket Médio", 29.23, 32.00, Unit::Currency)
                .with_description("Valor médio por pedido"),
            share: Metric::new("Peso dos Drinks", 19.88, 30.00, Unit::Percent)
                .with_description("% do faturamento vindo de drinks"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_revenue_derived_values() {
        let set = MetricSet::default();
        let revenue = set.get(MetricKey::Revenue);
        assert!((revenue.progress_percent() - 30.2758).abs() < 0.001);
        assert!((revenue.remaining() - 160365.76).abs() < 1e-6);
        assert!(!revenue.is_goal_met());
    }

    #[test]
    fn test_goal_met_exactly_at_target() {
        let drinks = Metric::new("Venda de Drinks", 3000.0, 3000.0, Unit::Count);
        assert!(drinks.is_goal_met());
        assert_eq!(drinks.remaining(), 0.0);
        assert_eq!(drinks.progress_percent(), 100.0);
    }

    #[test]
    fn test_zero_target_is_safe() {
        for current in [0.0, 1.0, -5.0, 1e308, f64::INFINITY] {
            let p = progress_percent(current, 0.0);
            assert_eq!(p, 0.0);
            assert_eq!(raw_progress_percent(current, 0.0), 0.0);
        }
        let m = Metric::new("x", 10.0, 0.0, Unit::Count);
        assert!(!m.is_goal_met());
        assert_eq!(m.remaining(), 0.0);
    }

    #[test]
    fn test_raw_progress_is_not_clamped() {
        let m = Metric::new("x", 150.0, 100.0, Unit::Currency);
        assert_eq!(m.raw_progress_percent(), 150.0);
        assert_eq!(m.progress_percent(), 100.0);
    }

    #[test]
    fn test_negative_values_are_accepted() {
        let m = Metric::new("x", -10.0, 100.0, Unit::Currency);
        assert_eq!(m.progress_percent(), 0.0);
        assert_eq!(m.remaining(), 110.0);
    }

    #[test]
    fn test_with_value_leaves_source_untouched() {
        let set = MetricSet::default();
        let next = set.with_value(MetricKey::Ticket, MetricField::Target, 40.0);
        assert_eq!(set.ticket.target, 32.0);
        assert_eq!(next.ticket.target, 40.0);
        assert_eq!(next.revenue, set.revenue);
    }

    #[test]
    fn test_display_order_matches_defaults() {
        let set = MetricSet::default();
        let labels: Vec<&str> = MetricKey::ALL
            .iter()
            .map(|key| set.get(*key).label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec!["Faturamento", "Venda de Drinks", "Ticket Médio", "Peso dos Drinks"]
        );
        assert!(MetricKey::ALL.iter().all(|key| key.unit() == set.get(*key).unit));
    }

    #[test]
    fn test_reformat_keystroke() {
        assert_eq!(
            Unit::Currency.reformat_keystroke("R$\u{a0}69.634,245"),
            "R$\u{a0}696.342,45"
        );
        assert_eq!(Unit::Currency.reformat_keystroke("R$\u{a0}"), "");
        assert_eq!(Unit::Count.reformat_keystroke("3.0001"), "30.001");
        assert_eq!(Unit::Count.reformat_keystroke("abc"), "");
        assert_eq!(Unit::Percent.reformat_keystroke("19,"), "19,");
    }

    #[test]
    fn test_reformat_keystroke_keeps_long_input() {
        let typed = format!("R$\u{a0}{}", "9".repeat(400));
        let kept = Unit::Currency.reformat_keystroke(&typed);
        assert_eq!(kept.chars().filter(char::is_ascii_digit).count(), 400);
        assert!(kept.ends_with(",99"));
        assert_ne!(kept, "R$\u{a0}0,00");

        let count = Unit::Count.reformat_keystroke(&"1".repeat(40));
        assert_eq!(count.chars().filter(char::is_ascii_digit).count(), 40);
        assert_eq!(Unit::Count.reformat_keystroke("0001.234"), "1.234");
    }

    #[test]
    fn test_goal_met_agrees_with_progress_on_huge_values() {
        let typed = Unit::Currency.parse_input(&"9".repeat(400));
        for current in [typed, 1e308, f64::MAX, f64::INFINITY] {
            for target in [0.01, 230000.0, 1e308, f64::INFINITY] {
                let m = Metric::new("x", current, target, Unit::Currency);
                if m.is_goal_met() {
                    assert_eq!(m.progress_percent(), 100.0, "current={} target={}", current, target);
                }
                assert!(!m.progress_percent().is_nan());
            }
        }
        assert_eq!(raw_progress_percent(f64::INFINITY, 230000.0), f64::INFINITY);
        assert_eq!(progress_percent(f64::NEG_INFINITY, 230000.0), 0.0);
    }

    #[test]
    fn test_display_formats() {
        let set = MetricSet::default();
        assert_eq!(set.revenue.unit.format_display(set.revenue.current), "R$\u{a0}69.634,24");
        assert_eq!(set.drinks.unit.format_display(set.drinks.target), "3.000");
        assert_eq!(set.share.unit.format_display(set.share.current), "19,88%");
        assert_eq!(set.share.unit.format_input(set.share.current), "19,88");
    }

    #[test]
    fn test_serde_uses_snake_case_keys() {
        let json = serde_json::to_string(&MetricKey::Revenue).unwrap();
        assert_eq!(json, "\"revenue\"");
        let unit: Unit = serde_json::from_str("\"percent\"").unwrap();
        assert_eq!(unit, Unit::Percent);
    }

    proptest! {
        #[test]
        fn prop_progress_is_clamped(current in 0.0f64..1e9, target in 0.01f64..1e9) {
            let p = progress_percent(current, target);
            prop_assert!((0.0..=100.0).contains(&p));
            if current >= target {
                prop_assert_eq!(p, 100.0);
            }
        }

        #[test]
        fn prop_zero_target_never_nan(current in proptest::num::f64::ANY) {
            let p = progress_percent(current, 0.0);
            prop_assert_eq!(p, 0.0);
        }
    }
}
