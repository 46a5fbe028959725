//! Captions and chart slices derived from the committed metrics.

use super::metrics::{raw_progress_percent, MetricSet};
use crate::shared::number_format::{format_currency, format_fixed, format_share};
use serde::{Deserialize, Serialize};

/// Revenue status line of the header alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RevenueStatus {
    /// Amount still missing to the goal.
    Behind { gap: f64 },
    GoalReached,
}

/// Average ticket status line of the header alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TicketStatus {
    /// Ticket below the ideal value by `gap`.
    Below { gap: f64 },
    AtOrAbove,
}

/// `target - current` of revenue, negative once the goal is exceeded.
pub fn revenue_gap(set: &MetricSet) -> f64 {
    set.revenue.target - set.revenue.current
}

pub fn revenue_status(set: &MetricSet) -> RevenueStatus {
    let gap = revenue_gap(set);
    if gap > 0.0 {
        RevenueStatus::Behind { gap }
    } else {
        RevenueStatus::GoalReached
    }
}

pub fn ticket_status(set: &MetricSet) -> TicketStatus {
    if set.ticket.current < set.ticket.target {
        TicketStatus::Below {
            gap: set.ticket.target - set.ticket.current,
        }
    } else {
        TicketStatus::AtOrAbove
    }
}

impl RevenueStatus {
    pub fn message(&self) -> String {
        match self {
            RevenueStatus::Behind { gap } => {
                format!("Faltam {} para meta.", format_currency(*gap))
            }
            RevenueStatus::GoalReached => "Meta Atingida!".to_string(),
        }
    }

    pub fn projection(&self) -> &'static str {
        match self {
            RevenueStatus::Behind { .. } => {
                "Necessário faturar a diferença restante nos próximos dias."
            }
            RevenueStatus::GoalReached => "Meta de faturamento superada.",
        }
    }
}

impl TicketStatus {
    pub fn message(&self) -> String {
        match self {
            TicketStatus::Below { gap } => {
                format!("Ticket Médio {} abaixo do ideal.", format_currency(*gap))
            }
            TicketStatus::AtOrAbove => "Ticket Médio acima do ideal.".to_string(),
        }
    }
}

/// Drinks sold against the goal, unclamped, e.g. `"22,7"`.
pub fn drinks_volume_percent(set: &MetricSet) -> f64 {
    raw_progress_percent(set.drinks.current, set.drinks.target)
}

pub fn drinks_volume_caption(set: &MetricSet) -> String {
    format!(
        "Vendas em {}% da meta.",
        format_fixed(drinks_volume_percent(set), 1)
    )
}

pub fn share_caption(set: &MetricSet) -> String {
    let target = format_share(set.share.target);
    if set.share.current < set.share.target {
        format!("Share de drinks abaixo de {}%. Incentivar vendas.", target)
    } else {
        format!("Share de drinks acima da meta de {}%.", target)
    }
}

/// Two slices of a gauge, in percent of the full arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeSlices {
    pub filled: f64,
    pub rest: f64,
}

/// Revenue half-gauge: clamped progress and what is left of 100%.
pub fn revenue_gauge(set: &MetricSet) -> GaugeSlices {
    let filled = set.revenue.progress_percent();
    GaugeSlices {
        filled,
        rest: (100.0 - filled).max(0.0),
    }
}

/// Share donut: drinks share against everything else.
///
/// The share itself is not clamped, only the remainder is kept non-negative.
pub fn share_donut(set: &MetricSet) -> GaugeSlices {
    let filled = set.share.current;
    GaugeSlices {
        filled,
        rest: (100.0 - filled).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_goal_tracking::metrics::{MetricField, MetricKey};

    #[test]
    fn test_default_status_lines() {
        let set = MetricSet::default();
        assert_eq!(
            revenue_status(&set).message(),
            "Faltam R$\u{a0}160.365,76 para meta."
        );
        assert_eq!(
            ticket_status(&set).message(),
            "Ticket Médio R$\u{a0}2,77 abaixo do ideal."
        );
        assert_eq!(drinks_volume_caption(&set), "Vendas em 22,7% da meta.");
        assert_eq!(
            share_caption(&set),
            "Share de drinks abaixo de 30%. Incentivar vendas."
        );
    }

    #[test]
    fn test_goal_reached_lines() {
        let set = MetricSet::default()
            .with_value(MetricKey::Revenue, MetricField::Current, 250000.0)
            .with_value(MetricKey::Ticket, MetricField::Current, 32.0)
            .with_value(MetricKey::Share, MetricField::Current, 31.5);
        assert_eq!(revenue_status(&set), RevenueStatus::GoalReached);
        assert_eq!(revenue_status(&set).message(), "Meta Atingida!");
        assert_eq!(
            revenue_status(&set).projection(),
            "Meta de faturamento superada."
        );
        assert_eq!(ticket_status(&set), TicketStatus::AtOrAbove);
        assert_eq!(
            share_caption(&set),
            "Share de drinks acima da meta de 30%."
        );
        assert!(revenue_gap(&set) < 0.0);
    }

    #[test]
    fn test_drinks_volume_is_unclamped_and_zero_safe() {
        let over = MetricSet::default().with_value(MetricKey::Drinks, MetricField::Current, 4500.0);
        assert_eq!(drinks_volume_percent(&over), 150.0);
        let no_goal = MetricSet::default().with_value(MetricKey::Drinks, MetricField::Target, 0.0);
        assert_eq!(drinks_volume_percent(&no_goal), 0.0);
    }

    #[test]
    fn test_gauges() {
        let set = MetricSet::default();
        let revenue = revenue_gauge(&set);
        assert!((revenue.filled + revenue.rest - 100.0).abs() < 1e-9);

        let share = share_donut(&set);
        assert_eq!(share.filled, 19.88);
        assert!((share.rest - 80.12).abs() < 1e-9);

        let over = set.with_value(MetricKey::Share, MetricField::Current, 120.0);
        assert_eq!(share_donut(&over).filled, 120.0);
        assert_eq!(share_donut(&over).rest, 0.0);
    }
}
