use super::edit_session::{CommitOutcome, EditSession};
use super::metrics::MetricSet;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const MONTHS_PT_BR: [&str; 12] = [
    "JANEIRO", "FEVEREIRO", "MARÇO", "ABRIL", "MAIO", "JUNHO", "JULHO", "AGOSTO", "SETEMBRO",
    "OUTUBRO", "NOVEMBRO", "DEZEMBRO",
];

/// Upper-case pt-BR month and year, e.g. `OUTUBRO DE 2026`.
pub fn period_label_for(year: i32, month: u32) -> String {
    let name = month
        .checked_sub(1)
        .and_then(|i| MONTHS_PT_BR.get(i as usize))
        .copied()
        .unwrap_or("");
    format!("{} DE {}", name, year)
}

/// Label for a calendar date. Callers pass the viewer's local date, not UTC.
pub fn period_label_for_date(date: NaiveDate) -> String {
    period_label_for(date.year(), date.month())
}

/// Committed dashboard state: the single source of truth for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    pub metrics: MetricSet,
    pub period_label: String,
    /// Bumped on every applied commit.
    pub revision: u64,
}

impl DashboardState {
    pub fn new(metrics: MetricSet, period_label: String) -> Self {
        Self {
            metrics,
            period_label,
            revision: 0,
        }
    }

    /// Starts an edit session over the committed values.
    pub fn open_editor(&self) -> EditSession {
        EditSession::open(&self.metrics, &self.period_label)
    }

    /// Replaces metrics and period label wholesale.
    pub fn apply(&self, outcome: CommitOutcome) -> DashboardState {
        DashboardState {
            metrics: outcome.metrics,
            period_label: outcome.period_label,
            revision: self.revision + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_label() {
        assert_eq!(period_label_for(2026, 10), "OUTUBRO DE 2026");
        assert_eq!(period_label_for(2025, 3), "MARÇO DE 2025");
        assert_eq!(period_label_for(2025, 0), " DE 2025");
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(period_label_for_date(date), "DEZEMBRO DE 2024");
    }

    #[test]
    fn test_period_label_uses_local_date_at_month_end() {
        use chrono::{FixedOffset, TimeZone, Utc};
        // 01:00 UTC on Nov 1st is still Oct 31st in Brasília (UTC-3)
        let instant = Utc.with_ymd_and_hms(2024, 11, 1, 1, 0, 0).unwrap();
        let brasilia = FixedOffset::west_opt(3 * 3600).unwrap();
        let local_date = instant.with_timezone(&brasilia).date_naive();
        assert_eq!(period_label_for_date(local_date), "OUTUBRO DE 2024");
        assert_eq!(period_label_for_date(instant.date_naive()), "NOVEMBRO DE 2024");
    }

    #[test]
    fn test_apply_bumps_revision() {
        let state = DashboardState::new(MetricSet::default(), "P".to_string());
        let outcome = state.open_editor().commit();
        let next = state.apply(outcome);
        assert_eq!(next.revision, 1);
        assert_eq!(next.metrics, state.metrics);
    }
}
