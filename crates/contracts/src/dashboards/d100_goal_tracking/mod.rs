//! Monthly goal tracking of the bar: four KPIs, their derived progress and
//! the staged edit form that replaces them.

pub mod config;
pub mod edit_session;
pub mod export_layout;
pub mod metrics;
pub mod state;
pub mod summary;

pub use config::{load_config, DashboardConfig};
pub use edit_session::{CommitOutcome, EditBuffer, EditSession};
pub use export_layout::{fit_to_page, ExportSettings, PageFormat, Placement};
pub use metrics::{Metric, MetricField, MetricKey, MetricSet, Unit};
pub use state::{period_label_for, period_label_for_date, DashboardState};
