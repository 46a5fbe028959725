mod dashboard;
mod edit_modal;
mod gauges;
mod kpi_card;
mod status_alert;

pub use dashboard::GoalTrackingDashboard;
