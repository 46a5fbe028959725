pub mod d100_goal_tracking;

pub use d100_goal_tracking::ui::GoalTrackingDashboard;
