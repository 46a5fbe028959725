pub mod d100_goal_tracking;
