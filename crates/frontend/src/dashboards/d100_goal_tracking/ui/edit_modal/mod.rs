//! Metrics edit form
//!
//! - view_model.rs: open/edit/save/cancel commands over an `EditSession`
//! - view.rs: Leptos components (pure UI)

mod view;
mod view_model;

pub use view::GoalEditorModal;
pub use view_model::GoalEditorViewModel;
