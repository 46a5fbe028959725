pub mod button;
pub mod panel;

pub use button::Button;
pub use panel::Panel;
