mod dashboard;
mod frame;
mod panel;
mod theme;

pub use dashboard::{Ui, UiActions};
pub use frame::{draw_frame, visible_range};
pub use theme::PANEL_HEIGHT;
