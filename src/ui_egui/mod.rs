mod app;
pub mod theme;
pub mod views;

pub use app::navigation::{greeting, Route};
pub use app::{InvitationApp, MIN_ROOT_HEIGHT, MIN_ROOT_WIDTH};
