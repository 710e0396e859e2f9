mod models;
mod timer;

pub use models::Countdown;
pub use timer::{CountdownTimer, TICK_INTERVAL};
