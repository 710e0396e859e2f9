// Module exports for models

pub mod rsvp;
pub mod settings;
