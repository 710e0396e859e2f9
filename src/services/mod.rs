// Service module exports

pub mod countdown;
pub mod notifier;
pub mod settings;
