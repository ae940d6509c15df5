pub mod tasks;
pub mod timers;
