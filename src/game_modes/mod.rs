mod common;
mod play;

pub use play::run_round;
