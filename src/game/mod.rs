pub mod input;
pub mod physics;
pub mod state;

pub use input::{drain_input, InputState, RawInput, ResolvedBindings};
pub use physics::{tick, RoundOutcome};
pub use state::{Ball, Paddle, PlayerSide, Round};
