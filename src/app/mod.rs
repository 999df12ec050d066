// src/app/mod.rs
// The application loop, its state, and the sketch-facing context.

pub mod context;
pub mod runner;
pub mod sketch;
pub mod state;

pub(crate) mod platform;

pub use context::Context;
pub use runner::run;
pub use sketch::Sketch;
pub use state::LoopPhase;
