//! Engine layer: the resize state machine, content measurement, and the
//! orchestrator that wires reducer output to host-supplied ports.
//!
//! State transitions are pure (see [`reducer`]); everything effectful is
//! expressed as an [`effect::Effect`] and executed by [`engine::LayoutEngine`].

pub mod action;
pub mod cache;
pub mod effect;
pub mod engine;
pub mod frame;
pub mod measure;
pub mod natural;
pub mod ports;
pub mod reducer;
pub mod reducers;
pub mod state;
pub mod units;

pub use action::Action;
pub use effect::Effect;
pub use engine::LayoutEngine;
pub use state::{EngineState, ResizePhase, ResizeSession};
