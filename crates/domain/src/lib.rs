//! Pure data types and algorithms for adaptive column layout.
//!
//! Nothing in this crate performs I/O, reads clocks, or touches global state.
//! Identical inputs always produce identical outputs.

pub mod column;
pub mod layout;
pub mod overrides;
pub mod units;

pub use column::{ColumnSpec, SizingMode};
pub use layout::{ColumnInput, Layout, calculate, resolve};
pub use overrides::{ColumnOverride, OverrideMap, PersistedSizing, recompute_on_commit};
pub use units::Rem;
