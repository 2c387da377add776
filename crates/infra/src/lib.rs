//! Adapters for the engine's ports.

pub mod adapters;

pub use adapters::TomlSizingStore;
