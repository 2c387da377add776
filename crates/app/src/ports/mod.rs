pub mod probe;
pub mod store;

pub use probe::{NaturalWidthProbe, RootFontSource, TextMeasurer};
pub use store::{SizingStore, SizingStoreError};
