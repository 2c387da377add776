pub mod extent_cache;

pub use extent_cache::ExtentCache;
