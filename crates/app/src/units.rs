use std::cell::Cell;

use crate::ports::RootFontSource;

/// Caches the px-per-rem factor so layout code never re-queries the
/// environment mid-pass. `invalidate` is the single entry point for zoom or
/// resolution changes; every derived pixel constant flows through here.
pub struct UnitConverter {
    source: Box<dyn RootFontSource>,
    cached: Cell<Option<f64>>,
}

impl UnitConverter {
    pub fn new(source: Box<dyn RootFontSource>) -> Self {
        Self {
            source,
            cached: Cell::new(None),
        }
    }

    pub fn px_per_rem(&self) -> f64 {
        if let Some(cached) = self.cached.get() {
            return cached;
        }
        let fresh = self.source.root_font_px();
        self.cached.set(Some(fresh));
        fresh
    }

    pub fn invalidate(&self) {
        self.cached.set(None);
    }
}
