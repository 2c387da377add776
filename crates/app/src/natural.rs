use std::collections::HashMap;

/// Largest observed content-fit width per column, in pixels.
///
/// Entries only ever grow within a session: once content is known to need N
/// pixels, offering fewer is never acceptable until an explicit remeasure
/// resets the entry.
#[derive(Debug, Clone, Default)]
pub struct NaturalWidths {
    map: HashMap<String, f64>,
}

impl NaturalWidths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.map.get(id).copied()
    }

    /// Max-merges a measurement. Returns true when the entry was created or
    /// grew, i.e. when layouts depending on it are now stale.
    pub fn merge(&mut self, id: &str, width: f64) -> bool {
        if width <= 0.0 {
            return false;
        }
        match self.map.get_mut(id) {
            Some(existing) if *existing >= width => false,
            Some(existing) => {
                *existing = width;
                true
            }
            None => {
                self.map.insert(id.to_string(), width);
                true
            }
        }
    }

    /// Drops one column's entry so the next measurement starts fresh.
    pub fn reset(&mut self, id: &str) {
        self.map.remove(id);
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn as_map(&self) -> &HashMap<String, f64> {
        &self.map
    }
}
