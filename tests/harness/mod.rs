use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use gridfit::app::LayoutEngine;
use gridfit::app::ports::{NaturalWidthProbe, RootFontSource, SizingStore, SizingStoreError};
use gridfit::domain::overrides::{OverrideMap, PersistedSizing};
use gridfit::{ColumnSpec, Rem};

pub const TEST_PX_PER_REM: f64 = 16.0;

pub struct FixedFont(pub f64);

impl RootFontSource for FixedFont {
    fn root_font_px(&self) -> f64 {
        self.0
    }
}

/// Probe that answers from a fixed script; columns missing from the script
/// measure as `None`.
#[derive(Default)]
pub struct ScriptedProbe {
    pub responses: HashMap<String, f64>,
}

impl ScriptedProbe {
    pub fn with(mut self, column: &str, width: f64) -> Self {
        self.responses.insert(column.to_string(), width);
        self
    }
}

impl NaturalWidthProbe for ScriptedProbe {
    fn measure_batch(&mut self, columns: &[String]) -> Vec<Option<f64>> {
        columns
            .iter()
            .map(|c| self.responses.get(c).copied())
            .collect()
    }
}

/// In-memory store shared between engine instances, standing in for the
/// host's durable storage across "reloads".
#[derive(Clone, Default)]
pub struct SharedStore {
    blob: Arc<Mutex<Option<OverrideMap>>>,
}

impl SharedStore {
    pub fn saved(&self) -> Option<OverrideMap> {
        self.blob.lock().unwrap().clone()
    }
}

impl SizingStore for SharedStore {
    fn load(&self) -> Result<Option<PersistedSizing>, SizingStoreError> {
        Ok(self
            .blob
            .lock()
            .unwrap()
            .clone()
            .map(PersistedSizing::Overrides))
    }

    fn save(&self, overrides: &OverrideMap) -> Result<(), SizingStoreError> {
        *self.blob.lock().unwrap() = Some(overrides.clone());
        Ok(())
    }

    fn storage_path(&self) -> PathBuf {
        PathBuf::from("shared-store")
    }
}

/// Floors {80, 80, 80} px and targets {150, 200, 150} px at 16 px/rem,
/// shares proportional to target: a status-grouped resource listing's
/// name/status/pool columns.
pub fn resource_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("name", Rem(5.0), Rem(9.375)).share(150.0),
        ColumnSpec::new("status", Rem(5.0), Rem(12.5)).share(200.0),
        ColumnSpec::new("pool", Rem(5.0), Rem(9.375)).share(150.0),
    ]
}

pub fn engine_with(store: SharedStore, probe: ScriptedProbe) -> LayoutEngine {
    LayoutEngine::new(
        Box::new(FixedFont(TEST_PX_PER_REM)),
        Box::new(probe),
        Box::new(store),
    )
}

/// Stable textual rendering of the applied layout, in configured column
/// order, for snapshot assertions.
pub fn render_layout(engine: &LayoutEngine, columns: &[ColumnSpec]) -> String {
    let mut lines: Vec<String> = columns
        .iter()
        .map(|spec| {
            let width = engine.widths().get(&spec.id).copied().unwrap_or(0);
            format!("{} {width}", spec.id)
        })
        .collect();
    lines.push(format!("hscroll {}", engine.needs_hscroll()));
    lines.join("\n")
}
