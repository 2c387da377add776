//! Synchronous orchestrator: dispatches actions through the reducer and
//! executes the resulting effects against host-supplied ports.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use gridfit_domain::column::ColumnSpec;

use crate::action::Action;
use crate::cache::ExtentCache;
use crate::effect::Effect;
use crate::measure::{MeasureAllowances, MonoTextMeasurer, synthetic_extent};
use crate::ports::{NaturalWidthProbe, RootFontSource, SizingStore, TextMeasurer};
use crate::reducer::reduce;
use crate::state::EngineState;
use crate::units::UnitConverter;

/// One table's layout engine. Owns the engine state, the unit cache, and
/// the ports; everything it does happens synchronously inside `dispatch`.
pub struct LayoutEngine {
    state: EngineState,
    units: UnitConverter,
    probe: Box<dyn NaturalWidthProbe>,
    store: Box<dyn SizingStore>,
    text: Box<dyn TextMeasurer>,
    allowances: MeasureAllowances,
    extents: ExtentCache,
    render_needed: bool,
}

impl LayoutEngine {
    pub fn new(
        font: Box<dyn RootFontSource>,
        probe: Box<dyn NaturalWidthProbe>,
        store: Box<dyn SizingStore>,
    ) -> Self {
        Self {
            state: EngineState::new(),
            units: UnitConverter::new(font),
            probe,
            store,
            text: Box::new(MonoTextMeasurer::default()),
            allowances: MeasureAllowances::default(),
            extents: ExtentCache::default(),
            render_needed: false,
        }
    }

    pub fn with_text_measurer(mut self, text: Box<dyn TextMeasurer>) -> Self {
        self.text = text;
        self
    }

    pub fn with_allowances(mut self, allowances: MeasureAllowances) -> Self {
        self.allowances = allowances;
        self
    }

    /// Table mount: restores whatever blob the store holds and initializes
    /// the layout. A failing store degrades to the default layout.
    pub fn mount(&mut self, columns: Vec<ColumnSpec>, container_width: f64) {
        let persisted = match self.store.load() {
            Ok(blob) => blob,
            Err(err) => {
                warn!(%err, "failed to load sizing overrides, using defaults");
                None
            }
        };
        let px_per_rem = self.units.px_per_rem();
        self.dispatch(Action::Init {
            columns,
            container_width,
            px_per_rem,
            persisted,
        });
    }

    pub fn dispatch(&mut self, action: Action) {
        let effects = reduce(&mut self.state, action);
        self.run_effects(effects);
    }

    /// Zoom or resolution changed: invalidate the unit cache and relayout
    /// with the fresh scale.
    pub fn zoom_changed(&mut self) {
        self.units.invalidate();
        let px_per_rem = self.units.px_per_rem();
        self.dispatch(Action::ZoomChanged { px_per_rem });
    }

    /// Synthetic measurement fast path for columns with a text accessor:
    /// header plus a bounded sample of row values, no rendered cells
    /// involved.
    pub fn report_text_sample(&mut self, column: &str, header: &str, values: &[String]) {
        let extent = synthetic_extent(self.text.as_ref(), &mut self.extents, header, values);
        if extent <= 0.0 {
            return;
        }
        let width = extent + self.allowances.total_px(self.units.px_per_rem());
        self.dispatch(Action::MeasureReport {
            column: column.to_string(),
            width,
        });
    }

    pub fn widths(&self) -> &HashMap<String, u32> {
        &self.state.widths
    }

    pub fn needs_hscroll(&self) -> bool {
        self.state.needs_hscroll
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// True once since the last call if any dispatched action changed the
    /// applied layout.
    pub fn take_render_needed(&mut self) -> bool {
        std::mem::take(&mut self.render_needed)
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Render => self.render_needed = true,
                Effect::PersistOverrides(overrides) => {
                    debug!(columns = overrides.len(), "persisting sizing overrides");
                    if let Err(err) = self.store.save(&overrides) {
                        warn!(%err, "failed to persist sizing overrides");
                    }
                }
                Effect::RequestMeasure { columns } => self.run_measure_pass(&columns),
            }
        }
    }

    /// One batched probe pass for all requested columns; results flow back
    /// in as `MeasureReport` actions with allowances applied.
    fn run_measure_pass(&mut self, columns: &[String]) {
        let results = self.probe.measure_batch(columns);
        let padding = self.allowances.total_px(self.units.px_per_rem());

        let mut reports = Vec::new();
        for (column, result) in columns.iter().zip(results) {
            match result {
                Some(raw) => reports.push(Action::MeasureReport {
                    column: column.clone(),
                    width: raw + padding,
                }),
                None => {
                    trace!(column = %column, "no renderable cells, leaving unmeasured");
                    if self.state.pending_auto_fit.as_deref() == Some(column.as_str()) {
                        self.state.pending_auto_fit = None;
                    }
                }
            }
        }
        for report in reports {
            let effects = reduce(&mut self.state, report);
            self.run_effects(effects);
        }
    }
}
