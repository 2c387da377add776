use std::collections::HashMap;

use gridfit_domain::column::{ColumnSpec, SizingMode};
use gridfit_domain::layout::{self, ColumnInput};
use gridfit_domain::overrides::{ColumnSnapshot, OverrideMap};

use crate::natural::NaturalWidths;

/// Fallback unit scale until the host reports one (CSS default root font).
pub const DEFAULT_PX_PER_REM: f64 = 16.0;

/// How far past the content-fit ceiling a drag may overshoot.
pub const RESIZE_OVERSHOOT_PX: f64 = 32.0;

/// Ephemeral drag state; exists only between `ResizeStart` and
/// `ResizeEnd`/`ResizeCancel`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    pub column: String,
    pub start_width: f64,
    pub current_width: f64,
    /// Narrowest the drag may go.
    pub min_width_px: f64,
    /// Widest the drag may go: content fit plus a small overshoot, or
    /// unbounded when the column was never measured.
    pub max_width_px: f64,
    /// Every column's width and floor at drag start. The commit recomputes
    /// all shares from this one consistent baseline.
    pub snapshot: Vec<ColumnSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResizePhase {
    #[default]
    Idle,
    Resizing(ResizeSession),
}

impl ResizePhase {
    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct EngineState {
    pub columns: Vec<ColumnSpec>,
    pub container_width: f64,
    pub px_per_rem: f64,
    pub overrides: OverrideMap,
    pub natural: NaturalWidths,
    /// Last applied layout, column id -> whole pixels.
    pub widths: HashMap<String, u32>,
    pub needs_hscroll: bool,
    pub phase: ResizePhase,
    /// Auto-fit waiting on a measurement round trip.
    pub pending_auto_fit: Option<String>,
}

impl EngineState {
    pub fn new() -> Self {
        Self {
            px_per_rem: DEFAULT_PX_PER_REM,
            ..Self::default()
        }
    }

    pub fn spec(&self, id: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn resolved_inputs(&self) -> Vec<ColumnInput> {
        layout::resolve(
            &self.columns,
            &self.overrides,
            self.natural.as_map(),
            self.px_per_rem,
        )
    }

    /// Recomputes and applies the layout from current constraints.
    pub fn relayout(&mut self) {
        let layout = layout::calculate(&self.resolved_inputs(), self.container_width);
        self.widths = layout.widths;
        self.needs_hscroll = layout.needs_hscroll;
    }

    /// Pixels the table currently occupies (sum of applied widths).
    pub fn occupied_width(&self) -> f64 {
        self.widths.values().map(|w| f64::from(*w)).sum()
    }

    /// Captures every column's current width and effective floor. Taken once
    /// at drag start so the commit sees a single consistent baseline.
    pub fn snapshot(&self) -> Vec<ColumnSnapshot> {
        self.resolved_inputs()
            .into_iter()
            .map(|input| {
                let width = self
                    .widths
                    .get(&input.id)
                    .map_or(input.target, |w| f64::from(*w));
                ColumnSnapshot {
                    id: input.id,
                    width,
                    floor: input.floor,
                }
            })
            .collect()
    }

    /// Floor for an active drag: the configured constraints, deliberately
    /// ignoring any previous override so the user can pull a column back
    /// below where they last put it.
    pub fn drag_floor(&self, id: &str) -> f64 {
        let Some(spec) = self.spec(id) else {
            return 0.0;
        };
        let config_floor = spec.min_width.to_px(self.px_per_rem);
        let config_target = spec.width.to_px(self.px_per_rem).max(config_floor);
        match spec.sizing {
            SizingMode::NoTruncate => self
                .natural
                .get(id)
                .unwrap_or(0.0)
                .max(config_target),
            SizingMode::Truncate => config_floor,
        }
    }

    /// Ceiling for an active drag: content fit plus overshoot, unbounded if
    /// the column was never measured.
    pub fn drag_ceiling(&self, id: &str) -> f64 {
        self.natural
            .get(id)
            .map_or(f64::INFINITY, |n| n + RESIZE_OVERSHOOT_PX)
    }

    /// No-truncate columns whose floors depend on a measurement that has not
    /// happened yet.
    pub fn unmeasured_no_truncate(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.sizing == SizingMode::NoTruncate && self.natural.get(&c.id).is_none())
            .map(|c| c.id.clone())
            .collect()
    }
}
