use std::collections::HashMap;

use gridfit_domain::column::ColumnSpec;
use gridfit_domain::overrides::PersistedSizing;

/// Events processed by the reducer, in arrival order.
///
/// Pixel values arrive pre-converted; the unit cache lives with the
/// orchestrator so the reducer never reads the environment.
#[derive(Debug, Clone)]
pub enum Action {
    /// Table mount: column configuration, initial container width, current
    /// unit scale, and whatever sizing blob the host restored.
    Init {
        columns: Vec<ColumnSpec>,
        container_width: f64,
        px_per_rem: f64,
        persisted: Option<PersistedSizing>,
    },
    /// Live width of the scroll container changed.
    ContainerResize(f64),
    /// Root font size or zoom changed; carries the refreshed unit scale.
    ZoomChanged { px_per_rem: f64 },
    /// The visible/ordered column list changed (chooser, drag-reorder).
    ColumnsChanged(Vec<ColumnSpec>),

    /// Pointer down on a resize affordance.
    ResizeStart { column: String, start_width: f64 },
    /// Pointer moved during an active drag; the host coalesces these to one
    /// per frame.
    ResizeMove(f64),
    /// Pointer released: commit the drag.
    ResizeEnd,
    /// Drag abandoned (lost capture, window blur, tab hidden): revert.
    ResizeCancel,

    /// Size a column to its measured content width.
    AutoFit { column: String },
    /// Programmatic resize through the same commit path as a drag.
    SetSize { column: String, width: f64 },
    ResetColumn { column: String },
    ResetAll,

    /// A measurement pass finished for one column (width already includes
    /// padding allowances).
    MeasureReport { column: String, width: f64 },
    /// Upstream table state echoing back applied sizes; accepted in every
    /// phase since it confirms this engine's own writes.
    SyncWidths(HashMap<String, u32>),
}

impl Action {
    /// Events that would let background recalculation clobber an in-flight
    /// drag. While a resize session is active these are dropped whole; the
    /// guard lives in one place, at the reducer entry.
    pub fn gated_while_resizing(&self) -> bool {
        matches!(
            self,
            Self::Init { .. }
                | Self::ContainerResize(_)
                | Self::ZoomChanged { .. }
                | Self::ColumnsChanged(_)
                | Self::ResizeStart { .. }
                | Self::AutoFit { .. }
                | Self::SetSize { .. }
                | Self::ResetColumn { .. }
                | Self::ResetAll
        )
    }
}
