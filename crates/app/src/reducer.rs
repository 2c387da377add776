//! Pure reducer: state transitions only, no I/O.
//!
//! # Purity Rules
//!
//! The reducer MUST NOT:
//! - Read clocks or the environment (unit scale arrives inside actions)
//! - Perform I/O (persistence and measurement are effects)
//! - Call back into the host
//!
//! This keeps every transition testable as plain data in, data out.

use crate::action::Action;
use crate::effect::Effect;
use crate::reducers::{reduce_resize, reduce_sizing};
use crate::state::EngineState;

pub fn reduce(state: &mut EngineState, action: Action) -> Vec<Effect> {
    // One guard, one place: an active drag outranks background
    // recalculation and competing gestures. Gated events are dropped whole,
    // leaving state untouched.
    if state.phase.is_resizing() && action.gated_while_resizing() {
        return vec![];
    }

    if let Some(effects) = reduce_resize(state, &action) {
        return effects;
    }
    if let Some(effects) = reduce_sizing(state, &action) {
        return effects;
    }

    reduce_table(state, action)
}

fn reduce_table(state: &mut EngineState, action: Action) -> Vec<Effect> {
    match action {
        Action::Init {
            columns,
            container_width,
            px_per_rem,
            persisted,
        } => {
            state.columns = columns;
            state.container_width = container_width;
            state.px_per_rem = px_per_rem;
            state.overrides = persisted
                .map(|blob| blob.into_overrides(&state.columns, px_per_rem))
                .unwrap_or_default();
            state.natural.clear();
            state.pending_auto_fit = None;
            state.relayout();

            let mut effects = vec![Effect::Render];
            let unmeasured = state.unmeasured_no_truncate();
            if !unmeasured.is_empty() {
                effects.push(Effect::RequestMeasure {
                    columns: unmeasured,
                });
            }
            effects
        }

        Action::ContainerResize(width) => {
            if (width - state.container_width).abs() < f64::EPSILON {
                return vec![];
            }
            state.container_width = width;
            state.relayout();
            vec![Effect::Render]
        }

        Action::ZoomChanged { px_per_rem } => {
            state.px_per_rem = px_per_rem;
            state.relayout();
            vec![Effect::Render]
        }

        Action::ColumnsChanged(columns) => {
            state.columns = columns;
            state.relayout();

            let mut effects = vec![Effect::Render];
            let unmeasured = state.unmeasured_no_truncate();
            if !unmeasured.is_empty() {
                effects.push(Effect::RequestMeasure {
                    columns: unmeasured,
                });
            }
            effects
        }

        // Upstream echo of this engine's own writes; applied quietly for
        // known columns, no relayout.
        Action::SyncWidths(widths) => {
            for (id, width) in widths {
                if state.spec(&id).is_some() {
                    state.widths.insert(id, width);
                }
            }
            vec![]
        }

        // Drag and sizing actions are consumed by the sub-reducers.
        _ => vec![],
    }
}
