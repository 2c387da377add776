//! Drag lifecycle: session capture, live move, commit, cancel.

use gridfit_domain::overrides::recompute_on_commit;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{EngineState, ResizePhase, ResizeSession};

pub fn reduce_resize(state: &mut EngineState, action: &Action) -> Option<Vec<Effect>> {
    match action {
        Action::ResizeStart {
            column,
            start_width,
        } => Some(start(state, column, *start_width)),
        Action::ResizeMove(width) => Some(live_move(state, *width)),
        Action::ResizeEnd => Some(end(state)),
        Action::ResizeCancel => Some(cancel(state)),
        _ => None,
    }
}

fn start(state: &mut EngineState, column: &str, start_width: f64) -> Vec<Effect> {
    if state.spec(column).is_none() {
        return vec![];
    }
    let snapshot = state.snapshot();
    let min_width_px = state.drag_floor(column);
    let max_width_px = state.drag_ceiling(column);
    state.phase = ResizePhase::Resizing(ResizeSession {
        column: column.to_string(),
        start_width,
        current_width: start_width,
        min_width_px,
        max_width_px,
        snapshot,
    });
    vec![]
}

/// Updates only the dragged column's live width; everything else holds
/// still until the commit.
fn live_move(state: &mut EngineState, width: f64) -> Vec<Effect> {
    let ResizePhase::Resizing(session) = &mut state.phase else {
        return vec![];
    };
    let clamped = width.clamp(session.min_width_px, session.max_width_px);
    session.current_width = clamped;
    let column = session.column.clone();

    state.widths.insert(column, clamped.floor() as u32);
    state.needs_hscroll = state.occupied_width() > state.container_width;
    vec![Effect::Render]
}

fn end(state: &mut EngineState) -> Vec<Effect> {
    let ResizePhase::Resizing(session) = std::mem::take(&mut state.phase) else {
        return vec![];
    };
    let final_width = session
        .current_width
        .clamp(session.min_width_px, session.max_width_px);

    // The full override set is recomputed from the drag-start baseline and
    // swapped in atomically: rerunning the calculator at the occupied width
    // reproduces every column exactly, so nothing visibly jumps on release.
    let overrides = recompute_on_commit(&session.snapshot, &session.column, final_width);
    state.overrides = overrides.clone();

    for col in &session.snapshot {
        let width = if col.id == session.column {
            final_width
        } else {
            col.width
        };
        state.widths.insert(col.id.clone(), width.floor() as u32);
    }
    state.needs_hscroll = state.occupied_width() > state.container_width;

    vec![Effect::PersistOverrides(overrides), Effect::Render]
}

/// Abandoned drag: the column snaps back to where it started and no
/// override is committed.
fn cancel(state: &mut EngineState) -> Vec<Effect> {
    let ResizePhase::Resizing(session) = std::mem::take(&mut state.phase) else {
        return vec![];
    };
    state
        .widths
        .insert(session.column, session.start_width.floor() as u32);
    state.needs_hscroll = state.occupied_width() > state.container_width;
    vec![Effect::Render]
}
