//! Non-drag sizing operations: auto-fit, programmatic set-size, resets, and
//! measurement reports.

use gridfit_domain::overrides::{OverrideMap, recompute_on_commit};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::EngineState;

pub fn reduce_sizing(state: &mut EngineState, action: &Action) -> Option<Vec<Effect>> {
    match action {
        Action::AutoFit { column } => Some(auto_fit(state, column)),
        Action::SetSize { column, width } => Some(commit_width(state, column, *width)),
        Action::ResetColumn { column } => Some(reset_column(state, column)),
        Action::ResetAll => Some(reset_all(state)),
        Action::MeasureReport { column, width } => Some(measure_report(state, column, *width)),
        _ => None,
    }
}

/// Commits an explicit width through the same path as a released drag:
/// snapshot, recompute every override, replace atomically.
fn commit_width(state: &mut EngineState, column: &str, width: f64) -> Vec<Effect> {
    if state.spec(column).is_none() {
        return vec![];
    }
    let final_width = width.max(state.drag_floor(column));
    let snapshot = state.snapshot();

    let overrides = recompute_on_commit(&snapshot, column, final_width);
    state.overrides = overrides.clone();

    for col in &snapshot {
        let applied = if col.id == column {
            final_width
        } else {
            col.width
        };
        state.widths.insert(col.id.clone(), applied.floor() as u32);
    }
    state.needs_hscroll = state.occupied_width() > state.container_width;

    vec![Effect::PersistOverrides(overrides), Effect::Render]
}

/// Auto-fit commits immediately when the content width is already known;
/// otherwise it parks the request and asks for one measurement pass.
fn auto_fit(state: &mut EngineState, column: &str) -> Vec<Effect> {
    if state.spec(column).is_none() {
        return vec![];
    }
    match state.natural.get(column) {
        Some(natural) => commit_width(state, column, natural),
        None => {
            state.pending_auto_fit = Some(column.to_string());
            vec![Effect::RequestMeasure {
                columns: vec![column.to_string()],
            }]
        }
    }
}

fn reset_column(state: &mut EngineState, column: &str) -> Vec<Effect> {
    if state.overrides.remove(column).is_none() {
        return vec![];
    }
    state.relayout();
    vec![
        Effect::PersistOverrides(state.overrides.clone()),
        Effect::Render,
    ]
}

fn reset_all(state: &mut EngineState) -> Vec<Effect> {
    if state.overrides.is_empty() {
        return vec![];
    }
    state.overrides.clear();
    state.relayout();
    vec![
        Effect::PersistOverrides(OverrideMap::new()),
        Effect::Render,
    ]
}

/// Measurement results merge into the natural width cache in every phase,
/// since max-merge cannot clobber a drag. Relayout only happens when idle.
fn measure_report(state: &mut EngineState, column: &str, width: f64) -> Vec<Effect> {
    let grew = state.natural.merge(column, width);
    if state.phase.is_resizing() {
        return vec![];
    }

    if state.pending_auto_fit.as_deref() == Some(column) {
        state.pending_auto_fit = None;
        if let Some(natural) = state.natural.get(column) {
            return commit_width(state, column, natural);
        }
        return vec![];
    }

    if grew {
        state.relayout();
        return vec![Effect::Render];
    }
    vec![]
}
