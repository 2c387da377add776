//! Pure column width calculation.
//!
//! `resolve` turns configuration + user overrides + measured content widths
//! into per-column pixel constraints; `calculate` distributes the container
//! width across those constraints. Both are referentially pure: no clocks,
//! no caches, no side effects.

use std::collections::HashMap;

use crate::column::{ColumnSpec, SizingMode};
use crate::overrides::OverrideMap;

/// Absorbed before flooring so arithmetic noise at an exact pixel boundary
/// cannot drop a column by a whole pixel between two identical layouts.
const ROUND_EPS: f64 = 1e-6;

fn to_px(value: f64) -> u32 {
    (value + ROUND_EPS).floor() as u32
}

/// Per-column sizing constraints, fully resolved to pixels.
///
/// Invariant: `target >= floor`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInput {
    pub id: String,
    /// Width this column must never shrink below.
    pub floor: f64,
    /// Width this column gets when nothing is under pressure.
    pub target: f64,
    /// Weight for surplus distribution. Zero never grows past target.
    pub share: f64,
}

/// Result of one layout pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    /// Column id -> width in whole pixels.
    pub widths: HashMap<String, u32>,
    /// True when the container is narrower than the sum of floors and the
    /// host must enable horizontal scrolling.
    pub needs_hscroll: bool,
}

impl Layout {
    pub fn width(&self, id: &str) -> Option<u32> {
        self.widths.get(id).copied()
    }
}

/// Resolves each column's floor/target/share from configuration, the user
/// override set, and measured natural widths.
///
/// Floor precedence: user override minimum, else `max(measured, target)` for
/// no-truncate columns, else the configured minimum. An override's floor is
/// clamped up to the configured minimum so a stale blob can never produce an
/// unusably narrow column. In the two-tier override model the committed
/// width doubles as both floor and target; surplus is then distributed by
/// the override's share.
pub fn resolve(
    specs: &[ColumnSpec],
    overrides: &OverrideMap,
    natural: &HashMap<String, f64>,
    px_per_rem: f64,
) -> Vec<ColumnInput> {
    specs
        .iter()
        .map(|spec| {
            let config_floor = spec.min_width.to_px(px_per_rem);
            let config_target = spec.width.to_px(px_per_rem).max(config_floor);

            if let Some(ovr) = overrides.get(&spec.id) {
                let floor = ovr.min_width_px.max(config_floor);
                return ColumnInput {
                    id: spec.id.clone(),
                    floor,
                    target: floor,
                    share: ovr.share.max(0.0),
                };
            }

            let floor = match spec.sizing {
                SizingMode::NoTruncate => {
                    let measured = natural.get(&spec.id).copied().unwrap_or(0.0);
                    measured.max(config_target)
                }
                SizingMode::Truncate => config_floor,
            };

            ColumnInput {
                id: spec.id.clone(),
                floor,
                target: config_target.max(floor),
                share: spec.share,
            }
        })
        .collect()
}

/// Distributes `container_width` pixels across the given columns.
///
/// Three regimes, selected by comparing the container to the summed targets
/// and floors:
///
/// 1. Surplus: every column gets its target, leftover space goes to columns
///    proportional to share.
/// 2. Shrink: columns give up `target - floor` scaled by a common ratio.
/// 3. Overflow: every column is pinned at its floor and `needs_hscroll` is
///    set; shrinking below floor never happens here.
///
/// Widths are floored to whole pixels, so the rounded sum may fall short of
/// the container by at most one pixel per column.
pub fn calculate(columns: &[ColumnInput], container_width: f64) -> Layout {
    if columns.is_empty() || container_width <= 0.0 {
        return Layout::default();
    }

    let sum_floor: f64 = columns.iter().map(|c| c.floor).sum();
    let sum_target: f64 = columns.iter().map(|c| c.target).sum();

    if container_width >= sum_target {
        let surplus = container_width - sum_target;
        let sum_share: f64 = columns.iter().map(|c| c.share).sum();
        let widths = columns
            .iter()
            .map(|c| {
                let grow = if sum_share > 0.0 {
                    surplus * c.share / sum_share
                } else {
                    0.0
                };
                (c.id.clone(), to_px(c.target + grow))
            })
            .collect();
        return Layout {
            widths,
            needs_hscroll: false,
        };
    }

    if container_width >= sum_floor {
        let deficit = sum_target - container_width;
        let sum_give: f64 = columns.iter().map(|c| c.target - c.floor).sum();
        let ratio = if sum_give > 0.0 {
            (deficit / sum_give).min(1.0)
        } else {
            1.0
        };
        let widths = columns
            .iter()
            .map(|c| {
                let width = (c.target - (c.target - c.floor) * ratio).max(c.floor);
                (c.id.clone(), to_px(width))
            })
            .collect();
        return Layout {
            widths,
            needs_hscroll: false,
        };
    }

    // Overflow: pin at floors, the host scrolls horizontally.
    let widths = columns
        .iter()
        .map(|c| (c.id.clone(), to_px(c.floor)))
        .collect();
    Layout {
        widths,
        needs_hscroll: true,
    }
}
