//! User sizing overrides and their persisted shapes.
//!
//! The canonical model is two-tier: each overridden column stores the floor
//! the user put it at (`minWidthPx`) plus the share it held at that moment.
//! An older deployment persisted a truncate/no-truncate preference per
//! column; that shape is still accepted on load and migrated, never written.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::column::{ColumnSpec, SizingMode};

/// One column's persisted sizing decision.
///
/// Serialized field names match the stored blob (`minWidthPx`), so blobs
/// written by earlier front ends round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnOverride {
    /// Floor in pixels; doubles as the committed width.
    pub min_width_px: f64,
    /// Share held at the moment of the override, so the column keeps
    /// participating proportionally in future surplus distribution.
    pub share: f64,
}

pub type OverrideMap = HashMap<String, ColumnOverride>;

/// Legacy per-column preference: an explicit width plus whether the user
/// accepted truncation below natural content width.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColumnPreference {
    pub mode: SizingMode,
    pub width: f64,
}

/// Either persisted shape. An empty object parses as an empty override map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PersistedSizing {
    Overrides(OverrideMap),
    Preferences(HashMap<String, ColumnPreference>),
}

impl PersistedSizing {
    /// Converts whichever shape was loaded into the canonical override map.
    ///
    /// Legacy preferences collapse into overrides: the committed width
    /// becomes the floor (clamped up to the configured minimum) and the
    /// share comes from configuration, since the preference model never
    /// recorded one. The `mode` flag is subsumed by the floor itself.
    /// Preferences for columns no longer configured are dropped.
    pub fn into_overrides(self, specs: &[ColumnSpec], px_per_rem: f64) -> OverrideMap {
        match self {
            Self::Overrides(map) => map,
            Self::Preferences(prefs) => specs
                .iter()
                .filter_map(|spec| {
                    let pref = prefs.get(&spec.id)?;
                    let config_floor = spec.min_width.to_px(px_per_rem);
                    Some((
                        spec.id.clone(),
                        ColumnOverride {
                            min_width_px: pref.width.max(config_floor),
                            share: spec.share,
                        },
                    ))
                })
                .collect(),
        }
    }
}

/// A column's width and floor as captured at drag start.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSnapshot {
    pub id: String,
    pub width: f64,
    pub floor: f64,
}

/// Recomputes the full override set after a committed resize.
///
/// The resized column's floor becomes its final width; every column's share
/// is then re-derived from its slack above floor relative to the total slack,
/// all from the single pre-drag snapshot. Replacing the override set with
/// this map and re-running the calculator at the same container width
/// reproduces every column's current pixel width exactly: resizing column A
/// must not visibly move column B at the instant of commit.
pub fn recompute_on_commit(
    snapshot: &[ColumnSnapshot],
    resized_id: &str,
    final_width: f64,
) -> OverrideMap {
    let resolved: Vec<(&str, f64, f64)> = snapshot
        .iter()
        .map(|col| {
            if col.id == resized_id {
                (col.id.as_str(), final_width, final_width)
            } else {
                (col.id.as_str(), col.width, col.floor)
            }
        })
        .collect();

    let extra_space: f64 = resolved.iter().map(|(_, w, f)| w - f).sum();

    resolved
        .into_iter()
        .map(|(id, width, floor)| {
            let share = if extra_space > 0.0 {
                (width - floor).max(0.0) / extra_space
            } else {
                0.0
            };
            (
                id.to_string(),
                ColumnOverride {
                    min_width_px: floor,
                    share,
                },
            )
        })
        .collect()
}
