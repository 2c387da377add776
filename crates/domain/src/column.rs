use serde::{Deserialize, Serialize};

use crate::units::Rem;

/// How a column behaves when the container cannot fit its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizingMode {
    /// The column may shrink below its natural content width.
    #[default]
    Truncate,
    /// The column's floor is raised to its measured content width, so content
    /// is never cut off. The container scrolls instead.
    NoTruncate,
}

/// Static configuration for one column, supplied once per table mount.
///
/// All widths are in rem so they track font size and zoom. User overrides
/// (in pixels, see [`crate::overrides`]) supersede these at layout time.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub id: String,
    /// Hard minimum. A column is never laid out narrower than this.
    pub min_width: Rem,
    /// Preferred width when space allows.
    pub width: Rem,
    /// Weight for distributing surplus space and absorbing deficit.
    /// Zero means the column never grows past its target.
    pub share: f64,
    pub sizing: SizingMode,
}

impl ColumnSpec {
    pub fn new(id: impl Into<String>, min_width: Rem, width: Rem) -> Self {
        Self {
            id: id.into(),
            min_width,
            width,
            share: 1.0,
            sizing: SizingMode::default(),
        }
    }

    pub fn share(mut self, share: f64) -> Self {
        self.share = share.max(0.0);
        self
    }

    pub fn no_truncate(mut self) -> Self {
        self.sizing = SizingMode::NoTruncate;
        self
    }
}
