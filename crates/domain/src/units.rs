use serde::{Deserialize, Serialize};

/// Length in the font-relative design unit (1 rem = root font size in px).
///
/// Column configuration is written in rem so layouts track the user's font
/// size and zoom level. Conversion to pixels happens through the app layer's
/// unit cache, which owns the current px-per-rem factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rem(pub f64);

impl Rem {
    pub fn to_px(self, px_per_rem: f64) -> f64 {
        self.0 * px_per_rem
    }
}
