//! Content measurement: allowances, the synthetic text fast path, and the
//! default monospace text measurer.
//!
//! The slow path (probing rendered cells) lives behind
//! [`crate::ports::NaturalWidthProbe`]; this module owns everything the
//! engine computes itself.

use unicode_width::UnicodeWidthStr;

use gridfit_domain::units::Rem;

use crate::cache::ExtentCache;
use crate::ports::TextMeasurer;

/// Upper bound on row values sampled per synthetic measurement pass. Beyond
/// this the extent estimate stops improving while the pass keeps costing.
pub const SAMPLE_LIMIT: usize = 50;

/// Fixed space added on top of a raw measured extent: cell padding, the
/// resize affordance, and a small visual buffer. Configured in rem so the
/// allowances scale with zoom through the same unit cache as everything
/// else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureAllowances {
    pub cell_padding: Rem,
    pub handle: Rem,
    pub buffer: Rem,
}

impl Default for MeasureAllowances {
    fn default() -> Self {
        Self {
            cell_padding: Rem(1.0),
            handle: Rem(0.75),
            buffer: Rem(0.25),
        }
    }
}

impl MeasureAllowances {
    pub fn total_px(&self, px_per_rem: f64) -> f64 {
        self.cell_padding.to_px(px_per_rem)
            + self.handle.to_px(px_per_rem)
            + self.buffer.to_px(px_per_rem)
    }
}

/// Display-cell text measurer: extent = display width x glyph advance.
/// Wide (CJK) characters count double, matching how they render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonoTextMeasurer {
    pub advance_px: f64,
}

impl Default for MonoTextMeasurer {
    fn default() -> Self {
        Self { advance_px: 8.0 }
    }
}

impl TextMeasurer for MonoTextMeasurer {
    fn text_px(&self, text: &str) -> f64 {
        text.width() as f64 * self.advance_px
    }
}

/// Raw extent of a text column: the widest of the header and a bounded
/// sample of row values, memoized by text content so repeated values are
/// measured once. Allowances are not included; the caller pads.
pub fn synthetic_extent(
    measurer: &dyn TextMeasurer,
    memo: &mut ExtentCache,
    header: &str,
    values: &[String],
) -> f64 {
    let mut extent = memo.get_or_measure(header, |t| measurer.text_px(t));
    for value in values.iter().take(SAMPLE_LIMIT) {
        let width = memo.get_or_measure(value, |t| measurer.text_px(t));
        extent = extent.max(width);
    }
    extent
}
