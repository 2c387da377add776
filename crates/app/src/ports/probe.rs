/// Measures the intrinsic (content-fit) width of rendered columns.
///
/// Implementations temporarily relax width constraints on the sampled
/// elements, read their natural extent, and restore the constraints for
/// the whole batch at once, so the environment performs a single layout
/// pass instead of one per column. `None` means no renderable cells exist
/// for that column; callers must treat it as "unmeasured", never as zero
/// width.
#[cfg_attr(test, mockall::automock)]
pub trait NaturalWidthProbe {
    fn measure_batch(&mut self, columns: &[String]) -> Vec<Option<f64>>;
}

/// Reports the current root font size in pixels. Queried lazily and cached
/// by the unit converter until a zoom change invalidates it.
#[cfg_attr(test, mockall::automock)]
pub trait RootFontSource {
    fn root_font_px(&self) -> f64;
}

/// Turns a string into its rendered pixel extent. The synthetic measurement
/// fast path runs entirely on this, with no dependency on visible elements.
pub trait TextMeasurer {
    fn text_px(&self, text: &str) -> f64;
}
