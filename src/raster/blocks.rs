//! Half-open block partition of a source axis onto a grid axis

use std::ops::Range;

/// Source pixel span covered by grid cell `index` along one axis
///
/// With `ratio = source / target` as a real number, the span is
/// `[floor(index · ratio), floor((index + 1) · ratio))`, except that the
/// final cell's upper bound is forced to `source`. Truncation is always
/// toward zero and bounds are half-open, so consecutive spans never
/// overlap and never skip a pixel.
///
/// Callers must uphold `0 < target ≤ source` and `index < target`;
/// [`super::downsample`] validates both before partitioning.
pub fn block_span(source: u32, target: u32, index: u32) -> Range<u32> {
    let ratio = f64::from(source) / f64::from(target);
    let lower = (f64::from(index) * ratio).floor() as u32;
    let upper = if index + 1 >= target {
        source
    } else {
        (f64::from(index + 1) * ratio).floor() as u32
    };
    lower..upper
}
