//! Infers a width x height shape from a flat pixel count.

use tracing::debug;

/// Dimension pairs of displays commonly driven by embedded hex arrays.
/// Checked before generic shapes so a count of 20480 resolves to 128x160
/// instead of a square-ish guess.
pub const COMMON_RESOLUTIONS: &[(u32, u32)] = &[
    (128, 128),
    (64, 64),
    (32, 32),
    (16, 16),
    (320, 240),
    (240, 320),
    (128, 160),
    (160, 128),
    (128, 64),
    (64, 128),
    (96, 64),
    (64, 96),
];

/// Maps a pixel count to `(width, height)` with `width, height >= 1`.
///
/// Candidates in priority order: known display resolutions whose product is
/// exactly `count`, a square of side floor(sqrt(count)), a single row, a
/// single column. The first candidate with an exact product wins. Should no
/// candidate match, the shape falls back to ceil(sqrt(count)) columns, and
/// finally to a single row, which is always exact.
pub fn resolve(count: usize) -> (u32, u32) {
    let n = count as u64;
    let side = (count as f64).sqrt();

    let mut candidates: Vec<(u32, u32)> = COMMON_RESOLUTIONS
        .iter()
        .copied()
        .filter(|&(w, h)| u64::from(w) * u64::from(h) == n)
        .collect();
    candidates.push((side.floor() as u32, side.floor() as u32));
    candidates.push((count as u32, 1));
    candidates.push((1, count as u32));

    for (w, h) in candidates {
        if w >= 1 && h >= 1 && u64::from(w) * u64::from(h) == n {
            debug!(count, width = w, height = h, "resolved dimensions");
            return (w, h);
        }
    }

    let w = side.ceil() as u32;
    let h = (count as f64 / f64::from(w.max(1))).ceil() as u32;
    if u64::from(w) * u64::from(h) == n {
        (w, h)
    } else {
        (count as u32, 1)
    }
}
