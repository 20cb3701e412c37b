//! # Coordinate Mapper
//!
//! Maps `(performance, control)` onto percentage coordinates inside the
//! chart container. Performance runs left to right, control bottom to top,
//! both inside a 10 % padding frame:
//!
//! ```text
//! x = 10 + performance · 0.8
//! y = 90 − control · 0.8
//! ```
//!
//! Providers that would otherwise overlap exactly (the three hyperscalers)
//! carry a `group_index` and receive a small fixed nudge.

use serde::Serialize;

use crate::provider::Provider;
use crate::tier::TierTable;

/// Padding of the plot area, in percent.
pub const PADDING: f64 = 10.0;
/// Scale from score units to percent.
pub const SCALE: f64 = 0.8;
/// Y coordinate of control score 0.
pub const Y_ORIGIN: f64 = 90.0;
/// Stacking order of the first marker; later markers stack below.
pub const Z_INDEX_BASE: i32 = 50;

/// Nudges `(dx, dy)` indexed by `group_index`.
pub const GROUP_OFFSETS: [(f64, f64); 3] = [(1.5, 0.4), (0.0, -0.8), (-1.5, 0.4)];

/// A point in percent units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    /// Horizontal, percent from the left edge.
    pub x: f64,
    /// Vertical, percent from the top edge.
    pub y: f64,
}

/// Un-nudged coordinates for raw scores.
pub fn map_scores(performance: u8, control: u8) -> Position {
    Position {
        x: PADDING + f64::from(performance) * SCALE,
        y: Y_ORIGIN - f64::from(control) * SCALE,
    }
}

/// Coordinates for a provider, including its group nudge.
///
/// An absent or out-of-table `group_index` applies no nudge.
pub fn position(provider: &Provider) -> Position {
    let base = map_scores(provider.performance, provider.control);
    let (dx, dy) = provider
        .group_index
        .and_then(|i| GROUP_OFFSETS.get(usize::from(i)).copied())
        .unwrap_or((0.0, 0.0));
    Position {
        x: base.x + dx,
        y: base.y + dy,
    }
}

const MARKER_SIZES: TierTable<'static, u32> =
    TierTable::new(&[(0, 36), (2, 32), (5, 28), (9, 24), (i64::MAX, 20)]);

/// Marker diameter in pixels for the entry at `index` of the ranked list.
pub fn marker_size(index: usize) -> u32 {
    let index = i64::try_from(index).unwrap_or(i64::MAX);
    MARKER_SIZES.at_most(index).copied().unwrap_or(20)
}

/// Stacking order for the entry at `index`.
pub fn z_index(index: usize) -> i32 {
    Z_INDEX_BASE - i32::try_from(index).unwrap_or(i32::MAX - Z_INDEX_BASE)
}

/// A horizontal SEAL band behind the markers, in percent of the container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneBand {
    /// SEAL level drawn by this band.
    pub level: u8,
    /// Top edge.
    pub top: f64,
    /// Height.
    pub height: f64,
}

/// Zone bands from SEAL-4 (top) down to SEAL-0. Band edges coincide with
/// the y coordinate of each tier's threshold: SEAL-4 spans control 100..90,
/// SEAL-0 spans control 40 down to the bottom of the container.
pub const ZONE_BANDS: [ZoneBand; 5] = [
    ZoneBand { level: 4, top: 10.0, height: 8.0 },
    ZoneBand { level: 3, top: 18.0, height: 12.0 },
    ZoneBand { level: 2, top: 30.0, height: 16.0 },
    ZoneBand { level: 1, top: 46.0, height: 12.0 },
    ZoneBand { level: 0, top: 58.0, height: 32.0 },
];
