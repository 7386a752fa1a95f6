//! Vertical placement of blocks inside a day column.
//!
//! Positions are percentages of the student's day window
//! (`day_start`..`day_end`), which is how the week grid draws them.

use serde::{Deserialize, Serialize};

use super::clock::time_to_hours;
use super::compiler::TimeBlock;

/// Offset and height of a block, both in percent of the day window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockPosition {
    pub top_percent: f64,
    pub height_percent: f64,
}

pub fn calculate_block_position(
    start: &str,
    end: &str,
    day_start: &str,
    day_end: &str,
) -> BlockPosition {
    let day_start_hours = time_to_hours(day_start);
    let total_hours = time_to_hours(day_end) - day_start_hours;

    let start_hours = time_to_hours(start);
    let end_hours = time_to_hours(end);

    BlockPosition {
        top_percent: (start_hours - day_start_hours) / total_hours * 100.0,
        height_percent: (end_hours - start_hours) / total_hours * 100.0,
    }
}

/// Share of the day window covered by `start..end`, rounded half-up.
///
/// Degenerate windows or malformed times come out as 0.
pub fn calculate_percentage(start: &str, end: &str, day_start: &str, day_end: &str) -> i64 {
    let height = calculate_block_position(start, end, day_start, day_end).height_percent;
    round_half_up(height)
}

/// Sum of the rounded per-block percentages, as shown on a day card.
pub fn day_load_percentage(blocks: &[TimeBlock], day_start: &str, day_end: &str) -> i64 {
    blocks
        .iter()
        .map(|b| calculate_percentage(&b.start, &b.end, day_start, day_end))
        .sum()
}

fn round_half_up(value: f64) -> i64 {
    if value.is_finite() {
        (value + 0.5).floor() as i64
    } else {
        0
    }
}
