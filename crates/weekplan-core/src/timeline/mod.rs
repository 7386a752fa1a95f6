//! Day timelines.
//!
//! This module provides:
//! - Clock-time parsing for "HH:MM" strings
//! - The compiler from recurring activities to classified display blocks
//! - Percentage geometry used to place blocks in a day column

pub mod clock;
mod compiler;
mod layout;

pub use clock::{is_valid_time, time_to_hours, time_to_minutes};
pub use compiler::{
    compile_day_schedule, BlockKind, TimeBlock, MAX_SCHOOL_GAP_MINUTES, REINFORCEMENT_TITLE,
    SCHOOL_MARKER_COLOR, TUTOR_TITLE,
};
pub use layout::{calculate_block_position, calculate_percentage, day_load_percentage, BlockPosition};
