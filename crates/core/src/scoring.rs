//! Score table, level curve, and gravity interval.

use blockfall_types::{
    BASE_FALL_MS, FALL_FLOOR_MS, FALL_STEP_MS, HARD_DROP_POINTS_PER_ROW, LINES_PER_LEVEL,
    LINE_SCORES,
};

/// Points for clearing `lines` rows at once at `level`.
///
/// `{1: 100, 2: 300, 3: 500, 4: 800}` multiplied by the level; anything
/// outside 1..=4 scores nothing.
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    if lines == 0 || lines as usize >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines as usize] * level
}

/// Level for a total line count. Starts at 1, +1 every 10 lines.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level: 1000 ms at level 1, 100 ms faster per
/// level, never below 100 ms.
pub fn fall_interval_ms(level: u32) -> u32 {
    BASE_FALL_MS
        .saturating_sub(level.saturating_sub(1).saturating_mul(FALL_STEP_MS))
        .max(FALL_FLOOR_MS)
}

/// Bonus for descending `rows` during a hard drop.
pub fn hard_drop_score(rows: u32) -> u32 {
    rows * HARD_DROP_POINTS_PER_ROW
}
