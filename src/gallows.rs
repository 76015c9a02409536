//! Static gallows drawings.
//!
//! The loss threshold is derived from the stage count, so the drawing
//! table and the miss limit can never drift apart.

/// Gallows drawings indexed by accumulated misses.
///
/// Stage 0 is the empty scaffold; the final stage is the fully drawn
/// figure and corresponds to a lost game.
pub const GALLOWS_STAGES: [&str; 10] = [
    r"






=====",
    r"
    +
    |
    |
    |
    |
    |
=====",
    r"
 +--+
    |
    |
    |
    |
    |
=====",
    r"
 +--+
 |  |
    |
    |
    |
    |
=====",
    r"
 +--+
 |  |
 O  |
    |
    |
    |
=====",
    r"
 +--+
 |  |
 O  |
 |  |
    |
    |
=====",
    r"
 +--+
 |  |
 O  |
/|  |
    |
    |
=====",
    r"
 +--+
 |  |
 O  |
/|\ |
    |
    |
=====",
    r"
 +--+
 |  |
 O  |
/|\ |
/   |
    |
=====",
    r"
 +--+
 |  |
 O  |
/|\ |
/ \ |
    |
=====",
];

/// Maximum number of misses before the game is lost.
///
/// One less than the stage count, since stage 0 represents zero misses.
pub const MAX_MISSES: usize = GALLOWS_STAGES.len() - 1;

/// Returns the drawing for the given miss count, clamped to the final stage.
pub fn drawing_stage(index: usize) -> &'static str {
    GALLOWS_STAGES[index.min(MAX_MISSES)]
}
