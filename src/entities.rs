/// All game entity types — pure data, no logic.

use crate::geometry::Rect;

/// Which half of a gate an obstacle segment is.  Carried explicitly rather
/// than inferred from the segment's y coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObstacleRole {
    /// Hangs down from the ceiling.
    Top,
    /// Rests on the ground line.
    Bottom,
}

/// The game session state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// World is laid out and rendered, waiting for the first jump.
    Ready,
    /// Physics runs every tick.
    Started,
    /// Frozen mid-flight; toggled back with the pause trigger.
    Paused,
    /// Terminal.  The next jump resets the world back to Ready.
    Over,
}

/// The player's bird: a rectangle plus vertical velocity in units/tick
/// (positive = falling).
#[derive(Clone, Debug, PartialEq)]
pub struct Bird {
    pub rect: Rect,
    pub velocity: i32,
}

/// One obstacle segment.  Segments always come in Top/Bottom pairs sharing
/// the same x — a "gate".  `scored` marks a Top segment whose gate the bird
/// has already been credited for.
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub rect: Rect,
    pub role: ObstacleRole,
    pub scored: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire world state.  Cloneable so pure update functions can return a
/// new copy without mutating the original.  Obstacles are kept in spawn
/// order, which is also left-to-right screen order.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldState {
    pub bird: Bird,
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Monotonic tick counter; only its parity matters (gravity applies on
    /// even ticks).  Survives a game reset.
    pub ticks: u64,
    pub phase: GamePhase,
}
