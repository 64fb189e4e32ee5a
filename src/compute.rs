/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `WorldState` (and, where needed, an RNG handle) and returns a brand-new
/// `WorldState`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::entities::{Bird, GamePhase, Obstacle, ObstacleRole, WorldState};
use crate::geometry::Rect;

// ── Fixed world constants ────────────────────────────────────────────────────

pub const PLAYFIELD_WIDTH: i32 = 1200;
pub const PLAYFIELD_HEIGHT: i32 = 800;
pub const GROUND_HEIGHT: i32 = 120;
/// Row the bird's bottom edge rests on when grounded.
pub const GROUND_LINE: i32 = PLAYFIELD_HEIGHT - GROUND_HEIGHT;

pub const BIRD_SIZE: i32 = 20;
/// Fixed upward kick per jump, applied from a non-descending baseline.
pub const JUMP_IMPULSE: i32 = 10;
/// Velocity gain on every other tick.
pub const GRAVITY_STEP: i32 = 2;
/// Cap checked only at the moment gravity increments; a jump impulse may
/// push the magnitude past it instantaneously.
pub const TERMINAL_VELOCITY: i32 = 10;

pub const OBSTACLE_WIDTH: i32 = 100;
/// Vertical space left open between the two segments of a gate.
pub const OBSTACLE_GAP: i32 = 300;
pub const MIN_BOTTOM_HEIGHT: i32 = 50;
pub const BOTTOM_HEIGHT_SPREAD: i32 = 300;
pub const SCROLL_SPEED: i32 = 10;

pub const INITIAL_GATES: usize = 4;
/// Pitch between gates queued up at startup.
pub const INITIAL_GATE_PITCH: i32 = 300;
/// Pitch between gates once steady-state recycling begins.
pub const GATE_PITCH: i32 = 600;

// ── Constructors ─────────────────────────────────────────────────────────────

/// The bird's fixed starting rectangle: centered in the playfield, at rest.
pub fn initial_bird() -> Bird {
    Bird {
        rect: Rect::new(
            PLAYFIELD_WIDTH / 2 - BIRD_SIZE / 2,
            PLAYFIELD_HEIGHT / 2 - BIRD_SIZE / 2,
            BIRD_SIZE,
            BIRD_SIZE,
        ),
        velocity: 0,
    }
}

/// One new gate at horizontal position `x`: a Bottom segment whose random
/// height puts its foot on the ground line, and the Top segment filling the
/// sky above it minus the gap.
fn make_gate(x: i32, rng: &mut impl Rng) -> (Obstacle, Obstacle) {
    let bottom_height = MIN_BOTTOM_HEIGHT + rng.gen_range(0..BOTTOM_HEIGHT_SPREAD);
    let bottom = Obstacle {
        rect: Rect::new(
            x,
            PLAYFIELD_HEIGHT - bottom_height - GROUND_HEIGHT,
            OBSTACLE_WIDTH,
            bottom_height,
        ),
        role: ObstacleRole::Bottom,
        scored: false,
    };
    let top = Obstacle {
        rect: Rect::new(x, 0, OBSTACLE_WIDTH, PLAYFIELD_HEIGHT - bottom_height - OBSTACLE_GAP),
        role: ObstacleRole::Top,
        scored: false,
    };
    (bottom, top)
}

/// The startup gate field: gates queued off-screen to the right at the
/// initial pitch.
fn initial_gates(rng: &mut impl Rng) -> Vec<Obstacle> {
    let mut obstacles = Vec::with_capacity(INITIAL_GATES * 2);
    for i in 0..INITIAL_GATES {
        let x = PLAYFIELD_WIDTH + OBSTACLE_WIDTH + i as i32 * INITIAL_GATE_PITCH;
        let (bottom, top) = make_gate(x, rng);
        obstacles.push(bottom);
        obstacles.push(top);
    }
    obstacles
}

/// Build a fresh world: bird at rest in the center, 4 gates queued to the
/// right, waiting in Ready for the first jump.
pub fn init_world(rng: &mut impl Rng) -> WorldState {
    WorldState {
        bird: initial_bird(),
        obstacles: initial_gates(rng),
        score: 0,
        ticks: 0,
        phase: GamePhase::Ready,
    }
}

// ── Input-driven state transitions (pure) ────────────────────────────────────

/// Jump trigger — the only input that moves the state machine forward.
///
/// Ready → Started without touching the bird; Started applies the impulse;
/// Over rebuilds the world and lands in Ready.  A jump while Paused is a
/// no-op.  The RNG is only consulted on the Over → Ready reset, to respawn
/// the gate field.
pub fn jump(state: &WorldState, rng: &mut impl Rng) -> WorldState {
    match state.phase {
        GamePhase::Ready => WorldState {
            phase: GamePhase::Started,
            ..state.clone()
        },
        GamePhase::Started => {
            // A descending bird is first caught at zero, so rapid jumps net
            // exactly one fixed kick instead of stacking.
            let baseline = state.bird.velocity.min(0);
            WorldState {
                bird: Bird {
                    velocity: baseline - JUMP_IMPULSE,
                    ..state.bird.clone()
                },
                ..state.clone()
            }
        }
        GamePhase::Paused => state.clone(),
        // Full reset.  The tick counter carries over; only its parity
        // matters, so clearing it would change nothing visible.
        GamePhase::Over => WorldState {
            ticks: state.ticks,
            ..init_world(rng)
        },
    }
}

/// Pause trigger: toggles Started ↔ Paused, ignored in Ready and Over.
pub fn toggle_pause(state: &WorldState) -> WorldState {
    let phase = match state.phase {
        GamePhase::Started => GamePhase::Paused,
        GamePhase::Paused => GamePhase::Started,
        other => other,
    };
    WorldState {
        phase,
        ..state.clone()
    }
}

// ── Per-tick physics step (nearly pure — RNG is injected) ────────────────────

/// Advance the world by one tick.  Only a Started world moves; Ready, Paused
/// and Over worlds come back unchanged.  Stages run in fixed order, each over
/// the whole obstacle field: gravity, scroll, recycle, collision & scoring,
/// boundary check.
pub fn tick(state: &WorldState, rng: &mut impl Rng) -> WorldState {
    if state.phase != GamePhase::Started {
        return state.clone();
    }
    let ticks = state.ticks + 1;

    // ── 1. Gravity integration ───────────────────────────────────────────────
    let mut velocity = state.bird.velocity;
    if ticks % 2 == 0 && velocity < TERMINAL_VELOCITY {
        velocity += GRAVITY_STEP;
    }
    let mut bird = Bird {
        rect: Rect {
            y: state.bird.rect.y + velocity,
            ..state.bird.rect
        },
        velocity,
    };

    // ── 2. Scroll the gate field left ────────────────────────────────────────
    let mut obstacles: Vec<Obstacle> = state
        .obstacles
        .iter()
        .map(|o| Obstacle {
            rect: Rect {
                x: o.rect.x - SCROLL_SPEED,
                ..o.rect
            },
            ..o.clone()
        })
        .collect();

    // ── 3. Recycle gates that left the screen ────────────────────────────────
    // Each Top segment past the left edge spawns its continuation gate before
    // the pair is dropped, so the field never dips below 4 gates.
    let recycled = obstacles
        .iter()
        .filter(|o| o.rect.right() < 0 && o.role == ObstacleRole::Top)
        .count();
    for _ in 0..recycled {
        let rightmost = obstacles
            .iter()
            .map(|o| o.rect.x)
            .max()
            .unwrap_or(PLAYFIELD_WIDTH);
        let (bottom, top) = make_gate(rightmost + GATE_PITCH, rng);
        obstacles.push(bottom);
        obstacles.push(top);
    }
    obstacles.retain(|o| o.rect.right() >= 0);

    // ── 4. Collision & scoring ───────────────────────────────────────────────
    let mut score = state.score;
    let mut phase = GamePhase::Started;
    let half_bird = bird.rect.width / 2;
    let bird_mid = bird.rect.center_x();

    for obstacle in obstacles.iter_mut() {
        let gate_mid = obstacle.rect.center_x();
        if obstacle.role == ObstacleRole::Top
            && bird_mid > gate_mid - half_bird
            && bird_mid < gate_mid + half_bird
        {
            // Midpoints aligned: the bird is passing this gate.  The flag
            // keeps the credit to one point even if the window spans more
            // than one tick.
            if !obstacle.scored {
                obstacle.scored = true;
                score += 1;
            }
        } else if obstacle.rect.intersects(&bird.rect) {
            phase = GamePhase::Over;
            bird = resolve_wall_hit(&bird, obstacle);
        }
    }

    // ── 5. Boundary check ────────────────────────────────────────────────────
    let too_high = bird.rect.y < 0;
    let hits_ground = bird.rect.y + bird.velocity >= GROUND_LINE;
    if too_high || hits_ground {
        phase = GamePhase::Over;
    }
    if hits_ground {
        bird.rect.y = GROUND_LINE - bird.rect.height;
    }

    WorldState {
        bird,
        obstacles,
        score,
        ticks,
        phase,
    }
}

// ── Wall-hit resolution ──────────────────────────────────────────────────────

/// Cosmetic snap after the bird strikes a segment.  The phase is already
/// terminal, so only the bird's resting rectangle is adjusted; branches are
/// checked in priority order and the first match wins.
fn resolve_wall_hit(bird: &Bird, obstacle: &Obstacle) -> Bird {
    let mut rect = bird.rect;
    if rect.x <= obstacle.rect.x {
        // Hit the segment's side: pin the bird against its left face.
        rect.x = obstacle.rect.x - rect.width;
    } else if obstacle.role == ObstacleRole::Bottom {
        // Came down on a ground column: rest on its top edge.
        rect.y = obstacle.rect.y - rect.height;
    } else if rect.y < obstacle.rect.height {
        // Bumped the underside of a hanging segment.
        rect.y = obstacle.rect.height;
    }
    Bird {
        rect,
        velocity: bird.velocity,
    }
}
