/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// world state.  No game logic is performed; this module only translates
/// state into terminal commands.  The 1200×800 logical playfield is scaled
/// onto whatever cell grid the terminal currently offers.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use flappy_bird::compute::{GROUND_HEIGHT, GROUND_LINE, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use flappy_bird::entities::{GamePhase, WorldState};
use flappy_bird::geometry::Rect;

/// Thickness of the grass strip on top of the dirt, in logical units.
const GRASS_HEIGHT: i32 = 20;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SKY: Color = Color::Cyan;
const C_DIRT: Color = Color::DarkYellow;
const C_GRASS: Color = Color::Green;
const C_BIRD: Color = Color::Red;
const C_COLUMN: Color = Color::DarkGreen;
const C_TEXT: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

// ── Logical → cell-grid scaling ───────────────────────────────────────────────

struct Grid {
    cols: u16,
    rows: u16,
}

impl Grid {
    fn col(&self, x: i32) -> u16 {
        (x as i64 * self.cols as i64 / PLAYFIELD_WIDTH as i64) as u16
    }

    fn row(&self, y: i32) -> u16 {
        (y as i64 * self.rows as i64 / PLAYFIELD_HEIGHT as i64) as u16
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &WorldState) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let grid = Grid { cols, rows };

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    // Sky, dirt, grass
    fill_rect(out, &grid, &Rect::new(0, 0, PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT), C_SKY)?;
    fill_rect(out, &grid, &Rect::new(0, GROUND_LINE, PLAYFIELD_WIDTH, GROUND_HEIGHT), C_DIRT)?;
    fill_rect(out, &grid, &Rect::new(0, GROUND_LINE, PLAYFIELD_WIDTH, GRASS_HEIGHT), C_GRASS)?;

    for obstacle in &state.obstacles {
        fill_rect(out, &grid, &obstacle.rect, C_COLUMN)?;
    }
    fill_rect(out, &grid, &state.bird.rect, C_BIRD)?;

    draw_hud(out, &grid, state)?;
    draw_controls_hint(out, &grid)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, grid.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Filled rectangles ─────────────────────────────────────────────────────────

/// Paint a logical rectangle as a block of background-coloured cells,
/// clipped to the playfield.  Rects that survive clipping are kept at least
/// one cell in each dimension so the bird never vanishes between rows.
fn fill_rect<W: Write>(out: &mut W, grid: &Grid, rect: &Rect, color: Color) -> std::io::Result<()> {
    if rect.right() <= 0 || rect.x >= PLAYFIELD_WIDTH || rect.bottom() <= 0 {
        return Ok(());
    }

    let x0 = grid.col(rect.x.max(0));
    let x1 = grid.col(rect.right().min(PLAYFIELD_WIDTH)).max(x0 + 1);
    let y0 = grid.row(rect.y.max(0));
    let y1 = grid.row(rect.bottom().min(PLAYFIELD_HEIGHT)).max(y0 + 1);
    if x0 >= grid.cols || y0 >= grid.rows {
        return Ok(());
    }

    let width = (x1.min(grid.cols) - x0) as usize;
    out.queue(style::SetBackgroundColor(color))?;
    for row in y0..y1.min(grid.rows) {
        out.queue(cursor::MoveTo(x0, row))?;
        out.queue(Print(" ".repeat(width)))?;
    }
    Ok(())
}

// ── HUD ───────────────────────────────────────────────────────────────────────

/// Phase-dependent overlay: a banner in Ready/Paused/Over, the running score
/// while Started.
fn draw_hud<W: Write>(out: &mut W, grid: &Grid, state: &WorldState) -> std::io::Result<()> {
    match state.phase {
        GamePhase::Started => {
            out.queue(cursor::MoveTo(1, 0))?;
            out.queue(style::SetBackgroundColor(C_SKY))?;
            out.queue(style::SetForegroundColor(C_TEXT))?;
            out.queue(Print(format!("Score: {}", state.score)))?;
        }
        GamePhase::Ready => {
            draw_banner(out, grid, "Click to start!")?;
        }
        GamePhase::Paused => {
            draw_banner(out, grid, "Paused")?;
        }
        GamePhase::Over => {
            draw_banner(out, grid, "Game Over")?;
            let score_line = format!("Score: {}", state.score);
            let row = grid.rows / 2;
            let col = (grid.cols / 2).saturating_sub(score_line.chars().count() as u16 / 2);
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(style::SetBackgroundColor(C_SKY))?;
            out.queue(style::SetForegroundColor(C_TEXT))?;
            out.queue(Print(&score_line))?;
        }
    }
    Ok(())
}

fn draw_banner<W: Write>(out: &mut W, grid: &Grid, text: &str) -> std::io::Result<()> {
    let row = (grid.rows / 2).saturating_sub(2);
    let col = (grid.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetBackgroundColor(C_SKY))?;
    out.queue(style::SetForegroundColor(C_TEXT))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, grid: &Grid) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, grid.rows.saturating_sub(1)))?;
    out.queue(style::SetBackgroundColor(C_DIRT))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("SPACE / Click : Flap   P : Pause   Q : Quit"))?;
    Ok(())
}
