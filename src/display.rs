//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! world. No game logic is performed; this module only translates board
//! pixels into terminal cells and queues the commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use invaders::{Alien, AlienSprite, Bounds, GameConfig, Projectile, World};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_SHIP: Color = Color::White;
const C_PROJECTILE: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

fn sprite_color(sprite: AlienSprite) -> Color {
    match sprite {
        AlienSprite::White => Color::White,
        AlienSprite::Cyan => Color::Cyan,
        AlienSprite::Magenta => Color::Magenta,
        AlienSprite::Yellow => Color::Yellow,
    }
}

// ── Board → terminal mapping ─────────────────────────────────────────────────

/// Terminal cells are roughly twice as tall as they are wide, so one cell
/// covers half a tile horizontally and a full tile vertically.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    cell_width: i32,
    cell_height: i32,
    /// Play-area size in cells
    cols: u16,
    rows: u16,
}

/// Rows above the play area (HUD + top border).
const TOP: u16 = 2;
/// Column of the left border.
const LEFT: u16 = 0;

impl Viewport {
    pub fn new(config: &GameConfig) -> Self {
        let cell_width = (config.tile_size / 2).max(1);
        let cell_height = config.tile_size.max(1);
        Viewport {
            cell_width,
            cell_height,
            cols: (config.board_width() / cell_width) as u16,
            rows: (config.board_height() / cell_height) as u16,
        }
    }

    /// Whole terminal footprint: border on each side, HUD on top, hint below.
    pub fn terminal_size(&self) -> (u16, u16) {
        (self.cols + 2, self.rows + TOP + 2)
    }

    /// Cell span covered by a box, clipped to the play area. `None` when
    /// nothing of it is on screen.
    fn cells(&self, b: &Bounds) -> Option<(u16, u16, u16)> {
        if b.bottom() <= 0 || b.right() <= 0 {
            return None;
        }
        let row = b.y.max(0) / self.cell_height;
        let first = b.x.max(0) / self.cell_width;
        let last = ((b.right() - 1) / self.cell_width).min(self.cols as i32 - 1);
        if row >= self.rows as i32 || first > last {
            return None;
        }
        Some((
            LEFT + 1 + first as u16,
            LEFT + 1 + last as u16,
            TOP + row as u16,
        ))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, view: &Viewport, world: &World) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, view)?;
    draw_hud(out, world)?;

    for alien in world.live_aliens() {
        draw_alien(out, view, alien)?;
    }
    for projectile in world.visible_projectiles() {
        draw_projectile(out, view, projectile)?;
    }
    draw_ship(out, view, world)?;
    draw_controls_hint(out, view)?;

    if world.is_game_over() {
        draw_game_over(out, view, world)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.flush()
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let horizontal = "─".repeat(view.cols as usize);
    let bottom = TOP + view.rows;
    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(LEFT, TOP - 1))?;
    out.queue(Print(format!("┌{}┐", horizontal)))?;
    out.queue(cursor::MoveTo(LEFT, bottom))?;
    out.queue(Print(format!("└{}┘", horizontal)))?;

    for row in TOP..bottom {
        out.queue(cursor::MoveTo(LEFT, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(LEFT + view.cols + 1, row))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, world: &World) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    if world.is_game_over() {
        out.queue(Print(format!("Game Over: {}", world.score)))?;
    } else {
        out.queue(Print(format!("Score: {:>8}", world.score)))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_ship<W: Write>(out: &mut W, view: &Viewport, world: &World) -> std::io::Result<()> {
    // Sprite: /▲▲\ stretched over the ship's width
    if let Some((first, last, row)) = view.cells(&world.ship.bounds) {
        let width = (last - first + 1) as usize;
        let body = if width >= 2 {
            format!("/{}\\", "▲".repeat(width - 2))
        } else {
            "▲".to_string()
        };
        out.queue(style::SetForegroundColor(C_SHIP))?;
        out.queue(cursor::MoveTo(first, row))?;
        out.queue(Print(body))?;
    }
    Ok(())
}

fn draw_alien<W: Write>(out: &mut W, view: &Viewport, alien: &Alien) -> std::io::Result<()> {
    // Sprite: <▼▼>
    if let Some((first, last, row)) = view.cells(&alien.bounds) {
        let width = (last - first + 1) as usize;
        let body = if width >= 2 {
            format!("<{}>", "▼".repeat(width - 2))
        } else {
            "▼".to_string()
        };
        out.queue(style::SetForegroundColor(sprite_color(alien.sprite)))?;
        out.queue(cursor::MoveTo(first, row))?;
        out.queue(Print(body))?;
    }
    Ok(())
}

fn draw_projectile<W: Write>(
    out: &mut W,
    view: &Viewport,
    projectile: &Projectile,
) -> std::io::Result<()> {
    if let Some((first, _, row)) = view.cells(&projectile.bounds) {
        out.queue(cursor::MoveTo(first, row))?;
        out.queue(style::SetForegroundColor(C_PROJECTILE))?;
        out.queue(Print("║"))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, TOP + view.rows + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   R : Restart   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, view: &Viewport, world: &World) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", world.score);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (score_line.as_str(), Color::Yellow),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let cx = LEFT + 1 + view.cols / 2;
    let start_row = (TOP + view.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
