//! GameView: maps a session scene into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout (centered in the viewport):
//!
//! ```text
//! lvl 3   120/2500 xp        42s
//! [#####.....................]
//! ┌────────────────────────────┐  Powerups
//! │ tile   tile   tile   tile  │  1 Remove tile
//! │ ...                        │  2 Double tile
//! └────────────────────────────┘  3 Double all tiles
//! ```

use crate::core::{Board, PowerupState, Reconciliation};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{strings, Tile, BOARD_SIZE};

/// Rows above the board frame (status line + progress bar)
const HUD_H: u16 = 2;
/// Gap between the board frame and the powerup panel
const PANEL_GAP: u16 = 2;
const PANEL_W: u16 = 22;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Level/XP/timer line and transient message
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudView<'a> {
    pub level: u32,
    pub xp: u32,
    pub threshold: Option<u32>,
    pub xp_fraction: f32,
    pub seconds_left: u32,
    pub score: u32,
    pub message: Option<&'a str>,
}

/// One entry of the powerup panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerupRow<'a> {
    pub name: &'a str,
    pub state: PowerupState,
    pub armed: bool,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub board: &'a Board,
    /// Motions being animated and their progress in `[0, 1]`
    pub motion: Option<(&'a Reconciliation, f32)>,
    pub hud: HudView<'a>,
    pub powerups: &'a [PowerupRow<'a>],
}

/// What a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Tile { x: u8, y: u8 },
    Powerup(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    frame_x: u16,
    frame_y: u16,
    frame_w: u16,
    frame_h: u16,
    panel_x: u16,
}

/// A lightweight terminal renderer for the 2060 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits a five-digit value with padding and keeps tiles roughly square.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let n = BOARD_SIZE as u16;
        let frame_w = n * self.cell_w + 2;
        let frame_h = n * self.cell_h + 2;
        let total_w = frame_w + PANEL_GAP + PANEL_W;
        let total_h = HUD_H + frame_h;

        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(total_h) / 2;

        Layout {
            frame_x: start_x,
            frame_y: start_y + HUD_H,
            frame_w,
            frame_h,
            panel_x: start_x + frame_w + PANEL_GAP,
        }
    }

    /// Render the scene into an existing framebuffer.
    pub fn render_into(&self, scene: &Scene<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height, Cell::default());
        let layout = self.layout(viewport);

        self.draw_hud(fb, &scene.hud, layout);

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(
            fb,
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            border,
        );

        let bg = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            bg,
        );
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let (px, py) = self.cell_origin(layout, x, y);
                fb.put_char(px as u16 + self.cell_w / 2, py as u16 + self.cell_h / 2, '·', bg);
            }
        }

        // Still tiles first so sliding tiles are drawn over them.
        let mut moving = Vec::new();
        for (x, y, tile) in scene.board.tiles() {
            let offset = scene.motion.and_then(|(motions, progress)| {
                let m = motions.motion_from(x, y).filter(|m| !m.is_still())?;
                let ox = m.scaled(self.cell_w as f32).0 * progress;
                let oy = m.scaled(self.cell_h as f32).1 * progress;
                Some((ox.round() as i32, oy.round() as i32))
            });
            match offset {
                Some(o) => moving.push((x, y, tile, o)),
                None => self.draw_tile(fb, layout, x, y, tile, (0, 0)),
            }
        }
        for (x, y, tile, o) in moving {
            self.draw_tile(fb, layout, x, y, tile, o);
        }

        self.draw_panel(fb, scene.powerups, scene.hud.score, layout);

        if let Some(text) = scene.hud.message {
            let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
            let mid_y = layout.frame_y + layout.frame_h / 2;
            fb.put_str_centered(layout.frame_x, mid_y, layout.frame_w, text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &Scene<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    /// Resolve a click at terminal `(column, row)`.
    pub fn hit_test(
        &self,
        viewport: Viewport,
        powerup_count: usize,
        column: u16,
        row: u16,
    ) -> Option<Hit> {
        let layout = self.layout(viewport);

        let inner_x = column.checked_sub(layout.frame_x + 1)?;
        let inner_y = row.checked_sub(layout.frame_y + 1);
        if let Some(inner_y) = inner_y {
            let x = inner_x / self.cell_w;
            let y = inner_y / self.cell_h;
            if x < BOARD_SIZE as u16 && y < BOARD_SIZE as u16 {
                return Some(Hit::Tile {
                    x: x as u8,
                    y: y as u8,
                });
            }
        }

        // Panel rows: header, then one row per entry.
        if column >= layout.panel_x && column < layout.panel_x + PANEL_W {
            let i = row.checked_sub(layout.frame_y + 1)? as usize;
            if i < powerup_count {
                return Some(Hit::Powerup(i));
            }
        }
        None
    }

    /// Top-left terminal position of board cell `(x, y)`
    fn cell_origin(&self, layout: Layout, x: u8, y: u8) -> (i32, i32) {
        (
            (layout.frame_x + 1 + x as u16 * self.cell_w) as i32,
            (layout.frame_y + 1 + y as u16 * self.cell_h) as i32,
        )
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        x: u8,
        y: u8,
        tile: Tile,
        offset: (i32, i32),
    ) {
        let (ox, oy) = self.cell_origin(layout, x, y);
        let (px, py) = (ox + offset.0, oy + offset.1);

        // Clip to the board interior.
        let min_x = (layout.frame_x + 1) as i32;
        let min_y = (layout.frame_y + 1) as i32;
        let max_x = min_x + (BOARD_SIZE as u16 * self.cell_w) as i32;
        let max_y = min_y + (BOARD_SIZE as u16 * self.cell_h) as i32;

        let style = CellStyle::new(Rgb::new(255, 255, 255), tile_color(tile.value)).bold();
        for dy in 0..self.cell_h as i32 {
            for dx in 0..self.cell_w as i32 {
                let (cx, cy) = (px + dx, py + dy);
                if cx >= min_x && cx < max_x && cy >= min_y && cy < max_y {
                    fb.put_char(cx as u16, cy as u16, ' ', style);
                }
            }
        }

        let label = tile.value.to_string();
        let label_y = py + (self.cell_h / 2) as i32;
        let label_x = px + (self.cell_w as i32 - label.len() as i32).max(0) / 2;
        for (i, ch) in label.chars().enumerate() {
            let cx = label_x + i as i32;
            if cx >= min_x && cx < max_x && label_y >= min_y && label_y < max_y {
                fb.put_char(cx as u16, label_y as u16, ch, style);
            }
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, hud: &HudView<'_>, layout: Layout) {
        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::default();
        let y = layout.frame_y - HUD_H;
        let x = layout.frame_x;

        let xp = match hud.threshold {
            Some(t) => format!("{}/{} xp", hud.xp, t),
            None => format!("{}/∞ xp", hud.xp),
        };
        fb.put_str(x, y, &format!("lvl {}", hud.level), label);
        fb.put_str(x + 8, y, &xp, value);

        let secs = format!("{}s", hud.seconds_left);
        let secs_x = (x + layout.frame_w).saturating_sub(secs.len() as u16);
        fb.put_str(secs_x, y, &secs, label);

        // Progress bar spans the frame width.
        let bar_w = layout.frame_w.saturating_sub(2);
        let filled = (hud.xp_fraction.clamp(0.0, 1.0) * bar_w as f32).round() as u16;
        let on = CellStyle::new(Rgb::from_hsl(98.0, 83.0, 40.0), Rgb::new(0, 0, 0));
        let off = CellStyle::new(Rgb::new(70, 70, 80), Rgb::new(0, 0, 0)).dim();
        fb.put_char(x, y + 1, '[', value);
        for i in 0..bar_w {
            let (ch, style) = if i < filled { ('█', on) } else { ('·', off) };
            fb.put_char(x + 1 + i, y + 1, ch, style);
        }
        fb.put_char(x + 1 + bar_w, y + 1, ']', value);
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        rows: &[PowerupRow<'_>],
        score: u32,
        layout: Layout,
    ) {
        let header = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let available = CellStyle::new(Rgb::new(200, 240, 180), Rgb::new(0, 0, 0)).bold();
        let unavailable = CellStyle::new(Rgb::new(110, 110, 110), Rgb::new(0, 0, 0)).dim();

        let x = layout.panel_x;
        let mut y = layout.frame_y;
        fb.put_str(x, y, strings::POWERUPS_HEADER, header);

        for (i, row) in rows.iter().enumerate() {
            y += 1;
            let style = match row.state {
                PowerupState::Available => available,
                PowerupState::Spent | PowerupState::Locked => unavailable,
            };
            let marker = if row.armed { '*' } else { ' ' };
            fb.put_str(x, y, &format!("{}{} {}", marker, i + 1, row.name), style);
        }

        y += 2;
        fb.put_str(x, y, "Score", header);
        fb.put_str(x + 6, y, &score.to_string(), CellStyle::default());

        if rows.iter().any(|r| r.armed) {
            fb.put_str(x, y + 2, strings::PICK_TILE, header);
        }
    }
}

/// `hsl(98, 83%, 20 + min(20, 2*log2(value))%)`
pub fn tile_color(value: u32) -> Rgb {
    let log2 = value.checked_ilog2().unwrap_or(0);
    Rgb::from_hsl(98.0, 83.0, 20.0 + (2 * log2).min(20) as f32)
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_color_darkest_for_small_values() {
        // 2 -> 22% lightness, 1024 and up -> capped at 40%.
        assert_eq!(tile_color(2), Rgb::from_hsl(98.0, 83.0, 22.0));
        assert_eq!(tile_color(1024), Rgb::from_hsl(98.0, 83.0, 40.0));
        assert_eq!(tile_color(4096), tile_color(1024));
    }

    #[test]
    fn layout_centers_board_and_panel() {
        let view = GameView::default();
        // frame 30x14, total 54x16
        let layout = view.layout(Viewport::new(60, 20));
        assert_eq!(layout.frame_w, 30);
        assert_eq!(layout.frame_h, 14);
        assert_eq!(layout.frame_x, 3);
        assert_eq!(layout.frame_y, 2 + HUD_H);
        assert_eq!(layout.panel_x, 3 + 30 + PANEL_GAP);
    }
}
