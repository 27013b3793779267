use tui_2060::core::{reconcile, Board, PowerupState};
use tui_2060::term::{tile_color, GameView, Hit, HudView, PowerupRow, Scene, Viewport};
use tui_2060::types::{strings, Tile};

// With cell_w=7 and cell_h=3 the frame is 30x14. In a 60x20 viewport the
// block (HUD + frame + panel) is 54x16, so the frame's top-left corner sits at
// (3, 4), the first tile cell at (4, 5) and the panel at column 35.
const VP: Viewport = Viewport {
    width: 60,
    height: 20,
};

fn hud() -> HudView<'static> {
    HudView {
        level: 2,
        xp: 40,
        threshold: Some(1500),
        xp_fraction: 40.0 / 1500.0,
        seconds_left: 42,
        score: 96,
        message: None,
    }
}

fn rows() -> [PowerupRow<'static>; 3] {
    [
        PowerupRow {
            name: "Remove tile",
            state: PowerupState::Available,
            armed: true,
        },
        PowerupRow {
            name: "Double tile",
            state: PowerupState::Locked,
            armed: false,
        },
        PowerupRow {
            name: "Double all tiles",
            state: PowerupState::Locked,
            armed: false,
        },
    ]
}

fn row_text(fb: &tui_2060::term::FrameBuffer, y: u16) -> String {
    fb.row(y).iter().map(|c| c.ch).collect()
}

#[test]
fn term_view_renders_border_corners() {
    let board = Board::new();
    let rows = rows();
    let scene = Scene {
        board: &board,
        motion: None,
        hud: hud(),
        powerups: &rows,
    };
    let fb = GameView::default().render(&scene, VP);

    assert_eq!(fb.get(3, 4).unwrap().ch, '┌');
    assert_eq!(fb.get(32, 4).unwrap().ch, '┐');
    assert_eq!(fb.get(3, 17).unwrap().ch, '└');
    assert_eq!(fb.get(32, 17).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_tile_value_centered_in_cell() {
    let board = Board::new().with_cell(0, 0, Some(Tile::new(1, 128)));
    let rows = rows();
    let scene = Scene {
        board: &board,
        motion: None,
        hud: hud(),
        powerups: &rows,
    };
    let fb = GameView::default().render(&scene, VP);

    // Cell (0,0) spans columns 4..11, rows 5..8; label on the middle row.
    let label: String = (6..9).map(|x| fb.get(x, 6).unwrap().ch).collect();
    assert_eq!(label, "128");
    assert_eq!(fb.get(4, 5).unwrap().style.bg, tile_color(128));
}

#[test]
fn term_view_renders_hud_and_panel() {
    let board = Board::new();
    let rows = rows();
    let scene = Scene {
        board: &board,
        motion: None,
        hud: hud(),
        powerups: &rows,
    };
    let fb = GameView::default().render(&scene, VP);

    let hud_line = row_text(&fb, 2);
    assert!(hud_line.contains("lvl 2"));
    assert!(hud_line.contains("40/1500 xp"));
    assert!(hud_line.contains("42s"));

    assert!(row_text(&fb, 4).contains(strings::POWERUPS_HEADER));
    assert!(row_text(&fb, 5).contains("*1 Remove tile"));
    assert!(row_text(&fb, 6).contains(" 2 Double tile"));
    assert!(row_text(&fb, 9).contains("Score 96"));
    assert!(row_text(&fb, 11).contains(strings::PICK_TILE));
}

#[test]
fn term_view_shows_message_over_board() {
    let board = Board::new();
    let rows = rows();
    let mut hud = hud();
    hud.message = Some(strings::LEVEL_UP);
    let scene = Scene {
        board: &board,
        motion: None,
        hud,
        powerups: &rows,
    };
    let fb = GameView::default().render(&scene, VP);

    // Frame rows 4..18, middle row 11.
    assert!(row_text(&fb, 11).contains(strings::LEVEL_UP));
}

#[test]
fn term_view_slides_tile_along_motion() {
    let old = Board::new().with_cell(0, 0, Some(Tile::new(1, 2)));
    let new = Board::new().with_cell(3, 0, Some(Tile::new(1, 2)));
    let motions = reconcile(&old, &new);
    let rows = rows();

    let at = |progress: f32| {
        let scene = Scene {
            board: &old,
            motion: Some((&motions, progress)),
            hud: hud(),
            powerups: &rows,
        };
        GameView::default().render(&scene, VP)
    };

    // Label column for cell x is 4 + 7x + 3.
    let start = at(0.0);
    assert_eq!(start.get(7, 6).unwrap().ch, '2');

    let end = at(1.0);
    assert_eq!(end.get(28, 6).unwrap().ch, '2');
    assert_ne!(end.get(7, 6).unwrap().ch, '2');
}

#[test]
fn term_view_hit_test_maps_tiles_and_panel() {
    let view = GameView::default();

    assert_eq!(view.hit_test(VP, 3, 7, 6), Some(Hit::Tile { x: 0, y: 0 }));
    assert_eq!(view.hit_test(VP, 3, 25, 14), Some(Hit::Tile { x: 3, y: 3 }));
    assert_eq!(view.hit_test(VP, 3, 36, 5), Some(Hit::Powerup(0)));
    assert_eq!(view.hit_test(VP, 3, 36, 7), Some(Hit::Powerup(2)));

    // Border, header, beyond the catalog, outside everything.
    assert_eq!(view.hit_test(VP, 3, 3, 4), None);
    assert_eq!(view.hit_test(VP, 3, 36, 4), None);
    assert_eq!(view.hit_test(VP, 3, 36, 8), None);
    assert_eq!(view.hit_test(VP, 3, 0, 0), None);
}
