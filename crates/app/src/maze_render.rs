//! Rendering for the maze panel and the status bar.

use carver_app::app_loop::{AppMode, AppState};
use carver_app::{format_fingerprint, format_seed};
use carver_core::{Cell, Session, Snapshot};
use macroquad::prelude::*;

use crate::maze_layout::{FrameLayout, PanelRect};

const WALL_COLOR: Color = WHITE;
const WALL_THICKNESS: f32 = 1.0;
const VISITED_COLOR: Color = BLUE;
const BACKTRACKED_COLOR: Color = RED;
const CURRENT_COLOR: Color = GOLD;
const VISITED_INSET: f32 = 8.0;
const BACKTRACKED_INSET: f32 = 16.0;
const STATUS_FONT_SIZE: f32 = 20.0;

pub fn draw_frame(session: &Session, app_state: &AppState, run_seed: u64, layout: &FrameLayout) {
    let snapshot = session.snapshot();

    draw_maze_walls(&snapshot, layout.maze);
    if app_state.show_progress {
        draw_progress_overlay(&snapshot, layout.maze);
    }
    draw_status_bar(session, app_state, run_seed, layout.status);
}

fn draw_maze_walls(snapshot: &Snapshot<'_>, panel: PanelRect) {
    let grid = snapshot.grid;
    let cell_width = panel.width / grid.width() as f32;
    let cell_height = panel.height / grid.height() as f32;

    draw_rectangle_lines(panel.x, panel.y, panel.width, panel.height, WALL_THICKNESS, WALL_COLOR);

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let cell = Cell { x: x as i32, y: y as i32 };
            let left = panel.x + cell_width * x as f32;
            let top = panel.y + cell_height * y as f32;

            if x + 1 < grid.width() && grid.right_wall(cell) {
                draw_line(
                    left + cell_width,
                    top,
                    left + cell_width,
                    top + cell_height,
                    WALL_THICKNESS,
                    WALL_COLOR,
                );
            }
            if y + 1 < grid.height() && grid.down_wall(cell) {
                draw_line(
                    left,
                    top + cell_height,
                    left + cell_width,
                    top + cell_height,
                    WALL_THICKNESS,
                    WALL_COLOR,
                );
            }
        }
    }
}

fn draw_progress_overlay(snapshot: &Snapshot<'_>, panel: PanelRect) {
    let grid = snapshot.grid;
    let cell_width = panel.width / grid.width() as f32;
    let cell_height = panel.height / grid.height() as f32;

    for &cell in snapshot.visited {
        draw_cell_marker(panel, cell_width, cell_height, cell, VISITED_INSET, VISITED_COLOR);
    }
    for &cell in snapshot.backtracked {
        draw_cell_marker(
            panel,
            cell_width,
            cell_height,
            cell,
            BACKTRACKED_INSET,
            BACKTRACKED_COLOR,
        );
    }

    let radius = cell_width.min(cell_height) / 2.0;
    draw_circle(
        panel.x + cell_width * snapshot.current.x as f32 + cell_width / 2.0,
        panel.y + cell_height * snapshot.current.y as f32 + cell_height / 2.0,
        radius,
        CURRENT_COLOR,
    );
}

fn draw_cell_marker(
    panel: PanelRect,
    cell_width: f32,
    cell_height: f32,
    cell: Cell,
    inset: f32,
    color: Color,
) {
    draw_rectangle(
        panel.x + cell_width * cell.x as f32 + inset,
        panel.y + cell_height * cell.y as f32 + inset,
        cell_width - inset * 2.0,
        cell_height - inset * 2.0,
        color,
    );
}

fn draw_status_bar(session: &Session, app_state: &AppState, run_seed: u64, panel: PanelRect) {
    let status = format!(
        "{}  seed {}  {}",
        status_text(session, app_state),
        format_seed(run_seed),
        format_fingerprint(session.snapshot_hash()),
    );
    draw_text(&status, panel.x, panel.y + STATUS_FONT_SIZE, STATUS_FONT_SIZE, WHITE);
}

fn status_text(session: &Session, app_state: &AppState) -> String {
    if session.is_complete() {
        return "Complete (R=reset, F1=screenshot)".to_string();
    }
    match app_state.mode {
        AppMode::Animating => format!(
            "Carving every {:.2}s (P=pause, 1=slower, 2=faster)",
            app_state.frame_interval
        ),
        AppMode::Paused => "Paused (S=step, A=finish, P=animate, D=overlay)".to_string(),
    }
}
