mod frame_input;
mod maze_layout;
mod maze_render;
mod window_config;

use std::env;
use std::process;

use carver_app::app_loop::AppState;
use carver_app::cli::{generate_runtime_seed, resolve_options};
use carver_app::prefs_file::AppPrefs;
use carver_core::Session;
use macroquad::prelude::*;
use taffy::TaffyTree;

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    let args: Vec<String> = env::args().collect();
    let options = match resolve_options(&args, generate_runtime_seed()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("carver: {message}");
            process::exit(2);
        }
    };

    let mut session = match Session::new(options.width, options.height, options.seed.value()) {
        Ok(session) => session,
        Err(error) => {
            eprintln!("carver: {error:?}");
            process::exit(2);
        }
    };

    let prefs_path = AppPrefs::get_default_path();
    let mut saved_prefs =
        prefs_path.as_deref().and_then(|path| AppPrefs::load(path).ok()).unwrap_or_default();
    let mut app_state = AppState::from_prefs(&saved_prefs);

    let mut taffy = TaffyTree::new();
    let nodes = maze_layout::setup_layout(&mut taffy);

    loop {
        clear_background(BLACK);

        let keys_pressed = frame_input::capture_frame_input();
        app_state.tick(&mut session, &keys_pressed, get_frame_time());

        let layout = maze_layout::compute_frame_layout(
            &mut taffy,
            &nodes,
            screen_width(),
            screen_height(),
        );
        maze_render::draw_frame(&session, &app_state, options.seed.value(), &layout);

        if app_state.screenshot_requested {
            get_screen_data().export_png("screenshot.png");
        }

        let prefs = app_state.prefs();
        if prefs != saved_prefs {
            if let Some(path) = prefs_path.as_deref()
                && let Err(error) = prefs.write_atomic(path)
            {
                eprintln!("carver: could not save preferences: {error}");
            }
            saved_prefs = prefs;
        }

        next_frame().await
    }
}
