mod collision;
mod config;
mod error;
mod game;
mod hud;
mod input;
mod painter;
mod ring;
mod text;

use config::ArenaConfig;
use error::GameError;
use game::{ChampionshipWrestling, LoopControl};
use input::InputSystem;
use std::time::Instant;

/// Pick the largest integer window scale that fits the desktop
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem, config: &ArenaConfig) -> u32 {
    if let Some(scale) = config.window_scale {
        return scale;
    }

    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as u32;
            let usable_h = (display_mode.h as f32 * 0.9) as u32;

            let scale = (usable_w / config.canvas_width).min(usable_h / config.canvas_height);
            scale.clamp(1, 2)
        }
        Err(e) => {
            log::warn!("Could not detect monitor size ({}), using 1x scale", e);
            1
        }
    }
}

fn main() -> Result<(), GameError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ArenaConfig::load()?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window_scale = calculate_window_scale(&video_subsystem, &config);
    let window_width = config.canvas_width * window_scale;
    let window_height = config.canvas_height * window_scale;
    log::info!("Window scale: {}x ({}x{})", window_scale, window_width, window_height);

    let window = video_subsystem
        .window(&config.window_title, window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window
        .into_canvas()
        .present_vsync()
        .build()
        .map_err(|e| e.to_string())?;

    // Logical size keeps the scene in canvas coordinates at any window scale
    canvas
        .set_logical_size(config.canvas_width, config.canvas_height)
        .map_err(|e| e.to_string())?;

    let mut event_pump = sdl_context.event_pump()?;
    let input = InputSystem::new();
    let mut game = ChampionshipWrestling::new(&config);

    log::info!("Controls:");
    log::info!("  R   - Start match");
    log::info!("  ESC - Pause / resume");
    log::info!("  B   - Toggle zone overlay (debug)");
    log::info!("  F2  - Break announce table (debug)");

    let frame_duration = config.frame_duration();
    let mut last_frame = Instant::now();

    'running: loop {
        for action in input.poll_events(&mut event_pump) {
            if game.handle_action(action) == LoopControl::Quit {
                break 'running;
            }
        }

        let now = Instant::now();
        game.update(now - last_frame);
        last_frame = now;

        game.draw(&mut canvas)?;
        canvas.present();

        // Cap the frame rate when vsync is unavailable
        let elapsed = last_frame.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }

    if game.is_match_started() {
        log::info!(
            "Arena closed with the match {} at {}",
            if game.is_running() { "live" } else { "paused" },
            hud::format_clock(game.match_clock())
        );
    } else {
        log::info!("Arena closed before the bell");
    }
    Ok(())
}
