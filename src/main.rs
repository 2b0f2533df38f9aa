//! Ghost Town entry point
//!
//! Fixed-timestep frame loop: drain input, tick the simulation at 50 Hz, draw,
//! and hold the final frame briefly once the session ends.

use glam::IVec2;
use macroquad::input::{KeyCode, is_key_pressed, is_quit_requested, mouse_position, prevent_quit};
use macroquad::time::{get_fps, get_frame_time};
use macroquad::window::{Conf, next_frame};

use ghost_town::Settings;
use ghost_town::assets::Assets;
use ghost_town::consts::*;
use ghost_town::render;
use ghost_town::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

fn window_conf() -> Conf {
    Conf {
        window_title: "Ghost Town".to_owned(),
        window_width: FIELD_WIDTH,
        window_height: FIELD_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

/// Fixed-timestep pacing: whole substeps owed for this frame, bounded to
/// avoid the spiral of death; the remainder carries in the accumulator
fn substeps_for(accumulator: &mut f32, frame_dt: f32) -> u32 {
    *accumulator += frame_dt;
    let mut substeps = 0;
    while *accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
        *accumulator -= SIM_DT;
        substeps += 1;
    }
    substeps
}

fn pick_seed(settings: &Settings) -> u64 {
    settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    })
}

fn log_event(event: GameEvent, state: &GameState) {
    match event {
        GameEvent::Hit => log::info!("hit, life {:.1}", state.life),
        GameEvent::ShieldBroken => log::info!("shield absorbed a hit"),
        GameEvent::ShieldGained => log::info!("shield up"),
        GameEvent::OrbCollected => log::debug!("orb collected ({} banked)", state.collected_orbs),
        GameEvent::GameOver => log::info!("game over"),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Ghost Town starting");

    let settings = Settings::load();
    let assets = match Assets::load(&settings.assets_dir).await {
        Ok(assets) => assets,
        Err(e) => {
            log::error!(
                "failed to load sprites from {}/: {e:?}",
                settings.assets_dir
            );
            return;
        }
    };

    let mut state = GameState::new(pick_seed(&settings), assets.spawn_masks());
    log::info!("session seed: {}", state.seed);

    // Route the window close button through the quit signal so the final
    // frame still gets its hold
    prevent_quit();

    let mut accumulator = 0.0f32;
    let mut hold_left = GAME_OVER_HOLD_SECS;
    let mut input = TickInput::default();

    loop {
        let frame_dt = get_frame_time().min(0.1);

        match state.phase {
            GamePhase::Running => {
                let (mx, my) = mouse_position();
                input.pointer = IVec2::new(mx as i32, my as i32);
                // One-shot signal: a display frame may run zero substeps, so
                // keep it latched until a tick actually consumes it
                input.quit |= is_quit_requested() || is_key_pressed(KeyCode::Escape);

                for _ in 0..substeps_for(&mut accumulator, frame_dt) {
                    for event in tick(&mut state, &input) {
                        log_event(event, &state);
                    }
                    input.quit = false;
                }
            }
            GamePhase::GameOver => {
                hold_left -= frame_dt;
                if hold_left <= 0.0 {
                    break;
                }
            }
        }

        render::draw_frame(&state, &assets, settings.show_fps.then(get_fps));
        next_frame().await;
    }

    log::info!(
        "session over after {} ticks, life {:.1}",
        state.time_ticks,
        state.life
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghost_town::sim::SpawnMasks;

    #[test]
    fn substep_remainder_carries_to_the_next_frame() {
        let mut acc = 0.0f32;
        // One 60 Hz frame is shorter than a substep
        assert_eq!(substeps_for(&mut acc, 1.0 / 60.0), 0);
        assert_eq!(substeps_for(&mut acc, 1.0 / 60.0), 1);
        assert!(acc < SIM_DT);
    }

    #[test]
    fn substeps_are_bounded_per_frame() {
        let mut acc = 0.0f32;
        assert_eq!(substeps_for(&mut acc, 1.0), MAX_SUBSTEPS);
    }

    #[test]
    fn quit_pressed_on_a_zero_substep_frame_still_ends_the_session() {
        let mut state = GameState::new(7, SpawnMasks::solid());
        let mut input = TickInput::default();
        let mut accumulator = 0.0f32;

        // At 60 Hz the first frame owes no substep, so a quit press there
        // must stay latched until a later tick consumes it
        for frame in 0..4 {
            input.quit |= frame == 0;
            for _ in 0..substeps_for(&mut accumulator, 1.0 / 60.0) {
                tick(&mut state, &input);
                input.quit = false;
            }
        }
        assert_eq!(state.phase, GamePhase::GameOver);
    }
}
