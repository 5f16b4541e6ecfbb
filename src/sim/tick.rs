//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::autopilot::autopilot_input;
use super::collision::{self, Contacts};
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left held
    pub left: bool,
    /// Move right held
    pub right: bool,
    /// Jump held
    pub jump: bool,
    /// Idle/demo mode - AI plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep
///
/// `dt` only drives the spawn timer; movement constants are per tick.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    let input = if input.idle_mode {
        autopilot_input(state)
    } else {
        *input
    };

    state.time_ticks += 1;
    state.clock += dt as f64;

    if state.clock - state.last_spawn > BOX_SPAWN_INTERVAL {
        state.spawn_box();
    }

    state.player.apply_forces(input.left, input.right);

    // Order matters: box-box, then ground, then movement
    state.boxes.resolve_box_collisions();
    state.boxes.resolve_ground_collisions(&state.ground);
    state.boxes.advance();

    let mut contacts = Contacts {
        pushed_by_box: collision::push_from_boxes(&mut state.player, state.boxes.as_slice()),
        ..Default::default()
    };

    state.player.integrate();
    state.player.clamp_to_screen();

    collision::resolve_ground(&mut state.player, &state.ground, &mut contacts);
    collision::resolve_boxes(&mut state.player, state.boxes.as_slice(), &mut contacts);

    state.can_jump = contacts.can_jump;
    if contacts.direction.is_some() {
        state.last_direction = contacts.direction;
    }

    if contacts.crushed {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Crushed after {} ticks, final score {}",
            state.time_ticks,
            state.score
        );
    }

    if input.jump && state.can_jump {
        state.player.jump(state.last_direction);
    }

    // Side nudges can carry the player past the screen edge
    state.player.clamp_to_screen();

    state.update_score();
    state.camera.follow(state.player.rect.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::Direction;
    use crate::sim::rect::Rect;

    const COLOR: [u8; 4] = [120, 60, 60, 255];

    #[test]
    fn test_resting_player_stays_grounded() {
        let mut state = GameState::new(1);
        state.player.vel.x = 0.05;

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.player.vel.y, 0.0);
        assert!(state.can_jump);
        assert_eq!(state.last_direction, Some(Direction::Down));
        assert!(state.player.vel.x < 0.05);
        assert!(0.05 - state.player.vel.x <= PLAYER_FRICTION + 1e-7);
        assert!(!state.player.rect.overlaps(&state.ground));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_boxes_spawn_on_timer() {
        let mut state = GameState::new(5);
        let input = TickInput::default();

        // Two seconds at 60 Hz is 120 ticks; spawning needs strictly more
        for _ in 0..120 {
            tick(&mut state, &input, SIM_DT);
        }
        assert!(state.boxes.len() <= 1);

        for _ in 0..10 {
            tick(&mut state, &input, SIM_DT);
        }
        assert_eq!(state.boxes.len(), 1);

        for _ in 0..120 {
            tick(&mut state, &input, SIM_DT);
        }
        assert_eq!(state.boxes.len(), 2);
    }

    #[test]
    fn test_box_comes_to_rest_on_ground() {
        let mut state = GameState::new(2);
        // Keep the player out of the way on the far right
        state.player.rect.x = SCREEN_WIDTH - PLAYER_WIDTH;
        state.last_spawn = f64::MAX / 2.0;
        let height = 80.0;
        state
            .boxes
            .push(Rect::new(0.0, state.ground.y - height - 20.0, 100.0, height), COLOR, 0.2);

        let input = TickInput::default();
        let mut ticks = 0;
        while state.boxes.get(0).is_some_and(|b| b.speed > 0.0) {
            tick(&mut state, &input, SIM_DT);
            ticks += 1;
            assert!(ticks < 1_000, "box never stopped");
        }

        let resting_y = state.boxes.get(0).map_or(0.0, |b| b.rect.y);
        let expected = state.ground.y - height;
        assert!(resting_y > expected);
        assert!(resting_y - expected <= 0.2 + 1e-3);

        // Stays put afterwards
        for _ in 0..50 {
            tick(&mut state, &input, SIM_DT);
        }
        assert_eq!(state.boxes.get(0).map(|b| b.rect.y), Some(resting_y));
        assert_eq!(state.boxes.get(0).map(|b| b.speed), Some(0.0));
    }

    #[test]
    fn test_sandwiched_player_is_crushed() {
        let mut state = GameState::new(3);
        state.last_spawn = f64::MAX / 2.0;
        let player = state.player.rect;
        // Box resting on the player's head, still falling
        state.boxes.push(
            Rect::new(player.x - 20.0, player.y - 60.0 + 0.05, 64.0, 60.0),
            COLOR,
            0.2,
        );

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.can_jump);
        assert_eq!(state.last_direction, Some(Direction::Down));

        // Frozen from now on
        let frozen_player = state.player.clone();
        let frozen_ticks = state.time_ticks;
        let frozen_box = state.boxes.get(0).cloned();
        for _ in 0..30 {
            tick(
                &mut state,
                &TickInput {
                    right: true,
                    jump: true,
                    ..Default::default()
                },
                SIM_DT,
            );
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.player, frozen_player);
        assert_eq!(state.time_ticks, frozen_ticks);
        assert_eq!(state.boxes.get(0).cloned(), frozen_box);
    }

    #[test]
    fn test_jump_from_ground() {
        let mut state = GameState::new(4);
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };

        // Spawn position touches the ground, so the first tick can jump
        tick(&mut state, &jump, SIM_DT);
        assert_eq!(state.player.vel.y, -PLAYER_JUMP_SPEED);
        assert_eq!(state.player.vel.x, 0.0);

        // Next tick is airborne: no ground contact, no jump
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(!state.can_jump);
        assert!(state.player.rect.bottom() < state.ground.y);
    }

    #[test]
    fn test_resting_player_hovers_between_ground_contacts() {
        let mut state = GameState::new(11);
        state.last_spawn = f64::MAX / 2.0;

        let mut contact_ticks = Vec::new();
        for t in 0..120 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            if state.can_jump {
                contact_ticks.push(t);
            }
            let gap = state.ground.y - state.player.rect.bottom();
            assert!((0.0..=GROUND_NUDGE + 1e-3).contains(&gap));
        }

        // Gravity needs a few ticks to close the gap left by the ground nudge
        assert_eq!(contact_ticks.first(), Some(&0));
        assert!(contact_ticks.len() > 10);
        for pair in contact_ticks.windows(2) {
            let gap = pair[1] - pair[0];
            assert!((5..=6).contains(&gap), "contact gap {gap}");
        }
    }

    #[test]
    fn test_held_jump_fires_on_next_ground_contact() {
        let mut state = GameState::new(12);
        state.last_spawn = f64::MAX / 2.0;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.can_jump);

        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        let mut airborne_ticks = 0;
        while state.player.vel.y >= 0.0 {
            tick(&mut state, &jump, SIM_DT);
            airborne_ticks += 1;
            assert!(airborne_ticks <= 6, "jump never fired");
        }
        assert!(airborne_ticks >= 5);
        assert_eq!(state.player.vel.y, -PLAYER_JUMP_SPEED);
    }

    /// Floating wall at x 200..260 with the player moving into it
    fn wall_state(seed: u64, player_x: f32, vel_x: f32) -> GameState {
        let mut state = GameState::new(seed);
        state.last_spawn = f64::MAX / 2.0;
        state.boxes.push(Rect::new(200.0, 100.0, 60.0, 200.0), COLOR, 0.0);
        state.player.rect = Rect::new(player_x, 150.0, PLAYER_WIDTH, PLAYER_HEIGHT);
        state.player.vel.x = vel_x;
        state
    }

    #[test]
    fn test_wall_jump_kicks_right_after_left_contact() {
        // Clear of the wall; integration carries the player into it
        let mut state = wall_state(6, 200.0 - PLAYER_WIDTH - 0.05, 0.2);

        let mut no_jump = state.clone();
        tick(&mut no_jump, &TickInput::default(), SIM_DT);
        assert_eq!(no_jump.last_direction, Some(Direction::Left));
        assert!(no_jump.can_jump);
        assert!(no_jump.player.rect.right() <= 200.0);

        tick(
            &mut state,
            &TickInput {
                jump: true,
                ..Default::default()
            },
            SIM_DT,
        );
        assert_eq!(state.last_direction, Some(Direction::Left));
        assert_eq!(state.player.vel.y, -PLAYER_JUMP_SPEED);
        let kick = state.player.vel.x - no_jump.player.vel.x;
        assert!((kick - 2.0 * PLAYER_JUMP_SPEED).abs() < 1e-5);
    }

    #[test]
    fn test_wall_jump_kicks_left_after_right_contact() {
        let mut state = wall_state(7, 260.0 + 0.05, -0.2);

        let mut no_jump = state.clone();
        tick(&mut no_jump, &TickInput::default(), SIM_DT);
        assert_eq!(no_jump.last_direction, Some(Direction::Right));
        assert!(no_jump.player.rect.x >= 260.0);

        tick(
            &mut state,
            &TickInput {
                jump: true,
                ..Default::default()
            },
            SIM_DT,
        );
        let kick = state.player.vel.x - no_jump.player.vel.x;
        assert!((kick + 2.0 * PLAYER_JUMP_SPEED).abs() < 1e-5);
    }

    #[test]
    fn test_player_stays_on_screen() {
        let mut state = GameState::new(8);
        let left = TickInput {
            left: true,
            ..Default::default()
        };
        for _ in 0..2_000 {
            tick(&mut state, &left, SIM_DT);
            assert!(state.player.rect.x >= 0.0);
        }
        assert_eq!(state.player.rect.x, 0.0);

        let right = TickInput {
            right: true,
            ..Default::default()
        };
        for _ in 0..4_000 {
            tick(&mut state, &right, SIM_DT);
            assert!(state.player.rect.x <= SCREEN_WIDTH - PLAYER_WIDTH);
        }
    }

    #[test]
    fn test_camera_tracks_player() {
        let mut state = GameState::new(10);
        state.last_spawn = f64::MAX / 2.0;
        let start = state.camera.target.y;
        tick(&mut state, &TickInput::default(), SIM_DT);
        let goal = state.player.rect.y - CAMERA_LEAD;
        // Starts 200 above the player centre, settles 150 above its top
        assert!(start < goal);
        assert!(state.camera.target.y > start);
        assert!(state.camera.target.y < goal);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                right: true,
                ..Default::default()
            },
            TickInput {
                jump: true,
                ..Default::default()
            },
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..600 {
            let input = &inputs[(i / 37) % inputs.len()];
            tick(&mut state1, input, SIM_DT);
            tick(&mut state2, input, SIM_DT);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.boxes.len(), state2.boxes.len());
        assert_eq!(state1.player, state2.player);
        assert_eq!(state1.score, state2.score);
    }

    #[test]
    fn test_idle_mode_survives_a_while() {
        let mut state = GameState::new(2024);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        for _ in 0..600 {
            tick(&mut state, &input, SIM_DT);
        }
        assert_eq!(state.time_ticks, 600);
        assert!(state.boxes.len() >= 4);
    }
}
