//! Demo-mode input: a simple heuristic player

use super::state::GameState;
use super::tick::TickInput;
use crate::consts::SCREEN_WIDTH;

/// Falling boxes further above than this are ignored
const DANGER_DISTANCE: f32 = 300.0;
/// Extra horizontal clearance kept from a falling box
const DODGE_MARGIN: f32 = 8.0;
/// How close to a resting box the player must be before jumping onto it
const JUMP_REACH: f32 = 4.0;

/// Pick left/right/jump for the current state
///
/// Dodge the lowest falling box over the player's column first; otherwise
/// walk to the nearest resting box that sticks up above the player's feet and
/// jump onto it.
pub fn autopilot_input(state: &GameState) -> TickInput {
    let player = &state.player.rect;
    let center = player.center().x;
    let mut input = TickInput::default();

    let threat = state
        .boxes
        .iter()
        .filter(|b| !b.is_resting())
        .filter(|b| b.rect.bottom() <= player.bottom())
        .filter(|b| player.y - b.rect.bottom() < DANGER_DISTANCE)
        .filter(|b| {
            b.rect.x < player.right() + DODGE_MARGIN && b.rect.right() > player.x - DODGE_MARGIN
        })
        .max_by(|a, b| a.rect.bottom().total_cmp(&b.rect.bottom()));

    if let Some(threat) = threat {
        let room_left = threat.rect.x;
        let room_right = SCREEN_WIDTH - threat.rect.right();
        if room_left >= room_right {
            input.left = true;
        } else {
            input.right = true;
        }
        return input;
    }

    let step = state
        .boxes
        .iter()
        .filter(|b| b.is_resting() && b.rect.y < player.bottom())
        .min_by(|a, b| {
            let da = (a.rect.center().x - center).abs();
            let db = (b.rect.center().x - center).abs();
            da.total_cmp(&db)
        });

    if let Some(step) = step {
        if step.rect.center().x < center {
            input.left = true;
        } else {
            input.right = true;
        }
        let beside = player.right() >= step.rect.x - JUMP_REACH
            && player.x <= step.rect.right() + JUMP_REACH;
        input.jump = state.can_jump && beside;
    }

    input
}
