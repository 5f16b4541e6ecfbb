//! Player versus world collision detection and response
//!
//! Every contact is resolved by stepping the player out of the obstacle in
//! small fixed increments (see `rect::nudge_out`). The side of a box the
//! player hit is tagged by the direction the player was travelling, not by
//! which face is geometrically closest.

use glam::Vec2;

use super::boxes::FallingBox;
use super::player::Player;
use super::rect::{Rect, nudge_out};
use crate::consts::*;

/// Which resolution branch a contact took
///
/// `Left`/`Right` are side hits (the player is pushed left/right out of the
/// box). `Up` means the player landed on a box top while falling; `Down`
/// means the player was moving up (or not falling) into a box, or is
/// standing on the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    /// Unit displacement applied per nudge step
    pub fn nudge_step(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -VERTICAL_NUDGE),
            Direction::Down => Vec2::new(0.0, VERTICAL_NUDGE),
            Direction::Right => Vec2::new(HORIZONTAL_NUDGE, 0.0),
            Direction::Left => Vec2::new(-HORIZONTAL_NUDGE, 0.0),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// Contact summary accumulated over one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    /// Player may jump this tick
    pub can_jump: bool,
    /// A box pushed the player downward before integration
    pub pushed_by_box: bool,
    /// Last resolved contact this tick
    pub direction: Option<Direction>,
    /// Player is pinned between a box and the ground
    pub crushed: bool,
}

/// Push the player down out of any box that has fallen into it
///
/// Runs after the boxes move and before the player does. Returns true if any
/// box had to push.
pub fn push_from_boxes(player: &mut Player, boxes: &[FallingBox]) -> bool {
    let mut pushed = false;
    for b in boxes {
        if player.rect.overlaps(&b.rect) {
            nudge_out(&mut player.rect, &b.rect, Vec2::new(0.0, BOX_PUSH_NUDGE));
            player.vel.y = 0.0;
            pushed = true;
        }
    }
    pushed
}

/// Lift the player out of the ground
pub fn resolve_ground(player: &mut Player, ground: &Rect, contacts: &mut Contacts) {
    if !player.rect.overlaps(ground) {
        return;
    }
    nudge_out(&mut player.rect, ground, Vec2::new(0.0, -GROUND_NUDGE));
    player.vel.y = 0.0;
    contacts.can_jump = true;
    contacts.direction = Some(Direction::Down);
}

/// Classify a player-box contact
///
/// Undo this tick's horizontal displacement: if that clears the overlap the
/// hit came from the side, otherwise it was vertical.
pub fn contact_direction(player: &Player, obstacle: &Rect) -> Direction {
    let mut probe = player.rect;
    probe.x -= player.vel.x;
    if !probe.overlaps(obstacle) {
        if player.vel.x > 0.0 {
            Direction::Left
        } else {
            Direction::Right
        }
    } else if player.vel.y > 0.0 {
        Direction::Up
    } else {
        Direction::Down
    }
}

/// Step the player out of `obstacle` along `direction`
pub fn resolve_contact(player: &mut Player, obstacle: &Rect, direction: Direction) {
    nudge_out(&mut player.rect, obstacle, direction.nudge_step());
    if direction.is_vertical() {
        player.vel.y = 0.0;
    }
}

/// Resolve every box the player overlaps, in spawn order
pub fn resolve_boxes(player: &mut Player, boxes: &[FallingBox], contacts: &mut Contacts) {
    for b in boxes {
        if !player.rect.overlaps(&b.rect) {
            continue;
        }

        let direction = contact_direction(player, &b.rect);
        resolve_contact(player, &b.rect, direction);
        contacts.direction = Some(direction);

        if direction != Direction::Down {
            contacts.can_jump = true;
        }
        if contacts.pushed_by_box && direction == Direction::Down {
            contacts.crushed = true;
        }
    }
}
