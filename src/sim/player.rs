//! Player rectangle and its kinematics

use glam::Vec2;

use super::collision::Direction;
use super::rect::Rect;
use crate::consts::*;

/// The player-controlled rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub rect: Rect,
    /// Pixels per tick
    pub vel: Vec2,
}

impl Player {
    /// Player standing centred on top of the ground
    pub fn new() -> Self {
        Self {
            rect: Rect::new(
                SCREEN_WIDTH / 2.0 - PLAYER_WIDTH / 2.0,
                SCREEN_HEIGHT - GROUND_MARGIN - PLAYER_HEIGHT,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
            vel: Vec2::ZERO,
        }
    }

    /// Gravity, input acceleration and friction for one tick
    pub fn apply_forces(&mut self, left: bool, right: bool) {
        self.vel.y += GRAVITY;

        if left && self.vel.x.abs() < PLAYER_MAX_SPEED {
            self.vel.x -= PLAYER_ACCEL;
        }
        if right && self.vel.x.abs() < PLAYER_MAX_SPEED {
            self.vel.x += PLAYER_ACCEL;
        }

        self.apply_friction();
    }

    /// Decay horizontal speed toward zero, never overshooting it
    fn apply_friction(&mut self) {
        if self.vel.x > 0.0 {
            if self.vel.x < PLAYER_FRICTION {
                self.vel.x = 0.0;
            } else {
                self.vel.x -= PLAYER_FRICTION;
            }
        } else if self.vel.x < 0.0 {
            if self.vel.x > -PLAYER_FRICTION {
                self.vel.x = 0.0;
            } else {
                self.vel.x += PLAYER_FRICTION;
            }
        }
    }

    pub fn integrate(&mut self) {
        self.rect.translate(self.vel);
    }

    /// Hard clamp to the horizontal screen bounds (no bounce)
    pub fn clamp_to_screen(&mut self) {
        let max_x = SCREEN_WIDTH - self.rect.width;
        if self.rect.x < 0.0 {
            self.rect.x = 0.0;
        } else if self.rect.x > max_x {
            self.rect.x = max_x;
        }
    }

    /// Jump impulse, with a horizontal kick after a side contact
    pub fn jump(&mut self, last_contact: Option<Direction>) {
        self.vel.y = -PLAYER_JUMP_SPEED;
        // Kick follows the tag, not the wall: a Left tag (player moving right
        // into a box) adds to +x, toward the wall rather than away from it.
        match last_contact {
            Some(Direction::Left) => self.vel.x += PLAYER_JUMP_SPEED * 2.0,
            Some(Direction::Right) => self.vel.x -= PLAYER_JUMP_SPEED * 2.0,
            _ => {}
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
