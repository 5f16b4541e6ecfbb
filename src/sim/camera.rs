//! 2D camera that trails the player vertically

use glam::Vec2;

use crate::consts::*;

/// Viewport transform: world `target` is drawn at screen `offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub target: Vec2,
    pub offset: Vec2,
    pub zoom: f32,
    /// Degrees
    pub rotation: f32,
}

impl Camera {
    /// Camera centred on the screen, looking slightly above `focus`
    pub fn looking_at(focus: Vec2) -> Self {
        Self {
            target: Vec2::new(focus.x, focus.y - CAMERA_START_LEAD),
            offset: Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
            zoom: 1.0,
            rotation: 0.0,
        }
    }

    /// First-order lag toward a point `CAMERA_LEAD` pixels above `player_y`
    pub fn follow(&mut self, player_y: f32) {
        self.target.y += (player_y - CAMERA_LEAD - self.target.y) * 4.0 * CAMERA_SPEED;
    }

    /// Map a world position to screen pixels
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        let rotated = Vec2::from_angle(self.rotation.to_radians()).rotate(world - self.target);
        rotated * self.zoom + self.offset
    }
}
