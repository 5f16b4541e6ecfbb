//! Falling boxes: spawning, box-box and box-ground resolution, movement

use rand::Rng;

use super::rect::Rect;
use crate::consts::*;

/// A falling box obstacle
#[derive(Debug, Clone, PartialEq)]
pub struct FallingBox {
    pub id: u32,
    pub rect: Rect,
    /// RGBA, alpha always opaque for spawned boxes
    pub color: [u8; 4],
    /// Fall speed in pixels per tick (never negative)
    pub speed: f32,
}

impl FallingBox {
    pub fn new(id: u32, rect: Rect, color: [u8; 4], speed: f32) -> Self {
        Self {
            id,
            rect,
            color,
            speed,
        }
    }

    /// True once the box has been stopped (by the ground or a resting box)
    pub fn is_resting(&self) -> bool {
        self.speed == 0.0
    }
}

/// Ordered collection of every box spawned this session
///
/// Boxes are kept in spawn order and never removed during play.
#[derive(Debug, Clone, Default)]
pub struct BoxField {
    boxes: Vec<FallingBox>,
    next_id: u32,
}

impl BoxField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a random box three screens above `player_y`
    pub fn spawn(&mut self, player_y: f32, rng: &mut impl Rng) -> &FallingBox {
        let width = rng.random_range(BOX_MIN_SIZE..=BOX_MAX_SIZE) as f32;
        let height = rng.random_range(BOX_MIN_SIZE..=BOX_MAX_SIZE) as f32;
        let max_x = (SCREEN_WIDTH - width) as u32;
        let x = rng.random_range(0..=max_x) as f32;
        let y = player_y - SCREEN_HEIGHT * BOX_SPAWN_SCREENS;
        let speed = rng.random_range(BOX_MIN_SPEED..=BOX_MAX_SPEED) as f32 / 10.0;
        let color = [
            rng.random_range(BOX_MIN_CHANNEL..=BOX_MAX_CHANNEL),
            rng.random_range(BOX_MIN_CHANNEL..=BOX_MAX_CHANNEL),
            rng.random_range(BOX_MIN_CHANNEL..=BOX_MAX_CHANNEL),
            255,
        ];

        let rect = Rect::new(x, y, width, height);
        log::debug!("Spawned box {:?} speed {}", rect, speed);
        self.push(rect, color, speed)
    }

    /// Append a box at the tail, assigning the next id
    pub fn push(&mut self, rect: Rect, color: [u8; 4], speed: f32) -> &FallingBox {
        let id = self.next_id;
        self.next_id += 1;
        self.boxes.push(FallingBox::new(id, rect, color, speed.max(0.0)));
        &self.boxes[self.boxes.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FallingBox> {
        self.boxes.get(index)
    }

    /// Boxes in spawn order
    pub fn iter(&self) -> impl Iterator<Item = &FallingBox> {
        self.boxes.iter()
    }

    pub fn as_slice(&self) -> &[FallingBox] {
        &self.boxes
    }

    /// Clamp every overlapping pair to the slower of the two speeds
    ///
    /// Single pass: a chain of touching boxes may take several ticks to settle
    /// on its slowest member.
    pub fn resolve_box_collisions(&mut self) {
        let count = self.boxes.len();
        for i in 0..count {
            for j in (i + 1)..count {
                let (head, tail) = self.boxes.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];
                if a.rect.overlaps(&b.rect) {
                    let speed = a.speed.min(b.speed);
                    a.speed = speed;
                    b.speed = speed;
                }
            }
        }
    }

    /// Stop every box that overlaps the ground
    pub fn resolve_ground_collisions(&mut self, ground: &Rect) {
        for b in &mut self.boxes {
            if b.rect.overlaps(ground) {
                b.speed = 0.0;
            }
        }
    }

    /// Move every box down by its speed
    pub fn advance(&mut self) {
        for b in &mut self.boxes {
            b.rect.y += b.speed;
        }
    }
}
