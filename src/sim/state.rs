//! Game state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::boxes::BoxField;
use super::camera::Camera;
use super::collision::Direction;
use super::player::Player;
use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player was crushed; simulation no longer advances
    GameOver,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Highest climb above the ground line, in whole pixels
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Simulation time in seconds
    pub clock: f64,
    /// Simulation time of the last box spawn
    pub last_spawn: f64,
    pub phase: GamePhase,
    pub player: Player,
    pub ground: Rect,
    pub boxes: BoxField,
    pub camera: Camera,
    /// Jump eligibility computed by the last tick
    pub can_jump: bool,
    /// Most recent resolved contact (persists across ticks)
    pub last_direction: Option<Direction>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let player = Player::new();
        let camera = Camera::looking_at(player.rect.center());
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            time_ticks: 0,
            clock: 0.0,
            last_spawn: 0.0,
            phase: GamePhase::Playing,
            player,
            ground: Rect::new(0.0, SCREEN_HEIGHT - GROUND_MARGIN, SCREEN_WIDTH, SCREEN_HEIGHT),
            boxes: BoxField::new(),
            camera,
            can_jump: false,
            last_direction: None,
        }
    }

    /// Spawn a random box above the player using the run RNG
    pub fn spawn_box(&mut self) {
        self.boxes.spawn(self.player.rect.y, &mut self.rng);
        self.last_spawn = self.clock;
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Current climb above the ground line (may be negative while pushed down)
    pub fn height_above_ground(&self) -> f32 {
        self.ground.y - self.player.rect.bottom()
    }

    /// Raise the score to the current height if it is a new best
    pub fn update_score(&mut self) {
        let height = self.height_above_ground();
        if height > self.score as f32 {
            self.score = height as u32;
        }
    }
}
