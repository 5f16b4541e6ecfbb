//! Boxfall - A falling-box survival platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, boxes, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Tick gating and keyboard state
//! - `settings`: Player preferences

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{KeyBindings, Settings};

/// Game configuration constants
///
/// Speeds and accelerations are per tick, not per second.
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Wall-clock gap between ticks in seconds (`SIM_DT` rounds up in f32)
    pub const TICK_INTERVAL: f64 = 1.0 / 60.0;

    /// Logical screen size in pixels
    pub const SCREEN_WIDTH: f32 = 450.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Height of the ground strip visible at the bottom of the first screen
    pub const GROUND_MARGIN: f32 = 50.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 24.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const PLAYER_MAX_SPEED: f32 = 0.3;
    pub const PLAYER_ACCEL: f32 = 0.002;
    pub const PLAYER_JUMP_SPEED: f32 = 0.35;
    pub const PLAYER_FRICTION: f32 = 0.001;

    /// Downward acceleration applied to the player every tick
    pub const GRAVITY: f32 = 0.0005;

    /// Box fall speed range, in tenths of a pixel per tick
    pub const BOX_MIN_SPEED: u32 = 1;
    pub const BOX_MAX_SPEED: u32 = 3;
    /// Box edge length range (pixels)
    pub const BOX_MIN_SIZE: u32 = 30;
    pub const BOX_MAX_SIZE: u32 = 200;
    /// Box color channel range
    pub const BOX_MIN_CHANNEL: u8 = 30;
    pub const BOX_MAX_CHANNEL: u8 = 200;
    /// Seconds of simulation time between spawns
    pub const BOX_SPAWN_INTERVAL: f64 = 2.0;
    /// Boxes appear this many screens above the player
    pub const BOX_SPAWN_SCREENS: f32 = 3.0;

    /// Camera follow gain
    pub const CAMERA_SPEED: f32 = 0.0007;
    /// How far above the player the camera settles
    pub const CAMERA_LEAD: f32 = 150.0;
    /// Initial camera lift above the player centre
    pub const CAMERA_START_LEAD: f32 = 200.0;

    /// Penetration resolution steps (pixels per iteration)
    pub const GROUND_NUDGE: f32 = 0.01;
    pub const BOX_PUSH_NUDGE: f32 = 0.1;
    pub const VERTICAL_NUDGE: f32 = 0.01;
    pub const HORIZONTAL_NUDGE: f32 = 0.1;
    /// Safety cap for every nudge loop
    pub const MAX_NUDGE_ITERATIONS: u32 = 100_000;
}
