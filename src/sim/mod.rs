//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod boxes;
pub mod camera;
pub mod collision;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use boxes::{BoxField, FallingBox};
pub use camera::Camera;
pub use collision::{Contacts, Direction};
pub use player::Player;
pub use rect::{Nudge, Rect, nudge_out};
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
