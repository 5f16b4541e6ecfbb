//! Shape generation for 2D primitives

use super::vertex::{Vertex, colors, rgba8};
use crate::sim::{GameState, Rect};

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(r: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0) = (r.x, r.y);
    let (x1, y1) = (r.right(), r.bottom());
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// World-space vertices for the whole scene, back to front
///
/// Player first, then the ground, then every box in spawn order, so boxes
/// draw over the player as they do in play.
pub fn scene(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((state.boxes.len() + 2) * 6);
    vertices.extend(rect(&state.player.rect, colors::PLAYER));
    vertices.extend(rect(&state.ground, colors::GROUND));
    for b in state.boxes.iter() {
        vertices.extend(rect(&b.rect, rgba8(b.color)));
    }
    vertices
}
