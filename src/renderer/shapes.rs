//! Shape tessellation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::GameState;

/// Generate vertices for a filled axis-aligned rectangle (two triangles)
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle as a triangle fan
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle) between two radii
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let inner1 = center + inner_radius * Vec2::new(theta1.cos(), theta1.sin());
        let outer1 = center + outer_radius * Vec2::new(theta1.cos(), theta1.sin());
        let inner2 = center + inner_radius * Vec2::new(theta2.cos(), theta2.sin());
        let outer2 = center + outer_radius * Vec2::new(theta2.cos(), theta2.sin());

        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Segments used to approximate a coin disc
const COIN_SEGMENTS: u32 = 24;

/// Tessellate the whole scene in world coordinates.
///
/// Draw order: platforms, uncollected coins, enemies, player. Collected
/// coins are suppressed, never removed.
pub fn scene_vertices(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for platform in &state.platforms {
        vertices.extend(rect(platform.pos, platform.size, colors::PLATFORM));
    }

    for coin in &state.coins {
        if coin.collected {
            continue;
        }
        let center = coin.pos + Vec2::splat(coin.radius);
        vertices.extend(circle(center, coin.radius, colors::COIN, COIN_SEGMENTS));
        vertices.extend(ring(
            center,
            coin.radius,
            coin.radius + 2.0,
            colors::COIN_RIM,
            COIN_SEGMENTS,
        ));
    }

    for enemy in &state.enemies {
        let bounds = enemy.bounds();
        vertices.extend(rect(bounds.pos, bounds.size, colors::ENEMY));
    }

    let bounds = state.player.bounds();
    vertices.extend(rect(bounds.pos, bounds.size, colors::PLAYER));

    vertices
}
