//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    /// Sky blue clear color
    pub const BACKGROUND: [f32; 4] = [0.53, 0.81, 0.92, 1.0];
    pub const PLAYER: [f32; 4] = [0.15, 0.25, 0.9, 1.0];
    pub const PLATFORM: [f32; 4] = [0.15, 0.7, 0.2, 1.0];
    pub const COIN: [f32; 4] = [1.0, 0.85, 0.1, 1.0];
    pub const COIN_RIM: [f32; 4] = [1.0, 0.65, 0.0, 1.0];
    pub const ENEMY: [f32; 4] = [0.9, 0.15, 0.15, 1.0];
}
