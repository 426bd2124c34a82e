//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex in logical screen pixels with linear RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
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

/// Colors for scene elements (sRGB)
pub mod colors {
    use crate::Rgb;

    pub const BACKGROUND: Rgb = Rgb(240, 240, 235);
    pub const HIGHLIGHT: Rgb = Rgb(255, 255, 255);
    pub const HUD_TEXT: Rgb = Rgb(100, 100, 100);
    pub const HINT_TEXT: Rgb = Rgb(150, 150, 150);
}
