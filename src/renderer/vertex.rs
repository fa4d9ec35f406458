//! Coloured 2D vertex fed to the slab pipeline

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Position (world units until mapped to NDC) plus sRGB colour with alpha
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::from(self.position)
    }

    /// Same colour at another position
    pub fn moved_to(self, p: Vec2) -> Self {
        Self::new(p.x, p.y, self.color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Tower palette (sRGB)
pub mod colors {
    pub const FIELD: [f32; 4] = [0.06, 0.05, 0.12, 1.0];
    pub const FIELD_EDGE: [f32; 4] = [0.25, 0.2, 0.4, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
    /// Alpha of the glow behind each slab (0x44 / 0xff)
    pub const GLOW_ALPHA: f32 = 0.27;

    /// sRGB channel to linear, matching `fs_linearize`
    pub fn to_linear(c: f32) -> f32 {
        c.powf(2.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_struct() {
        let desc = Vertex::desc();
        assert_eq!(desc.array_stride, 24);
        assert_eq!(desc.attributes[1].offset, 8);
    }

    #[test]
    fn test_moved_to_keeps_colour() {
        let v = Vertex::new(1.0, 2.0, colors::FIELD).moved_to(Vec2::new(-0.5, 0.5));
        assert_eq!(v.pos(), Vec2::new(-0.5, 0.5));
        assert_eq!(v.color, colors::FIELD);
    }

    #[test]
    fn test_to_linear_endpoints() {
        assert_eq!(colors::to_linear(0.0), 0.0);
        assert_eq!(colors::to_linear(1.0), 1.0);
        assert!(colors::to_linear(0.5) < 0.5);
    }
}
