//! Generated unit primitives shared by every prop instance. Cube and
//! cylinder span [-0.5, 0.5] per axis, the sphere has radius 0.5; props
//! scale them through the instance model matrix.

use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

pub fn cube() -> MeshData {
    // 24 vertices so each face keeps a flat normal
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
        ([-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        ([0.0, -1.0, 0.0], [0.0, 0.0, -1.0], [1.0, 0.0, 0.0]),
        ([0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]),
        ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, up, right) in faces {
        let base = vertices.len() as u16;
        for (su, sv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            let position = [
                normal[0] * 0.5 + right[0] * su + up[0] * sv,
                normal[1] * 0.5 + right[1] * su + up[1] * sv,
                normal[2] * 0.5 + right[2] * su + up[2] * sv,
            ];
            vertices.push(Vertex { position, normal });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    MeshData { vertices, indices }
}

pub fn cylinder(segments: u16) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    let seg = segments.max(3);

    // Side: two rings with outward normals
    for ring in 0..2u16 {
        let y = if ring == 0 { -0.5 } else { 0.5 };
        for i in 0..seg {
            let a = TAU * (i as f32) / (seg as f32);
            let (sin, cos) = a.sin_cos();
            vertices.push(Vertex {
                position: [0.5 * cos, y, 0.5 * sin],
                normal: [cos, 0.0, sin],
            });
        }
    }
    for i in 0..seg {
        let next = (i + 1) % seg;
        indices.extend_from_slice(&[i, seg + i, seg + next, i, seg + next, next]);
    }

    // Caps: center plus a ring with axial normals
    for (y, ny) in [(-0.5, -1.0), (0.5, 1.0f32)] {
        let center = vertices.len() as u16;
        vertices.push(Vertex {
            position: [0.0, y, 0.0],
            normal: [0.0, ny, 0.0],
        });
        for i in 0..seg {
            let a = TAU * (i as f32) / (seg as f32);
            let (sin, cos) = a.sin_cos();
            vertices.push(Vertex {
                position: [0.5 * cos, y, 0.5 * sin],
                normal: [0.0, ny, 0.0],
            });
        }
        for i in 0..seg {
            let next = (i + 1) % seg;
            if ny > 0.0 {
                indices.extend_from_slice(&[center, center + 1 + i, center + 1 + next]);
            } else {
                indices.extend_from_slice(&[center, center + 1 + next, center + 1 + i]);
            }
        }
    }
    MeshData { vertices, indices }
}

pub fn sphere(stacks: u16, sectors: u16) -> MeshData {
    let stacks = stacks.max(2);
    let sectors = sectors.max(3);
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for i in 0..=stacks {
        let phi = std::f32::consts::PI * (i as f32) / (stacks as f32);
        let y = phi.cos();
        let r = phi.sin();
        for j in 0..=sectors {
            let theta = TAU * (j as f32) / (sectors as f32);
            let (sin, cos) = theta.sin_cos();
            let n = [r * cos, y, r * sin];
            vertices.push(Vertex {
                position: [n[0] * 0.5, n[1] * 0.5, n[2] * 0.5],
                normal: n,
            });
        }
    }
    let row = sectors + 1;
    for i in 0..stacks {
        for j in 0..sectors {
            let a = i * row + j;
            let b = a + row;
            if i != 0 {
                indices.extend_from_slice(&[a, a + 1, b]);
            }
            if i != stacks - 1 {
                indices.extend_from_slice(&[a + 1, b + 1, b]);
            }
        }
    }
    MeshData { vertices, indices }
}
