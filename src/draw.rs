//! CPU-side geometry submitted by the viewer and its modules each frame.
//!
//! A [`DrawList`] collects colored line segments and triangles in world
//! space. Vertices pass through the list's current model transform as they
//! are added, so callers can scale or move a whole batch the way an
//! immediate-mode push/scale/pop would.

use glam::{Mat4, Vec3};

/// One colored vertex, laid out for direct upload to a vertex buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Straight (non-premultiplied) RGBA color.
    pub color: [f32; 4],
}

impl Vertex {
    /// Vertex at `position` with `color`.
    #[must_use]
    pub fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }
}

/// Per-frame line and triangle geometry.
#[derive(Debug, Clone)]
pub struct DrawList {
    lines: Vec<Vertex>,
    triangles: Vec<Vertex>,
    transform: Mat4,
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawList {
    /// Empty list with an identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            triangles: Vec::new(),
            transform: Mat4::IDENTITY,
        }
    }

    /// Line vertices, two per segment.
    #[must_use]
    pub fn lines(&self) -> &[Vertex] {
        &self.lines
    }

    /// Triangle vertices, three per triangle.
    #[must_use]
    pub fn triangles(&self) -> &[Vertex] {
        &self.triangles
    }

    /// Whether nothing has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.triangles.is_empty()
    }

    /// Drop all geometry and reset the transform.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.triangles.clear();
        self.transform = Mat4::IDENTITY;
    }

    /// Model transform applied to subsequently added vertices.
    #[must_use]
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Replace the model transform. Returns the previous one so callers
    /// can restore it afterwards.
    pub fn set_transform(&mut self, transform: Mat4) -> Mat4 {
        std::mem::replace(&mut self.transform, transform)
    }

    fn vertex(&self, position: Vec3, color: [f32; 4]) -> Vertex {
        Vertex::new(self.transform.transform_point3(position), color)
    }

    /// Add a line segment from `a` to `b`.
    pub fn line(&mut self, a: Vec3, b: Vec3, color: [f32; 4]) {
        let (a, b) = (self.vertex(a, color), self.vertex(b, color));
        self.lines.extend([a, b]);
    }

    /// Add a single-color triangle.
    pub fn triangle(&mut self, corners: [Vec3; 3], color: [f32; 4]) {
        self.triangle_colored(corners, [color; 3]);
    }

    /// Add a triangle with one color per corner.
    pub fn triangle_colored(&mut self, corners: [Vec3; 3], colors: [[f32; 4]; 3]) {
        for (corner, color) in corners.into_iter().zip(colors) {
            let v = self.vertex(corner, color);
            self.triangles.push(v);
        }
    }

    /// Add an indexed triangle mesh. Indices outside `positions` are
    /// skipped along with the rest of their triangle.
    pub fn mesh(&mut self, positions: &[Vec3], colors: &[[f32; 4]], indices: &[u32]) {
        for tri in indices.chunks_exact(3) {
            let corner = |i: u32| {
                let i = i as usize;
                positions
                    .get(i)
                    .map(|&p| (p, colors.get(i).copied().unwrap_or([1.0; 4])))
            };
            if let (Some(a), Some(b), Some(c)) =
                (corner(tri[0]), corner(tri[1]), corner(tri[2]))
            {
                self.triangle_colored([a.0, b.0, c.0], [a.1, b.1, c.1]);
            }
        }
    }

    /// Red, green and blue segments along +X, +Y and +Z from the origin.
    pub fn axes(&mut self, length: f32) {
        self.line(Vec3::ZERO, Vec3::X * length, [1.0, 0.0, 0.0, 1.0]);
        self.line(Vec3::ZERO, Vec3::Y * length, [0.0, 1.0, 0.0, 1.0]);
        self.line(Vec3::ZERO, Vec3::Z * length, [0.0, 0.0, 1.0, 1.0]);
    }

    /// Checkerboard in the horizontal plane `y = height`, spanning
    /// `[-extent, extent]` on X and Z in squares of `cell` size.
    ///
    /// In wireframe mode each square is outlined with `wire_color`
    /// instead of filled.
    pub fn checkerboard(
        &mut self,
        extent: f32,
        cell: f32,
        height: f32,
        wireframe: bool,
        wire_color: [f32; 4],
    ) {
        const LIGHT: [f32; 4] = [0.8, 0.8, 0.8, 1.0];
        const DARK: [f32; 4] = [0.3, 0.3, 0.3, 1.0];

        if cell <= 0.0 || extent <= 0.0 {
            return;
        }
        let cells = (2.0 * extent / cell).ceil() as i32;
        for i in 0..cells {
            for j in 0..cells {
                let x0 = -extent + i as f32 * cell;
                let z0 = -extent + j as f32 * cell;
                let x1 = (x0 + cell).min(extent);
                let z1 = (z0 + cell).min(extent);
                let a = Vec3::new(x0, height, z0);
                let b = Vec3::new(x1, height, z0);
                let c = Vec3::new(x1, height, z1);
                let d = Vec3::new(x0, height, z1);

                if wireframe {
                    self.line(a, b, wire_color);
                    self.line(b, c, wire_color);
                    self.line(c, d, wire_color);
                    self.line(d, a, wire_color);
                } else {
                    let color = if (i + j) % 2 == 0 { LIGHT } else { DARK };
                    self.triangle([a, c, b], color);
                    self.triangle([a, d, c], color);
                }
            }
        }
    }
}
