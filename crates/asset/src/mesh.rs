//! CPU-side mesh produced by the loader and handed to a GPU backend.

/// Floats per position / uv / normal.
pub const POSITION_COMPONENTS: usize = 3;
pub const UV_COMPONENTS: usize = 2;
pub const NORMAL_COMPONENTS: usize = 3;

/// Non-indexed triangle list as three flat, co-indexed buffers.
///
/// Entry `i` of every buffer describes the same face-vertex, so the mesh is
/// drawn with `vertex_count()` vertices and no index buffer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<f32>,
    pub uvs: Vec<f32>,
    pub normals: Vec<f32>,
}

impl Mesh {
    pub fn new(positions: Vec<f32>, uvs: Vec<f32>, normals: Vec<f32>) -> Self {
        debug_assert_eq!(
            positions.len() / POSITION_COMPONENTS,
            uvs.len() / UV_COMPONENTS
        );
        debug_assert_eq!(
            positions.len() / POSITION_COMPONENTS,
            normals.len() / NORMAL_COMPONENTS
        );
        Self {
            positions,
            uvs,
            normals,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / POSITION_COMPONENTS
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.vertex_count() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns `true` if the three buffers describe the same number of
    /// whole triangles.
    pub fn is_consistent(&self) -> bool {
        let v = self.vertex_count();
        self.positions.len() == v * POSITION_COMPONENTS
            && self.uvs.len() == v * UV_COMPONENTS
            && self.normals.len() == v * NORMAL_COMPONENTS
            && v % 3 == 0
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }
}

/// Creation entry point of a mesh consumer (GPU buffers, exporters, ...).
pub trait MeshBackend {
    type Handle;
    type Error;

    fn create_mesh(&mut self, mesh: &Mesh) -> Result<Self::Handle, Self::Error>;
}
