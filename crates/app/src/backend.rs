//! Headless stand-in for the GPU mesh backend: checks the buffer layout and
//! hands out draw handles without touching a device.

use anyhow::{Result, bail};
use asset::{Mesh, MeshBackend};

/// Opaque drawable: id plus the vertex count for a non-indexed draw call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MeshHandle {
    pub id: u32,
    pub vertex_count: u32,
}

#[derive(Debug, Default)]
pub struct HeadlessBackend {
    next_id: u32,
    uploaded_bytes: usize,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uploaded_bytes(&self) -> usize {
        self.uploaded_bytes
    }
}

impl MeshBackend for HeadlessBackend {
    type Handle = MeshHandle;
    type Error = anyhow::Error;

    fn create_mesh(&mut self, mesh: &Mesh) -> Result<MeshHandle> {
        if !mesh.is_consistent() {
            bail!(
                "Mismatched buffers: {} position, {} uv, {} normal floats",
                mesh.positions.len(),
                mesh.uvs.len(),
                mesh.normals.len()
            );
        }
        let vertex_count = u32::try_from(mesh.vertex_count())
            .map_err(|_| anyhow::anyhow!("Too many vertices in mesh (>{})", u32::MAX))?;

        // one buffer per attribute, locations 0/1/2
        let bytes =
            mesh.position_bytes().len() + mesh.uv_bytes().len() + mesh.normal_bytes().len();
        self.uploaded_bytes += bytes;

        let id = self.next_id;
        self.next_id += 1;
        log::debug!("Created mesh #{id}: {vertex_count} vertices, {bytes} bytes");
        Ok(MeshHandle { id, vertex_count })
    }
}
