//! Triangle faces: reference parsing and resolution into per-corner data.

use glam::{Vec2, Vec3};

use crate::{
    attributes::AttributeTable,
    error::LineError,
    flatten::{flatten_vec2, flatten_vec3},
    mesh::Mesh,
    tokenizer::tokenize,
};

pub const INDEX_SEPARATOR: char = '/';

/// One `p/t/n` corner reference, all indices 1-based.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FaceVertexRef {
    pub position: u32,
    pub texcoord: u32,
    pub normal: u32,
}

impl FaceVertexRef {
    pub fn new(position: u32, texcoord: u32, normal: u32) -> Self {
        Self {
            position,
            texcoord,
            normal,
        }
    }

    /// Parse a `p/t/n` token. Texcoord and normal are mandatory.
    pub fn parse(token: &str) -> Result<Self, LineError> {
        let mut indices = [0u32; 3];
        let mut count = 0;
        for component in tokenize(token, INDEX_SEPARATOR) {
            if count == indices.len() {
                return Err(malformed(token, "more than three components"));
            }
            indices[count] = parse_index(token, component)?;
            count += 1;
        }
        if count != indices.len() {
            return Err(malformed(token, "expected position/texcoord/normal"));
        }

        let [position, texcoord, normal] = indices;
        Ok(Self::new(position, texcoord, normal))
    }
}

fn parse_index(token: &str, component: &str) -> Result<u32, LineError> {
    // `str::parse` would also take a leading '+'
    if !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(token, "index is not a positive integer"));
    }
    match component.parse::<u32>() {
        Ok(0) => Err(malformed(token, "indices are 1-based")),
        Ok(index) => Ok(index),
        Err(_) => Err(malformed(token, "index is not a positive integer")),
    }
}

fn malformed(token: &str, reason: &'static str) -> LineError {
    LineError::MalformedFaceReference {
        token: token.to_owned(),
        reason,
    }
}

/// A triangle, corners in declaration order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Face(pub [FaceVertexRef; 3]);

impl Face {
    pub fn parse(refs: [&str; 3]) -> Result<Self, LineError> {
        let [a, b, c] = refs;
        Ok(Self([
            FaceVertexRef::parse(a)?,
            FaceVertexRef::parse(b)?,
            FaceVertexRef::parse(c)?,
        ]))
    }
}

/// Per face-vertex attribute lists, three entries per accepted face.
#[derive(Clone, Debug, Default)]
pub struct ExpandedVertices {
    positions: Vec<Vec3>,
    uvs: Vec<Vec2>,
    normals: Vec<Vec3>,
}

impl ExpandedVertices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every corner of `face` and append them in order.
    ///
    /// Nothing is appended unless all three corners resolve.
    pub fn push_face(&mut self, face: &Face, table: &AttributeTable) -> Result<(), LineError> {
        let mut corners = [(Vec3::ZERO, Vec2::ZERO, Vec3::ZERO); 3];
        for (corner, vertex) in corners.iter_mut().zip(&face.0) {
            *corner = (
                table.position(vertex.position)?,
                table.texcoord(vertex.texcoord)?,
                table.normal(vertex.normal)?,
            );
        }

        for (position, uv, normal) in corners {
            self.positions.push(position);
            self.uvs.push(uv);
            self.normals.push(normal);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn flatten(&self) -> Mesh {
        Mesh::new(
            flatten_vec3(&self.positions),
            flatten_vec2(&self.uvs),
            flatten_vec3(&self.normals),
        )
    }
}
