//! Declared vertex attributes, addressed by 1-based OBJ indices.

use std::fmt;

use glam::{Vec2, Vec3};

use crate::error::LineError;

/// Which attribute list an index refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AttributeKind {
    Position,
    TexCoord,
    Normal,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Position => "position",
            Self::TexCoord => "texcoord",
            Self::Normal => "normal",
        })
    }
}

/// Append-only attribute lists in declaration order.
#[derive(Clone, Debug, Default)]
pub struct AttributeTable {
    positions: Vec<Vec3>,
    texcoords: Vec<Vec2>,
    normals: Vec<Vec3>,
}

impl AttributeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_position(&mut self, position: Vec3) {
        self.positions.push(position);
    }

    pub fn record_texcoord(&mut self, texcoord: Vec2) {
        self.texcoords.push(texcoord);
    }

    pub fn record_normal(&mut self, normal: Vec3) {
        self.normals.push(normal);
    }

    #[inline]
    pub fn position(&self, index: u32) -> Result<Vec3, LineError> {
        lookup(&self.positions, index, AttributeKind::Position)
    }

    #[inline]
    pub fn texcoord(&self, index: u32) -> Result<Vec2, LineError> {
        lookup(&self.texcoords, index, AttributeKind::TexCoord)
    }

    #[inline]
    pub fn normal(&self, index: u32) -> Result<Vec3, LineError> {
        lookup(&self.normals, index, AttributeKind::Normal)
    }

    /// (positions, texcoords, normals) declared so far.
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.positions.len(), self.texcoords.len(), self.normals.len())
    }
}

fn lookup<T: Copy>(items: &[T], index: u32, attribute: AttributeKind) -> Result<T, LineError> {
    (index as usize)
        .checked_sub(1)
        .and_then(|i| items.get(i).copied())
        .ok_or(LineError::IndexOutOfRange {
            attribute,
            index,
            len: items.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_are_one_based_and_ordered() {
        let mut table = AttributeTable::new();
        table.record_position(Vec3::new(1.0, 2.0, 3.0));
        table.record_position(Vec3::new(4.0, 5.0, 6.0));
        table.record_texcoord(Vec2::new(0.5, 0.25));
        table.record_normal(Vec3::Z);

        assert_eq!(table.position(1).unwrap(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(table.position(2).unwrap(), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(table.texcoord(1).unwrap(), Vec2::new(0.5, 0.25));
        assert_eq!(table.normal(1).unwrap(), Vec3::Z);
        assert_eq!(table.counts(), (2, 1, 1));
    }

    #[test]
    fn out_of_range_is_a_typed_error() {
        let mut table = AttributeTable::new();
        table.record_position(Vec3::ZERO);

        match table.position(2) {
            Err(LineError::IndexOutOfRange {
                attribute,
                index,
                len,
            }) => {
                assert_eq!(attribute, AttributeKind::Position);
                assert_eq!(index, 2);
                assert_eq!(len, 1);
            }
            other => panic!("unexpected lookup result: {other:?}"),
        }
        assert!(table.position(0).is_err());
        assert!(table.texcoord(1).is_err());
        assert!(table.normal(u32::MAX).is_err());
    }
}
