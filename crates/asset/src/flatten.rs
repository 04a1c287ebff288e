//! Flatten vector lists into contiguous `f32` buffers, vertex-major.

use glam::{Vec2, Vec3};

pub fn flatten_vec3(items: &[Vec3]) -> Vec<f32> {
    let mut out = Vec::with_capacity(items.len() * 3);
    for v in items {
        out.extend_from_slice(&v.to_array());
    }
    out
}

pub fn flatten_vec2(items: &[Vec2]) -> Vec<f32> {
    let mut out = Vec::with_capacity(items.len() * 2);
    for v in items {
        out.extend_from_slice(&v.to_array());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_are_contiguous_per_vertex() {
        let flat = flatten_vec3(&[Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)]);
        assert_eq!(flat, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let flat = flatten_vec2(&[Vec2::new(0.1, 0.2), Vec2::new(0.3, 0.4)]);
        assert_eq!(flat, [0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn empty_input_gives_empty_buffer() {
        assert!(flatten_vec3(&[]).is_empty());
        assert!(flatten_vec2(&[]).is_empty());
    }
}
