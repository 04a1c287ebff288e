//! Classification of a single OBJ line into a directive.

use glam::{Vec2, Vec3};

use crate::{error::LineError, face::Face, tokenizer::tokenize};

pub const TOKEN_SEPARATOR: char = ' ';

/// A parsed line. Keywords this loader does not handle (`o`, `g`, `s`,
/// `usemtl`, `mtllib`, ...) end up in `Ignored`.
#[derive(Clone, Debug, PartialEq)]
pub enum Directive<'a> {
    Position(Vec3),
    TexCoord(Vec2),
    Normal(Vec3),
    Face(Face),
    Ignored(&'a str),
}

impl<'a> Directive<'a> {
    /// Parse one line (without its terminator). `Ok(None)` for blank and
    /// comment-only lines.
    pub fn parse(line: &'a str) -> Result<Option<Self>, LineError> {
        let mut tokens = tokenize(line, TOKEN_SEPARATOR);
        let Some(keyword) = tokens.next() else {
            return Ok(None);
        };

        let directive = match keyword {
            "v" => Self::Position(Vec3::from_array(floats("v", tokens)?)),
            "vt" => Self::TexCoord(Vec2::from_array(floats("vt", tokens)?)),
            "vn" => Self::Normal(Vec3::from_array(floats("vn", tokens)?)),
            "f" => Self::Face(Face::parse(exact("f", tokens)?)?),
            other => Self::Ignored(other),
        };
        Ok(Some(directive))
    }
}

/// Take exactly `N` tokens after the keyword.
fn exact<'a, const N: usize>(
    directive: &'static str,
    tokens: impl Iterator<Item = &'a str>,
) -> Result<[&'a str; N], LineError> {
    let mut out = [""; N];
    let mut found = 0;
    for token in tokens {
        if found < N {
            out[found] = token;
        }
        found += 1;
    }
    if found != N {
        return Err(LineError::Arity {
            directive,
            expected: N + 1,
            found: found + 1,
        });
    }
    Ok(out)
}

fn floats<'a, const N: usize>(
    directive: &'static str,
    tokens: impl Iterator<Item = &'a str>,
) -> Result<[f32; N], LineError> {
    let raw: [&str; N] = exact(directive, tokens)?;
    let mut out = [0.0; N];
    for (value, token) in out.iter_mut().zip(raw) {
        *value = token
            .parse::<f32>()
            .map_err(|source| LineError::InvalidNumber {
                token: token.to_owned(),
                source,
            })?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::FaceVertexRef;

    #[test]
    fn classifies_attribute_lines() {
        assert_eq!(
            Directive::parse("v 1 -2.5 3e1").unwrap(),
            Some(Directive::Position(Vec3::new(1.0, -2.5, 30.0)))
        );
        assert_eq!(
            Directive::parse("vt 0.25 0.75").unwrap(),
            Some(Directive::TexCoord(Vec2::new(0.25, 0.75)))
        );
        assert_eq!(
            Directive::parse("vn 0 0 1 # up").unwrap(),
            Some(Directive::Normal(Vec3::Z))
        );
    }

    #[test]
    fn classifies_faces() {
        let parsed = Directive::parse("f 1/1/1 2/2/1 3/3/1").unwrap();
        assert_eq!(
            parsed,
            Some(Directive::Face(Face([
                FaceVertexRef::new(1, 1, 1),
                FaceVertexRef::new(2, 2, 1),
                FaceVertexRef::new(3, 3, 1),
            ])))
        );
    }

    #[test]
    fn blank_and_comment_lines_are_none() {
        assert_eq!(Directive::parse("").unwrap(), None);
        assert_eq!(Directive::parse("   ").unwrap(), None);
        assert_eq!(Directive::parse("# comment").unwrap(), None);
    }

    #[test]
    fn unknown_keywords_are_ignored() {
        for (line, keyword) in [
            ("o Cube", "o"),
            ("g group", "g"),
            ("s off", "s"),
            ("usemtl Material", "usemtl"),
            ("mtllib cube.mtl", "mtllib"),
        ] {
            assert_eq!(
                Directive::parse(line).unwrap(),
                Some(Directive::Ignored(keyword))
            );
        }
    }

    #[test]
    fn wrong_arity_reports_counts() {
        match Directive::parse("v 1 2").unwrap_err() {
            LineError::Arity {
                directive,
                expected,
                found,
            } => {
                assert_eq!(directive, "v");
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(matches!(
            Directive::parse("vt 0 0 0"),
            Err(LineError::Arity { expected: 3, found: 4, .. })
        ));
        assert!(matches!(
            Directive::parse("vn 0 0 1 0"),
            Err(LineError::Arity { expected: 4, found: 5, .. })
        ));
        assert!(matches!(
            Directive::parse("f 1/1/1 2/2/1"),
            Err(LineError::Arity { expected: 4, found: 3, .. })
        ));
        assert!(matches!(
            Directive::parse("f 1/1/1 2/2/1 3/3/1 4/4/1"),
            Err(LineError::Arity { expected: 4, found: 5, .. })
        ));
    }

    #[test]
    fn bad_number_reports_token() {
        match Directive::parse("v 1 two 3").unwrap_err() {
            LineError::InvalidNumber { token, .. } => assert_eq!(token, "two"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
