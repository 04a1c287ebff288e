//! Streaming OBJ loader for triangle meshes with positions, uvs and normals.
//!
//! Faces must be triangles whose corners carry all three indices (`p/t/n`).
//! A bad line never aborts the load: it is skipped, logged and returned as a
//! [`ParseWarning`]. Only an unreadable source is fatal, plus out-of-range
//! face indices when [`OutOfRangePolicy::Abort`] is selected.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use crate::{
    attributes::AttributeTable,
    directive::Directive,
    error::{LineError, ObjError, ObjResult, ParseWarning},
    face::ExpandedVertices,
    mesh::Mesh,
    progress::ProgressReporter,
    tokenizer::COMMENT_MARKER,
};

/// Lines between two progress reports.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 30;

/// Warnings kept in [`ParsedObj::warnings`]; later ones are only counted.
pub const DEFAULT_MAX_WARNINGS: usize = 1000;

/// Characters of the offending line kept in a [`ParseWarning`].
pub const MAX_WARNING_CONTENT: usize = 256;

/// What to do with a face that points past the declared attributes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutOfRangePolicy {
    /// Drop the face, record a warning and keep going.
    #[default]
    SkipFace,
    /// Fail the whole load with [`ObjError::IndexOutOfRange`].
    Abort,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LoadOptions {
    pub progress_interval: usize,
    pub out_of_range: OutOfRangePolicy,
    pub max_warnings: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            out_of_range: OutOfRangePolicy::default(),
            max_warnings: DEFAULT_MAX_WARNINGS,
        }
    }
}

/// Result of a completed load.
#[derive(Debug, Default)]
pub struct ParsedObj {
    pub mesh: Mesh,
    /// The first `max_warnings` skipped lines.
    pub warnings: Vec<ParseWarning>,
    /// All skipped lines, including those not kept in `warnings`.
    pub warning_count: usize,
}

impl ParsedObj {
    pub fn has_warnings(&self) -> bool {
        self.warning_count > 0
    }
}

#[derive(Clone, Debug, Default)]
pub struct ObjParser {
    options: LoadOptions,
}

impl ObjParser {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    pub fn load_path(&self, path: impl AsRef<Path>) -> ObjResult<ParsedObj> {
        let path = path.as_ref();
        let open_err = |source: io::Error| ObjError::Open {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(open_err)?;
        let total_bytes = file.metadata().map_err(open_err)?.len();
        self.parse(BufReader::new(file), total_bytes, &path.display().to_string())
    }

    /// Parse OBJ text from `reader`. `total_bytes` is only used for progress
    /// and `source_name` only for log lines.
    pub fn parse<R: BufRead>(
        &self,
        mut reader: R,
        total_bytes: u64,
        source_name: &str,
    ) -> ObjResult<ParsedObj> {
        log::info!("Loading model: {source_name}");
        log::info!("  Size: {:.2}KiB", total_bytes as f64 / 1024.0);

        let mut table = AttributeTable::new();
        let mut expanded = ExpandedVertices::new();
        let mut warnings = Vec::new();
        let mut warning_count = 0usize;
        let mut progress = ProgressReporter::new(total_bytes, self.options.progress_interval);

        let mut buf = Vec::new();
        let mut line_no = 0usize;
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| ObjError::Read {
                    line: line_no + 1,
                    source,
                })?;
            if read == 0 {
                break;
            }
            line_no += 1;
            progress.advance(read as u64);

            let raw = trim_line_end(&buf);
            let applied =
                decode_line(raw).and_then(|line| apply_line(line, &mut table, &mut expanded));
            if let Err(error) = applied {
                if error.is_out_of_range()
                    && self.options.out_of_range == OutOfRangePolicy::Abort
                {
                    return Err(ObjError::IndexOutOfRange {
                        line: line_no,
                        source: error,
                    });
                }
                log::warn!("Invalid data at {source_name}:{line_no}: {error}");
                warning_count += 1;
                if warnings.len() < self.options.max_warnings {
                    warnings.push(ParseWarning {
                        line: line_no,
                        content: excerpt(raw),
                        error,
                    });
                }
            }

            progress.tick(line_no);
        }
        progress.finish();

        let (positions, texcoords, normals) = table.counts();
        log::debug!("  Declared {positions} positions, {texcoords} texcoords, {normals} normals");

        let mesh = expanded.flatten();
        log::info!(
            "  Model loaded: {source_name} ({} triangles, {} warnings)",
            mesh.face_count(),
            warning_count
        );
        Ok(ParsedObj {
            mesh,
            warnings,
            warning_count,
        })
    }
}

fn trim_line_end(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    bytes.strip_suffix(b"\r").unwrap_or(bytes)
}

/// Decode the part of a line before the comment marker. Comment bytes are
/// never decoded, so their encoding does not matter.
fn decode_line(raw: &[u8]) -> Result<&str, LineError> {
    let marker = COMMENT_MARKER as u8;
    let content = match raw.iter().position(|&b| b == marker) {
        Some(end) => &raw[..end],
        None => raw,
    };
    std::str::from_utf8(content).map_err(|source| LineError::InvalidEncoding { source })
}

fn excerpt(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .chars()
        .take(MAX_WARNING_CONTENT)
        .collect()
}

fn apply_line(
    line: &str,
    table: &mut AttributeTable,
    expanded: &mut ExpandedVertices,
) -> Result<(), LineError> {
    match Directive::parse(line)? {
        None => {}
        Some(Directive::Position(position)) => table.record_position(position),
        Some(Directive::TexCoord(texcoord)) => table.record_texcoord(texcoord),
        Some(Directive::Normal(normal)) => table.record_normal(normal),
        Some(Directive::Face(face)) => expanded.push_face(&face, table)?,
        Some(Directive::Ignored(keyword)) => log::trace!("Ignoring '{keyword}' directive"),
    }
    Ok(())
}

/// Load an OBJ mesh from a file path with default options.
pub fn load_obj_from_path(path: impl AsRef<Path>) -> ObjResult<ParsedObj> {
    ObjParser::default().load_path(path)
}

/// Load an OBJ mesh from a [`BufRead`] implementation with default options.
pub fn load_obj_from_reader<R: BufRead>(
    reader: R,
    total_bytes: u64,
    source_name: &str,
) -> ObjResult<ParsedObj> {
    ObjParser::default().parse(reader, total_bytes, source_name)
}

/// Convenience helper to parse an OBJ string literal.
pub fn load_obj_from_str(contents: &str) -> ObjResult<ParsedObj> {
    load_obj_from_reader(io::Cursor::new(contents), contents.len() as u64, "<memory>")
}
