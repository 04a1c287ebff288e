//! Asset loading: triangle-only OBJ meshes as flat, upload-ready buffers.
//! The loader never deduplicates vertices; every face corner becomes its own
//! entry in the output buffers.

pub mod attributes;
pub mod directive;
pub mod error;
pub mod face;
pub mod flatten;
pub mod mesh;
pub mod obj;
pub mod progress;
pub mod tokenizer;

pub use error::{LineError, ObjError, ObjResult, ParseWarning};
pub use mesh::{Mesh, MeshBackend};
pub use obj::{
    LoadOptions, ObjParser, OutOfRangePolicy, ParsedObj, load_obj_from_path,
    load_obj_from_reader, load_obj_from_str,
};
