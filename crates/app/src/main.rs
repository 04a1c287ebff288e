//! Entry point for objtri: load OBJ files and hand them to a mesh backend.

mod backend;

use anyhow::{Context, Result, bail};
use asset::{LoadOptions, MeshBackend, ObjParser, OutOfRangePolicy};

use backend::HeadlessBackend;

const USAGE: &str =
    "usage: objtri [--progress-every=N] [--on-bad-index=skip|abort] [--strict] <file.obj>...";

fn parse_progress_arg(args: &[String]) -> usize {
    // --progress-every=N, 0 = only the final report
    let mut interval = asset::obj::DEFAULT_PROGRESS_INTERVAL;
    for arg in args {
        if let Some(val) = arg.strip_prefix("--progress-every=") {
            match val.parse::<usize>() {
                Ok(n) => interval = n,
                Err(_) => log::warn!(
                    "Invalid progress interval '{}', keeping {}.",
                    val,
                    interval
                ),
            }
        }
    }
    interval
}

fn parse_out_of_range_arg(args: &[String]) -> OutOfRangePolicy {
    let mut policy = OutOfRangePolicy::default();
    for arg in args {
        if let Some(val) = arg.strip_prefix("--on-bad-index=") {
            policy = match val.to_ascii_lowercase().as_str() {
                "skip" => OutOfRangePolicy::SkipFace,
                "abort" | "fail" => OutOfRangePolicy::Abort,
                other => {
                    log::warn!("Unknown policy '{}', falling back to skip.", other);
                    OutOfRangePolicy::SkipFace
                }
            };
        }
    }
    policy
}

fn parse_strict_arg(args: &[String]) -> bool {
    args.iter().any(|arg| arg == "--strict")
}

fn input_paths(args: &[String]) -> Vec<&str> {
    args.iter()
        .filter(|arg| !arg.starts_with("--"))
        .map(String::as_str)
        .collect()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let paths = input_paths(&args);
    if paths.is_empty() {
        bail!(USAGE);
    }

    let parser = ObjParser::new(LoadOptions {
        progress_interval: parse_progress_arg(&args),
        out_of_range: parse_out_of_range_arg(&args),
        ..LoadOptions::default()
    });
    let strict = parse_strict_arg(&args);
    log::info!(
        "Starting objtri. progress_every={}, on_bad_index={:?}, strict={}",
        parser.options().progress_interval,
        parser.options().out_of_range,
        strict
    );

    let mut backend = HeadlessBackend::new();
    let mut warning_count = 0;

    for path in paths {
        let parsed = parser
            .load_path(path)
            .with_context(|| format!("Failed to load model {path}"))?;
        warning_count += parsed.warning_count;

        let handle = backend.create_mesh(&parsed.mesh)?;
        log::info!(
            "{}: {} vertices, {} triangles, {} skipped lines (mesh #{})",
            path,
            handle.vertex_count,
            parsed.mesh.face_count(),
            parsed.warning_count,
            handle.id
        );
    }

    log::info!(
        "Uploaded {:.2}KiB of vertex data.",
        backend.uploaded_bytes() as f64 / 1024.0
    );
    if strict && warning_count > 0 {
        bail!("{warning_count} malformed lines (--strict)");
    }
    Ok(())
}
