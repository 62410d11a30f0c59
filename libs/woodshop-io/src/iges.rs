//! IGES-like line format support.
//!
//! ```text
//! WOODSHOP_IGES 1.0
//! MODEL triangle
//! VERTEX 0 0 0
//! VERTEX 1 0 0
//! VERTEX 0 1 0
//! FACE 0 1 2
//! END-IGES
//! ```
//!
//! Lines are trimmed and dispatched on their prefix; blank and unrecognized
//! lines are ignored. The format carries no normals.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use config::constants::{IGES_HEADER, IGES_TERMINATOR};
use glam::DVec3;
use tracing::debug;
use woodshop_geom::Mesh;

use crate::error::{IoError, IoResult};
use crate::model::MeshModel;
use crate::MeshFormat;

/// Parses the first three whitespace-separated fields of `fields`.
fn parse_triple<T: FromStr>(fields: &str) -> Option<[T; 3]> {
    let mut it = fields.split_whitespace().map(str::parse::<T>);
    Some([it.next()?.ok()?, it.next()?.ok()?, it.next()?.ok()?])
}

fn malformed(record: &str, line_number: usize) -> IoError {
    IoError::format(
        MeshFormat::Iges,
        format!("malformed {record} record on line {line_number}"),
    )
}

/// Parses an IGES-like document.
///
/// The returned mesh has no normals; see
/// [`MeshModel::ensure_normals`](crate::MeshModel::ensure_normals).
///
/// # Errors
///
/// - [`IoError::Format`] when the header line is wrong or a `VERTEX`/`FACE`
///   line does not hold three numbers
/// - [`IoError::MissingGeometry`] when no vertex or no face was found
pub fn parse_iges(text: &str) -> IoResult<MeshModel> {
    let mut lines = text.lines().enumerate();

    let header = lines.next().map_or("", |(_, line)| line.trim());
    if header != IGES_HEADER {
        return Err(IoError::format(
            MeshFormat::Iges,
            format!("expected header {IGES_HEADER:?}, found {header:?}"),
        ));
    }

    let mut name = String::new();
    let mut vertices = Vec::new();
    let mut triangles = Vec::new();

    for (index, line) in lines {
        let line_number = index + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == IGES_TERMINATOR {
            break;
        }

        if let Some(rest) = line.strip_prefix("MODEL ") {
            name = rest.to_string();
        } else if let Some(rest) = line.strip_prefix("VERTEX ") {
            let [x, y, z] =
                parse_triple::<f64>(rest).ok_or_else(|| malformed("VERTEX", line_number))?;
            vertices.push(DVec3::new(x, y, z));
        } else if let Some(rest) = line.strip_prefix("FACE ") {
            let face =
                parse_triple::<u32>(rest).ok_or_else(|| malformed("FACE", line_number))?;
            triangles.push(face);
        } else {
            debug!("Ignoring IGES line {}: {:?}", line_number, line);
        }
    }

    if vertices.is_empty() || triangles.is_empty() {
        return Err(IoError::MissingGeometry {
            vertices: vertices.len(),
            faces: triangles.len(),
        });
    }

    Ok(MeshModel {
        name,
        mesh: Mesh::from_parts(vertices, triangles),
    })
}

/// Writes `model` as an IGES-like document. Normals are not written.
///
/// # Errors
///
/// Propagates errors from `writer`.
pub fn write_iges<W: Write>(model: &MeshModel, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "{IGES_HEADER}")?;
    writeln!(writer, "MODEL {}", model.name)?;
    for v in model.mesh.vertices() {
        writeln!(writer, "VERTEX {} {} {}", v.x, v.y, v.z)?;
    }
    for [a, b, c] in model.mesh.triangles() {
        writeln!(writer, "FACE {a} {b} {c}")?;
    }
    writeln!(writer, "{IGES_TERMINATOR}")
}

/// Load a model from an IGES-like file.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be read, otherwise any error
/// of [`parse_iges`].
pub fn load_iges<P: AsRef<Path>>(path: P) -> IoResult<MeshModel> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| IoError::io(path, e))?;
    let model = parse_iges(&text)?;
    debug!(
        "Loaded IGES {}: {} vertices, {} triangles",
        path.display(),
        model.mesh.vertex_count(),
        model.mesh.triangle_count()
    );
    Ok(model)
}

/// Save a model to an IGES-like file, truncating any existing file.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be created or written.
pub fn save_iges<P: AsRef<Path>>(model: &MeshModel, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| IoError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_iges(model, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(|e| IoError::io(path, e))?;
    debug!(
        "Saved IGES {}: {} vertices, {} triangles",
        path.display(),
        model.mesh.vertex_count(),
        model.mesh.triangle_count()
    );
    Ok(())
}
