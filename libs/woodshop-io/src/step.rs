//! STEP-like token format support.
//!
//! A whitespace-delimited token stream. The first token is the magic literal
//! `WOODSHOP_STEP`, the rest of that line is a free-form version. Keyworded
//! sections follow in any order:
//!
//! ```text
//! WOODSHOP_STEP 1.1
//! NAME triangle
//! VERTICES 3
//! 0 0 0
//! 1 0 0
//! 0 1 0
//! INDICES 1
//! 0 1 2
//! NORMALS 3
//! 0 0 1
//! 0 0 1
//! 0 0 1
//! ```
//!
//! Any other keyword discards the remainder of its line. A missing or
//! mismatched `NORMALS` section is not an error: normals are recomputed.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use config::constants::{STEP_MAGIC, STEP_VERSION};
use glam::DVec3;
use tracing::{debug, warn};
use woodshop_geom::Mesh;

use crate::error::{IoError, IoResult};
use crate::model::MeshModel;
use crate::MeshFormat;

/// Cursor over whitespace-delimited tokens that can also take the rest of
/// the current line.
struct Tokens<'a> {
    text: &'a str,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self { text }
    }

    fn next_token(&mut self) -> Option<&'a str> {
        let start = self.text.trim_start();
        if start.is_empty() {
            self.text = start;
            return None;
        }
        let end = start.find(char::is_whitespace).unwrap_or(start.len());
        let (token, rest) = start.split_at(end);
        self.text = rest;
        Some(token)
    }

    /// Consumes up to and including the next line break, returning the
    /// trimmed remainder of the line.
    fn rest_of_line(&mut self) -> &'a str {
        let (line, rest) = self.text.split_once('\n').unwrap_or((self.text, ""));
        self.text = rest;
        line.trim()
    }

    fn parse_next<T: FromStr>(&mut self) -> Option<T> {
        self.next_token()?.parse().ok()
    }

    fn section_count(&mut self, section: &str) -> IoResult<usize> {
        let token = self.next_token().unwrap_or_default();
        token.parse().map_err(|_| {
            IoError::format(
                MeshFormat::Step,
                format!("invalid {section} count {token:?}"),
            )
        })
    }

    /// Reads up to `count` records, stopping at the first that fails to
    /// parse. The failing record is left unconsumed so a keyword that cuts a
    /// section short is still seen by the caller.
    fn records<T>(&mut self, count: usize, mut read: impl FnMut(&mut Self) -> Option<T>) -> Vec<T> {
        let mut out = Vec::with_capacity(count.min(self.text.len()));
        while out.len() < count {
            let record_start = self.text;
            match read(self) {
                Some(record) => out.push(record),
                None => {
                    self.text = record_start;
                    break;
                }
            }
        }
        out
    }
}

fn read_vec3(tokens: &mut Tokens<'_>) -> Option<DVec3> {
    Some(DVec3::new(
        tokens.parse_next()?,
        tokens.parse_next()?,
        tokens.parse_next()?,
    ))
}

fn read_triangle(tokens: &mut Tokens<'_>) -> Option<[u32; 3]> {
    Some([
        tokens.parse_next()?,
        tokens.parse_next()?,
        tokens.parse_next()?,
    ])
}

/// Parses a STEP-like document.
///
/// # Errors
///
/// - [`IoError::Format`] when the magic token is missing or a section count
///   is not a number
/// - [`IoError::StructuralMismatch`] when `VERTICES` or `INDICES` holds fewer
///   parseable records than declared
pub fn parse_step(text: &str) -> IoResult<MeshModel> {
    let mut tokens = Tokens::new(text);

    match tokens.next_token() {
        Some(STEP_MAGIC) => {}
        other => {
            return Err(IoError::format(
                MeshFormat::Step,
                format!("expected {STEP_MAGIC} token, found {:?}", other.unwrap_or("")),
            ))
        }
    }
    let version = tokens.rest_of_line();
    debug!("STEP version {:?}", version);

    let mut name = String::new();
    let mut vertices = Vec::new();
    let mut triangles = Vec::new();
    let mut normals = None;

    while let Some(keyword) = tokens.next_token() {
        match keyword {
            "NAME" => name = tokens.rest_of_line().to_string(),
            "VERTICES" => {
                let declared = tokens.section_count(keyword)?;
                vertices = tokens.records(declared, read_vec3);
                if vertices.len() != declared {
                    return Err(IoError::StructuralMismatch {
                        section: "VERTICES",
                        declared,
                        parsed: vertices.len(),
                    });
                }
            }
            "INDICES" => {
                let declared = tokens.section_count(keyword)?;
                triangles = tokens.records(declared, read_triangle);
                if triangles.len() != declared {
                    return Err(IoError::StructuralMismatch {
                        section: "INDICES",
                        declared: declared.saturating_mul(3),
                        parsed: triangles.len() * 3,
                    });
                }
            }
            "NORMALS" => {
                let declared = tokens.section_count(keyword)?;
                normals = Some(tokens.records(declared, read_vec3));
            }
            _ => {
                let skipped = tokens.rest_of_line();
                debug!("Skipping unknown STEP keyword {} {:?}", keyword, skipped);
            }
        }
    }

    let mut mesh = Mesh::from_parts(vertices, triangles);
    match normals.map(|normals| mesh.set_normals(normals)) {
        Some(Ok(())) => {}
        Some(Err(err)) => {
            warn!("Recomputing STEP normals: {}", err);
            mesh.recompute_normals();
        }
        None => {
            debug!("No STEP normals section, recomputing");
            mesh.recompute_normals();
        }
    }

    Ok(MeshModel { name, mesh })
}

/// Writes `model` as a STEP-like document.
///
/// Coordinates use the shortest representation that parses back to the same
/// `f64`. Normals are written only when present and matching the vertex
/// count.
///
/// # Errors
///
/// Propagates errors from `writer`.
pub fn write_step<W: Write>(model: &MeshModel, mut writer: W) -> std::io::Result<()> {
    let mesh = &model.mesh;

    writeln!(writer, "{STEP_MAGIC} {STEP_VERSION}")?;
    writeln!(writer, "NAME {}", model.name)?;

    writeln!(writer, "VERTICES {}", mesh.vertex_count())?;
    for v in mesh.vertices() {
        writeln!(writer, "{} {} {}", v.x, v.y, v.z)?;
    }

    writeln!(writer, "INDICES {}", mesh.triangle_count())?;
    for [a, b, c] in mesh.triangles() {
        writeln!(writer, "{a} {b} {c}")?;
    }

    if let Some(normals) = mesh
        .normals()
        .filter(|normals| normals.len() == mesh.vertex_count())
    {
        writeln!(writer, "NORMALS {}", normals.len())?;
        for n in normals {
            writeln!(writer, "{} {} {}", n.x, n.y, n.z)?;
        }
    }

    Ok(())
}

/// Load a model from a STEP-like file.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be read, otherwise any error
/// of [`parse_step`].
pub fn load_step<P: AsRef<Path>>(path: P) -> IoResult<MeshModel> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| IoError::io(path, e))?;
    let model = parse_step(&text)?;
    debug!(
        "Loaded STEP {}: {} vertices, {} triangles",
        path.display(),
        model.mesh.vertex_count(),
        model.mesh.triangle_count()
    );
    Ok(model)
}

/// Save a model to a STEP-like file, truncating any existing file.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be created or written.
pub fn save_step<P: AsRef<Path>>(model: &MeshModel, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| IoError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_step(model, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(|e| IoError::io(path, e))?;
    debug!(
        "Saved STEP {}: {} vertices, {} triangles",
        path.display(),
        model.mesh.vertex_count(),
        model.mesh.triangle_count()
    );
    Ok(())
}
