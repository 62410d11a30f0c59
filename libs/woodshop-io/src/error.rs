//! Error types for mesh I/O operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::MeshFormat;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading or writing a mesh file.
///
/// Every variant is fatal to the call that raised it; no partial model is
/// returned.
#[derive(Debug, Error)]
pub enum IoError {
    /// Magic token or header line missing, or a record that cannot be read.
    #[error("invalid {format} file: {message}")]
    Format {
        /// Format being read.
        format: MeshFormat,
        /// Description of what was invalid.
        message: String,
    },

    /// A section's declared count disagrees with the records parsed.
    #[error("{section} declares {declared} values but {parsed} were parsed")]
    StructuralMismatch {
        /// Section keyword.
        section: &'static str,
        /// Count announced by the file.
        declared: usize,
        /// Count actually parsed.
        parsed: usize,
    },

    /// An IGES-like file without vertices or without faces.
    #[error("missing geometry: {vertices} vertices, {faces} faces")]
    MissingGeometry {
        /// Vertex records found.
        vertices: usize,
        /// Face records found.
        faces: usize,
    },

    /// File could not be opened, created, read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Offending path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Unknown file format (unrecognized extension).
    #[error("unknown file format: .{extension}")]
    UnknownFormat {
        /// The unrecognized extension.
        extension: String,
    },
}

impl IoError {
    /// Create a `Format` error for the given format.
    #[must_use]
    pub fn format(format: MeshFormat, message: impl Into<String>) -> Self {
        Self::Format {
            format,
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_names_format() {
        let err = IoError::format(MeshFormat::Step, "missing magic token");
        assert_eq!(err.to_string(), "invalid STEP file: missing magic token");
    }

    #[test]
    fn structural_mismatch_display() {
        let err = IoError::StructuralMismatch {
            section: "VERTICES",
            declared: 4,
            parsed: 3,
        };
        assert_eq!(err.to_string(), "VERTICES declares 4 values but 3 were parsed");
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error as _;

        let err = IoError::io(
            "/nope/model.stp",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("/nope/model.stp"));
        assert!(err.source().is_some());
    }
}
