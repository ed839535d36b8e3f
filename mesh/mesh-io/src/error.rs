//! Error types for mesh I/O operations.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Section of an edge-indexed mesh file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// The `NV NE NF` count line.
    Header,
    /// Vertex coordinate triples.
    Vertices,
    /// Vertex index pairs.
    Edges,
    /// Edge index triples.
    Triangles,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Header => "header",
            Self::Vertices => "vertex",
            Self::Edges => "edge",
            Self::Triangles => "triangle",
        })
    }
}

/// Errors that can occur during mesh I/O operations.
///
/// Record numbers are 1-based, matching the indices used inside the file.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// A header count is not a non-negative integer.
    #[error("invalid {field} count in header: {token:?}")]
    InvalidHeader {
        /// Which count (`"vertex"`, `"edge"` or `"triangle"`).
        field: &'static str,
        /// The offending token.
        token: String,
    },

    /// The input ended before all declared records were read.
    #[error("unexpected end of file in {section} section: declared {expected}, read {got}")]
    UnexpectedEof {
        /// Section being read.
        section: Section,
        /// Number of records declared.
        expected: usize,
        /// Number of complete records read.
        got: usize,
    },

    /// A field inside a record could not be parsed.
    #[error("invalid number in {section} record {record}: {token:?}")]
    InvalidNumber {
        /// Section being read.
        section: Section,
        /// 1-based record number.
        record: usize,
        /// The offending token.
        token: String,
    },

    /// An edge references a vertex outside `1..=vertex_count`.
    #[error("edge {edge} references vertex {vertex}, file declares {vertex_count} vertices")]
    VertexOutOfRange {
        /// 1-based edge record.
        edge: usize,
        /// The referenced vertex index as written.
        vertex: usize,
        /// Declared vertex count.
        vertex_count: usize,
    },

    /// A triangle references an edge outside `1..=edge_count`.
    #[error("triangle {triangle} references edge {edge}, file declares {edge_count} edges")]
    EdgeOutOfRange {
        /// 1-based triangle record.
        triangle: usize,
        /// The referenced edge index as written.
        edge: usize,
        /// Declared edge count.
        edge_count: usize,
    },

    /// The three edges of a triangle do not form a closed loop.
    #[error("triangle {triangle} edges {edges:?} do not form a closed loop")]
    OpenTriangle {
        /// 1-based triangle record.
        triangle: usize,
        /// The referenced edge indices as written.
        edges: [usize; 3],
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
