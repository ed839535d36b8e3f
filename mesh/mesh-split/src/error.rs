//! Error types for splitting operations.

use thiserror::Error;

/// Result type for splitting operations.
pub type SplitResult<T> = Result<T, SplitError>;

/// Errors that can occur while splitting a mesh by group.
///
/// Both variants mean the group tags are inconsistent with the mesh
/// topology. Tags written by [`label_components`](crate::label_components)
/// never produce them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// An element carries a tag outside the group range.
    #[error("{element} {index} has group {group}, but only {group_count} groups exist")]
    GroupOutOfRange {
        /// Kind of element (`"vertex"`, `"edge"` or `"face"`).
        element: &'static str,
        /// Index of the element in the source mesh.
        index: usize,
        /// The offending tag.
        group: u32,
        /// Upper bound on tags: the vertex count for vertices, the group
        /// count implied by the vertex tags otherwise.
        group_count: usize,
    },

    /// An edge or face references a vertex tagged with a different group.
    #[error("{element} {index} of group {group} references vertex {vertex} of another group")]
    CrossGroupReference {
        /// Kind of element (`"vertex"`, `"edge"` or `"face"`).
        element: &'static str,
        /// Index of the element in the source mesh.
        index: usize,
        /// Group of the element.
        group: u32,
        /// The foreign vertex index.
        vertex: u32,
    },
}
