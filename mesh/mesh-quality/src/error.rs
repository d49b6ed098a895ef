//! Error types for mesh quality analysis.

use thiserror::Error;

/// Result type for quality analysis operations.
pub type QualityResult<T> = Result<T, QualityError>;

/// Errors that can occur during mesh quality analysis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QualityError {
    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {index} (mesh has {vertex_count} vertices)")]
    InvalidIndex {
        /// Index of the offending face.
        face: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Total number of vertices in the mesh.
        vertex_count: usize,
    },

    /// Analysis configuration is unusable.
    #[error("invalid quality configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        reason: String,
    },
}
