//! Error types shared by all graphgen components
//!
//! Every fallible operation validates its arguments before touching any state,
//! so a returned error never leaves a structure partially mutated.

/// Errors reported by sampling, union-find, and graph construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphGenError {
    /// Inconsistent size or count parameters (e.g. sampling more values than
    /// the range holds, or adding edges to an empty graph)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An element or vertex id outside the valid range `[0, len)`
    #[error("index {index} out of range for {len} elements")]
    OutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, GraphGenError>;
