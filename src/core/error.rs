use thiserror::Error;

/// Failures raised by the data-dependent entry points (conversion, diagonal
/// scaling, checked padding). Pure composition never produces these; shape
/// errors there come straight from the matrix backend.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuijyError {
    #[error("Empty Data: cannot build a matrix with no entries")]
    EmptyData,
    #[error("Ragged Data: row {row} has {found} entries, expected {expected}")]
    RaggedData {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Unknown QType: '{0}' (try: ket | bra | dop)")]
    UnknownQType(String),
    #[error("Shape Mismatch in {op}: expected {expected}, found {found}")]
    ShapeMismatch {
        op: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Invalid Layout: {0}")]
    InvalidLayout(String),
    #[error("Unknown Operator: '{0}'")]
    UnknownOperator(String),
}

pub type Result<T, E = QuijyError> = std::result::Result<T, E>;
