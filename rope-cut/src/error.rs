use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CutError {
    /// a rope has to be cut at least once, so anything shorter than 2 has no answer
    #[error("rope length must be at least 2, got {length}")]
    InvalidLength { length: i64 },

    #[error("rope length {length} does not fit into memory indices")]
    LengthTooLarge { length: i64 },

    #[error("maximum product for rope length {length} overflows u64")]
    ProductOverflow { length: usize },

    #[error("rope length {length} exceeds the exhaustive search limit of {limit}")]
    EnumerationTooLarge { length: usize, limit: usize },
}

pub type CutResult<T> = Result<T, CutError>;
