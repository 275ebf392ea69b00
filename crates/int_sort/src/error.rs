use thiserror::Error;

use crate::{Inapplicability, SortAlgorithm};

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SortError {
    #[error("unknown sort algorithm: {0}")]
    UnknownAlgorithm(String),
    #[error("{algorithm} cannot sort this input: {reason}")]
    Inapplicable {
        algorithm: SortAlgorithm,
        reason: Inapplicability,
    },
}
