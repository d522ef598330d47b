/// The decimator's result type.
pub type DecimationResult = Result<crate::DecimationInfo, DecimationError>;

pub use crate::mesh::InvalidMesh;

use std::fmt;

/// An error that can happen while decimating a mesh.
#[derive(Clone, Debug, PartialEq)]
pub enum DecimationError {
    UnsupportedParameter(UnsupportedParameter),
    InvalidMesh(InvalidMesh),
}

impl fmt::Display for DecimationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecimationError::UnsupportedParameter(e) => {
                write!(f, "Unsupported parameter: {}", e)
            }
            DecimationError::InvalidMesh(e) => {
                write!(f, "Invalid mesh: {}", e)
            }
        }
    }
}

impl std::error::Error for DecimationError {}

impl From<UnsupportedParameter> for DecimationError {
    fn from(value: UnsupportedParameter) -> Self {
        DecimationError::UnsupportedParameter(value)
    }
}

impl From<InvalidMesh> for DecimationError {
    fn from(value: InvalidMesh) -> Self {
        DecimationError::InvalidMesh(value)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnsupportedParameter {
    /// The compression factor must be finite and greater than one.
    CompressionFactor,
    /// The batch fraction must be in `(0, 1]`.
    BatchFraction,
}

impl fmt::Display for UnsupportedParameter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UnsupportedParameter::CompressionFactor => {
                write!(f, "Compression factor must be finite and greater than one")
            }
            UnsupportedParameter::BatchFraction => {
                write!(f, "Batch fraction must be in (0, 1]")
            }
        }
    }
}

impl std::error::Error for UnsupportedParameter {}
