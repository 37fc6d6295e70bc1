use std::fmt;

/// Error type for the binding-facing API.
///
/// The triangulator and BVH themselves never fail on well-typed input - the
/// in-band `None`/empty-sequence results documented on each function cover
/// every algorithmic edge case. `InvalidInput` is reserved for malformed data
/// crossing the flat-array boundary in [`crate::api`].
#[derive(Debug)]
pub enum Error {
    /// A coordinate slice did not have an even number of floats.
    OddCoordinateCount(usize),
    /// An index slice did not have a length that is a multiple of 3.
    IndexCountNotMultipleOfThree(usize),
    /// An index triple referenced a point outside the coordinate slice.
    IndexOutOfBounds { index: i32, point_count: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OddCoordinateCount(len) => {
                write!(f, "coordinate slice has odd length {len}, expected 2*N floats")
            }
            Error::IndexCountNotMultipleOfThree(len) => {
                write!(f, "index slice has length {len}, expected a multiple of 3")
            }
            Error::IndexOutOfBounds { index, point_count } => {
                write!(f, "index {index} out of bounds for {point_count} points")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias for the binding-facing API.
pub type Result<T> = std::result::Result<T, Error>;
