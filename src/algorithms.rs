// This file has code from https://github.com/LIHPC-Computational-Geometry/coupe
use std::fmt;

mod spectral_bisection;

pub use spectral_bisection::SpectralBisection;
pub use spectral_bisection::SpectralDiagnostics;


/// Common errors thrown by algorithms.
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Input sets don't have matching lengths.
    InputLenMismatch { expected: usize, actual: usize },

    /// The whole spectrum of the Laplacian is numerically zero, so there is
    /// no Fiedler pair to split the graph with.
    DegenerateSpectrum,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputLenMismatch { expected, actual } => write!(
                f,
                "input sets don't have the same length (expected {expected} items, got {actual})",
            ),
            Error::DegenerateSpectrum => write!(
                f,
                "every eigenvalue of the Laplacian is numerically zero, no Fiedler vector exists",
            ),
        }
    }
}

impl std::error::Error for Error {}
