use thiserror::Error;

/// Rejections reported by the checked `try_*` variants.
///
/// The regular operations never produce these: they assume the caller has
/// already verified their preconditions.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Error {
	#[error("matrix is singular (determinant {determinant})")]
	Singular { determinant: f64 },
	#[error("vector has zero length")]
	ZeroLength,
	#[error("quaternion has zero norm")]
	ZeroQuaternion,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
