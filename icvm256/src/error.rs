use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("attempted to invert zero")]
    DivisionByZero,
    #[error("element is not invertible under the given modulus")]
    NotInvertible,
    #[error("invalid curve parameter: {0}")]
    InvalidParameter(String),
    #[error("point is not on the curve")]
    InvalidPoint,
    #[error("private key is zero modulo the group order")]
    InvalidPrivateKey,
    #[error("shared point is the point at infinity")]
    InvalidResult,
    #[error("no valid nonce found after {0} attempts")]
    SigningFailed(u32),
}
