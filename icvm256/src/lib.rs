#![deny(clippy::dbg_macro)]
#![deny(clippy::all)]

pub mod arithmetic;
pub mod config;
pub mod curve;
mod error;
pub mod keypair;
pub mod rng;
pub mod signature;

pub use arithmetic::{Field, Point};
pub use curve::{Curve, CurveParameters, NamedCurve};
pub use error::CurveError;
pub use keypair::Keypair;
pub use num_bigint::BigInt;
pub use rng::RandomScalar;
pub use signature::Signature;
