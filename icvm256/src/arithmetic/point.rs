use num_bigint::BigInt;

use std::fmt;

/// A curve point in affine coordinates, or the group identity.
///
/// Points are plain values: they do not know which curve they belong to, so
/// membership is checked through [`crate::Curve::is_on_curve`] or enforced by
/// [`crate::Curve::point`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Point {
    /// The point at infinity.
    Identity,
    Affine { x: BigInt, y: BigInt },
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Identity => write!(f, "identity"),
            Self::Affine { x, y } => {
                writeln!(f)?;
                writeln!(f, "x: {:x}", x)?;
                write!(f, "y: {:x}", y)
            }
        }
    }
}

impl Point {
    /// Unchecked affine point.
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self::Affine { x, y }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    pub fn x(&self) -> Option<&BigInt> {
        match self {
            Self::Identity => None,
            Self::Affine { x, .. } => Some(x),
        }
    }

    pub fn y(&self) -> Option<&BigInt> {
        match self {
            Self::Identity => None,
            Self::Affine { y, .. } => Some(y),
        }
    }

    pub fn coordinates(&self) -> Option<(&BigInt, &BigInt)> {
        match self {
            Self::Identity => None,
            Self::Affine { x, y } => Some((x, y)),
        }
    }
}

impl From<(BigInt, BigInt)> for Point {
    fn from((x, y): (BigInt, BigInt)) -> Self {
        Self::new(x, y)
    }
}
