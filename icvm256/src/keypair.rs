use crate::arithmetic::Point;
use crate::curve::Curve;
use crate::rng::RandomScalar;
use crate::CurveError;

use num_bigint::BigInt;
use num_traits::One;
use sha2::Digest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypair {
    private_key: BigInt,
    public_key: Point,
}

impl Keypair {
    pub fn private_key(&self) -> &BigInt {
        &self.private_key
    }

    pub fn public_key(&self) -> &Point {
        &self.public_key
    }

    pub fn into_parts(self) -> (BigInt, Point) {
        (self.private_key, self.public_key)
    }
}

impl<D: Digest> Curve<D> {
    /// Derives the keypair belonging to `private_key`, which must be nonzero
    /// modulo the group order.
    pub fn keypair(&self, private_key: &BigInt) -> Result<Keypair, CurveError> {
        let private_key = self.scalar_field().reduce(private_key);
        let public_key = self.generator_multiply(&private_key)?;
        if public_key.is_identity() {
            return Err(CurveError::InvalidPrivateKey);
        }
        Ok(Keypair {
            private_key,
            public_key,
        })
    }

    /// Draws a private key uniformly from `[1, n - 1]`.
    pub fn generate_keypair<R: RandomScalar + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Keypair, CurveError> {
        let private_key = rng.random_in_range(&BigInt::one(), self.order());
        self.keypair(&private_key)
    }

    /// Returns the x-coordinate of `private_key * public_key`. Public keys off
    /// the curve are rejected with [`CurveError::InvalidPoint`].
    pub fn ecdh_shared_secret(
        &self,
        private_key: &BigInt,
        public_key: &Point,
    ) -> Result<BigInt, CurveError> {
        if !self.is_on_curve(public_key) {
            tracing::warn!("ecdh public key is not on the curve");
            return Err(CurveError::InvalidPoint);
        }
        let shared = self.scalar_multiply(public_key, private_key)?;
        match shared {
            Point::Affine { x, .. } => Ok(x),
            Point::Identity => {
                tracing::warn!("ecdh shared point is the point at infinity");
                Err(CurveError::InvalidResult)
            }
        }
    }
}
