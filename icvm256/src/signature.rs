use crate::arithmetic::Point;
use crate::curve::Curve;
use crate::rng::RandomScalar;
use crate::CurveError;

use num_bigint::{BigInt, Sign};
use num_traits::{One, Zero};
use sha2::Digest;

/// ECDSA signature, both components in `[1, n - 1]` when produced by
/// [`Curve::sign_message`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    r: BigInt,
    s: BigInt,
}

impl Signature {
    pub fn new(r: BigInt, s: BigInt) -> Self {
        Self { r, s }
    }

    pub fn r(&self) -> &BigInt {
        &self.r
    }

    pub fn s(&self) -> &BigInt {
        &self.s
    }
}

impl From<(BigInt, BigInt)> for Signature {
    fn from((r, s): (BigInt, BigInt)) -> Self {
        Self::new(r, s)
    }
}

impl<D: Digest> Curve<D> {
    /// Digest of `msg` read as a big-endian integer, reduced modulo `n`.
    pub fn hash_message(&self, msg: &[u8]) -> BigInt {
        let digest = D::digest(msg);
        self.scalar_field()
            .reduce(&BigInt::from_bytes_be(Sign::Plus, digest.as_slice()))
    }

    pub fn sign_message<R: RandomScalar + ?Sized>(
        &self,
        rng: &mut R,
        private_key: &BigInt,
        msg: &[u8],
    ) -> Result<Signature, CurveError> {
        let scalars = self.scalar_field();
        let private_key = scalars.reduce(private_key);
        if private_key.is_zero() {
            return Err(CurveError::InvalidPrivateKey);
        }
        let z = self.hash_message(msg);

        for attempt in 1..=self.max_sign_attempts() {
            let k = rng.random_in_range(&BigInt::one(), self.order());
            let r = match self.generator_multiply(&k)? {
                Point::Affine { x, .. } => scalars.reduce(&x),
                Point::Identity => BigInt::zero(),
            };
            if r.is_zero() {
                tracing::debug!(attempt, "nonce produced r = 0, retrying");
                continue;
            }
            let k_inv = scalars.inverse(&k)?;
            let s = scalars.multiply(
                &k_inv,
                &scalars.add(&z, &scalars.multiply(&r, &private_key)),
            );
            if s.is_zero() {
                tracing::debug!(attempt, "nonce produced s = 0, retrying");
                continue;
            }
            return Ok(Signature { r, s });
        }

        tracing::warn!(attempts = self.max_sign_attempts(), "signing nonce retries exhausted");
        Err(CurveError::SigningFailed(self.max_sign_attempts()))
    }

    /// Every failure, including malformed input, yields `false`.
    pub fn verify_signature(&self, public_key: &Point, msg: &[u8], signature: &Signature) -> bool {
        if public_key.is_identity() || !self.is_on_curve(public_key) {
            return false;
        }
        let scalars = self.scalar_field();
        let in_range = |v: &BigInt| v >= &BigInt::one() && v < self.order();
        if !in_range(&signature.r) || !in_range(&signature.s) {
            return false;
        }

        let z = self.hash_message(msg);
        let w = match scalars.inverse(&signature.s) {
            Ok(w) => w,
            Err(_) => return false,
        };
        let u1 = scalars.multiply(&z, &w);
        let u2 = scalars.multiply(&signature.r, &w);

        let point = self
            .generator_multiply(&u1)
            .and_then(|p1| {
                let p2 = self.scalar_multiply(public_key, &u2)?;
                self.add_points(&p1, &p2)
            });

        match point {
            Ok(Point::Affine { x, .. }) => scalars.reduce(&x) == signature.r,
            Ok(Point::Identity) | Err(_) => false,
        }
    }
}
