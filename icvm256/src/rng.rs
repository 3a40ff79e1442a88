use num_bigint::{BigInt, RandBigInt};
use rand_core::{CryptoRng, RngCore};

/// Source of uniformly distributed integers for private keys and signing nonces.
pub trait RandomScalar {
    /// Uniform integer in `[low, high)`.
    fn random_in_range(&mut self, low: &BigInt, high: &BigInt) -> BigInt;
}

impl<R: RngCore + CryptoRng> RandomScalar for R {
    fn random_in_range(&mut self, low: &BigInt, high: &BigInt) -> BigInt {
        self.gen_bigint_range(low, high)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let low = BigInt::from(1);
        let high = BigInt::from(19);
        for _ in 0..200 {
            let k = rng.random_in_range(&low, &high);
            assert!(k >= low && k < high);
        }
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let high = BigInt::from(2).pow(255);
        let low = BigInt::from(1);
        let a = StdRng::seed_from_u64(7).random_in_range(&low, &high);
        let b = StdRng::seed_from_u64(7).random_in_range(&low, &high);
        assert_eq!(a, b);
    }
}
