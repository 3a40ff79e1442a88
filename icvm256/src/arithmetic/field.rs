use crate::CurveError;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Arithmetic modulo a single prime.
///
/// Operands may be any integer (negative or not yet reduced), every result is
/// reduced into `[0, modulus)`. Primality of the modulus is not checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    modulus: BigInt,
}

impl Field {
    pub fn new(modulus: BigInt) -> Result<Self, CurveError> {
        if modulus <= BigInt::one() {
            return Err(CurveError::InvalidParameter(format!(
                "modulus must be greater than one, got {}",
                modulus
            )));
        }
        Ok(Self { modulus })
    }

    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    pub fn reduce(&self, a: &BigInt) -> BigInt {
        a.mod_floor(&self.modulus)
    }

    pub fn add(&self, a: &BigInt, b: &BigInt) -> BigInt {
        (a + b).mod_floor(&self.modulus)
    }

    pub fn neg(&self, a: &BigInt) -> BigInt {
        (-a).mod_floor(&self.modulus)
    }

    pub fn subtract(&self, a: &BigInt, b: &BigInt) -> BigInt {
        (a - b).mod_floor(&self.modulus)
    }

    pub fn multiply(&self, a: &BigInt, b: &BigInt) -> BigInt {
        (a * b).mod_floor(&self.modulus)
    }

    /// Multiplicative inverse via the iterative extended Euclidean algorithm.
    pub fn inverse(&self, a: &BigInt) -> Result<BigInt, CurveError> {
        let mut old_r = self.reduce(a);
        if old_r.is_zero() {
            return Err(CurveError::DivisionByZero);
        }
        let mut r = self.modulus.clone();
        let mut old_s = BigInt::one();
        let mut s = BigInt::zero();

        while !r.is_zero() {
            let quotient = old_r.div_floor(&r);
            let next_r = &old_r - &quotient * &r;
            old_r = std::mem::replace(&mut r, next_r);
            let next_s = &old_s - &quotient * &s;
            old_s = std::mem::replace(&mut s, next_s);
        }

        // old_r is gcd(a, modulus) here
        if !old_r.is_one() {
            return Err(CurveError::NotInvertible);
        }
        Ok(self.reduce(&old_s))
    }

    pub fn divide(&self, a: &BigInt, b: &BigInt) -> Result<BigInt, CurveError> {
        Ok(self.multiply(a, &self.inverse(b)?))
    }

    /// Square-and-multiply exponentiation, `pow(a, 0) == 1`.
    pub fn pow(&self, a: &BigInt, exponent: &BigUint) -> BigInt {
        let mut result = BigInt::one();
        let mut base = self.reduce(a);
        let mut exponent = exponent.clone();
        while !exponent.is_zero() {
            if exponent.is_odd() {
                result = self.multiply(&result, &base);
            }
            base = self.multiply(&base, &base);
            exponent >>= 1;
        }
        result
    }

    pub fn square(&self, a: &BigInt) -> BigInt {
        self.pow(a, &BigUint::from(2u32))
    }

    pub fn cube(&self, a: &BigInt) -> BigInt {
        self.pow(a, &BigUint::from(3u32))
    }
}
