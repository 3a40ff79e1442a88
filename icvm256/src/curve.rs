use crate::arithmetic::{Field, Point};
use crate::CurveError;

use bigint::{Encoding, U256};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::Zero;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use std::fmt;
use std::marker::PhantomData;

/// Number of nonces tried by [`Curve::sign_message`] before giving up.
pub const DEFAULT_MAX_SIGN_ATTEMPTS: u32 = 64;

const ICVM256_PRIME_MODULUS: U256 =
    U256::from_be_hex("ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff43");
const ICVM256_ORDER: U256 =
    U256::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");
const ICVM256_COEFF_A: i64 = -3;
const ICVM256_COEFF_B: U256 =
    U256::from_be_hex("00173cfb5a484025dd1ba0b38a9d562696a10d931eeca0b05fce16e1220afbb1");
const ICVM256_GENERATOR_X: U256 =
    U256::from_be_hex("6b17d1f2e12c4247f8bce6e563a440f277037d812dea624057db0a83be25d9c7");
const ICVM256_GENERATOR_Y: U256 =
    U256::from_be_hex("4fe342e2fd01aadc49469c5bf4d68402e10e55d9260bade5d3840f68f3dad0ce");

const P256_PRIME_MODULUS: U256 =
    U256::from_be_hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");
const P256_ORDER: U256 =
    U256::from_be_hex("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");
const P256_COEFF_A: i64 = -3;
const P256_COEFF_B: U256 =
    U256::from_be_hex("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");
const P256_GENERATOR_X: U256 =
    U256::from_be_hex("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296");
const P256_GENERATOR_Y: U256 =
    U256::from_be_hex("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5");

fn to_bigint(value: &U256) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, &value.to_be_bytes())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedCurve {
    #[default]
    P256,
    Icvm256,
    Toy17,
}

/// Parameters of `y^2 = x^3 + ax + b (mod p)` with a generator `(gx, gy)` of order `n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParameters {
    pub a: BigInt,
    pub b: BigInt,
    pub p: BigInt,
    pub n: BigInt,
    pub gx: BigInt,
    pub gy: BigInt,
}

impl CurveParameters {
    pub fn new(a: BigInt, b: BigInt, p: BigInt, n: BigInt, gx: BigInt, gy: BigInt) -> Self {
        Self { a, b, p, n, gx, gy }
    }

    /// The ICVM256 constants as published.
    ///
    /// NOTE the published generator does not satisfy the curve equation, so
    /// these parameters are rejected by [`Curve::from_parameters`].
    pub fn icvm256() -> Self {
        Self {
            a: BigInt::from(ICVM256_COEFF_A),
            b: to_bigint(&ICVM256_COEFF_B),
            p: to_bigint(&ICVM256_PRIME_MODULUS),
            n: to_bigint(&ICVM256_ORDER),
            gx: to_bigint(&ICVM256_GENERATOR_X),
            gy: to_bigint(&ICVM256_GENERATOR_Y),
        }
    }

    /// NIST P-256 (FIPS 186-4 D.1.2.3).
    pub fn p256() -> Self {
        Self {
            a: BigInt::from(P256_COEFF_A),
            b: to_bigint(&P256_COEFF_B),
            p: to_bigint(&P256_PRIME_MODULUS),
            n: to_bigint(&P256_ORDER),
            gx: to_bigint(&P256_GENERATOR_X),
            gy: to_bigint(&P256_GENERATOR_Y),
        }
    }

    /// `y^2 = x^3 + 2x + 2` over `F_17`, generator `(5, 1)` of order 19.
    pub fn toy17() -> Self {
        Self {
            a: BigInt::from(2),
            b: BigInt::from(2),
            p: BigInt::from(17),
            n: BigInt::from(19),
            gx: BigInt::from(5),
            gy: BigInt::from(1),
        }
    }

    pub fn named(name: NamedCurve) -> Self {
        match name {
            NamedCurve::P256 => Self::p256(),
            NamedCurve::Icvm256 => Self::icvm256(),
            NamedCurve::Toy17 => Self::toy17(),
        }
    }
}

/// A short Weierstrass curve together with the digest used to hash messages
/// for signing.
///
/// The curve holds no mutable state, every operation is a pure function of
/// its arguments and the parameters fixed at construction.
pub struct Curve<D = Sha256> {
    params: CurveParameters,
    field: Field,
    scalars: Field,
    generator: Point,
    max_sign_attempts: u32,
    digest: PhantomData<fn() -> D>,
}

impl<D> Clone for Curve<D> {
    fn clone(&self) -> Self {
        Self {
            params: self.params.clone(),
            field: self.field.clone(),
            scalars: self.scalars.clone(),
            generator: self.generator.clone(),
            max_sign_attempts: self.max_sign_attempts,
            digest: PhantomData,
        }
    }
}

impl<D> fmt::Debug for Curve<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Curve")
            .field("params", &self.params)
            .field("max_sign_attempts", &self.max_sign_attempts)
            .finish()
    }
}

impl Curve {
    pub fn new(
        a: BigInt,
        b: BigInt,
        p: BigInt,
        n: BigInt,
        gx: BigInt,
        gy: BigInt,
    ) -> Result<Self, CurveError> {
        Self::from_parameters(CurveParameters::new(a, b, p, n, gx, gy))
    }

    pub fn from_parameters(params: CurveParameters) -> Result<Self, CurveError> {
        Self::with_digest(params)
    }

    pub fn icvm256() -> Result<Self, CurveError> {
        Self::from_parameters(CurveParameters::icvm256())
    }

    pub fn p256() -> Result<Self, CurveError> {
        Self::from_parameters(CurveParameters::p256())
    }

    pub fn toy17() -> Result<Self, CurveError> {
        Self::from_parameters(CurveParameters::toy17())
    }

    pub fn named(name: NamedCurve) -> Result<Self, CurveError> {
        Self::from_parameters(CurveParameters::named(name))
    }
}

impl<D: Digest> Curve<D> {
    /// Builds a curve hashing messages with `D`.
    ///
    /// Fails with [`CurveError::InvalidParameter`] if the generator is not on
    /// the curve, or if `p` or `n` is not greater than 1. Neither the primality
    /// of `p` nor `n * G = identity` is checked.
    pub fn with_digest(params: CurveParameters) -> Result<Self, CurveError> {
        let field = Field::new(params.p.clone())?;
        let scalars = Field::new(params.n.clone())?;
        let generator = Point::new(field.reduce(&params.gx), field.reduce(&params.gy));

        let curve = Self {
            params,
            field,
            scalars,
            generator,
            max_sign_attempts: DEFAULT_MAX_SIGN_ATTEMPTS,
            digest: PhantomData,
        };

        if !curve.is_on_curve(&curve.generator) {
            tracing::warn!("rejected curve parameters: generator is not on the curve");
            return Err(CurveError::InvalidParameter(
                "generator point is not on the curve".to_string(),
            ));
        }

        tracing::debug!(field_bits = curve.params.p.bits(), "constructed curve");
        Ok(curve)
    }

    pub fn with_max_sign_attempts(mut self, attempts: u32) -> Self {
        self.max_sign_attempts = attempts;
        self
    }

    pub fn max_sign_attempts(&self) -> u32 {
        self.max_sign_attempts
    }

    pub fn parameters(&self) -> &CurveParameters {
        &self.params
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Arithmetic modulo the generator's order.
    pub fn scalar_field(&self) -> &Field {
        &self.scalars
    }

    pub fn order(&self) -> &BigInt {
        self.scalars.modulus()
    }

    pub fn generator(&self) -> &Point {
        &self.generator
    }

    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine { x, y } => {
                let f = &self.field;
                let left = f.square(y);
                let right = f.add(
                    &f.add(&f.cube(x), &f.multiply(&self.params.a, x)),
                    &self.params.b,
                );
                left == right
            }
        }
    }

    /// Checked affine constructor, coordinates are reduced modulo `p`.
    pub fn point(&self, x: &BigInt, y: &BigInt) -> Result<Point, CurveError> {
        let point = Point::new(self.field.reduce(x), self.field.reduce(y));
        if self.is_on_curve(&point) {
            Ok(point)
        } else {
            Err(CurveError::InvalidPoint)
        }
    }

    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::new(self.field.reduce(x), self.field.neg(y)),
        }
    }

    /// Chord-and-tangent addition.
    ///
    /// The division inside can only hit a zero denominator when an input is
    /// not on the curve, in which case [`CurveError::DivisionByZero`] is
    /// returned.
    pub fn add_points(&self, lhs: &Point, rhs: &Point) -> Result<Point, CurveError> {
        let ((x1, y1), (x2, y2)) = match (lhs, rhs) {
            (Point::Identity, _) => return Ok(rhs.clone()),
            (_, Point::Identity) => return Ok(lhs.clone()),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };

        let f = &self.field;
        let (x1, y1) = (f.reduce(x1), f.reduce(y1));
        let (x2, y2) = (f.reduce(x2), f.reduce(y2));

        if x1 == x2 && y1 == f.neg(&y2) {
            return Ok(Point::Identity);
        }

        let slope = if x1 == x2 && y1 == y2 {
            // (3x^2 + a) / 2y
            let numerator = f.add(&f.multiply(&BigInt::from(3), &f.square(&x1)), &self.params.a);
            let denominator = f.multiply(&BigInt::from(2), &y1);
            f.divide(&numerator, &denominator)?
        } else {
            f.divide(&f.subtract(&y2, &y1), &f.subtract(&x2, &x1))?
        };

        let x3 = f.subtract(&f.subtract(&f.square(&slope), &x1), &x2);
        let y3 = f.subtract(&f.multiply(&slope, &f.subtract(&x1, &x3)), &y1);

        Ok(Point::new(x3, y3))
    }

    pub fn double(&self, point: &Point) -> Result<Point, CurveError> {
        self.add_points(point, point)
    }

    /// Double-and-add over the bits of `scalar mod n`, least significant first.
    pub fn scalar_multiply(&self, point: &Point, scalar: &BigInt) -> Result<Point, CurveError> {
        let mut scalar = self.scalars.reduce(scalar);
        if scalar.is_zero() || point.is_identity() {
            return Ok(Point::Identity);
        }

        let mut result = Point::Identity;
        let mut addend = point.clone();
        while !scalar.is_zero() {
            if scalar.is_odd() {
                result = self.add_points(&result, &addend)?;
            }
            scalar >>= 1;
            if !scalar.is_zero() {
                addend = self.double(&addend)?;
            }
        }
        Ok(result)
    }

    pub fn generator_multiply(&self, scalar: &BigInt) -> Result<Point, CurveError> {
        self.scalar_multiply(&self.generator, scalar)
    }
}
