use crate::curve::{Curve, NamedCurve, DEFAULT_MAX_SIGN_ATTEMPTS};
use crate::CurveError;

use config::{Config, ConfigError, Environment};
use dotenv::dotenv;

pub const ENV_PREFIX: &str = "ICVM256";

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub curve: NamedCurve,
    #[serde(default = "default_max_sign_attempts")]
    pub max_sign_attempts: u32,
}

fn default_max_sign_attempts() -> u32 {
    DEFAULT_MAX_SIGN_ATTEMPTS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            curve: NamedCurve::default(),
            max_sign_attempts: DEFAULT_MAX_SIGN_ATTEMPTS,
        }
    }
}

impl Settings {
    /// Reads `ICVM256_CURVE` and `ICVM256_MAX_SIGN_ATTEMPTS`, after loading
    /// an optional `.env` file.
    pub fn load() -> Result<Self, ConfigError> {
        // a missing .env file is fine
        dotenv().ok();
        Self::from_source(Environment::with_prefix(ENV_PREFIX))
    }

    pub fn from_source<S>(source: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    pub fn build_curve(&self) -> Result<Curve, CurveError> {
        Ok(Curve::named(self.curve)?.with_max_sign_attempts(self.max_sign_attempts))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use config::{File, FileFormat};

    fn from_toml(toml: &str) -> Result<Settings, ConfigError> {
        Settings::from_source(File::from_str(toml, FileFormat::Toml))
    }

    #[test]
    fn defaults() {
        let settings = from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.curve, NamedCurve::P256);
        assert_eq!(settings.max_sign_attempts, DEFAULT_MAX_SIGN_ATTEMPTS);
    }

    #[test]
    fn explicit_values() {
        let settings = from_toml("curve = \"toy17\"\nmax_sign_attempts = 5").unwrap();
        assert_eq!(settings.curve, NamedCurve::Toy17);
        assert_eq!(settings.max_sign_attempts, 5);

        let curve = settings.build_curve().unwrap();
        assert_eq!(curve.order(), &num_bigint::BigInt::from(19));
        assert_eq!(curve.max_sign_attempts(), 5);
    }

    #[test]
    fn invalid_values() {
        assert!(from_toml("curve = \"p521\"").is_err());
        assert!(from_toml("max_sign_attempts = \"many\"").is_err());
    }

    #[test]
    fn icvm256_selection_fails_at_construction() {
        let settings = from_toml("curve = \"icvm256\"").unwrap();
        assert!(matches!(settings.build_curve(), Err(CurveError::InvalidParameter(_))));
    }
}
