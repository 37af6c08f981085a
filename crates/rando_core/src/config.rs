//! Generator configuration.
//!
//! A [`GeneratorConfig`] decides how a [`RandomGenerator`](crate::RandomGenerator)
//! is seeded and which alphabet [`random_string`](crate::RandomGenerator::random_string)
//! draws from. Configurations are built in code with [`GeneratorConfigBuilder`]
//! or deserialised; both paths validate, so a `GeneratorConfig` value is
//! always usable as is.

use serde::Deserialize;

use crate::alphabet::Alphabet;
use crate::error::RandomError;

/// Where a generator takes its seed from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedSource {
    /// Current UTC time in nanoseconds since the Unix epoch.
    #[default]
    Clock,
    /// A fixed seed; output is reproducible.
    Fixed(u64),
}

/// Configuration for constructing a [`RandomGenerator`](crate::RandomGenerator).
///
/// # Examples
///
/// ```rust
/// use rando_core::{GeneratorConfig, SeedSource};
///
/// let config = GeneratorConfig::builder()
///     .seed(42)
///     .alphabet("abc")
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.seed_source(), SeedSource::Fixed(42));
/// assert_eq!(config.alphabet().len(), 3);
/// ```
///
/// From TOML:
///
/// ```rust
/// use rando_core::{GeneratorConfig, SeedSource};
///
/// let config = GeneratorConfig::from_toml_str("seed = 7\nalphabet = \"01\"").unwrap();
/// assert_eq!(config.seed_source(), SeedSource::Fixed(7));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawGeneratorConfig")]
pub struct GeneratorConfig {
    /// Fixed seed; `None` seeds from the clock.
    seed: Option<u64>,
    /// Override for the default alphabet.
    alphabet: Option<Alphabet>,
}

/// Seed as written in a configuration document.
///
/// TOML integers are signed 64-bit, so seeds above `i64::MAX` are written
/// as decimal strings.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum RawSeed {
    Number(u64),
    Text(String),
}

/// Unvalidated configuration fields, as deserialised.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawGeneratorConfig {
    seed: Option<RawSeed>,
    alphabet: Option<String>,
}

impl TryFrom<RawGeneratorConfig> for GeneratorConfig {
    type Error = RandomError;

    fn try_from(raw: RawGeneratorConfig) -> Result<Self, Self::Error> {
        let seed = match raw.seed {
            None => None,
            Some(RawSeed::Number(seed)) => Some(seed),
            Some(RawSeed::Text(text)) => Some(text.trim().parse::<u64>().map_err(|_| {
                RandomError::config(format!("seed {:?} is not an unsigned 64-bit integer", text))
            })?),
        };
        let alphabet = raw
            .alphabet
            .map(|symbols| {
                Alphabet::new(&symbols)
                    .map_err(|_| RandomError::config("alphabet override must not be empty"))
            })
            .transpose()?;
        Ok(Self { seed, alphabet })
    }
}

impl GeneratorConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Parses and validates a configuration from TOML text.
    ///
    /// Recognised keys, both optional:
    ///
    /// * `seed` - non-negative integer up to `i64::MAX`, or a decimal string
    ///   for the full `u64` range (e.g. `seed = "18446744073709551615"`)
    /// * `alphabet` - non-empty string overriding the default alphabet
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::Config`] on malformed TOML, unknown keys,
    /// an unparsable seed or an empty alphabet.
    pub fn from_toml_str(text: &str) -> Result<Self, RandomError> {
        Ok(toml::from_str(text)?)
    }

    /// Returns the seed source.
    #[inline]
    pub fn seed_source(&self) -> SeedSource {
        match self.seed {
            Some(seed) => SeedSource::Fixed(seed),
            None => SeedSource::Clock,
        }
    }

    /// Returns the alphabet for default string generation: the override if
    /// one is set, otherwise [`Alphabet::default`].
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet.clone().unwrap_or_default()
    }
}

/// Builder for [`GeneratorConfig`].
#[derive(Clone, Debug, Default)]
pub struct GeneratorConfigBuilder {
    seed: Option<u64>,
    alphabet: Option<String>,
}

impl GeneratorConfigBuilder {
    /// Sets a fixed seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the seed source explicitly.
    #[inline]
    pub fn seed_source(mut self, source: SeedSource) -> Self {
        self.seed = match source {
            SeedSource::Clock => None,
            SeedSource::Fixed(seed) => Some(seed),
        };
        self
    }

    /// Overrides the alphabet used by `random_string`.
    #[inline]
    pub fn alphabet(mut self, symbols: impl Into<String>) -> Self {
        self.alphabet = Some(symbols.into());
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::Config`] if the alphabet override is empty.
    pub fn build(self) -> Result<GeneratorConfig, RandomError> {
        GeneratorConfig::try_from(RawGeneratorConfig {
            seed: self.seed.map(RawSeed::Number),
            alphabet: self.alphabet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.seed_source(), SeedSource::Clock);
        assert_eq!(config.alphabet(), Alphabet::default());
    }

    #[test]
    fn test_builder_seed_source_round_trip() {
        let config = GeneratorConfig::builder()
            .seed_source(SeedSource::Fixed(9))
            .build()
            .unwrap();
        assert_eq!(config.seed_source(), SeedSource::Fixed(9));

        let config = GeneratorConfig::builder()
            .seed(9)
            .seed_source(SeedSource::Clock)
            .build()
            .unwrap();
        assert_eq!(config.seed_source(), SeedSource::Clock);
    }

    #[test]
    fn test_builder_rejects_empty_alphabet() {
        let err = GeneratorConfig::builder().alphabet("").build().unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_builder_full_u64_seed() {
        let config = GeneratorConfig::builder().seed(u64::MAX).build().unwrap();
        assert_eq!(config.seed_source(), SeedSource::Fixed(u64::MAX));
    }

    #[test]
    fn test_from_toml_empty_document() {
        let config = GeneratorConfig::from_toml_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_from_toml_full_document() {
        let config = GeneratorConfig::from_toml_str(
            r#"
            seed = 42
            alphabet = "xyz"
            "#,
        )
        .unwrap();
        assert_eq!(config.seed_source(), SeedSource::Fixed(42));
        assert_eq!(config.alphabet().as_slice(), &['x', 'y', 'z']);
    }

    #[test]
    fn test_from_toml_rejects_bad_input() {
        assert!(GeneratorConfig::from_toml_str("seed = -1").unwrap_err().is_config());
        assert!(GeneratorConfig::from_toml_str("alphabet = \"\"").unwrap_err().is_config());
        assert!(GeneratorConfig::from_toml_str("colour = \"red\"").unwrap_err().is_config());
        assert!(GeneratorConfig::from_toml_str("seed = ").unwrap_err().is_config());
        assert!(GeneratorConfig::from_toml_str("seed = \"twelve\"").unwrap_err().is_config());
    }

    #[test]
    fn test_plain_deserialize_rejects_empty_alphabet() {
        let result = toml::from_str::<GeneratorConfig>("seed = 1\nalphabet = \"\"");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("alphabet override must not be empty"));
    }

    #[test]
    fn test_nested_deserialize_validates() {
        #[derive(Debug, Deserialize)]
        struct AppConfig {
            #[allow(dead_code)]
            name: String,
            generator: GeneratorConfig,
        }

        let ok: AppConfig = toml::from_str(
            r#"
            name = "ids"
            [generator]
            seed = 3
            alphabet = "ab"
            "#,
        )
        .unwrap();
        assert_eq!(ok.generator.seed_source(), SeedSource::Fixed(3));
        assert_eq!(ok.generator.alphabet().len(), 2);

        let bad = toml::from_str::<AppConfig>(
            r#"
            name = "ids"
            [generator]
            alphabet = ""
            "#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_seed_above_i64_max_as_string() {
        let config = GeneratorConfig::from_toml_str("seed = \"18446744073709551615\"").unwrap();
        assert_eq!(config.seed_source(), SeedSource::Fixed(u64::MAX));

        let err = GeneratorConfig::from_toml_str("seed = 18446744073709551615").unwrap_err();
        assert!(err.is_config());
    }
}
