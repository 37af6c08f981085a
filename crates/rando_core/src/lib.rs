//! # rando_core
//!
//! Random-data helpers on top of a seeded PRNG: alphanumeric strings,
//! booleans, single selections and deduplicated samples.
//!
//! Everything is drawn from the generator's own [`rand::rngs::StdRng`], so a
//! fixed seed reproduces the whole output sequence. The generator is not
//! cryptographically secure.
//!
//! ## Usage Example
//!
//! ```rust
//! use rando_core::RandomGenerator;
//!
//! let mut rng = RandomGenerator::from_seed(42);
//!
//! let token = rng.random_string(16);
//! assert!(token.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
//!
//! let hex = rng.random_string_from_alphabet(8, &['0', '1', '2', '3', '4', '5', '6', '7',
//!                                                '8', '9', 'a', 'b', 'c', 'd', 'e', 'f']);
//! assert_eq!(hex.unwrap().len(), 8);
//!
//! let coin = rng.random_bool();
//! let winner = rng.select_one(&["alice", "bob"]);
//! let panel = rng.sample(&["a", "b", "c", "d"], 2).unwrap();
//! # let _ = (coin, winner, panel);
//! ```
//!
//! ## Module Structure
//!
//! - [`generator`]: [`RandomGenerator`] and its draw operations
//! - [`alphabet`]: [`Alphabet`] and [`DEFAULT_ALPHABET`]
//! - [`config`]: [`GeneratorConfig`] builder and TOML loading
//! - [`error`]: [`RandomError`]

pub mod alphabet;
pub mod config;
pub mod error;
pub mod generator;

pub use alphabet::{Alphabet, DEFAULT_ALPHABET};
pub use config::{GeneratorConfig, GeneratorConfigBuilder, SeedSource};
pub use error::RandomError;
pub use generator::RandomGenerator;
