//! Password strength analysis and generation library
//!
//! Scores a password from 0 to 100, classifies it into one of six
//! strength levels, explains the result with ordered feedback and
//! estimates how long a brute-force attack would take. Four generators
//! produce strong passwords to feed back into the analyzer.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async analysis with cancellation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DENYLIST_PATH`: Optional file of extra common passwords, read by
//!   [`Denylist::from_env`]
//!
//! # Example
//!
//! ```rust
//! use pwd_warrior::{analyze, GeneratorKind, Strength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let analysis = analyze(&password);
//! println!("Score: {}", analysis.score);
//! println!("Level {}: {}", analysis.level(), analysis.strength.label());
//!
//! let generated = GeneratorKind::random().generate_with_thread_rng();
//! assert!(analyze(&generated).strength >= Strength::Strong);
//! ```

// Internal modules
mod crack_time;
mod denylist;
mod evaluator;
mod generator;
mod sections;
mod types;

// Public API
pub use denylist::{denylist_path, easter_egg, Denylist, DenylistError, DENYLIST_PATH_ENV};
pub use evaluator::{analyze, Analyzer};
pub use generator::{
    generate_alphanumeric_password, generate_passphrase, generate_pin, generate_random_password,
    GeneratorKind,
};
pub use types::{CrackTime, PasswordAnalysis, Score, Strength};

#[cfg(feature = "async")]
pub use evaluator::analyze_tx;
