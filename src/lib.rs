pub mod base32;
pub mod config;
pub mod entropy;
pub mod error;
pub mod generate;
pub mod password;
pub mod random;
pub mod signature;
pub mod timestamp;
pub mod token;
pub mod uuids;

pub use error::{XgenError, Result};
pub use config::IdConfig;
pub use entropy::Entropy;
pub use generate::{IdGenerator, generate_micros_id, generate_nanos_id};
pub use password::{hash_password, verify_password};
pub use signature::{is_valid_timestamp, is_valid_timestamp_default};
pub use timestamp::Resolution;
pub use token::{generate_api_key, generate_secret_key};
pub use uuids::{generate_uuid, generate_uuid_without_dashes};

/// Random Crockford Base32 string of exactly `n` characters.
///
/// ```
/// let s = xgen::random_base32_string(10);
/// assert_eq!(s.len(), 10);
/// assert!(xgen::base32::is_base32(&s));
/// ```
pub fn random_base32_string(n: usize) -> String {
    random::random_base32_string(n)
}
