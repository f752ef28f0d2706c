use crate::config::IdConfig;
use crate::random::random_base32_string;
use crate::timestamp::{self, Resolution};

/// Sortable ID generator: fixed-width timestamp prefix plus random suffix.
///
/// IDs from the same generator sort lexicographically in creation order as long
/// as the prefix does not wrap. IDs sharing a prefix (same clock tick) are
/// ordered only by their random suffix, i.e. arbitrarily.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator {
    config: IdConfig,
}

impl IdGenerator {
    /// Create a new ID generator with the given config.
    pub const fn new(config: IdConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &IdConfig {
        &self.config
    }

    pub const fn resolution(&self) -> Resolution {
        self.config.resolution
    }

    /// Generate an ID stamped with the current time.
    ///
    /// ```
    /// use xgen::{IdConfig, IdGenerator};
    ///
    /// let generator = IdGenerator::new(IdConfig::micros().suffix_length(8));
    /// let id = generator.generate();
    /// assert_eq!(id.len(), 19);
    /// ```
    pub fn generate(&self) -> String {
        self.generate_at(timestamp::now(self.config.resolution))
    }

    /// Generate an ID whose prefix encodes `timestamp` (in this generator's resolution).
    pub fn generate_at(&self, timestamp: u64) -> String {
        let mut id = timestamp::encode_timestamp_value(timestamp, self.config.prefix_width);
        id.push_str(&random_base32_string(self.config.suffix_length));
        id
    }

    /// Probability that two IDs sharing a prefix also share a suffix: `1 / 32^k`.
    pub fn suffix_collision_probability(&self) -> f64 {
        let k = i32::try_from(self.config.suffix_length).unwrap_or(i32::MAX);
        32f64.powi(k).recip()
    }
}

/// Microsecond sortable ID: 11-character prefix followed by `suffix_length` random characters.
pub fn generate_micros_id(suffix_length: usize) -> String {
    IdGenerator::new(IdConfig::micros().suffix_length(suffix_length)).generate()
}

/// Nanosecond sortable ID: 13-character prefix followed by `suffix_length` random characters.
pub fn generate_nanos_id(suffix_length: usize) -> String {
    IdGenerator::new(IdConfig::nanos().suffix_length(suffix_length)).generate()
}
