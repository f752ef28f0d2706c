use crate::timestamp::{MICROS_PREFIX_WIDTH, NANOS_PREFIX_WIDTH, Resolution};

/// Shape of a sortable ID: timestamp resolution, prefix width and suffix length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdConfig {
    pub resolution: Resolution,
    pub prefix_width: usize,
    pub suffix_length: usize,
}

impl IdConfig {
    /// Config at `resolution` using that resolution's default prefix width and no suffix.
    pub const fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            prefix_width: resolution.default_width(),
            suffix_length: 0,
        }
    }

    /// Microsecond profile: 11-character prefix.
    pub const fn micros() -> Self {
        Self::new(Resolution::Micros)
    }

    /// Nanosecond profile: 13-character prefix.
    pub const fn nanos() -> Self {
        Self::new(Resolution::Nanos)
    }

    pub const fn prefix_width(mut self, width: usize) -> Self {
        self.prefix_width = width;
        self
    }

    pub const fn suffix_length(mut self, len: usize) -> Self {
        self.suffix_length = len;
        self
    }

    /// Total length of IDs produced with this config.
    pub const fn id_length(&self) -> usize {
        self.prefix_width.saturating_add(self.suffix_length)
    }
}

impl Default for IdConfig {
    fn default() -> Self {
        Self::micros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_micros_profile() {
        let config = IdConfig::micros();
        assert_eq!(config.resolution, Resolution::Micros);
        assert_eq!(config.prefix_width, MICROS_PREFIX_WIDTH);
        assert_eq!(config.suffix_length, 0);
    }

    #[test]
    fn test_nanos_profile() {
        let config = IdConfig::nanos();
        assert_eq!(config.resolution, Resolution::Nanos);
        assert_eq!(config.prefix_width, NANOS_PREFIX_WIDTH);
    }

    #[test]
    fn test_default_is_micros() {
        assert_eq!(IdConfig::default(), IdConfig::micros());
    }

    #[test]
    fn test_builder_chain() {
        let config = IdConfig::nanos().suffix_length(8).prefix_width(16);
        assert_eq!(config.resolution, Resolution::Nanos);
        assert_eq!(config.prefix_width, 16);
        assert_eq!(config.suffix_length, 8);
        assert_eq!(config.id_length(), 24);
    }

    #[test]
    fn test_id_length_saturates() {
        let config = IdConfig::micros().prefix_width(usize::MAX).suffix_length(8);
        assert_eq!(config.id_length(), usize::MAX);
    }

    #[test]
    fn test_id_length_prefix_only() {
        assert_eq!(IdConfig::micros().id_length(), 11);
        assert_eq!(IdConfig::nanos().id_length(), 13);
    }
}
