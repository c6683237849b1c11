use serde::{Deserialize, Serialize};

/// Codec configuration
///
/// Limits applied while parsing. Both the parser and the editor take one of
/// these; `CodecConfig::default()` is what the free functions use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Nesting depth beyond which constructed values are kept opaque
    pub max_depth: usize,
    /// Maximum number of subsequent octets in a long-form length
    pub max_length_octets: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_depth: 32,
            max_length_octets: 4,
        }
    }
}

impl CodecConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_length_octets(mut self, max_length_octets: usize) -> Self {
        self.max_length_octets = max_length_octets;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();
        assert_eq!(config.max_depth, 32);
        assert_eq!(config.max_length_octets, 4);
    }

    #[test]
    fn test_builder() {
        let config = CodecConfig::default().with_max_depth(2).with_max_length_octets(8);
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.max_length_octets, 8);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: CodecConfig = serde_json::from_str(r#"{"max_depth":2}"#).unwrap();
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.max_length_octets, 4);

        let config: CodecConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CodecConfig::default());
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(serde_json::from_str::<CodecConfig>(r#"{"max_depth":"deep"}"#).is_err());
        assert!(serde_json::from_str::<CodecConfig>("{max_depth: 2").is_err());
    }
}
