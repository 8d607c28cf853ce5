//! Sharing parameters.

use math_lib::modular::Prime;

/// The parameters of a sharing session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShamirConfig {
    /// The number of shares needed to recover a secret.
    pub threshold: u64,

    /// The number of shares handed out.
    pub share_count: u64,

    /// The field prime. When missing, the default prime is used.
    #[cfg_attr(feature = "serde", serde(default))]
    pub prime: Option<Prime>,
}

impl Default for ShamirConfig {
    fn default() -> Self {
        Self { threshold: 3, share_count: 5, prime: None }
    }
}

#[cfg(all(test, feature = "serde"))]
#[allow(clippy::unwrap_used)]
mod test {
    use super::*;

    #[test]
    fn deserialize_with_prime() {
        let config: ShamirConfig =
            serde_json::from_str(r#"{"threshold": 3, "share_count": 5, "prime": "97"}"#).unwrap();
        assert_eq!(config, ShamirConfig { threshold: 3, share_count: 5, prime: Some(Prime::from_u64(97).unwrap()) });
    }

    #[test]
    fn prime_defaults_to_none() {
        let config: ShamirConfig = serde_json::from_str(r#"{"threshold": 2, "share_count": 4}"#).unwrap();
        assert_eq!(config.prime, None);
        assert_eq!(config.threshold, 2);
    }

    #[test]
    fn composite_prime_rejected() {
        let result = serde_json::from_str::<ShamirConfig>(r#"{"threshold": 2, "share_count": 4, "prime": "91"}"#);
        assert!(result.is_err());
    }
}
