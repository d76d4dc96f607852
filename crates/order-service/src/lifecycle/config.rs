//! Runtime settings for [`OrderSystem`](super::OrderSystem).

use std::env::{self, VarError};
use thiserror::Error;

/// Environment variable overriding [`SystemConfig::channel_buffer`].
pub const CHANNEL_BUFFER_VAR: &str = "ORDER_SERVICE_CHANNEL_BUFFER";

const DEFAULT_CHANNEL_BUFFER: usize = 32;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidChannelBuffer { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Capacity of each actor's request channel.
    pub channel_buffer: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
        }
    }
}

impl SystemConfig {
    /// Defaults, overridden by `ORDER_SERVICE_CHANNEL_BUFFER` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_channel_buffer(env::var(CHANNEL_BUFFER_VAR))
    }

    fn from_channel_buffer(raw: Result<String, VarError>) -> Result<Self, ConfigError> {
        let raw = match raw {
            Ok(raw) => raw,
            Err(VarError::NotPresent) => return Ok(Self::default()),
            Err(VarError::NotUnicode(value)) => {
                return Err(ConfigError::InvalidChannelBuffer {
                    var: CHANNEL_BUFFER_VAR,
                    value: value.to_string_lossy().into_owned(),
                });
            }
        };
        match raw.trim().parse::<usize>() {
            Ok(channel_buffer) if channel_buffer > 0 => Ok(Self { channel_buffer }),
            _ => Err(ConfigError::InvalidChannelBuffer {
                var: CHANNEL_BUFFER_VAR,
                value: raw,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_uses_default() {
        let config = SystemConfig::from_channel_buffer(Err(VarError::NotPresent)).unwrap();
        assert_eq!(config, SystemConfig::default());
        assert_eq!(config.channel_buffer, 32);
    }

    #[test]
    fn test_override_is_parsed() {
        let config = SystemConfig::from_channel_buffer(Ok(" 128 ".to_string())).unwrap();
        assert_eq!(config.channel_buffer, 128);
    }

    #[test]
    fn test_zero_and_garbage_are_rejected() {
        for raw in ["0", "-4", "many"] {
            let err = SystemConfig::from_channel_buffer(Ok(raw.to_string())).unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidChannelBuffer {
                    var: CHANNEL_BUFFER_VAR,
                    value: raw.to_string(),
                }
            );
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_value_is_rejected() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(vec![b'6', b'4', 0x80]);
        let err = SystemConfig::from_channel_buffer(Err(VarError::NotUnicode(raw)))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidChannelBuffer { .. }));
    }
}
