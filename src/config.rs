// src/config.rs
use anyhow::Context;

pub const DEFAULT_PORT: u16 = 8000;

/// Startup configuration, populated once at process entry.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Read configuration from the environment. `PORT` selects the
    /// listening port and defaults to 8000 when unset.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_port_var(std::env::var("PORT").ok())
    }

    fn from_port_var(raw: Option<String>) -> anyhow::Result<Self> {
        let port = match raw {
            Some(value) => value
                .parse()
                .with_context(|| format!("invalid PORT value: {value:?}"))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_8000_when_unset() {
        let config = Config::from_port_var(None).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn honors_port_override() {
        let config = Config::from_port_var(Some("9005".to_string())).unwrap();
        assert_eq!(config.port, 9005);
    }

    #[test]
    fn rejects_unparsable_port() {
        let err = Config::from_port_var(Some("not-a-port".to_string())).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
