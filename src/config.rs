use serde::Deserialize;
use std::path::Path;

/// Process-wide configuration, built once at startup and passed explicitly.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub uri: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            name: "doordash".to_string(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "http://localhost:4000".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `config.toml` if present, falling back to
    /// defaults, then apply `PORT` and `MONGODB_URI` environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = if Path::new("config.toml").exists() {
            let raw = std::fs::read_to_string("config.toml")?;
            toml::from_str(&raw)?
        } else {
            Self::default()
        };

        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port.parse()?;
        }
        if let Ok(uri) = std::env::var("MONGODB_URI") {
            config.database.uri = uri;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_deployment() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.cors.allowed_origin, "http://localhost:4000");
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [database]
            uri = "mongodb://db:27017"
            name = "staging"
            "#,
        )
        .unwrap();
        assert_eq!(config.database.uri, "mongodb://db:27017");
        assert_eq!(config.database.name, "staging");
        assert_eq!(config.server.port, 4000);
    }
}
