use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::shared::constants::DEFAULT_MAX_IMAGE_SIZE;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

/// Where site content is kept and how slow the store pretends to be
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// JSON data file; `None` keeps everything in memory
    pub data_file: Option<PathBuf>,
    /// Base artificial latency applied to store operations
    pub latency: Duration,
    /// Largest single image accepted by the product upload endpoint
    pub max_image_size: usize,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            // Only error if it's not "file not found" - that's acceptable
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            storage: StorageConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 25 * 1024 * 1024; // 25MB, several inlined images

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StorageConfig {
    const DEFAULT_DATA_FILE: &'static str = "data/site-storage.json";
    const DEFAULT_LATENCY_MS: u64 = 100;

    pub fn from_env() -> Result<Self, String> {
        // Empty DATA_FILE means in-memory storage
        let data_file = match env::var("DATA_FILE") {
            Ok(value) if value.trim().is_empty() => None,
            Ok(value) => Some(PathBuf::from(value)),
            Err(_) => Some(PathBuf::from(Self::DEFAULT_DATA_FILE)),
        };

        let latency_ms = env::var("STORE_LATENCY_MS")
            .unwrap_or_else(|_| Self::DEFAULT_LATENCY_MS.to_string())
            .parse::<u64>()
            .map_err(|_| "STORE_LATENCY_MS must be a valid number".to_string())?;

        let max_image_size = env::var("MAX_IMAGE_SIZE")
            .unwrap_or_else(|_| DEFAULT_MAX_IMAGE_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_IMAGE_SIZE must be a valid number".to_string())?;

        Ok(Self {
            data_file,
            latency: Duration::from_millis(latency_ms),
            max_image_size,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "FutureCorp CMS API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for the FutureCorp site and CMS".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swagger_credentials_require_both_parts() {
        let mut swagger = SwaggerConfig {
            username: Some("docs".to_string()),
            password: None,
            title: "t".to_string(),
            version: "v".to_string(),
            description: "d".to_string(),
        };
        assert_eq!(swagger.credentials(), None);

        swagger.password = Some("secret".to_string());
        assert_eq!(swagger.credentials().as_deref(), Some("docs:secret"));
    }

    #[test]
    fn test_server_address() {
        let app = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_allowed_origins: vec!["*".to_string()],
            max_request_body_size: 1024,
        };
        assert_eq!(app.server_address(), "0.0.0.0:8080");
    }
}
