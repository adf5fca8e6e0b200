use crate::error::{config::ConfigError, AppError};

/// Development fallback for the JWT signing secret. Startup refuses this
/// value when `APP_ENV=production`.
const DEFAULT_JWT_SECRET: &str = "dev-secret-change-me-in-production";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BCRYPT_COST: u32 = 10;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    pub jwt_secret: String,
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let production = std::env::var("APP_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);

        let jwt_secret =
            std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());
        if production && jwt_secret == DEFAULT_JWT_SECRET {
            return Err(ConfigError::InsecureJwtSecret.into());
        }

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: match std::env::var("PORT") {
                Ok(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string()))?,
                Err(_) => DEFAULT_PORT,
            },
            jwt_secret,
            bcrypt_cost: match std::env::var("BCRYPT_COST") {
                Ok(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvVar("BCRYPT_COST".to_string()))?,
                Err(_) => DEFAULT_BCRYPT_COST,
            },
        })
    }
}
