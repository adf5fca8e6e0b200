use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined.
    /// Check the documentation or `.env.example` file for required
    /// configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but could not be parsed.
    #[error("Invalid value for environment variable {0}")]
    InvalidEnvVar(String),

    /// The JWT secret still uses the insecure development default while the
    /// application runs in production mode.
    #[error("JWT_SECRET must be set to a strong, non-default value in production")]
    InsecureJwtSecret,
}
