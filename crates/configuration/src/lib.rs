use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, DataSource, Forecasting, Reporting};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, deserializes it into our strongly-typed `Config`
/// struct, validates it, and returns it.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from("config.toml")
}

/// Loads the configuration from an explicit file path.
pub fn load_config_from(path: &str) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for the given config file.
        .add_source(config::File::with_name(path))
        // Optionally, one could add environment variables here as well.
        // .add_source(config::Environment::with_prefix("MERIDIAN"));
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(path, "configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_config(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("meridian-{}-{}.toml", name, std::process::id()));
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn loads_and_validates_a_complete_config() {
        let path = write_config(
            "config-ok",
            r#"
            [data]
            path = "sales.csv"

            [forecast]
            horizon_months = 6
            ema_span = 3

            [report]
            top_products = 10
            "#,
        );

        let config = load_config_from(path.to_str().unwrap()).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.data.path, "sales.csv");
        assert_eq!(config.forecast.horizon_months, 6);
        assert_eq!(config.forecast.ema_span, 3);
        assert_eq!(config.report.top_products, 10);
    }

    #[test]
    fn rejects_a_zero_ema_span() {
        let path = write_config(
            "config-bad-span",
            r#"
            [data]
            path = "sales.csv"

            [forecast]
            horizon_months = 6
            ema_span = 0

            [report]
            top_products = 10
            "#,
        );

        let err = load_config_from(path.to_str().unwrap()).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
