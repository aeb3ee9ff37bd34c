//! Build the settings of an object that can be deserialized from the node configuration
//!
//! ---
//! The node configuration is read from up to four sources, later sources
//! overriding earlier ones:
//!
//! 1. the file at the path in the `LATTICE_CONFIG_PATH` environment variable,
//!    `base_config/config.toml` by default. It must exist.
//! 2. the file at the path in `LATTICE_CONFIG_OVERRIDE_PATH`,
//!    `config/config.toml` by default, if it exists.
//! 3. `config.toml` in the user configuration directory of the application, if it exists.
//! 4. environment variables prefixed with `env_prefix`, sections separated by `__`
//!    (`LATTICE__HINTING__BLOCK_COOLDOWN=2000`).
//!
use crate::ModelsResult;
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Merge the settings sources described in the module documentation and deserialize them
pub fn build_lattice_settings<T: DeserializeOwned>(
    app_name: &str,
    env_prefix: &str,
) -> ModelsResult<T> {
    let mut builder = config::Config::builder();
    let config_path = std::env::var("LATTICE_CONFIG_PATH")
        .unwrap_or_else(|_| "base_config/config.toml".to_string());

    builder = builder.add_source(config::File::with_name(&config_path));

    let config_override_path = std::env::var("LATTICE_CONFIG_OVERRIDE_PATH")
        .unwrap_or_else(|_| "config/config.toml".to_string());

    if Path::new(&config_override_path).is_file() {
        builder = builder.add_source(config::File::with_name(&config_override_path));
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "Lattice", app_name) {
        // Portable user config loading
        let user_config_path = proj_dirs.config_dir().join("config.toml");
        if user_config_path.is_file() {
            builder = builder.add_source(config::File::from(user_config_path));
        }
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix(env_prefix)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serial_test::serial;
    use std::io::Write;

    #[derive(Debug, Deserialize)]
    struct TestSettings {
        section: TestSection,
    }

    #[derive(Debug, Deserialize)]
    struct TestSection {
        interval: u64,
        name: String,
    }

    fn write_toml(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("could not create temp config file");
        file.write_all(content.as_bytes())
            .expect("could not write temp config file");
        file
    }

    #[test]
    #[serial]
    fn test_base_file_and_override() {
        let base = write_toml("[section]\ninterval = 1000\nname = \"base\"\n");
        let over = write_toml("[section]\nname = \"override\"\n");
        std::env::set_var("LATTICE_CONFIG_PATH", base.path());
        std::env::set_var("LATTICE_CONFIG_OVERRIDE_PATH", over.path());

        let settings: TestSettings =
            build_lattice_settings("lattice-settings-test", "LATTICE_SETTINGS_TEST").unwrap();
        assert_eq!(settings.section.interval, 1000);
        assert_eq!(settings.section.name, "override");

        std::env::remove_var("LATTICE_CONFIG_PATH");
        std::env::remove_var("LATTICE_CONFIG_OVERRIDE_PATH");
    }

    #[test]
    #[serial]
    fn test_environment_override() {
        let base = write_toml("[section]\ninterval = 1000\nname = \"base\"\n");
        std::env::set_var("LATTICE_CONFIG_PATH", base.path());
        std::env::set_var("LATTICE_CONFIG_OVERRIDE_PATH", "/nonexistent/config.toml");
        std::env::set_var("LATTICE_ENV_TEST__SECTION__INTERVAL", "250");

        let settings: TestSettings =
            build_lattice_settings("lattice-settings-test", "LATTICE_ENV_TEST").unwrap();
        assert_eq!(settings.section.interval, 250);
        assert_eq!(settings.section.name, "base");

        std::env::remove_var("LATTICE_ENV_TEST__SECTION__INTERVAL");
        std::env::remove_var("LATTICE_CONFIG_PATH");
        std::env::remove_var("LATTICE_CONFIG_OVERRIDE_PATH");
    }

    #[test]
    #[serial]
    fn test_missing_base_file_is_an_error() {
        std::env::set_var("LATTICE_CONFIG_PATH", "/nonexistent/base.toml");
        let result: ModelsResult<TestSettings> =
            build_lattice_settings("lattice-settings-test", "LATTICE_SETTINGS_TEST");
        assert!(result.is_err());
        std::env::remove_var("LATTICE_CONFIG_PATH");
    }
}
