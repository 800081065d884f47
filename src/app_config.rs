use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use serde::Deserialize;
use shef_remote::shef::DEFAULT_PORT;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    remote: Remote,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        AppConfig::from_builder(
            Config::builder()
                .add_source(config::File::with_name("config").required(false))
                .add_source(config::File::with_name("config_local").required(false))
                .add_source(environment()),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn remote(&self) -> &Remote {
        &self.remote
    }
}

#[derive(Debug, Deserialize)]
pub struct Remote {
    address: Option<String>,
    #[serde(default = "default_port")]
    port: u16,
}

impl Remote {
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl Default for Remote {
    fn default() -> Self {
        Remote {
            address: None,
            port: default_port(),
        }
    }
}

// SHEF_REMOTE__ADDRESS sets remote.address
fn environment() -> config::Environment {
    config::Environment::with_prefix("SHEF")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};
    use pretty_assertions::assert_eq;

    fn from_toml(toml: &str) -> Result<AppConfig, ConfigError> {
        AppConfig::from_builder(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    #[test]
    fn reads_the_remote_section() -> Result<(), ConfigError> {
        let config = from_toml("[remote]\naddress = \"192.168.1.20\"\nport = 8081\n")?;

        assert_eq!(config.remote().address(), Some("192.168.1.20"));
        assert_eq!(config.remote().port(), 8081);
        Ok(())
    }

    #[test]
    fn port_defaults_to_the_shef_port() -> Result<(), ConfigError> {
        let config = from_toml("[remote]\naddress = \"10.0.0.5\"\n")?;

        assert_eq!(config.remote().port(), 8080);
        Ok(())
    }

    #[test]
    fn reads_the_remote_section_from_the_environment() -> Result<(), ConfigError> {
        let variables = config::Map::from([
            ("SHEF_REMOTE__ADDRESS".to_string(), "10.1.2.3".to_string()),
            ("SHEF_REMOTE__PORT".to_string(), "8081".to_string()),
        ]);

        let config = AppConfig::from_builder(Config::builder().add_source(environment().source(Some(variables))))?;

        assert_eq!(config.remote().address(), Some("10.1.2.3"));
        assert_eq!(config.remote().port(), 8081);
        Ok(())
    }

    #[test]
    fn environment_overrides_the_config_file() -> Result<(), ConfigError> {
        let variables = config::Map::from([("SHEF_REMOTE__ADDRESS".to_string(), "10.1.2.3".to_string())]);

        let config = AppConfig::from_builder(
            Config::builder()
                .add_source(File::from_str("[remote]\naddress = \"192.168.1.20\"\nport = 8081\n", FileFormat::Toml))
                .add_source(environment().source(Some(variables))),
        )?;

        assert_eq!(config.remote().address(), Some("10.1.2.3"));
        assert_eq!(config.remote().port(), 8081);
        Ok(())
    }

    #[test]
    fn remote_section_is_optional() -> Result<(), ConfigError> {
        let config = from_toml("")?;

        assert_eq!(config.remote().address(), None);
        assert_eq!(config.remote().port(), 8080);
        Ok(())
    }
}
