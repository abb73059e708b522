use crate::commands::is_valid_prefix;
use std::{convert::TryInto, path::Path, time::Duration};
use toml::{map::Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub command_prefix: String,
    pub roll_prefixes: Vec<String>,
    pub rng_reseed: Duration,
    pub output: OutputFormat,
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            command_prefix: "!".to_string(),
            roll_prefixes: vec![],
            rng_reseed: Duration::from_secs(300),
            output: OutputFormat::Text,
        }
    }
}

impl BotConfig {
    /// Reads every key from `config`, filling in and logging defaults for
    /// missing or unusable ones.
    pub fn from_config(config: &mut Map<String, Value>) -> BotConfig {
        let default = BotConfig::default();

        let command_prefix = match config
            .get("command_prefix")
            .and_then(|p| p.as_str())
            .filter(|p| is_valid_prefix(p))
        {
            Some(p) => p.to_owned(),
            None => {
                log::warn!(
                    "unable to read command_prefix, overwriting with {}",
                    &default.command_prefix
                );
                config.insert(
                    "command_prefix".to_string(),
                    Value::from(default.command_prefix.clone()),
                );
                default.command_prefix
            }
        };

        let roll_prefixes: Vec<String> = match config
            .get("roll_prefixes")
            .and_then(|p| p.as_array())
        {
            Some(prefixes) => prefixes
                .iter()
                .filter_map(|p| match p.as_str() {
                    Some(p) if is_valid_prefix(p) => Some(p.to_owned()),
                    _ => {
                        log::warn!("ignoring invalid roll prefix {}", p);
                        None
                    }
                })
                .collect(),
            None => {
                log::warn!("unable to read roll_prefixes, overwriting with []");
                config.insert(
                    "roll_prefixes".to_string(),
                    Value::from(default.roll_prefixes.clone()),
                );
                default.roll_prefixes
            }
        };

        let rng_reseed = Duration::from_secs(
            match config
                .get("rng_reseed_s")
                .and_then(|t| t.as_integer())
                .and_then(|t| t.try_into().ok())
            {
                Some(t) => t,
                None => {
                    log::warn!("unable to read rng_reseed_s, overwriting with 300");
                    config.insert("rng_reseed_s".to_string(), Value::from(300));
                    300
                }
            },
        );

        let output = match config.get("output").and_then(|o| o.as_str()) {
            Some("text") => OutputFormat::Text,
            Some("json") => OutputFormat::Json,
            _ => {
                log::warn!("unable to read output, overwriting with \"text\"");
                config.insert("output".to_string(), Value::from("text"));
                OutputFormat::Text
            }
        };

        BotConfig {
            command_prefix,
            roll_prefixes,
            rng_reseed,
            output,
        }
    }

    /// Loads the config file at `config_path` and writes it back with any
    /// defaults that had to be filled in.
    pub fn load<P: AsRef<Path>>(config_path: P) -> BotConfig {
        let config_path = config_path.as_ref();
        let mut config: Map<String, Value> =
            match toml::from_slice(&match std::fs::read(config_path) {
                Ok(a) => a,
                Err(e) => {
                    log::warn!("Unable to read config file: {}", e);
                    vec![]
                }
            }) {
                Ok(a) => a,
                Err(e) => {
                    log::warn!("Unable to parse config: {}", e);
                    Map::new()
                }
            };

        let bot_config = BotConfig::from_config(&mut config);

        match toml::to_vec(&config) {
            Ok(bytes) => {
                if let Err(e) = std::fs::write(config_path, bytes) {
                    log::error!("Error writing config: {}", e)
                }
            }
            Err(e) => log::error!("Error serializing config: {}", e),
        }

        bot_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Map<String, Value> {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn test_defaults_fill_empty_config() {
        let mut config = Map::new();
        assert_eq!(BotConfig::from_config(&mut config), BotConfig::default());
        assert_eq!(
            config.get("command_prefix").and_then(|p| p.as_str()),
            Some("!")
        );
        assert_eq!(
            config.get("rng_reseed_s").and_then(|p| p.as_integer()),
            Some(300)
        );
        assert_eq!(config.get("output").and_then(|p| p.as_str()), Some("text"));
        assert!(config.get("roll_prefixes").and_then(|p| p.as_array()).is_some());
    }

    #[test]
    fn test_reads_values() {
        let mut config = parse(
            r#"
command_prefix = "rrb!"
roll_prefixes = ["/r", "bad prefix", "🎲"]
rng_reseed_s = 60
output = "json"
"#,
        );
        let bot_config = BotConfig::from_config(&mut config);
        assert_eq!(bot_config.command_prefix, "rrb!");
        assert_eq!(
            bot_config.roll_prefixes,
            vec!["/r".to_string(), "🎲".to_string()]
        );
        assert_eq!(bot_config.rng_reseed, Duration::from_secs(60));
        assert_eq!(bot_config.output, OutputFormat::Json);
    }

    #[test]
    fn test_replaces_invalid_values() {
        let mut config = parse(
            r#"
command_prefix = "has space"
rng_reseed_s = -5
output = "yaml"
"#,
        );
        let bot_config = BotConfig::from_config(&mut config);
        assert_eq!(bot_config.command_prefix, "!");
        assert_eq!(bot_config.rng_reseed, Duration::from_secs(300));
        assert_eq!(bot_config.output, OutputFormat::Text);
        assert_eq!(
            config.get("command_prefix").and_then(|p| p.as_str()),
            Some("!")
        );
    }

    #[test]
    fn test_load_writes_back_defaults() {
        let path = std::env::temp_dir().join(format!(
            "table-bot-config-test-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "command_prefix = \"?\"\n").unwrap();
        let bot_config = BotConfig::load(&path);
        assert_eq!(bot_config.command_prefix, "?");
        let written: Map<String, Value> =
            toml::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(
            written.get("command_prefix").and_then(|p| p.as_str()),
            Some("?")
        );
        assert_eq!(
            written.get("rng_reseed_s").and_then(|p| p.as_integer()),
            Some(300)
        );
        std::fs::remove_file(&path).unwrap();
    }
}
