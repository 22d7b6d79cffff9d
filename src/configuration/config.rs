#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::IntoEnumIterator;
use tokio::fs;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Eq, PartialEq, EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ApiToken,
    ApiUrl,
    ConfigFile,
    Model,
    RequestTimeout,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        #[cfg(not(target_os = "macos"))]
        let config_path = dirs::config_dir().unwrap().join("contextlab/config.toml");
        #[cfg(target_os = "macos")]
        let config_path = path::PathBuf::from(std::env::var("HOME").unwrap())
            .join(".config/contextlab/config.toml");

        let res = match key {
            ConfigKey::ApiToken => "",
            ConfigKey::ApiUrl => "https://api.openai.com",
            ConfigKey::Model => "gpt-4o",
            ConfigKey::RequestTimeout => "30000",

            // Special
            ConfigKey::ConfigFile => config_path.to_str().unwrap(),
        };

        return res.to_string();
    }

    pub async fn load(clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Some(arg_config_file) =
                matches.get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                if let Some(val) = doc.get(&key.to_string()) {
                    if let Some(val_int) = val.as_integer() {
                        Config::set(key, &val_int.to_string());
                    } else if let Some(val_str) = val.as_str() {
                        if val_str.is_empty() {
                            continue;
                        }
                        Config::set(key, val_str);
                    } else {
                        bail!(format!(
                            "config.toml has an invalid value for key '{key}'"
                        ));
                    }
                }
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        tracing::debug!(
            api_url = Config::get(ConfigKey::ApiUrl),
            model = Config::get(ConfigKey::Model),
            request_timeout = Config::get(ConfigKey::RequestTimeout),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                if key == ConfigKey::ApiToken {
                    return Some(
                        "# The API token used as the bearer credential. Prefer the CONTEXTLAB_API_TOKEN environment variable.\n# api-token = \"\""
                            .to_string(),
                    );
                }

                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long().unwrap() == key.to_string())
                    .unwrap();

                let mut description = arg.get_help().unwrap().to_string();
                description = description
                    .split("[default:")
                    .next()
                    .unwrap()
                    .trim()
                    .to_string();

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<i32>().is_ok() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{val}\"");
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
