use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::Document>();
    assert!(toml_res.is_ok());
}

#[test]
fn it_falls_back_to_defaults() {
    assert_eq!(Config::default(ConfigKey::ApiUrl), "https://api.openai.com");
    assert_eq!(Config::default(ConfigKey::Model), "gpt-4o");
    assert_eq!(Config::default(ConfigKey::RequestTimeout), "30000");
    assert_eq!(Config::default(ConfigKey::ApiToken), "");
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec![
        "contextlab",
        "-c",
        "./config.example.toml",
        "list",
    ])?;
    Config::load(vec![&matches]).await?;
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_load_an_invalid_config_file() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec![
        "contextlab",
        "-c",
        "./test/bad-config.toml",
        "list",
    ])?;
    let res = Config::load(vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}
