use anyhow::Result;

use super::CoreError;
use super::GenerationParameters;
use crate::domain::services::RequestAssembler;

#[test]
fn it_accepts_parameters_at_the_bounds() -> Result<()> {
    GenerationParameters::new(0.0, 1)?;
    GenerationParameters::new(2.0, 2000)?;
    return Ok(());
}

#[test]
fn it_rejects_out_of_range_temperature() {
    assert!(matches!(
        GenerationParameters::new(2.1, 100),
        Err(CoreError::Validation(_))
    ));
    assert!(matches!(
        GenerationParameters::new(-0.1, 100),
        Err(CoreError::Validation(_))
    ));
}

#[test]
fn it_rejects_out_of_range_max_tokens() {
    assert!(matches!(
        GenerationParameters::new(1.0, 0),
        Err(CoreError::Validation(_))
    ));
    assert!(matches!(
        GenerationParameters::new(1.0, 2001),
        Err(CoreError::Validation(_))
    ));
}

#[test]
fn it_omits_absent_parameters_from_the_wire() -> Result<()> {
    let payload = RequestAssembler::assemble(&[], "Bonjour", "gpt-4o", None);
    let json = serde_json::to_string(&payload)?;

    assert!(!json.contains("temperature"));
    assert!(!json.contains("max_tokens"));
    return Ok(());
}

#[test]
fn it_merges_supplied_parameters_at_the_top_level() -> Result<()> {
    let params = GenerationParameters::new(0.7, 150)?;
    let payload = RequestAssembler::assemble(&[], "Bonjour", "gpt-4o", Some(params));
    let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&payload)?)?;

    assert_eq!(json["temperature"], serde_json::json!(0.7));
    assert_eq!(json["max_tokens"], serde_json::json!(150));
    return Ok(());
}
