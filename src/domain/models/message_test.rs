use anyhow::Result;

use super::CoreError;
use super::Message;
use super::Role;

#[test]
fn it_parses_valid_roles() -> Result<()> {
    assert_eq!(Role::parse("system")?, Role::System);
    assert_eq!(Role::parse("user")?, Role::User);
    assert_eq!(Role::parse("assistant")?, Role::Assistant);
    return Ok(());
}

#[test]
fn it_rejects_unknown_roles() {
    let res = Role::parse("invalid_role");
    assert!(matches!(res, Err(CoreError::Validation(_))));
}

#[test]
fn it_rejects_wrong_case_roles() {
    let res = Role::parse("System");
    assert!(matches!(res, Err(CoreError::Validation(_))));
}

#[test]
fn it_serializes_roles_lowercase() -> Result<()> {
    let json = serde_json::to_string(&Message::user("Bonjour"))?;
    assert_eq!(json, r#"{"role":"user","content":"Bonjour"}"#);
    return Ok(());
}

#[test]
fn it_roundtrips_messages() -> Result<()> {
    let msg = Message::system("Tu es un assistant culturel.");
    let back: Message = serde_json::from_str(&serde_json::to_string(&msg)?)?;
    assert_eq!(back, msg);
    return Ok(());
}

#[test]
fn it_copies_messages_by_value() {
    let original = Message::assistant("Le Japon est un pays asiatique...");
    let mut copy = original.clone();
    copy.content.push_str(" (modifié)");

    assert_eq!(original.content, "Le Japon est un pays asiatique...");
    assert_ne!(original, copy);
}
