use anyhow::Result;

use super::RequestAssembler;
use crate::domain::models::GenerationParameters;
use crate::domain::models::Message;
use crate::domain::models::Role;

#[test]
fn it_appends_exactly_one_trailing_user_message() {
    let context = vec![
        Message::system("Tu es un assistant culturel."),
        Message::user("Parle-moi du Japon."),
        Message::assistant("Le Japon est un pays asiatique..."),
    ];

    let payload = RequestAssembler::assemble(&context, "Et sa capitale ?", "gpt-4o", None);

    assert_eq!(payload.messages.len(), context.len() + 1);
    assert_eq!(
        *payload.messages.last().unwrap(),
        Message::user("Et sa capitale ?")
    );
}

#[test]
fn it_assembles_an_empty_context() {
    let payload = RequestAssembler::assemble(
        &[],
        "Quelle est la capitale de la France ?",
        "gpt-4o",
        None,
    );

    assert_eq!(payload.model, "gpt-4o");
    assert_eq!(payload.messages.len(), 1);
    assert_eq!(payload.messages[0].role, Role::User);
    assert_eq!(
        payload.messages[0].content,
        "Quelle est la capitale de la France ?"
    );
}

#[test]
fn it_preserves_conflicting_system_messages_in_order() {
    let context = vec![
        Message::system("Tu réponds uniquement en français."),
        Message::system("You answer only in English."),
    ];

    let payload = RequestAssembler::assemble(&context, "Présente-toi.", "gpt-4o", None);

    assert_eq!(payload.messages.len(), 3);
    assert_eq!(payload.messages[0], context[0]);
    assert_eq!(payload.messages[1], context[1]);
    assert_eq!(payload.messages[2].role, Role::User);
}

#[test]
fn it_never_mutates_the_stored_prefix() {
    let context = vec![Message::system("Tu es un poète.")];
    let before = context.clone();

    RequestAssembler::assemble(&context, "Écris deux vers sur la mer.", "gpt-4o", None);

    assert_eq!(context, before);
}

#[test]
fn it_assembles_deterministically() -> Result<()> {
    let context = vec![Message::system("Tu es un professeur de géographie très précis.")];
    let params = Some(GenerationParameters::new(0.2, 100)?);

    let first = RequestAssembler::assemble(&context, "La capitale ?", "gpt-4o", params);
    let second = RequestAssembler::assemble(&context, "La capitale ?", "gpt-4o", params);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first)?,
        serde_json::to_string(&second)?
    );
    return Ok(());
}

#[test]
fn it_accepts_empty_input_for_previews() {
    // Refusing to send an empty input belongs to the session boundary, the
    // assembler stays total so previews always work.
    let payload = RequestAssembler::assemble(&[], "", "gpt-4o", None);
    assert_eq!(payload.messages.len(), 1);
    assert_eq!(payload.messages[0].content, "");
}
