//! Persona commands: `stoa personas` and `stoa ask`.

use anyhow::Result;
use console::style;
use serde_json::Value;

use stoa_types::request::PersonaRequestBody;

use crate::state::AppState;

/// List every persona with its conversation starters.
pub fn list_personas(state: &AppState, json: bool) -> Result<()> {
    let registry = state.registry();

    if json {
        let personas: Vec<_> = registry.iter().collect();
        println!("{}", serde_json::to_string_pretty(&personas)?);
        return Ok(());
    }

    println!();
    for persona in registry.iter() {
        println!("  {}", style(&persona.key).cyan().bold());
        for starter in &persona.conversation_starters {
            println!("    {} {}", style("›").dim(), starter);
        }
        println!();
    }
    println!(
        "  {}",
        style(format!("{} personas available", registry.len())).dim()
    );
    println!();

    Ok(())
}

/// Run one persona generation from the command line.
pub async fn ask(
    state: &AppState,
    persona: String,
    message: String,
    history: Vec<String>,
    json: bool,
) -> Result<()> {
    let body = PersonaRequestBody {
        message: Some(Value::String(message)),
        philosopher_id: Some(Value::String(persona.clone())),
        conversation_history: Some(Value::Array(
            history.into_iter().map(Value::String).collect(),
        )),
    };

    let reply = state.persona_service.respond(body).await?;

    if json {
        let out = serde_json::json!({ "success": true, "response": reply });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!("  {}", style(&persona).cyan().bold());
    println!();
    for line in reply.lines() {
        println!("  {line}");
    }
    println!();

    Ok(())
}
