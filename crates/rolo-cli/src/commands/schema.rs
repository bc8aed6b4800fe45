use rolo_core::entities::{Contact, ContactInput, NewUser, User};
use schemars::{JsonSchema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `rolo schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_by_name(&args.type_name)?;
    output(&schema, flags.format)
}

fn schema_by_name(type_name: &str) -> anyhow::Result<serde_json::Value> {
    match type_name.replace('_', "-").as_str() {
        "contact" => to_value::<Contact>(),
        "contact-input" => to_value::<ContactInput>(),
        "user" => to_value::<User>(),
        "new-user" => to_value::<NewUser>(),
        other => anyhow::bail!(
            "unknown schema type '{other}' (expected contact, contact-input, user or new-user)"
        ),
    }
}

fn to_value<T: JsonSchema>() -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(schema_for!(T))?)
}
