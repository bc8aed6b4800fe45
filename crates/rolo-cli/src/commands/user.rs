use rolo_core::entities::NewUser;
use rolo_core::enums::Role;
use rolo_core::errors::CoreError;
use rolo_db::repos::user::{create_user, get_user_by_email, set_role};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rolo user`.
pub async fn handle(
    action: UserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = ctx.session().await?;

    match action {
        UserCommands::Create {
            username,
            email,
            role,
        } => {
            let role = role
                .as_deref()
                .map(|value| parse_enum::<Role>(value, "role"))
                .transpose()?
                .unwrap_or_default();
            let body = NewUser {
                username,
                email,
                role,
            };
            body.validate()?;

            let user = create_user(&body, &session).await?;
            output(&user, flags.format)
        }
        UserCommands::Get { email } => {
            let user = match email {
                Some(email) => get_user_by_email(&email, &session)
                    .await?
                    .ok_or_else(|| CoreError::not_found("user", &email))?,
                None => ctx.acting_user(&session).await?,
            };
            output(&user, flags.format)
        }
        UserCommands::SetRole { email, role } => {
            let acting = ctx.acting_user(&session).await?;
            if acting.role != Role::Admin {
                return Err(CoreError::Forbidden(format!(
                    "changing roles requires admin, '{}' is {}",
                    acting.email, acting.role
                ))
                .into());
            }

            let role = parse_enum::<Role>(&role, "role")?;
            let target = get_user_by_email(&email, &session)
                .await?
                .ok_or_else(|| CoreError::not_found("user", &email))?;
            let updated = set_role(target.id, role, &session)
                .await?
                .ok_or_else(|| CoreError::not_found("user", target.id))?;
            tracing::info!(user = updated.id, role = %updated.role, "role changed");
            output(&updated, flags.format)
        }
    }
}
