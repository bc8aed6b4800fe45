mod birthdays;
mod create;
mod delete;
mod get;
mod list;
mod search;
mod update;

use rolo_core::entities::User;
use rolo_core::errors::CoreError;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ContactCommands;
use crate::context::AppContext;

/// Handle `rolo contact`.
pub async fn handle(
    action: ContactCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = ctx.session().await?;
    let user = ctx.acting_user(&session).await?;

    match action {
        ContactCommands::List { offset } => list::run(offset, &user, &session, ctx, flags).await,
        ContactCommands::All { offset } => {
            require_staff(&user)?;
            list::run_all(offset, &session, ctx, flags).await
        }
        ContactCommands::Get { id } => get::run(id, &user, &session, flags).await,
        ContactCommands::Create { fields } => {
            create::run(fields.into_input(), &user, &session, flags).await
        }
        ContactCommands::Update { id, fields } => {
            update::run(id, fields.into_input(), &user, &session, flags).await
        }
        ContactCommands::Delete { id } => delete::run(id, &user, &session, flags).await,
        ContactCommands::Search { query } => search::run(&query, &user, &session, flags).await,
        ContactCommands::Birthdays { days, offset } => {
            birthdays::run(days, offset, &user, &session, ctx, flags).await
        }
    }
}

fn require_staff(user: &User) -> Result<(), CoreError> {
    if user.role.can_list_all_contacts() {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "listing every contact requires admin or moderator, '{}' is {}",
            user.email, user.role
        )))
    }
}

fn missing(id: i64) -> CoreError {
    CoreError::not_found("contact", id)
}
