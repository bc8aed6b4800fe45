use rolo_core::entities::User;
use rolo_db::Session;
use rolo_db::repos::contact;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    offset: u32,
    user: &User,
    session: &Session,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, &ctx.config.general);
    let contacts = contact::list_for_user(limit, offset, session, user).await?;
    output(&contacts, flags.format)
}

pub async fn run_all(
    offset: u32,
    session: &Session,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, &ctx.config.general);
    let contacts = contact::list_all(limit, offset, session).await?;
    output(&contacts, flags.format)
}
