use rolo_core::entities::User;
use rolo_db::Session;
use rolo_db::repos::contact;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    days: Option<u32>,
    offset: u32,
    user: &User,
    session: &Session,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let general = &ctx.config.general;
    let days = general.effective_birthday_days(days);
    let limit = effective_limit(flags.limit, general);
    tracing::debug!(days, limit, offset, "looking up upcoming birthdays");

    let contacts = contact::upcoming_birthdays(days, limit, offset, session, user).await?;
    output(&contacts, flags.format)
}
