use rolo_core::entities::User;
use rolo_db::Session;
use rolo_db::repos::contact;

use crate::cli::GlobalFlags;
use crate::output::output;

pub async fn run(
    id: i64,
    user: &User,
    session: &Session,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let found = contact::get(id, session, user)
        .await?
        .ok_or_else(|| super::missing(id))?;
    output(&found, flags.format)
}
