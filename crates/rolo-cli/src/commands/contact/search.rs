use rolo_core::entities::User;
use rolo_db::Session;
use rolo_db::repos::contact;

use crate::cli::GlobalFlags;
use crate::output::output;

pub async fn run(
    query: &str,
    user: &User,
    session: &Session,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let contacts = contact::search(query, session, user).await?;
    output(&contacts, flags.format)
}
