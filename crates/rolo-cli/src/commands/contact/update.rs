use rolo_core::entities::{ContactInput, User};
use rolo_db::Session;
use rolo_db::repos::contact;

use crate::cli::GlobalFlags;
use crate::output::output;

pub async fn run(
    id: i64,
    body: ContactInput,
    user: &User,
    session: &Session,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    body.validate()?;
    let updated = contact::update(id, &body, session, user)
        .await?
        .ok_or_else(|| super::missing(id))?;
    output(&updated, flags.format)
}
