use rolo_core::entities::{ContactInput, User};
use rolo_db::Session;
use rolo_db::repos::contact;

use crate::cli::GlobalFlags;
use crate::output::output;

pub async fn run(
    body: ContactInput,
    user: &User,
    session: &Session,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    body.validate()?;
    let created = contact::create(&body, session, user).await?;
    output(&created, flags.format)
}
