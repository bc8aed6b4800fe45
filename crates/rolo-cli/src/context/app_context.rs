use anyhow::Context;
use rolo_config::RoloConfig;
use rolo_core::entities::User;
use rolo_db::repos::user::get_user_by_email;
use rolo_db::{RoloDb, Session};

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub db: RoloDb,
    pub config: RoloConfig,
    acting_email: Option<String>,
}

impl AppContext {
    /// Open the configured database and remember who is acting.
    pub async fn init(config: RoloConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let db = RoloDb::open(&config.database)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;

        Ok(Self {
            db,
            config,
            acting_email: flags.user.clone(),
        })
    }

    /// Start a unit of work for one command.
    pub async fn session(&self) -> anyhow::Result<Session> {
        self.db
            .session()
            .await
            .context("failed to open database session")
    }

    /// Resolve `--user` / `ROLODEX_USER` into a stored user.
    pub async fn acting_user(&self, session: &Session) -> anyhow::Result<User> {
        let email = self
            .acting_email
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("No acting user. Pass --user or set ROLODEX_USER."))?;

        get_user_by_email(email, session)
            .await?
            .ok_or_else(|| anyhow::anyhow!("unknown user '{email}'. Run 'rolo user create' first."))
    }
}
