//! Application context - dependency injection container

use std::sync::Arc;

use roster_core::{MirrorStore, RemoteRecordStore, SessionService, SyncService};
use roster_domain::{Config, Result};
use roster_infra::{
    DbManager, HttpRemoteStore, PlainTextVerifier, SqliteMirrorStore, StaticCredentialRepository,
};
use tracing::{info, warn};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub mirror: Arc<dyn MirrorStore>,
    pub auth: Arc<SessionService>,
    pub sync: Arc<SyncService>,
}

impl AppContext {
    /// Build every service from configuration.
    ///
    /// Runs the schema migrations, constructs the remote client if one is
    /// configured, and performs the initial record load so the working copy
    /// (and the legacy mirror migration) is warm before the first request.
    /// A remote client that fails to construct is downgraded to mirror-only
    /// operation rather than aborting startup.
    pub async fn new(config: Config) -> Result<Self> {
        let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
        db.run_migrations()?;

        let mirror: Arc<dyn MirrorStore> = Arc::new(SqliteMirrorStore::new(Arc::clone(&db)));

        let remote: Option<Arc<dyn RemoteRecordStore>> = if config.remote.enabled {
            match HttpRemoteStore::new(&config.remote) {
                Ok(client) => Some(Arc::new(client)),
                Err(err) => {
                    warn!(error = %err, "remote client failed to initialise, running mirror-only");
                    None
                }
            }
        } else {
            info!("remote store disabled by configuration, running mirror-only");
            None
        };

        let sync = Arc::new(SyncService::new(remote, Arc::clone(&mirror)));
        let auth = Arc::new(SessionService::new(
            Arc::new(StaticCredentialRepository::seeded()),
            Arc::new(PlainTextVerifier),
        ));

        let outcome = sync.load_all().await;
        info!(
            count = outcome.records.len(),
            source = ?outcome.source,
            "initial record load complete"
        );

        Ok(Self { config, db, mirror, auth, sync })
    }
}
