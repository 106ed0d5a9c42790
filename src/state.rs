use std::sync::Arc;

use crate::{
    config::Config,
    db::{DbPool, business_store::BusinessStore, log_store::LogStore, user_store::UserStore},
    services::AuthService,
};

/// Everything a request handler can reach. Built once at startup and cloned
/// into the router; all clones share the same pool and session table.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pool: DbPool,
    pub users: UserStore,
    pub businesses: BusinessStore,
    pub logs: LogStore,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(config: Config, pool: DbPool) -> Self {
        let auth = AuthService::new(config.hash_passwords);

        Self {
            config: Arc::new(config),
            users: UserStore::new(pool.clone()),
            businesses: BusinessStore::new(pool.clone()),
            logs: LogStore::new(pool.clone()),
            pool,
            auth,
        }
    }
}
