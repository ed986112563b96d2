use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{identity::IdentityResolver, news::NewsCatalog};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub news: Arc<NewsCatalog>,
    pub identity: Arc<IdentityResolver>,
}
