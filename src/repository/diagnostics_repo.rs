use tracing::info;

use crate::config::mongo_conf::MongoConfig;

/// Connectivity probe for the diagnostic endpoint; holds the only raw
/// database handle in the process.
pub struct MongoDiagnostics {
    db: mongodb::Database,
    uri_configured: bool,
}

impl MongoDiagnostics {
    pub async fn new(config: &MongoConfig) -> Result<Self, mongodb::error::Error> {
        let db = crate::repository::connect_database(config).await?;
        Ok(MongoDiagnostics {
            db,
            uri_configured: !config.uri.is_empty(),
        })
    }

    pub fn database_name(&self) -> &str {
        self.db.name()
    }

    pub fn uri_configured(&self) -> bool {
        self.uri_configured
    }

    /// Round-trips to the server; the caller decides how to report failure.
    pub async fn collection_names(&self) -> Result<Vec<String>, mongodb::error::Error> {
        let names = self.db.list_collection_names(None).await?;
        info!("Database reachable, {} collections", names.len());
        Ok(names)
    }
}
