pub mod catalog_repo;
pub mod diagnostics_repo;
pub mod followup_repo;
pub mod lead_repo;
pub mod quotation_repo;
pub mod repository_error;

use crate::config::mongo_conf::MongoConfig;

/// Collection names owned by this service, in manifest order
pub const COLLECTIONS: [&str; 7] = [
    "community",
    "tower",
    "flat",
    "floorplan",
    "followup",
    "lead",
    "quotation",
];

/// Build a database handle from MongoConfig; shared by every repository
/// constructor. The driver connects lazily, so this never touches the
/// network by itself.
pub(crate) async fn connect_database(
    config: &MongoConfig,
) -> Result<mongodb::Database, mongodb::error::Error> {
    use mongodb::{
        options::{ClientOptions, Credential, ResolverConfig},
        Client,
    };

    let mut client_options =
        ClientOptions::parse_with_resolver_config(&config.uri, ResolverConfig::cloudflare())
            .await?;
    client_options.app_name = Some("DreamNestBackend".to_string());
    client_options.max_pool_size = Some(config.pool_size);
    client_options.connect_timeout = Some(std::time::Duration::from_secs(
        config.connection_timeout_secs,
    ));
    client_options.server_selection_timeout = Some(std::time::Duration::from_secs(
        config.connection_timeout_secs,
    ));

    if let (Some(ref username), Some(ref password)) = (&config.username, &config.password) {
        client_options.credential = Some(
            Credential::builder()
                .username(username.clone())
                .password(password.clone())
                .build(),
        );
    }

    let client = Client::with_options(client_options)?;
    Ok(client.database(&config.database))
}
