use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::config::app_conf::AppConfig;
use crate::config::mongo_conf::MongoConfig;
use crate::repository::catalog_repo::MongoCatalogRepository;
use crate::repository::diagnostics_repo::MongoDiagnostics;
use crate::repository::followup_repo::MongoFollowUpRepository;
use crate::repository::lead_repo::MongoLeadRepository;
use crate::repository::quotation_repo::MongoQuotationRepository;
use crate::router::catalog_router::catalog_router;
use crate::router::lead_router::lead_router;
use crate::router::quotation_router::quotation_router;
use crate::router::system_router::system_router;
use crate::service::catalog_service::CatalogServiceImpl;
use crate::service::lead_service::LeadServiceImpl;
use crate::service::quotation_service::QuotationServiceImpl;

pub struct App {
    config: AppConfig,
    router: Router,
}

impl App {
    pub async fn new() -> Self {
        let config = AppConfig::from_env();
        let mongo_config = MongoConfig::from_env().expect("Mongo config error");

        let catalog_repo = MongoCatalogRepository::new(&mongo_config)
            .await
            .expect("Catalog repo error");
        let lead_repo = Arc::new(
            MongoLeadRepository::new(&mongo_config)
                .await
                .expect("Lead repo error"),
        );
        let followup_repo = MongoFollowUpRepository::new(&mongo_config)
            .await
            .expect("Follow-up repo error");
        let quotation_repo = MongoQuotationRepository::new(&mongo_config)
            .await
            .expect("Quotation repo error");
        let diagnostics = Arc::new(
            MongoDiagnostics::new(&mongo_config)
                .await
                .expect("Diagnostics error"),
        );

        let catalog_service = Arc::new(CatalogServiceImpl { catalog_repo });
        let lead_service = Arc::new(LeadServiceImpl {
            lead_repo: lead_repo.clone(),
            followup_repo,
        });
        let quotation_service = Arc::new(QuotationServiceImpl {
            quotation_repo,
            lead_repo,
        });

        let router = Router::new()
            .merge(system_router(diagnostics))
            .merge(catalog_router(catalog_service))
            .merge(lead_router(lead_service))
            .merge(quotation_router(quotation_service));

        App { config, router }
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(
            self.config.host.parse().expect("Invalid host"),
            self.config.port,
        );
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("Failed to bind address");
        axum::serve(listener, self.router)
            .await
            .expect("Failed to start server");
    }
}
