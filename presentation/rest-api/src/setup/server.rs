use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::api::security::ApiKeyAuth;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            (container.product_api, container.product_option_api),
            "Product Catalog API",
            "0.1.0",
        )
        .server(format!("http://{}/api", addr));
        // The key gate sits inside Cors so preflight requests, which carry no
        // custom headers, are answered before the credential check.
        let app = Route::new()
            .nest("/api", api_service)
            .with(ApiKeyAuth::new(&config.api_key))
            .with(config.cors)
            .with(Tracing);
        println!("Server running at http://{}/api", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
