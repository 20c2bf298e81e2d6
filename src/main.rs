use std::io::Error;
use std::sync::Arc;

use poem::{EndpointExt, Route, Server, listener::TcpListener, middleware::Cors};
use poem_openapi::OpenApiService;
use tokio::main;
use tracing::info;

use crate::{
    application::{
        services::{announcement::AnnouncementComposer, clock::SystemClock},
        usecases::generate_drafts::GenerateDraftsUseCase,
    },
    config::Config,
    infrastructure::repositories::supabase::SupabaseStore,
    presentation::http::endpoints::{
        jobs::JobsEndpoints,
        root::{ApiState, Endpoints},
    },
};

mod application;
mod config;
mod domain;
mod infrastructure;
mod presentation;

#[main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::try_parse().map_err(Error::other)?;

    let store = Arc::new(SupabaseStore::new(
        config.store_url.clone(),
        config.store_service_key.clone(),
    ));
    let generate_drafts_usecase = Arc::new(GenerateDraftsUseCase::new(
        store.clone(),
        store,
        Arc::new(SystemClock),
        AnnouncementComposer::new(config.app_base_url.clone()),
    ));
    let state = Arc::new(ApiState {
        generate_drafts_usecase,
        job_secret: config.job_secret.clone(),
    });

    let server_url = format!("{}://{}:{}", config.scheme, config.host, config.port);

    info!("Starting server at {}", server_url);

    let api_service = OpenApiService::new(
        (Endpoints, JobsEndpoints::new(state)),
        "Matchday API",
        "0.1.0",
    )
    .server(format!("{}/api", server_url));
    let ui = api_service.swagger_ui();
    let app = Route::new()
        .nest("/api", api_service)
        .nest("/", ui)
        .with(Cors::new());

    Server::new(TcpListener::bind(format!("localhost:{}", config.port)))
        .run(app)
        .await
}
