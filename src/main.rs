// src/main.rs

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod analytics;
mod common;
mod config;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;
mod store;
mod workflow;

use crate::config::AppState;
use crate::middleware::session::session_guard;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    let app_state = AppState::new();

    let dashboard_routes = Router::new()
        .route("/metrics", get(handlers::dashboard::get_metrics))
        .route("/sector-volume", get(handlers::dashboard::get_sector_volume))
        .route(
            "/sector-productivity",
            get(handlers::dashboard::get_sector_productivity),
        )
        .route("/case-status", get(handlers::dashboard::get_case_status))
        .route("/critical-tasks", get(handlers::dashboard::get_critical_tasks));

    let task_routes = Router::new()
        .route(
            "/",
            get(handlers::tasks::list_tasks).post(handlers::tasks::create_task),
        )
        .route(
            "/{id}",
            axum::routing::delete(handlers::tasks::delete_task),
        )
        .route(
            "/{id}/status",
            axum::routing::patch(handlers::tasks::update_task_status),
        )
        .route("/{id}/finalize", post(handlers::tasks::finalize_task));

    let case_routes = Router::new()
        .route("/", get(handlers::legal::list_cases))
        .route("/{id}", put(handlers::legal::update_case))
        .route("/{id}/notes", post(handlers::legal::add_case_note));

    let finance_routes = Router::new()
        .route("/debts", get(handlers::finance::list_debts))
        .route("/debts/{id}/settle", post(handlers::finance::settle_debt))
        .route("/finance/totals", get(handlers::finance::financial_totals));

    let user_routes = Router::new()
        .route(
            "/",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route("/me", get(handlers::users::get_me))
        .route(
            "/{id}",
            axum::routing::delete(handlers::users::delete_user),
        )
        .route(
            "/{id}/profile",
            axum::routing::patch(handlers::users::update_profile),
        );

    let assistant_routes = Router::new()
        .route(
            "/collection-message",
            post(handlers::assistant::collection_message),
        )
        .route("/legal-summary", post(handlers::assistant::legal_summary))
        .route("/risk-analysis", post(handlers::assistant::risk_analysis))
        .route("/chat", post(handlers::assistant::chat))
        .route("/follow-up", post(handlers::assistant::follow_up))
        .route("/transcription", post(handlers::assistant::transcription))
        .route("/speech", post(handlers::assistant::speech));

    // Tudo sob /api (menos o health) exige o cabeçalho de sessão
    let api_routes = Router::new()
        .nest("/dashboard", dashboard_routes)
        .nest("/tasks", task_routes)
        .nest("/cases", case_routes)
        .merge(finance_routes)
        .nest("/users", user_routes)
        .nest("/assistant", assistant_routes)
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            session_guard,
        ));

    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api", api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::with_security()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
