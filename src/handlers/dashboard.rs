// src/handlers/dashboard.rs

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        capability::{self, View},
        session::ActingUser,
    },
    models::dashboard::{
        CaseStatusEntry, DashboardFilter, DashboardMetrics, SectorProductivityEntry,
        SectorVolumeEntry,
    },
    models::tasks::Task,
};

// GET /api/dashboard/metrics
#[utoipa::path(
    get,
    path = "/api/dashboard/metrics",
    tag = "Dashboard",
    params(DashboardFilter),
    responses(
        (status = 200, description = "Cards do painel sob o filtro informado", body = DashboardMetrics),
        (status = 401, description = "Sessão inválida")
    ),
    security(("session_user" = []))
)]
pub async fn get_metrics(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
    Query(filter): Query<DashboardFilter>,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Dashboard)?;
    let metrics = app_state.dashboard_service.metrics(&filter).await;
    Ok((StatusCode::OK, Json(metrics)))
}

// GET /api/dashboard/sector-volume
#[utoipa::path(
    get,
    path = "/api/dashboard/sector-volume",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Volume de demandas por setor (coleção completa)", body = Vec<SectorVolumeEntry>)
    ),
    security(("session_user" = []))
)]
pub async fn get_sector_volume(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Dashboard)?;
    let series = app_state.dashboard_service.sector_volume().await;
    Ok((StatusCode::OK, Json(series)))
}

// GET /api/dashboard/sector-productivity
#[utoipa::path(
    get,
    path = "/api/dashboard/sector-productivity",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Concluído x pendente por setor", body = Vec<SectorProductivityEntry>)
    ),
    security(("session_user" = []))
)]
pub async fn get_sector_productivity(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Dashboard)?;
    let series = app_state.dashboard_service.sector_productivity().await;
    Ok((StatusCode::OK, Json(series)))
}

// GET /api/dashboard/case-status
#[utoipa::path(
    get,
    path = "/api/dashboard/case-status",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Contagem de processos por status exibível", body = Vec<CaseStatusEntry>)
    ),
    security(("session_user" = []))
)]
pub async fn get_case_status(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Dashboard)?;
    let series = app_state.dashboard_service.case_status().await;
    Ok((StatusCode::OK, Json(series)))
}

// GET /api/dashboard/critical-tasks
#[utoipa::path(
    get,
    path = "/api/dashboard/critical-tasks",
    tag = "Dashboard",
    params(DashboardFilter),
    responses(
        (status = 200, description = "Até quatro demandas de prioridade Alta/Crítica no filtro", body = Vec<Task>)
    ),
    security(("session_user" = []))
)]
pub async fn get_critical_tasks(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
    Query(filter): Query<DashboardFilter>,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Dashboard)?;
    let alerts = app_state.dashboard_service.critical_tasks(&filter).await;
    Ok((StatusCode::OK, Json(alerts)))
}
