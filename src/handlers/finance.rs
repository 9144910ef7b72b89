// src/handlers/finance.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        capability::{self, View},
        session::ActingUser,
    },
    models::finance::{Debt, FinancialTotals, PeriodQuery, SettleDebtPayload},
};

// GET /api/debts
//
// A tela de cobranças e a financeira consomem a mesma coleção; o acesso
// vale para quem enxerga qualquer uma das duas.
#[utoipa::path(
    get,
    path = "/api/debts",
    tag = "Financeiro",
    responses(
        (status = 200, description = "Todos os débitos com histórico", body = Vec<Debt>),
        (status = 403, description = "Setor sem acesso")
    ),
    security(("session_user" = []))
)]
pub async fn list_debts(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
) -> Result<impl IntoResponse, AppError> {
    if capability::ensure_access(&user, View::Collections).is_err() {
        capability::ensure_access(&user, View::Financial)?;
    }
    let debts = app_state.finance_service.list().await;
    Ok((StatusCode::OK, Json(debts)))
}

// POST /api/debts/{id}/settle
#[utoipa::path(
    post,
    path = "/api/debts/{id}/settle",
    tag = "Financeiro",
    request_body = SettleDebtPayload,
    params(("id" = String, Path, description = "ID do débito")),
    responses(
        (status = 200, description = "Débito quitado (null se não existir ou já estiver quitado)", body = Option<Debt>),
        (status = 400, description = "Dados inválidos")
    ),
    security(("session_user" = []))
)]
pub async fn settle_debt(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
    Path(id): Path<String>,
    Json(payload): Json<SettleDebtPayload>,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Financial)?;
    payload.validate()?;

    let debt = app_state.finance_service.settle(&id, payload).await;
    Ok((StatusCode::OK, Json(debt)))
}

// GET /api/finance/totals
#[utoipa::path(
    get,
    path = "/api/finance/totals",
    tag = "Financeiro",
    params(PeriodQuery),
    responses(
        (status = 200, description = "Totais do razão no período", body = FinancialTotals)
    ),
    security(("session_user" = []))
)]
pub async fn financial_totals(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
    Query(period): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Financial)?;
    let totals = app_state.finance_service.totals(period.start, period.end).await;
    Ok((StatusCode::OK, Json(totals)))
}
