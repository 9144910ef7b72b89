// src/handlers/legal.rs

use axum::{
    Json,
    extract::{Path, State},
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
    models::legal::{AddNotePayload, LegalCase, Note},
};

// GET /api/cases
#[utoipa::path(
    get,
    path = "/api/cases",
    tag = "Jurídico",
    responses(
        (status = 200, description = "Todos os processos judiciais", body = Vec<LegalCase>),
        (status = 403, description = "Setor sem acesso")
    ),
    security(("session_user" = []))
)]
pub async fn list_cases(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Legal)?;
    let cases = app_state.legal_service.list().await;
    Ok((StatusCode::OK, Json(cases)))
}

// PUT /api/cases/{id}
//
// Substituição integral: a View envia o processo inteiro editado.
// O id do path manda; o corpo é realinhado a ele.
#[utoipa::path(
    put,
    path = "/api/cases/{id}",
    tag = "Jurídico",
    request_body = LegalCase,
    params(("id" = String, Path, description = "ID do processo")),
    responses(
        (status = 200, description = "Processo após a atualização (null se não existir)", body = Option<LegalCase>)
    ),
    security(("session_user" = []))
)]
pub async fn update_case(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
    Path(id): Path<String>,
    Json(mut payload): Json<LegalCase>,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Legal)?;
    payload.id = id;
    let case = app_state.legal_service.update_case(payload).await;
    Ok((StatusCode::OK, Json(case)))
}

// POST /api/cases/{id}/notes
#[utoipa::path(
    post,
    path = "/api/cases/{id}/notes",
    tag = "Jurídico",
    request_body = AddNotePayload,
    params(("id" = String, Path, description = "ID do processo")),
    responses(
        (status = 201, description = "Anotação registrada com autor e papel do usuário atuante", body = Option<Note>),
        (status = 400, description = "Anotação vazia")
    ),
    security(("session_user" = []))
)]
pub async fn add_case_note(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
    Path(id): Path<String>,
    Json(payload): Json<AddNotePayload>,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Legal)?;
    payload.validate()?;

    let note = app_state.legal_service.add_note(&id, &user, payload.text).await;
    Ok((StatusCode::CREATED, Json(note)))
}
