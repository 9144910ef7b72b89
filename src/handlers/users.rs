// src/handlers/users.rs

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
    models::users::{CreateUserPayload, UpdateProfilePayload, User},
};

// GET /api/users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Equipe",
    responses(
        (status = 200, description = "Todos os usuários cadastrados", body = Vec<User>),
        (status = 403, description = "Gestão de equipe exige Administrativo ou Master")
    ),
    security(("session_user" = []))
)]
pub async fn list_users(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Users)?;
    let users = app_state.user_service.list().await;
    Ok((StatusCode::OK, Json(users)))
}

// GET /api/users/me
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "Equipe",
    responses(
        (status = 200, description = "O usuário atuante da sessão", body = User)
    ),
    security(("session_user" = []))
)]
pub async fn get_me(ActingUser(user): ActingUser) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(user)))
}

// POST /api/users
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Equipe",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "Usuário criado com avatar gerado e senha padrão", body = User),
        (status = 400, description = "Dados inválidos")
    ),
    security(("session_user" = []))
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Users)?;
    payload.validate()?;

    let created = app_state.user_service.create(payload.name, payload.role).await;
    Ok((StatusCode::CREATED, Json(created)))
}

// DELETE /api/users/{id}
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Equipe",
    params(("id" = String, Path, description = "ID do usuário")),
    responses(
        (status = 204, description = "Usuário removido (ou já ausente)"),
        (status = 409, description = "Guarda violada: autoexclusão ou conta Master")
    ),
    security(("session_user" = []))
)]
pub async fn delete_user(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Users)?;
    app_state.user_service.delete(&user, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// PATCH /api/users/{id}/profile
#[utoipa::path(
    patch,
    path = "/api/users/{id}/profile",
    tag = "Equipe",
    request_body = UpdateProfilePayload,
    params(("id" = String, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Perfil após a mesclagem (null se o usuário não existir)", body = Option<User>),
        (status = 400, description = "Dados inválidos"),
        (status = 403, description = "Só o próprio usuário (ou Master) edita o perfil")
    ),
    security(("session_user" = []))
)]
pub async fn update_profile(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProfilePayload>,
) -> Result<impl IntoResponse, AppError> {
    // Perfil é pessoal: cada um edita o seu; Master pode ajustar qualquer um
    if user.id != id && !user.is_master {
        return Err(AppError::AccessDenied);
    }
    payload.validate()?;

    let updated = app_state.user_service.update_profile(&id, payload).await;
    Ok((StatusCode::OK, Json(updated)))
}
