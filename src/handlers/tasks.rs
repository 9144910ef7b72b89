// src/handlers/tasks.rs

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
    models::tasks::{CreateTaskPayload, FinalizeTaskPayload, Task, UpdateTaskStatusPayload},
};

// GET /api/tasks
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = "Demandas",
    responses(
        (status = 200, description = "Todas as demandas, mais recentes primeiro", body = Vec<Task>),
        (status = 401, description = "Sessão inválida"),
        (status = 403, description = "Setor sem acesso")
    ),
    security(("session_user" = []))
)]
pub async fn list_tasks(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Tasks)?;
    let tasks = app_state.task_service.list().await;
    Ok((StatusCode::OK, Json(tasks)))
}

// POST /api/tasks
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = "Demandas",
    request_body = CreateTaskPayload,
    responses(
        (status = 201, description = "Demanda criada com status Pendente", body = Task),
        (status = 400, description = "Dados inválidos")
    ),
    security(("session_user" = []))
)]
pub async fn create_task(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
    Json(payload): Json<CreateTaskPayload>,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Tasks)?;
    payload.validate()?;

    let task = app_state.task_service.create(payload).await;
    Ok((StatusCode::CREATED, Json(task)))
}

// PATCH /api/tasks/{id}/status
#[utoipa::path(
    patch,
    path = "/api/tasks/{id}/status",
    tag = "Demandas",
    request_body = UpdateTaskStatusPayload,
    params(("id" = String, Path, description = "ID da demanda")),
    responses(
        // Id inexistente não é erro: a operação completa sem efeito
        (status = 200, description = "Demanda após a troca de status (null se não existir)", body = Option<Task>)
    ),
    security(("session_user" = []))
)]
pub async fn update_task_status(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTaskStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Tasks)?;
    let task = app_state.task_service.update_status(&id, payload.status).await;
    Ok((StatusCode::OK, Json(task)))
}

// DELETE /api/tasks/{id}
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    tag = "Demandas",
    params(("id" = String, Path, description = "ID da demanda")),
    responses(
        (status = 204, description = "Demanda removida (ou já ausente)")
    ),
    security(("session_user" = []))
)]
pub async fn delete_task(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Tasks)?;
    app_state.task_service.delete(&id).await;
    Ok(StatusCode::NO_CONTENT)
}

// POST /api/tasks/{id}/finalize
#[utoipa::path(
    post,
    path = "/api/tasks/{id}/finalize",
    tag = "Demandas",
    request_body = FinalizeTaskPayload,
    params(("id" = String, Path, description = "ID da demanda jurídica")),
    responses(
        (status = 200, description = "Lançamento financeiro gerado pela finalização (null se a demanda não existir ou já estiver concluída)", body = Option<crate::models::finance::Debt>),
        (status = 400, description = "Dados inválidos")
    ),
    security(("session_user" = []))
)]
pub async fn finalize_task(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
    Path(id): Path<String>,
    Json(payload): Json<FinalizeTaskPayload>,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Legal)?;
    payload.validate()?;

    let debt = app_state
        .task_service
        .finalize(&id, payload.amount, &payload.payment_method)
        .await;
    Ok((StatusCode::OK, Json(debt)))
}
