// src/handlers/assistant.rs

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
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
    models::assistant::{
        AssistantReply, ChatPayload, CollectionMessagePayload, FollowUpPayload,
        LegalSummaryPayload, RiskAnalysisPayload, SpeechPayload, TranscriptionPayload,
    },
};

// POST /api/assistant/collection-message
#[utoipa::path(
    post,
    path = "/api/assistant/collection-message",
    tag = "Assistente IA",
    request_body = CollectionMessagePayload,
    responses(
        (status = 200, description = "Mensagem de cobrança gerada (ou texto de fallback)", body = AssistantReply)
    ),
    security(("session_user" = []))
)]
pub async fn collection_message(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
    Json(payload): Json<CollectionMessagePayload>,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Collections)?;
    payload.validate()?;

    let text = app_state
        .assistant_service
        .collection_message(&payload.tenant_name, payload.amount, payload.days_overdue)
        .await;
    Ok((StatusCode::OK, Json(AssistantReply { text })))
}

// POST /api/assistant/legal-summary
#[utoipa::path(
    post,
    path = "/api/assistant/legal-summary",
    tag = "Assistente IA",
    request_body = LegalSummaryPayload,
    responses(
        (status = 200, description = "Resumo do processo (ou texto de fallback)", body = AssistantReply)
    ),
    security(("session_user" = []))
)]
pub async fn legal_summary(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
    Json(payload): Json<LegalSummaryPayload>,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Legal)?;
    payload.validate()?;

    let text = app_state.assistant_service.legal_summary(&payload.case_details).await;
    Ok((StatusCode::OK, Json(AssistantReply { text })))
}

// POST /api/assistant/risk-analysis
#[utoipa::path(
    post,
    path = "/api/assistant/risk-analysis",
    tag = "Assistente IA",
    request_body = RiskAnalysisPayload,
    responses(
        (status = 200, description = "Análise de riscos do texto (ou texto de fallback)", body = AssistantReply)
    ),
    security(("session_user" = []))
)]
pub async fn risk_analysis(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
    Json(payload): Json<RiskAnalysisPayload>,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Legal)?;
    payload.validate()?;

    let text = app_state.assistant_service.risk_analysis(&payload.text).await;
    Ok((StatusCode::OK, Json(AssistantReply { text })))
}

// POST /api/assistant/chat
//
// O chat flutuante está disponível em todas as telas; basta sessão válida.
#[utoipa::path(
    post,
    path = "/api/assistant/chat",
    tag = "Assistente IA",
    request_body = ChatPayload,
    responses(
        (status = 200, description = "Resposta do assistente (ou texto de fallback)", body = AssistantReply)
    ),
    security(("session_user" = []))
)]
pub async fn chat(
    State(app_state): State<AppState>,
    ActingUser(_user): ActingUser,
    Json(payload): Json<ChatPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let text = app_state.assistant_service.chat(&payload.message).await;
    Ok((StatusCode::OK, Json(AssistantReply { text })))
}

// POST /api/assistant/follow-up
#[utoipa::path(
    post,
    path = "/api/assistant/follow-up",
    tag = "Assistente IA",
    request_body = FollowUpPayload,
    responses(
        (status = 200, description = "E-mail de follow-up do funil de vendas", body = AssistantReply)
    ),
    security(("session_user" = []))
)]
pub async fn follow_up(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
    Json(payload): Json<FollowUpPayload>,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Tasks)?;
    payload.validate()?;

    let text = app_state
        .assistant_service
        .follow_up(&payload.client_name, &payload.stage)
        .await;
    Ok((StatusCode::OK, Json(AssistantReply { text })))
}

// POST /api/assistant/transcription
#[utoipa::path(
    post,
    path = "/api/assistant/transcription",
    tag = "Assistente IA",
    request_body = TranscriptionPayload,
    responses(
        (status = 200, description = "Transcrição do áudio em português", body = AssistantReply)
    ),
    security(("session_user" = []))
)]
pub async fn transcription(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
    Json(payload): Json<TranscriptionPayload>,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Legal)?;
    payload.validate()?;

    let text = app_state
        .assistant_service
        .transcribe(&payload.audio, &payload.mime_type)
        .await;
    Ok((StatusCode::OK, Json(AssistantReply { text })))
}

// POST /api/assistant/speech
#[utoipa::path(
    post,
    path = "/api/assistant/speech",
    tag = "Assistente IA",
    request_body = SpeechPayload,
    responses(
        (status = 200, description = "Áudio PCM bruto (16-bit, mono, 24kHz, audio/L16)"),
        (status = 502, description = "Serviço de IA indisponível")
    ),
    security(("session_user" = []))
)]
pub async fn speech(
    State(app_state): State<AppState>,
    ActingUser(user): ActingUser,
    Json(payload): Json<SpeechPayload>,
) -> Result<impl IntoResponse, AppError> {
    capability::ensure_access(&user, View::Collections)?;
    payload.validate()?;

    let audio = app_state.assistant_service.speech(&payload.text).await?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "audio/L16;rate=24000;channels=1")],
        audio,
    ))
}
