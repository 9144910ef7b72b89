// src/models/assistant.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Payloads do assistente de IA. O conteúdo é texto livre: a View monta o
// contexto e o backend só constrói o prompt e repassa ao Gemini.

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionMessagePayload {
    #[validate(length(min = 2, message = "Informe o nome do inquilino"))]
    #[schema(example = "Lucia Mendes")]
    pub tenant_name: String,

    #[schema(example = "3200.00")]
    pub amount: Decimal,

    #[schema(example = 15)]
    pub days_overdue: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LegalSummaryPayload {
    #[validate(length(min = 1, message = "Informe os detalhes do processo"))]
    #[schema(example = "Processo: 0012345-88.2023.8.26.0100, Status: Protocolado")]
    pub case_details: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysisPayload {
    #[validate(length(min = 1, message = "Informe o texto a analisar"))]
    pub text: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatPayload {
    #[validate(length(min = 1, message = "A mensagem não pode ser vazia"))]
    #[schema(example = "Como cadastro uma nova demanda?")]
    pub message: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpPayload {
    #[validate(length(min = 2, message = "Informe o nome do cliente"))]
    #[schema(example = "Carlos Andrade")]
    pub client_name: String,

    #[schema(example = "Proposta")]
    pub stage: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptionPayload {
    // Áudio codificado em base64, como capturado pela View
    #[validate(length(min = 1, message = "O áudio não pode ser vazio"))]
    pub audio: String,

    #[schema(example = "audio/webm")]
    pub mime_type: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpeechPayload {
    #[validate(length(min = 1, message = "O texto não pode ser vazio"))]
    pub text: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssistantReply {
    pub text: String,
}
