// src/models/legal.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::users::Sector;

// O sistema não força a progressão monotônica: o status é sempre o que o
// usuário escolheu por último.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CaseStatus {
    #[serde(rename = "Protocolado")]
    Protocolado,
    #[serde(rename = "Distribuído")]
    Distribuido,
    #[serde(rename = "Audiência")]
    Audiencia,
    #[serde(rename = "Sentenciado")]
    Sentenciado,
    #[serde(rename = "Encerrado")]
    Encerrado,
}

impl CaseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CaseStatus::Protocolado => "Protocolado",
            CaseStatus::Distribuido => "Distribuído",
            CaseStatus::Audiencia => "Audiência",
            CaseStatus::Sentenciado => "Sentenciado",
            CaseStatus::Encerrado => "Encerrado",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineStatus {
    None,
    WaitingAcceptance,
    Processing,
    Completed,
}

// Imutável depois de anexada ao processo
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[schema(example = "Dr. Carlos Souza")]
    pub author: String,

    pub role: Sector,

    #[schema(example = "Audiência remarcada para a próxima semana.")]
    pub text: String,

    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LegalCase {
    #[schema(example = "c_7g8h9i")]
    pub id: String,

    #[schema(example = "0012345-88.2023.8.26.0100")]
    pub process_number: String,

    #[schema(example = "Despejo por Falta de Pagamento - Roberto Alencar")]
    pub title: String,

    pub status: CaseStatus,

    // ID do advogado responsável
    #[schema(example = "u_2f3g4h")]
    pub lawyer_id: String,

    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date, example = "2023-11-20")]
    pub next_hearing: Option<NaiveDate>,

    // Append-only
    #[serde(default)]
    pub shared_notes: Vec<Note>,

    pub deadline_status: DeadlineStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date)]
    pub deadline_target: Option<NaiveDate>,
}

// O Payload para registrar uma anotação compartilhada no processo
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddNotePayload {
    #[validate(length(min = 1, message = "A anotação não pode ser vazia"))]
    #[schema(example = "Cliente compareceu ao cartório.")]
    pub text: String,
}
