// src/models/tasks.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::users::Sector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TaskStatus {
    #[serde(rename = "Pendente")]
    Pendente,
    #[serde(rename = "Em andamento")]
    EmAndamento,
    #[serde(rename = "Aguardando Documentos")]
    AguardandoDocumentos,
    #[serde(rename = "Concluído")]
    Concluido,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Priority {
    #[serde(rename = "Baixa")]
    Baixa,
    #[serde(rename = "Média")]
    Media,
    #[serde(rename = "Alta")]
    Alta,
    #[serde(rename = "Crítica")]
    Critica,
}

// Anexo produzido pela View: a URL é um payload data-URI opaco que o
// backend armazena e devolve sem interpretar.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskAttachment {
    #[schema(example = "contrato.pdf")]
    pub name: String,

    #[serde(rename = "type")]
    #[schema(example = "application/pdf")]
    pub content_type: String,

    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[schema(example = "tsk_9f8e7d")]
    pub id: String,

    #[schema(example = "Análise de Contrato - Rua das Flores")]
    pub title: String,

    pub description: String,

    pub sector: Sector,

    // ID do usuário responsável, quando houver
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,

    pub priority: Priority,

    pub status: TaskStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_property_id: Option<String>,

    #[schema(value_type = String, format = Date, example = "2023-10-01")]
    pub created_at: NaiveDate,

    #[schema(value_type = String, format = Date, example = "2023-10-15")]
    pub due_date: NaiveDate,

    #[serde(default)]
    pub attachments: Vec<TaskAttachment>,
}

// O Payload para abrir uma nova demanda
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskPayload {
    #[validate(length(min = 3, message = "O título deve ter no mínimo 3 caracteres"))]
    #[schema(example = "Despejo - João Pereira")]
    pub title: String,

    #[schema(example = "Ação de despejo por falta de pagamento.")]
    pub description: String,

    pub sector: Sector,

    pub assigned_to: Option<String>,

    pub priority: Priority,

    pub related_property_id: Option<String>,

    #[schema(value_type = String, format = Date, example = "2024-06-30")]
    pub due_date: NaiveDate,

    #[serde(default)]
    pub attachments: Vec<TaskAttachment>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskStatusPayload {
    pub status: TaskStatus,
}

// Encerramento de demanda jurídica com o valor recuperado
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeTaskPayload {
    #[schema(example = "2500.00")]
    pub amount: Decimal,

    #[validate(length(min = 2, message = "Informe a forma de pagamento"))]
    #[schema(example = "Pix")]
    pub payment_method: String,
}
