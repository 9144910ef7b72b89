// src/models/finance.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DebtStatus {
    Pending,
    Overdue,
    Paid,
}

// O registro de como e quando um débito foi quitado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    #[schema(example = "2350.00")]
    pub value: Decimal,

    #[schema(value_type = String, format = Date, example = "2024-02-15")]
    pub date: NaiveDate,

    #[schema(example = "Pix")]
    pub method: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DebtHistoryEntry {
    #[schema(value_type = String, format = Date, example = "2024-02-10")]
    pub date: NaiveDate,

    #[schema(example = "Vencimento")]
    pub event: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    #[schema(example = "d_legal_4c5d6e")]
    pub id: String,

    #[schema(example = "Roberto Alencar")]
    pub tenant_name: String,

    #[schema(example = "Rua das Flores, 123")]
    pub property_address: String,

    #[schema(example = "2500.00")]
    pub amount: Decimal,

    #[schema(value_type = String, format = Date, example = "2024-02-10")]
    pub due_date: NaiveDate,

    pub status: DebtStatus,

    pub is_legal_recovery: bool,

    // Invariante: presente se, e somente se, status == Paid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement: Option<Settlement>,

    // Append-only: nenhuma entrada é removida ou reordenada
    pub history: Vec<DebtHistoryEntry>,
}

// O Payload para baixar um acerto manualmente no financeiro
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettleDebtPayload {
    #[schema(example = "100.00")]
    pub value: Decimal,

    #[schema(value_type = String, format = Date, example = "2024-05-01")]
    pub date: NaiveDate,

    #[validate(length(min = 2, message = "Informe a forma de pagamento"))]
    #[schema(example = "Pix")]
    pub method: String,
}

// Período consultado pelo razão financeiro
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PeriodQuery {
    #[serde(default = "default_period_start")]
    #[param(value_type = String, format = Date, example = "2024-01-01")]
    pub start: NaiveDate,

    #[serde(default = "default_period_end")]
    #[param(value_type = String, format = Date, example = "2024-12-31")]
    pub end: NaiveDate,
}

// Sem parâmetros, o razão cobre o exercício de 2024
pub(crate) fn default_period_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

pub(crate) fn default_period_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
}

// Totais do razão financeiro sobre o período filtrado
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialTotals {
    // Soma dos débitos ainda em aberto
    #[schema(example = "3200.00")]
    pub pending: Decimal,

    // Soma dos acertos recebidos (débitos Paid)
    #[schema(example = "2350.00")]
    pub received: Decimal,

    // Parcela do recebido vinda de recuperação jurídica
    #[schema(example = "2350.00")]
    pub legal: Decimal,
}
