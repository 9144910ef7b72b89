// src/models/dashboard.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::finance::{default_period_end, default_period_start};
use crate::models::legal::CaseStatus;
use crate::models::tasks::Priority;
use crate::models::users::Sector;

// O filtro do painel: setor/prioridade opcionais ("todos") e um intervalo
// de datas inclusivo nas duas pontas.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct DashboardFilter {
    pub sector: Option<Sector>,

    pub priority: Option<Priority>,

    #[serde(default = "default_period_start")]
    #[param(value_type = String, format = Date, example = "2024-01-01")]
    pub start: NaiveDate,

    #[serde(default = "default_period_end")]
    #[param(value_type = String, format = Date, example = "2024-12-31")]
    pub end: NaiveDate,
}

impl Default for DashboardFilter {
    fn default() -> Self {
        Self {
            sector: None,
            priority: None,
            start: default_period_start(),
            end: default_period_end(),
        }
    }
}

// 1. Os cards do topo do painel
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,

    // Soma das cobranças vencidas no período
    #[schema(example = "3200.00")]
    pub overdue_debts: Decimal,

    // Processos que ainda não chegaram a "Encerrado"
    pub active_cases: usize,

    // Percentual concluído/total, arredondado a uma casa; 0 quando não há tarefas
    #[schema(example = 66.7)]
    pub completion_rate: f64,
}

// 2. Gráfico de pizza: volume de demandas por setor (coleção completa)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectorVolumeEntry {
    pub name: Sector,
    pub value: usize,
}

// 3. Gráfico de barras: produtividade por setor (coleção completa)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectorProductivityEntry {
    pub name: Sector,
    pub completed: usize,
    pub pending: usize,
}

// 4. Gráfico horizontal: contagem por status processual
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseStatusEntry {
    pub status: CaseStatus,
    pub count: usize,
}
