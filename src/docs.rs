// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Dashboard ---
        handlers::dashboard::get_metrics,
        handlers::dashboard::get_sector_volume,
        handlers::dashboard::get_sector_productivity,
        handlers::dashboard::get_case_status,
        handlers::dashboard::get_critical_tasks,

        // --- Demandas ---
        handlers::tasks::list_tasks,
        handlers::tasks::create_task,
        handlers::tasks::update_task_status,
        handlers::tasks::delete_task,
        handlers::tasks::finalize_task,

        // --- Jurídico ---
        handlers::legal::list_cases,
        handlers::legal::update_case,
        handlers::legal::add_case_note,

        // --- Financeiro ---
        handlers::finance::list_debts,
        handlers::finance::settle_debt,
        handlers::finance::financial_totals,

        // --- Equipe ---
        handlers::users::list_users,
        handlers::users::get_me,
        handlers::users::create_user,
        handlers::users::delete_user,
        handlers::users::update_profile,

        // --- Assistente IA ---
        handlers::assistant::collection_message,
        handlers::assistant::legal_summary,
        handlers::assistant::risk_analysis,
        handlers::assistant::chat,
        handlers::assistant::follow_up,
        handlers::assistant::transcription,
        handlers::assistant::speech,
    ),
    components(
        schemas(
            // --- Equipe ---
            models::users::Sector,
            models::users::User,
            models::users::CreateUserPayload,
            models::users::UpdateProfilePayload,

            // --- Demandas ---
            models::tasks::TaskStatus,
            models::tasks::Priority,
            models::tasks::TaskAttachment,
            models::tasks::Task,
            models::tasks::CreateTaskPayload,
            models::tasks::UpdateTaskStatusPayload,
            models::tasks::FinalizeTaskPayload,

            // --- Financeiro ---
            models::finance::DebtStatus,
            models::finance::Settlement,
            models::finance::DebtHistoryEntry,
            models::finance::Debt,
            models::finance::SettleDebtPayload,
            models::finance::FinancialTotals,

            // --- Jurídico ---
            models::legal::CaseStatus,
            models::legal::DeadlineStatus,
            models::legal::Note,
            models::legal::LegalCase,
            models::legal::AddNotePayload,

            // --- Dashboard ---
            models::dashboard::DashboardMetrics,
            models::dashboard::SectorVolumeEntry,
            models::dashboard::SectorProductivityEntry,
            models::dashboard::CaseStatusEntry,

            // --- Assistente IA ---
            models::assistant::CollectionMessagePayload,
            models::assistant::LegalSummaryPayload,
            models::assistant::RiskAnalysisPayload,
            models::assistant::ChatPayload,
            models::assistant::FollowUpPayload,
            models::assistant::TranscriptionPayload,
            models::assistant::SpeechPayload,
            models::assistant::AssistantReply,
        )
    ),
    tags(
        (name = "Dashboard", description = "Painel unificado com filtros"),
        (name = "Demandas", description = "Fluxo de demandas por setor"),
        (name = "Jurídico", description = "Processos judiciais e anotações"),
        (name = "Financeiro", description = "Cobranças, acertos e razão"),
        (name = "Equipe", description = "Gestão de usuários"),
        (name = "Assistente IA", description = "Geração de texto e voz via Gemini"),
    ),
    info(
        title = "ImobFlow API",
        description = "Back-office de gestão imobiliária: demandas, jurídico, cobranças e financeiro.",
        version = "2.0.0"
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn with_security() -> utoipa::openapi::OpenApi {
        let mut doc = Self::openapi();
        if let Some(components) = doc.components.as_mut() {
            components.add_security_scheme(
                "session_user",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("x-user-id"))),
            );
        }
        doc
    }
}
