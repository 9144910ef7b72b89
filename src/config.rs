// src/config.rs

use std::env;

use crate::services::{
    AssistantService, DashboardService, FinanceService, LegalService, TaskService, UserService,
};
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub task_service: TaskService,
    pub legal_service: LegalService,
    pub finance_service: FinanceService,
    pub user_service: UserService,
    pub dashboard_service: DashboardService,
    pub assistant_service: AssistantService,
}

impl AppState {
    pub fn new() -> Self {
        dotenvy::dotenv().ok();

        // A chave é opcional: sem ela o assistente degrada para os
        // textos de fallback em vez de impedir o boot.
        let gemini_api_key = env::var("GEMINI_API_KEY").ok();

        // Sem camada de persistência: o estado nasce do conjunto de
        // demonstração a cada inicialização.
        let store = Store::seeded();
        tracing::info!("✅ Estado em memória inicializado com os dados de demonstração.");

        // --- Monta o gráfico de dependências ---
        let task_service = TaskService::new(store.clone());
        let legal_service = LegalService::new(store.clone());
        let finance_service = FinanceService::new(store.clone());
        let user_service = UserService::new(store.clone());
        let dashboard_service = DashboardService::new(store.clone());
        let assistant_service = AssistantService::new(gemini_api_key);

        Self {
            store,
            task_service,
            legal_service,
            finance_service,
            user_service,
            dashboard_service,
            assistant_service,
        }
    }
}
