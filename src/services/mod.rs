// src/services/mod.rs

pub mod assistant_service;
pub mod dashboard_service;
pub mod finance_service;
pub mod legal_service;
pub mod task_service;
pub mod user_service;

pub use assistant_service::AssistantService;
pub use dashboard_service::DashboardService;
pub use finance_service::FinanceService;
pub use legal_service::LegalService;
pub use task_service::TaskService;
pub use user_service::UserService;
