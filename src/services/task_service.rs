// src/services/task_service.rs

use chrono::Utc;
use rust_decimal::Decimal;

use crate::models::finance::Debt;
use crate::models::tasks::{CreateTaskPayload, Task, TaskStatus};
use crate::store::Store;
use crate::workflow;

#[derive(Clone)]
pub struct TaskService {
    store: Store,
}

impl TaskService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Task> {
        self.store.read().await.tasks.clone()
    }

    pub async fn create(&self, payload: CreateTaskPayload) -> Task {
        // "Hoje" é resolvido aqui na borda; o motor só recebe a data
        let today = Utc::now().date_naive();
        let mut data = self.store.write().await;
        let task = workflow::add_task(&mut data, payload, today);
        tracing::info!("Demanda criada: {} ({})", task.title, task.id);
        task
    }

    pub async fn update_status(&self, task_id: &str, status: TaskStatus) -> Option<Task> {
        let mut data = self.store.write().await;
        workflow::update_task_status(&mut data, task_id, status);
        data.tasks.iter().find(|t| t.id == task_id).cloned()
    }

    pub async fn delete(&self, task_id: &str) {
        let mut data = self.store.write().await;
        workflow::delete_task(&mut data, task_id);
    }

    /// Encerra a demanda jurídica e lança o débito quitado em um único
    /// passo sob o lock de escrita.
    pub async fn finalize(
        &self,
        task_id: &str,
        amount: Decimal,
        payment_method: &str,
    ) -> Option<Debt> {
        let today = Utc::now().date_naive();
        let mut data = self.store.write().await;
        let debt = workflow::finalize_legal_task(&mut data, task_id, amount, payment_method, today);
        if let Some(debt) = &debt {
            tracing::info!(
                "Demanda {} finalizada; lançamento {} de R$ {} gerado",
                task_id,
                debt.id,
                debt.amount
            );
        }
        debt
    }
}
