// src/services/dashboard_service.rs

use crate::analytics;
use crate::models::dashboard::{
    CaseStatusEntry, DashboardFilter, DashboardMetrics, SectorProductivityEntry, SectorVolumeEntry,
};
use crate::models::tasks::Task;
use crate::store::Store;

#[derive(Clone)]
pub struct DashboardService {
    store: Store,
}

impl DashboardService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn metrics(&self, filter: &DashboardFilter) -> DashboardMetrics {
        let data = self.store.read().await;
        analytics::dashboard_metrics(&data.tasks, &data.debts, &data.cases, filter)
    }

    pub async fn sector_volume(&self) -> Vec<SectorVolumeEntry> {
        let data = self.store.read().await;
        analytics::tasks_by_sector(&data.tasks)
    }

    pub async fn sector_productivity(&self) -> Vec<SectorProductivityEntry> {
        let data = self.store.read().await;
        analytics::sector_productivity(&data.tasks)
    }

    pub async fn case_status(&self) -> Vec<CaseStatusEntry> {
        let data = self.store.read().await;
        analytics::case_status_series(&data.cases)
    }

    pub async fn critical_tasks(&self, filter: &DashboardFilter) -> Vec<Task> {
        let data = self.store.read().await;
        analytics::critical_tasks(&data.tasks, filter)
    }
}
