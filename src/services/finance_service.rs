// src/services/finance_service.rs

use chrono::NaiveDate;

use crate::analytics;
use crate::models::finance::{Debt, FinancialTotals, SettleDebtPayload, Settlement};
use crate::store::Store;
use crate::workflow;

#[derive(Clone)]
pub struct FinanceService {
    store: Store,
}

impl FinanceService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Debt> {
        self.store.read().await.debts.clone()
    }

    pub async fn settle(&self, debt_id: &str, payload: SettleDebtPayload) -> Option<Debt> {
        let settlement = Settlement {
            value: payload.value,
            date: payload.date,
            method: payload.method,
        };
        let mut data = self.store.write().await;
        let settled = workflow::settle_debt(&mut data, debt_id, settlement);
        if let Some(debt) = &settled {
            tracing::info!("Acerto baixado para o débito {} ({})", debt.id, debt.tenant_name);
        }
        settled
    }

    pub async fn totals(&self, start: NaiveDate, end: NaiveDate) -> FinancialTotals {
        let data = self.store.read().await;
        analytics::financial_totals(&data.debts, start, end)
    }
}
