// src/services/legal_service.rs

use chrono::Utc;

use crate::models::legal::{LegalCase, Note};
use crate::models::users::User;
use crate::store::Store;
use crate::workflow;

#[derive(Clone)]
pub struct LegalService {
    store: Store,
}

impl LegalService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<LegalCase> {
        self.store.read().await.cases.clone()
    }

    pub async fn update_case(&self, updated: LegalCase) -> Option<LegalCase> {
        let id = updated.id.clone();
        let mut data = self.store.write().await;
        workflow::update_case(&mut data, updated);
        data.cases.iter().find(|c| c.id == id).cloned()
    }

    pub async fn add_note(&self, case_id: &str, author: &User, text: String) -> Option<Note> {
        let now = Utc::now();
        let mut data = self.store.write().await;
        workflow::append_case_note(&mut data, case_id, author, text, now)
    }
}
