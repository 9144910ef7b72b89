// src/store/mod.rs

pub mod seed;

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::finance::Debt;
use crate::models::legal::LegalCase;
use crate::models::tasks::Task;
use crate::models::users::User;

// O agregado de estado da aplicação: as quatro coleções de entidades mais a
// referência ao usuário atuante. Toda transição do motor de workflow é uma
// função deste agregado, nunca de globais ambientes.
#[derive(Debug, Clone, Default)]
pub struct AppData {
    pub users: Vec<User>,
    pub tasks: Vec<Task>,
    pub debts: Vec<Debt>,
    pub cases: Vec<LegalCase>,

    // Exatamente um usuário atuante por vez
    pub current_user_id: String,
}

impl AppData {
    pub fn current_user(&self) -> Option<&User> {
        self.users.iter().find(|u| u.id == self.current_user_id)
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }
}

// Dono único do estado em processo. Os comandos chegam um a um pelos
// handlers; o RwLock garante que o par tarefa+débito do encerramento
// jurídico seja aplicado como um passo indivisível.
#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<AppData>>,
}

impl Store {
    pub fn new(data: AppData) -> Self {
        Self {
            inner: Arc::new(RwLock::new(data)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::demo_data())
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, AppData> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, AppData> {
        self.inner.write().await
    }
}
