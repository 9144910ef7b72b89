// src/services/user_service.rs

use crate::common::error::AppError;
use crate::models::users::{Sector, UpdateProfilePayload, User};
use crate::store::Store;
use crate::workflow;

#[derive(Clone)]
pub struct UserService {
    store: Store,
}

impl UserService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<User> {
        self.store.read().await.users.clone()
    }

    pub async fn create(&self, name: String, role: Sector) -> User {
        let mut data = self.store.write().await;
        let user = workflow::add_user(&mut data, name, role);
        tracing::info!("Usuário cadastrado: {} ({})", user.name, user.role.label());
        user
    }

    pub async fn delete(&self, acting: &User, user_id: &str) -> Result<(), AppError> {
        let mut data = self.store.write().await;
        workflow::delete_user(&mut data, acting, user_id)
    }

    pub async fn update_profile(
        &self,
        user_id: &str,
        updates: UpdateProfilePayload,
    ) -> Option<User> {
        let mut data = self.store.write().await;
        workflow::update_user_profile(&mut data, user_id, updates)
    }
}
