// src/middleware/session.rs

use axum::{
    extract::{FromRequestParts, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::{common::error::AppError, config::AppState, models::users::User};

// O nome do nosso cabeçalho HTTP de sessão. Não há autenticação real
// (checagens de papel são cosméticas); o cabeçalho apenas identifica o
// usuário atuante dentre os cadastrados.
const USER_ID_HEADER: &str = "x-user-id";

// O middleware em si: resolve o cabeçalho contra a coleção de usuários e
// injeta o usuário atuante nos "extensions" da requisição.
pub async fn session_guard(
    State(app_state): State<AppState>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let Some(user_id) = header else {
        return Err(AppError::UnknownSessionUser);
    };

    let user = {
        let data = app_state.store.read().await;
        data.find_user(&user_id).cloned()
    };

    match user {
        Some(user) => {
            request.extensions_mut().insert(user);
            Ok(next.run(request).await)
        }
        None => Err(AppError::UnknownSessionUser),
    }
}

// Extrator para obter o usuário atuante diretamente nos handlers
pub struct ActingUser(pub User);

impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<User>()
            .cloned()
            .map(ActingUser)
            .ok_or(AppError::UnknownSessionUser)
    }
}
