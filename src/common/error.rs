// src/common/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia. A taxonomia é
// curta de propósito: violações de guarda, sessão inválida e falha do
// serviço de IA. Ids inexistentes em operações de escrita NÃO são erro
// (política de no-op por ausência).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Sessão inválida")]
    UnknownSessionUser,

    #[error("Acesso negado")]
    AccessDenied,

    #[error("Não é permitido excluir a si mesmo")]
    CannotDeleteSelf,

    #[error("Não é permitido excluir usuários Master")]
    CannotDeleteMaster,

    #[error("Serviço de IA indisponível")]
    AssistantUnavailable,

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "Usuário não encontrado."),
            AppError::UnknownSessionUser => (
                StatusCode::UNAUTHORIZED,
                "Cabeçalho X-User-Id ausente ou não corresponde a nenhum usuário.",
            ),
            AppError::AccessDenied => (
                StatusCode::FORBIDDEN,
                "Seu setor não tem acesso a esta operação.",
            ),
            AppError::CannotDeleteSelf => {
                (StatusCode::CONFLICT, "Você não pode excluir a si mesmo.")
            }
            AppError::CannotDeleteMaster => (
                StatusCode::CONFLICT,
                "Operação negada: não é possível excluir usuários Master.",
            ),
            AppError::AssistantUnavailable => (
                StatusCode::BAD_GATEWAY,
                "Erro ao conectar com o serviço de IA.",
            ),

            // O `tracing` loga a mensagem detalhada; o cliente recebe o genérico.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
