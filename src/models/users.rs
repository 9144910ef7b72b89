// src/models/users.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Os setores são fixos e valem tanto para o dono de uma demanda quanto
// para a navegação visível de cada usuário.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Sector {
    #[serde(rename = "Administrativo")]
    Administrativo,
    #[serde(rename = "Jurídico")]
    Juridico,
    #[serde(rename = "Cobranças")]
    Cobrancas,
    #[serde(rename = "Vendas")]
    Vendas,
}

impl Sector {
    pub const ALL: [Sector; 4] = [
        Sector::Administrativo,
        Sector::Juridico,
        Sector::Cobrancas,
        Sector::Vendas,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Sector::Administrativo => "Administrativo",
            Sector::Juridico => "Jurídico",
            Sector::Cobrancas => "Cobranças",
            Sector::Vendas => "Vendas",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(example = "u_1a2b3c")]
    pub id: String,

    #[schema(example = "Ana Silva")]
    pub name: String,

    pub role: Sector,

    #[schema(example = "https://picsum.photos/id/64/100/100")]
    pub avatar: String,

    // Cosmético: não há autenticação real, o campo apenas acompanha o perfil.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default)]
    #[schema(example = false)]
    pub is_master: bool,
}

// O Payload para cadastrar um novo membro da equipe
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserPayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    #[schema(example = "Mariana Costa")]
    pub name: String,

    pub role: Sector,
}

// Atualização parcial de perfil: apenas avatar e/ou senha são legítimos aqui.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfilePayload {
    #[schema(example = "https://picsum.photos/id/91/100/100")]
    pub avatar: Option<String>,

    #[validate(length(min = 3, message = "A senha deve ter no mínimo 3 caracteres"))]
    pub password: Option<String>,
}
