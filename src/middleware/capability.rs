// src/middleware/capability.rs

use crate::common::error::AppError;
use crate::models::users::{Sector, User};

// As telas/áreas de comando do sistema. Cada handler declara a View que
// exige e a checagem acontece uma vez por comando, sempre nesta tabela.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Tasks,
    Legal,
    Collections,
    Financial,
    Users,
}

const BASE_VIEWS: [View; 5] = [
    View::Dashboard,
    View::Tasks,
    View::Legal,
    View::Collections,
    View::Financial,
];

/// Views permitidas para um setor. Master enxerga tudo; Jurídico e
/// Cobranças ficam restritos às suas áreas mais o fluxo de demandas.
pub fn allowed_views(role: Sector, is_master: bool) -> &'static [View] {
    if is_master {
        return &[
            View::Dashboard,
            View::Tasks,
            View::Legal,
            View::Collections,
            View::Financial,
            View::Users,
        ];
    }
    match role {
        Sector::Juridico => &[View::Dashboard, View::Legal, View::Tasks],
        Sector::Cobrancas => &[View::Dashboard, View::Collections, View::Tasks],
        // Gestão de equipe exige setor Administrativo (ou Master)
        Sector::Administrativo => &[
            View::Dashboard,
            View::Tasks,
            View::Legal,
            View::Collections,
            View::Financial,
            View::Users,
        ],
        Sector::Vendas => &BASE_VIEWS,
    }
}

pub fn ensure_access(user: &User, view: View) -> Result<(), AppError> {
    if allowed_views(user.role, user.is_master).contains(&view) {
        Ok(())
    } else {
        tracing::warn!(
            "Acesso negado: {} ({}) tentou {:?}",
            user.name,
            user.role.label(),
            view
        );
        Err(AppError::AccessDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Sector, is_master: bool) -> User {
        User {
            id: "u_teste".into(),
            name: "Teste".into(),
            role,
            avatar: String::new(),
            password: None,
            is_master,
        }
    }

    #[test]
    fn master_sees_everything() {
        let u = user(Sector::Vendas, true);
        for view in [
            View::Dashboard,
            View::Tasks,
            View::Legal,
            View::Collections,
            View::Financial,
            View::Users,
        ] {
            assert!(ensure_access(&u, view).is_ok(), "{view:?}");
        }
    }

    #[test]
    fn juridico_is_restricted_to_its_views() {
        let u = user(Sector::Juridico, false);
        assert!(ensure_access(&u, View::Legal).is_ok());
        assert!(ensure_access(&u, View::Tasks).is_ok());
        assert!(ensure_access(&u, View::Dashboard).is_ok());
        assert!(matches!(
            ensure_access(&u, View::Collections),
            Err(AppError::AccessDenied)
        ));
        assert!(ensure_access(&u, View::Users).is_err());
    }

    #[test]
    fn cobrancas_is_restricted_to_its_views() {
        let u = user(Sector::Cobrancas, false);
        assert!(ensure_access(&u, View::Collections).is_ok());
        assert!(ensure_access(&u, View::Legal).is_err());
        assert!(ensure_access(&u, View::Financial).is_err());
    }

    #[test]
    fn team_management_requires_admin_or_master() {
        assert!(ensure_access(&user(Sector::Administrativo, false), View::Users).is_ok());
        assert!(ensure_access(&user(Sector::Vendas, false), View::Users).is_err());
        assert!(ensure_access(&user(Sector::Vendas, true), View::Users).is_ok());
    }
}
