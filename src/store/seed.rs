// src/store/seed.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::finance::{Debt, DebtHistoryEntry, DebtStatus, Settlement};
use crate::models::legal::{CaseStatus, DeadlineStatus, LegalCase};
use crate::models::tasks::{Priority, Task, TaskStatus};
use crate::models::users::{Sector, User};
use crate::store::AppData;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// Conjunto de demonstração carregado na inicialização. Sem camada de
// persistência, é daqui que toda sessão parte.
pub fn demo_data() -> AppData {
    let users = vec![
        User {
            id: "u0".into(),
            name: "Diretor Geral".into(),
            role: Sector::Administrativo,
            avatar: "https://picsum.photos/id/91/100/100".into(),
            password: Some("admin".into()),
            is_master: true,
        },
        User {
            id: "u1".into(),
            name: "Ana Silva".into(),
            role: Sector::Administrativo,
            avatar: "https://picsum.photos/id/64/100/100".into(),
            password: Some("123".into()),
            is_master: false,
        },
        User {
            id: "u2".into(),
            name: "Dr. Carlos Souza".into(),
            role: Sector::Juridico,
            avatar: "https://picsum.photos/id/65/100/100".into(),
            password: Some("123".into()),
            is_master: false,
        },
        User {
            id: "u3".into(),
            name: "Mariana Costa".into(),
            role: Sector::Cobrancas,
            avatar: "https://picsum.photos/id/66/100/100".into(),
            password: Some("123".into()),
            is_master: false,
        },
        User {
            id: "u4".into(),
            name: "Pedro Santos".into(),
            role: Sector::Vendas,
            avatar: "https://picsum.photos/id/67/100/100".into(),
            password: Some("123".into()),
            is_master: false,
        },
    ];

    let tasks = vec![Task {
        id: "tsk1".into(),
        title: "Análise de Contrato - Rua das Flores".into(),
        description: "Verificar cláusulas de rescisão antes da renovação.".into(),
        sector: Sector::Juridico,
        assigned_to: Some("u2".into()),
        priority: Priority::Alta,
        status: TaskStatus::EmAndamento,
        related_property_id: Some("p1".into()),
        created_at: date(2023, 10, 1),
        due_date: date(2023, 10, 15),
        attachments: Vec::new(),
    }];

    let debts = vec![
        Debt {
            id: "d1".into(),
            tenant_name: "Roberto Alencar".into(),
            property_address: "Rua das Flores, 123".into(),
            amount: Decimal::new(2_500_00, 2),
            due_date: date(2024, 2, 10),
            status: DebtStatus::Paid,
            is_legal_recovery: true,
            settlement: Some(Settlement {
                value: Decimal::new(2_350_00, 2),
                date: date(2024, 2, 15),
                method: "Pix".into(),
            }),
            history: vec![
                DebtHistoryEntry {
                    date: date(2024, 2, 10),
                    event: "Vencimento".into(),
                },
                DebtHistoryEntry {
                    date: date(2024, 2, 15),
                    event: "Acerto via Jurídico".into(),
                },
            ],
        },
        Debt {
            id: "d2".into(),
            tenant_name: "Lucia Mendes".into(),
            property_address: "Av. Paulista, 900".into(),
            amount: Decimal::new(3_200_00, 2),
            due_date: date(2024, 3, 5),
            status: DebtStatus::Overdue,
            is_legal_recovery: false,
            settlement: None,
            history: vec![DebtHistoryEntry {
                date: date(2024, 3, 5),
                event: "Vencimento".into(),
            }],
        },
    ];

    let cases = vec![LegalCase {
        id: "c1".into(),
        process_number: "0012345-88.2023.8.26.0100".into(),
        title: "Despejo por Falta de Pagamento - Roberto Alencar".into(),
        status: CaseStatus::Protocolado,
        lawyer_id: "u2".into(),
        description: "Ação de despejo cumulada com cobrança de aluguéis.".into(),
        next_hearing: Some(date(2023, 11, 20)),
        shared_notes: Vec::new(),
        deadline_status: DeadlineStatus::None,
        deadline_target: None,
    }];

    AppData {
        users,
        tasks,
        debts,
        cases,
        current_user_id: "u0".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_one_master_and_an_acting_user() {
        let data = demo_data();
        assert_eq!(data.users.iter().filter(|u| u.is_master).count(), 1);
        assert!(data.current_user().is_some());
        assert!(data.current_user().unwrap().is_master);
    }

    #[test]
    fn seed_debts_respect_settlement_invariant() {
        let data = demo_data();
        for debt in &data.debts {
            assert_eq!(
                debt.settlement.is_some(),
                debt.status == DebtStatus::Paid,
                "débito {} viola o invariante de acerto",
                debt.id
            );
        }
    }
}
