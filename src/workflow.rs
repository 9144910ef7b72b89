// src/workflow.rs
//
// O motor de workflow: transições de estado puras sobre o agregado AppData.
// As datas de "hoje"/"agora" chegam sempre como parâmetro, nunca são lidas
// do relógio aqui dentro, para que os testes fixem datas determinísticas.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::finance::{Debt, DebtHistoryEntry, DebtStatus, Settlement};
use crate::models::legal::{LegalCase, Note};
use crate::models::tasks::{CreateTaskPayload, Task, TaskStatus};
use crate::models::users::{Sector, UpdateProfilePayload, User};
use crate::store::AppData;

// Rótulo usado quando o título da demanda não carrega o nome do inquilino
const LEGAL_RECOVERY_LABEL: &str = "Recuperação Jurídica";

fn new_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

/// Substitui o status da tarefa indicada. Id inexistente é no-op; nenhuma
/// legalidade de transição é verificada.
pub fn update_task_status(data: &mut AppData, task_id: &str, new_status: TaskStatus) {
    if let Some(task) = data.tasks.iter_mut().find(|t| t.id == task_id) {
        task.status = new_status;
    }
}

/// Cria uma demanda com id novo, status Pendente e data de criação = hoje,
/// inserida no início da coleção (mais recente primeiro).
pub fn add_task(data: &mut AppData, payload: CreateTaskPayload, today: NaiveDate) -> Task {
    let task = Task {
        id: new_id("tsk"),
        title: payload.title,
        description: payload.description,
        sector: payload.sector,
        assigned_to: payload.assigned_to,
        priority: payload.priority,
        status: TaskStatus::Pendente,
        related_property_id: payload.related_property_id,
        created_at: today,
        due_date: payload.due_date,
        attachments: payload.attachments,
    };
    data.tasks.insert(0, task.clone());
    task
}

/// Remove a demanda indicada. Sem efeito cascata em débitos ou processos.
pub fn delete_task(data: &mut AppData, task_id: &str) {
    data.tasks.retain(|t| t.id != task_id);
}

// Convenção de título das demandas jurídicas: o nome do inquilino é o
// segundo segmento separado por '-'. Mudar isso alteraria os lançamentos
// gerados no financeiro.
fn tenant_name_from_title(title: &str) -> String {
    title
        .split('-')
        .nth(1)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| LEGAL_RECOVERY_LABEL.to_owned())
}

fn property_label_from_description(description: &str) -> String {
    let prefix: String = description.chars().take(30).collect();
    format!("{prefix}...")
}

/// A única regra entre entidades do sistema: encerra a demanda jurídica e
/// lança o débito quitado correspondente. As duas mudanças ficam visíveis
/// juntas ou nenhuma delas. Tarefa inexistente ou já concluída é no-op.
pub fn finalize_legal_task(
    data: &mut AppData,
    task_id: &str,
    amount: Decimal,
    payment_method: &str,
    today: NaiveDate,
) -> Option<Debt> {
    let task = data.tasks.iter_mut().find(|t| t.id == task_id)?;
    if task.status == TaskStatus::Concluido {
        return None;
    }
    task.status = TaskStatus::Concluido;
    let title = task.title.clone();
    let description = task.description.clone();

    let debt = Debt {
        id: new_id("d_legal"),
        tenant_name: tenant_name_from_title(&title),
        property_address: property_label_from_description(&description),
        amount,
        due_date: today,
        status: DebtStatus::Paid,
        is_legal_recovery: true,
        settlement: Some(Settlement {
            value: amount,
            date: today,
            method: payment_method.to_owned(),
        }),
        history: vec![
            DebtHistoryEntry {
                date: today,
                event: format!("Finalização de Demanda Jurídica: {title}"),
            },
            DebtHistoryEntry {
                date: today,
                event: format!("Pagamento recebido via {payment_method}"),
            },
        ],
    };
    data.debts.insert(0, debt.clone());
    Some(debt)
}

/// Substitui o processo de mesmo id pelo valor completo fornecido.
/// Id inexistente é no-op.
pub fn update_case(data: &mut AppData, updated: LegalCase) {
    if let Some(case) = data.cases.iter_mut().find(|c| c.id == updated.id) {
        *case = updated;
    }
}

/// Anexa uma anotação ao processo indicado. A restrição "só no processo
/// aberto" pertence à View; aqui qualquer processo existente aceita nota.
pub fn append_case_note(
    data: &mut AppData,
    case_id: &str,
    author: &User,
    text: String,
    now: DateTime<Utc>,
) -> Option<Note> {
    let case = data.cases.iter_mut().find(|c| c.id == case_id)?;
    let note = Note {
        author: author.name.clone(),
        role: author.role,
        text,
        timestamp: now,
    };
    case.shared_notes.push(note.clone());
    Some(note)
}

/// Baixa o acerto de um débito: status Paid, acerto anexado e uma entrada
/// de histórico datada pelo acerto. Débito inexistente ou já quitado é
/// no-op (nunca sobrescrevemos um acerto existente).
pub fn settle_debt(data: &mut AppData, debt_id: &str, settlement: Settlement) -> Option<Debt> {
    let debt = data.debts.iter_mut().find(|d| d.id == debt_id)?;
    if debt.status == DebtStatus::Paid {
        return None;
    }
    debt.status = DebtStatus::Paid;
    debt.history.push(DebtHistoryEntry {
        date: settlement.date,
        event: format!("Acerto baixado via {}", settlement.method),
    });
    debt.settlement = Some(settlement);
    Some(debt.clone())
}

/// Cadastra um usuário com avatar gerado e senha padrão, ao final da coleção.
pub fn add_user(data: &mut AppData, name: String, role: Sector) -> User {
    let avatar = format!(
        "https://ui-avatars.com/api/?name={}&background=random",
        name.replace(' ', "+")
    );
    let user = User {
        id: new_id("u"),
        name,
        role,
        avatar,
        password: Some("123".into()),
        is_master: false,
    };
    data.users.push(user.clone());
    user
}

/// Remove um usuário, recusando (sem tocar no estado) a exclusão do próprio
/// usuário atuante e de qualquer conta Master. Id inexistente é no-op.
pub fn delete_user(data: &mut AppData, acting: &User, user_id: &str) -> Result<(), AppError> {
    let Some(target) = data.find_user(user_id) else {
        return Ok(());
    };
    if target.id == acting.id {
        return Err(AppError::CannotDeleteSelf);
    }
    if target.is_master {
        return Err(AppError::CannotDeleteMaster);
    }
    data.users.retain(|u| u.id != user_id);
    Ok(())
}

/// Mescla avatar e/ou senha no usuário indicado. Como o usuário atuante é
/// referenciado por id, a sessão enxerga a mudança imediatamente.
pub fn update_user_profile(
    data: &mut AppData,
    user_id: &str,
    updates: UpdateProfilePayload,
) -> Option<User> {
    let user = data.users.iter_mut().find(|u| u.id == user_id)?;
    if let Some(avatar) = updates.avatar {
        user.avatar = avatar;
    }
    if let Some(password) = updates.password {
        user.password = Some(password);
    }
    Some(user.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tasks::Priority;
    use crate::store::seed::demo_data;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn task_payload(title: &str, sector: Sector) -> CreateTaskPayload {
        CreateTaskPayload {
            title: title.into(),
            description: "Ação de despejo cumulada com cobrança de aluguéis vencidos.".into(),
            sector,
            assigned_to: None,
            priority: Priority::Alta,
            related_property_id: None,
            due_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            attachments: Vec::new(),
        }
    }

    #[test]
    fn add_task_starts_pending_with_unique_id_and_prepended() {
        let mut data = demo_data();
        let a = add_task(&mut data, task_payload("Despejo - João Pereira", Sector::Juridico), today());
        let b = add_task(&mut data, task_payload("Revisão Geral", Sector::Administrativo), today());

        assert_eq!(a.status, TaskStatus::Pendente);
        assert_eq!(b.status, TaskStatus::Pendente);
        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, today());
        // Mais recente primeiro
        assert_eq!(data.tasks[0].id, b.id);
        assert_eq!(data.tasks[1].id, a.id);

        let mut ids: Vec<&str> = data.tasks.iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), data.tasks.len());
    }

    #[test]
    fn update_task_status_replaces_field_and_ignores_unknown_id() {
        let mut data = demo_data();
        update_task_status(&mut data, "tsk1", TaskStatus::Concluido);
        assert_eq!(data.tasks[0].status, TaskStatus::Concluido);

        let before = data.tasks.len();
        update_task_status(&mut data, "tsk_inexistente", TaskStatus::Pendente);
        assert_eq!(data.tasks.len(), before);
        assert_eq!(data.tasks[0].status, TaskStatus::Concluido);
    }

    #[test]
    fn update_task_status_is_idempotent_for_same_status() {
        let mut data = demo_data();
        let before = data.tasks[0].clone();
        update_task_status(&mut data, "tsk1", before.status);
        let after = &data.tasks[0];
        assert_eq!(after.id, before.id);
        assert_eq!(after.status, before.status);
        assert_eq!(after.title, before.title);
        assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn delete_task_removes_without_cascading() {
        let mut data = demo_data();
        let debts_before = data.debts.len();
        let cases_before = data.cases.len();
        delete_task(&mut data, "tsk1");
        assert!(data.tasks.is_empty());
        assert_eq!(data.debts.len(), debts_before);
        assert_eq!(data.cases.len(), cases_before);

        // Ausente: no-op
        delete_task(&mut data, "tsk1");
        assert!(data.tasks.is_empty());
    }

    #[test]
    fn finalize_creates_paid_legal_debt_atomically() {
        let mut data = demo_data();
        let task = add_task(&mut data, task_payload("Despejo - João Pereira", Sector::Juridico), today());
        let debts_before = data.debts.len();

        let amount = Decimal::new(1_800_00, 2);
        let debt = finalize_legal_task(&mut data, &task.id, amount, "Boleto", today())
            .expect("demanda existente deve gerar débito");

        let finalized = data.tasks.iter().find(|t| t.id == task.id).unwrap();
        assert_eq!(finalized.status, TaskStatus::Concluido);

        assert_eq!(data.debts.len(), debts_before + 1);
        assert_eq!(data.debts[0].id, debt.id);
        assert_eq!(debt.status, DebtStatus::Paid);
        assert!(debt.is_legal_recovery);
        assert_eq!(debt.due_date, today());
        let settlement = debt.settlement.as_ref().unwrap();
        assert_eq!(settlement.value, amount);
        assert_eq!(settlement.method, "Boleto");
        assert_eq!(settlement.date, today());
        assert_eq!(debt.history.len(), 2);
        assert!(debt.history[0].event.contains("Finalização de Demanda Jurídica"));
        assert_eq!(debt.history[1].event, "Pagamento recebido via Boleto");
    }

    #[test]
    fn finalize_derives_tenant_name_from_title() {
        let mut data = demo_data();
        let with_dash = add_task(&mut data, task_payload("Despejo - João Pereira", Sector::Juridico), today());
        let without_dash = add_task(&mut data, task_payload("Revisão Geral", Sector::Juridico), today());

        let d1 = finalize_legal_task(&mut data, &with_dash.id, Decimal::ONE_HUNDRED, "Pix", today()).unwrap();
        assert_eq!(d1.tenant_name, "João Pereira");

        let d2 = finalize_legal_task(&mut data, &without_dash.id, Decimal::ONE_HUNDRED, "Pix", today()).unwrap();
        assert_eq!(d2.tenant_name, "Recuperação Jurídica");
    }

    #[test]
    fn finalize_truncates_description_into_property_label() {
        let mut data = demo_data();
        let task = add_task(&mut data, task_payload("Despejo - Maria", Sector::Juridico), today());
        let debt = finalize_legal_task(&mut data, &task.id, Decimal::TEN, "Pix", today()).unwrap();
        assert!(debt.property_address.ends_with("..."));
        assert_eq!(debt.property_address.chars().count(), 33);
    }

    #[test]
    fn finalize_is_noop_for_missing_or_done_task() {
        let mut data = demo_data();
        let snapshot_debts = data.debts.len();

        assert!(finalize_legal_task(&mut data, "tsk_nada", Decimal::TEN, "Pix", today()).is_none());
        assert_eq!(data.debts.len(), snapshot_debts);

        let task = add_task(&mut data, task_payload("Despejo - Ana", Sector::Juridico), today());
        finalize_legal_task(&mut data, &task.id, Decimal::TEN, "Pix", today()).unwrap();
        // Já concluída: não duplica o lançamento
        assert!(finalize_legal_task(&mut data, &task.id, Decimal::TEN, "Pix", today()).is_none());
        assert_eq!(data.debts.len(), snapshot_debts + 1);
    }

    #[test]
    fn settle_debt_attaches_settlement_and_appends_history() {
        let mut data = demo_data();
        let history_before = data.debts.iter().find(|d| d.id == "d2").unwrap().history.len();

        let settlement = Settlement {
            value: Decimal::ONE_HUNDRED,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            method: "Pix".into(),
        };
        let updated = settle_debt(&mut data, "d2", settlement.clone()).unwrap();

        assert_eq!(updated.status, DebtStatus::Paid);
        assert_eq!(updated.settlement, Some(settlement));
        assert_eq!(updated.history.len(), history_before + 1);
        let last = updated.history.last().unwrap();
        assert_eq!(last.event, "Acerto baixado via Pix");
        assert_eq!(last.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn settle_debt_never_overwrites_an_existing_settlement() {
        let mut data = demo_data();
        let original = data.debts.iter().find(|d| d.id == "d1").unwrap().clone();

        let attempt = Settlement {
            value: Decimal::ONE,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            method: "Dinheiro".into(),
        };
        assert!(settle_debt(&mut data, "d1", attempt).is_none());

        let after = data.debts.iter().find(|d| d.id == "d1").unwrap();
        assert_eq!(after.settlement, original.settlement);
        assert_eq!(after.history.len(), original.history.len());
    }

    #[test]
    fn update_case_replaces_whole_value() {
        let mut data = demo_data();
        let mut case = data.cases[0].clone();
        case.status = crate::models::legal::CaseStatus::Audiencia;
        case.description = "Atualizado".into();
        update_case(&mut data, case.clone());
        assert_eq!(data.cases[0].status, case.status);
        assert_eq!(data.cases[0].description, "Atualizado");

        // Id desconhecido: no-op
        let mut ghost = case;
        ghost.id = "c_fantasma".into();
        update_case(&mut data, ghost);
        assert_eq!(data.cases.len(), 1);
    }

    #[test]
    fn append_case_note_keeps_previous_notes() {
        let mut data = demo_data();
        let author = data.users[2].clone();
        let now = Utc::now();

        append_case_note(&mut data, "c1", &author, "Primeira anotação".into(), now).unwrap();
        append_case_note(&mut data, "c1", &author, "Segunda anotação".into(), now).unwrap();

        let notes = &data.cases[0].shared_notes;
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].text, "Primeira anotação");
        assert_eq!(notes[1].text, "Segunda anotação");
        assert_eq!(notes[0].author, author.name);
        assert_eq!(notes[0].role, author.role);

        assert!(append_case_note(&mut data, "c_nada", &author, "x".into(), now).is_none());
    }

    #[test]
    fn delete_user_guards_self_and_master() {
        let mut data = demo_data();
        let master = data.users[0].clone();
        let regular = data.users[1].clone();
        let users_before = data.users.len();

        // Autoexclusão recusada
        let err = delete_user(&mut data, &regular, &regular.id).unwrap_err();
        assert!(matches!(err, AppError::CannotDeleteSelf));
        assert_eq!(data.users.len(), users_before);

        // Master protegido
        let err = delete_user(&mut data, &regular, &master.id).unwrap_err();
        assert!(matches!(err, AppError::CannotDeleteMaster));
        assert_eq!(data.users.len(), users_before);

        // Caso permitido remove de fato
        delete_user(&mut data, &master, &regular.id).unwrap();
        assert_eq!(data.users.len(), users_before - 1);
        assert!(data.find_user(&regular.id).is_none());

        // Ausente: no-op sem erro
        delete_user(&mut data, &master, &regular.id).unwrap();
        assert_eq!(data.users.len(), users_before - 1);
    }

    #[test]
    fn add_user_generates_defaults() {
        let mut data = demo_data();
        let user = add_user(&mut data, "Nova Pessoa".into(), Sector::Vendas);
        assert!(user.avatar.contains("Nova+Pessoa"));
        assert_eq!(user.password.as_deref(), Some("123"));
        assert!(!user.is_master);
        assert_eq!(data.users.last().unwrap().id, user.id);
    }

    #[test]
    fn profile_update_merges_and_reaches_acting_user() {
        let mut data = demo_data();
        let acting_id = data.current_user_id.clone();

        let updated = update_user_profile(
            &mut data,
            &acting_id,
            UpdateProfilePayload {
                avatar: Some("https://example.com/novo.png".into()),
                password: None,
            },
        )
        .unwrap();

        assert_eq!(updated.avatar, "https://example.com/novo.png");
        // Senha intacta quando não enviada
        assert_eq!(updated.password.as_deref(), Some("admin"));
        assert_eq!(data.current_user().unwrap().avatar, "https://example.com/novo.png");

        assert!(update_user_profile(
            &mut data,
            "u_nada",
            UpdateProfilePayload { avatar: None, password: None }
        )
        .is_none());
    }
}
