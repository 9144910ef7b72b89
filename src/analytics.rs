// src/analytics.rs
//
// Agregações puras para o painel e para o razão financeiro. Tudo é
// recalculado a cada consulta a partir do snapshot atual das coleções;
// os volumes (dezenas de registros) não justificam cache.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::dashboard::{
    CaseStatusEntry, DashboardFilter, DashboardMetrics, SectorProductivityEntry, SectorVolumeEntry,
};
use crate::models::finance::{Debt, DebtStatus, FinancialTotals};
use crate::models::legal::{CaseStatus, LegalCase};
use crate::models::tasks::{Priority, Task, TaskStatus};
use crate::models::users::Sector;

// O gráfico de status processual não exibe a fase terminal
const CHARTED_CASE_STATUSES: [CaseStatus; 4] = [
    CaseStatus::Protocolado,
    CaseStatus::Distribuido,
    CaseStatus::Audiencia,
    CaseStatus::Sentenciado,
];

/// Tarefas que batem com setor, prioridade e intervalo de criação
/// (inclusivo nas duas pontas).
pub fn filter_tasks<'a>(tasks: &'a [Task], filter: &DashboardFilter) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| {
            let sector_match = filter.sector.is_none_or(|s| t.sector == s);
            let priority_match = filter.priority.is_none_or(|p| t.priority == p);
            let date_match = t.created_at >= filter.start && t.created_at <= filter.end;
            sector_match && priority_match && date_match
        })
        .collect()
}

/// Débitos cujo vencimento cai no intervalo (inclusivo).
pub fn filter_debts_by_due<'a>(debts: &'a [Debt], start: NaiveDate, end: NaiveDate) -> Vec<&'a Debt> {
    debts
        .iter()
        .filter(|d| d.due_date >= start && d.due_date <= end)
        .collect()
}

/// Os cards do topo do painel.
pub fn dashboard_metrics(
    tasks: &[Task],
    debts: &[Debt],
    cases: &[LegalCase],
    filter: &DashboardFilter,
) -> DashboardMetrics {
    let filtered_tasks = filter_tasks(tasks, filter);
    let filtered_debts = filter_debts_by_due(debts, filter.start, filter.end);

    let total_tasks = filtered_tasks.len();
    let completed_tasks = filtered_tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Concluido)
        .count();
    let pending_tasks = total_tasks - completed_tasks;

    let overdue_debts = filtered_debts
        .iter()
        .filter(|d| d.status == DebtStatus::Overdue)
        .map(|d| d.amount)
        .sum();

    let active_cases = cases
        .iter()
        .filter(|c| c.status != CaseStatus::Encerrado)
        .count();

    // Taxa a uma casa decimal; 0 para coleção vazia (sem divisão por zero)
    let completion_rate = if total_tasks > 0 {
        let raw = completed_tasks as f64 / total_tasks as f64 * 100.0;
        (raw * 10.0).round() / 10.0
    } else {
        0.0
    };

    DashboardMetrics {
        total_tasks,
        completed_tasks,
        pending_tasks,
        overdue_debts,
        active_cases,
        completion_rate,
    }
}

/// Volume de demandas por setor, sobre a coleção completa (sem filtros).
pub fn tasks_by_sector(tasks: &[Task]) -> Vec<SectorVolumeEntry> {
    Sector::ALL
        .iter()
        .map(|&sector| SectorVolumeEntry {
            name: sector,
            value: tasks.iter().filter(|t| t.sector == sector).count(),
        })
        .collect()
}

/// Quebra concluído/pendente por setor, sobre a coleção completa.
pub fn sector_productivity(tasks: &[Task]) -> Vec<SectorProductivityEntry> {
    Sector::ALL
        .iter()
        .map(|&sector| {
            let of_sector: Vec<&Task> = tasks.iter().filter(|t| t.sector == sector).collect();
            let completed = of_sector
                .iter()
                .filter(|t| t.status == TaskStatus::Concluido)
                .count();
            SectorProductivityEntry {
                name: sector,
                completed,
                pending: of_sector.len() - completed,
            }
        })
        .collect()
}

/// Contagem de processos por status exibível.
pub fn case_status_series(cases: &[LegalCase]) -> Vec<CaseStatusEntry> {
    CHARTED_CASE_STATUSES
        .iter()
        .map(|&status| CaseStatusEntry {
            status,
            count: cases.iter().filter(|c| c.status == status).count(),
        })
        .collect()
}

/// Alertas do painel: demandas filtradas de prioridade Alta ou Crítica,
/// limitadas às quatro primeiras.
pub fn critical_tasks(tasks: &[Task], filter: &DashboardFilter) -> Vec<Task> {
    filter_tasks(tasks, filter)
        .into_iter()
        .filter(|t| matches!(t.priority, Priority::Alta | Priority::Critica))
        .take(4)
        .cloned()
        .collect()
}

/// Totais do razão financeiro. A data de recorte de um débito quitado é a
/// do acerto; dos demais, o vencimento.
pub fn financial_totals(debts: &[Debt], start: NaiveDate, end: NaiveDate) -> FinancialTotals {
    let mut totals = FinancialTotals {
        pending: Decimal::ZERO,
        received: Decimal::ZERO,
        legal: Decimal::ZERO,
    };

    for debt in debts {
        let reference_date = match (&debt.status, &debt.settlement) {
            (DebtStatus::Paid, Some(s)) => s.date,
            (DebtStatus::Paid, None) => continue,
            _ => debt.due_date,
        };
        if reference_date < start || reference_date > end {
            continue;
        }

        if debt.status == DebtStatus::Paid {
            let value = debt.settlement.as_ref().map(|s| s.value).unwrap_or_default();
            totals.received += value;
            if debt.is_legal_recovery {
                totals.legal += value;
            }
        } else {
            totals.pending += debt.amount;
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::finance::Settlement;
    use crate::store::seed::demo_data;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(id: &str, sector: Sector, status: TaskStatus, created: NaiveDate) -> Task {
        Task {
            id: id.into(),
            title: format!("Demanda {id}"),
            description: String::new(),
            sector,
            assigned_to: None,
            priority: Priority::Media,
            status,
            related_property_id: None,
            created_at: created,
            due_date: created,
            attachments: Vec::new(),
        }
    }

    #[test]
    fn completion_rate_is_zero_for_empty_collection() {
        let metrics = dashboard_metrics(&[], &[], &[], &DashboardFilter::default());
        assert_eq!(metrics.total_tasks, 0);
        assert_eq!(metrics.completion_rate, 0.0);
    }

    #[test]
    fn completion_rate_rounds_to_one_decimal() {
        let created = date(2024, 3, 1);
        let tasks = vec![
            task("a", Sector::Administrativo, TaskStatus::Concluido, created),
            task("b", Sector::Administrativo, TaskStatus::Concluido, created),
            task("c", Sector::Administrativo, TaskStatus::Pendente, created),
        ];
        let metrics = dashboard_metrics(&tasks, &[], &[], &DashboardFilter::default());
        assert_eq!(metrics.completion_rate, 66.7);
        assert_eq!(metrics.pending_tasks, 1);
        assert_eq!(metrics.completed_tasks, 2);
    }

    #[test]
    fn date_range_is_inclusive_on_both_ends() {
        let filter = DashboardFilter {
            sector: None,
            priority: None,
            start: date(2024, 3, 1),
            end: date(2024, 3, 31),
        };
        let tasks = vec![
            task("on_start", Sector::Vendas, TaskStatus::Pendente, date(2024, 3, 1)),
            task("on_end", Sector::Vendas, TaskStatus::Pendente, date(2024, 3, 31)),
            task("before", Sector::Vendas, TaskStatus::Pendente, date(2024, 2, 29)),
            task("after", Sector::Vendas, TaskStatus::Pendente, date(2024, 4, 1)),
        ];
        let filtered = filter_tasks(&tasks, &filter);
        let ids: Vec<&str> = filtered.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["on_start", "on_end"]);
    }

    #[test]
    fn sector_and_priority_filters_compose() {
        let created = date(2024, 3, 10);
        let mut urgent = task("u", Sector::Juridico, TaskStatus::Pendente, created);
        urgent.priority = Priority::Critica;
        let tasks = vec![
            urgent,
            task("other_sector", Sector::Vendas, TaskStatus::Pendente, created),
            task("other_priority", Sector::Juridico, TaskStatus::Pendente, created),
        ];

        let filter = DashboardFilter {
            sector: Some(Sector::Juridico),
            priority: Some(Priority::Critica),
            ..DashboardFilter::default()
        };
        let filtered = filter_tasks(&tasks, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "u");
    }

    #[test]
    fn overdue_sum_and_active_cases_come_from_seed() {
        let data = demo_data();
        let metrics = dashboard_metrics(&data.tasks, &data.debts, &data.cases, &DashboardFilter::default());
        // d2 (Overdue, 3200.00) vence dentro do período padrão
        assert_eq!(metrics.overdue_debts, Decimal::new(3_200_00, 2));
        assert_eq!(metrics.active_cases, 1);
    }

    #[test]
    fn sector_series_cover_every_sector() {
        let data = demo_data();
        let volume = tasks_by_sector(&data.tasks);
        assert_eq!(volume.len(), Sector::ALL.len());
        let juridico = volume.iter().find(|e| e.name == Sector::Juridico).unwrap();
        assert_eq!(juridico.value, 1);

        let productivity = sector_productivity(&data.tasks);
        let juridico = productivity.iter().find(|e| e.name == Sector::Juridico).unwrap();
        assert_eq!(juridico.completed, 0);
        assert_eq!(juridico.pending, 1);
    }

    #[test]
    fn case_series_exclude_terminal_status() {
        let data = demo_data();
        let series = case_status_series(&data.cases);
        assert_eq!(series.len(), 4);
        assert!(series.iter().all(|e| e.status != CaseStatus::Encerrado));
        let protocolado = series.iter().find(|e| e.status == CaseStatus::Protocolado).unwrap();
        assert_eq!(protocolado.count, 1);
    }

    #[test]
    fn critical_list_keeps_high_and_critical_only() {
        let data = demo_data();
        let filter = DashboardFilter {
            start: date(2023, 1, 1),
            end: date(2024, 12, 31),
            ..DashboardFilter::default()
        };
        let alerts = critical_tasks(&data.tasks, &filter);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].priority, Priority::Alta);
    }

    #[test]
    fn financial_totals_split_received_legal_and_pending() {
        let data = demo_data();
        let totals = financial_totals(&data.debts, date(2024, 1, 1), date(2024, 12, 31));
        assert_eq!(totals.received, Decimal::new(2_350_00, 2));
        assert_eq!(totals.legal, Decimal::new(2_350_00, 2));
        assert_eq!(totals.pending, Decimal::new(3_200_00, 2));
    }

    #[test]
    fn financial_totals_use_settlement_date_for_paid_debts() {
        let mut data = demo_data();
        // d1 foi quitado em 2024-02-15; um recorte que só alcança o
        // vencimento (02-10) não deve contá-lo
        let totals = financial_totals(&data.debts, date(2024, 2, 1), date(2024, 2, 12));
        assert_eq!(totals.received, Decimal::ZERO);

        // Já um recorte sobre a data do acerto conta
        let totals = financial_totals(&data.debts, date(2024, 2, 14), date(2024, 2, 16));
        assert_eq!(totals.received, Decimal::new(2_350_00, 2));

        // Débito em aberto usa o vencimento
        data.debts[1].settlement = Some(Settlement {
            value: Decimal::ONE,
            date: date(2024, 7, 1),
            method: "Pix".into(),
        });
        data.debts[1].status = DebtStatus::Paid;
        let totals = financial_totals(&data.debts, date(2024, 7, 1), date(2024, 7, 31));
        assert_eq!(totals.received, Decimal::ONE);
        assert_eq!(totals.pending, Decimal::ZERO);
    }
}
