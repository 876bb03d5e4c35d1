use chrono::Datelike;
use leptos::*;
use std::rc::Rc;

use super::{
    repository::ReportRepository,
    utils::{resolve_selection, selected_report},
};
use crate::{
    api::{ApiClient, ApiError, EmployeeCategory, MonthlyReport, RecordId},
    state::session::{use_session, SessionRole},
    utils::{report_pdf::export_report_pdf, time::today_in_app_tz},
};

const FETCH_ERROR: &str = "Failed to fetch report. Please try again.";

#[derive(Clone, Copy)]
pub struct ReportViewModel {
    pub category: EmployeeCategory,
    pub current_year: i32,
    pub month: RwSignal<u32>,
    pub year: RwSignal<i32>,
    pub selected: RwSignal<Option<RecordId>>,
    pub reports: Resource<(i32, u32), Result<Vec<MonthlyReport>, ApiError>>,
    pub error: RwSignal<Option<String>>,
}

pub fn use_report_view_model(category: EmployeeCategory) -> ReportViewModel {
    let session = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ReportRepository::new_with_client(Rc::new(api), category, session);

    let today = today_in_app_tz();
    let month = create_rw_signal(today.month());
    let year = create_rw_signal(today.year());
    let selected = create_rw_signal(None::<RecordId>);
    let error = create_rw_signal(None::<String>);

    let reports = create_resource(
        move || (year.get(), month.get()),
        move |(year, month)| {
            let repo = repository.clone();
            async move { repo.fetch(year, month).await }
        },
    );

    create_effect(move |_| match reports.get() {
        Some(Ok(list)) => {
            log::debug!("fetched {} monthly reports ({:?})", list.len(), category);
            error.set(None);
            let next = selected.with_untracked(|current| resolve_selection(current.as_ref(), &list));
            selected.set(next);
        }
        Some(Err(err)) => {
            log::error!("monthly report fetch failed ({:?}): {}", category, err);
            if err.is_unauthorized() {
                session.sign_out(SessionRole::Admin);
            }
            error.set(Some(err.user_message(FETCH_ERROR)));
            selected.set(None);
        }
        None => {}
    });

    ReportViewModel {
        category,
        current_year: today.year(),
        month,
        year,
        selected,
        reports,
        error,
    }
}

impl ReportViewModel {
    /// Loaded reports; a failed fetch reads as an empty set.
    pub fn list(&self) -> Vec<MonthlyReport> {
        self.reports.get().and_then(Result::ok).unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.reports.loading().get()
    }

    pub fn current(&self) -> Option<MonthlyReport> {
        let list = self.list();
        self.selected
            .with(|selected| selected_report(&list, selected.as_ref()).cloned())
    }

    pub fn select(&self, raw: &str) {
        let id = RecordId::new(raw);
        self.selected.set((!id.is_empty()).then_some(id));
    }

    pub fn export_pdf(&self) {
        let Some(report) = self.current() else {
            return;
        };
        if let Err(err) = export_report_pdf(&report, self.year.get_untracked(), self.month.get_untracked()) {
            log::error!("report export failed: {}", err);
            self.error.set(Some(err.to_string()));
        }
    }
}
