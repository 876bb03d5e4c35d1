use chrono::{Datelike, NaiveDate};
use leptos::*;
use std::rc::Rc;

use super::{
    repository::AttendanceGridRepository,
    utils::{build_upsert, TimeField},
};
use crate::{
    api::{ApiClient, ApiError, AttendanceRecord, AttendanceUpsert, Employee, EmployeeCategory, RecordId},
    state::session::{use_session, SessionRole},
    utils::time::{month_days, today_in_app_tz},
};

const EMPLOYEES_ERROR: &str = "Failed to fetch employees. Please try again.";
const ATTENDANCE_ERROR: &str = "Failed to fetch attendance. Please try again.";
const UPDATE_ERROR: &str = "Error updating attendance. Please try again.";

#[derive(Clone, Copy)]
pub struct AttendanceGridViewModel {
    pub category: EmployeeCategory,
    pub current_year: i32,
    pub month: RwSignal<u32>,
    pub year: RwSignal<i32>,
    pub reload: RwSignal<u32>,
    pub employees: Resource<(), Result<Vec<Employee>, ApiError>>,
    pub attendance: Resource<(i32, u32, u32), Result<Vec<AttendanceRecord>, ApiError>>,
    pub upsert_action: Action<AttendanceUpsert, Result<(), ApiError>>,
    pub error: RwSignal<Option<String>>,
}

pub fn use_attendance_grid_view_model(category: EmployeeCategory) -> AttendanceGridViewModel {
    let session = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AttendanceGridRepository::new_with_client(Rc::new(api), category, session);

    let today = today_in_app_tz();
    let month = create_rw_signal(today.month());
    let year = create_rw_signal(today.year());
    let reload = create_rw_signal(0u32);
    let error = create_rw_signal(None::<String>);

    let repo_for_employees = repository.clone();
    let employees = create_resource(
        || (),
        move |_| {
            let repo = repo_for_employees.clone();
            async move { repo.fetch_employees().await }
        },
    );

    let repo_for_month = repository.clone();
    let attendance = create_resource(
        move || (year.get(), month.get(), reload.get()),
        move |(year, month, _)| {
            let repo = repo_for_month.clone();
            async move { repo.fetch_month(year, month).await }
        },
    );

    let repo_for_upsert = repository;
    let upsert_action = create_action(move |payload: &AttendanceUpsert| {
        let repo = repo_for_upsert.clone();
        let payload = payload.clone();
        async move { repo.save(payload).await }
    });

    let report_failure = move |err: ApiError, fallback: &str| {
        log::error!("attendance grid ({:?}) request failed: {}", category, err);
        if err.is_unauthorized() {
            session.sign_out(SessionRole::Admin);
        }
        error.set(Some(err.user_message(fallback)));
    };

    create_effect(move |_| {
        if let Some(Err(err)) = employees.get() {
            report_failure(err, EMPLOYEES_ERROR);
        }
    });
    create_effect(move |_| {
        if let Some(Err(err)) = attendance.get() {
            report_failure(err, ATTENDANCE_ERROR);
        }
    });
    create_effect(move |_| match upsert_action.value().get() {
        Some(Ok(())) => {
            error.set(None);
            reload.update(|value| *value = value.wrapping_add(1));
        }
        Some(Err(err)) => report_failure(err, UPDATE_ERROR),
        None => {}
    });

    AttendanceGridViewModel {
        category,
        current_year: today.year(),
        month,
        year,
        reload,
        employees,
        attendance,
        upsert_action,
        error,
    }
}

impl AttendanceGridViewModel {
    pub fn days(&self) -> Vec<NaiveDate> {
        month_days(self.year.get(), self.month.get())
    }

    pub fn employee_list(&self) -> Vec<Employee> {
        self.employees
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    }

    pub fn records(&self) -> Vec<AttendanceRecord> {
        self.attendance
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    }

    /// Sends the edited cell together with the other field's current value.
    pub fn update_cell(&self, employee_id: &RecordId, date: NaiveDate, field: TimeField, value: &str) {
        let records = untrack(|| {
            self.attendance
                .with(|loaded| loaded.as_ref().and_then(|r| r.as_ref().ok()).cloned())
        })
        .unwrap_or_default();
        let payload = build_upsert(&records, employee_id, date, field, value);
        self.upsert_action.dispatch(payload);
    }
}
