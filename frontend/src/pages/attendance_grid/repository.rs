use crate::{
    api::{ApiClient, ApiError, AttendanceRecord, AttendanceUpsert, Employee, EmployeeCategory},
    state::session::{SessionContext, SessionRole},
};
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceGridRepository {
    client: Rc<ApiClient>,
    category: EmployeeCategory,
    session: SessionContext,
}

impl AttendanceGridRepository {
    pub fn new_with_client(
        client: Rc<ApiClient>,
        category: EmployeeCategory,
        session: SessionContext,
    ) -> Self {
        Self {
            client,
            category,
            session,
        }
    }

    fn api(&self) -> ApiClient {
        match self.session.current_untracked(SessionRole::Admin) {
            Some(session) => self.client.with_session(&session),
            None => (*self.client).clone(),
        }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.api().list_employees(self.category).await
    }

    pub async fn fetch_month(&self, year: i32, month: u32) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.api().list_attendance(self.category, year, month).await
    }

    pub async fn save(&self, payload: AttendanceUpsert) -> Result<(), ApiError> {
        self.api().upsert_attendance(self.category, &payload).await
    }
}
