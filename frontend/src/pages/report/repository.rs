use std::rc::Rc;

use crate::{
    api::{ApiClient, ApiError, EmployeeCategory, MonthlyReport},
    state::session::{SessionContext, SessionRole},
};

#[derive(Clone)]
pub struct ReportRepository {
    client: Rc<ApiClient>,
    category: EmployeeCategory,
    session: SessionContext,
}

impl ReportRepository {
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

    pub async fn fetch(&self, year: i32, month: u32) -> Result<Vec<MonthlyReport>, ApiError> {
        let api = match self.session.current_untracked(SessionRole::Admin) {
            Some(session) => self.client.with_session(&session),
            None => (*self.client).clone(),
        };
        api.monthly_reports(self.category, year, month).await
    }
}
