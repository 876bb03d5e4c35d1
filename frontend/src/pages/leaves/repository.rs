use std::rc::Rc;

use crate::{
    api::{ApiClient, ApiError, Employee, EmployeeCategory},
    state::session::{SessionContext, SessionRole},
};

/// Employees offered in the leave form's select.
#[derive(Clone)]
pub struct LeaveEmployeesRepository {
    client: Rc<ApiClient>,
    session: SessionContext,
}

impl LeaveEmployeesRepository {
    pub fn new_with_client(client: Rc<ApiClient>, session: SessionContext) -> Self {
        Self { client, session }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let api = match self.session.current_untracked(SessionRole::Admin) {
            Some(session) => self.client.with_session(&session),
            None => (*self.client).clone(),
        };
        api.list_employees(EmployeeCategory::Regular).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_admin_session;
    use httpmock::prelude::*;
    use leptos::create_runtime;
    use serde_json::json;

    #[tokio::test]
    async fn employee_options_are_fetched_with_admin_token() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/employees")
                    .header("authorization", "Bearer admin-token");
                then.status(200).json_body(json!([{
                    "id": 4,
                    "name": "Dewi",
                    "username": "dewi",
                    "monthlySalary": 2500000
                }]));
            })
            .await;

        let repo = LeaveEmployeesRepository::new_with_client(
            Rc::new(ApiClient::new_with_base_url(server.url("/api"))),
            provide_admin_session(),
        );
        let employees = repo.fetch_employees().await.unwrap();

        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].name, "Dewi");
        mock.assert_async().await;
        runtime.dispose();
    }
}
