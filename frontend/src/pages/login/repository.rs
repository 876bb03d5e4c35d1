use chrono::Utc;

use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    state::session::{Session, SessionRole},
};

/// Exchanges credentials for a session of `role`.
pub async fn login(api: &ApiClient, role: SessionRole, request: &LoginRequest) -> Result<Session, ApiError> {
    let token = match role {
        SessionRole::Admin => api.login_admin(request).await?,
        SessionRole::Employee(category) => api.login_employee(category, request).await?,
    };
    Ok(Session::from_token(token, role, Utc::now()))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::EmployeeCategory;
    use httpmock::prelude::*;
    use serde_json::json;

    fn request() -> LoginRequest {
        LoginRequest {
            username: "budi".into(),
            password: "rahasia".into(),
        }
    }

    #[tokio::test]
    async fn employee_login_returns_session_for_category() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/employees-khusus/login-employee")
                    .json_body(json!({ "username": "budi", "password": "rahasia" }));
                then.status(200)
                    .json_body(json!({ "success": true, "token": "tok-khusus" }));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let role = SessionRole::Employee(EmployeeCategory::Khusus);
        let session = login(&api, role, &request()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(session.token, "tok-khusus");
        assert_eq!(session.role, role);
    }

    #[tokio::test]
    async fn rejected_admin_login_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/admin/login");
                then.status(401).json_body(json!({ "error": "Invalid credentials" }));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let err = login(&api, SessionRole::Admin, &request()).await.unwrap_err();
        assert!(err.is_unauthorized());
    }
}
