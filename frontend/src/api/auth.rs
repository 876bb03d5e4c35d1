use super::{
    client::ApiClient,
    types::{ApiError, EmployeeCategory, LoginRequest, LoginResponse},
};

const ADMIN_LOGIN_PATH: &str = "/admin/login";

impl ApiClient {
    pub async fn login_employee(
        &self,
        category: EmployeeCategory,
        request: &LoginRequest,
    ) -> Result<String, ApiError> {
        let response: LoginResponse = self.post_json(&category.login_path(), request).await?;
        token_from(response)
    }

    pub async fn login_admin(&self, request: &LoginRequest) -> Result<String, ApiError> {
        let response: LoginResponse = self.post_json(ADMIN_LOGIN_PATH, request).await?;
        token_from(response)
    }
}

fn token_from(response: LoginResponse) -> Result<String, ApiError> {
    match response.token {
        Some(token) if response.success && !token.is_empty() => Ok(token),
        _ => Err(ApiError::unauthorized("Login was not accepted")),
    }
}
