use crate::{
    api::{EmployeeCategory, LoginRequest},
    state::session::SessionRole,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub username: String,
    pub password: String,
}

impl LoginFormState {
    pub fn to_request(&self) -> Result<LoginRequest, String> {
        validate_credentials(&self.username, &self.password)
    }
}

pub fn validate_credentials(username: &str, password: &str) -> Result<LoginRequest, String> {
    if username.trim().is_empty() {
        return Err("Username wajib diisi".into());
    }
    if password.is_empty() {
        return Err("Password wajib diisi".into());
    }
    Ok(LoginRequest {
        username: username.trim().to_string(),
        password: password.to_string(),
    })
}

pub fn login_title(role: SessionRole) -> &'static str {
    match role {
        SessionRole::Admin => "Login Admin",
        SessionRole::Employee(EmployeeCategory::Regular) => "Login Karyawan",
        SessionRole::Employee(EmployeeCategory::Khusus) => "Login Karyawan Khusus",
    }
}

pub fn failure_message(role: SessionRole) -> &'static str {
    match role {
        SessionRole::Admin => "Invalid credentials",
        SessionRole::Employee(_) => "Username atau Password Salah",
    }
}

/// Where a successful login lands: the admin console, or the category's
/// terms gate for employees.
pub fn destination(role: SessionRole) -> String {
    match role {
        SessionRole::Admin => "/admin/employees".to_string(),
        SessionRole::Employee(category) => category.terms_route(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_rejected_before_any_request() {
        assert_eq!(validate_credentials(" ", "x").unwrap_err(), "Username wajib diisi");
        assert_eq!(validate_credentials("budi", "").unwrap_err(), "Password wajib diisi");
        let request = validate_credentials(" budi ", "rahasia").unwrap();
        assert_eq!(request.username, "budi");
        assert_eq!(request.password, "rahasia");
    }

    #[test]
    fn each_role_has_its_own_destination_and_failure_text() {
        assert_eq!(destination(SessionRole::Admin), "/admin/employees");
        assert_eq!(
            destination(SessionRole::Employee(EmployeeCategory::Khusus)),
            "/terms-and-conditions-khusus"
        );
        assert_eq!(failure_message(SessionRole::Admin), "Invalid credentials");
        assert_eq!(
            failure_message(SessionRole::Employee(EmployeeCategory::Regular)),
            "Username atau Password Salah"
        );
    }
}
