use crate::{
    api::{ApiError, Employee, EmployeePayload, RecordId},
    pages::crud::{
        state::{missing_fields_error, require},
        CrudResource, FormMode,
    },
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    pub name: String,
    pub username: String,
    pub password: String,
    pub monthly_salary: String,
}

pub fn parse_salary(raw: &str) -> Result<f64, ApiError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ApiError::validation(
            "Gaji bulanan harus berupa angka dan tidak boleh negatif",
        )),
    }
}

impl CrudResource for Employee {
    type Draft = EmployeeDraft;
    type Payload = EmployeePayload;

    const LOAD_ERROR: &'static str = "Failed to fetch employees. Please try again.";
    const SAVE_ERROR: &'static str = "Failed to add/update employee. Please try again.";
    const DELETE_ERROR: &'static str = "Failed to delete employee. Please try again.";
    const DELETE_PROMPT: &'static str = "Are you sure you want to delete this employee?";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    /// The stored password is never echoed back into the form.
    fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.clone(),
            username: self.username.clone(),
            password: String::new(),
            monthly_salary: format_salary_input(self.monthly_salary),
        }
    }

    fn to_payload(draft: &EmployeeDraft, mode: FormMode) -> Result<EmployeePayload, ApiError> {
        let mut missing = Vec::new();
        let name = require(&draft.name, "Nama", &mut missing);
        let username = require(&draft.username, "Username", &mut missing);
        let password = match mode {
            FormMode::Create => Some(require(&draft.password, "Password", &mut missing)),
            FormMode::Update => Some(draft.password.trim().to_string()).filter(|p| !p.is_empty()),
        };
        let salary_raw = require(&draft.monthly_salary, "Gaji Bulanan", &mut missing);
        if !missing.is_empty() {
            return Err(missing_fields_error(missing));
        }
        Ok(EmployeePayload {
            name,
            username,
            password,
            monthly_salary: parse_salary(&salary_raw)?,
        })
    }
}

fn format_salary_input(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, username: &str, password: &str, salary: &str) -> EmployeeDraft {
        EmployeeDraft {
            name: name.into(),
            username: username.into(),
            password: password.into(),
            monthly_salary: salary.into(),
        }
    }

    #[test]
    fn create_requires_every_field() {
        let err = Employee::to_payload(&draft("Budi", "", "", "100"), FormMode::Create).unwrap_err();
        assert!(err.is_validation());
        assert!(err.error.contains("Username"));
        assert!(err.error.contains("Password"));
    }

    #[test]
    fn update_omits_blank_password() {
        let payload =
            Employee::to_payload(&draft("Budi", "budi", "  ", "1500000"), FormMode::Update).unwrap();
        assert_eq!(payload.password, None);
        assert_eq!(payload.monthly_salary, 1_500_000.0);
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("password").is_none());
    }

    #[test]
    fn salary_must_be_non_negative_number() {
        assert!(parse_salary("-1").is_err());
        assert!(parse_salary("abc").is_err());
        assert_eq!(parse_salary(" 2500000.5 ").unwrap(), 2_500_000.5);
    }

    #[test]
    fn search_matches_name_only() {
        let employee = crate::test_support::helpers::employee(1, "Siti Aminah");
        assert!(employee.matches("aminah"));
        assert!(!employee.matches("siti aminah x"));
        assert!(!employee.matches("1500000"));
    }

    #[test]
    fn edit_draft_starts_without_password() {
        let mut employee = crate::test_support::helpers::employee(1, "Budi");
        employee.password = Some("$2b$hash".into());
        let draft = employee.to_draft();
        assert!(draft.password.is_empty());
        assert_eq!(draft.monthly_salary, "1500000");
    }
}
