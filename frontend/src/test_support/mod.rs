#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Employee, EmployeeCategory, RecordId};
    use crate::state::session::{use_session, Session, SessionContext, SessionRole};
    use chrono::Utc;

    pub fn employee(id: i64, name: &str) -> Employee {
        Employee {
            id: RecordId::from(id),
            name: name.into(),
            username: name.to_lowercase(),
            password: None,
            monthly_salary: 1_500_000.0,
        }
    }

    pub fn provide_admin_session() -> SessionContext {
        let ctx = use_session();
        ctx.sign_in(Session::from_token("admin-token", SessionRole::Admin, Utc::now()));
        ctx
    }

    pub fn provide_employee_session(category: EmployeeCategory) -> SessionContext {
        let ctx = use_session();
        ctx.sign_in(Session::from_token(
            "employee-token",
            SessionRole::Employee(category),
            Utc::now(),
        ));
        ctx
    }
}
