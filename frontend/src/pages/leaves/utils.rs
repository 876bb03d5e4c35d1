use crate::{
    api::{ApiError, Leave, LeavePayload, RecordId},
    pages::{
        crud::{
            state::{missing_fields_error, require},
            CrudResource, FormMode,
        },
        holidays::utils::parse_form_date,
    },
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaveDraft {
    pub employee_id: String,
    pub date: String,
    pub reason: String,
}

impl CrudResource for Leave {
    type Draft = LeaveDraft;
    type Payload = LeavePayload;

    const LOAD_ERROR: &'static str = "Failed to load leaves. Please try again later.";
    const SAVE_ERROR: &'static str = "Failed to add/update leave. Please try again.";
    const DELETE_ERROR: &'static str = "Failed to delete leave. Please try again.";
    const DELETE_PROMPT: &'static str = "Are you sure you want to delete this leave?";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn matches(&self, needle: &str) -> bool {
        self.employee_name().to_lowercase().contains(needle)
            || self.reason.to_lowercase().contains(needle)
    }

    fn to_draft(&self) -> LeaveDraft {
        LeaveDraft {
            employee_id: self.employee_id.to_string(),
            date: self.date.format("%Y-%m-%d").to_string(),
            reason: self.reason.clone(),
        }
    }

    fn to_payload(draft: &LeaveDraft, _mode: FormMode) -> Result<LeavePayload, ApiError> {
        let mut missing = Vec::new();
        let employee_id = require(&draft.employee_id, "Karyawan", &mut missing);
        let date = require(&draft.date, "Tanggal", &mut missing);
        let reason = require(&draft.reason, "Alasan", &mut missing);
        if !missing.is_empty() {
            return Err(missing_fields_error(missing));
        }
        Ok(LeavePayload {
            employee_id: RecordId::new(employee_id),
            date: parse_form_date(&date)?,
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EmployeeRef;
    use chrono::NaiveDate;

    fn leave(name: &str, reason: &str) -> Leave {
        Leave {
            id: RecordId::from(1),
            employee_id: RecordId::from(9),
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            reason: reason.into(),
            employee: Some(EmployeeRef {
                id: RecordId::from(9),
                name: name.into(),
            }),
        }
    }

    #[test]
    fn search_covers_employee_name_and_reason() {
        let record = leave("Dewi", "Sakit demam");
        assert!(record.matches("dewi"));
        assert!(record.matches("demam"));
        assert!(!record.matches("cuti"));
    }

    #[test]
    fn payload_keeps_numeric_employee_id() {
        let draft = leave("Dewi", "Sakit").to_draft();
        assert_eq!(draft.date, "2024-05-02");
        let payload = Leave::to_payload(&draft, FormMode::Update).unwrap();
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            serde_json::json!({ "employeeId": 9, "date": "2024-05-02", "reason": "Sakit" })
        );
    }

    #[test]
    fn employee_must_be_selected() {
        let draft = LeaveDraft {
            employee_id: String::new(),
            date: "2024-05-02".into(),
            reason: "Sakit".into(),
        };
        let err = Leave::to_payload(&draft, FormMode::Create).unwrap_err();
        assert!(err.error.contains("Karyawan"));
    }
}
