use chrono::NaiveDate;

use crate::{
    api::{ApiError, Holiday, HolidayPayload, HolidayType, RecordId},
    pages::crud::{
        state::{missing_fields_error, require},
        CrudResource, FormMode,
    },
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolidayDraft {
    pub date: String,
    pub description: String,
    /// Empty until the user picks a type.
    pub kind: String,
}

/// Form dates must be exactly `YYYY-MM-DD`.
pub fn parse_form_date(raw: &str) -> Result<NaiveDate, ApiError> {
    let raw = raw.trim();
    if raw.len() != 10 {
        return Err(ApiError::validation("Tanggal harus berformat YYYY-MM-DD"));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ApiError::validation("Tanggal harus berformat YYYY-MM-DD"))
}

impl CrudResource for Holiday {
    type Draft = HolidayDraft;
    type Payload = HolidayPayload;

    const LOAD_ERROR: &'static str = "Failed to load holidays. Please try again later.";
    const SAVE_ERROR: &'static str = "Failed to add/update holiday. Please try again.";
    const DELETE_ERROR: &'static str = "Failed to delete holiday. Please try again.";
    const DELETE_PROMPT: &'static str = "Are you sure you want to delete this holiday?";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn matches(&self, needle: &str) -> bool {
        self.description.to_lowercase().contains(needle)
    }

    fn to_draft(&self) -> HolidayDraft {
        HolidayDraft {
            date: self.date.format("%Y-%m-%d").to_string(),
            description: self.description.clone(),
            kind: self.kind.as_str().to_string(),
        }
    }

    fn to_payload(draft: &HolidayDraft, _mode: FormMode) -> Result<HolidayPayload, ApiError> {
        let mut missing = Vec::new();
        let date = require(&draft.date, "Tanggal", &mut missing);
        let description = require(&draft.description, "Keterangan", &mut missing);
        let kind = require(&draft.kind, "Tipe", &mut missing);
        if !missing.is_empty() {
            return Err(missing_fields_error(missing));
        }
        let kind = HolidayType::parse(&kind)
            .ok_or_else(|| ApiError::validation("Pilih tipe hari libur"))?;
        Ok(HolidayPayload {
            date: parse_form_date(&date)?,
            description,
            kind,
        })
    }
}
