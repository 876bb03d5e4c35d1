use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

use crate::api::{ApiError, RecordId};

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

/// A remote record managed by the generic add/edit/list screen.
pub trait CrudResource: Clone + Debug + PartialEq + Serialize + DeserializeOwned + 'static {
    /// Raw form inputs, kept as text until submit.
    type Draft: Clone + Debug + Default + PartialEq + 'static;
    type Payload: Clone + Debug + Serialize + 'static;

    const LOAD_ERROR: &'static str;
    const SAVE_ERROR: &'static str;
    const DELETE_ERROR: &'static str;
    const DELETE_PROMPT: &'static str;

    fn id(&self) -> &RecordId;

    /// Case-insensitive search; `needle` is already lower-cased.
    fn matches(&self, needle: &str) -> bool;

    fn to_draft(&self) -> Self::Draft;

    fn to_payload(draft: &Self::Draft, mode: FormMode) -> Result<Self::Payload, ApiError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitIntent<P> {
    Create(P),
    Update(RecordId, P),
}

impl<P> SubmitIntent<P> {
    pub fn mode(&self) -> FormMode {
        match self {
            SubmitIntent::Create(_) => FormMode::Create,
            SubmitIntent::Update(..) => FormMode::Update,
        }
    }
}

/// New-record draft and record-being-edited, only one of which is active.
#[derive(Debug, Clone, PartialEq)]
pub struct CrudFormState<R: CrudResource> {
    draft: R::Draft,
    editing: Option<(RecordId, R::Draft)>,
}

impl<R: CrudResource> Default for CrudFormState<R> {
    fn default() -> Self {
        Self {
            draft: R::Draft::default(),
            editing: None,
        }
    }
}

impl<R: CrudResource> CrudFormState<R> {
    pub fn mode(&self) -> FormMode {
        if self.editing.is_some() {
            FormMode::Update
        } else {
            FormMode::Create
        }
    }

    pub fn editing_id(&self) -> Option<&RecordId> {
        self.editing.as_ref().map(|(id, _)| id)
    }

    pub fn active(&self) -> &R::Draft {
        match &self.editing {
            Some((_, draft)) => draft,
            None => &self.draft,
        }
    }

    /// Routes an input change into whichever draft is active.
    pub fn edit(&mut self, f: impl FnOnce(&mut R::Draft)) {
        match &mut self.editing {
            Some((_, draft)) => f(draft),
            None => f(&mut self.draft),
        }
    }

    pub fn begin_edit(&mut self, record: &R) {
        self.editing = Some((record.id().clone(), record.to_draft()));
    }

    /// Leaves edit mode; the new-record draft keeps what it held.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn submit_intent(&self) -> Result<SubmitIntent<R::Payload>, ApiError> {
        match &self.editing {
            Some((id, draft)) => Ok(SubmitIntent::Update(
                id.clone(),
                R::to_payload(draft, FormMode::Update)?,
            )),
            None => Ok(SubmitIntent::Create(R::to_payload(
                &self.draft,
                FormMode::Create,
            )?)),
        }
    }

    /// Clears the form that was just submitted.
    pub fn finish_submit(&mut self, mode: FormMode) {
        match mode {
            FormMode::Update => self.editing = None,
            FormMode::Create => self.draft = R::Draft::default(),
        }
    }

    /// Drops the edit target when that record was deleted.
    pub fn forget(&mut self, id: &RecordId) {
        if self.editing_id() == Some(id) {
            self.editing = None;
        }
    }
}

/// Search term and 1-based page of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub search: String,
    pub page: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
        }
    }
}

impl ListState {
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    pub fn filter<R: CrudResource>(&self, records: &[R]) -> Vec<R> {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return records.to_vec();
        }
        records
            .iter()
            .filter(|record| record.matches(&needle))
            .cloned()
            .collect()
    }
}

/// Records to list once a load settles. A failed reload keeps the previous
/// list on screen.
pub fn records_after_load<R: Clone>(
    previous: Vec<R>,
    latest: Option<&Result<Vec<R>, ApiError>>,
) -> Vec<R> {
    match latest {
        Some(Ok(records)) => records.clone(),
        _ => previous,
    }
}

pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Items `[(page-1)*10, page*10)` of `items`; out-of-range pages are empty.
pub fn page_slice<T: Clone>(items: &[T], page: usize) -> Vec<T> {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    items.iter().skip(start).take(PAGE_SIZE).cloned().collect()
}

pub fn showing_summary(page: usize, len: usize) -> String {
    if len == 0 {
        return "Showing 0 to 0 of 0 entries".to_string();
    }
    let first = page.saturating_sub(1) * PAGE_SIZE + 1;
    let last = (page * PAGE_SIZE).min(len);
    format!("Showing {} to {} of {} entries", first.min(len), last, len)
}

pub(crate) fn require(value: &str, label: &str, missing: &mut Vec<String>) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        missing.push(label.to_string());
    }
    trimmed.to_string()
}

pub(crate) fn missing_fields_error(missing: Vec<String>) -> ApiError {
    let mut error = ApiError::validation(format!("Lengkapi data berikut: {}", missing.join(", ")));
    error.details = Some(serde_json::json!({ "fields": missing }));
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: RecordId,
        text: String,
    }

    impl CrudResource for Note {
        type Draft = String;
        type Payload = String;
        const LOAD_ERROR: &'static str = "load";
        const SAVE_ERROR: &'static str = "save";
        const DELETE_ERROR: &'static str = "delete";
        const DELETE_PROMPT: &'static str = "sure?";

        fn id(&self) -> &RecordId {
            &self.id
        }

        fn matches(&self, needle: &str) -> bool {
            self.text.to_lowercase().contains(needle)
        }

        fn to_draft(&self) -> String {
            self.text.clone()
        }

        fn to_payload(draft: &String, _mode: FormMode) -> Result<String, ApiError> {
            if draft.trim().is_empty() {
                Err(ApiError::validation("text required"))
            } else {
                Ok(draft.trim().to_string())
            }
        }
    }

    fn note(id: i64, text: &str) -> Note {
        Note {
            id: RecordId::from(id),
            text: text.into(),
        }
    }

    #[test]
    fn submit_without_edit_target_creates() {
        let mut form = CrudFormState::<Note>::default();
        form.edit(|d| *d = "Libur".into());
        assert_eq!(
            form.submit_intent().unwrap(),
            SubmitIntent::Create("Libur".to_string())
        );
    }

    #[test]
    fn submit_with_edit_target_updates_that_id_only() {
        let mut form = CrudFormState::<Note>::default();
        form.edit(|d| *d = "draft in progress".into());
        form.begin_edit(&note(7, "old"));
        form.edit(|d| *d = "new".into());

        let intent = form.submit_intent().unwrap();
        assert_eq!(
            intent,
            SubmitIntent::Update(RecordId::from(7), "new".to_string())
        );
        assert_eq!(intent.mode(), FormMode::Update);

        form.finish_submit(intent.mode());
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.active(), "draft in progress");
    }

    #[test]
    fn cancel_edit_restores_new_record_draft() {
        let mut form = CrudFormState::<Note>::default();
        form.edit(|d| *d = "half typed".into());
        form.begin_edit(&note(1, "existing"));
        assert_eq!(form.active(), "existing");
        form.cancel_edit();
        assert_eq!(form.active(), "half typed");
        form.finish_submit(FormMode::Create);
        assert_eq!(form.active(), "");
    }

    #[test]
    fn invalid_draft_yields_validation_error() {
        let form = CrudFormState::<Note>::default();
        assert!(form.submit_intent().unwrap_err().is_validation());
    }

    #[test]
    fn forgetting_deleted_record_leaves_edit_mode() {
        let mut form = CrudFormState::<Note>::default();
        form.begin_edit(&note(3, "x"));
        form.forget(&RecordId::from(4));
        assert_eq!(form.mode(), FormMode::Update);
        form.forget(&RecordId::from(3));
        assert_eq!(form.mode(), FormMode::Create);
    }

    #[test]
    fn search_is_case_insensitive_and_resets_page() {
        let records = vec![note(1, "Hari Raya"), note(2, "Tahun Baru"), note(3, "hari buruh")];
        let mut list = ListState {
            search: String::new(),
            page: 3,
        };
        list.set_search("HARI");
        assert_eq!(list.page, 1);
        let ids: Vec<_> = list.filter(&records).into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![RecordId::from(1), RecordId::from(3)]);
    }

    #[test]
    fn failed_reload_keeps_last_good_records() {
        let shown = records_after_load(Vec::new(), Some(&Ok(vec![note(1, "Libur")])));
        assert_eq!(shown, vec![note(1, "Libur")]);

        let failed: Result<Vec<Note>, ApiError> = Err(ApiError::http(500, "boom"));
        let shown = records_after_load(shown, Some(&failed));
        assert_eq!(shown, vec![note(1, "Libur")]);

        let shown = records_after_load(shown, None);
        assert_eq!(shown, vec![note(1, "Libur")]);

        let shown = records_after_load(shown, Some(&Ok(Vec::new())));
        assert!(shown.is_empty());
    }

    #[test]
    fn pagination_uses_fixed_page_size() {
        let items: Vec<usize> = (0..25).collect();
        assert_eq!(page_count(25), 3);
        assert_eq!(page_count(20), 2);
        assert_eq!(page_count(0), 0);
        assert_eq!(page_slice(&items, 1), (0..10).collect::<Vec<_>>());
        assert_eq!(page_slice(&items, 3), (20..25).collect::<Vec<_>>());
        assert!(page_slice(&items, 4).is_empty());
        assert_eq!(showing_summary(3, 25), "Showing 21 to 25 of 25 entries");
        assert_eq!(showing_summary(1, 25), "Showing 1 to 10 of 25 entries");
        assert_eq!(showing_summary(1, 0), "Showing 0 to 0 of 0 entries");
    }
}
