use leptos::*;
use std::rc::Rc;

use super::{
    repository::CrudRepository,
    state::{
        page_count, page_slice, records_after_load, showing_summary, CrudFormState, CrudResource,
        FormMode, ListState, SubmitIntent,
    },
};
use crate::{
    api::{ApiClient, ApiError, Collection, RecordId},
    state::session::{use_session, SessionRole},
};

pub struct CrudViewModel<R: CrudResource> {
    pub form: RwSignal<CrudFormState<R>>,
    pub list: RwSignal<ListState>,
    pub reload: RwSignal<u32>,
    pub records: Resource<u32, Result<Vec<R>, ApiError>>,
    pub last_loaded: RwSignal<Vec<R>>,
    pub submit_action: Action<SubmitIntent<R::Payload>, Result<FormMode, ApiError>>,
    pub delete_action: Action<RecordId, Result<(), ApiError>>,
    pub pending_delete: RwSignal<Option<RecordId>>,
    pub error: RwSignal<Option<String>>,
    pub form_error: RwSignal<Option<ApiError>>,
}

impl<R: CrudResource> Clone for CrudViewModel<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: CrudResource> Copy for CrudViewModel<R> {}

pub fn use_crud_view_model<R: CrudResource>(collection: Collection) -> CrudViewModel<R> {
    let session = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = CrudRepository::<R>::new_with_client(Rc::new(api), collection)
        .with_session(session);

    let form = create_rw_signal(CrudFormState::<R>::default());
    let list = create_rw_signal(ListState::default());
    let reload = create_rw_signal(0u32);
    let pending_delete = create_rw_signal(None::<RecordId>);
    let error = create_rw_signal(None::<String>);
    let form_error = create_rw_signal(None::<ApiError>);
    let last_loaded = create_rw_signal(Vec::<R>::new());

    let repo_for_list = repository.clone();
    let records = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_for_list.clone();
            async move { repo.list().await }
        },
    );

    let repo_for_submit = repository.clone();
    let submit_action = create_action(move |intent: &SubmitIntent<R::Payload>| {
        let repo = repo_for_submit.clone();
        let intent = intent.clone();
        async move { repo.submit(intent).await }
    });

    let repo_for_delete = repository;
    let delete_action = create_action(move |id: &RecordId| {
        let repo = repo_for_delete.clone();
        let id = id.clone();
        async move { repo.delete(id).await }
    });

    let report_failure = move |err: ApiError, fallback: &str| {
        log::error!("{:?} request failed: {}", collection, err);
        if err.is_unauthorized() {
            session.sign_out(SessionRole::Admin);
        }
        error.set(Some(err.user_message(fallback)));
    };

    create_effect(move |_| {
        let latest = records.get();
        if let Some(Err(err)) = &latest {
            report_failure(err.clone(), R::LOAD_ERROR);
            return;
        }
        let previous = last_loaded.get_untracked();
        last_loaded.set(records_after_load(previous, latest.as_ref()));
    });

    create_effect(move |_| {
        let Some(result) = submit_action.value().get() else {
            return;
        };
        match result {
            Ok(mode) => {
                form.update(|f| f.finish_submit(mode));
                error.set(None);
                reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => report_failure(err, R::SAVE_ERROR),
        }
    });

    create_effect(move |_| {
        let Some(result) = delete_action.value().get() else {
            return;
        };
        match result {
            Ok(()) => {
                error.set(None);
                reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => report_failure(err, R::DELETE_ERROR),
        }
    });

    CrudViewModel {
        form,
        list,
        reload,
        records,
        last_loaded,
        submit_action,
        delete_action,
        pending_delete,
        error,
        form_error,
    }
}

impl<R: CrudResource> CrudViewModel<R> {
    pub fn mode(&self) -> FormMode {
        self.form.with(|f| f.mode())
    }

    pub fn edit(&self, f: impl FnOnce(&mut R::Draft)) {
        self.form.update(|state| state.edit(f));
    }

    pub fn begin_edit(&self, record: &R) {
        self.form_error.set(None);
        self.form.update(|state| state.begin_edit(record));
    }

    pub fn cancel_edit(&self) {
        self.form_error.set(None);
        self.form.update(|state| state.cancel_edit());
    }

    /// Validates the active draft and dispatches create or update. Invalid
    /// drafts never reach the network.
    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        match self.form.with_untracked(|f| f.submit_intent()) {
            Ok(intent) => {
                self.form_error.set(None);
                self.submit_action.dispatch(intent);
            }
            Err(err) => {
                log::warn!("form rejected: {}", err);
                self.form_error.set(Some(err));
            }
        }
    }

    pub fn request_delete(&self, id: RecordId) {
        self.pending_delete.set(Some(id));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(id) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.form.update(|state| state.forget(&id));
            self.delete_action.dispatch(id);
        }
    }

    pub fn set_search(&self, term: String) {
        self.list.update(|state| state.set_search(term));
    }

    pub fn set_page(&self, page: usize) {
        self.list.update(|state| state.page = page.max(1));
    }

    /// Last successfully loaded records; empty until the first load.
    pub fn loaded(&self) -> Vec<R> {
        self.last_loaded.get()
    }

    pub fn filtered(&self) -> Vec<R> {
        let records = self.loaded();
        self.list.with(|state| state.filter(&records))
    }

    pub fn visible_page(&self) -> Vec<R> {
        let page = self.list.with(|state| state.page);
        page_slice(&self.filtered(), page)
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered().len())
    }

    pub fn summary(&self) -> String {
        let page = self.list.with(|state| state.page);
        showing_summary(page, self.filtered().len())
    }
}
