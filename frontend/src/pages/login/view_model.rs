use leptos::*;

use super::{
    repository,
    utils::{destination, failure_message, LoginFormState},
};
use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    state::session::{use_session, Session, SessionRole},
    utils::navigation::go_to,
};

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub role: SessionRole,
    pub form: RwSignal<LoginFormState>,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<Session, ApiError>>,
}

pub fn use_login_view_model(role: SessionRole) -> LoginViewModel {
    let session = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let form = create_rw_signal(LoginFormState::default());
    let error = create_rw_signal(None::<String>);

    let login_action = create_action(move |request: &LoginRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { repository::login(&api, role, &request).await }
    });

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(signed_in) => {
                    log::info!("signed in as {:?}", role);
                    error.set(None);
                    session.sign_in(signed_in);
                    go_to(&destination(role));
                }
                Err(err) => {
                    log::warn!("login failed for {:?}: {}", role, err);
                    error.set(Some(failure_message(role).to_string()));
                }
            }
        }
    });

    LoginViewModel {
        role,
        form,
        error,
        login_action,
    }
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.with_untracked(LoginFormState::to_request) {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(message) => self.error.set(Some(message)),
        }
    }
}
