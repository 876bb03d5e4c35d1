use leptos::*;
use std::rc::Rc;

use super::{
    repository::SelfServiceRepository,
    utils::{failure_message, SelfServiceState},
};
use crate::{
    api::{ApiClient, ApiError, CheckKind, EmployeeCategory, TodayAttendance, SESSION_EXPIRED_MESSAGE},
    state::session::{use_session, SessionContext, SessionRole},
    utils::{geolocation::current_position, lifecycle::MountGuard, time::now_in_app_tz},
};

#[derive(Clone)]
pub struct SelfServiceViewModel {
    pub category: EmployeeCategory,
    pub state: RwSignal<SelfServiceState>,
    pub today: Resource<(), Result<TodayAttendance, ApiError>>,
    pub pending: RwSignal<Option<CheckKind>>,
    pub error: RwSignal<Option<String>>,
    repository: SelfServiceRepository,
    session: SessionContext,
    guard: MountGuard,
}

pub fn use_self_service_view_model(category: EmployeeCategory) -> SelfServiceViewModel {
    let session = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = SelfServiceRepository::new_with_client(Rc::new(api), category, session);

    let state = create_rw_signal(SelfServiceState::default());
    let pending = create_rw_signal(None::<CheckKind>);
    let error = create_rw_signal(None::<String>);

    let repo_for_today = repository.clone();
    let today = create_resource(
        || (),
        move |_| {
            let repo = repo_for_today.clone();
            async move { repo.fetch_today().await }
        },
    );

    create_effect(move |_| match today.get() {
        Some(Ok(record)) => state.set(SelfServiceState::from_today(&record)),
        Some(Err(err)) => {
            log::error!("failed to load today's attendance ({:?}): {}", category, err);
            if err.is_unauthorized() {
                session.sign_out(SessionRole::Employee(category));
            }
            error.set(Some(err.user_message(SESSION_EXPIRED_MESSAGE)));
        }
        None => {}
    });

    SelfServiceViewModel {
        category,
        state,
        today,
        pending,
        error,
        repository,
        session,
        guard: MountGuard::new(),
    }
}

impl SelfServiceViewModel {
    pub fn is_busy(&self) -> bool {
        self.pending.with(Option::is_some)
    }

    /// Starts a check action. The position prompt may outlive the screen, so
    /// results are dropped once it is unmounted.
    pub fn check(&self, kind: CheckKind) {
        if self.pending.get_untracked().is_some() {
            return;
        }
        self.pending.set(Some(kind));

        let repo = self.repository.clone();
        let guard = self.guard.clone();
        let session = self.session;
        let category = self.category;
        let (state, pending, error) = (self.state, self.pending, self.error);

        spawn_local(async move {
            let result = repo.check(kind, current_position(), now_in_app_tz).await;
            guard.run(move || {
                pending.set(None);
                match result {
                    Ok(at) => {
                        state.update(|s| s.record(kind, at.format("%H:%M").to_string()));
                        error.set(None);
                    }
                    Err(err) => {
                        log::error!("{} failed: {}", kind.path_segment(), err);
                        if err.is_unauthorized() {
                            session.sign_out(SessionRole::Employee(category));
                        }
                        error.set(Some(failure_message(kind, &err)));
                    }
                }
            });
        });
    }
}
