use std::{marker::PhantomData, rc::Rc};

use super::state::{CrudResource, FormMode, SubmitIntent};
use crate::{
    api::{ApiClient, ApiError, Collection, RecordId},
    state::session::{SessionContext, SessionRole},
};

pub struct CrudRepository<R> {
    client: Rc<ApiClient>,
    collection: Collection,
    session: Option<SessionContext>,
    _record: PhantomData<R>,
}

impl<R> Clone for CrudRepository<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            collection: self.collection,
            session: self.session,
            _record: PhantomData,
        }
    }
}

impl<R: CrudResource> CrudRepository<R> {
    pub fn new_with_client(client: Rc<ApiClient>, collection: Collection) -> Self {
        Self {
            client,
            collection,
            session: None,
            _record: PhantomData,
        }
    }

    /// Attaches the admin token, when one is active, to every call.
    pub fn with_session(mut self, session: SessionContext) -> Self {
        self.session = Some(session);
        self
    }

    fn api(&self) -> ApiClient {
        match self
            .session
            .and_then(|ctx| ctx.current_untracked(SessionRole::Admin))
        {
            Some(session) => self.client.with_session(&session),
            None => (*self.client).clone(),
        }
    }

    pub async fn list(&self) -> Result<Vec<R>, ApiError> {
        self.api().list_records(self.collection).await
    }

    /// Sends the create or update; resolves to the mode that succeeded.
    pub async fn submit(&self, intent: SubmitIntent<R::Payload>) -> Result<FormMode, ApiError> {
        let mode = intent.mode();
        match intent {
            SubmitIntent::Create(payload) => {
                self.api().create_record(self.collection, &payload).await
            }
            SubmitIntent::Update(id, payload) => {
                self.api()
                    .update_record(self.collection, &id, &payload)
                    .await
            }
        }
        .map(|()| mode)
    }

    pub async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
        self.api().remove_record(self.collection, &id).await
    }
}
