use serde::{de::DeserializeOwned, Serialize};

use super::{
    client::ApiClient,
    types::{ApiError, EmployeeCategory, RecordId},
};

/// Collections exposed with the plain REST shape: `GET`/`POST` on the
/// collection, `PUT`/`DELETE` on `/:id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Employees(EmployeeCategory),
    Holidays,
    Leaves,
}

impl Collection {
    pub fn path(self) -> String {
        match self {
            Collection::Employees(category) => category.employees_path(),
            Collection::Holidays => "/holidays".to_string(),
            Collection::Leaves => "/leaves".to_string(),
        }
    }
}

impl ApiClient {
    pub async fn list_records<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Vec<T>, ApiError> {
        self.get_json(&collection.path(), &[]).await
    }

    pub async fn create_record<B: Serialize>(
        &self,
        collection: Collection,
        body: &B,
    ) -> Result<(), ApiError> {
        self.post_unit(&collection.path(), body).await
    }

    pub async fn update_record<B: Serialize>(
        &self,
        collection: Collection,
        id: &RecordId,
        body: &B,
    ) -> Result<(), ApiError> {
        self.put_record(&collection.path(), id, body).await
    }

    pub async fn remove_record(&self, collection: Collection, id: &RecordId) -> Result<(), ApiError> {
        self.delete_record(&collection.path(), id).await
    }
}
