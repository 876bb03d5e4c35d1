use super::{
    client::ApiClient,
    records::Collection,
    types::{ApiError, Employee, EmployeeCategory},
};

impl ApiClient {
    /// Employees of one category, for selects and the attendance grid.
    pub async fn list_employees(&self, category: EmployeeCategory) -> Result<Vec<Employee>, ApiError> {
        self.list_records(Collection::Employees(category)).await
    }
}
