use super::{
    client::ApiClient,
    types::{ApiError, EmployeeCategory, MonthlyReport},
};

impl ApiClient {
    pub async fn monthly_reports(
        &self,
        category: EmployeeCategory,
        year: i32,
        month: u32,
    ) -> Result<Vec<MonthlyReport>, ApiError> {
        self.get_json(
            &category.report_path(),
            &[("month", month.to_string()), ("year", year.to_string())],
        )
        .await
    }
}
