use chrono::DateTime;
use chrono_tz::Tz;
use std::{future::Future, rc::Rc};

use super::utils::check_payload;
use crate::{
    api::{ApiClient, ApiError, CheckKind, EmployeeCategory, TodayAttendance},
    state::session::{SessionContext, SessionRole},
    utils::geolocation::Coordinates,
};

#[derive(Clone)]
pub struct SelfServiceRepository {
    client: Rc<ApiClient>,
    category: EmployeeCategory,
    session: SessionContext,
}

impl SelfServiceRepository {
    pub fn new_with_client(
        client: Rc<ApiClient>,
        category: EmployeeCategory,
        session: SessionContext,
    ) -> Self {
        Self {
            client,
            category,
            session,
        }
    }

    /// Client carrying this category's employee token, or none when signed out.
    fn api(&self) -> ApiClient {
        match self
            .session
            .current_untracked(SessionRole::Employee(self.category))
        {
            Some(session) => self.client.with_session(&session),
            None => (*self.client).clone(),
        }
    }

    pub async fn fetch_today(&self) -> Result<TodayAttendance, ApiError> {
        self.api().today_attendance(self.category).await
    }

    pub async fn check(
        &self,
        kind: CheckKind,
        locate: impl Future<Output = Result<Coordinates, ApiError>>,
        clock: impl FnOnce() -> DateTime<Tz>,
    ) -> Result<DateTime<Tz>, ApiError> {
        perform_check(&self.api(), self.category, kind, locate, clock).await
    }
}

/// Reads the position first; without one no request is sent. The time is
/// taken once the position is known, not when the action started.
pub async fn perform_check(
    api: &ApiClient,
    category: EmployeeCategory,
    kind: CheckKind,
    locate: impl Future<Output = Result<Coordinates, ApiError>>,
    clock: impl FnOnce() -> DateTime<Tz>,
) -> Result<DateTime<Tz>, ApiError> {
    let coords = locate.await?;
    let now = clock();
    let payload = check_payload(category, coords, now);
    log::debug!("{} for {:?} at {}", kind.path_segment(), category, payload.time);
    api.submit_check(category, kind, &payload).await?;
    Ok(now)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::Session;
    use chrono::{TimeZone, Utc};
    use httpmock::prelude::*;
    use serde_json::json;
    use std::cell::Cell;

    fn employee_client(server: &MockServer) -> ApiClient {
        let session = Session::from_token(
            "employee-token",
            SessionRole::Employee(EmployeeCategory::Khusus),
            Utc::now(),
        );
        ApiClient::new_with_base_url(server.url("/api")).with_session(&session)
    }

    fn now() -> DateTime<Tz> {
        chrono_tz::Asia::Jakarta
            .with_ymd_and_hms(2024, 5, 6, 7, 2, 0)
            .single()
            .unwrap()
    }

    #[tokio::test]
    async fn geolocation_failure_sends_no_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT).path("/api/attendance-khusus/checkin");
                then.status(200).json_body(json!({ "success": true }));
            })
            .await;

        let api = employee_client(&server);
        let result = perform_check(
            &api,
            EmployeeCategory::Khusus,
            CheckKind::CheckIn,
            async { Err(ApiError::geolocation("User denied Geolocation")) },
            || panic!("clock read without a position"),
        )
        .await;

        assert_eq!(result.unwrap_err().error, "User denied Geolocation");
        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn check_in_sends_position_and_local_time_with_bearer() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/attendance-khusus/checkin")
                    .header("authorization", "Bearer employee-token")
                    .json_body(json!({
                        "latitude": -6.2,
                        "longitude": 106.8,
                        "date": "2024-05-06",
                        "time": "07:02"
                    }));
                then.status(200).json_body(json!({ "success": true }));
            })
            .await;

        let api = employee_client(&server);
        let located = Cell::new(false);
        let locate = async {
            located.set(true);
            Ok(Coordinates {
                latitude: -6.2,
                longitude: 106.8,
            })
        };
        let stamped = perform_check(&api, EmployeeCategory::Khusus, CheckKind::CheckIn, locate, || {
            assert!(located.get(), "time read before the position resolved");
            now()
        })
        .await
        .unwrap();

        assert_eq!(stamped, now());
        mock.assert_async().await;
    }
}
