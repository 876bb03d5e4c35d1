use super::{
    client::ApiClient,
    types::{
        ApiError, AttendanceRecord, AttendanceUpsert, CheckPayload, EmployeeCategory,
        TodayAttendance,
    },
};

/// Self-service attendance action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    CheckIn,
    CheckOut,
}

impl CheckKind {
    pub fn path_segment(self) -> &'static str {
        match self {
            CheckKind::CheckIn => "checkin",
            CheckKind::CheckOut => "checkout",
        }
    }
}

impl ApiClient {
    pub async fn list_attendance(
        &self,
        category: EmployeeCategory,
        year: i32,
        month: u32,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.get_json(
            &category.attendance_path(),
            &[("month", month.to_string()), ("year", year.to_string())],
        )
        .await
    }

    pub async fn upsert_attendance(
        &self,
        category: EmployeeCategory,
        payload: &AttendanceUpsert,
    ) -> Result<(), ApiError> {
        self.put_unit(&category.attendance_path(), payload).await
    }

    /// Today's record for the employee owning the attached session. The
    /// backend answers `null` when nothing was recorded yet.
    pub async fn today_attendance(
        &self,
        category: EmployeeCategory,
    ) -> Result<TodayAttendance, ApiError> {
        self.require_session()?;
        let path = format!("{}/today", category.attendance_path());
        let today: Option<TodayAttendance> = self.get_json(&path, &[]).await?;
        Ok(today.unwrap_or_default())
    }

    pub async fn submit_check(
        &self,
        category: EmployeeCategory,
        kind: CheckKind,
        payload: &CheckPayload,
    ) -> Result<(), ApiError> {
        self.require_session()?;
        let path = format!("{}/{}", category.attendance_path(), kind.path_segment());
        self.put_unit(&path, payload).await
    }
}
