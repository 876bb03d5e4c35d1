use chrono::DateTime;
use chrono_tz::Tz;

use crate::{
    api::{ApiError, CheckKind, CheckPayload, EmployeeCategory, TodayAttendance},
    utils::{format::time_of_day, geolocation::Coordinates},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    NotCheckedIn,
    CheckedIn,
    CheckedOut,
}

/// Today's check times as shown on screen (`HH:MM`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelfServiceState {
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    /// Set by a check-in made on this screen; a later check-out keeps it.
    pub checked_in_here: bool,
}

impl SelfServiceState {
    pub fn from_today(today: &TodayAttendance) -> Self {
        Self {
            check_in: today.check_in.as_deref().and_then(time_of_day),
            check_out: today.check_out.as_deref().and_then(time_of_day),
            checked_in_here: false,
        }
    }

    pub fn status(&self) -> CheckStatus {
        if self.checked_in_here {
            return CheckStatus::CheckedIn;
        }
        match (&self.check_in, &self.check_out) {
            (_, Some(_)) => CheckStatus::CheckedOut,
            (Some(_), None) => CheckStatus::CheckedIn,
            (None, None) => CheckStatus::NotCheckedIn,
        }
    }

    pub fn can_check_in(&self) -> bool {
        self.status() != CheckStatus::CheckedIn
    }

    /// Check-out only records the time; the server decides whether it counts,
    /// so the screen stays checked in until today's record is reloaded.
    pub fn record(&mut self, kind: CheckKind, shown: String) {
        match kind {
            CheckKind::CheckIn => {
                self.check_in = Some(shown);
                self.check_out = None;
                self.checked_in_here = true;
            }
            CheckKind::CheckOut => self.check_out = Some(shown),
        }
    }

    pub fn summary_line(&self) -> String {
        match self.status() {
            CheckStatus::CheckedIn => format!("Masuk Jam : {}", self.check_in.as_deref().unwrap_or("")),
            _ => format!("Keluar Jam : {}", self.check_out.as_deref().unwrap_or("")),
        }
    }
}

/// Request body for a check action. The regular backend reads one zoned
/// timestamp; the khusus backend reads separate date and `HH:MM` fields.
pub fn check_payload(category: EmployeeCategory, coords: Coordinates, now: DateTime<Tz>) -> CheckPayload {
    let (date, time) = match category {
        EmployeeCategory::Regular => (None, now.format("%Y-%m-%d %H:%M:%S %:z").to_string()),
        EmployeeCategory::Khusus => (
            Some(now.format("%Y-%m-%d").to_string()),
            now.format("%H:%M").to_string(),
        ),
    };
    CheckPayload {
        latitude: coords.latitude,
        longitude: coords.longitude,
        date,
        time,
    }
}

pub fn failure_message(kind: CheckKind, err: &ApiError) -> String {
    err.user_message(&format!("{} failed", kind.path_segment()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SESSION_EXPIRED_MESSAGE;
    use chrono::TimeZone;

    fn jakarta(h: u32, m: u32, s: u32) -> DateTime<Tz> {
        chrono_tz::Asia::Jakarta
            .with_ymd_and_hms(2024, 5, 6, h, m, s)
            .single()
            .unwrap()
    }

    fn today(check_in: Option<&str>, check_out: Option<&str>) -> TodayAttendance {
        TodayAttendance {
            check_in: check_in.map(str::to_string),
            check_out: check_out.map(str::to_string),
        }
    }

    const COORDS: Coordinates = Coordinates {
        latitude: -6.2,
        longitude: 106.8,
    };

    #[test]
    fn status_follows_today_record() {
        let empty = SelfServiceState::from_today(&today(None, None));
        assert_eq!(empty.status(), CheckStatus::NotCheckedIn);
        assert!(empty.can_check_in());

        let checked_in = SelfServiceState::from_today(&today(Some("2024-05-06T07:01:00.000Z"), None));
        assert_eq!(checked_in.status(), CheckStatus::CheckedIn);
        assert!(!checked_in.can_check_in());
        assert_eq!(checked_in.summary_line(), "Masuk Jam : 07:01");

        let done = SelfServiceState::from_today(&today(
            Some("2024-05-06T07:01:00.000Z"),
            Some("2024-05-06T15:10:00.000Z"),
        ));
        assert_eq!(done.status(), CheckStatus::CheckedOut);
        assert_eq!(done.check_in.as_deref(), Some("07:01"));
        assert_eq!(done.check_out.as_deref(), Some("15:10"));
        assert_eq!(done.summary_line(), "Keluar Jam : 15:10");
    }

    #[test]
    fn recording_check_in_disables_it() {
        let mut state = SelfServiceState::default();
        state.record(CheckKind::CheckIn, "07:00".into());
        assert!(!state.can_check_in());
        assert_eq!(state.summary_line(), "Masuk Jam : 07:00");
    }

    #[test]
    fn check_out_after_check_in_keeps_check_in_disabled() {
        let mut state = SelfServiceState::default();
        state.record(CheckKind::CheckIn, "07:00".into());
        state.record(CheckKind::CheckOut, "15:00".into());
        assert_eq!(state.status(), CheckStatus::CheckedIn);
        assert!(!state.can_check_in());
        assert_eq!(state.check_out.as_deref(), Some("15:00"));
        assert_eq!(state.summary_line(), "Masuk Jam : 07:00");
    }

    #[test]
    fn check_out_without_check_in_only_records_time() {
        let mut state = SelfServiceState::default();
        state.record(CheckKind::CheckOut, "15:00".into());
        assert_eq!(state.check_out.as_deref(), Some("15:00"));
        assert_eq!(state.summary_line(), "Keluar Jam : 15:00");
    }

    #[test]
    fn regular_payload_sends_zoned_timestamp() {
        let payload = check_payload(EmployeeCategory::Regular, COORDS, jakarta(7, 4, 9));
        assert_eq!(payload.time, "2024-05-06 07:04:09 +07:00");
        assert_eq!(payload.date, None);
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("date").is_none());
        assert_eq!(json["latitude"], -6.2);
    }

    #[test]
    fn khusus_payload_splits_date_and_minutes() {
        let payload = check_payload(EmployeeCategory::Khusus, COORDS, jakarta(14, 30, 59));
        assert_eq!(payload.date.as_deref(), Some("2024-05-06"));
        assert_eq!(payload.time, "14:30");
    }

    #[test]
    fn failure_message_prefers_server_text() {
        let mut err = ApiError::http(400, "Request failed with status 400");
        err.details = Some(serde_json::json!({ "error": "Anda berada di luar area kantor" }));
        assert_eq!(failure_message(CheckKind::CheckIn, &err), "Anda berada di luar area kantor");

        let bare = ApiError::http(500, "Request failed with status 500");
        assert_eq!(failure_message(CheckKind::CheckOut, &bare), "checkout failed");

        let expired = ApiError::unauthorized("jwt expired");
        assert_eq!(failure_message(CheckKind::CheckIn, &expired), SESSION_EXPIRED_MESSAGE);
    }
}
