use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Employee category. Both categories share record shapes but live in separate
/// backend collections and have their own login, attendance and report routes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeCategory {
    #[default]
    Regular,
    Khusus,
}

impl EmployeeCategory {
    pub const ALL: [EmployeeCategory; 2] = [EmployeeCategory::Regular, EmployeeCategory::Khusus];

    fn suffix(self) -> &'static str {
        match self {
            EmployeeCategory::Regular => "",
            EmployeeCategory::Khusus => "-khusus",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EmployeeCategory::Regular => "Karyawan Bulanan",
            EmployeeCategory::Khusus => "Karyawan Khusus",
        }
    }

    pub fn employees_path(self) -> String {
        format!("/employees{}", self.suffix())
    }

    pub fn attendance_path(self) -> String {
        format!("/attendance{}", self.suffix())
    }

    pub fn report_path(self) -> String {
        format!("/report{}/report/monthly", self.suffix())
    }

    pub fn login_path(self) -> String {
        format!("/employees{}/login-employee", self.suffix())
    }

    pub fn login_route(self) -> String {
        format!("/login-employee{}", self.suffix())
    }

    pub fn terms_route(self) -> String {
        format!("/terms-and-conditions{}", self.suffix())
    }

    pub fn attendance_route(self) -> String {
        format!("/employee{}", self.suffix())
    }
}

/// Backend record id. The API hands out numeric ids, but form selects and
/// older endpoints use strings, so both are accepted and compared as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.parse::<i64>() {
            Ok(number) => serializer.serialize_i64(number),
            Err(_) => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(RecordId(s)),
            Value::Number(n) => Ok(RecordId(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "invalid record id: {}",
                other
            ))),
        }
    }
}

/// Calendar dates arrive either as `YYYY-MM-DD` or as full ISO timestamps.
/// Only the date part is meaningful on this side.
pub(crate) mod wire_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let head = raw.trim().get(..10)?;
        NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
    }

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
    }
}

/// Decimal columns come back as JSON numbers or as numeric strings.
pub(crate) mod wire_number {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| serde::de::Error::custom("number out of range")),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| serde::de::Error::custom(format!("invalid number: {s}"))),
            Value::Null => Ok(0.0),
            other => Err(serde::de::Error::custom(format!("invalid number: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: RecordId,
    pub name: String,
    pub username: String,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    #[serde(deserialize_with = "wire_number::deserialize")]
    pub monthly_salary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub name: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub monthly_salary: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HolidayType {
    #[serde(rename = "Tanggal Merah")]
    TanggalMerah,
    #[serde(rename = "Tahun Baru")]
    TahunBaru,
    #[serde(rename = "Hari Raya")]
    HariRaya,
    #[serde(rename = "DLL")]
    Dll,
}

impl HolidayType {
    pub const ALL: [HolidayType; 4] = [
        HolidayType::TanggalMerah,
        HolidayType::TahunBaru,
        HolidayType::HariRaya,
        HolidayType::Dll,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HolidayType::TanggalMerah => "Tanggal Merah",
            HolidayType::TahunBaru => "Tahun Baru",
            HolidayType::HariRaya => "Hari Raya",
            HolidayType::Dll => "DLL",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HolidayType::Dll => "Dll.",
            other => other.as_str(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    pub id: RecordId,
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: HolidayType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HolidayPayload {
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: HolidayType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRef {
    pub id: RecordId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leave {
    pub id: RecordId,
    pub employee_id: RecordId,
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    pub reason: String,
    #[serde(default)]
    pub employee: Option<EmployeeRef>,
}

impl Leave {
    pub fn employee_name(&self) -> &str {
        self.employee
            .as_ref()
            .map(|employee| employee.name.as_str())
            .unwrap_or("-")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeavePayload {
    pub employee_id: RecordId,
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub employee_id: RecordId,
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
}

/// Body of the manual attendance upsert. Times are `HH:MM`; `None` is sent
/// as `null` so the backend clears the field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceUpsert {
    pub employee_id: RecordId,
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayAttendance {
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckPayload {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEmployee {
    pub id: RecordId,
    pub name: String,
    #[serde(default, deserialize_with = "wire_number::deserialize")]
    pub monthly_salary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    pub status: String,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default, deserialize_with = "wire_number::deserialize")]
    pub deduction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub employee: ReportEmployee,
    #[serde(deserialize_with = "wire_number::deserialize")]
    pub total_deduction: f64,
    #[serde(deserialize_with = "wire_number::deserialize")]
    pub final_salary: f64,
    #[serde(default)]
    pub daily_reports: Vec<DailyReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNAUTHORIZED")
    }

    pub fn geolocation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "GEOLOCATION_ERROR")
    }

    pub fn http(status: u16, msg: impl Into<String>) -> Self {
        Self::with_code(msg, &format!("HTTP_{status}"))
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }

    pub fn is_validation(&self) -> bool {
        self.code == "VALIDATION_ERROR"
    }

    /// `error`/`message` text sent by the backend, if any.
    pub fn server_message(&self) -> Option<&str> {
        let body = self.details.as_ref()?;
        body.get("error")
            .or_else(|| body.get("message"))
            .and_then(Value::as_str)
            .filter(|text| !text.trim().is_empty())
    }

    /// Text shown to the user. Transport failures and bare status errors use
    /// the screen's own `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        if self.is_unauthorized() {
            SESSION_EXPIRED_MESSAGE.to_string()
        } else if self.is_validation() || self.code == "GEOLOCATION_ERROR" {
            self.error.clone()
        } else {
            self.server_message().unwrap_or(fallback).to_string()
        }
    }
}

pub const SESSION_EXPIRED_MESSAGE: &str = "Silahkan Login Ulang !!!";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_id_accepts_numbers_and_strings() {
        let from_number: RecordId = serde_json::from_value(json!(42)).unwrap();
        let from_string: RecordId = serde_json::from_value(json!("42")).unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(serde_json::to_value(&from_number).unwrap(), json!(42));
        assert_eq!(
            serde_json::to_value(RecordId::new("emp-7")).unwrap(),
            json!("emp-7")
        );
        assert!(serde_json::from_value::<RecordId>(json!(true)).is_err());
    }

    #[test]
    fn holiday_reads_iso_timestamp_dates_and_type_names() {
        let holiday: Holiday = serde_json::from_value(json!({
            "id": 3,
            "date": "2024-12-25T00:00:00.000Z",
            "description": "Christmas",
            "type": "Hari Raya"
        }))
        .unwrap();
        assert_eq!(holiday.date, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
        assert_eq!(holiday.kind, HolidayType::HariRaya);

        let payload = HolidayPayload {
            date: holiday.date,
            description: holiday.description.clone(),
            kind: holiday.kind,
        };
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({ "date": "2024-12-25", "description": "Christmas", "type": "Hari Raya" })
        );
    }

    #[test]
    fn employee_salary_accepts_decimal_strings_and_hides_password() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 1,
            "name": "Budi",
            "username": "budi",
            "password": "$2b$10$hash",
            "monthlySalary": "1500000.00"
        }))
        .unwrap();
        assert_eq!(employee.monthly_salary, 1_500_000.0);
        let round_trip = serde_json::to_value(&employee).unwrap();
        assert!(round_trip.get("password").is_none());
    }

    #[test]
    fn upsert_serializes_missing_times_as_null() {
        let upsert = AttendanceUpsert {
            employee_id: RecordId::from(5),
            date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            check_in: Some("07:01".into()),
            check_out: None,
        };
        assert_eq!(
            serde_json::to_value(upsert).unwrap(),
            json!({ "employeeId": 5, "date": "2024-02-29", "checkIn": "07:01", "checkOut": null })
        );
    }

    #[test]
    fn category_paths_differ_only_by_suffix() {
        assert_eq!(EmployeeCategory::Regular.employees_path(), "/employees");
        assert_eq!(EmployeeCategory::Khusus.employees_path(), "/employees-khusus");
        assert_eq!(
            EmployeeCategory::Khusus.report_path(),
            "/report-khusus/report/monthly"
        );
        assert_eq!(EmployeeCategory::Regular.attendance_route(), "/employee");
        assert_eq!(
            EmployeeCategory::Khusus.terms_route(),
            "/terms-and-conditions-khusus"
        );
    }

    #[test]
    fn api_error_helpers_set_expected_codes() {
        assert_eq!(ApiError::validation("x").code, "VALIDATION_ERROR");
        assert_eq!(ApiError::request_failed("x").code, "REQUEST_FAILED");
        assert!(ApiError::unauthorized("x").is_unauthorized());
        assert_eq!(ApiError::http(404, "x").code, "HTTP_404");
        assert_eq!(format!("{}", ApiError::request_failed("boom")), "boom");
        let raw: String = ApiError::geolocation("no gps").into();
        assert_eq!(raw, "no gps");
    }

    #[test]
    fn user_message_prefers_backend_text_then_fallback() {
        let mut with_body = ApiError::http(400, "Request failed with status 400");
        with_body.details = Some(json!({ "message": "Tanggal sudah terdaftar" }));
        assert_eq!(with_body.user_message("fallback"), "Tanggal sudah terdaftar");

        let bare = ApiError::http(500, "Request failed with status 500");
        assert_eq!(
            bare.user_message("Failed to add/update holiday. Please try again."),
            "Failed to add/update holiday. Please try again."
        );
        assert_eq!(
            ApiError::request_failed("offline").user_message("Failed to load holidays."),
            "Failed to load holidays."
        );
        assert_eq!(
            ApiError::unauthorized("Unauthorized").user_message("x"),
            SESSION_EXPIRED_MESSAGE
        );
        assert_eq!(ApiError::validation("Nama wajib diisi").user_message("x"), "Nama wajib diisi");
    }
}
