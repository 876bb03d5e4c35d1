use chrono::NaiveDate;

use crate::{
    api::{AttendanceRecord, AttendanceUpsert, RecordId},
    utils::format::time_of_day,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    CheckIn,
    CheckOut,
}

pub fn find_record<'a>(
    records: &'a [AttendanceRecord],
    employee_id: &RecordId,
    date: NaiveDate,
) -> Option<&'a AttendanceRecord> {
    records
        .iter()
        .find(|record| &record.employee_id == employee_id && record.date == date)
}

/// `HH:MM` value for a time input; empty when nothing is recorded.
pub fn cell_time(record: Option<&AttendanceRecord>, field: TimeField) -> String {
    let raw = record.and_then(|record| match field {
        TimeField::CheckIn => record.check_in.as_deref(),
        TimeField::CheckOut => record.check_out.as_deref(),
    });
    raw.and_then(time_of_day).unwrap_or_default()
}

/// Upsert body for one edited cell. The untouched field keeps its current
/// value; a cleared input is sent as `null`.
pub fn build_upsert(
    records: &[AttendanceRecord],
    employee_id: &RecordId,
    date: NaiveDate,
    field: TimeField,
    value: &str,
) -> AttendanceUpsert {
    let current = find_record(records, employee_id, date);
    let edited = Some(value.trim().to_string()).filter(|v| !v.is_empty());
    let keep = |other: TimeField| Some(cell_time(current, other)).filter(|v| !v.is_empty());
    let (check_in, check_out) = match field {
        TimeField::CheckIn => (edited, keep(TimeField::CheckOut)),
        TimeField::CheckOut => (keep(TimeField::CheckIn), edited),
    };
    AttendanceUpsert {
        employee_id: employee_id.clone(),
        date,
        check_in,
        check_out,
    }
}
