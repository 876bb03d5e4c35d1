use chrono::{Datelike, NaiveDate};

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

pub fn month_name_id(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| MONTHS_ID.get(idx as usize))
        .copied()
        .unwrap_or("")
}

/// `1500000.0` -> `Rp 1.500.000`. Fractions are rounded away.
pub fn format_rupiah(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{}", rounded.abs() as u64);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

/// Short list form, e.g. `25 Dec 2024`.
pub fn format_list_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Indonesian long form, e.g. `2 Januari 2024`.
pub fn format_long_id_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        month_name_id(date.month()),
        date.year()
    )
}

/// `HH:MM` part of a stored timestamp. The backend keeps ISO strings, so the
/// time sits at characters 11..16; bare `HH:MM[:SS]` values pass through.
pub fn time_of_day(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let candidate = if raw.len() >= 16 && raw.is_char_boundary(11) && raw.is_char_boundary(16) {
        &raw[11..16]
    } else if raw.len() >= 5 && raw.is_char_boundary(5) {
        &raw[..5]
    } else {
        return None;
    };
    let valid = candidate.as_bytes()[2] == b':'
        && candidate
            .bytes()
            .enumerate()
            .all(|(idx, b)| idx == 2 || b.is_ascii_digit());
    valid.then(|| candidate.to_string())
}

/// Display form of an optional timestamp; `-` when absent.
pub fn display_time(raw: Option<&str>) -> String {
    raw.and_then(time_of_day).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rupiah_groups_thousands_with_dots() {
        assert_eq!(format_rupiah(1_500_000.0), "Rp 1.500.000");
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(999.6), "Rp 1.000");
        assert_eq!(format_rupiah(25_000.0), "Rp 25.000");
        assert_eq!(format_rupiah(-50_000.0), "-Rp 50.000");
    }

    #[test]
    fn dates_render_in_list_and_long_forms() {
        assert_eq!(format_list_date(date(2024, 12, 25)), "25 Dec 2024");
        assert_eq!(format_list_date(date(2024, 3, 5)), "5 Mar 2024");
        assert_eq!(format_long_id_date(date(2024, 1, 2)), "2 Januari 2024");
        assert_eq!(format_long_id_date(date(2023, 8, 17)), "17 Agustus 2023");
        assert_eq!(month_name_id(0), "");
    }

    #[test]
    fn time_of_day_reads_iso_and_plain_values() {
        assert_eq!(
            time_of_day("2024-02-01T07:45:12.000Z").as_deref(),
            Some("07:45")
        );
        assert_eq!(time_of_day("2024-02-01 16:02:00").as_deref(), Some("16:02"));
        assert_eq!(time_of_day("08:15").as_deref(), Some("08:15"));
        assert_eq!(time_of_day("08:15:30").as_deref(), Some("08:15"));
        assert_eq!(time_of_day("late"), None);
        assert_eq!(display_time(None), "-");
        assert_eq!(display_time(Some("2024-02-01T07:45:12Z")), "07:45");
    }
}
