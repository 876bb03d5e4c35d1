use crate::api::{MonthlyReport, RecordId};

/// Keeps `current` when it is still in `reports`, otherwise falls back to the
/// first report, or to nothing when the set is empty.
pub fn resolve_selection(current: Option<&RecordId>, reports: &[MonthlyReport]) -> Option<RecordId> {
    if let Some(id) = current {
        if reports.iter().any(|report| &report.employee.id == id) {
            return Some(id.clone());
        }
    }
    reports.first().map(|report| report.employee.id.clone())
}

pub fn selected_report<'a>(
    reports: &'a [MonthlyReport],
    selected: Option<&RecordId>,
) -> Option<&'a MonthlyReport> {
    let id = selected?;
    reports.iter().find(|report| &report.employee.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ReportEmployee;

    fn report(id: i64, name: &str) -> MonthlyReport {
        MonthlyReport {
            employee: ReportEmployee {
                id: RecordId::from(id),
                name: name.into(),
                monthly_salary: 2_000_000.0,
            },
            total_deduction: 0.0,
            final_salary: 2_000_000.0,
            daily_reports: Vec::new(),
        }
    }

    #[test]
    fn keeps_selection_present_in_new_set() {
        let reports = vec![report(1, "Ani"), report(2, "Budi")];
        assert_eq!(
            resolve_selection(Some(&RecordId::from(2)), &reports),
            Some(RecordId::from(2))
        );
    }

    #[test]
    fn falls_back_to_first_when_selection_disappears() {
        let reports = vec![report(5, "Citra"), report(6, "Dewi")];
        assert_eq!(
            resolve_selection(Some(&RecordId::from(2)), &reports),
            Some(RecordId::from(5))
        );
        assert_eq!(resolve_selection(None, &reports), Some(RecordId::from(5)));
    }

    #[test]
    fn empty_set_clears_selection() {
        assert_eq!(resolve_selection(Some(&RecordId::from(1)), &[]), None);
    }

    #[test]
    fn selected_report_matches_by_id_text() {
        let reports = vec![report(1, "Ani"), report(2, "Budi")];
        let found = selected_report(&reports, Some(&RecordId::from("2")));
        assert_eq!(found.map(|r| r.employee.name.as_str()), Some("Budi"));
        assert!(selected_report(&reports, None).is_none());
    }
}
