mod counts;
mod roles;

pub use counts::{CategoryCounts, CountEntry};
pub use roles::RoleCategory;

use super::record::PersonRecord;
use serde::Serialize;
use std::cmp::Ordering;

pub const TOP_EMPLOYERS: usize = 10;
pub const TOP_LOCATIONS: usize = 5;

/// Aggregate view over the eligible alumni, recomputed on every call.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryStatistics {
    pub total_alumni: usize,
    /// Mean years since graduation; `None` for an empty roster.
    pub average_tenure_years: Option<f64>,
    pub unique_employers: usize,
    pub top_employers: Vec<CountEntry>,
    pub top_locations: Vec<CountEntry>,
    pub graduation_trend: Vec<CountEntry>,
    pub role_distribution: Vec<RoleCountEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleCountEntry {
    pub category: RoleCategory,
    pub label: &'static str,
    pub count: usize,
}

impl DirectoryStatistics {
    pub fn compute(alumni: &[PersonRecord], current_year: i32) -> Self {
        let employers = employer_counts(alumni);

        Self {
            total_alumni: alumni.len(),
            average_tenure_years: average_tenure(alumni, current_year),
            unique_employers: employers.len(),
            top_employers: employers.top(TOP_EMPLOYERS),
            top_locations: location_counts(alumni).top(TOP_LOCATIONS),
            graduation_trend: graduation_trend(alumni),
            role_distribution: role_distribution(alumni),
        }
    }
}

pub fn employer_counts(alumni: &[PersonRecord]) -> CategoryCounts {
    CategoryCounts::tally(alumni.iter().map(|r| r.current_company.as_deref()))
}

pub fn location_counts(alumni: &[PersonRecord]) -> CategoryCounts {
    CategoryCounts::tally(alumni.iter().map(|r| r.location_name.as_deref()))
}

/// Distinct non-empty employers, compared case-sensitively.
pub fn unique_employer_count(alumni: &[PersonRecord]) -> usize {
    employer_counts(alumni).len()
}

/// Key used to group a record by graduation year: the text before the first
/// `.` of `education_end_1`, or the whole value when that prefix is empty or
/// there is no `.`.
pub fn graduation_year_key(record: &PersonRecord) -> Option<&str> {
    let raw = record.education_end_1.as_deref()?.trim();
    if raw.is_empty() {
        return None;
    }

    match raw.split_once('.') {
        Some((year, _)) if !year.trim().is_empty() => Some(year.trim()),
        _ => Some(raw),
    }
}

/// The graduation year as an integer, when the key is numeric.
pub fn graduation_year(record: &PersonRecord) -> Option<i32> {
    graduation_year_key(record)?.parse().ok()
}

/// Graduate counts per year key, ascending by numeric year. Keys that are
/// not integers follow the numeric ones in lexicographic order.
pub fn graduation_trend(alumni: &[PersonRecord]) -> Vec<CountEntry> {
    let counts = CategoryCounts::tally(alumni.iter().map(graduation_year_key));
    let mut trend = counts.entries();
    trend.sort_by(|a, b| compare_year_keys(&a.key, &b.key));
    trend
}

fn compare_year_keys(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Alumni per role category, in category priority order, omitting empty
/// categories.
pub fn role_distribution(alumni: &[PersonRecord]) -> Vec<RoleCountEntry> {
    let mut totals = [0usize; 5];
    for record in alumni {
        let category = RoleCategory::classify(record.current_company_position.as_deref());
        if let Some(position) = RoleCategory::ordered().iter().position(|c| *c == category) {
            totals[position] += 1;
        }
    }

    RoleCategory::ordered()
        .into_iter()
        .zip(totals)
        .filter(|(_, count)| *count > 0)
        .map(|(category, count)| RoleCountEntry {
            category,
            label: category.label(),
            count,
        })
        .collect()
}

/// Mean of `current_year - graduation_year` across the roster.
///
/// Records without a numeric graduation year add nothing to the sum but are
/// still counted in the divisor, so sparse data drags the mean down.
pub fn average_tenure(alumni: &[PersonRecord], current_year: i32) -> Option<f64> {
    if alumni.is_empty() {
        return None;
    }

    let total: i64 = alumni
        .iter()
        .filter_map(graduation_year)
        .map(|year| i64::from(current_year) - i64::from(year))
        .sum();

    Some(total as f64 / alumni.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alum(company: Option<&str>, location: Option<&str>, end: Option<&str>) -> PersonRecord {
        PersonRecord {
            full_name: "Alum".into(),
            current_company: company.map(str::to_string),
            location_name: location.map(str::to_string),
            education_end_1: end.map(str::to_string),
            ..PersonRecord::default()
        }
    }

    #[test]
    fn employer_histogram_and_unique_count() {
        let alumni = vec![
            alum(Some("A"), None, None),
            alum(Some("A"), None, None),
            alum(Some("B"), None, None),
        ];

        let counts = employer_counts(&alumni);
        assert_eq!(counts.get("A"), Some(2));
        assert_eq!(counts.get("B"), Some(1));
        let order: Vec<_> = counts.top(TOP_EMPLOYERS).into_iter().map(|e| e.key).collect();
        assert_eq!(order, vec!["A", "B"]);
        assert_eq!(unique_employer_count(&alumni), 2);
    }

    #[test]
    fn employer_ranking_is_capped_at_ten() {
        // Twelve employers: the first two appear twice, the rest once, so
        // positions 10 and 11 tie at one alum each.
        let mut names: Vec<String> = (1..=12).map(|n| format!("Employer {n}")).collect();
        names.push("Employer 1".into());
        names.push("Employer 2".into());
        let alumni: Vec<_> = names
            .iter()
            .map(|name| alum(Some(name.as_str()), None, None))
            .collect();

        let stats = DirectoryStatistics::compute(&alumni, 2026);
        assert_eq!(stats.top_employers.len(), TOP_EMPLOYERS);
        assert_eq!(stats.unique_employers, 12);
        assert_eq!(stats.top_employers[0].key, "Employer 1");
        assert_eq!(stats.top_employers[1].key, "Employer 2");
        assert_eq!(stats.top_employers[9].key, "Employer 10");
        assert!(stats
            .top_employers
            .iter()
            .all(|entry| entry.key != "Employer 11" && entry.key != "Employer 12"));
    }

    #[test]
    fn location_ranking_is_capped_at_five() {
        let alumni: Vec<_> = ["Pune", "Mumbai", "Pune", "Bengaluru", "Hyderabad", "Delhi", "Seattle"]
            .into_iter()
            .map(|city| alum(None, Some(city), None))
            .collect();

        let stats = DirectoryStatistics::compute(&alumni, 2026);
        assert_eq!(stats.top_locations.len(), TOP_LOCATIONS);
        assert_eq!(stats.top_locations[0].key, "Pune");
        assert_eq!(stats.top_locations[0].count, 2);
        assert_eq!(stats.top_locations[4].key, "Delhi");
    }

    #[test]
    fn year_key_prefers_text_before_dot() {
        assert_eq!(graduation_year_key(&alum(None, None, Some("2019.05"))), Some("2019"));
        assert_eq!(graduation_year_key(&alum(None, None, Some("2021"))), Some("2021"));
        assert_eq!(graduation_year_key(&alum(None, None, Some(".05"))), Some(".05"));
        assert_eq!(graduation_year_key(&alum(None, None, None)), None);
        assert_eq!(graduation_year(&alum(None, None, Some("2019.05"))), Some(2019));
        assert_eq!(graduation_year(&alum(None, None, Some("present"))), None);
    }

    #[test]
    fn trend_sorts_numeric_years_then_other_keys() {
        let alumni = vec![
            alum(None, None, Some("2021")),
            alum(None, None, Some("present")),
            alum(None, None, Some("2019.06")),
            alum(None, None, Some("2021.05")),
            alum(None, None, Some("2009")),
        ];

        let trend = graduation_trend(&alumni);
        let keys: Vec<_> = trend.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["2009", "2019", "2021", "present"]);
        assert_eq!(trend[2].count, 2);
    }

    #[test]
    fn average_tenure_divides_by_full_roster() {
        let alumni = vec![alum(None, None, Some("2020")), alum(None, None, None)];
        assert_eq!(average_tenure(&alumni, 2026), Some(3.0));
    }

    #[test]
    fn average_tenure_is_absent_for_empty_roster() {
        assert_eq!(average_tenure(&[], 2026), None);
    }

    #[test]
    fn role_distribution_follows_priority_order() {
        let titles = ["Senior Developer", "Consultant", "Data Analyst", "SDE II", "Director"];
        let alumni: Vec<_> = titles
            .into_iter()
            .map(|title| PersonRecord {
                current_company_position: Some(title.into()),
                ..PersonRecord::default()
            })
            .collect();

        let distribution = role_distribution(&alumni);
        let summary: Vec<_> = distribution.iter().map(|e| (e.label, e.count)).collect();
        assert_eq!(
            summary,
            vec![("Engineering", 1), ("Management", 1), ("Data", 1), ("Other", 2)]
        );
    }
}
