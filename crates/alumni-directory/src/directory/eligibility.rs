//! Alumni eligibility heuristics.
//!
//! Roster rows come from scraped profiles with no authoritative graduation
//! date. A person qualifies when one of their education entries names a
//! recognized institution and that entry's graduation, actual or projected
//! from the enrollment start, lies in the past.

use super::dates::{parse_year_month, project_graduation};
use super::record::{EducationSlot, PersonRecord};
use chrono::NaiveDateTime;

/// Lower-case name variants identifying the institution.
pub const INSTITUTIONS: &[&str] = &[
    "pune institute of computer technology",
    "savitribai phule pune university",
    "pict",
    "sppu",
    // older name of SPPU
    "university of pune",
];

/// Returns true when `institution` contains one of the [`INSTITUTIONS`]
/// variants, ignoring case.
pub fn matches_institution(institution: Option<&str>) -> bool {
    let Some(institution) = institution else {
        return false;
    };
    let lowered = institution.to_lowercase();
    INSTITUTIONS.iter().any(|variant| lowered.contains(variant))
}

/// Decides whether `record` counts as a graduated alumnus as of `now`.
pub fn is_alumni(record: &PersonRecord, now: NaiveDateTime) -> bool {
    let first = record.education(EducationSlot::First);
    let second = record.education(EducationSlot::Second);
    let first_matches = matches_institution(first.institution);
    let second_matches = matches_institution(second.institution);

    if !first_matches && !second_matches {
        return false;
    }

    if first_matches && check_graduation_status(first.end, first.start, now) {
        return true;
    }

    if second_matches {
        return check_graduation_status(second.end, second.start, now);
    }

    false
}

/// Evaluates one education entry's graduation against `now`.
///
/// Identical start and end tokens are read as an enrollment start (scrapers
/// often duplicate the only known year), so graduation is projected from it.
/// Otherwise an explicit end wins, then a projection from the start. With
/// nothing parseable the entry does not count.
pub fn check_graduation_status(
    end: Option<&str>,
    start: Option<&str>,
    now: NaiveDateTime,
) -> bool {
    if let (Some(end_token), Some(start_token)) = (end, start) {
        if end_token == start_token {
            if let Some(projected) = parse_year_month(start).and_then(project_graduation) {
                return projected < now;
            }
        }
    }

    if let Some(ended) = parse_year_month(end) {
        return ended < now;
    }

    if let Some(projected) = parse_year_month(start).and_then(project_graduation) {
        return projected < now;
    }

    false
}
