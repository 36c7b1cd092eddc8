pub mod dates;
pub mod eligibility;
pub mod filters;
pub mod record;
pub mod source;
pub mod stats;

pub use eligibility::{is_alumni, INSTITUTIONS};
pub use filters::{filter_alumni, FilterCriteria};
pub use record::{EducationSlot, PersonRecord};
pub use source::{InMemorySource, RecordSource, RecordSourceError, RosterFile, RosterFormat};
pub use stats::{DirectoryStatistics, RoleCategory};

use chrono::{Datelike, NaiveDateTime};
use tracing::debug;

/// The eligible alumni drawn from one snapshot of the roster.
///
/// Built once per fetch; filtering and statistics are derived from it on
/// demand and never cached.
#[derive(Debug, Clone)]
pub struct AlumniDirectory {
    alumni: Vec<PersonRecord>,
    roster_size: usize,
    evaluated_at: NaiveDateTime,
}

impl AlumniDirectory {
    /// Classifies `records` as of `now`, keeping eligible rows in input order.
    pub fn from_records(records: Vec<PersonRecord>, now: NaiveDateTime) -> Self {
        let roster_size = records.len();
        let alumni: Vec<_> = records
            .into_iter()
            .filter(|record| is_alumni(record, now))
            .collect();

        debug!(
            roster = roster_size,
            eligible = alumni.len(),
            "classified alumni roster"
        );

        Self {
            alumni,
            roster_size,
            evaluated_at: now,
        }
    }

    pub fn load(source: &dyn RecordSource, now: NaiveDateTime) -> Result<Self, RecordSourceError> {
        let records = source.fetch_all()?;
        Ok(Self::from_records(records, now))
    }

    pub fn alumni(&self) -> &[PersonRecord] {
        &self.alumni
    }

    /// Number of rows the source returned, eligible or not.
    pub fn roster_size(&self) -> usize {
        self.roster_size
    }

    pub fn evaluated_at(&self) -> NaiveDateTime {
        self.evaluated_at
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<PersonRecord> {
        filter_alumni(&self.alumni, criteria)
    }

    /// Statistics using the evaluation instant's year for tenure.
    pub fn statistics(&self) -> DirectoryStatistics {
        DirectoryStatistics::compute(&self.alumni, self.evaluated_at.year())
    }
}
