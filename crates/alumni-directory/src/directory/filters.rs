use super::eligibility::matches_institution;
use super::record::{EducationSlot, PersonRecord};
use serde::{Deserialize, Deserializer, Serialize};

/// Field-of-study tags offered by the directory and the keywords that place
/// free-text degree/field strings into them.
pub const FIELD_OF_STUDY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "computer",
        &[
            "computer",
            "cs",
            "cse",
            "comp",
            "computers",
            "computer science",
            "computer engineering",
            "computer software",
            "computer technology",
            "computer simulation",
            "computer systems",
            "comp sci",
            "computer & information",
            "computer sci",
            "compuer science",
        ],
    ),
    (
        "it",
        &[
            "information technology",
            "it",
            "informatiom technology",
            "information technologies",
            "i.t.",
        ],
    ),
    (
        "entc",
        &[
            "electronics",
            "telecommunication",
            "entc",
            "e&tc",
            "e &tc",
            "electronics and telecommunication",
            "electronic and telecommunication",
            "electronics & telecommunication",
            "electronics and communications",
            "electrical, electronics and communications",
            "electronics and telecommunications",
            "electronic and computer",
            "vlsi",
        ],
    ),
    (
        "management",
        &[
            "business",
            "management",
            "mba",
            "finance",
            "marketing",
            "operations",
            "business administration",
            "business analytics",
            "business management",
        ],
    ),
];

/// Keywords for a field-of-study tag. Unknown tags have no keywords, so
/// filtering on them excludes every record.
pub fn field_of_study_keywords(tag: &str) -> &'static [&'static str] {
    FIELD_OF_STUDY_KEYWORDS
        .iter()
        .find(|(known, _)| *known == tag)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}

/// Active directory filters. A `None` field does not constrain results;
/// empty strings sent by clients are read as `None`. Whitespace is a real
/// search term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default, deserialize_with = "empty_text_as_none")]
    pub search: Option<String>,
    #[serde(default, deserialize_with = "empty_text_as_none")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "empty_text_as_none")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "empty_text_as_none")]
    pub field_of_study: Option<String>,
    #[serde(default, deserialize_with = "flag_as_bool")]
    pub further_studies: Option<bool>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.company.is_none()
            && self.role.is_none()
            && self.field_of_study.is_none()
            && self.further_studies.is_none()
    }

    /// True when `record` satisfies every active criterion.
    pub fn matches(&self, record: &PersonRecord) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let hit = record
                .searchable_fields()
                .into_iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }

        if let Some(company) = &self.company {
            if !contains_ignoring_case(record.current_company.as_deref(), company) {
                return false;
            }
        }

        if let Some(role) = &self.role {
            if !contains_ignoring_case(record.current_company_position.as_deref(), role) {
                return false;
            }
        }

        if let Some(tag) = &self.field_of_study {
            if !matches_field_of_study(record, tag) {
                return false;
            }
        }

        if let Some(wanted) = self.further_studies {
            if is_pursuing_further_studies(record) != wanted {
                return false;
            }
        }

        true
    }
}

/// Keeps the records matching `criteria`, preserving input order.
pub fn filter_alumni(records: &[PersonRecord], criteria: &FilterCriteria) -> Vec<PersonRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

/// Whether the second education entry names one of the institutions.
pub fn is_pursuing_further_studies(record: &PersonRecord) -> bool {
    matches_institution(record.education(EducationSlot::Second).institution)
}

fn matches_field_of_study(record: &PersonRecord, tag: &str) -> bool {
    let keywords = field_of_study_keywords(tag);
    let disciplines = EducationSlot::ordered().map(|slot| record.education(slot).discipline_text());

    keywords.iter().any(|keyword| {
        disciplines
            .iter()
            .any(|discipline| discipline.contains(keyword))
    })
}

fn empty_text_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.is_empty()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

/// Accepts JSON booleans as well as `true`/`false`/`yes`/`no` text, which is
/// what query strings and the directory's select inputs send.
fn flag_as_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(flag) = Option::<Flag>::deserialize(deserializer)? else {
        return Ok(None);
    };

    match flag {
        Flag::Bool(value) => Ok(Some(value)),
        Flag::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "true" | "yes" => Ok(Some(true)),
            "false" | "no" => Ok(Some(false)),
            other => Err(serde::de::Error::custom(format!(
                "expected yes/no or true/false, got '{other}'"
            ))),
        },
    }
}

fn contains_ignoring_case(field: Option<&str>, needle: &str) -> bool {
    field
        .map(|value| value.to_lowercase().contains(&needle.to_lowercase()))
        .unwrap_or(false)
}
