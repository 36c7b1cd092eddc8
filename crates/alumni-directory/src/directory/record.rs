use serde::{Deserialize, Deserializer, Serialize};

/// One row of the alumni roster exactly as the record source returned it.
///
/// Every field is free text scraped from professional profiles. Blank values
/// are normalized to `None` at the deserialization boundary so downstream
/// logic only has to reason about presence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    #[serde(default)]
    pub full_name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub current_company: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub current_company_position: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub education_1: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub education_degree_1: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub education_start_1: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub education_end_1: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub education_fos_1: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub education_2: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub education_degree_2: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub education_start_2: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub education_end_2: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub education_fos_2: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub skills: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub location_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub headline: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub profile_url: Option<String>,
}

/// Which of the two education entries on a record is being inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationSlot {
    First,
    Second,
}

impl EducationSlot {
    pub const fn ordered() -> [Self; 2] {
        [Self::First, Self::Second]
    }
}

/// Borrowed view over one education entry of a [`PersonRecord`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Education<'a> {
    pub institution: Option<&'a str>,
    pub degree: Option<&'a str>,
    pub field_of_study: Option<&'a str>,
    pub start: Option<&'a str>,
    pub end: Option<&'a str>,
}

impl PersonRecord {
    pub fn education(&self, slot: EducationSlot) -> Education<'_> {
        match slot {
            EducationSlot::First => Education {
                institution: self.education_1.as_deref(),
                degree: self.education_degree_1.as_deref(),
                field_of_study: self.education_fos_1.as_deref(),
                start: self.education_start_1.as_deref(),
                end: self.education_end_1.as_deref(),
            },
            EducationSlot::Second => Education {
                institution: self.education_2.as_deref(),
                degree: self.education_degree_2.as_deref(),
                field_of_study: self.education_fos_2.as_deref(),
                start: self.education_start_2.as_deref(),
                end: self.education_end_2.as_deref(),
            },
        }
    }

    /// Fields consulted by free-text search, in the order they are tested.
    pub fn searchable_fields(&self) -> [Option<&str>; 12] {
        [
            Some(self.full_name.as_str()),
            self.current_company.as_deref(),
            self.current_company_position.as_deref(),
            self.education_1.as_deref(),
            self.education_2.as_deref(),
            self.education_degree_1.as_deref(),
            self.education_degree_2.as_deref(),
            self.education_fos_1.as_deref(),
            self.education_fos_2.as_deref(),
            self.location_name.as_deref(),
            self.headline.as_deref(),
            self.skills.as_deref(),
        ]
    }
}

impl Education<'_> {
    /// Lower-cased `degree + " " + field_of_study`, the text field-of-study
    /// keywords are matched against.
    pub fn discipline_text(&self) -> String {
        format!(
            "{} {}",
            self.degree.unwrap_or_default().to_lowercase(),
            self.field_of_study.unwrap_or_default().to_lowercase()
        )
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_json_fields_become_absent() {
        let record: PersonRecord = serde_json::from_str(
            r#"{"full_name":"Asha Rao","current_company":"  ","education_1":"PICT","email":null}"#,
        )
        .expect("record parses");

        assert_eq!(record.full_name, "Asha Rao");
        assert!(record.current_company.is_none());
        assert!(record.email.is_none());
        assert_eq!(record.education_1.as_deref(), Some("PICT"));
        assert!(record.education_2.is_none());
    }

    #[test]
    fn education_view_selects_slot_fields() {
        let record = PersonRecord {
            education_2: Some("Stanford University".into()),
            education_degree_2: Some("MS".into()),
            education_fos_2: Some("Computer Science".into()),
            education_end_2: Some("2024".into()),
            ..PersonRecord::default()
        };

        let first = record.education(EducationSlot::First);
        assert!(first.institution.is_none());
        assert_eq!(first.discipline_text(), " ");

        let second = record.education(EducationSlot::Second);
        assert_eq!(second.institution, Some("Stanford University"));
        assert_eq!(second.end, Some("2024"));
        assert_eq!(second.discipline_text(), "ms computer science");
    }
}
