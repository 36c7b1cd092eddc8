use serde::{Deserialize, Serialize};

/// Coarse job family derived from a role title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCategory {
    Engineering,
    Management,
    Data,
    Product,
    Other,
}

impl RoleCategory {
    /// Categories in match priority order; `Other` is the fallback.
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Engineering,
            Self::Management,
            Self::Data,
            Self::Product,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Management => "Management",
            Self::Data => "Data",
            Self::Product => "Product",
            Self::Other => "Other",
        }
    }

    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Engineering => &["engineer", "developer", "architect", "programmer"],
            Self::Management => &["manager", "lead", "head", "director", "cto", "ceo"],
            Self::Data => &["data", "analyst", "scientist", "ml", "ai"],
            Self::Product => &["product", "designer", "ux", "ui"],
            Self::Other => &[],
        }
    }

    /// First category (in priority order) with a keyword inside the
    /// lower-cased title.
    pub fn classify(title: Option<&str>) -> Self {
        let title = title.unwrap_or_default().to_lowercase();
        Self::ordered()
            .into_iter()
            .find(|category| {
                category
                    .keywords()
                    .iter()
                    .any(|keyword| title.contains(keyword))
            })
            .unwrap_or(Self::Other)
    }
}
