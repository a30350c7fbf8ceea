//! Wire types for the gender-gap statistics service and the domain vocabulary
//! shared by every view.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentinel snapshot identifier resolved server-side to the newest dataset.
pub const LATEST_SNAPSHOT: &str = "latest";

/// Default lower bound for the year-of-birth range filter.
pub const DEFAULT_YEAR_START: i32 = 1600;

const FEMALE_QID: &str = "Q6581072";
const MALE_QID: &str = "Q6581097";

/// The gender categories the dashboard distinguishes. `Female` and `Male` map
/// to their fixed knowledge-graph identifiers; every other identifier falls
/// into the `Other` bucket. Presentation order is female, male, other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenderCategory {
    Female,
    Male,
    Other,
}

impl GenderCategory {
    pub const ORDERED: [GenderCategory; 3] = [Self::Female, Self::Male, Self::Other];

    /// Bucket an arbitrary gender identifier.
    pub fn of(identifier: &str) -> Self {
        match identifier {
            FEMALE_QID => Self::Female,
            MALE_QID => Self::Male,
            _ => Self::Other,
        }
    }

    /// Position within [`Self::ORDERED`].
    pub fn index(self) -> usize {
        match self {
            Self::Female => 0,
            Self::Male => 1,
            Self::Other => 2,
        }
    }

    pub fn series_name(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
            Self::Other => "other genders",
        }
    }
}

/// Which entities count toward the statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Population {
    /// Entities with at least one cross-project link (typically a Wikipedia
    /// biography article).
    #[default]
    GteOneSitelink,
    /// Every human entity in the knowledge graph.
    AllWikidata,
}

impl Population {
    pub fn as_param(self) -> &'static str {
        match self {
            Self::GteOneSitelink => "gte_one_sitelink",
            Self::AllWikidata => "all_wikidata",
        }
    }

    pub fn display_label(self) -> &'static str {
        match self {
            Self::GteOneSitelink => "With at least one article",
            Self::AllWikidata => "All of Wikidata",
        }
    }
}

/// Grouping property for one metric request; doubles as the key column of the
/// resulting table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyField {
    DateOfBirth,
    Country,
    Language,
}

impl PropertyField {
    pub const ALL: [PropertyField; 3] = [Self::DateOfBirth, Self::Country, Self::Language];

    pub fn as_param(self) -> &'static str {
        match self {
            Self::DateOfBirth => "date_of_birth",
            Self::Country => "country",
            Self::Language => "language",
        }
    }

    pub fn display_label(self) -> &'static str {
        match self {
            Self::DateOfBirth => "Year of birth",
            Self::Country => "Country",
            Self::Language => "Language",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_param() == value)
    }
}

/// A dated version of the underlying dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: u64,
    /// `YYYY-MM-DD`.
    pub date: String,
}

/// The parameters of one metrics request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricQuery {
    pub bias: &'static str,
    pub metric: &'static str,
    /// `"latest"` or a snapshot date; compacted to `YYYYMMDD` on the wire.
    pub snapshot: String,
    pub population: Population,
    pub property: PropertyField,
    pub label_lang: String,
}

impl MetricQuery {
    /// The one query family the dashboard issues: the gender gap metric,
    /// grouped by `property`.
    pub fn gender_gap(snapshot: String, population: Population, property: PropertyField) -> Self {
        Self {
            bias: "gender",
            metric: "gap",
            snapshot,
            population,
            property,
            label_lang: "en".to_string(),
        }
    }
}

/// One aggregate data point as returned by the service. Immutable once
/// received; everything the views render is derived from these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Raw grouping values keyed by property-field name (e.g. a bare year).
    #[serde(default)]
    pub item: BTreeMap<String, String>,
    /// Display labels keyed by property-field name.
    #[serde(default)]
    pub item_label: BTreeMap<String, String>,
    /// Count per gender identifier.
    pub values: BTreeMap<String, u64>,
}

impl MetricRecord {
    /// Display label for the grouping field, falling back to the raw value.
    pub fn group_label(&self, field: PropertyField) -> Option<&str> {
        let key = field.as_param();
        self.item_label
            .get(key)
            .or_else(|| self.item.get(key))
            .map(String::as_str)
    }

    /// Raw grouping value, falling back to the display label.
    pub fn raw_value(&self, field: PropertyField) -> Option<&str> {
        let key = field.as_param();
        self.item
            .get(key)
            .or_else(|| self.item_label.get(key))
            .map(String::as_str)
    }

    /// Year of birth parsed from the raw grouping value, if present.
    pub fn year(&self) -> Option<i32> {
        self.raw_value(PropertyField::DateOfBirth)?
            .trim()
            .parse()
            .ok()
    }

    /// Sum of all gender counts.
    pub fn total(&self) -> u64 {
        self.values.values().sum()
    }

    /// Sum of the counts that fall into `category`.
    pub fn count_for(&self, category: GenderCategory) -> u64 {
        self.values
            .iter()
            .filter(|(id, _)| GenderCategory::of(id) == category)
            .map(|(_, count)| count)
            .sum()
    }
}

/// Response metadata accompanying every metrics payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Gender identifier → display label (e.g. `Q6581072` → `"women"`).
    pub bias_labels: BTreeMap<String, String>,
    /// Date of the snapshot the metrics were computed from.
    pub snapshot: String,
    /// Fraction of entities for which the grouping field is known, in [0, 1].
    pub coverage: f64,
}

/// One complete metrics response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapPayload {
    pub meta: Meta,
    pub metrics: Vec<MetricRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_bucket_known_and_unknown_identifiers() {
        assert_eq!(GenderCategory::of("Q6581072"), GenderCategory::Female);
        assert_eq!(GenderCategory::of("Q6581097"), GenderCategory::Male);
        assert_eq!(GenderCategory::of("Q1052281"), GenderCategory::Other);
        assert_eq!(GenderCategory::of(""), GenderCategory::Other);
    }

    #[test]
    fn category_order_is_female_male_other() {
        let names: Vec<_> = GenderCategory::ORDERED
            .iter()
            .map(|c| c.series_name())
            .collect();
        assert_eq!(names, ["female", "male", "other genders"]);
        for (position, category) in GenderCategory::ORDERED.iter().enumerate() {
            assert_eq!(category.index(), position);
        }
    }

    #[test]
    fn record_deserializes_from_service_json() {
        let record: MetricRecord = serde_json::from_str(
            r#"{
                "item": {"date_of_birth": "1900"},
                "item_label": {"date_of_birth": "1900"},
                "values": {"Q6581072": 80, "Q6581097": 20}
            }"#,
        )
        .expect("record should deserialize");

        assert_eq!(record.year(), Some(1900));
        assert_eq!(record.total(), 100);
        assert_eq!(record.count_for(GenderCategory::Female), 80);
        assert_eq!(record.count_for(GenderCategory::Male), 20);
        assert_eq!(record.count_for(GenderCategory::Other), 0);
    }

    #[test]
    fn group_label_prefers_display_label() {
        let record: MetricRecord = serde_json::from_str(
            r#"{
                "item": {"country": "Q142"},
                "item_label": {"country": "France"},
                "values": {"Q6581097": 1}
            }"#,
        )
        .expect("record should deserialize");

        assert_eq!(record.group_label(PropertyField::Country), Some("France"));
        assert_eq!(record.raw_value(PropertyField::Country), Some("Q142"));
    }

    #[test]
    fn property_fields_round_trip_through_params() {
        for field in PropertyField::ALL {
            assert_eq!(PropertyField::from_param(field.as_param()), Some(field));
        }
        assert_eq!(PropertyField::from_param("occupation"), None);
    }

    #[test]
    fn missing_item_maps_default_to_empty() {
        let record: MetricRecord =
            serde_json::from_str(r#"{"values": {"Q6581097": 3}}"#).expect("should deserialize");
        assert_eq!(record.year(), None);
        assert_eq!(record.group_label(PropertyField::DateOfBirth), None);
    }
}
