//! Roster record types
//!
//! One [`RosterRecord`] per roster entry. Records are stored remotely when the
//! document store is reachable and mirrored into local storage either way, so
//! the serialized field names are part of the persisted format and must stay
//! stable (camelCase, matching the mirror payload).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Rank codes valid for [`Occupation::Technical`] (soldier degrees).
pub const TECHNICAL_RANKS: [&str; 10] = [
    "rank1", "rank2", "rank3", "rank4", "rank5", "rank6", "rank7", "rank8", "rank9", "rank10",
];

/// Rank codes valid for [`Occupation::NonTechnical`] (officer degrees).
pub const NON_TECHNICAL_RANKS: [&str; 8] =
    ["mlazm", "mlazmAwal", "naqib", "rayd", "muqadam", "aqid", "amid", "liwa"];

/// Occupation category of a roster entry.
///
/// Legacy mirrors may carry a raw rank string here instead; the migration
/// pass normalizes those to one of these two values before records reach
/// typed code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Occupation {
    Technical,
    NonTechnical,
}

/// Active/inactive flag on a roster entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordStatus {
    #[default]
    Active,
    Inactive,
}

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterRecord {
    /// Opaque identifier; remote-store-assigned, or locally generated with a
    /// `local_` prefix when the record was created during a remote outage.
    /// Assigned exactly once, never changes.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Unique among all records the synchronizer is aware of. Checked at
    /// write time by the caller, not enforced by storage.
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    pub occupation: Occupation,
    /// Rank code from the vocabulary of `occupation`; UI-enforced only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suboccupation: Option<String>,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Caller-supplied record fields; everything except the identity and the
/// store-assigned timestamps. Input to save and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    pub occupation: Occupation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suboccupation: Option<String>,
    #[serde(default)]
    pub status: RecordStatus,
}

impl RecordDraft {
    /// Materialize a full record from this draft.
    ///
    /// Update semantics are full-replace: fields absent from the draft are
    /// lost, they are not merged from the previous record.
    pub fn into_record(
        self,
        id: String,
        created_at: Option<DateTime<Utc>>,
        updated_at: Option<DateTime<Utc>>,
    ) -> RosterRecord {
        RosterRecord {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            address: self.address,
            city: self.city,
            occupation: self.occupation,
            suboccupation: self.suboccupation,
            status: self.status,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_vocabularies_are_disjoint() {
        for rank in NON_TECHNICAL_RANKS {
            assert!(!TECHNICAL_RANKS.contains(&rank));
        }
    }

    #[test]
    fn occupation_serializes_to_mirror_format() {
        assert_eq!(serde_json::to_string(&Occupation::Technical).unwrap(), "\"technical\"");
        assert_eq!(serde_json::to_string(&Occupation::NonTechnical).unwrap(), "\"nonTechnical\"");
    }

    #[test]
    fn record_field_names_stay_camel_case() {
        let record = RosterRecord {
            id: "abc".into(),
            first_name: "Omar".into(),
            last_name: "Hassan".into(),
            email: "omar@example.com".into(),
            phone: String::new(),
            date_of_birth: None,
            gender: String::new(),
            address: String::new(),
            city: String::new(),
            occupation: Occupation::Technical,
            suboccupation: Some("rank3".into()),
            status: RecordStatus::Active,
            created_at: None,
            updated_at: None,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["firstName"], "Omar");
        assert_eq!(value["suboccupation"], "rank3");
        assert_eq!(value["status"], "active");
    }

    #[test]
    fn record_tolerates_missing_optional_fields() {
        let record: RosterRecord = serde_json::from_value(serde_json::json!({
            "id": "local_1_abc",
            "firstName": "Sara",
            "lastName": "Ali",
            "email": "sara@example.com",
            "occupation": "nonTechnical"
        }))
        .unwrap();

        assert_eq!(record.status, RecordStatus::Active);
        assert!(record.suboccupation.is_none());
        assert!(record.created_at.is_none());
    }
}
