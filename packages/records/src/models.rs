//! # Student record model
//!
//! The single entity Rollcall manages. A [`StudentRecord`] pairs the
//! store-assigned [`RecordId`] with the document body, [`StudentFields`].
//!
//! ## Wire format
//!
//! Documents are JSON objects with camelCase keys (`firstName`, `rollNumber`,
//! `admissionDate`, ...). The collection is schemaless, so reading is lenient:
//!
//! - every key may be absent; required text fields default to `""` and
//!   optional fields to `None`,
//! - an optional field holding an empty string reads as `None`,
//! - numbers and booleans read as their text; arrays and objects as absent,
//! - an unparseable gender or date reads as `None` (logged at `warn`),
//! - `parentName` is the older name of `middleName`; when a document has
//!   both, `middleName` wins.
//!
//! Writing omits `None` fields entirely.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::draft::Field;

/// Opaque document identifier assigned by the store on insert.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names neither gender.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender `{0}`")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            other => Err(UnknownGender(other.to_string())),
        }
    }
}

/// Body of a student document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredFields")]
pub struct StudentFields {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    pub contact_number: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub class: String,
    pub section: String,
    pub roll_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admission_date: Option<NaiveDate>,
}

/// A document as found in the store: every value optional and loosely typed.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoredFields {
    #[serde(deserialize_with = "loose_text")]
    first_name: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    last_name: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    middle_name: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    parent_name: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    gender: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    dob: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    contact_number: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    email: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    address: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    class: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    section: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    roll_number: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    admission_date: Option<String>,
}

impl From<StoredFields> for StudentFields {
    fn from(stored: StoredFields) -> Self {
        Self {
            first_name: stored.first_name.unwrap_or_default(),
            last_name: stored.last_name.unwrap_or_default(),
            middle_name: present(stored.middle_name).or_else(|| present(stored.parent_name)),
            gender: parsed("gender", stored.gender),
            dob: parsed("dob", stored.dob),
            contact_number: stored.contact_number.unwrap_or_default(),
            email: stored.email.unwrap_or_default(),
            address: present(stored.address),
            class: stored.class.unwrap_or_default(),
            section: stored.section.unwrap_or_default(),
            roll_number: stored.roll_number.unwrap_or_default(),
            admission_date: parsed("admissionDate", stored.admission_date),
        }
    }
}

impl StudentFields {
    /// "First Last", as shown in the table and the delete confirmation.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Display value of one field, or `None` when the document lacks it.
    pub fn value_of(&self, field: Field) -> Option<String> {
        let text = |s: &String| (!s.is_empty()).then(|| s.clone());
        match field {
            Field::FirstName => text(&self.first_name),
            Field::MiddleName => self.middle_name.clone(),
            Field::LastName => text(&self.last_name),
            Field::Gender => self.gender.map(|g| g.to_string()),
            Field::Dob => self.dob.map(|d| d.to_string()),
            Field::ContactNumber => text(&self.contact_number),
            Field::Email => text(&self.email),
            Field::Address => self.address.clone(),
            Field::Class => text(&self.class),
            Field::Section => text(&self.section),
            Field::RollNumber => text(&self.roll_number),
            Field::AdmissionDate => self.admission_date.map(|d| d.to_string()),
        }
    }
}

/// A student document together with its id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: StudentFields,
}

impl StudentRecord {
    pub fn new(id: RecordId, fields: StudentFields) -> Self {
        Self { id, fields }
    }

    pub fn full_name(&self) -> String {
        self.fields.full_name()
    }
}

/// Blank text counts as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Unreadable values are dropped so one bad key does not hide the record.
fn parsed<T>(key: &str, value: Option<String>) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = present(value)?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(key, value = %raw, "ignoring unreadable field: {e}");
            None
        }
    }
}

/// Strings as-is, numbers and booleans as their text, anything else as absent.
fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct LooseText;

    impl<'de> Visitor<'de> for LooseText {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a text value")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_any(self)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(None)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(None)
        }
    }

    deserializer.deserialize_any(LooseText)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_legacy_document() {
        let doc = r#"{
            "id": "abc",
            "firstName": "Asha",
            "lastName": "Rao",
            "parentName": "K",
            "gender": "",
            "dob": "2011-04-09",
            "contactNumber": "9876543210",
            "email": "asha@school.in",
            "class": "7",
            "section": "B",
            "rollNumber": "12",
            "admissionDate": ""
        }"#;
        let record: StudentRecord = serde_json::from_str(doc).unwrap();
        assert_eq!(record.id.as_str(), "abc");
        assert_eq!(record.fields.middle_name.as_deref(), Some("K"));
        assert_eq!(record.fields.gender, None);
        assert_eq!(record.fields.dob, NaiveDate::from_ymd_opt(2011, 4, 9));
        assert_eq!(record.fields.address, None);
        assert_eq!(record.fields.admission_date, None);
    }

    #[test]
    fn test_missing_fields_default() {
        let fields: StudentFields = serde_json::from_str(r#"{"firstName":"Li"}"#).unwrap();
        assert_eq!(fields.first_name, "Li");
        assert_eq!(fields.last_name, "");
        assert_eq!(fields.roll_number, "");
        assert!(fields.middle_name.is_none());
        assert!(fields.dob.is_none());
    }

    #[test]
    fn test_writes_camel_case_without_absent_fields() {
        let fields = StudentFields {
            first_name: "Li".into(),
            roll_number: "4".into(),
            gender: Some(Gender::Female),
            ..Default::default()
        };
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["firstName"], "Li");
        assert_eq!(json["rollNumber"], "4");
        assert_eq!(json["gender"], "Female");
        assert!(json.get("middleName").is_none());
        assert!(json.get("dob").is_none());
    }

    #[test]
    fn test_unreadable_values_read_as_absent() {
        let fields: StudentFields = serde_json::from_str(
            r#"{"firstName":"Li","gender":"Other","dob":"09/04/2011","address":{"line":1}}"#,
        )
        .unwrap();
        assert_eq!(fields.first_name, "Li");
        assert_eq!(fields.gender, None);
        assert_eq!(fields.dob, None);
        assert_eq!(fields.address, None);
    }

    #[test]
    fn test_middle_name_wins_over_parent_name() {
        let doc = r#"{"id":"x","firstName":"Asha","parentName":"P","middleName":"M","rollNumber":"3"}"#;
        let record: StudentRecord = serde_json::from_str(doc).unwrap();
        assert_eq!(record.fields.middle_name.as_deref(), Some("M"));

        let doc = r#"{"id":"x","parentName":"P","middleName":""}"#;
        let record: StudentRecord = serde_json::from_str(doc).unwrap();
        assert_eq!(record.fields.middle_name.as_deref(), Some("P"));
    }

    #[test]
    fn test_numbers_read_as_text() {
        let doc = r#"[
            {"id":"a","firstName":"Asha","rollNumber":"1"},
            {"id":"b","firstName":"Ben","rollNumber":2,"contactNumber":9876543210,"class":null}
        ]"#;
        let records: Vec<StudentRecord> = serde_json::from_str(doc).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].fields.roll_number, "2");
        assert_eq!(records[1].fields.contact_number, "9876543210");
        assert_eq!(records[1].fields.class, "");
    }

    #[test]
    fn test_round_trip_drops_legacy_key() {
        let fields: StudentFields =
            serde_json::from_str(r#"{"parentName":"P","firstName":"Asha"}"#).unwrap();
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["middleName"], "P");
        assert!(json.get("parentName").is_none());
    }

    #[test]
    fn test_value_of_reports_absent_fields() {
        let fields = StudentFields {
            first_name: "Li".into(),
            ..Default::default()
        };
        assert_eq!(fields.value_of(Field::FirstName).as_deref(), Some("Li"));
        assert_eq!(fields.value_of(Field::Address), None);
        assert_eq!(fields.value_of(Field::Email), None);
    }
}
