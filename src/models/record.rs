use serde::{Deserialize, Deserializer, Serialize};

/// One roster entry. Field names in the JSON source use the exact
/// space-separated keys ("Last Name", "First Name", ...) so the file stays
/// byte-compatible with existing data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Last Name", default, deserialize_with = "lenient_string")]
    pub last_name: String,

    #[serde(rename = "First Name", default, deserialize_with = "lenient_string")]
    pub first_name: String,

    #[serde(rename = "Start", default, deserialize_with = "lenient_string")]
    pub start: String,

    #[serde(rename = "End", default, deserialize_with = "lenient_string")]
    pub end: String,

    #[serde(rename = "Recurrence", default, deserialize_with = "lenient_string")]
    pub recurrence: String,

    #[serde(rename = "Code", default, deserialize_with = "lenient_string")]
    pub code: String,

    #[serde(rename = "Description", default, deserialize_with = "lenient_string")]
    pub description: String,

    #[serde(rename = "Remarks", default, deserialize_with = "lenient_string")]
    pub remarks: String,
}

/// Column headers in display order, matching `Record::fields`.
pub const HEADERS: [&str; 8] = [
    "Last Name",
    "First Name",
    "Start",
    "End",
    "Recurrence",
    "Code",
    "Description",
    "Remarks",
];

impl Record {
    /// All eight text fields in column order. This is the surface the
    /// search predicate and the renderers iterate over.
    pub fn fields(&self) -> [&str; 8] {
        [
            &self.last_name,
            &self.first_name,
            &self.start,
            &self.end,
            &self.recurrence,
            &self.code,
            &self.description,
            &self.remarks,
        ]
    }
}

/// Accept any JSON value for a field: strings pass through, everything else
/// (null, numbers, nested values) collapses to the empty string. A record
/// with a sloppy field must never fail the whole load.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}
