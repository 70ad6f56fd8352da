use mongodb::bson::Bson;
use serde::Deserialize;

/// A distinct `userId` value and how many documents in the collection carry it.
#[derive(Debug, Clone, PartialEq)]
pub struct UserCount {
    pub user_id: Bson,
    pub count: u64,
}

/// A `users` document projected down to the fields the report prints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: Bson,
    #[serde(default)]
    pub name: Option<Bson>,
    #[serde(default)]
    pub email: Option<Bson>,
    #[serde(default)]
    pub role: Option<Bson>,
}

/// Render a BSON value the way the report prints it: strings without quotes,
/// ObjectIds as hex, null as `None`.
pub fn display_value(value: &Bson) -> String {
    match value {
        Bson::String(s) => s.clone(),
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::Null | Bson::Undefined => "None".to_string(),
        other => other.to_string(),
    }
}

/// Like [`display_value`] for fields that may be missing from the document.
pub fn display_optional(value: Option<&Bson>) -> String {
    value.map(display_value).unwrap_or_else(|| "None".to_string())
}
