use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

/// One foraging log entry: a mushroom or berry found somewhere on some day.
///
/// `id` is caller-assigned and must be unique within a store. `item_type` is
/// free text on the wire as `type`; "mushroom" and "berry" are the intended
/// values but nothing enforces them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForageItem {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub location: String,
    pub date: NaiveDate,
    pub is_edible: bool,
    pub notes: Option<String>,
    pub photo_url: Option<Url>,
}
