//! Agency record

use serde::Deserialize;
use serde::Serialize;

/// A recruiting agency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Agency {
    pub id: i64,
    pub name: String,
}

/// Body for agency create and rename calls.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct AgencyBody<'a> {
    pub name: &'a str,
}
