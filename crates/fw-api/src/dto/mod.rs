//! Request and response types for the HTTP API.
//!
//! Bodies and query parameters use camelCase on the wire. The `parentID`
//! query parameter names the parent an administrator acts for; regular
//! parents never need it.

pub mod child;
pub mod milestone;
pub mod parent;
pub mod word;

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

/// Query parameters for routes scoped to a single parent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScopeQuery {
    /// Parent the caller acts for. Administrators only.
    #[serde(rename = "parentID")]
    pub parent_id: Option<Uuid>,
}

/// Query parameters for date range listings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeQuery {
    /// Range start, inclusive.
    pub start_date: Option<NaiveDate>,
    /// Range end, inclusive.
    pub end_date: Option<NaiveDate>,
    /// Parent the caller acts for. Administrators only.
    #[serde(rename = "parentID")]
    pub parent_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_query_accepts_partial_input() {
        let query: RangeQuery = serde_json::from_str(r#"{"startDate": "2022-05-01"}"#).unwrap();
        assert_eq!(query.start_date, NaiveDate::from_ymd_opt(2022, 5, 1));
        assert!(query.end_date.is_none());
        assert!(query.parent_id.is_none());
    }

    #[test]
    fn parent_id_uses_the_wire_spelling() {
        let id = Uuid::now_v7();
        let json = format!(r#"{{"parentID": "{id}"}}"#);
        let query: ScopeQuery = serde_json::from_str(&json).unwrap();
        assert_eq!(query.parent_id, Some(id));
    }
}
