//! Date range validation for record queries.

use chrono::NaiveDate;

use crate::error::{AccessError, AccessResult};

/// Validates the date range of a between-query and returns the bounds.
///
/// Both bounds are required and the start must not lie after the end.
/// Equal bounds describe a single-day range and are valid. The missing
/// check runs before the ordering check, so a query with one absent bound
/// always reports the absence.
///
/// ## Errors
///
/// Returns `AccessError::DateValidation` if either bound is absent, and
/// `AccessError::InvalidDateOrder` if `start > end`.
pub fn validate_date_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> AccessResult<(NaiveDate, NaiveDate)> {
    let (Some(start), Some(end)) = (start, end) else {
        return Err(AccessError::DateValidation);
    };
    if start > end {
        return Err(AccessError::InvalidDateOrder);
    }
    Ok((start, end))
}
