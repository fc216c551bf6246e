//! Milestone API types.

use chrono::{NaiveDate, Utc};
use fw_model::Milestone;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for recording a milestone.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMilestoneRequest {
    /// Short title, e.g. "First steps".
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Date the milestone was achieved.
    pub date_achieve: NaiveDate,
}

impl CreateMilestoneRequest {
    /// Builds the domain milestone for the given child.
    #[must_use]
    pub fn into_milestone(self, child_id: Uuid) -> Milestone {
        Milestone::new(child_id, self.title, self.description, self.date_achieve)
    }
}

/// Request body for updating a milestone. Absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMilestoneRequest {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New achievement date.
    pub date_achieve: Option<NaiveDate>,
}

impl UpdateMilestoneRequest {
    /// Applies the update and refreshes the modification timestamp.
    pub fn apply_to(self, milestone: &mut Milestone) {
        if let Some(title) = self.title {
            milestone.title = title;
        }
        if let Some(description) = self.description {
            milestone.description = description;
        }
        if let Some(date_achieve) = self.date_achieve {
            milestone.date_achieve = date_achieve;
        }
        milestone.updated_at = Utc::now();
    }
}

/// Milestone representation returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneRepresentation {
    /// Unique identifier.
    pub id: Uuid,
    /// Child the milestone belongs to.
    pub child_id: Uuid,
    /// Short title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Date the milestone was achieved.
    pub date_achieve: NaiveDate,
}

impl From<Milestone> for MilestoneRepresentation {
    fn from(milestone: Milestone) -> Self {
        Self {
            id: milestone.id,
            child_id: milestone.child_id,
            title: milestone.title,
            description: milestone.description,
            date_achieve: milestone.date_achieve,
        }
    }
}

/// Wrapper for milestone listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestonesResponse {
    /// The matching milestones, oldest first.
    pub milestones: Vec<MilestoneRepresentation>,
}

impl From<Vec<Milestone>> for MilestonesResponse {
    fn from(milestones: Vec<Milestone>) -> Self {
        Self {
            milestones: milestones
                .into_iter()
                .map(MilestoneRepresentation::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn update_only_touches_given_fields() {
        let mut milestone =
            Milestone::new(Uuid::now_v7(), "First steps", "Walked to the sofa", date(2022, 8, 1));
        let update = UpdateMilestoneRequest {
            title: Some("First steps!".to_string()),
            ..UpdateMilestoneRequest::default()
        };
        update.apply_to(&mut milestone);
        assert_eq!(milestone.title, "First steps!");
        assert_eq!(milestone.description, "Walked to the sofa");
        assert_eq!(milestone.date_achieve, date(2022, 8, 1));
    }

    #[test]
    fn update_refreshes_the_modification_timestamp() {
        let mut milestone =
            Milestone::new(Uuid::now_v7(), "First steps", "Walked", date(2022, 8, 1));
        let before = milestone.updated_at;
        UpdateMilestoneRequest::default().apply_to(&mut milestone);
        assert!(milestone.updated_at >= before);
    }
}
