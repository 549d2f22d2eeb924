use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::store::Record;

// =============================================================================
// Placement Statistics
// =============================================================================

/// One statistics block per academic year. The placements page shows the
/// newest one; older years stay in the collection as history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementStatistic {
    #[serde(default)]
    pub id: String,
    /// Academic year label, e.g. "2023-24". Ordered lexicographically,
    /// which matches chronological order for this format.
    pub year: String,
    pub placement_rate: f64,
    pub highest_package: String,
    pub average_package: String,
    pub companies_visited: u32,
}

impl Record for PlacementStatistic {
    const COLLECTION: &'static str = "placementStats";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatisticDraft {
    #[validate(length(min = 1, message = "Year is required"))]
    pub year: String,
    pub placement_rate: f64,
    pub highest_package: String,
    pub average_package: String,
    pub companies_visited: u32,
}

// =============================================================================
// Recruiters
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recruiter {
    #[serde(default)]
    pub id: String,
    pub company_name: String,
    pub logo_url: String,
    /// Display position in the recruiter strip, ascending.
    pub order: i64,
}

impl Record for Recruiter {
    const COLLECTION: &'static str = "recruiters";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterDraft {
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,
    pub logo_url: String,
    pub order: i64,
}

impl Default for RecruiterDraft {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            logo_url: String::new(),
            order: 1,
        }
    }
}

// =============================================================================
// Placement Records
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRecord {
    #[serde(default)]
    pub id: String,
    pub student_name: String,
    pub company: String,
    /// Offer amount as displayed, e.g. "42 LPA".
    pub package: String,
    pub department: String,
    pub year: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Record for PlacementRecord {
    const COLLECTION: &'static str = "placements";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlacementDraft {
    #[validate(length(min = 1, message = "Student name is required"))]
    pub student_name: String,
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,
    pub package: String,
    pub department: String,
    pub year: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

// =============================================================================
// Testimonials
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(default)]
    pub id: String,
    pub student_name: String,
    pub company: String,
    pub quote: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub year: String,
}

impl Record for Testimonial {
    const COLLECTION: &'static str = "testimonials";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialDraft {
    #[validate(length(min = 1, message = "Student name is required"))]
    pub student_name: String,
    pub company: String,
    #[validate(length(min = 1, message = "Quote is required"))]
    pub quote: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub year: String,
}
