use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::store::Record;

// =============================================================================
// Resource Category
// =============================================================================

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    #[default]
    Courses,
    Calendar,
    Exams,
    Regulations,
    Syllabus,
    Timetables,
}

impl ResourceCategory {
    /// Tab order on the public page and in the admin manager.
    pub const ALL: [ResourceCategory; 6] = [
        ResourceCategory::Courses,
        ResourceCategory::Calendar,
        ResourceCategory::Exams,
        ResourceCategory::Regulations,
        ResourceCategory::Syllabus,
        ResourceCategory::Timetables,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::Courses => "courses",
            ResourceCategory::Calendar => "calendar",
            ResourceCategory::Exams => "exams",
            ResourceCategory::Regulations => "regulations",
            ResourceCategory::Syllabus => "syllabus",
            ResourceCategory::Timetables => "timetables",
        }
    }

    /// Heading shown above each tab's resource list.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceCategory::Courses => "Courses Offered",
            ResourceCategory::Calendar => "Academic Calendar",
            ResourceCategory::Exams => "Examination Schedule",
            ResourceCategory::Regulations => "Academic Regulations",
            ResourceCategory::Syllabus => "Syllabus",
            ResourceCategory::Timetables => "Time Tables",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "courses" => Some(ResourceCategory::Courses),
            "calendar" => Some(ResourceCategory::Calendar),
            "exams" => Some(ResourceCategory::Exams),
            "regulations" => Some(ResourceCategory::Regulations),
            "syllabus" => Some(ResourceCategory::Syllabus),
            "timetables" => Some(ResourceCategory::Timetables),
            _ => None,
        }
    }
}

// =============================================================================
// Academic Resource
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicResource {
    #[serde(default)]
    pub id: String,
    pub category: ResourceCategory,
    pub title: String,
    pub description: String,
    pub file_url: String,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

impl Record for AcademicResource {
    const COLLECTION: &'static str = "academics";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDraft {
    pub category: ResourceCategory,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub file_url: String,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_category_round_trip() {
        for category in ResourceCategory::ALL {
            assert_eq!(
                ResourceCategory::from_str(category.as_str()),
                Some(category)
            );
        }
        assert_eq!(ResourceCategory::from_str("library"), None);
    }

    #[test]
    fn test_category_serializes_to_stored_token() {
        let value = serde_json::to_value(ResourceCategory::Timetables).unwrap();
        assert_eq!(value, "timetables");
        let parsed: ResourceCategory = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, ResourceCategory::Timetables);
    }

    #[test]
    fn test_labels_are_distinct() {
        let mut labels: Vec<_> = ResourceCategory::ALL.iter().map(|c| c.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), ResourceCategory::ALL.len());
    }

    #[test]
    fn test_empty_optional_fields_decode_as_none() {
        let resource: AcademicResource = serde_json::from_value(serde_json::json!({
            "category": "courses",
            "title": "B.Tech Programs Overview",
            "description": "Programs offered by the college",
            "fileUrl": "#"
        }))
        .unwrap();
        assert_eq!(resource.semester, None);
        assert_eq!(resource.department, None);
    }
}
