use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::store::Record;

// =============================================================================
// Department Slug
// =============================================================================

/// The fixed set of departments. Route parameters, store ids, and the
/// bundled fallback profiles all key on these slugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepartmentSlug {
    Civil,
    Eee,
    Mechanical,
    Ece,
    Cse,
    Chemical,
}

impl DepartmentSlug {
    pub const ALL: [DepartmentSlug; 6] = [
        DepartmentSlug::Civil,
        DepartmentSlug::Eee,
        DepartmentSlug::Mechanical,
        DepartmentSlug::Ece,
        DepartmentSlug::Cse,
        DepartmentSlug::Chemical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DepartmentSlug::Civil => "civil",
            DepartmentSlug::Eee => "eee",
            DepartmentSlug::Mechanical => "mechanical",
            DepartmentSlug::Ece => "ece",
            DepartmentSlug::Cse => "cse",
            DepartmentSlug::Chemical => "chemical",
        }
    }

    /// Short name used in the admin department menu and on blank scaffolds.
    /// The bundled profiles carry the longer official names.
    pub fn label(&self) -> &'static str {
        match self {
            DepartmentSlug::Civil => "Civil Engineering",
            DepartmentSlug::Eee => "Electrical & Electronics",
            DepartmentSlug::Mechanical => "Mechanical Engineering",
            DepartmentSlug::Ece => "Electronics & Communication",
            DepartmentSlug::Cse => "Computer Science",
            DepartmentSlug::Chemical => "Chemical Engineering",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "civil" => Some(DepartmentSlug::Civil),
            "eee" => Some(DepartmentSlug::Eee),
            "mechanical" => Some(DepartmentSlug::Mechanical),
            "ece" => Some(DepartmentSlug::Ece),
            "cse" => Some(DepartmentSlug::Cse),
            "chemical" => Some(DepartmentSlug::Chemical),
            _ => None,
        }
    }
}

// =============================================================================
// Department Profile
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentContact {
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentProfile {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub tagline: String,
    /// Year the department was founded. Blank scaffolds leave it at zero
    /// until the operator fills it in.
    #[serde(default)]
    pub established: i32,
    pub description: String,
    pub vision: String,
    pub mission: Vec<String>,
    pub hod: String,
    pub programs: Vec<String>,
    pub labs: Vec<String>,
    pub contact: DepartmentContact,
}

impl DepartmentProfile {
    /// Empty editor scaffold for a department with no stored override. Only
    /// the slug and menu name are filled in; the single empty entry in each
    /// list seeds the form's first input row.
    pub fn scaffold(slug: DepartmentSlug) -> Self {
        Self {
            id: slug.as_str().to_string(),
            name: slug.label().to_string(),
            tagline: String::new(),
            established: 0,
            description: String::new(),
            vision: String::new(),
            mission: vec![String::new()],
            hod: String::new(),
            programs: vec![String::new()],
            labs: vec![String::new()],
            contact: DepartmentContact {
                email: String::new(),
                phone: String::new(),
            },
        }
    }
}

impl Record for DepartmentProfile {
    const COLLECTION: &'static str = "departments";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
