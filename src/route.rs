use crate::domain::DepartmentSlug;

/// The site's logical route surface. Navigation itself belongs to the host
/// UI; this layer only needs stable route identities for guard redirects,
/// the admin section menu, and the catch-all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    News,
    Placements,
    Departments,
    DepartmentDetail(DepartmentSlug),
    Academics,
    Contact,
    /// Unlinked login entry point. Obscurity only; the guard is what
    /// actually protects the dashboard.
    AdminLogin,
    /// The admin dashboard shell, plus the selected manager when a section
    /// segment is present.
    AdminDashboard(Option<AdminSection>),
    NotFound,
}

/// Managed-collection sections nested under the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    News,
    Departments,
    Academics,
    Placements,
}

impl AdminSection {
    /// Sidebar order in the dashboard.
    pub const ALL: [AdminSection; 4] = [
        AdminSection::News,
        AdminSection::Departments,
        AdminSection::Academics,
        AdminSection::Placements,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            AdminSection::News => "news",
            AdminSection::Departments => "departments",
            AdminSection::Academics => "academics",
            AdminSection::Placements => "placements",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminSection::News => "News Management",
            AdminSection::Departments => "Departments",
            AdminSection::Academics => "Academics",
            AdminSection::Placements => "Placements",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        match s {
            "news" => Some(AdminSection::News),
            "departments" => Some(AdminSection::Departments),
            "academics" => Some(AdminSection::Academics),
            "placements" => Some(AdminSection::Placements),
            _ => None,
        }
    }
}

impl Route {
    /// Canonical path for a route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::News => "/news".to_string(),
            Route::Placements => "/placements".to_string(),
            Route::Departments => "/departments".to_string(),
            Route::DepartmentDetail(slug) => format!("/departments/{}", slug.as_str()),
            Route::Academics => "/academics".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::AdminLogin => "/only-access-to-admin".to_string(),
            Route::AdminDashboard(None) => "/admin/dashboard".to_string(),
            Route::AdminDashboard(Some(section)) => {
                format!("/admin/dashboard/{}", section.slug())
            }
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Maps a path to its route. Anything unrecognized is `NotFound`,
    /// including department slugs outside the fixed set; the detail page's
    /// own fallback never sees those.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };

        match path {
            "/" => Route::Home,
            "/news" => Route::News,
            "/placements" => Route::Placements,
            "/departments" => Route::Departments,
            "/academics" => Route::Academics,
            "/contact" => Route::Contact,
            "/only-access-to-admin" => Route::AdminLogin,
            "/admin/dashboard" => Route::AdminDashboard(None),
            _ => {
                if let Some(slug) = path.strip_prefix("/departments/") {
                    return match DepartmentSlug::from_str(slug) {
                        Some(slug) => Route::DepartmentDetail(slug),
                        None => Route::NotFound,
                    };
                }
                if let Some(section) = path.strip_prefix("/admin/dashboard/") {
                    return match AdminSection::from_slug(section) {
                        Some(section) => Route::AdminDashboard(Some(section)),
                        None => Route::NotFound,
                    };
                }
                Route::NotFound
            }
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::AdminDashboard(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes_round_trip() {
        let routes = [
            Route::Home,
            Route::News,
            Route::Placements,
            Route::Departments,
            Route::DepartmentDetail(DepartmentSlug::Cse),
            Route::Academics,
            Route::Contact,
            Route::AdminLogin,
            Route::AdminDashboard(None),
            Route::AdminDashboard(Some(AdminSection::Placements)),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/unknown"), Route::NotFound);
        assert_eq!(Route::parse("/departments/physics"), Route::NotFound);
        assert_eq!(Route::parse("/admin/dashboard/users"), Route::NotFound);
        assert_eq!(Route::parse("/admin"), Route::NotFound);
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        assert_eq!(Route::parse("/news/"), Route::News);
        assert_eq!(Route::parse("/"), Route::Home);
    }

    #[test]
    fn test_only_dashboard_requires_auth() {
        assert!(Route::AdminDashboard(None).requires_auth());
        assert!(Route::AdminDashboard(Some(AdminSection::News)).requires_auth());
        assert!(!Route::AdminLogin.requires_auth());
        assert!(!Route::Home.requires_auth());
    }
}
