//! Hash-based routes. `#/projects` selects the projects page.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Projects,
    Skills,
    Contact,
    Unknown(String),
}

pub const ROUTE_ORDER: [Route; 4] = [Route::Home, Route::Projects, Route::Skills, Route::Contact];

const HOME_ALIAS: &str = "/joshua-portfolio";

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };

        match normalized {
            "/" | HOME_ALIAS => Self::Home,
            "/projects" => Self::Projects,
            "/skills" => Self::Skills,
            "/contact" => Self::Contact,
            _ => Self::Unknown(trimmed.to_string()),
        }
    }

    /// Route named by a location hash. Only `#/...` paths (and the empty hash)
    /// are routes; any other fragment is an in-page anchor and yields `None`.
    pub fn from_hash(hash: &str) -> Option<Self> {
        match hash.strip_prefix('#').unwrap_or(hash) {
            "" => Some(Self::Home),
            path if path.starts_with('/') => Some(Self::from_path(path)),
            _ => None,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Home => "/",
            Self::Projects => "/projects",
            Self::Skills => "/skills",
            Self::Contact => "/contact",
            Self::Unknown(path) => path,
        }
    }

    pub fn to_hash(&self) -> String {
        format!("#{}", self.path())
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Home => "Home",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
            Self::Unknown(_) => "Not found",
        }
    }

    /// Position in [`ROUTE_ORDER`], `None` for unknown paths.
    pub fn position(&self) -> Option<usize> {
        ROUTE_ORDER.iter().position(|route| route == self)
    }
}
