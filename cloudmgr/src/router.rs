//! Named pages and the single active one.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Configuration,
    Control,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Dashboard, Route::Configuration, Route::Control];

    pub fn name(self) -> &'static str {
        match self {
            Route::Dashboard => "dashboard",
            Route::Configuration => "configuration",
            Route::Control => "control",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Configuration => "Configuration",
            Route::Control => "Control Center",
        }
    }

    /// Resolve a deep link. Anything that does not mention a known page is the dashboard.
    pub fn from_path(path: &str) -> Route {
        let p = path.to_ascii_lowercase();
        if p.contains("configuration") {
            Route::Configuration
        } else if p.contains("control") {
            Route::Control
        } else {
            Route::Dashboard
        }
    }

    pub fn next(self) -> Route {
        match self {
            Route::Dashboard => Route::Configuration,
            Route::Configuration => Route::Control,
            Route::Control => Route::Dashboard,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Route {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().trim_start_matches('/').to_ascii_lowercase();
        match t.as_str() {
            "" | "dashboard" => Ok(Route::Dashboard),
            "configuration" | "config" => Ok(Route::Configuration),
            "control" => Ok(Route::Control),
            _ => Err(ParseError::UnknownRoute(s.to_string())),
        }
    }
}

/// Holds exactly one active route. Pages and nav indicators are both derived from it,
/// so they cannot disagree.
#[derive(Debug, Clone, Default)]
pub struct Router {
    active: Route,
}

impl Router {
    pub fn new(initial: Route) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> Route {
        self.active
    }

    /// Returns true when the active page changed.
    pub fn navigate(&mut self, to: Route) -> bool {
        if self.active == to {
            return false;
        }
        tracing::info!(from = %self.active, to = %to, "navigate");
        self.active = to;
        true
    }

    pub fn is_active(&self, r: Route) -> bool {
        self.active == r
    }

    /// One entry per nav button, `true` on the active one.
    pub fn indicators(&self) -> [(Route, bool); 3] {
        Route::ALL.map(|r| (r, r == self.active))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_links() {
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path("/configuration"), Route::Configuration);
        assert_eq!(Route::from_path("/app/Control"), Route::Control);
        assert_eq!(Route::from_path("/nowhere"), Route::Dashboard);
    }

    #[test]
    fn parse_names() {
        assert_eq!("control".parse::<Route>(), Ok(Route::Control));
        assert_eq!("/configuration".parse::<Route>(), Ok(Route::Configuration));
        assert_eq!("/".parse::<Route>(), Ok(Route::Dashboard));
        assert!("billing".parse::<Route>().is_err());
    }

    #[test]
    fn navigate_reports_change() {
        let mut r = Router::default();
        assert!(!r.navigate(Route::Dashboard));
        assert!(r.navigate(Route::Control));
        assert_eq!(r.active(), Route::Control);
    }

    #[test]
    fn exactly_one_indicator_active() {
        let mut r = Router::new(Route::Configuration);
        for to in [Route::Control, Route::Dashboard, Route::Configuration, Route::Dashboard] {
            r.navigate(to);
            let lit: Vec<Route> = r
                .indicators()
                .iter()
                .filter(|(_, on)| *on)
                .map(|(r, _)| *r)
                .collect();
            assert_eq!(lit, vec![to]);
        }
    }
}
