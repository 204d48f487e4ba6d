use std::fmt::{self, Display, Formatter};

use crate::error::{ModelError, Result};

/// The fixed set of views the showcase can present.
///
/// Paths mirror the site layout: the landing screen sits at the root and
/// auto-advances to `/home`; every other route carries the nav/footer chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Route {
    Landing,
    Home,
    WhoWeAre,
    DesignBuild,
    About,
    Contact,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Landing,
        Route::Home,
        Route::WhoWeAre,
        Route::DesignBuild,
        Route::About,
        Route::Contact,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Home => "/home",
            Route::WhoWeAre => "/whoweare",
            Route::DesignBuild => "/design-build",
            Route::About => "/about",
            Route::Contact => "/contact-us",
        }
    }

    pub fn from_path(path: &str) -> Result<Route> {
        Route::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .ok_or_else(|| ModelError::UnknownRoute(path.to_string()))
    }

    /// Landing is a chromeless splash; everything else gets nav and footer.
    pub fn has_chrome(&self) -> bool {
        !matches!(self, Route::Landing)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Landing => "Welcome",
            Route::Home => "Home",
            Route::WhoWeAre => "Who We Are",
            Route::DesignBuild => "Design & Build",
            Route::About => "About Us",
            Route::Contact => "Contact Us",
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()).unwrap(), route);
        }
    }

    #[test]
    fn unknown_path_is_an_error() {
        assert!(Route::from_path("/pricing").is_err());
    }

    #[test]
    fn only_landing_is_chromeless() {
        assert!(!Route::Landing.has_chrome());
        assert!(Route::Home.has_chrome());
        assert!(Route::Contact.has_chrome());
    }
}
