//! Page identifiers and navigation routes.
//!
//! Every screen the dashboard can show is a `PageId` variant. Request strings
//! coming from page components are parsed into a `Route`, which also covers
//! the overlay and session targets that never become the current page.

use log::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Specifying the known pages.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    Dashboard,
    Channels,
    Platforms,
    Rss,
    Tmdb,
    VideoStudio,
    Logs,
    UploadManager,
    Support,
    Privacy,
    Terms,
    Cookies,
    NotFound,
}

/// Primary destinations in their default bottom-bar order.
///
pub const PRIMARY_DESTINATIONS: [PageId; 6] = [
    PageId::Dashboard,
    PageId::Channels,
    PageId::Platforms,
    PageId::Rss,
    PageId::Tmdb,
    PageId::VideoStudio,
];

impl PageId {
    /// Every catalog member, `NotFound` last.
    ///
    pub const ALL: [PageId; 13] = [
        PageId::Dashboard,
        PageId::Channels,
        PageId::Platforms,
        PageId::Rss,
        PageId::Tmdb,
        PageId::VideoStudio,
        PageId::Logs,
        PageId::UploadManager,
        PageId::Support,
        PageId::Privacy,
        PageId::Terms,
        PageId::Cookies,
        PageId::NotFound,
    ];

    /// Return the wire identifier of the page.
    ///
    pub fn id(&self) -> &'static str {
        match self {
            PageId::Dashboard => "dashboard",
            PageId::Channels => "channels",
            PageId::Platforms => "platforms",
            PageId::Rss => "rss",
            PageId::Tmdb => "tmdb",
            PageId::VideoStudio => "video-studio",
            PageId::Logs => "logs",
            PageId::UploadManager => "upload-manager",
            PageId::Support => "support",
            PageId::Privacy => "privacy",
            PageId::Terms => "terms",
            PageId::Cookies => "cookies",
            PageId::NotFound => "not-found",
        }
    }

    /// Return a human readable title.
    ///
    pub fn title(&self) -> &'static str {
        match self {
            PageId::Dashboard => "Dashboard",
            PageId::Channels => "Channels",
            PageId::Platforms => "Platforms",
            PageId::Rss => "RSS Feeds",
            PageId::Tmdb => "TMDB",
            PageId::VideoStudio => "Video Studio",
            PageId::Logs => "Logs",
            PageId::UploadManager => "Upload Manager",
            PageId::Support => "Support",
            PageId::Privacy => "Privacy Policy",
            PageId::Terms => "Terms of Service",
            PageId::Cookies => "Cookie Policy",
            PageId::NotFound => "Not Found",
        }
    }

    /// Look up a catalog member by identifier.
    ///
    pub fn from_id(id: &str) -> Option<PageId> {
        PageId::ALL.iter().copied().find(|page| page.id() == id)
    }

    /// Static pages hold fixed legal text and are exempt from the settings
    /// origin snapshot.
    ///
    pub fn is_static(&self) -> bool {
        matches!(self, PageId::Privacy | PageId::Terms | PageId::Cookies)
    }

    pub fn is_primary(&self) -> bool {
        PRIMARY_DESTINATIONS.contains(self)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Sections reachable inside the settings overlay.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettingsSection {
    General,
    Account,
    Channels,
    Notifications,
    Appearance,
    Security,
    Api,
    Comments,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 8] = [
        SettingsSection::General,
        SettingsSection::Account,
        SettingsSection::Channels,
        SettingsSection::Notifications,
        SettingsSection::Appearance,
        SettingsSection::Security,
        SettingsSection::Api,
        SettingsSection::Comments,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SettingsSection::General => "general",
            SettingsSection::Account => "account",
            SettingsSection::Channels => "channels",
            SettingsSection::Notifications => "notifications",
            SettingsSection::Appearance => "appearance",
            SettingsSection::Security => "security",
            SettingsSection::Api => "api",
            SettingsSection::Comments => "comments",
        }
    }

    pub fn from_id(id: &str) -> Option<SettingsSection> {
        SettingsSection::ALL
            .iter()
            .copied()
            .find(|section| section.id() == id)
    }
}

/// A parsed navigation request.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Route {
    Page(PageId),
    Settings(Option<SettingsSection>),
    ShortcutsHelp,
    Login,
}

const SETTINGS_PREFIX: &str = "settings-";
const REPLY_SUFFIX: &str = "-reply";

impl Route {
    /// Parse a request string. Unknown identifiers resolve to the
    /// `NotFound` page rather than failing.
    ///
    pub fn parse(request: &str) -> Route {
        match request {
            "settings" => return Route::Settings(None),
            "shortcuts-help" => return Route::ShortcutsHelp,
            "login" => return Route::Login,
            _ => {}
        }

        if let Some(section) = request.strip_prefix(SETTINGS_PREFIX) {
            let section = section.strip_suffix(REPLY_SUFFIX).unwrap_or(section);
            return match SettingsSection::from_id(section) {
                Some(section) => Route::Settings(Some(section)),
                None => {
                    debug!("Unknown settings section '{}', opening settings root", section);
                    Route::Settings(None)
                }
            };
        }

        match PageId::from_id(request) {
            Some(page) => Route::Page(page),
            None => {
                debug!("Unknown page identifier '{}', resolving to not-found", request);
                Route::Page(PageId::NotFound)
            }
        }
    }
}

impl FromStr for Route {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Route::parse(s))
    }
}

impl From<PageId> for Route {
    fn from(page: PageId) -> Self {
        Route::Page(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids_round_trip_through_catalog() {
        for page in PageId::ALL {
            assert_eq!(Some(page), PageId::from_id(page.id()));
        }
    }

    #[test]
    fn test_serde_uses_identifiers() {
        let json = serde_json::to_string(&PageId::VideoStudio).unwrap();
        assert_eq!(json, "\"video-studio\"");
        let page: PageId = serde_json::from_str("\"upload-manager\"").unwrap();
        assert_eq!(page, PageId::UploadManager);
    }

    #[test]
    fn test_static_pages() {
        assert!(PageId::Privacy.is_static());
        assert!(PageId::Terms.is_static());
        assert!(PageId::Cookies.is_static());
        assert!(!PageId::Dashboard.is_static());
        assert!(!PageId::Support.is_static());
    }

    #[test]
    fn test_primary_destinations() {
        assert!(PageId::Rss.is_primary());
        assert!(!PageId::Logs.is_primary());
        assert_eq!(PRIMARY_DESTINATIONS.len(), 6);
    }

    #[test]
    fn test_parse_settings_routes() {
        assert_eq!(Route::parse("settings"), Route::Settings(None));
        assert_eq!(
            Route::parse("settings-account"),
            Route::Settings(Some(SettingsSection::Account))
        );
        assert_eq!(
            Route::parse("settings-comments-reply"),
            Route::Settings(Some(SettingsSection::Comments))
        );
        assert_eq!(Route::parse("settings-bogus"), Route::Settings(None));
    }

    #[test]
    fn test_parse_special_routes() {
        assert_eq!(Route::parse("shortcuts-help"), Route::ShortcutsHelp);
        assert_eq!(Route::parse("login"), Route::Login);
        assert_eq!(Route::parse("rss"), Route::Page(PageId::Rss));
    }

    #[test]
    fn test_unknown_page_resolves_to_not_found() {
        assert_eq!(Route::parse("analytics"), Route::Page(PageId::NotFound));
        assert_eq!(Route::parse(""), Route::Page(PageId::NotFound));
        let route: Route = "nope".parse().unwrap();
        assert_eq!(route, Route::Page(PageId::NotFound));
    }
}
