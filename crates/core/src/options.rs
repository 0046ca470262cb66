use serde::{Deserialize, Serialize};

pub const DEFAULT_SITE_NAME: &str = "Take on Rules";
pub const DEFAULT_OPEN_GAME_LICENSE_URL: &str = "https://takeonrules.com/open-game-license/";

/// Site-level settings shared by every dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Link text of the canonical banner.
    pub site_name: String,
    /// Target of the "OPEN GAME CONTENT" link opening each open game section.
    pub open_game_license_url: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            site_name: DEFAULT_SITE_NAME.to_string(),
            open_game_license_url: DEFAULT_OPEN_GAME_LICENSE_URL.to_string(),
        }
    }
}
