//! Result rendering: maneuver text plus paired speed/vector icons

use crate::resolve::Resolution;
use crate::types::Maneuver;
use serde::{Deserialize, Serialize};

/// Resolves image asset paths under an image directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconPaths {
    pub image_dir: String,
}

impl IconPaths {
    pub fn new(image_dir: impl Into<String>) -> Self {
        IconPaths {
            image_dir: image_dir.into(),
        }
    }

    /// `images/<ship>.png`
    pub fn ship_image(&self, ship: &str) -> String {
        format!("{}/{}.png", self.image_dir, ship)
    }

    /// `images/maneuvers/<token>.png`
    pub fn maneuver_icon(&self, token: &str) -> String {
        format!("{}/maneuvers/{}.png", self.image_dir, token)
    }
}

impl Default for IconPaths {
    fn default() -> Self {
        IconPaths::new("images")
    }
}

/// Maneuver text with its two icons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManeuverCard {
    pub text: String,
    pub speed_icon: String,
    pub vector_icon: String,
}

impl ManeuverCard {
    pub fn new(maneuver: &Maneuver, icons: &IconPaths) -> Self {
        ManeuverCard {
            text: maneuver.text().to_string(),
            speed_icon: icons.maneuver_icon(maneuver.speed_token()),
            vector_icon: icons.maneuver_icon(&maneuver.vector_token()),
        }
    }

    pub fn icons(&self) -> [&str; 2] {
        [&self.speed_icon, &self.vector_icon]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultBlock {
    pub heading: String,
    pub card: ManeuverCard,
    /// Present only when there are swerves
    pub swerve_heading: Option<String>,
    pub swerves: Vec<ManeuverCard>,
}

/// The three output regions: zone, roll and the maneuver blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultView {
    pub zone_line: String,
    pub roll_line: String,
    pub blocks: Vec<ResultBlock>,
}

pub const MANEUVER_HEADING: &str = "Maneuver";
pub const SWERVE_HEADING: &str = "Swerve";

pub fn render_results(resolution: &Resolution, icons: &IconPaths) -> ResultView {
    let blocks = resolution
        .primaries
        .iter()
        .map(|primary| {
            let heading = match primary.side {
                Some(side) => format!("{} (target side {})", MANEUVER_HEADING, side.name()),
                None => MANEUVER_HEADING.to_string(),
            };
            ResultBlock {
                heading,
                card: ManeuverCard::new(&primary.maneuver, icons),
                swerve_heading: primary.has_swerves().then(|| SWERVE_HEADING.to_string()),
                swerves: primary
                    .swerves
                    .iter()
                    .map(|swerve| ManeuverCard::new(swerve, icons))
                    .collect(),
            }
        })
        .collect();

    ResultView {
        zone_line: format!("Zone: {}", resolution.zone),
        roll_line: format!("Die Roll: {}", resolution.roll),
        blocks,
    }
}
