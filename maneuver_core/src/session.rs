//! Session state: current ship, board overlay and last result
//!
//! Drives the click flow: select ship → load zones → render overlay →
//! click zone → roll → load table → resolve → render results.

use crate::cache::{DataCache, DataSource, LoadError};
use crate::config::AppConfig;
use crate::geometry::ViewBox;
use crate::render::{render_overlay, render_results, IconPaths, Overlay, ResultView};
use crate::resolve::{resolve, Resolution, ResolveError};
use crate::swerve::SwerveAdjacency;
use crate::types::DieRoll;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No ship selected")]
    NoShipSelected,
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// The board currently shown
#[derive(Debug, Clone, PartialEq)]
pub struct ShipBoard {
    pub ship: String,
    pub image: String,
    pub overlay: Overlay,
}

/// A finished zone click
#[derive(Debug, Clone, PartialEq)]
pub struct ClickOutcome {
    pub resolution: Resolution,
    pub view: ResultView,
}

pub struct Session<S> {
    cache: DataCache<S>,
    adjacency: SwerveAdjacency,
    icons: IconPaths,
    view_box: ViewBox,
    rng: StdRng,
    board: Option<ShipBoard>,
    last: Option<ClickOutcome>,
}

impl<S: DataSource> Session<S> {
    pub fn new(source: S, config: &AppConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Session {
            cache: DataCache::new(source),
            adjacency: config.adjacency(),
            icons: IconPaths::new(config.image_dir.clone()),
            view_box: config.view_box,
            rng,
            board: None,
            last: None,
        }
    }

    pub fn cache(&self) -> &DataCache<S> {
        &self.cache
    }

    pub fn board(&self) -> Option<&ShipBoard> {
        self.board.as_ref()
    }

    pub fn current_ship(&self) -> Option<&str> {
        self.board.as_ref().map(|b| b.ship.as_str())
    }

    pub fn last_result(&self) -> Option<&ClickOutcome> {
        self.last.as_ref()
    }

    /// Switch to a ship: lower-cased name, its image, and a freshly rendered overlay
    ///
    /// On failure the previous board stays in place.
    pub fn select_ship(&mut self, name: &str) -> Result<&ShipBoard, SessionError> {
        let ship = name.to_lowercase();
        let zones = self.cache.get_zones()?;
        let overlay = render_overlay(zones, self.view_box).map_err(|(zone, e)| {
            LoadError::Invalid {
                path: crate::cache::ZONES_PATH.to_string(),
                reason: format!("zone {}: {}", zone, e),
            }
        })?;

        log::info!("Selected ship {} ({} zones)", ship, overlay.len());
        let board: &ShipBoard = self.board.insert(ShipBoard {
            image: self.icons.ship_image(&ship),
            ship,
            overlay,
        });
        Ok(board)
    }

    /// Roll a d6 and resolve the zone
    ///
    /// Returns `Ok(None)` for a malformed zone name; that is logged and the
    /// previous result is left alone.
    pub fn click_zone(&mut self, zone: &str) -> Result<Option<&ClickOutcome>, SessionError> {
        let roll = DieRoll::roll(&mut self.rng);
        self.click_zone_with_roll(zone, roll)
    }

    /// Resolve the zone with a given roll
    pub fn click_zone_with_roll(
        &mut self,
        zone: &str,
        roll: DieRoll,
    ) -> Result<Option<&ClickOutcome>, SessionError> {
        let ship = self
            .board
            .as_ref()
            .map(|b| b.ship.clone())
            .ok_or(SessionError::NoShipSelected)?;

        log::info!("Clicked {} on {}, rolled {}", zone, ship, roll);
        let table = self.cache.get_maneuvers(&ship)?;

        let resolution = match resolve(zone, table, roll, &self.adjacency) {
            Ok(resolution) => resolution,
            Err(ResolveError::MalformedZone(e)) => {
                log::error!("{}", e);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let view = render_results(&resolution, &self.icons);
        let outcome: &ClickOutcome = self.last.insert(ClickOutcome { resolution, view });
        Ok(Some(outcome))
    }

    /// Roll again on the last clicked zone
    pub fn reroll(&mut self) -> Result<Option<&ClickOutcome>, SessionError> {
        match self.last.as_ref().map(|o| o.resolution.zone.clone()) {
            Some(zone) => self.click_zone(&zone),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemorySource;

    fn source() -> MemorySource {
        MemorySource::new()
            .with_file(
                "data/zones.json",
                r#"{"front_green": "300,0 400,0 400,100 300,100"}"#,
            )
            .with_file(
                "data/corvette.json",
                r#"{"front": {"green": {"1": "1 Straight", "2": "1 Straight", "3": "1 Left",
                    "4": "2 Right", "5": "2 Straight", "6": "3 Straight"}}}"#,
            )
    }

    fn seeded() -> AppConfig {
        AppConfig {
            seed: Some(9),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_select_ship_lowercases() {
        let mut session = Session::new(source(), &seeded());
        let board = session.select_ship("Corvette").unwrap();
        assert_eq!(board.ship, "corvette");
        assert_eq!(board.image, "images/corvette.png");
        assert_eq!(board.overlay.len(), 1);
    }

    #[test]
    fn test_click_before_ship_selected() {
        let mut session = Session::new(source(), &seeded());
        assert!(matches!(session.click_zone("front_green"), Err(SessionError::NoShipSelected)));
    }

    #[test]
    fn test_click_zone_random_roll() {
        let mut session = Session::new(source(), &seeded());
        session.select_ship("corvette").unwrap();
        let outcome = session.click_zone("front_green").unwrap().unwrap();
        let face = outcome.resolution.roll.face();
        assert!((1..=6).contains(&face));
        assert_eq!(outcome.view.roll_line, format!("Die Roll: {}", face));
    }

    #[test]
    fn test_malformed_zone_keeps_previous_result() {
        let mut session = Session::new(source(), &seeded());
        session.select_ship("corvette").unwrap();
        session
            .click_zone_with_roll("front_green", DieRoll::new(3).unwrap())
            .unwrap();
        let before = session.last_result().cloned();

        assert!(session.click_zone("frontgreen").unwrap().is_none());
        assert_eq!(session.last_result().cloned(), before);
    }

    #[test]
    fn test_failed_select_leaves_no_board() {
        let mut session = Session::new(MemorySource::new(), &seeded());
        assert!(matches!(session.select_ship("corvette"), Err(SessionError::Load(_))));
        assert!(session.board().is_none());
        assert!(session.current_ship().is_none());
    }

    #[test]
    fn test_bad_zone_geometry_is_load_failure() {
        let source = MemorySource::new().with_file("data/zones.json", r#"{"front_green": "1,2"}"#);
        let mut session = Session::new(source, &seeded());
        let err = session.select_ship("corvette").unwrap_err();
        assert!(matches!(err, SessionError::Load(LoadError::Invalid { .. })));
    }

    #[test]
    fn test_missing_table_is_load_failure() {
        let mut session = Session::new(source(), &seeded());
        session.select_ship("frigate").unwrap();
        let err = session.click_zone("front_green").unwrap_err();
        assert!(matches!(err, SessionError::Load(LoadError::Fetch { .. })));
        assert!(session.last_result().is_none());
    }

    #[test]
    fn test_reroll_reuses_zone() {
        let mut session = Session::new(source(), &seeded());
        session.select_ship("corvette").unwrap();
        assert!(session.reroll().unwrap().is_none());

        session
            .click_zone_with_roll("front_green", DieRoll::new(3).unwrap())
            .unwrap();
        let outcome = session.reroll().unwrap().unwrap();
        assert_eq!(outcome.resolution.zone, "front_green");
        assert_eq!(session.cache().fetch_count(), 2);
    }
}
