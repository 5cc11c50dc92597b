//! Application state

use crate::logger::LogBuffer;
use maneuver_core::{AppConfig, ClickOutcome, FsSource, Point, Session, ShipBoard, ShipEntry};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Board,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Board, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Board => "Board",
            Tab::Help => "Help",
        }
    }
}

/// Which list the arrow keys move in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Ships,
    Zones,
}

pub struct App {
    pub current_tab: Tab,
    pub focus: Focus,
    pub ships: Vec<ShipEntry>,
    pub selected_ship: usize,
    pub selected_zone: usize,
    pub session: Session<FsSource>,
    pub data_root: PathBuf,
    pub logs: LogBuffer,
    /// Last error shown in the status line
    pub status: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig, logs: LogBuffer) -> Self {
        let source = FsSource::new(&config.data_root);
        App {
            current_tab: Tab::Board,
            focus: Focus::Ships,
            ships: config.ships.clone(),
            selected_ship: 0,
            selected_zone: 0,
            session: Session::new(source, config),
            data_root: config.data_root.clone(),
            logs,
            status: None,
        }
    }

    pub fn board(&self) -> Option<&ShipBoard> {
        self.session.board()
    }

    pub fn last_result(&self) -> Option<&ClickOutcome> {
        self.session.last_result()
    }

    pub fn zone_names(&self) -> Vec<&str> {
        self.board()
            .map(|b| b.overlay.zone_names().collect())
            .unwrap_or_default()
    }

    pub fn selected_zone_name(&self) -> Option<&str> {
        self.zone_names().get(self.selected_zone).copied()
    }

    /// Asset paths are relative to the data root
    pub fn asset_exists(&self, path: &str) -> bool {
        self.data_root.join(Path::new(path)).exists()
    }

    pub fn toggle_help(&mut self) {
        self.current_tab = match self.current_tab {
            Tab::Help => Tab::Board,
            Tab::Board => Tab::Help,
        };
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Ships => Focus::Zones,
            Focus::Zones => Focus::Ships,
        };
    }

    pub fn on_up(&mut self) {
        match self.focus {
            Focus::Ships => self.selected_ship = self.selected_ship.saturating_sub(1),
            Focus::Zones => self.selected_zone = self.selected_zone.saturating_sub(1),
        }
    }

    pub fn on_down(&mut self) {
        match self.focus {
            Focus::Ships => {
                if self.selected_ship < self.ships.len().saturating_sub(1) {
                    self.selected_ship += 1;
                }
            }
            Focus::Zones => {
                if self.selected_zone < self.zone_names().len().saturating_sub(1) {
                    self.selected_zone += 1;
                }
            }
        }
    }

    pub fn on_enter(&mut self) {
        match self.focus {
            Focus::Ships => self.select_ship(self.selected_ship),
            Focus::Zones => {
                if let Some(zone) = self.selected_zone_name().map(str::to_string) {
                    self.click_zone(&zone);
                }
            }
        }
    }

    /// Ship selector button
    pub fn select_ship(&mut self, index: usize) {
        let Some(ship) = self.ships.get(index) else {
            return;
        };
        let id = ship.id.clone();
        self.selected_ship = index;
        match self.session.select_ship(&id) {
            Ok(_) => {
                self.selected_zone = 0;
                self.focus = Focus::Zones;
                self.status = None;
            }
            Err(e) => self.report(e),
        }
    }

    pub fn click_zone(&mut self, zone: &str) {
        let result = self.session.click_zone(zone).map(|_| ());
        self.settle(result);
        if let Some(idx) = self.zone_names().iter().position(|z| *z == zone) {
            self.selected_zone = idx;
        }
    }

    /// Mouse click at a fractional position inside the board canvas
    pub fn click_board(&mut self, fx: f64, fy: f64) {
        let zone = self.board().and_then(|b| {
            let point: Point = b.overlay.view_box.at_fraction(fx, fy);
            b.overlay.zone_at(point).map(str::to_string)
        });
        if let Some(zone) = zone {
            self.click_zone(&zone);
        }
    }

    pub fn reroll(&mut self) {
        let result = self.session.reroll().map(|_| ());
        self.settle(result);
    }

    fn settle(&mut self, result: Result<(), maneuver_core::SessionError>) {
        match result {
            Ok(()) => self.status = None,
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, e: maneuver_core::SessionError) {
        log::error!("{}", e);
        self.status = Some(e.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maneuver_core::{default_config, DieRoll};

    fn app() -> App {
        let mut config = default_config();
        config.data_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        config.seed = Some(5);
        App::new(&config, LogBuffer::new())
    }

    #[test]
    fn test_bundled_ships_resolve_every_zone() {
        let mut app = app();
        for index in 0..app.ships.len() {
            app.select_ship(index);
            assert!(app.status.is_none(), "{:?}", app.status);
            let zones: Vec<String> = app.zone_names().iter().map(|z| z.to_string()).collect();
            assert_eq!(zones.len(), 10);
            for zone in &zones {
                for face in 1..=6 {
                    let outcome = app
                        .session
                        .click_zone_with_roll(zone, DieRoll::new(face).unwrap())
                        .unwrap()
                        .unwrap();
                    assert!(!outcome.view.blocks.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_enter_on_ship_then_zone() {
        let mut app = app();
        app.on_enter();
        assert_eq!(app.focus, Focus::Zones);
        assert_eq!(app.board().map(|b| b.ship.as_str()), Some("corvette"));

        app.on_down();
        let zone = app.selected_zone_name().unwrap().to_string();
        app.on_enter();
        assert_eq!(app.last_result().unwrap().resolution.zone, zone);
    }

    #[test]
    fn test_click_board_hits_front_green() {
        let mut app = app();
        app.select_ship(0);
        // mid-radius, mid-angle of the front_green sector
        app.click_board(401.0 / 700.0, 193.0 / 700.0);
        assert_eq!(app.last_result().unwrap().resolution.zone, "front_green");
        assert_eq!(app.selected_zone_name(), Some("front_green"));
    }

    #[test]
    fn test_click_outside_zones_does_nothing() {
        let mut app = app();
        app.select_ship(0);
        app.click_board(0.01, 0.99);
        assert!(app.last_result().is_none());
    }

    #[test]
    fn test_missing_ship_data_sets_status() {
        let mut app = app();
        app.ships.push(ShipEntry {
            id: "ghost".to_string(),
            label: String::new(),
        });
        let ghost = app.ships.len() - 1;
        app.select_ship(ghost);
        assert!(app.status.is_none());

        app.on_enter();
        assert!(app.status.as_deref().unwrap().contains("data/ghost.json"));
    }

    #[test]
    fn test_bundled_icons_missing_degrade() {
        let app = app();
        assert!(!app.asset_exists("images/maneuvers/1.png"));
        assert!(app.asset_exists("data/zones.json"));
    }
}
