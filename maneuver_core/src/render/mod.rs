//! View models for the ship board overlay and the maneuver results
//!
//! The front end draws these; nothing here touches a terminal or a DOM.

mod overlay;
mod results;

pub use overlay::{render_overlay, Overlay, ZonePolygon};
pub use results::{render_results, IconPaths, ManeuverCard, ResultBlock, ResultView};
