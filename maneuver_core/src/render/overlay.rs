//! Zone overlay: one clickable polygon per zone

use crate::geometry::{GeometryError, Point, Polygon, ViewBox};
use crate::table::ZoneMap;

#[derive(Debug, Clone, PartialEq)]
pub struct ZonePolygon {
    pub zone: String,
    /// Raw SVG point string as it appears in the zone map
    pub points: String,
    pub polygon: Polygon,
}

/// The clickable layer drawn over the ship image
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub view_box: ViewBox,
    pub polygons: Vec<ZonePolygon>,
}

impl Overlay {
    /// First zone whose polygon contains the point, in view-box coordinates
    pub fn zone_at(&self, point: Point) -> Option<&str> {
        self.polygons
            .iter()
            .find(|zp| zp.polygon.contains(point))
            .map(|zp| zp.zone.as_str())
    }

    pub fn zone_names(&self) -> impl Iterator<Item = &str> {
        self.polygons.iter().map(|zp| zp.zone.as_str())
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

/// Build a fresh overlay from the zone map
pub fn render_overlay(zones: &ZoneMap, view_box: ViewBox) -> Result<Overlay, (String, GeometryError)> {
    let polygons = zones
        .iter()
        .map(|(zone, points)| {
            Polygon::parse(points)
                .map(|polygon| ZonePolygon {
                    zone: zone.to_string(),
                    points: points.to_string(),
                    polygon,
                })
                .map_err(|e| (zone.to_string(), e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Overlay { view_box, polygons })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zones() -> ZoneMap {
        ZoneMap::from_json(
            r#"{
                "front_green": "300,0 400,0 400,100 300,100",
                "rear_green": "300,600 400,600 400,700 300,700"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_one_polygon_per_zone() {
        let overlay = render_overlay(&zones(), ViewBox::default()).unwrap();
        assert_eq!(overlay.len(), 2);
        let names: Vec<_> = overlay.zone_names().collect();
        assert_eq!(names, vec!["front_green", "rear_green"]);
        assert_eq!(overlay.view_box.to_string(), "0 0 700 700");
    }

    #[test]
    fn test_zone_hit_test() {
        let overlay = render_overlay(&zones(), ViewBox::default()).unwrap();
        assert_eq!(overlay.zone_at(Point { x: 350.0, y: 50.0 }), Some("front_green"));
        assert_eq!(overlay.zone_at(Point { x: 350.0, y: 650.0 }), Some("rear_green"));
        assert_eq!(overlay.zone_at(Point { x: 50.0, y: 350.0 }), None);
    }

    #[test]
    fn test_bad_points_names_zone() {
        let zones = ZoneMap::from_json(r#"{"abeam_red": "0,0 1"}"#).unwrap();
        let (zone, err) = render_overlay(&zones, ViewBox::default()).unwrap_err();
        assert_eq!(zone, "abeam_red");
        assert!(matches!(err, GeometryError::OddCoordinates(_)));
    }
}
