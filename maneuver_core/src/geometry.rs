//! Zone polygon geometry in SVG view-box coordinates

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("bad coordinate '{0}'")]
    BadNumber(String),
    #[error("odd number of coordinates in '{0}'")]
    OddCoordinates(String),
    #[error("polygon needs at least 3 points, got {0}")]
    TooFewPoints(usize),
    #[error("view box needs 4 numbers with positive size: '{0}'")]
    BadViewBox(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// SVG `viewBox`: min-x, min-y, width, height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn max_x(&self) -> f64 {
        self.min_x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.min_y + self.height
    }

    /// Map a fractional position (0..1 on each axis) into view-box coordinates
    pub fn at_fraction(&self, fx: f64, fy: f64) -> Point {
        Point {
            x: self.min_x + fx * self.width,
            y: self.min_y + fy * self.height,
        }
    }
}

impl Default for ViewBox {
    fn default() -> Self {
        ViewBox {
            min_x: 0.0,
            min_y: 0.0,
            width: 700.0,
            height: 700.0,
        }
    }
}

impl FromStr for ViewBox {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let numbers = parse_numbers(s)?;
        match numbers[..] {
            [min_x, min_y, width, height] if width > 0.0 && height > 0.0 => Ok(ViewBox {
                min_x,
                min_y,
                width,
                height,
            }),
            _ => Err(GeometryError::BadViewBox(s.to_string())),
        }
    }
}

impl TryFrom<String> for ViewBox {
    type Error = GeometryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ViewBox> for String {
    fn from(view_box: ViewBox) -> String {
        view_box.to_string()
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }
}

/// Closed polygon parsed from an SVG `points` attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    /// Parse `"x1,y1 x2,y2 ..."`. Commas and whitespace are both separators.
    pub fn parse(points: &str) -> Result<Self, GeometryError> {
        let numbers = parse_numbers(points)?;
        if numbers.len() % 2 != 0 {
            return Err(GeometryError::OddCoordinates(points.to_string()));
        }
        let points: Vec<Point> = numbers
            .chunks_exact(2)
            .map(|pair| Point { x: pair[0], y: pair[1] })
            .collect();
        if points.len() < 3 {
            return Err(GeometryError::TooFewPoints(points.len()));
        }
        Ok(Polygon { points })
    }

    /// Even-odd ray cast
    pub fn contains(&self, p: Point) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[j];
            if (a.y > p.y) != (b.y > p.y) {
                let cross_x = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
                if p.x < cross_x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Vertex average, good enough for placing a label
    ///
    /// An empty polygon has its centroid at the origin.
    pub fn centroid(&self) -> Point {
        if self.points.is_empty() {
            return Point { x: 0.0, y: 0.0 };
        }
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point { x: sx / n, y: sy / n }
    }

    /// Edges as (start, end) pairs, closing back to the first vertex
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points
            .iter()
            .zip(self.points.iter().cycle().skip(1))
            .map(|(a, b)| (*a, *b))
    }
}

fn parse_numbers(s: &str) -> Result<Vec<f64>, GeometryError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| GeometryError::BadNumber(token.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon::parse("0,0 10,0 10,10 0,10").unwrap()
    }

    #[test]
    fn test_parse_points() {
        let poly = Polygon::parse(" 1,2  3 4,5,6 ").unwrap();
        assert_eq!(poly.points.len(), 3);
        assert_eq!(poly.points[1], Point { x: 3.0, y: 4.0 });
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Polygon::parse("0,0 1,x 2,2"), Err(GeometryError::BadNumber(_))));
        assert!(matches!(Polygon::parse("0,0 1,1 2"), Err(GeometryError::OddCoordinates(_))));
        assert_eq!(Polygon::parse("0,0 1,1"), Err(GeometryError::TooFewPoints(2)));
    }

    #[test]
    fn test_contains() {
        let poly = square();
        assert!(poly.contains(Point { x: 5.0, y: 5.0 }));
        assert!(!poly.contains(Point { x: 15.0, y: 5.0 }));
        assert!(!poly.contains(Point { x: -1.0, y: -1.0 }));
    }

    #[test]
    fn test_concave_contains() {
        // U shape, notch open at the top between x=4 and x=6
        let poly = Polygon::parse("0,0 4,0 4,6 6,6 6,0 10,0 10,10 0,10").unwrap();
        assert!(!poly.contains(Point { x: 5.0, y: 2.0 }));
        assert!(poly.contains(Point { x: 5.0, y: 8.0 }));
        assert!(poly.contains(Point { x: 2.0, y: 2.0 }));
    }

    #[test]
    fn test_centroid_and_edges() {
        let poly = square();
        assert_eq!(poly.centroid(), Point { x: 5.0, y: 5.0 });
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].1, poly.points[0]);
    }

    #[test]
    fn test_degenerate_polygon_contains_nothing() {
        let empty: Polygon = serde_json::from_str(r#"{"points": []}"#).unwrap();
        assert!(!empty.contains(Point { x: 0.0, y: 0.0 }));
        assert_eq!(empty.centroid(), Point { x: 0.0, y: 0.0 });
        assert_eq!(empty.edges().count(), 0);

        let segment = Polygon {
            points: vec![Point { x: 0.0, y: 0.0 }, Point { x: 10.0, y: 10.0 }],
        };
        assert!(!segment.contains(Point { x: 5.0, y: 5.0 }));
    }

    #[test]
    fn test_view_box() {
        let view_box: ViewBox = "0 0 700 700".parse().unwrap();
        assert_eq!(view_box, ViewBox::default());
        assert_eq!(view_box.to_string(), "0 0 700 700");
        assert_eq!(view_box.at_fraction(0.5, 0.25), Point { x: 350.0, y: 175.0 });
        assert!("0 0 0 10".parse::<ViewBox>().is_err());
        assert!("0 0 10".parse::<ViewBox>().is_err());
    }
}
