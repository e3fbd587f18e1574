use serde::Serialize;

use super::projection::PlanarPoint;

/// Bounding box of a set of planar points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanarExtent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl PlanarExtent {
    pub fn of(points: &[PlanarPoint]) -> Option<Self> {
        let first = points.first()?;
        let init = PlanarExtent {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(points.iter().fold(init, |e, p| PlanarExtent {
            min_x: e.min_x.min(p.x),
            min_y: e.min_y.min(p.y),
            max_x: e.max_x.max(p.x),
            max_y: e.max_y.max(p.y),
        }))
    }

    pub fn expand(&self, margin_m: f64) -> TileBounds {
        TileBounds {
            south: self.min_y - margin_m,
            west: self.min_x - margin_m,
            north: self.max_y + margin_m,
            east: self.max_x + margin_m,
        }
    }
}

/// Box handed to the basemap provider, in Web Mercator metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TileBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TileRequest {
    pub bounds: TileBounds,
    pub zoom: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extent_covers_all_points() {
        let points = [
            PlanarPoint { x: 10.0, y: -5.0 },
            PlanarPoint { x: -2.0, y: 7.0 },
            PlanarPoint { x: 3.0, y: 1.0 },
        ];
        let extent = PlanarExtent::of(&points).unwrap();
        assert_eq!(
            extent,
            PlanarExtent {
                min_x: -2.0,
                min_y: -5.0,
                max_x: 10.0,
                max_y: 7.0
            }
        );
        assert_eq!(
            extent.expand(100.0),
            TileBounds {
                south: -105.0,
                west: -102.0,
                north: 107.0,
                east: 110.0
            }
        );
    }

    #[test]
    fn no_points_no_extent() {
        assert_eq!(PlanarExtent::of(&[]), None);
    }
}
