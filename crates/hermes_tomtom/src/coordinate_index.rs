use std::collections::BTreeMap;

use crate::coordinate::{Coordinate, CoordinateKey};

/// Positions of every coordinate in the geometry of each leg, plus the
/// concatenated path of the whole route.
pub struct CoordinateIndex {
    /// Per leg, the sorted positions at which a coordinate occurs. A
    /// coordinate shows up more than once when the road crosses itself.
    legs: Vec<BTreeMap<CoordinateKey, Vec<usize>>>,
    path: Vec<Coordinate>,
}

impl CoordinateIndex {
    pub fn new(legs_geometry: &[Vec<Coordinate>]) -> Self {
        let mut legs = Vec::with_capacity(legs_geometry.len());
        let mut path = Vec::with_capacity(legs_geometry.iter().map(Vec::len).sum());

        for geometry in legs_geometry {
            let mut positions: BTreeMap<CoordinateKey, Vec<usize>> = BTreeMap::new();
            for (position, coordinate) in geometry.iter().enumerate() {
                positions.entry(coordinate.key()).or_default().push(position);
            }

            legs.push(positions);
            path.extend_from_slice(geometry);
        }

        CoordinateIndex { legs, path }
    }

    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    /// First position of `point` in the geometry of `leg`.
    pub fn locate_in_leg(&self, leg: usize, point: &Coordinate) -> Option<usize> {
        self.locate_in_leg_from(leg, point, 0)
    }

    /// First position of `point` in the geometry of `leg` that is not
    /// before `cursor`.
    pub fn locate_in_leg_from(
        &self,
        leg: usize,
        point: &Coordinate,
        cursor: usize,
    ) -> Option<usize> {
        let positions = self.legs.get(leg)?.get(&point.key())?;
        let first = positions.partition_point(|&position| position < cursor);

        positions.get(first).copied()
    }

    /// Scans the route path for `point`, starting at `from_cursor` and never
    /// before it. A cursor past the end of the path is clamped to the last
    /// point.
    pub fn locate_in_route(&self, point: &Coordinate, from_cursor: usize) -> Option<usize> {
        if self.path.is_empty() {
            return None;
        }

        let start = from_cursor.min(self.path.len() - 1);
        self.path[start..]
            .iter()
            .position(|coordinate| coordinate == point)
            .map(|offset| start + offset)
    }

    /// The first leg whose geometry contains `point`.
    pub fn leg_containing(&self, point: &Coordinate) -> Option<usize> {
        let key = point.key();
        self.legs
            .iter()
            .position(|positions| positions.contains_key(&key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate::new(latitude, longitude)
    }

    fn create_index() -> CoordinateIndex {
        CoordinateIndex::new(&[
            vec![c(0.0, 0.0), c(0.0, 1.0), c(1.0, 1.0), c(0.0, 1.0), c(0.0, 2.0)],
            vec![c(0.0, 2.0), c(0.0, 3.0), c(0.0, 4.0)],
        ])
    }

    #[test]
    fn test_path_is_concatenation() {
        let index = create_index();

        assert_eq!(index.path().len(), 8);
        assert_eq!(index.path()[5], c(0.0, 2.0));
    }

    #[test]
    fn test_locate_in_leg() {
        let index = create_index();

        assert_eq!(index.locate_in_leg(0, &c(0.0, 1.0)), Some(1));
        assert_eq!(index.locate_in_leg(1, &c(0.0, 1.0)), None);
        assert_eq!(index.locate_in_leg(1, &c(0.0, 4.0)), Some(2));
        assert_eq!(index.locate_in_leg(7, &c(0.0, 4.0)), None);
    }

    #[test]
    fn test_locate_in_leg_from_cursor() {
        let index = create_index();

        assert_eq!(index.locate_in_leg_from(0, &c(0.0, 1.0), 1), Some(1));
        assert_eq!(index.locate_in_leg_from(0, &c(0.0, 1.0), 2), Some(3));
        assert_eq!(index.locate_in_leg_from(0, &c(0.0, 1.0), 4), None);
        assert_eq!(index.locate_in_leg_from(0, &c(0.0, 0.0), 1), None);
    }

    #[test]
    fn test_locate_in_route() {
        let index = create_index();

        assert_eq!(index.locate_in_route(&c(0.0, 2.0), 0), Some(4));
        assert_eq!(index.locate_in_route(&c(0.0, 2.0), 5), Some(5));
        assert_eq!(index.locate_in_route(&c(0.0, 0.0), 1), None);
        assert_eq!(index.locate_in_route(&c(0.0, 4.0), 100), Some(7));
        assert_eq!(index.locate_in_route(&c(9.0, 9.0), 0), None);
    }

    #[test]
    fn test_leg_containing() {
        let index = create_index();

        assert_eq!(index.leg_containing(&c(1.0, 1.0)), Some(0));
        assert_eq!(index.leg_containing(&c(0.0, 2.0)), Some(0));
        assert_eq!(index.leg_containing(&c(0.0, 3.0)), Some(1));
        assert_eq!(index.leg_containing(&c(5.0, 5.0)), None);
    }

    #[test]
    fn test_empty_index() {
        let index = CoordinateIndex::new(&[]);

        assert_eq!(index.locate_in_route(&c(0.0, 0.0), 0), None);
        assert_eq!(index.leg_containing(&c(0.0, 0.0)), None);
    }
}
