use std::ops::Index;

use crate::geometry::{WorldPoint, WorldVector};

#[derive(Copy, Clone, Debug)]
pub struct Triangle([WorldPoint; 3]);

impl Triangle {
    pub fn new(a: WorldPoint, b: WorldPoint, c: WorldPoint) -> Triangle {
        Triangle([a, b, c])
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorldPoint> {
        self.0.iter()
    }

    /// Returns edge vectors, coming from the first vertex.
    pub fn edges(&self) -> [WorldVector; 2] {
        [self.0[1] - self.0[0], self.0[2] - self.0[0]]
    }

    /// Returns a normal vector of the triangle, not normalized.
    pub fn normal(&self) -> WorldVector {
        let [e1, e2] = self.edges();
        e1.cross(&e2)
    }
}

impl Index<usize> for Triangle {
    type Output = WorldPoint;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
