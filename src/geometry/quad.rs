use crate::geometry::{WorldPoint, WorldVector};

/// A planar quadrilateral.
///
/// Corners are ordered (top left, top right, bottom left, bottom right) as
/// seen against the winding normal. The containment test in `intersect`
/// assumes exactly this ordering, an arbitrary convex quad will misbehave.
#[derive(Copy, Clone, Debug)]
pub struct Quad([WorldPoint; 4]);

impl Quad {
    pub fn new(corners: [WorldPoint; 4]) -> Quad {
        Quad(corners)
    }

    pub fn corners(&self) -> &[WorldPoint; 4] {
        &self.0
    }

    /// Returns a normal vector of the quad's plane, not normalized.
    /// Taken from the first three corners.
    pub fn winding_normal(&self) -> WorldVector {
        (self.0[1] - self.0[0]).cross(&(self.0[2] - self.0[0]))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert2::assert;

    #[test]
    fn winding_normal_uses_the_first_three_corners() {
        let quad = Quad::new([
            WorldPoint::new(-1.0, 1.0, 0.0),
            WorldPoint::new(1.0, 1.0, 0.0),
            WorldPoint::new(-1.0, -1.0, 0.0),
            WorldPoint::new(1.0, -1.0, 0.0),
        ]);
        assert!(quad.winding_normal() == WorldVector::new(0.0, 0.0, -4.0));
    }
}
