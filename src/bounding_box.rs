//! Axis aligned bounding boxes in 3D space.

use nalgebra::Vector3;

/// Axis aligned box spanned between two corners
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    /// Corner with the smallest coordinates
    pub min: Vector3<f64>,

    /// Corner with the largest coordinates
    pub max: Vector3<f64>,
}

impl BoundingBox {
    /// Constructs the smallest box containing every point.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_iter<I: IntoIterator<Item = Vector3<f64>>>(points: I) -> Option<BoundingBox> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(BoundingBox::around(first), BoundingBox::including))
    }

    /// Box containing only `point`
    pub fn around(point: Vector3<f64>) -> BoundingBox {
        BoundingBox {
            min: point,
            max: point,
        }
    }

    /// Smallest box containing `self` and `point`
    pub fn including(self, point: Vector3<f64>) -> BoundingBox {
        BoundingBox {
            min: self.min.inf(&point),
            max: self.max.sup(&point),
        }
    }

    /// Grows the box by `margin` in every direction
    pub fn inflate(&self, margin: f64) -> BoundingBox {
        let margin = Vector3::repeat(margin);
        BoundingBox {
            min: self.min - margin,
            max: self.max + margin,
        }
    }

    /// Checks whether a point lies inside the box or on its boundary
    pub fn contains(&self, point: &Vector3<f64>) -> bool {
        self.min
            .iter()
            .zip(self.max.iter())
            .zip(point.iter())
            .all(|((min, max), p)| min <= p && p <= max)
    }
}
