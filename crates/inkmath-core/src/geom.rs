use serde::{Deserialize, Serialize};

pub type Unit = euclid::UnknownUnit;

pub type Rect = euclid::Rect<f64, Unit>;
pub type Box2D = euclid::Box2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> euclid::Point2D<f64, Unit> {
    euclid::point2(x, y)
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in surface coordinates.
///
/// Zero-sized boxes are valid (a single-point stroke has one) and still take part in unions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut b = Box2D::new(point(first.x, first.y), point(first.x, first.y));
        for p in it {
            let p = point(p.x, p.y);
            b.min = b.min.min(p);
            b.max = b.max.max(p);
        }
        Some(Self::from_box2d(&b))
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        // `euclid::Box2D::union` skips zero-area boxes, so compose the corners directly.
        let a = self.to_box2d();
        let b = other.to_box2d();
        Self::from_box2d(&Box2D::new(a.min.min(b.min), a.max.max(b.max)))
    }

    pub fn contains(&self, other: &Self) -> bool {
        self.min_x() <= other.min_x()
            && self.min_y() <= other.min_y()
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    pub fn to_rect(&self) -> Rect {
        euclid::rect(self.x, self.y, self.width, self.height)
    }

    pub fn from_rect(rect: &Rect) -> Self {
        Self::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height)
    }

    fn to_box2d(self) -> Box2D {
        Box2D::new(point(self.min_x(), self.min_y()), point(self.max_x(), self.max_y()))
    }

    fn from_box2d(b: &Box2D) -> Self {
        Self::new(b.min.x, b.min.y, b.max.x - b.min.x, b.max.y - b.min.y)
    }
}

/// Smallest box containing every input box, or `None` when there is nothing to bound.
pub fn union_box<'a>(boxes: impl IntoIterator<Item = &'a BoundingBox>) -> Option<BoundingBox> {
    boxes
        .into_iter()
        .fold(None, |acc: Option<BoundingBox>, b| match acc {
            Some(acc) => Some(acc.union(b)),
            None => Some(*b),
        })
}
