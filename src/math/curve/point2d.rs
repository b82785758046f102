#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    x: f64,
    y: f64
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x: x, y: y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn slope(lhs_pt: &Point2D, rhs_pt: &Point2D) -> f64 {
        (rhs_pt.y - lhs_pt.y) / (rhs_pt.x - lhs_pt.x)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Point2D {
        Point2D::new(x, y)
    }
}

impl From<Point2D> for (f64, f64) {
    fn from(pt: Point2D) -> (f64, f64) {
        (pt.x, pt.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slope() {
        let lhs = Point2D::new(1.0, 1.0);
        let rhs = Point2D::new(3.0, 9.0);
        assert_eq!(4.0, Point2D::slope(&lhs, &rhs));
        assert_eq!(4.0, Point2D::slope(&rhs, &lhs));
    }

    #[test]
    fn test_tuple_conversion() {
        let pt: Point2D = (0.5, 2.0).into();
        assert_eq!(0.5, pt.x());
        assert_eq!((0.5, 2.0), pt.into());
    }
}
