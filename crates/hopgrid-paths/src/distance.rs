use hopgrid_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible and consistent for 4-connected movement where every step
/// costs at least 1.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(0, 2);
        let b = Point::new(6, 0);
        assert_eq!(manhattan(a, b), 8);
        assert_eq!(manhattan(b, a), 8);
        assert_eq!(manhattan(a, a), 0);
    }
}
