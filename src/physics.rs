use crate::state::BoundingBox;
use serde::{Deserialize, Serialize};

/// Which overlap rule decides whether a candidate position is blocked.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum CollisionMode {
    /// A corner of the candidate lies inside the obstacle's closed box.
    #[default]
    Corners,
    /// Closed interval overlap on both axes. Also catches boxes crossing
    /// each other without any corner inside.
    Strict,
}

/// True if any corner of `a` lies inside the closed box of `b`.
///
/// Not symmetric: a small `b` fully inside a large `a` has no corner of `a`
/// inside it. Movement always calls this as `intersects(candidate, obstacle)`.
pub fn intersects(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.corners().iter().any(|&(x, y)| b.contains_point(x, y))
}

pub fn overlaps(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

pub fn collides(mode: CollisionMode, candidate: &BoundingBox, obstacle: &BoundingBox) -> bool {
    match mode {
        CollisionMode::Corners => intersects(candidate, obstacle),
        CollisionMode::Strict => overlaps(candidate, obstacle),
    }
}

/// Index of the first obstacle the candidate collides with.
pub fn collides_with_any(
    candidate: &BoundingBox,
    obstacles: &[BoundingBox],
    mode: CollisionMode,
) -> Option<usize> {
    obstacles
        .iter()
        .position(|obstacle| collides(mode, candidate, obstacle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::obstacle::CLASSIC_OBSTACLES;
    use crate::state::{Color, ObstacleSet};

    fn bb(x: f32, y: f32, w: f32, h: f32) -> BoundingBox {
        BoundingBox::new(x, y, w, h, Color::WALL)
    }

    #[test]
    fn every_obstacle_intersects_itself() {
        for obstacle in ObstacleSet::from_defs(&CLASSIC_OBSTACLES).iter() {
            assert!(intersects(obstacle, obstacle));
            assert!(overlaps(obstacle, obstacle));
        }
    }

    #[test]
    fn disjoint_boxes_never_intersect() {
        let pairs = [
            (bb(0.0, 0.0, 10.0, 10.0), bb(20.0, 0.0, 10.0, 10.0)),
            (bb(0.0, 0.0, 10.0, 10.0), bb(0.0, 20.0, 10.0, 10.0)),
            (bb(0.0, 0.0, 10.0, 10.0), bb(30.0, 40.0, 5.0, 5.0)),
            (bb(100.0, 100.0, 50.0, 30.0), bb(10.0, 20.0, 50.0, 10.0)),
        ];
        for (a, b) in pairs {
            assert!(!intersects(&a, &b));
            assert!(!intersects(&b, &a));
            assert!(!overlaps(&a, &b));
        }
    }

    #[test]
    fn touching_edges_count_as_intersection() {
        let a = bb(0.0, 0.0, 10.0, 10.0);
        let b = bb(10.0, 0.0, 10.0, 10.0);
        assert!(intersects(&a, &b));
        assert!(intersects(&b, &a));
    }

    #[test]
    fn corner_test_is_not_symmetric() {
        let large = bb(0.0, 0.0, 100.0, 100.0);
        let small = bb(40.0, 40.0, 10.0, 10.0);
        assert!(intersects(&small, &large));
        assert!(!intersects(&large, &small));
    }

    #[test]
    fn corner_test_misses_crossing_boxes() {
        // A wide bar crossing a tall bar: no corner of either is inside the other.
        let wide = bb(0.0, 20.0, 50.0, 10.0);
        let tall = bb(20.0, 0.0, 10.0, 50.0);
        assert!(!intersects(&wide, &tall));
        assert!(!intersects(&tall, &wide));
        assert!(overlaps(&wide, &tall));
        assert!(collides(CollisionMode::Strict, &wide, &tall));
        assert!(!collides(CollisionMode::Corners, &wide, &tall));
    }

    #[test]
    fn collides_with_any_reports_first_hit() {
        let obstacles = [
            bb(0.0, 0.0, 10.0, 10.0),
            bb(50.0, 50.0, 10.0, 10.0),
            bb(55.0, 55.0, 10.0, 10.0),
        ];
        let candidate = bb(52.0, 52.0, 10.0, 10.0);
        assert_eq!(
            collides_with_any(&candidate, &obstacles, CollisionMode::Corners),
            Some(1)
        );
        let clear = bb(200.0, 200.0, 10.0, 10.0);
        assert_eq!(
            collides_with_any(&clear, &obstacles, CollisionMode::Corners),
            None
        );
        assert_eq!(collides_with_any(&clear, &[], CollisionMode::Strict), None);
    }
}
