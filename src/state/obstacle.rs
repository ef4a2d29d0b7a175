use super::common::{BoundingBox, Color};
use crate::render::Surface;
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::rc::Rc;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
pub enum ObstacleKind {
    Wide,
    Narrow,
}

impl ObstacleKind {
    pub const fn size(self) -> (f32, f32) {
        match self {
            ObstacleKind::Wide => (50.0, 10.0),
            ObstacleKind::Narrow => (10.0, 50.0),
        }
    }

    pub const fn color(self) -> Color {
        match self {
            ObstacleKind::Wide | ObstacleKind::Narrow => Color::WALL,
        }
    }

    pub fn build(self, x: f32, y: f32) -> BoundingBox {
        let (w, h) = self.size();
        BoundingBox::new(x, y, w, h, self.color())
    }
}

/// Placement of a single wall in a layout.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
pub struct ObstacleDef {
    pub kind: ObstacleKind,
    pub x: f32,
    pub y: f32,
}

impl ObstacleDef {
    pub const fn new(kind: ObstacleKind, x: f32, y: f32) -> Self {
        ObstacleDef { kind, x, y }
    }
}

pub const CLASSIC_OBSTACLES: [ObstacleDef; 6] = [
    ObstacleDef::new(ObstacleKind::Wide, 10.0, 20.0),
    ObstacleDef::new(ObstacleKind::Wide, 150.0, 120.0),
    ObstacleDef::new(ObstacleKind::Wide, 200.0, 300.0),
    ObstacleDef::new(ObstacleKind::Narrow, 210.0, 20.0),
    ObstacleDef::new(ObstacleKind::Narrow, 50.0, 220.0),
    ObstacleDef::new(ObstacleKind::Narrow, 300.0, 200.0),
];

/// Fixed, ordered walls. Cloning shares the same boxes.
#[derive(Clone, Debug)]
pub struct ObstacleSet {
    walls: Rc<[BoundingBox]>,
}

impl ObstacleSet {
    pub fn new(walls: Vec<BoundingBox>) -> Self {
        ObstacleSet {
            walls: walls.into(),
        }
    }

    pub fn from_defs(defs: &[ObstacleDef]) -> Self {
        Self::new(defs.iter().map(|d| d.kind.build(d.x, d.y)).collect())
    }

    #[allow(dead_code)]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn paint(&self, surface: &mut dyn Surface) {
        for wall in self.walls.iter() {
            wall.paint(surface);
        }
    }
}

impl Deref for ObstacleSet {
    type Target = [BoundingBox];

    fn deref(&self) -> &[BoundingBox] {
        &self.walls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_have_fixed_sizes() {
        let wide = ObstacleKind::Wide.build(10.0, 20.0);
        assert_eq!((wide.x0, wide.y0, wide.x1, wide.y1), (10.0, 20.0, 60.0, 30.0));
        let narrow = ObstacleKind::Narrow.build(210.0, 20.0);
        assert_eq!(
            (narrow.x0, narrow.y0, narrow.x1, narrow.y1),
            (210.0, 20.0, 220.0, 70.0)
        );
        assert_eq!((wide.vx, wide.vy), (0.0, 0.0));
        assert_eq!(narrow.color, Color::WALL);
    }

    #[test]
    fn classic_layout_keeps_order() {
        let set = ObstacleSet::from_defs(&CLASSIC_OBSTACLES);
        assert_eq!(set.len(), 6);
        assert_eq!(set[0].x0, 10.0);
        assert_eq!(set[3].width(), 10.0);
        assert_eq!(set[5].y0, 200.0);
    }

    #[test]
    fn clones_share_walls() {
        let set = ObstacleSet::from_defs(&CLASSIC_OBSTACLES);
        let shared = set.clone();
        assert!(Rc::ptr_eq(&set.walls, &shared.walls));
        assert!(ObstacleSet::empty().is_empty());
    }
}
