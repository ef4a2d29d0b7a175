use super::common::{BoundingBox, Color, Dir, Field};
use super::obstacle::ObstacleSet;
use crate::physics::{CollisionMode, collides_with_any};
use crate::render::Surface;

pub const DEFAULT_STEP: f32 = 15.0;
pub const DEFAULT_SIZE: (f32, f32) = (50.0, 30.0);

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum MoveOutcome {
    Moved,
    BlockedByBoundary,
    /// Index into the obstacle set of the first wall hit.
    BlockedByWall(usize),
}

impl MoveOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved)
    }
}

pub struct Player {
    pub bb: BoundingBox,
    field: Field,
    obstacles: ObstacleSet,
    collision: CollisionMode,
}

impl Player {
    pub fn new(x: f32, y: f32, field: Field, obstacles: ObstacleSet) -> Self {
        let (w, h) = DEFAULT_SIZE;
        let bb = BoundingBox::new(x, y, w, h, Color::PLAYER)
            .with_velocity(DEFAULT_STEP, DEFAULT_STEP);
        Self::from_bb(bb, field, obstacles)
    }

    pub fn from_bb(bb: BoundingBox, field: Field, obstacles: ObstacleSet) -> Self {
        Player {
            bb,
            field,
            obstacles,
            collision: CollisionMode::default(),
        }
    }

    pub fn with_collision(mut self, collision: CollisionMode) -> Self {
        self.collision = collision;
        self
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn set_color(&mut self, color: Color) {
        self.bb.color = color;
    }

    pub fn up(&mut self) -> MoveOutcome {
        self.step(Dir::Up)
    }

    pub fn down(&mut self) -> MoveOutcome {
        self.step(Dir::Down)
    }

    pub fn left(&mut self) -> MoveOutcome {
        self.step(Dir::Left)
    }

    pub fn right(&mut self) -> MoveOutcome {
        self.step(Dir::Right)
    }

    /// Try one full step in `dir`. The stored box is only replaced when the
    /// candidate stays inside the field and clears every wall.
    pub fn step(&mut self, dir: Dir) -> MoveOutcome {
        let candidate = self.candidate(dir);

        let inside = match dir {
            Dir::Right => candidate.x1 <= self.field.w,
            Dir::Left => candidate.x0 >= 0.0,
            Dir::Up => candidate.y0 >= 0.0,
            Dir::Down => candidate.y1 <= self.field.h,
        };
        if !inside {
            return MoveOutcome::BlockedByBoundary;
        }

        if let Some(index) = collides_with_any(&candidate, &self.obstacles, self.collision) {
            return MoveOutcome::BlockedByWall(index);
        }

        self.bb = candidate;
        MoveOutcome::Moved
    }

    fn candidate(&self, dir: Dir) -> BoundingBox {
        let (dx, dy) = match dir {
            Dir::Right => (self.bb.vx, 0.0),
            Dir::Left => (-self.bb.vx, 0.0),
            Dir::Up => (0.0, -self.bb.vy),
            Dir::Down => (0.0, self.bb.vy),
        };
        self.bb.duplicate().translate(dx, dy)
    }

    pub fn describe(&self) -> String {
        self.bb.describe()
    }

    pub fn paint(&self, surface: &mut dyn Surface) {
        self.bb.paint(surface);
    }
}
