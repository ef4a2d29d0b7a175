use super::common::{Color, Dir, Field};
use super::obstacle::ObstacleSet;
use super::player::{MoveOutcome, Player};
use crate::config::MazeConfig;
use crate::render::Surface;
use miniquad::debug;
use rand::Rng;

pub struct GameState {
    pub player: Player,
    pub caption: String,
    frames: u64,
}

impl GameState {
    pub fn new(config: &MazeConfig) -> GameState {
        GameState {
            player: config.build_player(),
            caption: config.caption.clone(),
            frames: 0,
        }
    }

    pub fn field(&self) -> Field {
        self.player.field()
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        self.player.obstacles()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn tick(&mut self) {
        self.frames += 1;
    }

    pub fn on_direction(&mut self, dir: Dir) -> MoveOutcome {
        let outcome = match dir {
            Dir::Up => self.player.up(),
            Dir::Down => self.player.down(),
            Dir::Left => self.player.left(),
            Dir::Right => self.player.right(),
        };
        if outcome.moved() {
            debug!("{:?}: {}", dir, self.player.describe());
        } else {
            debug!("{:?} rejected ({:?}): {}", dir, outcome, self.player.describe());
        }
        outcome
    }

    pub fn recolor_player(&mut self, rng: &mut impl Rng) {
        self.player.set_color(Color::random(rng));
    }

    pub fn hud_lines(&self) -> [String; 2] {
        [self.caption.clone(), format!("Frames : {}", self.frames)]
    }

    /// Background, then the player, then the walls on top.
    pub fn paint(&self, surface: &mut dyn Surface) {
        let field = self.field();
        surface.fill_rect(0.0, 0.0, field.w, field.h, Color::BACKGROUND);
        self.player.paint(surface);
        self.obstacles().paint(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[derive(Default)]
    struct RecordingSurface {
        rects: Vec<(f32, f32, f32, f32, Color)>,
    }

    impl Surface for RecordingSurface {
        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
            self.rects.push((x, y, w, h, color));
        }
    }

    #[test]
    fn paints_background_player_then_walls() {
        let state = GameState::new(&MazeConfig::default());
        let mut surface = RecordingSurface::default();
        state.paint(&mut surface);

        assert_eq!(surface.rects.len(), 2 + 6);
        assert_eq!(surface.rects[0], (0.0, 0.0, 480.0, 360.0, Color::BACKGROUND));
        assert_eq!(surface.rects[1], (10.0, 50.0, 50.0, 30.0, Color::PLAYER));
        assert_eq!(surface.rects[2], (10.0, 20.0, 50.0, 10.0, Color::WALL));
        assert_eq!(surface.rects[7], (300.0, 200.0, 10.0, 50.0, Color::WALL));
    }

    #[test]
    fn tick_counts_frames_for_hud() {
        let mut state = GameState::new(&MazeConfig::default());
        for _ in 0..3 {
            state.tick();
        }
        assert_eq!(state.frames(), 3);
        assert_eq!(state.hud_lines()[1], "Frames : 3");
        assert_eq!(state.hud_lines()[0], "mazewalk");
    }

    #[test]
    fn directions_move_the_player() {
        let mut state = GameState::new(&MazeConfig::default());
        assert_eq!(state.on_direction(Dir::Right), MoveOutcome::Moved);
        assert_eq!(state.on_direction(Dir::Down), MoveOutcome::Moved);
        assert_eq!(state.player.describe(), "coord = (25,65) vel = (15,15)");
    }

    #[test]
    fn up_from_start_hits_top_wall() {
        // Start (10,50): one step up puts the top edge on the wide wall at y 20..30.
        let mut state = GameState::new(&MazeConfig::default());
        assert_eq!(state.on_direction(Dir::Up), MoveOutcome::Moved);
        assert_eq!(state.on_direction(Dir::Up), MoveOutcome::BlockedByWall(0));
        assert_eq!(state.player.bb.y0, 35.0);
    }

    #[test]
    fn recolor_only_changes_color() {
        let mut state = GameState::new(&MazeConfig::default());
        let before = state.player.bb;
        state.recolor_player(&mut StdRng::seed_from_u64(1));
        let after = state.player.bb;
        assert_eq!(
            (after.x0, after.y0, after.x1, after.y1),
            (before.x0, before.y0, before.x1, before.y1)
        );
        assert!(after.color.r >= 1 && after.color.g >= 1 && after.color.b >= 1);
    }
}
