use crate::error::{MazeError, MazeResult};
use crate::physics::{CollisionMode, intersects};
use crate::state::obstacle::CLASSIC_OBSTACLES;
use crate::state::player::{DEFAULT_SIZE, DEFAULT_STEP};
use crate::state::{BoundingBox, Color, Field, ObstacleDef, ObstacleSet, Player};
use miniquad::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(default)]
pub struct PlayerConfig {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub step_x: f32,
    pub step_y: f32,
    pub color: Color,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            x: 10.0,
            y: 50.0,
            w: DEFAULT_SIZE.0,
            h: DEFAULT_SIZE.1,
            step_x: DEFAULT_STEP,
            step_y: DEFAULT_STEP,
            color: Color::PLAYER,
        }
    }
}

impl PlayerConfig {
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.w, self.h, self.color)
            .with_velocity(self.step_x, self.step_y)
    }
}

/// Everything needed to build a game: playfield, player and walls.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(default)]
pub struct MazeConfig {
    pub field: Field,
    pub player: PlayerConfig,
    pub obstacles: Vec<ObstacleDef>,
    pub collision: CollisionMode,
    pub caption: String,
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig {
            field: Field { w: 480.0, h: 360.0 },
            player: PlayerConfig::default(),
            obstacles: CLASSIC_OBSTACLES.to_vec(),
            collision: CollisionMode::Corners,
            caption: String::from("mazewalk"),
        }
    }
}

impl MazeConfig {
    pub fn from_json_str(s: &str) -> MazeResult<Self> {
        let config: MazeConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_json(path: impl AsRef<Path>) -> MazeResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(MazeError::LayoutNotFound {
                path: path.to_path_buf(),
            });
        }
        let s = fs::read_to_string(path)?;
        Self::from_json_str(&s)
    }

    pub fn to_json(&self) -> MazeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> MazeResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Reject layouts that would break the box invariants. Layouts that are
    /// merely odd (player off the field or on a wall) are only logged.
    pub fn validate(&self) -> MazeResult<()> {
        let numbers = [
            self.field.w,
            self.field.h,
            self.player.x,
            self.player.y,
            self.player.w,
            self.player.h,
            self.player.step_x,
            self.player.step_y,
        ];
        if numbers.iter().any(|n| !n.is_finite()) {
            return Err(MazeError::invalid("all numbers must be finite"));
        }
        if self.field.w <= 0.0 || self.field.h <= 0.0 {
            return Err(MazeError::invalid(format!(
                "field must have a positive size, got {}x{}",
                self.field.w, self.field.h
            )));
        }
        if self.player.w <= 0.0 || self.player.h <= 0.0 {
            return Err(MazeError::invalid(format!(
                "player must have a positive size, got {}x{}",
                self.player.w, self.player.h
            )));
        }
        if self.player.step_x < 0.0 || self.player.step_y < 0.0 {
            return Err(MazeError::invalid("player step must not be negative"));
        }
        if let Some(def) = self
            .obstacles
            .iter()
            .find(|d| !d.x.is_finite() || !d.y.is_finite())
        {
            return Err(MazeError::invalid(format!(
                "obstacle {:?} has a non-finite position",
                def.kind
            )));
        }

        let player = self.player.bounding_box();
        if !self.field.contains(&player) {
            warn!("Player starts outside the field: {}", player.describe());
        }
        if let Some(index) = self
            .obstacles
            .iter()
            .position(|d| intersects(&player, &d.kind.build(d.x, d.y)))
        {
            warn!("Player starts on obstacle {}", index);
        }
        Ok(())
    }

    pub fn build_player(&self) -> Player {
        let obstacles = ObstacleSet::from_defs(&self.obstacles);
        Player::from_bb(self.player.bounding_box(), self.field, obstacles)
            .with_collision(self.collision)
    }
}
