pub mod common;
pub mod game_state;
pub mod obstacle;
pub mod player;

pub use common::{BoundingBox, Color, Dir, Field};
pub use game_state::GameState;
pub use obstacle::{ObstacleDef, ObstacleSet};
pub use player::Player;
