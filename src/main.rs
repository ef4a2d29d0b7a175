use clap::Parser;
use miniquad::*;
use rand::rngs::ThreadRng;
use std::path::PathBuf;

mod camera;
mod config;
mod error;
mod hud;
mod physics;
mod render;
mod state;

use crate::camera::Camera;
use crate::config::MazeConfig;
use crate::error::MazeResult;
use crate::hud::Hud;
use crate::physics::CollisionMode;
use crate::render::Renderer;
use crate::state::{Dir, GameState};

#[derive(Parser, Debug)]
#[command(name = "mazewalk")]
#[command(about = "Move a box around a field of walls with the arrow keys")]
struct Args {
    /// Layout file (JSON). The built-in classic layout is used when omitted
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Block any overlap with a wall, not only corners landing inside it
    #[arg(long)]
    strict_collision: bool,

    /// Print the effective layout as JSON and exit
    #[arg(long)]
    dump_layout: bool,

    /// Write the effective layout to a JSON file and exit
    #[arg(long, value_name = "PATH")]
    save_layout: Option<PathBuf>,

    /// Initial window width
    #[arg(long, default_value_t = 800)]
    width: i32,

    /// Initial window height
    #[arg(long, default_value_t = 600)]
    height: i32,
}

impl Args {
    fn maze_config(&self) -> MazeResult<MazeConfig> {
        let mut config = match &self.layout {
            Some(path) => MazeConfig::load_json(path)?,
            None => MazeConfig::default(),
        };
        if self.strict_collision {
            config.collision = CollisionMode::Strict;
        }
        Ok(config)
    }
}

fn key_to_dir(keycode: KeyCode) -> Option<Dir> {
    match keycode {
        KeyCode::A | KeyCode::Left => Some(Dir::Left),
        KeyCode::D | KeyCode::Right => Some(Dir::Right),
        KeyCode::W | KeyCode::Up => Some(Dir::Up),
        KeyCode::S | KeyCode::Down => Some(Dir::Down),
        _ => None,
    }
}

struct Stage {
    state: GameState,
    renderer: Renderer,
    camera: Camera,
    hud: Hud,
    rng: ThreadRng,
}

impl Stage {
    fn new(config: &MazeConfig, width: f32, height: f32) -> Stage {
        let mut renderer = Renderer::new();
        let hud = Hud::new(&mut *renderer.ctx);
        let state = GameState::new(config);
        let camera = Camera::new(state.field(), width, height);

        Stage {
            state,
            renderer,
            camera,
            hud,
            rng: rand::rng(),
        }
    }
}

impl EventHandler for Stage {
    fn update(&mut self) {}

    fn draw(&mut self) {
        self.renderer.draw(&self.state, &self.camera);
        self.hud.draw(&mut *self.renderer.ctx, &self.state);
        self.renderer.ctx.commit_frame();
        self.state.tick();
    }

    fn resize_event(&mut self, width: f32, height: f32) {
        self.camera.on_resize(self.state.field(), width, height);
    }

    // Held keys repeat, one step per event
    fn key_down_event(&mut self, keycode: KeyCode, _mods: KeyMods, _repeat: bool) {
        debug!("key down {:?}", keycode);
        if let Some(dir) = key_to_dir(keycode) {
            self.state.on_direction(dir);
            return;
        }
        match keycode {
            KeyCode::C => self.state.recolor_player(&mut self.rng),
            KeyCode::R => self.hud.show_report = !self.hud.show_report,
            KeyCode::Escape => window::request_quit(),
            _ => {}
        }
    }
}

fn main() {
    let args = Args::parse();

    let config = match args.maze_config() {
        Ok(config) => config,
        Err(err) => {
            error!("Failed to load layout: {}", err);
            std::process::exit(1);
        }
    };

    if args.dump_layout {
        match config.to_json() {
            Ok(json) => println!("{}", json),
            Err(err) => {
                error!("Failed to serialize layout: {}", err);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Some(path) = &args.save_layout {
        if let Err(err) = config.save_json(path) {
            error!("Failed to save layout to {}: {}", path.display(), err);
            std::process::exit(1);
        }
        info!("Layout saved to {}", path.display());
        return;
    }

    info!(
        "Layout loaded: field {}x{}, {} walls, {:?} collision",
        config.field.w,
        config.field.h,
        config.obstacles.len(),
        config.collision
    );

    miniquad::start(
        conf::Conf {
            window_title: String::from("mazewalk"),
            high_dpi: false,
            window_width: args.width,
            window_height: args.height,
            ..Default::default()
        },
        move || {
            let (w, h) = window::screen_size();
            Box::new(Stage::new(&config, w, h))
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_map_to_directions() {
        assert_eq!(key_to_dir(KeyCode::Left), Some(Dir::Left));
        assert_eq!(key_to_dir(KeyCode::D), Some(Dir::Right));
        assert_eq!(key_to_dir(KeyCode::Up), Some(Dir::Up));
        assert_eq!(key_to_dir(KeyCode::S), Some(Dir::Down));
        assert_eq!(key_to_dir(KeyCode::Space), None);
    }

    #[test]
    fn cli_overrides_collision_mode() {
        let args = Args::parse_from(["mazewalk", "--strict-collision"]);
        let config = args.maze_config().unwrap();
        assert_eq!(config.collision, CollisionMode::Strict);
        assert_eq!(config.obstacles.len(), 6);
    }

    #[test]
    fn cli_loads_layout_file() {
        let args = Args::parse_from(["mazewalk", "--layout", "layouts/classic.json"]);
        assert_eq!(args.maze_config().unwrap(), MazeConfig::default());
    }

    #[test]
    fn cli_reports_missing_layout() {
        let args = Args::parse_from(["mazewalk", "--layout", "layouts/nope.json"]);
        assert!(args.maze_config().is_err());
    }
}
