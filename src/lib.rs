// Library exports for the binary and tests
pub use app::App;
pub use assets::{Sprite, SpriteSet};
pub use collision::Hitbox;
pub use config::{AssetPaths, GameConfig};
pub use entities::{Alien, Bullet, BulletOwner, Entity, Formation, Ship, SpriteKind};
pub use error::{AssetError, InputError};
pub use game_loop::{FrameDriver, LoopState, Phases};
pub use input::{InputAction, InputManager};
pub use renderer::{GameRenderer, RenderView, Starfield};
pub use score::{BoostState, ScoreBoard};
pub use session::{Outcome, Session, TickReport};

pub mod app;
pub mod assets;
pub mod collision;
pub mod config;
pub mod entities;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod score;
pub mod session;
