pub mod assets;
pub mod config;
pub mod controllers;
pub mod disc;
pub mod effect;
pub mod input;
pub mod physics;
pub mod scene_context;
pub mod teleport;
pub mod time;

pub use config::TranslocatorConfig;
pub use disc::DiscState;
pub use effect::Effect;
pub use input::{
    Action, ActionButton, ButtonPhase, InputBindings, InputContext, InputEvent, InputTracker,
};
pub use scene_context::SceneContext;
pub use time::Time;
