pub mod ambient;
pub mod camera;
pub mod catalog;
pub mod comets;
pub mod constants;
pub mod manifest;
pub mod playback;
pub mod scene;
pub mod theme;
pub mod timeline;
pub mod title;

pub static SKY_WGSL: &str = include_str!("../shaders/sky.wgsl");
pub static SPRITES_WGSL: &str = include_str!("../shaders/sprites.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

pub use camera::*;
pub use catalog::{Track, TrackCatalog};
pub use playback::{PanelDrag, PlaybackController, PlaybackStatus, PlayerMode, TrackChange};
pub use theme::{Rgb, Theme, ThemeState};
