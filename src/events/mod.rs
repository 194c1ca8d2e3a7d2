pub mod controls;
pub mod keyboard;
pub mod keys;

pub use controls::{wire_ambient, wire_audio_element, wire_player_controls, wire_theme_picker};
pub use keyboard::wire_global_keydown;
