// Page wiring and presentation tuning for the web frontend.
// Element ids must match `static/index.html`. Kept free of web-sys types so
// host tests can `include!` this file.

// Canvas and backdrop
pub const CANVAS_ID: &str = "sky-canvas";
pub const BACKDROP_ID: &str = "sky-backdrop";
pub const TITLE_WORD_ID: &str = "title-word";
pub const COMET_LAYER_ID: &str = "comet-layer";

// Player widget
pub const PLAYER_ID: &str = "player";
pub const AUDIO_ID: &str = "main-audio";
pub const PLAYER_HEADING_ID: &str = "player-heading";
pub const PLAYER_HEADER_ID: &str = "player-header";
pub const TRACK_TITLE_ID: &str = "track-title";
pub const TRACK_ARTIST_ID: &str = "track-artist";
pub const TRACK_COUNTER_ID: &str = "track-counter";
pub const PLAYLIST_ID: &str = "playlist";
pub const BOOST_LABEL_ID: &str = "boost-label";
pub const PREV_BUTTON_ID: &str = "btn-prev";
pub const NEXT_BUTTON_ID: &str = "btn-next";
pub const SHUFFLE_BUTTON_ID: &str = "btn-shuffle";
pub const MINIMIZE_BUTTON_ID: &str = "btn-minimize";
pub const MAXIMIZE_BUTTON_ID: &str = "btn-maximize";

// Theme picker
pub const THEME_BUTTON_ID: &str = "btn-theme";
pub const THEME_NAME_ID: &str = "theme-name";
pub const THEME_PICKER_ID: &str = "theme-picker";
pub const THEME_PICKER_CLOSE_ID: &str = "theme-picker-close";
pub const THEME_LIST_ID: &str = "theme-list";

// Ambient layers; the layer id is appended
pub const AMBIENT_TOGGLE_PREFIX: &str = "ambient-toggle-";
pub const AMBIENT_VOLUME_PREFIX: &str = "ambient-volume-";

// CSS classes
pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";
pub const DRAGGING_CLASS: &str = "dragging";
pub const COMET_CLASS: &str = "dt-comet";

// Labels
pub const BOOST_ON_LABEL: &str = "Boost: ON";
pub const BOOST_IDLE_LABEL: &str = "Play to boost audio";
pub const NO_SONGS_LABEL: &str = "No songs found";
pub const NOTHING_PLAYING_LABEL: &str = "Nothing playing";
pub const HEADING_MINIMIZED: &str = "Dream";
pub const HEADING_DEFAULT: &str = "Ambient Audio";

// Runtime configuration
pub const MUSIC_BASE_URL_ATTR: &str = "data-music-base-url";
pub const MANIFEST_URL_ATTR: &str = "data-manifest-url";
pub const DEFAULT_MUSIC_BASE_URL: &str = "/music";
pub const DEFAULT_MANIFEST_URL: &str = "/music-manifest.json";

// Post-processing
pub const BLOOM_THRESHOLD: f32 = 0.3;
pub const BLOOM_INTENSITY: f32 = 0.4;
pub const TILT_SHIFT_FOCUS_Y: f32 = 0.5; // uv y of the sharp band
pub const TILT_SHIFT_BAND: f32 = 0.22; // half height of the sharp band
pub const TILT_SHIFT_STRENGTH: f32 = 0.6;

// Sprites
pub const STAR_POINT_SCALE: f32 = 200.0; // px * world units at unit depth
pub const CLOUD_PUFF_SEED: u64 = 0xC10D_5EED;
pub const CLOUD_PUFF_SOFTNESS: f32 = 0.55;

// Frame clock
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after a hidden tab resumes
