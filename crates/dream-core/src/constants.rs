// Shared animation/audio tuning constants used by the web frontend and the tests.

// Camera
pub const CAMERA_Z: f32 = 10.0;
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 600.0;

// Starfield
pub const STAR_COUNT: usize = 2800;
pub const STAR_SHELL_MIN_RADIUS: f32 = 80.0;
pub const STAR_SHELL_SPAN: f32 = 170.0; // outer radius = min + span
pub const STAR_SMALL_FRACTION: f32 = 0.85; // share of small stars
pub const STAR_ROTATION_X_PER_FRAME: f32 = 0.00002;
pub const STAR_ROTATION_Y_PER_FRAME: f32 = 0.00004;
pub const STAR_SEED: u64 = 0x5EED_57A2;

// Cloud drift
pub const CLOUD_WRAP_X: f32 = 45.0; // past +x this, jump back to -x
pub const CLOUD_FADE_IN_START: f32 = -35.0;
pub const CLOUD_FADE_IN_END: f32 = -25.0;
pub const CLOUD_FADE_OUT_START: f32 = 25.0;
pub const CLOUD_FADE_OUT_END: f32 = 35.0;
pub const CLOUD_BOB_RATE: f32 = 0.15; // rad/s
pub const CLOUD_BOB_AMPLITUDE: f32 = 0.4;
pub const CLOUD_MAX_OPACITY: f32 = 0.58;
pub const CLOUD_BASE_OPACITY: f32 = 0.4;
pub const CLOUD_OPACITY_PER_SCALE: f32 = 0.08;
pub const CLOUD_PHASE_SPAN: f32 = 14.0; // phase range used to stagger initial x
pub const CLOUD_PUFFS: usize = 12; // billboard puffs per cloud

// Background hue drift
pub const HUE_DRIFT_PERIOD_SEC: f32 = 210.0;
pub const HUE_DRIFT_MAX_DEG: f32 = 7.0;

// Title word cycle
pub const TITLE_WORD_PERIOD_MS: f64 = 20_000.0;

// Comets
pub const COMET_CLEANUP_DELAY_MS: f64 = 260.0;
pub const COMET_INITIAL_DELAY_MAX_MS: f64 = 8_000.0;
pub const COMET_INTERVAL_MIN_MS: f64 = 12_000.0;
pub const COMET_INTERVAL_SPAN_MS: f64 = 10_000.0;
pub const COMET_CLUSTER_PROBABILITY: f64 = 0.35;
pub const COMET_CLUSTER_DELAY_MIN_MS: f64 = 300.0;
pub const COMET_CLUSTER_DELAY_SPAN_MS: f64 = 700.0;

// Audio
pub const GAIN_BOOST: f32 = 2.2;
pub const DEFAULT_AMBIENT_VOLUME: f32 = 0.5;
pub const DEFAULT_ARTIST: &str = "Ambient";
pub const TRACK_TITLE_SEPARATOR: &str = " - ";
pub const AUDIO_EXTENSIONS: [&str; 6] = ["mp3", "wav", "ogg", "m4a", "aac", "flac"];

// Theme picked on first load ("Lilac Blush")
pub const DEFAULT_THEME_INDEX: usize = 1;
