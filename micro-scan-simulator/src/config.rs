use micro_scan::ColorMode;

// --- Display Config ---
pub const DISPLAY_WIDTH: u32 = 320;
pub const DISPLAY_HEIGHT: u32 = 240;
pub const WINDOW_SCALE: u32 = 2; // Window pixels per display pixel
pub const WINDOW_TITLE: &str = "Knight Rider Scanner";

// --- Layout Config ---
pub const STRIP_HEIGHT: u32 = 28; // Strip band between the car scene and the panel
pub const PANEL_HEIGHT: u32 = 40; // Buttons and status line at the bottom

// --- Task Timing ---
pub const FRAME_DELAY_MS: u64 = 16; // ~60 fps
pub const HEADLESS_FRAMES: usize = 600; // Length of the scripted run without a window

// --- Strip Config ---
pub const STRIP_SEGMENTS: usize = 16;
pub const COLOR_MODE: ColorMode = ColorMode::ClassicRed;

// --- Audio Config ---
pub const FALLBACK_SAMPLE_RATE: u32 = 48_000; // Clock rate of the silent generator when no device opens
