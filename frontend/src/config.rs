use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info  // Production
}

// Count-up statistics
pub const COUNT_UP_DURATION_MS: u64 = 2000;
pub const TICK_INTERVAL_MS: u32 = 16;  // ~60 updates per second

// Intro overlay shown while the page settles
pub const PRELOADER_MS: u32 = 1500;

// Cursor-follow background grid
pub const GRID_MAX_OFFSET_PX: f64 = 20.0;
pub const GRID_SPRING_STIFFNESS: f64 = 50.0;
pub const GRID_SPRING_DAMPING: f64 = 20.0;
pub const GRID_SPRING_MASS: f64 = 0.5;

// A section is revealed once its top passes this fraction of the viewport height
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.9;

// Hide the navbar shadow until the hero is scrolled past this many pixels
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 40.0;
