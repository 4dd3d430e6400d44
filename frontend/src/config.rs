use log::Level;

/// Host the insight images are served from; an image URL is `<IMAGE_HOST>/<image_ref>`.
pub const IMAGE_HOST: &str = "https://lh3.googleusercontent.com/d";

pub const COUNTER_DURATION_MS: i64 = 2500;

/// Fraction of a counter that has to be on screen before it starts.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

// Height of the fixed nav bar
pub const HEADER_OFFSET_PX: f64 = 80.0;

pub const DOWNLOAD_SECTION_ID: &str = "download-form";

/// Give up on the displayed insight image after this long and show the fallback caption.
pub const IMAGE_LOAD_TIMEOUT_MS: u32 = 15_000;

// Nav turns opaque once the page is scrolled past this
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 80.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose state transitions while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn image_url(image_ref: &str) -> String {
    format!("{}/{}", IMAGE_HOST, image_ref)
}
