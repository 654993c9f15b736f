// src/config/consts.rs

// Sources (Carolina Theatre ajax listing endpoints)
pub const NOW_PLAYING_URL: &str =
    "https://carolinatheatre.org/wp-admin/admin-ajax.php?action=film_filter&events=now-playing";
pub const COMING_SOON_URL: &str =
    "https://carolinatheatre.org/wp-admin/admin-ajax.php?action=film_filter&events=coming-soon";
pub const ALL_EVENTS_URL: &str =
    "https://carolinatheatre.org/wp-admin/admin-ajax.php?action=event_filter&events=all";

// Net
pub const TIMEOUT_SECS: u64 = 20;
pub const USER_AGENT: &str = concat!("showtimes/", env!("CARGO_PKG_VERSION"));

// Concurrency (1 = strictly sequential)
pub const WORKERS: usize = 1;
pub const MAX_WORKERS: usize = 16;
pub const REQUEST_PAUSE_MS: u64 = 0;

// Output
pub const DEFAULT_OUT_DIR: &str = ".";
pub const FULL_FILE: &str = "showtimes.html";
pub const TODAY_FILE: &str = "showtimes_today.html";
