use crate::logging::LogLevel;

// =============================================================================
// Route transitions
// =============================================================================

pub const TRANSITION_WINDOW_MS: u32 = 300;

// =============================================================================
// Typewriter
// =============================================================================

pub mod typewriter {
    pub const DEFAULT_SPEED_MS: u32 = 50;
    pub const DEFAULT_DELAY_MS: u32 = 1_000;
    /// Hold on an empty line before the next fragment starts.
    pub const REWIND_PAUSE_MS: u32 = 500;
    pub const CURSOR_BLINK_MS: u32 = 500;

    pub const HOME_SPEED_MS: u32 = 70;
    pub const HOME_DELAY_MS: u32 = 2_000;

    pub const SPEED_MS_BOUNDS: (u32, u32) = (10, 1_000);
    pub const DELAY_MS_BOUNDS: (u32, u32) = (100, 10_000);
}

// =============================================================================
// Lazy media
// =============================================================================

pub mod media {
    pub const VISIBILITY_THRESHOLD: f64 = 0.1;
    pub const DEFAULT_ROOT_MARGIN: &str = "0px";
    pub const LAZY_ROOT_MARGIN: &str = "50px";
    pub const ERROR_TEXT: &str = "Image not available";
}

// =============================================================================
// Carousel
// =============================================================================

pub const CAROUSEL_NAV_THROTTLE_MS: u32 = 300;
/// A project counts as viewed once the carousel rests on it this long.
pub const PROJECT_VIEW_SETTLE_MS: u32 = 1_000;

// =============================================================================
// Storage keys
// =============================================================================

pub mod storage_keys {
    pub const LOG_LEVEL: &str = "portfolio-log-level";
    pub const TYPEWRITER_SPEED_MS: &str = "portfolio-typewriter-speed-ms";
    pub const TYPEWRITER_DELAY_MS: &str = "portfolio-typewriter-delay-ms";
}

pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    pub log_level: LogLevel,
    pub home_typewriter_speed_ms: u32,
    pub home_typewriter_delay_ms: u32,
    pub cursor_blink: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            home_typewriter_speed_ms: typewriter::HOME_SPEED_MS,
            home_typewriter_delay_ms: typewriter::HOME_DELAY_MS,
            cursor_blink: true,
        }
    }
}

impl RuntimeConfig {
    /// Builds the config from a key/value source, falling back to defaults for
    /// anything missing, unparsable or out of bounds.
    pub fn from_lookup<F>(lookup: F, prefers_reduced_motion: bool) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup(storage_keys::LOG_LEVEL)
            .as_deref()
            .and_then(LogLevel::parse)
            .unwrap_or(DEFAULT_LOG_LEVEL);
        let home_typewriter_speed_ms = parse_u32_with_bounds(
            lookup(storage_keys::TYPEWRITER_SPEED_MS).as_deref(),
            typewriter::HOME_SPEED_MS,
            typewriter::SPEED_MS_BOUNDS,
        );
        let home_typewriter_delay_ms = parse_u32_with_bounds(
            lookup(storage_keys::TYPEWRITER_DELAY_MS).as_deref(),
            typewriter::HOME_DELAY_MS,
            typewriter::DELAY_MS_BOUNDS,
        );

        Self {
            log_level,
            home_typewriter_speed_ms,
            home_typewriter_delay_ms,
            cursor_blink: !prefers_reduced_motion,
        }
    }
}

fn parse_u32_with_bounds(value: Option<&str>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}
