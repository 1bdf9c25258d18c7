// Subscription plans
pub const PLAN_FREE: &str = "free";
pub const PLAN_BASIC: &str = "basic";
pub const PLAN_PREMIUM: &str = "premium";

// Subscription status
pub const STATUS_ACTIVE: &str = "active";

// Host labels
pub const APEX_LABEL: &str = "encontra";
pub const WWW_LABEL: &str = "www";
pub const LOCALHOST: &str = "localhost";

// Localization
pub const DEFAULT_LANGUAGE: &str = "es";
pub const FALLBACK_LANGUAGE: &str = "en";

// Argentina does not observe daylight saving time.
pub const ARGENTINA_UTC_OFFSET_MINUTES: i32 = -180;

// Store tables
pub const VENUE: &str = "venue";
