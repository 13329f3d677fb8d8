// Page hooks and render settings for the web frontend.

// Host page selectors
pub const HERO_SELECTOR: &str = ".hero";
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const STATS_SELECTOR: &str = ".stats-strip";
pub const COUNTER_SELECTOR: &str = ".count";

// Counter data attributes
pub const COUNTER_TARGET_ATTR: &str = "data-target";
pub const COUNTER_DECIMAL_ATTR: &str = "data-decimal";

// Classes written to the page
pub const VISIBLE_CLASS: &str = "is-visible";
pub const FALLBACK_CLASS: &str = "hero--fallback";

// Intersection thresholds (fraction of the element in view)
pub const REVEAL_THRESHOLD: f64 = 0.12;
pub const STATS_THRESHOLD: f64 = 0.3;

// Rendering
pub const MSAA_SAMPLES: u32 = 4;
