// Shared layout/animation tuning constants used by the core and the web frontend.

// Viewport reference and breakpoints
pub const REFERENCE_WIDTH: f32 = 1920.0;
pub const REFERENCE_HEIGHT: f32 = 1080.0;
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0; // below this width the layout is "mobile"
pub const COMPACT_WIDTH_PX: f32 = 1250.0; // at or below: larger text and particles

// Resize handling
pub const RESIZE_DEBOUNCE_MS: f64 = 250.0;
pub const RESIZE_SIGNIFICANT_PX: f32 = 50.0; // per-axis delta that forces regeneration

// Particle pool
pub const BASE_PARTICLE_COUNT: f32 = 4000.0;
pub const PARTICLE_SCALE_MIN: f32 = 0.3;
pub const PARTICLE_SIZE_COMPACT: f32 = 0.010; // fraction of min(w, h)
pub const PARTICLE_SIZE_WIDE: f32 = 0.012;
pub const PARTICLE_SPACING_FRACTION: f32 = 0.001;

// Text geometry
pub const TEXT_WIDTH_FRACTION: f32 = 0.05;
pub const TEXT_HEIGHT_FRACTION: f32 = 0.08;
pub const TEXT_MAX_WIDTH_FRACTION: f32 = 0.85;
pub const TEXT_MAX_HEIGHT_FRACTION: f32 = 0.25;
pub const TEXT_CURVE_SEGMENTS: u32 = 4;

// Grid sampling ray origin depth (glyph face lies at z = 0)
pub const RAY_ORIGIN_Z: f32 = -10.0;

// Morph timing (seconds)
pub const MORPH_DELAY_MAX: f32 = 0.3;
pub const MORPH_DURATION_MIN: f32 = 1.125;
pub const MORPH_DURATION_JITTER: f32 = 0.375;

// Morph path shaping, relative to travel distance
pub const MORPH_LATERAL_JITTER: f32 = 0.8; // full width of the x/y control-point offset
pub const MORPH_DEPTH_SWING: f32 = 6.0;

// Scene animation speeds (divided by 100 when applied)
pub const DEFAULT_ANIMATION_SPEED: f32 = 1.0;
pub const MORPH_ANIMATION_SPEED: f32 = 18.0;
pub const CAMERA_SWAY_DEG: f32 = 45.0;

// Bloom defaults
pub const BLOOM_STRENGTH: f32 = 0.8;
pub const BLOOM_RADIUS: f32 = 1.5;
pub const BLOOM_THRESHOLD: f32 = 0.05;

// Scroll gate
pub const GATE_MAX_INDEX: usize = 2;
pub const WHEEL_DEBOUNCE_MS: f64 = 500.0;
pub const TOUCH_MIN_DISTANCE_PX: f32 = 50.0;
pub const TOUCH_DEBOUNCE_MS: f64 = 300.0;

// Section scroller
pub const SECTION_SCROLL_MS: f64 = 1000.0;
pub const SECTION_SETTLE_MS: f64 = 100.0;
pub const SECTION_WHEEL_DEBOUNCE_MS: f64 = 100.0;
pub const SWIPE_MIN_VELOCITY: f32 = 0.3; // px per ms
pub const SWIPE_MIN_DISTANCE_PX: f32 = 50.0;
