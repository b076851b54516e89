//! Page wiring and presentation constants for the browser front end.

// DOM hooks
pub const CANVAS_ID: &str = "swarm-canvas";
pub const TRIGGER_SELECTOR: &str = ".triggers span";
pub const SECTION_SELECTOR: &str = ".section";
pub const ACTIVE_CLASS: &str = "active";

// Font served next to the page; a `data-font` attribute on the canvas overrides it.
pub const DEFAULT_FONT_URL: &str = "/fonts/display.ttf";
pub const FONT_URL_ATTR: &str = "data-font";

// Sprite presentation
pub const PARTICLE_OPACITY: f32 = 0.85;
pub const DEVICE_PIXEL_RATIO_MAX: f64 = 2.0;
// Matches SPRITE_DEPTH_REF in particles.wgsl.
pub const SPRITE_DEPTH_REF: f32 = 2000.0;
// Quad edge relative to the visible core, leaving room for the glow falloff.
pub const SPRITE_QUAD_SCALE: f32 = 4.0;

// Fraction of the scene sway applied to the camera orbit.
pub const CAMERA_SWAY_FACTOR: f32 = 0.15;

// Scene speed is radians per 60 Hz frame.
pub const FRAMES_PER_SEC: f32 = 60.0;
