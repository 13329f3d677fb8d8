use glam::Vec3;

// Shared visual tuning constants used by the web frontend.

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_Z: f32 = 4.5;
pub const PIXEL_RATIO_CAP: f64 = 2.0;

// Scene layout
pub const GROUP_OFFSET: Vec3 = Vec3::new(0.8, 0.0, 0.0); // whole cell sits right of centre

// Meshes
pub const MEMBRANE_RADIUS: f32 = 1.0;
pub const MEMBRANE_DETAIL: u32 = 5;
pub const INNER_GLOW_RADIUS: f32 = 0.65;
pub const INNER_GLOW_DETAIL: u32 = 3;
pub const NUCLEUS_RADIUS: f32 = 0.18;
pub const NUCLEUS_SEGMENTS: u32 = 16;
pub const NUCLEUS_TINT: [f32; 3] = [0.941, 0.671, 0.988]; // #f0abfc
pub const NUCLEUS_OPACITY: f32 = 0.85;

// Nucleus pulse
pub const NUCLEUS_PULSE_FREQ: f32 = 1.8;
pub const NUCLEUS_PULSE_AMP: f32 = 0.06;
pub const NUCLEUS_MORPH_GROWTH: f32 = 0.25;

// Particles
pub const PARTICLE_COUNT: usize = 280;
pub const PARTICLE_RADIUS_MIN: f32 = 1.6;
pub const PARTICLE_RADIUS_MAX: f32 = 2.4;

// Interaction
pub const MORPH_SMOOTHING: f32 = 0.04; // fraction of the remaining gap closed per frame
pub const AUTO_ROTATION_PER_FRAME: f32 = 0.002;
pub const MOUSE_TILT_Y: f32 = 0.35;
pub const MOUSE_TILT_X: f32 = 0.20;
pub const SCROLL_SPAN_FRACTION: f64 = 0.75; // of hero height to reach full morph

// Noise
pub const FBM_OCTAVES: u32 = 4;
pub const FBM_LACUNARITY: f32 = 2.1;
pub const FBM_GAIN: f32 = 0.5;

// Counters
pub const COUNTER_DURATION_MS: f64 = 1400.0;
pub const COUNTER_MAX_DECIMALS: usize = 10;
