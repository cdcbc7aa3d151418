// Tuning constants for the decorative effects: counts, radii, timings and
// probabilities.

// Particle field
pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.0; // radius in [1, 3)
pub const PARTICLE_SPEED_SPAN: f32 = 0.5; // velocity components in [-0.25, 0.25)
pub const PARTICLE_OPACITY_MIN: f32 = 0.2;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.5; // opacity in [0.2, 0.7)

// Link pass
pub const LINK_DISTANCE: f32 = 150.0;
pub const LINK_ALPHA_MAX: f32 = 0.3;
pub const LINK_LINE_WIDTH: f64 = 0.5;

// Pointer repulsion
pub const REPEL_RADIUS: f32 = 100.0;
pub const REPEL_STRENGTH: f32 = 0.01;

// Bubbles
pub const BUBBLE_CAP: usize = 15;
pub const BUBBLE_STAGGER_MS: u32 = 500;
pub const BUBBLE_REFILL_INTERVAL_MS: u32 = 2000;
pub const BUBBLE_SIZE_MIN_PX: f32 = 20.0;
pub const BUBBLE_SIZE_SPAN_PX: f32 = 60.0;
pub const BUBBLE_DURATION_MIN_S: f32 = 15.0;
pub const BUBBLE_DURATION_SPAN_S: f32 = 10.0;
pub const BUBBLE_DELAY_SPAN_S: f32 = 5.0;

// Cursor trail
pub const TRAIL_SMOOTHING: f32 = 0.1; // displayed += (raw - displayed) * k
pub const TRAIL_SPAWN_CHANCE: f32 = 0.3;
pub const TRAIL_OFFSET_MIN: f32 = 10.0;
pub const TRAIL_OFFSET_SPAN: f32 = 30.0;
pub const TRAIL_BURST: usize = 8;
pub const TRAIL_NODE_LIFETIME_MS: u32 = 2000;
pub const TRAIL_MARKER_PX: u32 = 20;
pub const TRAIL_MARKER_PRESSED_PX: u32 = 30;

// Typewriter (milliseconds)
pub const TYPE_START_DELAY_MS: u32 = 1000;
pub const TYPE_STEP_MS: u32 = 100;
pub const DELETE_STEP_MS: u32 = 50;
pub const WORD_END_PAUSE_MS: u32 = 2000;
pub const WORD_GAP_PAUSE_MS: u32 = 500;
pub const TYPING_PHRASES: [&str; 3] = [
    "Aspiring Software Engineer",
    "Tech Visionary",
    "ML Enthusiast",
];

// Navigation and scroll track
pub const NAV_PROBE_OFFSET: f64 = 150.0; // scrollY offset used to pick the active nav link

// Swipe gestures
pub const SWIPE_DRAG_THRESHOLD: f32 = 10.0;
pub const SWIPE_COMMIT_THRESHOLD: f32 = 50.0;
pub const SWIPE_TRANSLATE_FACTOR: f32 = 0.1;
pub const SWIPE_ROTATE_FACTOR: f32 = 0.05;
pub const SWIPE_CLASS_LINGER_MS: u32 = 500;
