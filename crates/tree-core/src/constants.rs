// Scene tuning constants shared by the engine and the native driver.

// Scene layout
pub const TREE_PARTICLE_COUNT: usize = 15_000; // points in the tree cone
pub const SNOW_PARTICLE_COUNT: usize = 2_000; // points in the snow box
pub const TREE_HEIGHT: f32 = 12.0; // world units from base to tip
pub const TREE_RADIUS: f32 = 4.5; // cone radius at the base
pub const BLOOM_STRENGTH: f32 = 1.5; // post-processing hint for the host renderer

// Tree color blend
pub const CORE_BLEND_SPLIT: f32 = 0.3; // radius ratio where core->mid becomes mid->edge
pub const LIGHTNESS_JITTER: f32 = 0.1; // full width of the HSL lightness offset

// Base rings
pub const RING_COUNT: usize = 3;
pub const RING_PARTICLES: usize = 600; // innermost ring; each outer ring loses RING_PARTICLE_STEP
pub const RING_PARTICLE_STEP: usize = 100;
pub const RING_RADIUS_BASE: f32 = 1.1; // multiple of tree radius for ring 0
pub const RING_RADIUS_STEP: f32 = 0.2; // added per ring index
pub const RING_RADIAL_JITTER: f32 = 0.3;
pub const RING_VERTICAL_JITTER: f32 = 0.2;
pub const RING_GROUP_SPIN: f32 = 0.1; // rad/s for the whole group
pub const RING_SPIN: f32 = 0.05; // rad/s per ring, alternating sign
pub const RING_BOB_AMPLITUDE: f32 = 0.1;
pub const RING_GROUP_LIFT: f32 = 0.5; // group sits slightly above the tree base

// Snow volume
pub const SNOW_BOX_WIDTH: f32 = 30.0;
pub const SNOW_BOX_HEIGHT: f32 = 40.0;

// Shader model
pub const BREATH_FREQ: f32 = 1.5;
pub const BREATH_AMPLITUDE: f32 = 0.05;
pub const BOB_AMPLITUDE: f32 = 0.08;
pub const TWIST_AMPLITUDE: f32 = 0.05;
pub const UNLEASH_EXPANSION: f32 = 15.0; // radial push at full unleash
pub const UNLEASH_NOISE: f32 = 2.0; // curl offset scale at full unleash
pub const UNLEASH_THRESHOLD: f32 = 0.01; // below this the tree is left intact
pub const UNLEASH_WHITE: [f32; 3] = [1.0, 0.9, 0.8];
pub const UNLEASH_SIZE_GAIN: f32 = 2.0;
pub const DIRECTION_EPSILON: f32 = 0.001; // added before normalizing the unleash direction
pub const TREE_SIZE_ATTENUATION: f32 = 200.0;
pub const SNOW_SIZE_ATTENUATION: f32 = 150.0;
pub const MIN_VIEW_DEPTH: f32 = 1e-3;
pub const TRAIL_POINT_SIZE: f32 = 8.0;
pub const TRAIL_COLOR: [f32; 3] = [1.0, 0.5, 0.6]; // pinkish comet tail

// Uniform dynamics (rates are per second)
pub const FLASH_DECAY_RATE: f32 = 2.0;
pub const FLASH_CUTOFF: f32 = 0.01;
pub const UNLEASH_RATE: f32 = 3.0;
pub const MAX_FRAME_DELTA: f32 = 0.1; // clock clamp after stalls

// Wishes
pub const WISH_LAUNCH: [f32; 3] = [0.0, -5.0, 8.0]; // near the bottom of the default view
pub const WISH_SPEED: f32 = 0.4; // progress per second, ~2.5 s flight
pub const WISH_CONTROL_RADIUS: f32 = 8.0;
pub const WISH_CONTROL_HEIGHT: f32 = 0.4; // fraction of target height
pub const WISH_TARGET_LIFT: f32 = 1.0; // target sits this far above the tree tip
pub const WISH_BALL_PARTICLES: usize = 60;
pub const WISH_BALL_RADIUS: f32 = 0.3;
pub const WISH_SPIN: f32 = 2.0; // rad/s around y and z
pub const TRAIL_CAPACITY: usize = 50;
pub const TRAIL_DECAY: f32 = 0.92; // per-frame alpha factor

// Explosions
pub const EXPLOSION_PARTICLES: usize = 150;
pub const EXPLOSION_LIFETIME: f32 = 1.2;
pub const EXPLOSION_GRAVITY: f32 = -2.0;
pub const EXPLOSION_DRAG: f32 = 0.98; // per frame
pub const EXPLOSION_SPEED_MIN: f32 = 2.0;
pub const EXPLOSION_SPEED_SPAN: f32 = 4.0;
pub const EXPLOSION_PINK: [f32; 3] = [1.0, 0.078_431_375, 0.576_470_6]; // #ff1493
pub const EXPLOSION_GOLD: [f32; 3] = [1.0, 0.843_137_26, 0.0]; // #ffd700

// Camera
pub const CAMERA_START: [f32; 3] = [0.0, 6.0, 18.0];
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const GESTURE_SWEEP: f32 = 1.5 * std::f32::consts::PI; // azimuth span across the hand x range
pub const GESTURE_HEIGHT_BASE: f32 = 2.0;
pub const GESTURE_HEIGHT_SPAN: f32 = 14.0;
pub const GESTURE_RADIUS: f32 = 18.0;
pub const GESTURE_LOOK_AT: [f32; 3] = [0.0, 4.0, 0.0];
pub const CAMERA_SMOOTHING: f32 = 2.0;
pub const ORBIT_MIN_DISTANCE: f32 = 10.0;
pub const ORBIT_MAX_DISTANCE: f32 = 30.0;
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::PI / 1.8; // keeps the camera above the floor
pub const ORBIT_AUTO_ROTATE_SPEED: f32 = 0.5; // 30 s per turn at 1.0

// Hand gesture
pub const OPEN_HAND_THRESHOLD: f32 = 0.25; // mean fingertip-to-wrist distance
pub const LANDMARK_COUNT: usize = 21;
pub const WRIST: usize = 0;
pub const PALM_CENTER: usize = 9;
pub const FINGERTIPS: [usize; 5] = [4, 8, 12, 16, 20];

// Heart topper
pub const HEART_LIFT: f32 = 0.5; // above the tree tip
pub const HEART_SPIN: f32 = 0.8;
pub const HEART_BOB_FREQ: f32 = 2.0;
pub const HEART_BOB_AMPLITUDE: f32 = 0.1;
pub const HEART_PULSE_FREQ: f32 = 3.0;
pub const HEART_PULSE_AMPLITUDE: f32 = 0.05;
pub const HEART_GLOW_SCALE: f32 = 1.2;

// Photo ornaments
pub const PHOTO_BOB_AMPLITUDE: f32 = 0.2;
pub const PHOTO_EDGE_MIN: f32 = 0.8; // fraction of the cone radius
pub const PHOTO_EDGE_SPAN: f32 = 0.3;
pub const PHOTO_MARGIN: f32 = 1.0; // keep photos off the base and tip
