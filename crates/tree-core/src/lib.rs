pub mod animation;
pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod decor;
pub mod error;
pub mod events;
pub mod explosion;
pub mod frame;
pub mod geometry;
pub mod hand;
pub mod scene;
pub mod shader;
pub mod trail;
pub mod wish;

pub use animation::AnimationState;
pub use camera::{Camera, CameraMode, CameraRig, OrbitControls};
pub use config::{Palette, SceneConfig};
pub use error::{ConfigError, TrackerError};
pub use events::{EventQueue, SceneEvent};
pub use explosion::{Explosion, ExplosionId};
pub use frame::{advance, FrameClock, FrameInput, FrameReport};
pub use geometry::{PointCloud, PointVertex};
pub use hand::{CaptureStream, HandLandmarks, HandPose, PoseSlot, TrackerSession};
pub use scene::Scene;
pub use trail::TrailBuffer;
pub use wish::{Wish, WishId, WishManager};
