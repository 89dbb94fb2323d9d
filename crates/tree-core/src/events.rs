use crate::explosion::ExplosionId;
use crate::wish::WishId;
use glam::Vec3;
use smallvec::SmallVec;

/// Notifications raised during a frame and drained by their owner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneEvent {
    WishLaunched(WishId),
    /// A wish reached the tree; the tree answers with a flash.
    Impact {
        wish: WishId,
        explosion: ExplosionId,
        position: Vec3,
    },
    ExplosionFinished(ExplosionId),
}

/// Most frames raise no more than a handful of events.
pub type EventQueue = SmallVec<[SceneEvent; 4]>;
