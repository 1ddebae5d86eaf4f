pub mod animator;
pub use animator::{AnimationClip, Animator};

pub mod attachment;
pub use attachment::Attachment;

pub mod camera;
pub use camera::Camera;

pub mod transform;
pub use transform::Transform;
