use cgmath::Vector3;
use engine::scene::{AnimationClip, Animator, Attachment, Transform};

use crate::{
    assets::{TELEPORT_CLIP, TELEPORT_MODEL},
    effect::Effect,
};

/// Animated ring attached to the avatar, replayed on every successful teleport.
pub struct TeleportEffect {
    pub model: &'static str,
    pub transform: Transform,
    pub attachment: Attachment,
    animator: Animator,
}

impl TeleportEffect {
    pub fn new(offset: Vector3<f32>) -> TeleportEffect {
        let mut animator = Animator::new();
        animator.add_clip(AnimationClip::new(TELEPORT_CLIP, false));

        TeleportEffect {
            model: TELEPORT_MODEL,
            transform: Transform::from_position(offset),
            attachment: Attachment::Avatar,
            animator,
        }
    }

    /// Restart the clip from the beginning, even if it is still playing.
    pub fn play_animation(&mut self) -> Effect {
        match self.animator.get_clip_mut(TELEPORT_CLIP) {
            Some(clip) => {
                // The host drops a play() on a clip it still considers running.
                clip.stop();
                clip.play();
                Effect::PlayAnimation {
                    clip: TELEPORT_CLIP.to_owned(),
                }
            }
            None => Effect::NoEffect,
        }
    }

    pub fn clip(&self) -> Option<&AnimationClip> {
        self.animator.get_clip(TELEPORT_CLIP)
    }
}
