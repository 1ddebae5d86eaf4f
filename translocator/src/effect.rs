use cgmath::Vector3;
use engine::audio::AudioHandle;

/// Requests for platform services, returned from input handling and `update`
/// for the host to apply.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    NoEffect,
    Multiple(Vec<Effect>),
    PlaySound {
        handle: AudioHandle,
        name: String,
    },
    SetPlayerPosition {
        position: Vector3<f32>,
        is_teleport: bool,
    },
    PlayAnimation {
        clip: String,
    },
}

impl Effect {
    pub fn play_sound(name: &str) -> Effect {
        Effect::PlaySound {
            handle: AudioHandle::new(),
            name: name.to_owned(),
        }
    }

    /// Expand nested `Multiple`s and drop `NoEffect`s.
    pub fn flatten(effects: Vec<Effect>) -> Vec<Effect> {
        let mut flat = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect {
                Effect::NoEffect => {}
                Effect::Multiple(inner) => flat.extend(Effect::flatten(inner)),
                other => flat.push(other),
            }
        }
        flat
    }
}
