// Teleport feedback
//
// The relocation itself is an `Effect::SetPlayerPosition` the host applies; this module
// only owns the one-shot visual played at the avatar once it arrives.

pub mod teleport_effect;

pub use teleport_effect::TeleportEffect;
