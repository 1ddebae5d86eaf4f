/// Playback state of one named clip on an animated model.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    pub looping: bool,
    playing: bool,
    play_count: u32,
}

impl AnimationClip {
    pub fn new(name: impl Into<String>, looping: bool) -> AnimationClip {
        AnimationClip {
            name: name.into(),
            looping,
            playing: false,
            play_count: 0,
        }
    }

    pub fn play(&mut self) {
        self.playing = true;
        self.play_count += 1;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// How many times playback has been started.
    pub fn play_count(&self) -> u32 {
        self.play_count
    }
}

#[derive(Clone, Debug, Default)]
pub struct Animator {
    clips: Vec<AnimationClip>,
}

impl Animator {
    pub fn new() -> Animator {
        Animator { clips: Vec::new() }
    }

    pub fn add_clip(&mut self, clip: AnimationClip) {
        self.clips.retain(|existing| existing.name != clip.name);
        self.clips.push(clip);
    }

    pub fn get_clip(&self, name: &str) -> Option<&AnimationClip> {
        self.clips.iter().find(|clip| clip.name == name)
    }

    pub fn get_clip_mut(&mut self, name: &str) -> Option<&mut AnimationClip> {
        self.clips.iter_mut().find(|clip| clip.name == name)
    }
}
