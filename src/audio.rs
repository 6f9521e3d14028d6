//! Sound cue dispatch
//!
//! The simulation only emits [`GameEvent`]s. This module maps them to sound
//! effects and forwards them to a pluggable [`SoundSink`]; playback failures
//! are logged and swallowed so they can never stall a frame.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use crate::error::AudioError;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Game launched or returned to the title screen
    Start,
    /// Ball hits a border or a paddle
    Hit,
    /// A point was scored
    Goal,
    /// Match won
    End,
}

impl SoundEffect {
    /// Cue for a simulation event
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::BallHit => SoundEffect::Hit,
            GameEvent::Goal(_) => SoundEffect::Goal,
            GameEvent::MatchEnd(_) => SoundEffect::End,
            GameEvent::MatchRestart => SoundEffect::Start,
        }
    }

    /// File name of the sample backing this cue
    pub fn asset_name(self) -> &'static str {
        match self {
            SoundEffect::Start => "start.wav",
            SoundEffect::Hit => "hit.wav",
            SoundEffect::Goal => "goal.wav",
            SoundEffect::End => "end.wav",
        }
    }
}

/// Playback backend
pub trait SoundSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError>;
}

/// Sink that only logs cues (headless runs)
#[derive(Debug, Default)]
pub struct LogSink;

impl SoundSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError> {
        log::debug!("♪ {} (vol {:.2})", effect.asset_name(), volume);
        Ok(())
    }
}

/// Sink that resolves each cue to a sample file in an asset directory.
///
/// Paths are resolved once and cached. Actual decoding/output is left to the
/// platform; this sink reports what would be played.
#[derive(Debug)]
pub struct AssetSink {
    dir: PathBuf,
    cache: HashMap<SoundEffect, PathBuf>,
}

impl AssetSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: HashMap::new(),
        }
    }

    fn resolve(&mut self, effect: SoundEffect) -> Result<&PathBuf, AudioError> {
        if !self.cache.contains_key(&effect) {
            let path = self.dir.join(effect.asset_name());
            if !path.is_file() {
                return Err(AudioError::MissingAsset(path.display().to_string()));
            }
            self.cache.insert(effect, path);
        }
        self.cache
            .get(&effect)
            .ok_or_else(|| AudioError::Backend("asset cache lookup failed".into()))
    }
}

impl SoundSink for AssetSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError> {
        let path = self.resolve(effect)?;
        log::debug!("Playing {} (vol {:.2})", path.display(), volume);
        Ok(())
    }
}

/// Audio manager for the game
pub struct AudioManager<S: SoundSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    /// Cues that already failed once; warned about a single time
    failed: HashSet<SoundEffect>,
}

impl<S: SoundSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            failed: HashSet::new(),
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        if let Err(e) = self.sink.play(effect, vol) {
            if self.failed.insert(effect) {
                log::warn!("Sound cue {:?} unavailable: {}", effect, e);
            }
        }
    }

    /// Play the cue for every event of a frame
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            self.play(SoundEffect::for_event(event));
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
