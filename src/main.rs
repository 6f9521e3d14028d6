//! Retro Pong entry point
//!
//! Headless native driver: steps the simulation once per frame, routes events
//! to the audio layer and stops when a match is won. A windowed front end
//! would replace the input source and draw `Scene`s at the same seams.
//!
//! Usage: `retro-pong [--realtime] [config.json]`

use std::time::{Duration, Instant};

use retro_pong::audio::{AssetSink, AudioManager, SoundEffect};
use retro_pong::input::{Key, handle_key_press};
use retro_pong::scene::Scene;
use retro_pong::{GameEvent, Match, MatchConfig, TickInput};

/// Frame time used when not pacing against the wall clock
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up after ten simulated minutes
const MAX_FRAMES: u64 = 60 * 60 * 10;
/// Longest frame we hand to the simulation
const MAX_DT: f32 = 0.1;

/// Wall-clock frame timer
struct FrameClock {
    last: Instant,
    target: Duration,
}

impl FrameClock {
    fn new(fps: u32) -> Self {
        Self {
            last: Instant::now(),
            target: Duration::from_secs_f32(1.0 / fps as f32),
        }
    }

    /// Sleep out the rest of the frame and return elapsed seconds
    fn tick(&mut self) -> f32 {
        let spent = self.last.elapsed();
        if spent < self.target {
            std::thread::sleep(self.target - spent);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt.min(MAX_DT)
    }
}

fn load_config(path: Option<&str>) -> MatchConfig {
    let Some(path) = path else {
        return MatchConfig::default();
    };
    match MatchConfig::load(path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config {}: {}", path, e);
            MatchConfig::default()
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let realtime = args.iter().any(|a| a == "--realtime");
    let config_path = args.iter().find(|a| !a.starts_with("--")).map(String::as_str);

    let config = load_config(config_path);
    let seed: u64 = rand::random();
    log::info!("Retro Pong starting (seed {})", seed);

    let mut game = Match::new(config, seed);
    let mut audio = AudioManager::new(AssetSink::new("assets"));
    audio.play(SoundEffect::Start);

    // Nobody at the keyboard: press a key to leave the title screen and let
    // the rally play out with idle paddles.
    handle_key_press(&mut game, Key::Other);
    let held: Vec<Key> = Vec::new();

    let mut clock = FrameClock::new(60);
    let mut running = true;
    let mut frames: u64 = 0;

    while running {
        let dt = if realtime { clock.tick() } else { FRAME_DT };
        let events = game.step(dt, &TickInput::from_held(&held));
        audio.handle_events(&events);

        for event in &events {
            if let GameEvent::MatchEnd(side) = event {
                log::info!("Player {} takes the match", side.index());
                running = false;
            }
        }

        frames += 1;
        if frames >= MAX_FRAMES {
            log::warn!("No winner after {} frames, stopping", frames);
            running = false;
        }
    }

    let scene = Scene::build(&game);
    for line in &scene.texts {
        println!("{}", line.text);
    }
    let (left, right) = game.state().final_score().unwrap_or_else(|| game.scores());
    println!("Final score: {} - {} after {} frames", left, right, frames);
}
