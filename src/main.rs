// SPDX-License-Identifier: MPL-2.0
//! Headless story driver.
//!
//! Plays one story from a manifest, logging what the viewer would show.
//! Ticks come from a tokio interval; video segments take their natural
//! duration from the manifest.

use photogram::application::port::StoryStage;
use photogram::config;
use photogram::domain::error::PlaybackError;
use photogram::domain::media::MediaItem;
use photogram::error::{Error, Result};
use photogram::manifest::{self, StoryEntry};
use photogram::ui::story::{Effect, Message, StoryPlayer, TimerHandle};
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tokio::time::{Interval, MissedTickBehavior};

const USAGE: &str = "\
Usage: photogram <manifest.json> [--story N] [--config-dir DIR]

Options:
  --story N         Index of the story to play (default 0)
  --config-dir DIR  Directory holding settings.toml
  -h, --help        Print this help";

struct Args {
    manifest: PathBuf,
    story: usize,
    config_dir: Option<PathBuf>,
}

fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let story = args.opt_value_from_str("--story")?.unwrap_or(0);
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let manifest = args.free_from_str()?;

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring extra arguments: {rest:?}");
    }

    Ok(Some(Args {
        manifest,
        story,
        config_dir,
    }))
}

/// Stage that logs what would be displayed.
struct HeadlessStage {
    durations: HashMap<String, Duration>,
    fallback: Duration,
    pending_metadata: Option<Duration>,
}

impl HeadlessStage {
    fn new(story: &StoryEntry, segments: &[MediaItem], fallback: Duration) -> Self {
        let durations = story
            .story_media
            .iter()
            .zip(segments)
            .filter_map(|(media, item)| Some((item.url.clone(), media.duration()?)))
            .collect();
        Self {
            durations,
            fallback,
            pending_metadata: None,
        }
    }

    fn take_pending_metadata(&mut self) -> Option<Duration> {
        self.pending_metadata.take()
    }
}

impl StoryStage for HeadlessStage {
    fn clear(&mut self) {
        self.pending_metadata = None;
    }

    fn show_image(&mut self, item: &MediaItem) {
        log::info!("Showing image {}", item.url);
    }

    fn show_video(&mut self, item: &MediaItem) -> std::result::Result<(), PlaybackError> {
        log::info!("Playing video {}", item.url);
        let duration = self.durations.get(&item.url).copied().unwrap_or_else(|| {
            log::warn!(
                "No duration known for {}, using {}ms",
                item.url,
                self.fallback.as_millis()
            );
            self.fallback
        });
        self.pending_metadata = Some(duration);
        Ok(())
    }

    fn pause_video(&mut self) {
        log::debug!("Pausing video");
    }
}

/// Reports video metadata as soon as a video segment is mounted.
fn deliver_metadata(player: &mut StoryPlayer<HeadlessStage>, effect: Effect) -> Effect {
    match player.stage_mut().take_pending_metadata() {
        Some(duration) if effect == Effect::None => player.handle(Message::MetadataLoaded {
            segment: player.current(),
            duration,
            now: Instant::now(),
        }),
        _ => effect,
    }
}

async fn run(args: Args) -> Result<()> {
    let (config, warning) = config::load_with_override(args.config_dir);
    if let Some(warning) = warning {
        log::warn!("{warning}");
    }

    let manifest = manifest::load_from_path(&args.manifest)?;
    let index = args.story;
    let story = manifest
        .story(index)
        .ok_or_else(|| Error::Manifest(format!("no story at index {index}")))?;

    let extensions = config.video_extensions();
    let options = config.story_options();
    let segments = story.segments(&extensions);
    let stage = HeadlessStage::new(story, &segments, options.image_duration);
    let mut player = StoryPlayer::new(segments, stage, options);
    log::info!(
        "Playing story of {} ({} segments)",
        story.name,
        player.len()
    );

    let mut ticker: Option<(TimerHandle, Interval)> = None;
    let mut effect = player.handle(Message::Open {
        now: Instant::now(),
    });

    loop {
        effect = deliver_metadata(&mut player, effect);
        match effect {
            Effect::Close => {
                log::info!("Story finished");
                break;
            }
            Effect::Schedule { handle, interval } => {
                log::info!("Segment {} started", player.current());
                let mut interval = tokio::time::interval(interval);
                interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
                ticker = Some((handle, interval));
            }
            Effect::None => {}
        }

        let Some((handle, interval)) = ticker.as_mut() else {
            log::warn!("Story stalled without a running timer");
            break;
        };
        let now = interval.tick().await.into_std();
        effect = player.handle(Message::Tick {
            handle: *handle,
            now,
        });
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
