// SPDX-License-Identifier: MPL-2.0
use photogram::domain::media::MediaItem;
use photogram::domain::ui::ProgressPercent;
use photogram::ui::story::{Effect, Message, StoryOptions, StoryPlayer, TimerHandle};
use std::time::{Duration, Instant};

mod common;

use common::NullStage;

fn three_images() -> Vec<MediaItem> {
    (0..3)
        .map(|i| MediaItem::image(format!("/static/media/story/{i}.jpg")))
        .collect()
}

#[test]
fn uninterrupted_story_plays_every_segment_then_closes_once() {
    let mut player = StoryPlayer::new(
        three_images(),
        NullStage::default(),
        StoryOptions::default(),
    );
    let t0 = Instant::now();
    let tick = Duration::from_millis(10);

    let mut handle: Option<TimerHandle> = None;
    let mut visited = vec![];
    let mut closes = 0;

    let mut apply =
        |effect: Effect, handle: &mut Option<TimerHandle>, current: usize| match effect {
            Effect::Schedule { handle: h, .. } => {
                *handle = Some(h);
                visited.push(current);
            }
            Effect::Close => closes += 1,
            Effect::None => {}
        };

    let opened = player.handle(Message::Open { now: t0 });
    apply(opened, &mut handle, player.current());

    // 15s of ticks, plus a little slack past the end
    let mut now = t0;
    while now <= t0 + Duration::from_millis(15_100) {
        now += tick;
        if let Some(h) = handle {
            let effect = player.handle(Message::Tick { handle: h, now });
            apply(effect, &mut handle, player.current());
        }
    }

    assert_eq!(visited, vec![0, 1, 2]);
    assert_eq!(closes, 1);
    assert!(!player.is_open());
    assert_eq!(player.stage().shown.len(), 3);
}

#[test]
fn right_tap_on_middle_segment_shows_next_from_zero() {
    let mut player = StoryPlayer::new(
        three_images(),
        NullStage::default(),
        StoryOptions::default(),
    );
    let t0 = Instant::now();
    player.handle(Message::Open { now: t0 });
    player.handle(Message::Tap {
        x: 900.0,
        width: 1_000.0,
        now: t0 + Duration::from_millis(100),
    });
    assert_eq!(player.current(), 1);

    let old = player.active_timer().map(|t| t.handle()).expect("timer running");
    let effect = player.handle(Message::Tap {
        x: 700.0,
        width: 1_000.0,
        now: t0 + Duration::from_millis(2_000),
    });

    assert!(matches!(effect, Effect::Schedule { .. }));
    assert_eq!(player.current(), 2);
    assert_eq!(player.progress().get(2), Some(ProgressPercent::EMPTY));
    assert_eq!(player.progress().get(1), Some(ProgressPercent::FULL));
    assert_eq!(
        player.handle(Message::Tick {
            handle: old,
            now: t0 + Duration::from_millis(9_000),
        }),
        Effect::None
    );
    assert_eq!(player.current(), 2);
}

#[test]
fn video_segment_runs_for_its_natural_length() {
    let segments = vec![
        MediaItem::image("/static/media/story/a.jpg"),
        MediaItem::video("/static/media/story/b.mp4"),
    ];
    let mut player = StoryPlayer::new(segments, NullStage::default(), StoryOptions::default());
    let t0 = Instant::now();

    let Effect::Schedule { handle, .. } = player.handle(Message::Open { now: t0 }) else {
        panic!("image segment should schedule");
    };
    let at_video = t0 + Duration::from_millis(5_000);
    let effect = player.handle(Message::Tick {
        handle,
        now: at_video,
    });
    assert_eq!(effect, Effect::None);
    assert_eq!(player.current(), 1);
    assert!(player.active_timer().is_none());

    let Effect::Schedule { handle, .. } = player.handle(Message::MetadataLoaded {
        segment: 1,
        duration: Duration::from_millis(2_000),
        now: at_video + Duration::from_millis(50),
    }) else {
        panic!("metadata should start the timer");
    };

    assert_eq!(
        player.handle(Message::Tick {
            handle,
            now: at_video + Duration::from_millis(2_050),
        }),
        Effect::Close
    );
}
