//! Title indicator timing through the dispatcher.

mod common;

use common::{TestClock, page_with_video, press, shift_wheel};
use vidkeys::VideoHotkeys;
use vidkeys::sim::{SimVideo, SimulatedPage};
use vidkeys_config::Config;

#[test]
fn speed_change_flashes_and_restores_title() {
    let clock = TestClock::new();
    let mut page = page_with_video(0.0, 100.0, 1.1);
    let mut hotkeys = VideoHotkeys::new(&Config::default());

    hotkeys
        .handle_key_down(&press("ArrowUp", "ArrowUp", false, true, false), &mut page, clock.at(0))
        .unwrap();
    assert_eq!(page.title, "[ 1.4 ]");
    assert_eq!(hotkeys.next_deadline(), Some(clock.at(200)));

    assert!(!hotkeys.tick(&mut page, clock.at(150)));
    assert_eq!(page.title, "[ 1.4 ]");

    assert!(hotkeys.tick(&mut page, clock.at(200)));
    assert_eq!(page.title, "Movie");
    assert!(!hotkeys.tick(&mut page, clock.at(1000)));
    assert_eq!(hotkeys.next_deadline(), None);
}

#[test]
fn first_speed_step_shows_tie_rounded_up() {
    let clock = TestClock::new();
    let mut page = page_with_video(0.0, 100.0, 1.0);
    let mut hotkeys = VideoHotkeys::new(&Config::default());

    hotkeys
        .handle_key_down(&press("ArrowUp", "ArrowUp", false, true, false), &mut page, clock.at(0))
        .unwrap();
    assert_eq!(page.videos[0].playback_rate, 1.25);
    assert_eq!(page.title, "[ 1.3 ]");
}

#[test]
fn bracketed_page_title_comes_back() {
    let clock = TestClock::new();
    let mut page =
        SimulatedPage::new("[ LIVE ] Match stream").with_video(SimVideo::new(0.0, 100.0, 1.0));
    let mut hotkeys = VideoHotkeys::new(&Config::default());

    hotkeys
        .handle_key_down(&press("ArrowUp", "ArrowUp", false, true, false), &mut page, clock.at(0))
        .unwrap();
    assert_eq!(page.title, "[ 1.3 ]");

    assert!(hotkeys.tick(&mut page, clock.at(1000)));
    assert_eq!(page.title, "[ LIVE ] Match stream");
}

#[test]
fn rapid_changes_restore_title_from_before_the_burst() {
    let clock = TestClock::new();
    let mut page = page_with_video(0.0, 100.0, 1.0);
    let mut hotkeys = VideoHotkeys::new(&Config::default());

    for i in 0..5 {
        let now = clock.at(i * 50);
        hotkeys.tick(&mut page, now);
        hotkeys.handle_wheel(&shift_wheel(120.0), &mut page, now);
    }
    assert_eq!(page.title, "[ 1.5 ]");

    // last change at 200ms rearmed the deadline to 400ms
    assert!(!hotkeys.tick(&mut page, clock.at(399)));
    assert!(hotkeys.tick(&mut page, clock.at(400)));
    assert_eq!(page.title, "Movie");
}

#[test]
fn title_changed_by_page_between_bursts_is_captured() {
    let clock = TestClock::new();
    let mut page = page_with_video(0.0, 100.0, 1.0);
    let mut hotkeys = VideoHotkeys::new(&Config::default());
    let up = press("ArrowUp", "ArrowUp", false, true, false);

    hotkeys.handle_key_down(&up, &mut page, clock.at(0)).unwrap();
    hotkeys.tick(&mut page, clock.at(300));
    page.title = "Episode 2".to_string();

    hotkeys.handle_key_down(&up, &mut page, clock.at(1000)).unwrap();
    hotkeys.tick(&mut page, clock.at(1200));
    assert_eq!(page.title, "Episode 2");
}

#[test]
fn seeking_leaves_title_alone() {
    let clock = TestClock::new();
    let mut page = page_with_video(10.0, 100.0, 1.0);
    let mut hotkeys = VideoHotkeys::new(&Config::default());

    hotkeys
        .handle_key_down(&press("ArrowRight", "ArrowRight", false, false, true), &mut page, clock.at(0))
        .unwrap();
    assert_eq!(page.title, "Movie");
    assert_eq!(hotkeys.next_deadline(), None);
}

#[test]
fn flash_can_be_disabled() {
    let clock = TestClock::new();
    let mut config = Config::default();
    config.feedback.title_flash = false;
    let mut page = page_with_video(0.0, 100.0, 1.0);
    let mut hotkeys = VideoHotkeys::new(&config);

    hotkeys
        .handle_key_down(&press("ArrowUp", "ArrowUp", false, true, false), &mut page, clock.at(0))
        .unwrap();
    assert_eq!(page.videos[0].playback_rate, 1.25);
    assert_eq!(page.title, "Movie");
    assert!(!hotkeys.tick(&mut page, clock.at(500)));
}
