//! Integration tests for the game loop: core session, held input and the front-end

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use stellar_blocks::app::{App, AppConfig, Screen};
use stellar_blocks::clock::FrameClock;
use stellar_blocks::core::pieces::SPAWN_POSITION;
use stellar_blocks::core::GameState;
use stellar_blocks::input::HeldKeys;
use stellar_blocks::store::HighScoreStore;
use stellar_blocks::term::{GameView, Viewport};
use stellar_blocks::types::{CoreEvent, FrameInput, GameAction, Lifecycle, LEVEL_TIME_SECS};

fn running(seed: u32) -> GameState {
    let mut state = GameState::new(seed);
    state.start_session();
    state
}

fn temp_scores(tag: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("stellar_blocks_it_{tag}_{nanos}.json"))
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert_eq!(state.lifecycle(), Lifecycle::Idle);
    assert!(state.active().is_none());

    state.start_session();
    assert!(state.is_running());
    let active = state.active().unwrap();
    assert_eq!((active.x, active.y), SPAWN_POSITION);
    assert_eq!(state.score(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.timer_secs(), LEVEL_TIME_SECS);
}

#[test]
fn test_game_actions() {
    let mut state = running(12345);
    let start = state.active().unwrap();

    assert!(state.apply_action(GameAction::MoveLeft));
    assert_eq!(state.active().unwrap().x, start.x - 1);

    assert!(state.apply_action(GameAction::SoftDrop));
    assert_eq!(state.active().unwrap().y, start.y + 1);

    assert!(state.apply_action(GameAction::HardDrop));
    assert_eq!(state.pieces_locked(), 1);
    assert!(state.score() >= 10);
    let next = state.active().unwrap();
    assert_eq!((next.x, next.y), SPAWN_POSITION);
}

#[test]
fn test_events_are_drained_once() {
    let mut state = running(3);
    let special = state.active().unwrap().special;
    state.apply_action(GameAction::HardDrop);

    let events = state.take_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, CoreEvent::PieceLocked { special: s, .. } if *s == special)));
    assert!(state.take_events().is_empty());
}

#[test]
fn test_tap_shifts_once_without_release_events() {
    let mut state = running(99);
    let mut held = HeldKeys::new();
    let start_x = state.active().unwrap().x;

    held.handle_key_press(KeyCode::Left);
    for _ in 0..20 {
        let input = held.frame(16);
        state.tick(16, input);
    }

    // The 150 ms timeout drops the key before auto-shift repeats.
    assert_eq!(state.active().unwrap().x, start_x - 1);
}

#[test]
fn test_held_key_auto_shifts_after_delay() {
    let mut state = running(99);
    let mut held = HeldKeys::new().with_key_release_timeout_ms(2_000);
    let start_x = state.active().unwrap().x;

    held.handle_key_press(KeyCode::Left);
    for _ in 0..14 {
        let input = held.frame(16);
        state.tick(16, input);
    }
    // Frame 1 shifts, the delay covers frames 2-10, frame 14 repeats.
    assert_eq!(state.active().unwrap().x, start_x - 2);

    held.handle_key_release(KeyCode::Left);
    for _ in 0..10 {
        let input = held.frame(16);
        state.tick(16, input);
    }
    assert_eq!(state.active().unwrap().x, start_x - 2);
}

#[test]
fn test_pause_freezes_the_session() {
    let mut state = running(5);
    let before = state.active();
    assert!(state.apply_action(GameAction::Pause));
    assert!(state.is_paused());

    for _ in 0..10 {
        state.tick(1000, FrameInput::IDLE);
    }
    assert_eq!(state.timer_secs(), LEVEL_TIME_SECS);
    assert_eq!(state.active(), before);
    assert!(!state.apply_action(GameAction::HardDrop));

    assert!(state.apply_action(GameAction::Pause));
    assert!(state.is_running());
}

#[test]
fn test_level_timer_completes_level() {
    let mut state = running(8);
    for _ in 0..LEVEL_TIME_SECS {
        state.tick(1000, FrameInput::IDLE);
    }
    assert_eq!(state.level(), 2);
    assert_eq!(state.timer_secs(), LEVEL_TIME_SECS);
    assert!(state.fall_speed() < 60);
    assert_eq!(state.banner().map(|b| b.level), Some(2));

    let fb = GameView::default().render(&state.snapshot(), "", Viewport::new(80, 24));
    let text: String = (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect();
    assert!(text.contains("LEVEL 2"));
    assert!(state
        .take_events()
        .iter()
        .any(|e| matches!(e, CoreEvent::LevelUp { level: 2, .. })));
}

#[test]
fn test_stacking_ends_the_game_and_restart_resets() {
    let mut state = running(2024);
    state.set_player_name("POLARIS");

    let mut drops = 0;
    while !state.is_over() && drops < 1000 {
        state.apply_action(GameAction::HardDrop);
        drops += 1;
    }
    assert!(state.is_over());
    assert!(state.active().is_none());
    assert!(!state.apply_action(GameAction::MoveLeft));

    let entry = state.final_entry("2024-12-01 20:00:00").unwrap();
    assert_eq!(entry.name, "POLARIS");
    assert_eq!(entry.score, state.score());

    state.start_session();
    assert!(state.is_running());
    assert_eq!(state.score(), 0);
    assert_eq!(state.board().filled_cells(), 0);
    assert_eq!(state.player_name(), "POLARIS");
}

#[test]
fn test_finished_game_is_saved_to_disk() {
    let path = temp_scores("saved");
    let mut app = App::new(AppConfig {
        seed: 7,
        scores_path: path.clone(),
        player_name: None,
    });

    let press = |app: &mut App, code: KeyCode| app.handle_key(KeyEvent::from(code));
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char(' '));
    for c in "SIRIUS".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.screen(), Screen::Game);

    let mut drops = 0;
    while app.screen() == Screen::Game && drops < 1000 {
        press(&mut app, KeyCode::Char('x'));
        drops += 1;
    }
    assert_eq!(app.screen(), Screen::GameOver);
    assert_eq!(app.last_rank(), Some(0));

    let table = HighScoreStore::new(&path).load();
    assert_eq!(table.len(), 1);
    assert_eq!(table.entries()[0].name, "SIRIUS");
    assert_eq!(table.entries()[0].score, app.game().score());

    // Back to the menu, and the next start is a fresh session.
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen(), Screen::Menu);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.screen(), Screen::Game);
    assert_eq!(app.game().score(), 0);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_level_timer_follows_wall_clock_at_sixty_fps() {
    let mut app = App::new(AppConfig {
        seed: 11,
        scores_path: temp_scores("clock"),
        player_name: Some("VEGA".to_string()),
    });
    let press = |app: &mut App, code: KeyCode| app.handle_key(KeyEvent::from(code));
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.screen(), Screen::Game);

    // Frames as the runner sees them: a little over 1/60 s each.
    let start = Instant::now();
    let frame = Duration::from_micros(16_667);
    let mut clock = FrameClock::new(start);
    let mut now = start;
    let mut run_frames = |app: &mut App, n: u32| {
        for _ in 0..n {
            now += frame;
            app.tick(clock.take_elapsed_ms(now));
        }
    };

    run_frames(&mut app, 60);
    assert_eq!(app.game().timer_secs(), LEVEL_TIME_SECS - 1);

    run_frames(&mut app, 540);
    assert_eq!(app.screen(), Screen::Game);
    assert_eq!(app.game().timer_secs(), LEVEL_TIME_SECS - 10);
}

#[test]
fn test_release_events_are_ignored_outside_play() {
    let mut app = App::new(AppConfig {
        seed: 1,
        scores_path: temp_scores("release"),
        player_name: None,
    });
    let mut release = KeyEvent::from(KeyCode::Enter);
    release.kind = KeyEventKind::Release;
    app.handle_key(release);
    assert_eq!(app.screen(), Screen::Splash);
}
