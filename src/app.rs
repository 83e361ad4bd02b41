//! Front-end state machine.
//!
//! Owns the session, the high-score table and held-key tracking, and decides
//! which screen is showing. Terminal I/O stays in the runner: the app takes
//! key events and frame ticks in and draws into a framebuffer.
//!
//! ```text
//! Splash → Start → PlayerName → PlayMenu ─┬→ Menu → Game ⇄ Pause
//!                    ↑            ↑  ↑    ├→ Rules / Lore    ↓
//!                    └── back ────┘  │    └→ HighScores   GameOver
//!                                    └───────────────────────┘
//! ```

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::core::{GameState, HighScoreTable};
use crate::input::{handle_key_event, HeldKeys};
use crate::store::{timestamp_now, HighScoreStore};
use crate::term::screens::{self, LORE, MENU_HELP, RULES};
use crate::term::{FrameBuffer, GameView, Viewport};
use crate::types::{CoreEvent, FrameInput, GameAction, BANNER_MS, MAX_NAME_LEN};

/// How long the splash stays up without a key press.
pub const SPLASH_MS: u32 = BANNER_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Start,
    PlayerName,
    PlayMenu,
    Rules,
    Lore,
    Menu,
    Game,
    Pause,
    GameOver,
    HighScores,
}

/// Entries of the play menu, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMenuOption {
    Play,
    Rules,
    HighScores,
    Lore,
    Back,
    Quit,
}

impl PlayMenuOption {
    pub const ALL: [PlayMenuOption; 6] = [
        PlayMenuOption::Play,
        PlayMenuOption::Rules,
        PlayMenuOption::HighScores,
        PlayMenuOption::Lore,
        PlayMenuOption::Back,
        PlayMenuOption::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlayMenuOption::Play => "PLAY",
            PlayMenuOption::Rules => "RULES",
            PlayMenuOption::HighScores => "HIGH SCORES",
            PlayMenuOption::Lore => "LORE",
            PlayMenuOption::Back => "TITLE SCREEN",
            PlayMenuOption::Quit => "QUIT",
        }
    }
}

/// Runtime options for the front-end.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub seed: u32,
    pub scores_path: PathBuf,
    /// Pre-filled player name.
    pub player_name: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            scores_path: PathBuf::from(crate::store::DEFAULT_SCORES_FILE),
            player_name: None,
        }
    }
}

pub struct App {
    screen: Screen,
    game: GameState,
    held: HeldKeys,
    view: GameView,
    store: HighScoreStore,
    table: HighScoreTable,
    name_input: String,
    menu_index: usize,
    splash_ms: u32,
    /// Rank of the last finished game in the table, if it made it.
    last_rank: Option<usize>,
    quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let store = HighScoreStore::new(config.scores_path);
        let table = store.load();
        let name_input = config
            .player_name
            .map(|n| n.chars().take(MAX_NAME_LEN).collect())
            .unwrap_or_default();

        Self {
            screen: Screen::Splash,
            game: GameState::new(config.seed),
            held: HeldKeys::new(),
            view: GameView::default(),
            store,
            table,
            name_input,
            menu_index: 0,
            splash_ms: 0,
            last_rank: None,
            quit: false,
        }
    }

    /// Use exact key releases instead of the release timeout.
    pub fn with_held_keys(mut self, held: HeldKeys) -> Self {
        self.held = held;
        self
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn high_scores(&self) -> &HighScoreTable {
        &self.table
    }

    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    pub fn selected_option(&self) -> PlayMenuOption {
        PlayMenuOption::ALL[self.menu_index]
    }

    pub fn last_rank(&self) -> Option<usize> {
        self.last_rank
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.kind {
            KeyEventKind::Release => self.held.handle_key_release(key.code),
            KeyEventKind::Repeat => {
                if self.screen == Screen::Game {
                    self.held.handle_key_press(key.code);
                }
            }
            KeyEventKind::Press => self.handle_press(key),
        }
    }

    fn handle_press(&mut self, key: KeyEvent) {
        let code = key.code;
        match self.screen {
            Screen::Splash => self.screen = Screen::Start,
            Screen::Start => match code {
                KeyCode::Char(' ') => self.screen = Screen::PlayerName,
                KeyCode::Esc => self.quit = true,
                _ => {}
            },
            Screen::PlayerName => self.handle_name_key(code),
            Screen::PlayMenu => self.handle_play_menu_key(code),
            Screen::Rules | Screen::Lore | Screen::HighScores => {
                if matches!(code, KeyCode::Esc | KeyCode::Left) {
                    self.screen = Screen::PlayMenu;
                }
            }
            Screen::Menu => match code {
                KeyCode::Char(' ') | KeyCode::Enter => self.start_game(),
                KeyCode::Char('h') | KeyCode::Char('H') => self.screen = Screen::HighScores,
                KeyCode::Left | KeyCode::Esc => self.screen = Screen::PlayMenu,
                KeyCode::Char('s') | KeyCode::Char('S') => self.quit = true,
                _ => {}
            },
            Screen::Game => self.handle_game_key(key),
            Screen::Pause => match code {
                KeyCode::Char('p') | KeyCode::Char('P') => {
                    if self.game.resume() {
                        self.screen = Screen::Game;
                    }
                }
                KeyCode::Esc => self.screen = Screen::Menu,
                _ => {}
            },
            Screen::GameOver => match code {
                // The next start from the menu resets the session.
                KeyCode::Char(' ') | KeyCode::Esc => self.screen = Screen::Menu,
                KeyCode::Char('h') | KeyCode::Char('H') => self.screen = Screen::HighScores,
                _ => {}
            },
        }
    }

    fn handle_name_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter if !self.name_input.trim().is_empty() => {
                self.game.set_player_name(self.name_input.trim());
                self.menu_index = 0;
                self.screen = Screen::PlayMenu;
            }
            KeyCode::Backspace => {
                self.name_input.pop();
            }
            KeyCode::Char(c) if !c.is_control() && self.name_input.chars().count() < MAX_NAME_LEN => {
                self.name_input.push(c);
            }
            _ => {}
        }
    }

    fn handle_play_menu_key(&mut self, code: KeyCode) {
        let count = PlayMenuOption::ALL.len();
        match code {
            KeyCode::Up => self.menu_index = (self.menu_index + count - 1) % count,
            KeyCode::Down => self.menu_index = (self.menu_index + 1) % count,
            KeyCode::Backspace => self.screen = Screen::Start,
            KeyCode::Right => match self.selected_option() {
                PlayMenuOption::Play => self.screen = Screen::Menu,
                PlayMenuOption::Rules => self.screen = Screen::Rules,
                PlayMenuOption::HighScores => self.screen = Screen::HighScores,
                PlayMenuOption::Lore => self.screen = Screen::Lore,
                PlayMenuOption::Back => self.screen = Screen::Start,
                PlayMenuOption::Quit => self.quit = true,
            },
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.held.reset();
            self.screen = Screen::Menu;
            return;
        }

        // Movement and soft drop act while held; the core samples them per frame.
        if self.held.handle_key_press(key.code) {
            return;
        }

        match handle_key_event(key) {
            Some(GameAction::Pause) => {
                if self.game.pause() {
                    self.held.reset();
                    self.screen = Screen::Pause;
                }
            }
            Some(action) => {
                self.game.apply_action(action);
                self.drain_events();
            }
            None => {}
        }
    }

    fn start_game(&mut self) {
        self.held.reset();
        self.last_rank = None;
        self.game.start_session();
        self.screen = Screen::Game;
    }

    /// Advance one frame.
    pub fn tick(&mut self, elapsed_ms: u32) {
        match self.screen {
            Screen::Splash => {
                self.splash_ms = self.splash_ms.saturating_add(elapsed_ms);
                if self.splash_ms >= SPLASH_MS {
                    self.screen = Screen::Start;
                }
            }
            Screen::Game => {
                let input = self.held.frame(elapsed_ms);
                self.game.tick(elapsed_ms, input);
                self.drain_events();
            }
            // Paused and finished sessions still age the level banner.
            Screen::Pause | Screen::GameOver => {
                self.game.tick(elapsed_ms, FrameInput::IDLE);
            }
            _ => {}
        }
    }

    fn drain_events(&mut self) {
        let events = self.game.take_events();
        if events
            .iter()
            .any(|e| matches!(e, CoreEvent::GameOver { .. }))
        {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        self.held.reset();
        self.screen = Screen::GameOver;

        let Some(entry) = self.game.final_entry(timestamp_now()) else {
            return;
        };
        self.last_rank = self.table.insert(entry);
        if self.last_rank.is_some() {
            // A failed save keeps the score in memory for this run only.
            let _ = self.store.save(&self.table);
        }
    }

    /// Draw the current screen.
    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        match self.screen {
            Screen::Splash => screens::render_splash(fb, viewport),
            Screen::Start => screens::render_start(fb, viewport),
            Screen::PlayerName => screens::render_name_entry(fb, viewport, &self.name_input),
            Screen::PlayMenu => {
                let labels = PlayMenuOption::ALL.map(PlayMenuOption::label);
                screens::render_option_list(
                    fb,
                    viewport,
                    "SELECT WITH THE RIGHT ARROW",
                    &labels,
                    self.menu_index,
                );
            }
            Screen::Rules => {
                screens::render_text_page(fb, viewport, "RULES", RULES, "ESC or LEFT to go back")
            }
            Screen::Lore => {
                screens::render_text_page(fb, viewport, "LORE", LORE, "ESC or LEFT to go back")
            }
            Screen::Menu => {
                screens::render_text_page(fb, viewport, screens::TITLE, MENU_HELP, "")
            }
            Screen::HighScores => screens::render_high_scores(fb, viewport, self.table.entries()),
            Screen::Game | Screen::Pause | Screen::GameOver => {
                self.view
                    .render_into(&self.game.snapshot(), self.game.player_name(), viewport, fb)
            }
        }
    }
}
