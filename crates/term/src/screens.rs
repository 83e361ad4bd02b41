//! Full-screen pages outside of play: splash, title, name entry, menus,
//! rules, lore and the high-score list.
//!
//! Every page clears the framebuffer and centers its content, so pages
//! can be drawn into the same buffer the game view uses.

use crate::core::HighScoreEntry;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;
use crate::types::MAX_NAME_LEN;

pub const TITLE: &str = "STELLAR BLOCKS";

pub const RULES: &[&str] = &[
    "Move pieces with the left and right arrows.",
    "Rotate with Z or the up arrow.",
    "Hold the down arrow to fall faster; X or SPACE drops at once.",
    "Complete horizontal lines to score and hold out against the clock.",
    "Each level lasts 122 seconds. Survive it with room to spare",
    "and the next level begins, a little faster.",
    "Marked pieces are special: locking one pays a bonus,",
    "and every line built with one pays more.",
];

pub const LORE: &[&str] = &[
    "Year 2437, after the age of machines.",
    "Humanity reached for the stars and found it was not alone.",
    "Attacks from beyond began in 2430 and left Earth in ruins;",
    "only a few escaped aboard the X97 ships.",
    "",
    "As captain of the Stellar, you carry the last hope of humanity:",
    "a crew bound for a new home.",
    "",
    "Use the star-mining cubes found along the way to build",
    "defense lines without gaps, and keep your crew alive.",
    "",
    "The fate of humanity is in your hands. Think, and survive.",
];

pub const MENU_HELP: &[&str] = &[
    "SPACE or ENTER  start",
    "H               high scores",
    "LEFT or ESC     back",
    "S               quit",
    "",
    "LEFT RIGHT      move",
    "DOWN            soft drop",
    "X or SPACE      hard drop",
    "UP or Z         rotate",
    "P               pause",
    "ESC             back to this menu",
];

const BG: Rgb = Rgb::new(3, 5, 22);
const MENU_BG: Rgb = Rgb::new(29, 29, 41);

fn text_style(bg: Rgb) -> CellStyle {
    CellStyle::new(Rgb::new(230, 230, 230), bg)
}

fn hint_style(bg: Rgb) -> CellStyle {
    CellStyle::new(Rgb::new(150, 150, 150), bg)
}

fn title_style(bg: Rgb) -> CellStyle {
    CellStyle::new(Rgb::new(255, 220, 100), bg).bold()
}

fn begin(fb: &mut FrameBuffer, viewport: Viewport, bg: Rgb) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(text_style(bg).cell(' '));
}

/// First row of a block of `rows` rows centered vertically.
fn centered_top(viewport: Viewport, rows: usize) -> u16 {
    viewport.height.saturating_sub(rows as u16) / 2
}

pub fn render_splash(fb: &mut FrameBuffer, viewport: Viewport) {
    begin(fb, viewport, BG);
    let top = centered_top(viewport, 3);
    fb.put_str_centered(top, "S T E L L A R   S T U D I O S", title_style(BG));
    fb.put_str_centered(top + 2, "presents", hint_style(BG));
}

pub fn render_start(fb: &mut FrameBuffer, viewport: Viewport) {
    begin(fb, viewport, BG);
    let top = centered_top(viewport, 5);
    fb.put_str_centered(top, TITLE, title_style(BG));
    fb.put_str_centered(top + 3, "Press SPACE to begin", text_style(BG));
    fb.put_str_centered(top + 4, "ESC to quit", hint_style(BG));
}

pub fn render_name_entry(fb: &mut FrameBuffer, viewport: Viewport, input: &str) {
    begin(fb, viewport, BG);
    let top = centered_top(viewport, 5);
    let prompt = format!("ENTER YOUR NAME (MAX. {MAX_NAME_LEN} CHARACTERS)");
    fb.put_str_centered(top, &prompt, text_style(BG).bold());
    fb.put_str_centered(top + 2, &format!("{input}_"), text_style(BG));
    fb.put_str_centered(top + 4, "Press ENTER to confirm", hint_style(BG));
}

/// A vertical list of options with a `>` marker on the selected one.
pub fn render_option_list(
    fb: &mut FrameBuffer,
    viewport: Viewport,
    heading: &str,
    options: &[&str],
    selected: usize,
) {
    begin(fb, viewport, MENU_BG);
    let rows = options.len() * 2 + 2;
    let top = centered_top(viewport, rows);
    fb.put_str_centered(top, heading, text_style(MENU_BG).bold());

    let width = options.iter().map(|o| o.chars().count()).max().unwrap_or(0) as u16;
    let x = viewport.width.saturating_sub(width) / 2;
    for (i, option) in options.iter().enumerate() {
        let y = top + 2 + (i as u16) * 2;
        let style = if i == selected {
            title_style(MENU_BG)
        } else {
            text_style(MENU_BG)
        };
        if i == selected {
            fb.put_str(x.saturating_sub(3), y, ">", style);
        }
        fb.put_str(x, y, option, style);
    }
}

/// A titled block of text with a hint on the last row.
pub fn render_text_page(
    fb: &mut FrameBuffer,
    viewport: Viewport,
    heading: &str,
    lines: &[&str],
    footer: &str,
) {
    begin(fb, viewport, BG);
    let top = centered_top(viewport, lines.len() + 4);
    fb.put_str_centered(top, heading, title_style(BG));
    for (i, line) in lines.iter().enumerate() {
        fb.put_str_centered(top + 2 + i as u16, line, text_style(BG));
    }
    fb.put_str_centered(top + 3 + lines.len() as u16, footer, hint_style(BG));
}

pub fn render_high_scores(fb: &mut FrameBuffer, viewport: Viewport, entries: &[HighScoreEntry]) {
    begin(fb, viewport, BG);
    let top = centered_top(viewport, entries.len().max(1) + 4);
    fb.put_str_centered(top, "HIGH SCORES", title_style(BG));

    if entries.is_empty() {
        fb.put_str_centered(top + 2, "No scores yet", text_style(BG));
    }
    for (i, e) in entries.iter().enumerate() {
        let line = format!(
            "{:>2}. {:<12} {:>7} pts  level {:<2}  {}",
            i + 1,
            e.name,
            e.score,
            e.level,
            e.date
        );
        fb.put_str_centered(top + 2 + i as u16, &line, text_style(BG));
    }

    let footer_y = top + 3 + entries.len().max(1) as u16;
    fb.put_str_centered(footer_y, "ESC or LEFT to go back", hint_style(BG));
}
