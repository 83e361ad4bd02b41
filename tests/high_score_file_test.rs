//! High-score file format as seen from outside the game

use std::fs;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};
use serde_json::{json, Value};

use stellar_blocks::app::{App, AppConfig, Screen};
use stellar_blocks::core::{HighScoreEntry, HighScoreTable};
use stellar_blocks::store::HighScoreStore;
use stellar_blocks::term::{FrameBuffer, Viewport};

fn temp_scores(tag: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("stellar_blocks_hs_{tag}_{nanos}.json"))
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::from(code));
}

#[test]
fn existing_file_is_listed_on_the_high_score_page() {
    let path = temp_scores("listed");
    let file = json!([
        { "Name": "BETELGEUSE", "Score": 250, "Level": 2, "Date": "2024-10-01 18:30:00" },
        { "Name": "CAPELLA", "Score": 990, "Level": 5, "Date": "2024-10-02 18:30:00" }
    ]);
    fs::write(&path, serde_json::to_string(&file).unwrap()).unwrap();

    let mut app = App::new(AppConfig {
        seed: 3,
        scores_path: path.clone(),
        player_name: Some("MIRA".to_string()),
    });
    assert_eq!(app.high_scores().entries()[0].name, "CAPELLA");

    // Splash, start, then the name is already filled in.
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.name_input(), "MIRA");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.screen(), Screen::HighScores);

    let mut fb = FrameBuffer::new(0, 0);
    app.render_into(Viewport::new(100, 30), &mut fb);
    let rows: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    let capella = rows.iter().position(|r| r.contains("CAPELLA")).unwrap();
    let betelgeuse = rows.iter().position(|r| r.contains("BETELGEUSE")).unwrap();
    assert!(capella < betelgeuse);

    fs::remove_file(&path).ok();
}

#[test]
fn saved_table_is_a_json_array_in_rank_order() {
    let path = temp_scores("ranked");
    let store = HighScoreStore::new(&path);

    let mut table = HighScoreTable::new();
    for (name, score) in [("ATRIA", 300), ("MIMOSA", 800), ("SHAULA", 500)] {
        table.insert(HighScoreEntry::new(name, score, 1, "2024-10-03 09:00:00"));
    }
    store.save(&table).unwrap();

    let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let scores: Vec<u64> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["Score"].as_u64().unwrap())
        .collect();
    assert_eq!(scores, vec![800, 500, 300]);
    assert!(value[0].get("name").is_none());

    fs::remove_file(&path).ok();
}

#[test]
fn unreadable_file_does_not_block_the_game() {
    let path = temp_scores("broken");
    fs::write(&path, "[{\"Name\": 12}").unwrap();

    let app = App::new(AppConfig {
        seed: 3,
        scores_path: path.clone(),
        player_name: None,
    });
    assert!(app.high_scores().is_empty());

    fs::remove_file(&path).ok();
}
