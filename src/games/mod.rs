//! Mini-game host: the game menu, shared answer matching and score
//! forwarding into the session.
//!
//! Each game keeps its round state in a plain struct (testable on the
//! host) and reports one accumulated score per completed run; the session
//! makes the report idempotent per game id.

pub mod artist;
pub mod movie;
pub mod wordle;

use wasm_bindgen::JsValue;

use crate::app::{self, SiteState};
use crate::dom;
use crate::rng::Lcg;
use crate::session::Game;

/// Case-insensitive fuzzy acceptance: the guess is a substring of the
/// canonical answer or the other way round, so partial names pass.
pub fn answer_matches(guess: &str, answer: &str) -> bool {
    let g = guess.trim().to_lowercase();
    if g.is_empty() {
        return false;
    }
    let a = answer.to_lowercase();
    g.contains(&a) || a.contains(&g)
}

/// Strict-equality fallback with every non-letter stripped, tolerating
/// punctuation and spacing differences ("Kal Ho Naa Ho!" vs "kalhonaaho").
pub fn normalized_equal(guess: &str, answer: &str) -> bool {
    fn strip(s: &str) -> String {
        s.chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }
    let g = strip(guess);
    !g.is_empty() && g == strip(answer)
}

/// Host state: which game is mounted plus the three round structs.
pub struct GamesHost {
    pub active: Option<Game>,
    pub artist: artist::ArtistGame,
    pub movie: movie::MovieGame,
    pub wordle: wordle::WordleGame,
}

impl GamesHost {
    pub fn new() -> Self {
        Self {
            active: None,
            artist: artist::ArtistGame::new(),
            movie: movie::MovieGame::new(),
            wordle: wordle::WordleGame::new(),
        }
    }
}

impl Default for GamesHost {
    fn default() -> Self {
        Self::new()
    }
}

// --- DOM shell ---------------------------------------------------------------

const CARDS: [(Game, &str, &str, &str); 3] = [
    (
        Game::Artist,
        "\u{1F3A8}",
        "Guess the Artist",
        "Name the painter behind each masterpiece",
    ),
    (
        Game::Movie,
        "\u{1F3AC}",
        "Guess the Movie",
        "Spot the Bollywood classic from a single scene",
    ),
    (
        Game::Wordle,
        "\u{1F7E9}",
        "Bollywood Wordle",
        "Crack the five-letter word in six tries",
    ),
];

pub fn render(st: &mut SiteState) -> Result<(), JsValue> {
    match st.games.active {
        None => render_menu(st),
        Some(Game::Artist) => artist::render(st),
        Some(Game::Movie) => movie::render(st),
        Some(Game::Wordle) => wordle::render(st),
    }
}

/// Re-render after a state change; failures stay local per the error model.
pub fn redraw(st: &mut SiteState) {
    if render(st).is_err() {
        dom::warn("game render failed");
    }
}

/// Start (or restart) a game from the menu. The movie prompt order is
/// reshuffled on every mount.
pub fn start_game(st: &mut SiteState, game: Game) {
    match game {
        Game::Artist => st.games.artist.reset(),
        Game::Movie => {
            let mut rng = Lcg::from_now();
            st.games.movie.reset(&mut rng);
        }
        Game::Wordle => st.games.wordle.reset(),
    }
    st.games.active = Some(game);
    redraw(st);
}

/// Return to the menu. A finished run hands its accumulated score to the
/// session exactly once; an abandoned run is discarded outright.
pub fn leave_game(st: &mut SiteState, game: Game) {
    let report = match game {
        Game::Artist => st.games.artist.take_report(),
        Game::Movie => st.games.movie.take_report(),
        Game::Wordle => st.games.wordle.take_report(),
    };
    if let Some(score) = report {
        st.session.record_game_result(game, score);
    }
    st.games.active = None;
    redraw(st);
}

/// Document-level keydown routing for whichever game owns typed input.
pub fn handle_key(st: &mut SiteState, key: &str) {
    match st.games.active {
        Some(Game::Artist) => artist::handle_key(st, key),
        Some(Game::Movie) => movie::handle_key(st, key),
        Some(Game::Wordle) => wordle::handle_key(st, key),
        None => {}
    }
}

fn render_menu(st: &mut SiteState) -> Result<(), JsValue> {
    let doc = st.doc.clone();
    st.root.set_inner_html("");
    let wrap = dom::styled(
        &doc,
        "div",
        "max-width:960px; margin:0 auto; padding:72px 24px 120px; text-align:center;",
    )?;

    let title = dom::styled(
        &doc,
        "h2",
        "font-size:44px; margin:0 0 8px; color:#ffd166; letter-spacing:1px;",
    )?;
    title.set_text_content(Some("Game Zone"));
    wrap.append_child(&title)?;
    let blurb = dom::styled(&doc, "p", "color:#d9b98c; font-size:18px; margin:0 0 28px;")?;
    blurb.set_text_content(Some("Challenge yourself with these delightful games!"));
    wrap.append_child(&blurb)?;

    if st.session.completed_game_count() > 0 {
        let chip = dom::styled(
            &doc,
            "div",
            "display:inline-block; background:rgba(255,209,102,0.12); border:1px solid #ffd166; \
             border-radius:999px; padding:8px 22px; margin-bottom:28px; color:#ffd166; \
             font-weight:bold;",
        )?;
        chip.set_text_content(Some(&format!(
            "\u{1F3C6} Total Score: {}",
            st.session.total_score()
        )));
        wrap.append_child(&chip)?;
    }

    let grid = dom::styled(
        &doc,
        "div",
        "display:grid; grid-template-columns:repeat(auto-fit, minmax(240px, 1fr)); gap:24px;",
    )?;
    for (game, icon, name, desc) in CARDS {
        let done = st.session.is_completed(game);
        let card = dom::styled(
            &doc,
            "div",
            "background:rgba(80,20,30,0.55); border:2px solid rgba(255,209,102,0.35); \
             border-radius:24px; padding:28px 20px; text-align:center;",
        )?;
        let icon_el = dom::styled(&doc, "div", "font-size:44px; margin-bottom:12px;")?;
        icon_el.set_text_content(Some(icon));
        card.append_child(&icon_el)?;
        let name_el = dom::styled(&doc, "h3", "margin:0 0 8px; color:#f4e3c1; font-size:22px;")?;
        name_el.set_text_content(Some(name));
        card.append_child(&name_el)?;
        let desc_el = dom::styled(&doc, "p", "margin:0 0 18px; color:#d9b98c; font-size:15px;")?;
        desc_el.set_text_content(Some(desc));
        card.append_child(&desc_el)?;
        if done {
            let badge = dom::styled(&doc, "div", "color:#ffd166; margin-bottom:10px;")?;
            badge.set_text_content(Some(&format!(
                "\u{1F3C6} completed: {} pts",
                st.session.score_for(game).unwrap_or(0)
            )));
            card.append_child(&badge)?;
        }
        let play = dom::styled(
            &doc,
            "button",
            "width:100%; padding:12px 0; border:none; border-radius:14px; font-size:16px; \
             font-weight:bold; color:#3a0d18; background:linear-gradient(90deg,#ffd166,#f4a259);",
        )?;
        play.set_text_content(Some(if done { "Play Again" } else { "Start Game" }));
        dom::on_click(&play, move || {
            app::with_state(|st| start_game(st, game));
        })?;
        card.append_child(&play)?;
        grid.append_child(&card)?;
    }
    wrap.append_child(&grid)?;
    st.root.append_child(&wrap)?;
    Ok(())
}

// --- Shared game chrome ------------------------------------------------------

/// Header row used by all three games: back button, title, progress line
/// and a live score chip (id `bt-game-score`).
pub(crate) fn game_header(
    st: &SiteState,
    game: Game,
    title: &str,
    progress: &str,
    score: i32,
) -> Result<web_sys::Element, JsValue> {
    let doc = &st.doc;
    let row = dom::styled(
        &doc,
        "div",
        "display:flex; justify-content:space-between; align-items:center; gap:16px; \
         margin-bottom:24px;",
    )?;
    let back = dom::styled(
        &doc,
        "button",
        "padding:10px 18px; border-radius:12px; border:1px solid rgba(255,209,102,0.4); \
         background:rgba(80,20,30,0.7); color:#ffd166; font-size:15px;",
    )?;
    back.set_text_content(Some("\u{2190} Back"));
    dom::on_click(&back, move || {
        app::with_state(|st| leave_game(st, game));
    })?;
    row.append_child(&back)?;

    let mid = dom::styled(&doc, "div", "text-align:center;")?;
    let h = dom::styled(&doc, "h1", "margin:0; font-size:34px; color:#ffd166;")?;
    h.set_text_content(Some(title));
    mid.append_child(&h)?;
    let p = dom::styled(&doc, "p", "margin:4px 0 0; color:#d9b98c; font-size:14px;")?;
    p.set_text_content(Some(progress));
    mid.append_child(&p)?;
    row.append_child(&mid)?;

    let chip = dom::styled(
        &doc,
        "div",
        "padding:10px 18px; border-radius:12px; border:1px solid rgba(255,209,102,0.4); \
         background:rgba(80,20,30,0.7); color:#ffd166; font-weight:bold;",
    )?;
    chip.set_id("bt-game-score");
    chip.set_text_content(Some(&format!("Score: {score}")));
    row.append_child(&chip)?;
    Ok(row)
}

/// End-of-run card: headline, final score, a star row and a back action.
pub(crate) fn completion_card(
    st: &SiteState,
    game: Game,
    headline: &str,
    score: i32,
    stars: usize,
) -> Result<web_sys::Element, JsValue> {
    let doc = &st.doc;
    let card = dom::styled(
        &doc,
        "div",
        "max-width:420px; margin:10vh auto 0; background:rgba(80,20,30,0.75); \
         border:2px solid #ffd166; border-radius:24px; padding:40px 32px; text-align:center;",
    )?;
    let h = dom::styled(&doc, "h2", "margin:0 0 12px; font-size:30px; color:#ffd166;")?;
    h.set_text_content(Some(headline));
    card.append_child(&h)?;
    let p = dom::styled(&doc, "p", "margin:0 0 14px; font-size:20px; color:#f4e3c1;")?;
    p.set_text_content(Some(&format!("Final Score: {score}")));
    card.append_child(&p)?;
    let stars_el = dom::styled(&doc, "div", "font-size:26px; margin-bottom:20px;")?;
    stars_el.set_text_content(Some(&"\u{2B50}".repeat(stars.min(5))));
    card.append_child(&stars_el)?;
    let back = dom::styled(
        &doc,
        "button",
        "padding:12px 28px; border:none; border-radius:14px; font-size:16px; font-weight:bold; \
         color:#3a0d18; background:linear-gradient(90deg,#ffd166,#f4a259);",
    )?;
    back.set_text_content(Some("Back to Games"));
    dom::on_click(&back, move || {
        app::with_state(|st| leave_game(st, game));
    })?;
    card.append_child(&back)?;
    Ok(card)
}

/// Typed-guess box shared by the artist and movie games. The document
/// keydown router fills it; there is no form input element.
pub(crate) fn guess_box(st: &SiteState, id: &str, buffer: &str) -> Result<web_sys::Element, JsValue> {
    let doc = &st.doc;
    let el = dom::styled(
        &doc,
        "div",
        "min-height:30px; padding:14px 16px; border:2px solid rgba(255,209,102,0.5); \
         border-radius:14px; background:rgba(40,8,14,0.6); color:#f4e3c1; font-size:18px; \
         text-align:left; letter-spacing:0.5px;",
    )?;
    el.set_id(id);
    el.set_text_content(Some(buffer_display(buffer)));
    Ok(el)
}

pub(crate) fn buffer_display(buffer: &str) -> &str {
    if buffer.is_empty() {
        "type your answer, then press Enter\u{2026}"
    } else {
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuzzy_match_accepts_partials_both_ways() {
        assert!(answer_matches("van gogh", "Vincent van Gogh"));
        assert!(answer_matches("VINCENT VAN GOGH", "Vincent van Gogh"));
        assert!(answer_matches("the great Vincent van Gogh himself", "Vincent van Gogh"));
        assert!(!answer_matches("monet", "Vincent van Gogh"));
    }

    #[test]
    fn fuzzy_match_ignores_blank_input() {
        assert!(!answer_matches("", "Frida Kahlo"));
        assert!(!answer_matches("   ", "Frida Kahlo"));
    }

    #[test]
    fn normalized_fallback_strips_punctuation_and_spacing() {
        assert!(normalized_equal("kal ho naa ho!", "Kal Ho Naa Ho"));
        assert!(normalized_equal("Dil-Chahta-Hai", "Dil Chahta Hai"));
        assert!(!normalized_equal("kal ho", "Kal Ho Naa Ho"));
        assert!(!normalized_equal("...", "Kal Ho Naa Ho"));
    }
}
