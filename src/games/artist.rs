//! Guess-the-artist: one free-text attempt per painting, an on-demand hint
//! and a flavor fact on reveal.

use wasm_bindgen::JsValue;

use crate::app::{self, SiteState};
use crate::catalog::{ARTIST_PROMPTS, ArtistPrompt};
use crate::dom;
use crate::games::{self, answer_matches};
use crate::session::Game;

pub const POINTS_PER_ANSWER: i32 = 10;

pub struct ArtistGame {
    index: usize,
    buffer: String,
    revealed: bool,
    is_correct: bool,
    hint_shown: bool,
    score: i32,
    finished: bool,
    reported: bool,
}

impl ArtistGame {
    pub fn new() -> Self {
        Self {
            index: 0,
            buffer: String::new(),
            revealed: false,
            is_correct: false,
            hint_shown: false,
            score: 0,
            finished: false,
            reported: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn prompt(&self) -> &'static ArtistPrompt {
        &ARTIST_PROMPTS[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub fn hint_shown(&self) -> bool {
        self.hint_shown
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn push_char(&mut self, c: char) {
        if self.revealed || self.finished || self.buffer.len() >= 48 {
            return;
        }
        if c.is_ascii_alphanumeric() || c == ' ' || c == '.' || c == '-' || c == '\'' {
            self.buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if !self.revealed {
            self.buffer.pop();
        }
    }

    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    /// Reading the hint never affects the score.
    pub fn toggle_hint(&mut self) {
        if !self.revealed && !self.finished {
            self.hint_shown = !self.hint_shown;
        }
    }

    pub fn hint_text(&self) -> String {
        let artist = self.prompt().artist;
        let initial = artist.chars().next().unwrap_or('?');
        let words = artist.split_whitespace().count();
        format!("This artist's name starts with \"{initial}\" and has {words} words.")
    }

    /// Single attempt per painting. Empty buffers are ignored (submission is
    /// effectively disabled until something is typed).
    pub fn submit(&mut self) -> Option<bool> {
        if self.revealed || self.finished || self.buffer.trim().is_empty() {
            return None;
        }
        let correct = answer_matches(&self.buffer, self.prompt().artist);
        self.is_correct = correct;
        self.revealed = true;
        if correct {
            self.score += POINTS_PER_ANSWER;
        }
        Some(correct)
    }

    /// Move to the next painting; walking off the end of the set finishes
    /// the run and freezes the score for a single report.
    pub fn advance(&mut self) {
        if !self.revealed || self.finished {
            return;
        }
        if self.index + 1 < ARTIST_PROMPTS.len() {
            self.index += 1;
            self.buffer.clear();
            self.revealed = false;
            self.is_correct = false;
            self.hint_shown = false;
        } else {
            self.finished = true;
        }
    }

    /// The accumulated score, handed out once per finished run.
    pub fn take_report(&mut self) -> Option<i32> {
        if self.finished && !self.reported {
            self.reported = true;
            Some(self.score)
        } else {
            None
        }
    }
}

impl Default for ArtistGame {
    fn default() -> Self {
        Self::new()
    }
}

// --- DOM shell ---------------------------------------------------------------

pub fn handle_key(st: &mut SiteState, key: &str) {
    let g = &mut st.games.artist;
    match key {
        "Enter" => {
            if g.revealed() {
                g.advance();
                games::redraw(st);
            } else if g.submit().is_some() {
                games::redraw(st);
            }
        }
        "Backspace" => {
            g.backspace();
            update_buffer(st);
        }
        "Escape" => {
            g.clear_buffer();
            update_buffer(st);
        }
        k if k.chars().count() == 1 => {
            if let Some(c) = k.chars().next() {
                g.push_char(c);
            }
            update_buffer(st);
        }
        _ => {}
    }
}

fn update_buffer(st: &SiteState) {
    dom::set_text_by_id(
        &st.doc,
        "bt-artist-buffer",
        games::buffer_display(st.games.artist.buffer()),
    );
}

pub fn render(st: &mut SiteState) -> Result<(), JsValue> {
    let doc = st.doc.clone();
    st.root.set_inner_html("");

    if st.games.artist.is_finished() {
        let score = st.games.artist.score();
        let card = games::completion_card(
            st,
            Game::Artist,
            "Masterpiece Complete!",
            score,
            (score / 8).max(0) as usize,
        )?;
        st.root.append_child(&card)?;
        return Ok(());
    }

    let wrap = dom::styled(&doc, "div", "max-width:960px; margin:0 auto; padding:48px 24px 120px;")?;
    let header = games::game_header(
        st,
        Game::Artist,
        "\u{1F3A8} Guess the Artist",
        &format!(
            "Painting {} of {}",
            st.games.artist.index() + 1,
            ARTIST_PROMPTS.len()
        ),
        st.games.artist.score(),
    )?;
    wrap.append_child(&header)?;

    let grid = dom::styled(
        &doc,
        "div",
        "display:grid; grid-template-columns:1fr 1fr; gap:32px; background:rgba(80,20,30,0.55); \
         border:2px solid rgba(255,209,102,0.4); border-radius:24px; padding:32px;",
    )?;

    let painting = dom::image_with_fallback(
        &doc,
        st.games.artist.prompt().image_path,
        "width:100%; aspect-ratio:1/1; object-fit:cover; border-radius:16px; \
         border:4px solid rgba(255,209,102,0.5);",
    )?;
    grid.append_child(&painting)?;

    let side = dom::styled(&doc, "div", "display:flex; flex-direction:column; justify-content:center; gap:16px;")?;
    let q = dom::styled(&doc, "h3", "margin:0; font-size:26px; color:#ffd166;")?;
    q.set_text_content(Some("Who painted this masterpiece?"));
    side.append_child(&q)?;

    if !st.games.artist.revealed() {
        let buffer = games::guess_box(st, "bt-artist-buffer", st.games.artist.buffer())?;
        side.append_child(&buffer)?;

        let row = dom::styled(&doc, "div", "display:flex; gap:12px;")?;
        let submit = dom::styled(
            &doc,
            "button",
            "flex:1; padding:14px 0; border:none; border-radius:14px; font-size:16px; \
             font-weight:bold; color:#3a0d18; background:linear-gradient(90deg,#ffd166,#f4a259);",
        )?;
        submit.set_text_content(Some("Submit Answer"));
        dom::on_click(&submit, || {
            app::with_state(|st| {
                if st.games.artist.submit().is_some() {
                    games::redraw(st);
                }
            });
        })?;
        row.append_child(&submit)?;

        let hint = dom::styled(
            &doc,
            "button",
            "padding:14px 20px; border-radius:14px; border:2px solid rgba(255,209,102,0.5); \
             background:transparent; color:#ffd166; font-size:16px;",
        )?;
        hint.set_text_content(Some("\u{1F4A1} Hint"));
        dom::on_click(&hint, || {
            app::with_state(|st| {
                st.games.artist.toggle_hint();
                games::redraw(st);
            });
        })?;
        row.append_child(&hint)?;
        side.append_child(&row)?;

        if st.games.artist.hint_shown() {
            let box_el = dom::styled(
                &doc,
                "div",
                "padding:14px 16px; border:1px solid rgba(255,209,102,0.5); border-radius:14px; \
                 background:rgba(120,70,20,0.35); color:#f4e3c1; font-size:15px;",
            )?;
            box_el.set_text_content(Some(&st.games.artist.hint_text()));
            side.append_child(&box_el)?;
        }
    } else {
        let correct = st.games.artist.is_correct();
        let verdict = dom::styled(
            &doc,
            "h3",
            if correct {
                "margin:0; font-size:24px; color:#7ecb7e;"
            } else {
                "margin:0; font-size:24px; color:#ff7b7b;"
            },
        )?;
        verdict.set_text_content(Some(if correct { "\u{2714} Magnificent!" } else { "\u{2716} Not quite!" }));
        side.append_child(&verdict)?;

        let reveal = dom::styled(&doc, "p", "margin:0; font-size:19px; color:#f4e3c1;")?;
        reveal.set_text_content(Some(&format!(
            "The artist is: {}",
            st.games.artist.prompt().artist
        )));
        side.append_child(&reveal)?;

        let fact = dom::styled(
            &doc,
            "div",
            "padding:14px 16px; border:1px solid rgba(255,209,102,0.5); border-radius:14px; \
             background:rgba(120,70,20,0.35); color:#f4e3c1; font-size:15px; line-height:1.5;",
        )?;
        fact.set_text_content(Some(&format!(
            "Did you know? {}",
            st.games.artist.prompt().fact
        )));
        side.append_child(&fact)?;

        let next = dom::styled(
            &doc,
            "button",
            "padding:14px 28px; border:none; border-radius:14px; font-size:16px; \
             font-weight:bold; color:#3a0d18; background:linear-gradient(90deg,#ffd166,#f4a259);",
        )?;
        next.set_text_content(Some(
            if st.games.artist.index() + 1 < ARTIST_PROMPTS.len() {
                "Next Painting"
            } else {
                "Finish Game"
            },
        ));
        dom::on_click(&next, || {
            app::with_state(|st| {
                st.games.artist.advance();
                games::redraw(st);
            });
        })?;
        side.append_child(&next)?;
    }

    grid.append_child(&side)?;
    wrap.append_child(&grid)?;
    st.root.append_child(&wrap)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correct_run(g: &mut ArtistGame) {
        while !g.is_finished() {
            let answer = g.prompt().artist.to_string();
            for c in answer.chars() {
                g.push_char(c);
            }
            assert_eq!(g.submit(), Some(true));
            g.advance();
        }
    }

    #[test]
    fn correct_answer_scores_ten() {
        let mut g = ArtistGame::new();
        for c in "van gogh".chars() {
            g.push_char(c);
        }
        assert_eq!(g.submit(), Some(true));
        assert_eq!(g.score(), POINTS_PER_ANSWER);
    }

    #[test]
    fn empty_submission_is_ignored() {
        let mut g = ArtistGame::new();
        assert_eq!(g.submit(), None);
        g.push_char(' ');
        assert_eq!(g.submit(), None);
        assert!(!g.revealed());
    }

    #[test]
    fn single_attempt_per_prompt() {
        let mut g = ArtistGame::new();
        for c in "wrong".chars() {
            g.push_char(c);
        }
        assert_eq!(g.submit(), Some(false));
        assert_eq!(g.score(), 0);
        // Revealed round refuses further submissions.
        assert_eq!(g.submit(), None);
    }

    #[test]
    fn hint_does_not_change_score() {
        let mut g = ArtistGame::new();
        g.toggle_hint();
        assert!(g.hint_shown());
        assert!(g.hint_text().contains('"'));
        for c in g.prompt().artist.to_string().chars() {
            g.push_char(c);
        }
        assert_eq!(g.submit(), Some(true));
        assert_eq!(g.score(), POINTS_PER_ANSWER);
    }

    #[test]
    fn full_run_reports_accumulated_score_once() {
        let mut g = ArtistGame::new();
        correct_run(&mut g);
        assert!(g.is_finished());
        assert_eq!(g.take_report(), Some(POINTS_PER_ANSWER * 3));
        assert_eq!(g.take_report(), None);
    }
}
