//! Guess-the-movie: two attempts per still, a blurred-poster hint after the
//! first miss, and the 15 / 10 / 0 scoring split.

use wasm_bindgen::JsValue;

use crate::app::{self, SiteState};
use crate::catalog::{MOVIE_PROMPTS, MoviePrompt};
use crate::dom;
use crate::games::{self, answer_matches, normalized_equal};
use crate::rng::Lcg;
use crate::session::Game;

pub const FIRST_TRY_POINTS: i32 = 15;
pub const HINTED_POINTS: i32 = 10;
pub const MAX_ATTEMPTS: usize = 2;

/// Attempt machine for one still. `Resolved` is reached by any correct
/// guess or by the second miss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attempt {
    First,
    SecondHinted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct,
    HintRevealed,
    Failed,
}

pub struct MovieGame {
    order: Vec<usize>,
    pos: usize,
    buffer: String,
    attempt: Attempt,
    resolved: bool,
    is_correct: bool,
    last_award: i32,
    score: i32,
    finished: bool,
    reported: bool,
}

impl MovieGame {
    pub fn new() -> Self {
        Self {
            order: (0..MOVIE_PROMPTS.len()).collect(),
            pos: 0,
            buffer: String::new(),
            attempt: Attempt::First,
            resolved: false,
            is_correct: false,
            last_award: 0,
            score: 0,
            finished: false,
            reported: false,
        }
    }

    /// Fresh run with the prompt order reshuffled.
    pub fn reset(&mut self, rng: &mut Lcg) {
        *self = Self::new();
        rng.shuffle(&mut self.order);
    }

    pub fn prompt(&self) -> &'static MoviePrompt {
        &MOVIE_PROMPTS[self.order[self.pos]]
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn resolved(&self) -> bool {
        self.resolved
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub fn last_award(&self) -> i32 {
        self.last_award
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn attempt_number(&self) -> usize {
        match self.attempt {
            Attempt::First => 1,
            Attempt::SecondHinted => 2,
        }
    }

    /// The blurred poster shows from the first miss until resolution.
    pub fn hint_visible(&self) -> bool {
        self.attempt == Attempt::SecondHinted && !self.resolved
    }

    pub fn push_char(&mut self, c: char) {
        if self.resolved || self.finished || self.buffer.len() >= 48 {
            return;
        }
        if c.is_ascii_alphanumeric() || c == ' ' || c == '.' || c == '-' || c == '\'' {
            self.buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if !self.resolved {
            self.buffer.pop();
        }
    }

    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    /// Fuzzy containment either way, then strict equality with punctuation
    /// stripped. A first miss reveals the poster hint and keeps the round
    /// open; a second miss resolves it for nothing.
    pub fn submit(&mut self) -> Option<SubmitOutcome> {
        if self.resolved || self.finished || self.buffer.trim().is_empty() {
            return None;
        }
        let title = self.prompt().title;
        let correct = answer_matches(&self.buffer, title) || normalized_equal(&self.buffer, title);
        if correct {
            self.last_award = match self.attempt {
                Attempt::First => FIRST_TRY_POINTS,
                Attempt::SecondHinted => HINTED_POINTS,
            };
            self.score += self.last_award;
            self.is_correct = true;
            self.resolved = true;
            Some(SubmitOutcome::Correct)
        } else if self.attempt == Attempt::First {
            self.attempt = Attempt::SecondHinted;
            self.buffer.clear();
            Some(SubmitOutcome::HintRevealed)
        } else {
            self.last_award = 0;
            self.is_correct = false;
            self.resolved = true;
            Some(SubmitOutcome::Failed)
        }
    }

    pub fn advance(&mut self) {
        if !self.resolved || self.finished {
            return;
        }
        if self.pos + 1 < self.order.len() {
            self.pos += 1;
            self.buffer.clear();
            self.attempt = Attempt::First;
            self.resolved = false;
            self.is_correct = false;
            self.last_award = 0;
        } else {
            self.finished = true;
        }
    }

    pub fn take_report(&mut self) -> Option<i32> {
        if self.finished && !self.reported {
            self.reported = true;
            Some(self.score)
        } else {
            None
        }
    }
}

impl Default for MovieGame {
    fn default() -> Self {
        Self::new()
    }
}

// --- DOM shell ---------------------------------------------------------------

pub fn handle_key(st: &mut SiteState, key: &str) {
    let g = &mut st.games.movie;
    match key {
        "Enter" => {
            if g.resolved() {
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
        "bt-movie-buffer",
        games::buffer_display(st.games.movie.buffer()),
    );
}

pub fn render(st: &mut SiteState) -> Result<(), JsValue> {
    let doc = st.doc.clone();
    st.root.set_inner_html("");

    if st.games.movie.is_finished() {
        let score = st.games.movie.score();
        let card = games::completion_card(
            st,
            Game::Movie,
            "Cinema Master!",
            score,
            (score / 10).max(0) as usize,
        )?;
        st.root.append_child(&card)?;
        return Ok(());
    }

    let wrap = dom::styled(&doc, "div", "max-width:960px; margin:0 auto; padding:48px 24px 120px;")?;
    let header = games::game_header(
        st,
        Game::Movie,
        "\u{1F3AC} Guess the Movie",
        &format!(
            "Scene {} of {}",
            st.games.movie.position() + 1,
            MOVIE_PROMPTS.len()
        ),
        st.games.movie.score(),
    )?;
    wrap.append_child(&header)?;

    let grid = dom::styled(
        &doc,
        "div",
        "display:grid; grid-template-columns:1fr 1fr; gap:32px; background:rgba(80,20,30,0.55); \
         border:2px solid rgba(255,209,102,0.4); border-radius:24px; padding:32px;",
    )?;

    let media = dom::styled(&doc, "div", "display:flex; flex-direction:column; gap:18px;")?;
    let still = dom::image_with_fallback(
        &doc,
        st.games.movie.prompt().still_path,
        "width:100%; aspect-ratio:16/9; object-fit:cover; border-radius:16px; \
         border:4px solid rgba(255,209,102,0.5);",
    )?;
    media.append_child(&still)?;

    if st.games.movie.hint_visible() {
        let poster = dom::image_with_fallback(
            &doc,
            st.games.movie.prompt().poster_path,
            "width:180px; margin:0 auto; aspect-ratio:3/4; object-fit:cover; border-radius:14px; \
             border:3px solid rgba(255,209,102,0.5); filter:blur(4px);",
        )?;
        media.append_child(&poster)?;
        let caption = dom::styled(&doc, "p", "margin:0; text-align:center; color:#d9b98c; font-size:13px;")?;
        caption.set_text_content(Some("Poster Hint (Blurred)"));
        media.append_child(&caption)?;
    } else if st.games.movie.resolved() {
        // Crisp poster reveal alongside the verdict.
        let poster = dom::image_with_fallback(
            &doc,
            st.games.movie.prompt().poster_path,
            "width:180px; margin:0 auto; aspect-ratio:3/4; object-fit:cover; border-radius:14px; \
             border:3px solid rgba(255,209,102,0.5);",
        )?;
        media.append_child(&poster)?;
    }
    grid.append_child(&media)?;

    let side = dom::styled(&doc, "div", "display:flex; flex-direction:column; justify-content:center; gap:16px;")?;
    let q = dom::styled(&doc, "h3", "margin:0; font-size:26px; color:#ffd166;")?;
    q.set_text_content(Some("Can you name this movie?"));
    side.append_child(&q)?;

    if !st.games.movie.resolved() {
        let attempts = dom::styled(&doc, "p", "margin:0; color:#d9b98c; font-size:14px;")?;
        attempts.set_text_content(Some(&format!(
            "Attempt {} of {}",
            st.games.movie.attempt_number(),
            MAX_ATTEMPTS
        )));
        side.append_child(&attempts)?;

        let buffer = games::guess_box(st, "bt-movie-buffer", st.games.movie.buffer())?;
        side.append_child(&buffer)?;

        let submit = dom::styled(
            &doc,
            "button",
            "padding:14px 0; border:none; border-radius:14px; font-size:16px; font-weight:bold; \
             color:#3a0d18; background:linear-gradient(90deg,#ffd166,#f4a259);",
        )?;
        submit.set_text_content(Some("Submit Answer"));
        dom::on_click(&submit, || {
            app::with_state(|st| {
                if st.games.movie.submit().is_some() {
                    games::redraw(st);
                }
            });
        })?;
        side.append_child(&submit)?;
    } else {
        let correct = st.games.movie.is_correct();
        let verdict = dom::styled(
            &doc,
            "h3",
            if correct {
                "margin:0; font-size:24px; color:#7ecb7e;"
            } else {
                "margin:0; font-size:24px; color:#ff7b7b;"
            },
        )?;
        verdict.set_text_content(Some(if correct {
            "\u{2714} Bollywood Expert!"
        } else {
            "\u{2716} Not quite!"
        }));
        side.append_child(&verdict)?;

        let reveal = dom::styled(&doc, "p", "margin:0; font-size:19px; color:#f4e3c1;")?;
        reveal.set_text_content(Some(&format!(
            "The movie is: {} ({})",
            st.games.movie.prompt().title,
            st.games.movie.prompt().year
        )));
        side.append_child(&reveal)?;

        if correct {
            let award = dom::styled(&doc, "p", "margin:0; color:#ffd166; font-size:15px;")?;
            award.set_text_content(Some(&format!("+{} points", st.games.movie.last_award())));
            side.append_child(&award)?;
        }

        let fact = dom::styled(
            &doc,
            "div",
            "padding:14px 16px; border:1px solid rgba(255,209,102,0.5); border-radius:14px; \
             background:rgba(120,70,20,0.35); color:#f4e3c1; font-size:15px; line-height:1.5;",
        )?;
        fact.set_text_content(Some(&format!("Fun Fact: {}", st.games.movie.prompt().fact)));
        side.append_child(&fact)?;

        let next = dom::styled(
            &doc,
            "button",
            "padding:14px 28px; border:none; border-radius:14px; font-size:16px; \
             font-weight:bold; color:#3a0d18; background:linear-gradient(90deg,#ffd166,#f4a259);",
        )?;
        next.set_text_content(Some(
            if st.games.movie.position() + 1 < MOVIE_PROMPTS.len() {
                "Next Movie"
            } else {
                "Finish Game"
            },
        ));
        dom::on_click(&next, || {
            app::with_state(|st| {
                st.games.movie.advance();
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

    fn type_str(g: &mut MovieGame, s: &str) {
        g.clear_buffer();
        for c in s.chars() {
            g.push_char(c);
        }
    }

    fn game_at(title: &str) -> MovieGame {
        let mut g = MovieGame::new();
        while g.prompt().title != title {
            let current = g.prompt().title;
            type_str(&mut g, current);
            assert_eq!(g.submit(), Some(SubmitOutcome::Correct));
            g.advance();
        }
        g
    }

    #[test]
    fn first_try_correct_scores_fifteen() {
        let mut g = game_at("Barsaat");
        let before = g.score();
        type_str(&mut g, "barsaat");
        assert_eq!(g.submit(), Some(SubmitOutcome::Correct));
        assert_eq!(g.score() - before, FIRST_TRY_POINTS);
    }

    #[test]
    fn hinted_correct_scores_ten() {
        let mut g = game_at("Barsaat");
        let before = g.score();
        type_str(&mut g, "sholay");
        assert_eq!(g.submit(), Some(SubmitOutcome::HintRevealed));
        assert!(g.hint_visible());
        assert_eq!(g.attempt_number(), 2);
        type_str(&mut g, "Barsaat");
        assert_eq!(g.submit(), Some(SubmitOutcome::Correct));
        assert_eq!(g.score() - before, HINTED_POINTS);
    }

    #[test]
    fn two_misses_resolve_for_nothing() {
        let mut g = game_at("Barsaat");
        let before = g.score();
        type_str(&mut g, "sholay");
        assert_eq!(g.submit(), Some(SubmitOutcome::HintRevealed));
        type_str(&mut g, "deewar");
        assert_eq!(g.submit(), Some(SubmitOutcome::Failed));
        assert!(g.resolved());
        assert!(!g.is_correct());
        assert_eq!(g.score(), before);
        // The round is closed; further submissions are ignored.
        type_str(&mut g, "Barsaat");
        assert_eq!(g.submit(), None);
    }

    #[test]
    fn punctuation_insensitive_fallback_applies() {
        let mut g = game_at("Kal Ho Naa Ho");
        type_str(&mut g, "kal-ho-naa-ho");
        assert_eq!(g.submit(), Some(SubmitOutcome::Correct));
    }

    #[test]
    fn full_run_reports_once() {
        let mut g = MovieGame::new();
        while !g.is_finished() {
            let current = g.prompt().title;
            type_str(&mut g, current);
            assert_eq!(g.submit(), Some(SubmitOutcome::Correct));
            g.advance();
        }
        assert_eq!(
            g.take_report(),
            Some(FIRST_TRY_POINTS * MOVIE_PROMPTS.len() as i32)
        );
        assert_eq!(g.take_report(), None);
    }

    #[test]
    fn reshuffle_keeps_every_prompt() {
        let mut g = MovieGame::new();
        g.reset(&mut Lcg::new(99));
        let mut seen = g.order.clone();
        seen.sort_unstable();
        assert_eq!(seen, (0..MOVIE_PROMPTS.len()).collect::<Vec<_>>());
    }
}
