//! Bollywood word-guess: five letters, six tries, per-position feedback.
//!
//! Evaluation is deliberately naive: a letter that misses its index counts
//! as present whenever it occurs anywhere in the target, with no
//! multiplicity accounting. The on-screen keyboard aggregates statuses
//! across guesses and only ever upgrades a letter.

use wasm_bindgen::JsValue;

use crate::app::{self, SiteState};
use crate::catalog::{WORD_ENTRIES, WordEntry};
use crate::dom;
use crate::games;
use crate::session::Game;

pub const WORD_LEN: usize = 5;
pub const MAX_ATTEMPTS: usize = 6;
pub const WIN_POINTS: i32 = 10;
pub const BONUS_PER_SPARE_ATTEMPT: i32 = 2;

/// Variant order is the upgrade order; the keyboard never moves a letter
/// to an earlier variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

/// Naive per-position evaluation over the guess, left to right.
pub fn evaluate(guess: &str, target: &str) -> [LetterStatus; WORD_LEN] {
    let g = guess.as_bytes();
    let t = target.as_bytes();
    let mut out = [LetterStatus::Absent; WORD_LEN];
    for (i, slot) in out.iter_mut().enumerate() {
        let Some(&gc) = g.get(i) else { break };
        *slot = if t.get(i) == Some(&gc) {
            LetterStatus::Correct
        } else if t.contains(&gc) {
            LetterStatus::Present
        } else {
            LetterStatus::Absent
        };
    }
    out
}

pub struct WordleGame {
    word_index: usize,
    buffer: String,
    guesses: Vec<String>,
    rows: Vec<[LetterStatus; WORD_LEN]>,
    statuses: [Option<LetterStatus>; 26],
    won: bool,
    lost: bool,
    score: i32,
    finished: bool,
    reported: bool,
}

impl WordleGame {
    pub fn new() -> Self {
        Self {
            word_index: 0,
            buffer: String::new(),
            guesses: Vec::new(),
            rows: Vec::new(),
            statuses: [None; 26],
            won: false,
            lost: false,
            score: 0,
            finished: false,
            reported: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn entry(&self) -> &'static WordEntry {
        &WORD_ENTRIES[self.word_index]
    }

    pub fn target(&self) -> &'static str {
        self.entry().word
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    pub fn row_statuses(&self) -> &[[LetterStatus; WORD_LEN]] {
        &self.rows
    }

    pub fn status_of(&self, letter: char) -> Option<LetterStatus> {
        let idx = (letter.to_ascii_uppercase() as u8).checked_sub(b'A')? as usize;
        *self.statuses.get(idx)?
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn lost(&self) -> bool {
        self.lost
    }

    pub fn round_over(&self) -> bool {
        self.won || self.lost
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn attempts_used(&self) -> usize {
        self.guesses.len()
    }

    pub fn push_letter(&mut self, c: char) {
        if self.round_over() || self.finished || self.buffer.len() >= WORD_LEN {
            return;
        }
        if c.is_ascii_alphabetic() {
            self.buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn backspace(&mut self) {
        if !self.round_over() {
            self.buffer.pop();
        }
    }

    pub fn clear_buffer(&mut self) {
        if !self.round_over() {
            self.buffer.clear();
        }
    }

    /// Commit the buffer as a guess. Short buffers are ignored. A win pays
    /// 10 plus 2 per unused attempt; running out of attempts loses the
    /// round and reveals the target.
    pub fn submit(&mut self) -> bool {
        if self.round_over() || self.finished || self.buffer.len() != WORD_LEN {
            return false;
        }
        let guess = std::mem::take(&mut self.buffer);
        let row = evaluate(&guess, self.target());
        for (i, status) in row.iter().enumerate() {
            let Some(b) = guess.as_bytes().get(i) else {
                break;
            };
            upgrade(&mut self.statuses[(b - b'A') as usize], *status);
        }
        let exact = guess == self.target();
        self.guesses.push(guess);
        self.rows.push(row);
        if exact {
            self.won = true;
            let spare = MAX_ATTEMPTS.saturating_sub(self.guesses.len()) as i32;
            self.score += WIN_POINTS + spare.max(0) * BONUS_PER_SPARE_ATTEMPT;
        } else if self.guesses.len() >= MAX_ATTEMPTS {
            self.lost = true;
        }
        true
    }

    /// Retry the current word after a loss: board cleared, score untouched.
    pub fn reset_round(&mut self) {
        self.buffer.clear();
        self.guesses.clear();
        self.rows.clear();
        self.statuses = [None; 26];
        self.won = false;
        self.lost = false;
    }

    /// Next word; the board resets but the cumulative score carries over.
    pub fn advance(&mut self) {
        if !self.round_over() || self.finished {
            return;
        }
        if self.word_index + 1 < WORD_ENTRIES.len() {
            self.word_index += 1;
            self.reset_round();
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

impl Default for WordleGame {
    fn default() -> Self {
        Self::new()
    }
}

fn upgrade(slot: &mut Option<LetterStatus>, status: LetterStatus) {
    if slot.map_or(true, |old| status > old) {
        *slot = Some(status);
    }
}

// --- DOM shell ---------------------------------------------------------------

const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

fn cell_colors(status: LetterStatus) -> &'static str {
    match status {
        LetterStatus::Correct => "background:#538d4e; border-color:#538d4e; color:#fff;",
        LetterStatus::Present => "background:#b59f3b; border-color:#b59f3b; color:#fff;",
        LetterStatus::Absent => "background:#3a3a3c; border-color:#3a3a3c; color:#fff;",
    }
}

pub fn handle_key(st: &mut SiteState, key: &str) {
    let g = &mut st.games.wordle;
    match key {
        "Enter" => {
            if g.round_over() {
                g.advance();
                games::redraw(st);
            } else if g.submit() {
                games::redraw(st);
            }
        }
        "Backspace" => {
            g.backspace();
            update_active_row(st);
        }
        "Escape" => {
            g.clear_buffer();
            update_active_row(st);
        }
        k if k.chars().count() == 1 => {
            if let Some(c) = k.chars().next() {
                g.push_letter(c);
            }
            update_active_row(st);
        }
        _ => {}
    }
}

/// Repaint only the in-progress row while typing; submits re-render fully.
fn update_active_row(st: &SiteState) {
    let g = &st.games.wordle;
    if g.round_over() || g.is_finished() {
        return;
    }
    let row = g.attempts_used();
    let letters: Vec<char> = g.buffer().chars().collect();
    for col in 0..WORD_LEN {
        let text = letters.get(col).map(|c| c.to_string()).unwrap_or_default();
        dom::set_text_by_id(&st.doc, &format!("bt-wd-cell-{row}-{col}"), &text);
    }
}

pub fn render(st: &mut SiteState) -> Result<(), JsValue> {
    let doc = st.doc.clone();
    st.root.set_inner_html("");

    if st.games.wordle.is_finished() {
        let score = st.games.wordle.score();
        let card = games::completion_card(
            st,
            Game::Wordle,
            "All Words Complete!",
            score,
            (score / 10).max(0) as usize,
        )?;
        st.root.append_child(&card)?;
        return Ok(());
    }

    let wrap = dom::styled(&doc, "div", "max-width:620px; margin:0 auto; padding:48px 24px 120px;")?;
    let header = games::game_header(
        st,
        Game::Wordle,
        "\u{1F7E9} Bollywood Wordle",
        &format!(
            "Word {} of {}",
            st.games.wordle.word_index() + 1,
            WORD_ENTRIES.len()
        ),
        st.games.wordle.score(),
    )?;
    wrap.append_child(&header)?;

    let board = dom::styled(
        &doc,
        "div",
        "background:rgba(80,20,30,0.55); border:2px solid rgba(255,209,102,0.4); \
         border-radius:24px; padding:28px; margin-bottom:20px;",
    )?;

    let grid = dom::styled(
        &doc,
        "div",
        "display:flex; flex-direction:column; gap:8px; align-items:center; margin-bottom:20px;",
    )?;
    let g = &st.games.wordle;
    let active_row = if g.round_over() { usize::MAX } else { g.attempts_used() };
    for row in 0..MAX_ATTEMPTS {
        let row_el = dom::styled(&doc, "div", "display:flex; gap:8px;")?;
        for col in 0..WORD_LEN {
            let base = "width:52px; height:52px; display:flex; align-items:center; \
                        justify-content:center; font-size:26px; font-weight:bold; \
                        border-radius:8px; border:2px solid rgba(255,209,102,0.35); \
                        color:#f4e3c1;";
            let (text, extra) = if row < g.attempts_used() {
                let letter = g.guesses()[row].as_bytes()[col] as char;
                (letter.to_string(), cell_colors(g.row_statuses()[row][col]))
            } else if row == active_row {
                let letter = g.buffer().as_bytes().get(col).map(|&b| (b as char).to_string());
                (letter.unwrap_or_default(), "background:rgba(40,8,14,0.6);")
            } else {
                (String::new(), "background:rgba(40,8,14,0.35);")
            };
            let cell = dom::styled(&doc, "div", &format!("{base} {extra}"))?;
            cell.set_id(&format!("bt-wd-cell-{row}-{col}"));
            cell.set_text_content(Some(&text));
            row_el.append_child(&cell)?;
        }
        grid.append_child(&row_el)?;
    }
    board.append_child(&grid)?;

    if g.won() {
        let status = dom::styled(&doc, "div", "text-align:center;")?;
        let h = dom::styled(&doc, "h3", "margin:0 0 6px; font-size:24px; color:#7ecb7e;")?;
        h.set_text_content(Some("\u{1F389} Correct!"));
        status.append_child(&h)?;
        let fact = dom::styled(&doc, "p", "margin:0 0 14px; color:#d9b98c;")?;
        fact.set_text_content(Some(&format!("\u{201C}{}\u{201D}", g.entry().fact)));
        status.append_child(&fact)?;
        let next = styled_action(&doc, if g.word_index() + 1 < WORD_ENTRIES.len() {
            "Next Word"
        } else {
            "Complete Game"
        })?;
        dom::on_click(&next, || {
            app::with_state(|st| {
                st.games.wordle.advance();
                games::redraw(st);
            });
        })?;
        status.append_child(&next)?;
        board.append_child(&status)?;
    } else if g.lost() {
        let status = dom::styled(&doc, "div", "text-align:center;")?;
        let h = dom::styled(&doc, "h3", "margin:0 0 6px; font-size:24px; color:#ff7b7b;")?;
        h.set_text_content(Some("\u{1F614} Out of tries!"));
        status.append_child(&h)?;
        let reveal = dom::styled(&doc, "p", "margin:0 0 4px; color:#f4e3c1;")?;
        reveal.set_text_content(Some(&format!("The word was: {}", g.target())));
        status.append_child(&reveal)?;
        let fact = dom::styled(&doc, "p", "margin:0 0 14px; color:#d9b98c;")?;
        fact.set_text_content(Some(&format!("\u{201C}{}\u{201D}", g.entry().fact)));
        status.append_child(&fact)?;
        let row = dom::styled(&doc, "div", "display:flex; gap:12px; justify-content:center;")?;
        let retry = styled_action(&doc, "\u{21BB} Try Again")?;
        dom::on_click(&retry, || {
            app::with_state(|st| {
                st.games.wordle.reset_round();
                games::redraw(st);
            });
        })?;
        row.append_child(&retry)?;
        let skip = styled_action(&doc, if g.word_index() + 1 < WORD_ENTRIES.len() {
            "Skip to Next"
        } else {
            "Complete Game"
        })?;
        dom::on_click(&skip, || {
            app::with_state(|st| {
                st.games.wordle.advance();
                games::redraw(st);
            });
        })?;
        row.append_child(&skip)?;
        status.append_child(&row)?;
        board.append_child(&status)?;
    } else {
        let tip = dom::styled(&doc, "p", "margin:0; text-align:center; color:#d9b98c; font-size:13px;")?;
        tip.set_text_content(Some("Type letters, Enter to guess, Backspace to delete"));
        board.append_child(&tip)?;
    }
    wrap.append_child(&board)?;

    // Aggregated keyboard, display only; statuses never downgrade.
    let keyboard = dom::styled(&doc, "div", "display:flex; flex-direction:column; gap:6px; align-items:center;")?;
    for key_row in KEY_ROWS {
        let row_el = dom::styled(&doc, "div", "display:flex; gap:6px;")?;
        for c in key_row.chars() {
            let base = "width:34px; height:44px; display:flex; align-items:center; \
                        justify-content:center; border-radius:6px; font-size:15px; \
                        font-weight:bold;";
            let colors = match st.games.wordle.status_of(c) {
                Some(status) => cell_colors(status),
                None => "background:rgba(244,227,193,0.85); color:#3a0d18;",
            };
            let key = dom::styled(&doc, "div", &format!("{base} {colors}"))?;
            key.set_text_content(Some(&c.to_string()));
            row_el.append_child(&key)?;
        }
        keyboard.append_child(&row_el)?;
    }
    wrap.append_child(&keyboard)?;

    st.root.append_child(&wrap)?;
    Ok(())
}

fn styled_action(doc: &web_sys::Document, label: &str) -> Result<web_sys::Element, JsValue> {
    let btn = dom::styled(
        doc,
        "button",
        "padding:12px 24px; border:none; border-radius:12px; font-size:15px; font-weight:bold; \
         color:#3a0d18; background:linear-gradient(90deg,#ffd166,#f4a259);",
    )?;
    btn.set_text_content(Some(label));
    Ok(btn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::*;

    fn type_word(g: &mut WordleGame, word: &str) {
        for c in word.chars() {
            g.push_letter(c);
        }
    }

    #[test]
    fn naive_evaluation_shaan_vs_shawn() {
        // Positions: S,H match; the third A matches by index; W is nowhere
        // in the target; N matches.
        assert_eq!(
            evaluate("SHAWN", "SHAAN"),
            [Correct, Correct, Correct, Absent, Correct]
        );
    }

    #[test]
    fn naive_evaluation_ignores_multiplicity() {
        // Every A scores, even though the target only holds two of them.
        assert_eq!(
            evaluate("AAAAA", "SHAAN"),
            [Present, Present, Correct, Correct, Present]
        );
    }

    #[test]
    fn win_on_third_attempt_pays_sixteen() {
        let mut g = WordleGame::new();
        for guess in ["DILSE", "KUMAR"] {
            type_word(&mut g, guess);
            assert!(g.submit());
            assert!(!g.round_over());
        }
        type_word(&mut g, "SHAAN");
        assert!(g.submit());
        assert!(g.won());
        assert_eq!(g.score(), WIN_POINTS + 3 * BONUS_PER_SPARE_ATTEMPT);
    }

    #[test]
    fn six_misses_lose_and_score_nothing() {
        let mut g = WordleGame::new();
        for _ in 0..MAX_ATTEMPTS {
            type_word(&mut g, "DILSE");
            assert!(g.submit());
        }
        assert!(g.lost());
        assert_eq!(g.score(), 0);
        // Board refuses further input once the round is over.
        type_word(&mut g, "SHAAN");
        assert!(!g.submit());
    }

    #[test]
    fn short_buffers_are_ignored() {
        let mut g = WordleGame::new();
        type_word(&mut g, "SHA");
        assert!(!g.submit());
        assert_eq!(g.attempts_used(), 0);
    }

    #[test]
    fn keyboard_statuses_only_upgrade() {
        let mut g = WordleGame::new();
        // Target SHAAN: first guess puts N in a present spot.
        type_word(&mut g, "NOBLE");
        assert!(g.submit());
        assert_eq!(g.status_of('N'), Some(Present));
        assert_eq!(g.status_of('O'), Some(Absent));
        // N lands correct on a later guess and must stay correct afterwards.
        type_word(&mut g, "SHAUN");
        assert!(g.submit());
        assert_eq!(g.status_of('N'), Some(Correct));
        type_word(&mut g, "NOBLE");
        assert!(g.submit());
        assert_eq!(g.status_of('N'), Some(Correct));
    }

    #[test]
    fn reset_round_clears_board_but_not_score() {
        let mut g = WordleGame::new();
        type_word(&mut g, "SHAAN");
        assert!(g.submit());
        assert!(g.won());
        let score = g.score();
        assert!(score > 0);
        g.advance();
        assert_eq!(g.word_index(), 1);
        assert!(g.guesses().is_empty());
        assert!(g.buffer().is_empty());
        assert_eq!(g.status_of('S'), None);
        assert_eq!(g.score(), score);
        // Explicit retry after a loss behaves the same way.
        for _ in 0..MAX_ATTEMPTS {
            type_word(&mut g, "RAJAH");
            g.submit();
        }
        assert!(g.lost());
        g.reset_round();
        assert!(!g.lost());
        assert!(g.guesses().is_empty());
        assert_eq!(g.score(), score);
    }

    #[test]
    fn full_set_reports_once() {
        let mut g = WordleGame::new();
        let mut expected = 0;
        while !g.is_finished() {
            let target = g.target();
            type_word(&mut g, target);
            assert!(g.submit());
            expected += WIN_POINTS + 5 * BONUS_PER_SPARE_ATTEMPT;
            g.advance();
        }
        assert_eq!(g.take_report(), Some(expected));
        assert_eq!(g.take_report(), None);
    }
}
