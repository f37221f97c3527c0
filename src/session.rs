//! Per-tab session state: current view, per-game scores, journey progress.
//!
//! This module is deliberately free of browser APIs so the root-controller
//! semantics run under native `cargo test`. The DOM shell in `app.rs` owns
//! a single `SessionState` and routes every mutation through the named
//! operations below; views never poke fields directly.

/// The five top-level views. Exactly one is mounted at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Hero,
    Gallery,
    Games,
    Music,
    Celebration,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Hero,
        View::Gallery,
        View::Games,
        View::Music,
        View::Celebration,
    ];

    /// Stable id used for DOM element ids and activity bookkeeping.
    pub fn id(self) -> &'static str {
        match self {
            View::Hero => "hero",
            View::Gallery => "movies",
            View::Games => "games",
            View::Music => "music",
            View::Celebration => "celebration",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            View::Hero => "Home",
            View::Gallery => "Movies",
            View::Games => "Games",
            View::Music => "Music",
            View::Celebration => "Celebrate",
        }
    }
}

/// The three mini-games hosted by the Games view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Game {
    Artist,
    Movie,
    Wordle,
}

impl Game {
    pub const ALL: [Game; 3] = [Game::Artist, Game::Movie, Game::Wordle];

    pub fn id(self) -> &'static str {
        match self {
            Game::Artist => "artist",
            Game::Movie => "movie",
            Game::Wordle => "wordle",
        }
    }
}

// Implicit activity tags credited once the journey has started (the gallery
// and music views have no completion event of their own).
const JOURNEY_TAGS: [&str; 2] = ["movies", "music"];

/// Root-controller state. Created on load, discarded with the tab.
pub struct SessionState {
    current_view: View,
    // Doubles as the completed-game set: a game appears here exactly once,
    // with the score from its first completed run.
    scores_by_game: Vec<(Game, i32)>,
    journey_started: bool,
    video_active: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current_view: View::Hero,
            scores_by_game: Vec::new(),
            journey_started: false,
            video_active: false,
        }
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn journey_started(&self) -> bool {
        self.journey_started
    }

    /// Unconditional view transition; the caller re-renders afterwards.
    pub fn select_view(&mut self, view: View) {
        self.current_view = view;
    }

    /// Navigation stays hidden on the hero splash until the journey starts.
    pub fn nav_visible(&self) -> bool {
        self.journey_started || self.current_view != View::Hero
    }

    /// Hero call-to-action: unlock navigation and move to the gallery.
    pub fn start_journey(&mut self) {
        self.journey_started = true;
        self.select_view(View::Gallery);
    }

    /// Record a finished game run. Only the first completion of a given game
    /// counts toward the total; replays are ignored here so the game itself
    /// stays replayable for fun. Returns whether the score was recorded.
    pub fn record_game_result(&mut self, game: Game, score: i32) -> bool {
        if self.is_completed(game) {
            return false;
        }
        self.scores_by_game.push((game, score));
        true
    }

    pub fn is_completed(&self, game: Game) -> bool {
        self.scores_by_game.iter().any(|&(g, _)| g == game)
    }

    pub fn score_for(&self, game: Game) -> Option<i32> {
        self.scores_by_game
            .iter()
            .find(|&&(g, _)| g == game)
            .map(|&(_, s)| s)
    }

    pub fn total_score(&self) -> i32 {
        self.scores_by_game.iter().map(|&(_, s)| s).sum()
    }

    pub fn completed_game_count(&self) -> usize {
        self.scores_by_game.len()
    }

    /// Completed game ids plus the implicit gallery/music tags once the
    /// journey has started, in completion order.
    pub fn completed_activities(&self) -> Vec<&'static str> {
        let mut out: Vec<&'static str> =
            self.scores_by_game.iter().map(|&(g, _)| g.id()).collect();
        if self.journey_started {
            out.extend(JOURNEY_TAGS);
        }
        out
    }

    /// Achievement tier shown on the celebration screen, by activity count.
    pub fn achievement_tier(&self) -> &'static str {
        match self.completed_activities().len() {
            n if n >= 4 => "LEGEND",
            3 => "SUPERSTAR",
            2 => "CHAMPION",
            _ => "WONDERFUL",
        }
    }

    /// Cross-view coupling flag: a foreground gallery video gates the
    /// background music player. The audio pause/resume side effects are the
    /// shell's job; the session only remembers the flag.
    pub fn set_video_active(&mut self, active: bool) {
        self.video_active = active;
    }

    pub fn video_active(&self) -> bool {
        self.video_active
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_view_is_idempotent() {
        let mut s = SessionState::new();
        for view in View::ALL {
            s.select_view(view);
            let first = s.current_view();
            s.select_view(view);
            assert_eq!(s.current_view(), first);
        }
    }

    #[test]
    fn nav_hidden_on_hero_until_journey_starts() {
        let mut s = SessionState::new();
        assert!(!s.nav_visible());
        s.select_view(View::Games);
        assert!(s.nav_visible());
        s.select_view(View::Hero);
        assert!(!s.nav_visible());
        s.start_journey();
        assert_eq!(s.current_view(), View::Gallery);
        s.select_view(View::Hero);
        assert!(s.nav_visible());
    }

    #[test]
    fn game_results_count_once() {
        let mut s = SessionState::new();
        assert!(s.record_game_result(Game::Wordle, 26));
        assert_eq!(s.total_score(), 26);
        // A replayed run never double counts.
        assert!(!s.record_game_result(Game::Wordle, 40));
        assert_eq!(s.total_score(), 26);
        assert_eq!(s.score_for(Game::Wordle), Some(26));
    }

    #[test]
    fn completed_activities_gain_journey_tags() {
        let mut s = SessionState::new();
        s.record_game_result(Game::Artist, 10);
        assert_eq!(s.completed_activities(), vec!["artist"]);
        s.start_journey();
        assert_eq!(s.completed_activities(), vec!["artist", "movies", "music"]);
    }

    #[test]
    fn achievement_tiers_follow_activity_count() {
        let mut s = SessionState::new();
        assert_eq!(s.achievement_tier(), "WONDERFUL");
        s.start_journey(); // movies + music
        assert_eq!(s.achievement_tier(), "CHAMPION");
        s.record_game_result(Game::Artist, 10);
        assert_eq!(s.achievement_tier(), "SUPERSTAR");
        s.record_game_result(Game::Movie, 30);
        assert_eq!(s.achievement_tier(), "LEGEND");
    }
}
