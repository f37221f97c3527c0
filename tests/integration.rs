// Integration tests (native) for the `birthday-tribute` crate.
// These avoid wasm-specific functionality and exercise the pure session,
// game and playlist logic so they run under `cargo test` on the host.

use birthday_tribute::games::artist::ArtistGame;
use birthday_tribute::games::movie::{
    FIRST_TRY_POINTS, HINTED_POINTS, MovieGame, SubmitOutcome,
};
use birthday_tribute::games::wordle::{LetterStatus, WordleGame, evaluate};
use birthday_tribute::player::Playlist;
use birthday_tribute::rng::Lcg;
use birthday_tribute::session::{Game, SessionState, View};

#[test]
fn select_view_is_idempotent_for_every_view() {
    let mut session = SessionState::new();
    for view in View::ALL {
        session.select_view(view);
        assert_eq!(session.current_view(), view);
        session.select_view(view);
        assert_eq!(session.current_view(), view);
    }
}

#[test]
fn game_results_accumulate_once_per_game() {
    let mut session = SessionState::new();
    assert!(session.record_game_result(Game::Movie, 40));
    assert_eq!(session.total_score(), 40);
    assert!(session.record_game_result(Game::Artist, 20));
    assert_eq!(session.total_score(), 60);
    // Replays of an already-completed game add exactly zero.
    assert!(!session.record_game_result(Game::Movie, 55));
    assert_eq!(session.total_score(), 60);
}

#[test]
fn naive_letter_statuses_for_shaan_vs_shawn() {
    use LetterStatus::*;
    assert_eq!(
        evaluate("SHAWN", "SHAAN"),
        [Correct, Correct, Correct, Absent, Correct]
    );
}

#[test]
fn exact_guess_on_attempt_three_scores_sixteen() {
    let mut game = WordleGame::new();
    for miss in ["DILSE", "KUMAR"] {
        for c in miss.chars() {
            game.push_letter(c);
        }
        assert!(game.submit());
    }
    for c in "SHAAN".chars() {
        game.push_letter(c);
    }
    assert!(game.submit());
    assert!(game.won());
    assert_eq!(game.score(), 16);
}

#[test]
fn advancing_words_keeps_cumulative_score() {
    let mut game = WordleGame::new();
    for c in "SHAAN".chars() {
        game.push_letter(c);
    }
    assert!(game.submit());
    let score = game.score();
    game.advance();
    assert!(game.guesses().is_empty());
    assert!(game.buffer().is_empty());
    assert_eq!(game.status_of('S'), None);
    assert_eq!(game.score(), score);
}

#[test]
fn movie_scoring_splits_fifteen_ten_zero() {
    fn walk_to_barsaat(game: &mut MovieGame) {
        while game.prompt().title != "Barsaat" {
            let title = game.prompt().title;
            for c in title.chars() {
                game.push_char(c);
            }
            assert_eq!(game.submit(), Some(SubmitOutcome::Correct));
            game.advance();
        }
    }
    fn type_guess(game: &mut MovieGame, guess: &str) {
        game.clear_buffer();
        for c in guess.chars() {
            game.push_char(c);
        }
    }

    // First-attempt correct guess scores 15.
    let mut game = MovieGame::new();
    walk_to_barsaat(&mut game);
    let before = game.score();
    type_guess(&mut game, "Barsaat");
    assert_eq!(game.submit(), Some(SubmitOutcome::Correct));
    assert_eq!(game.score() - before, FIRST_TRY_POINTS);

    // Post-hint correct guess scores 10.
    let mut game = MovieGame::new();
    walk_to_barsaat(&mut game);
    let before = game.score();
    type_guess(&mut game, "sholay");
    assert_eq!(game.submit(), Some(SubmitOutcome::HintRevealed));
    type_guess(&mut game, "barsaat");
    assert_eq!(game.submit(), Some(SubmitOutcome::Correct));
    assert_eq!(game.score() - before, HINTED_POINTS);

    // Two misses resolve the round for nothing and reveal the title.
    let mut game = MovieGame::new();
    walk_to_barsaat(&mut game);
    let before = game.score();
    type_guess(&mut game, "sholay");
    assert_eq!(game.submit(), Some(SubmitOutcome::HintRevealed));
    type_guess(&mut game, "deewar");
    assert_eq!(game.submit(), Some(SubmitOutcome::Failed));
    assert!(game.resolved());
    assert!(!game.is_correct());
    assert_eq!(game.score(), before);
}

#[test]
fn playlist_wraps_in_both_directions() {
    let mut list = Playlist::new(&mut Lcg::new(11));
    let last = list.len() - 1;
    list.previous();
    assert_eq!(list.position(), last);
    list.next();
    assert_eq!(list.position(), 0);
    for _ in 0..last {
        list.next();
    }
    assert_eq!(list.position(), last);
    list.next();
    assert_eq!(list.position(), 0);
}

#[test]
fn finished_runs_report_into_the_session_once() {
    let mut session = SessionState::new();
    let mut game = ArtistGame::new();
    for _ in 0..2 {
        // Play the whole set with correct answers, then hand the score over
        // the way the game host does.
        game.reset();
        while !game.is_finished() {
            let answer = game.prompt().artist.to_string();
            for c in answer.chars() {
                game.push_char(c);
            }
            assert_eq!(game.submit(), Some(true));
            game.advance();
        }
        if let Some(score) = game.take_report() {
            session.record_game_result(Game::Artist, score);
        }
    }
    // The replay reported again, but the session only counted the first run.
    assert_eq!(session.total_score(), 30);
    assert_eq!(session.completed_activities(), vec!["artist"]);
}
