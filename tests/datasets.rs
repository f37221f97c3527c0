// Dataset invariants for the static asset catalog.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use birthday_tribute::catalog::{
    ARTIST_PROMPTS, CELEBRATION_MESSAGES, MOVIE_PROMPTS, MOVIES, PLACEHOLDER_IMAGE, TRACKS,
    WORD_ENTRIES,
};

fn assert_asset_path(path: &str, what: &str) {
    assert!(
        path.starts_with("/assets/"),
        "{} path '{}' does not follow the /assets/ convention",
        what,
        path
    );
    assert!(!path.ends_with('/'), "{} path '{}' names no file", what, path);
}

#[test]
fn movie_catalog_is_well_formed() {
    assert!(!MOVIES.is_empty());
    let mut ids = HashSet::new();
    for movie in &MOVIES {
        assert!(ids.insert(movie.id), "duplicate movie id '{}'", movie.id);
        assert!(!movie.title.is_empty());
        assert!(!movie.description.is_empty());
        assert_eq!(movie.year.len(), 4, "year '{}' for '{}'", movie.year, movie.title);
        assert!(movie.year.chars().all(|c| c.is_ascii_digit()));
        assert_asset_path(movie.poster_path, "poster");
        assert_asset_path(movie.video_path, "video");
    }
}

#[test]
fn track_catalog_is_well_formed() {
    assert!(!TRACKS.is_empty());
    let mut ids = HashSet::new();
    for track in &TRACKS {
        assert!(ids.insert(track.id), "duplicate track id '{}'", track.id);
        assert!(!track.title.is_empty());
        assert!(!track.artist.is_empty());
        assert_asset_path(track.audio_path, "audio");
        // Duration labels render as m:ss.
        let (minutes, seconds) = track
            .duration_label
            .split_once(':')
            .unwrap_or_else(|| panic!("bad duration label '{}'", track.duration_label));
        assert!(minutes.parse::<u32>().is_ok(), "minutes in '{}'", track.duration_label);
        assert_eq!(seconds.len(), 2, "seconds width in '{}'", track.duration_label);
        let secs: u32 = seconds
            .parse()
            .unwrap_or_else(|_| panic!("seconds in '{}'", track.duration_label));
        assert!(secs < 60, "seconds out of range in '{}'", track.duration_label);
    }
}

#[test]
fn artist_prompts_are_well_formed() {
    let mut ids = HashSet::new();
    let mut answers = HashSet::new();
    for prompt in &ARTIST_PROMPTS {
        assert!(ids.insert(prompt.id), "duplicate prompt id '{}'", prompt.id);
        assert!(answers.insert(prompt.artist), "duplicate answer '{}'", prompt.artist);
        assert!(!prompt.fact.is_empty());
        assert_asset_path(prompt.image_path, "painting");
    }
}

#[test]
fn movie_prompts_are_well_formed() {
    let mut ids = HashSet::new();
    let mut titles = HashSet::new();
    for prompt in &MOVIE_PROMPTS {
        assert!(ids.insert(prompt.id), "duplicate prompt id '{}'", prompt.id);
        assert!(titles.insert(prompt.title), "duplicate title '{}'", prompt.title);
        assert!(!prompt.fact.is_empty());
        assert_eq!(prompt.year.len(), 4);
        assert_asset_path(prompt.still_path, "still");
        assert_asset_path(prompt.poster_path, "poster");
    }
}

#[test]
fn word_entries_are_fixed_length_uppercase() {
    let mut words = HashSet::new();
    for entry in &WORD_ENTRIES {
        assert!(words.insert(entry.word), "duplicate word '{}'", entry.word);
        assert_eq!(entry.word.len(), 5, "word '{}' is not 5 letters", entry.word);
        assert!(
            entry.word.chars().all(|c| c.is_ascii_uppercase()),
            "word '{}' is not uppercase ASCII",
            entry.word
        );
        assert!(!entry.fact.is_empty(), "word '{}' has no flavor fact", entry.word);
    }
}

#[test]
fn celebration_messages_are_present() {
    assert!(!CELEBRATION_MESSAGES.is_empty());
    for msg in &CELEBRATION_MESSAGES {
        assert!(!msg.is_empty());
    }
}

#[test]
fn placeholder_follows_the_asset_convention() {
    assert_asset_path(PLACEHOLDER_IMAGE, "placeholder");
}
