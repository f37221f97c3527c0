//! Build-time asset catalog: movies, tracks and mini-game prompts.
//!
//! Every record is a plain `&'static str` struct so the whole catalog lives
//! in the data segment. Paths follow the `/assets/...` convention of the
//! deployed site; a missing file downgrades to [`PLACEHOLDER_IMAGE`] at the
//! DOM layer rather than failing the view.

mod minigames;
mod movies;
mod tracks;

pub use minigames::{ARTIST_PROMPTS, MOVIE_PROMPTS, WORD_ENTRIES};
pub use movies::MOVIES;
pub use tracks::TRACKS;

/// Substitute shown whenever an image asset fails to load.
pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.svg";

/// One-shot voice greeting offered on the hero splash.
pub const GREETING_AUDIO: &str = "/assets/special_message.mp3";

/// Static, read-only gallery entry.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug)]
pub struct Movie {
    pub id: &'static str,
    pub title: &'static str,
    pub year: &'static str,
    pub poster_path: &'static str,
    pub video_path: &'static str,
    pub description: &'static str,
}

/// Static, read-only playlist entry. Play order is shuffled per session,
/// never persisted.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug)]
pub struct Track {
    pub id: &'static str,
    pub title: &'static str,
    pub artist: &'static str,
    pub duration_label: &'static str,
    pub audio_path: &'static str,
}

/// One painting for the guess-the-artist game.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug)]
pub struct ArtistPrompt {
    pub id: &'static str,
    pub image_path: &'static str,
    pub artist: &'static str,
    pub fact: &'static str,
}

/// One still (plus reveal poster) for the guess-the-movie game.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug)]
pub struct MoviePrompt {
    pub id: &'static str,
    pub still_path: &'static str,
    pub poster_path: &'static str,
    pub title: &'static str,
    pub year: &'static str,
    pub fact: &'static str,
}

/// One five-letter target for the word-guess game.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug)]
pub struct WordEntry {
    pub word: &'static str,
    pub fact: &'static str,
}

/// Rotating finale messages; the frame loop advances through these.
pub static CELEBRATION_MESSAGES: [&str; 6] = [
    "You are the most amazing mum in the world! \u{2728}",
    "Your love and warmth light up our lives every single day \u{1F496}",
    "Thank you for all the beautiful memories and moments \u{1F31F}",
    "Here's to another year of your incredible journey! \u{1F382}",
    "You deserve all the happiness and joy in the world \u{1F338}",
    "Happy Birthday to our superstar! \u{1F389}",
];
