// Mini-game prompt sets. Small on purpose: each game walks its set once
// per run and reports a single accumulated score.
use super::{ArtistPrompt, MoviePrompt, WordEntry};

pub static ARTIST_PROMPTS: [ArtistPrompt; 3] = [
    ArtistPrompt {
        id: "van-gogh",
        image_path: "/assets/minigames/guess_the_artist/van_gogh.jpg",
        artist: "Vincent van Gogh",
        fact: "Van Gogh sold a single painting in his lifetime, yet produced \
               over 2,000 artworks in just ten years.",
    },
    ArtistPrompt {
        id: "picasso",
        image_path: "/assets/minigames/guess_the_artist/picasso.jpg",
        artist: "Pablo Picasso",
        fact: "Picasso's first word was \"piz\", short for l\u{e1}piz, the Spanish \
               for pencil. He could draw before he could walk.",
    },
    ArtistPrompt {
        id: "frida-kahlo",
        image_path: "/assets/minigames/guess_the_artist/frida_kahlo.jpg",
        artist: "Frida Kahlo",
        fact: "Frida painted 55 self-portraits: \"I am my own muse, my own \
               subject. I know myself best.\"",
    },
];

pub static MOVIE_PROMPTS: [MoviePrompt; 4] = [
    MoviePrompt {
        id: "dil-chahta-hai",
        still_path: "/assets/minigames/guess_the_movie/dil_chahta_hai.webp",
        poster_path: "/assets/movie_posters/guess_the_movie_answers/dil_chahta_hai.jpg",
        title: "Dil Chahta Hai",
        year: "2001",
        fact: "One of the first major Bollywood productions shot extensively \
               abroad, and it changed how urban friendships were written.",
    },
    MoviePrompt {
        id: "kal-ho-naa-ho",
        still_path: "/assets/minigames/guess_the_movie/kal_ho_naa_ho.webp",
        poster_path: "/assets/movie_posters/guess_the_movie_answers/kal_ho_naa_ho.jpg",
        title: "Kal Ho Naa Ho",
        year: "2003",
        fact: "Aman was written as a guardian angel in all but name; the film \
               nearly shipped under a different title.",
    },
    MoviePrompt {
        id: "barsaat",
        still_path: "/assets/minigames/guess_the_movie/barsaat.webp",
        poster_path: "/assets/movie_posters/guess_the_movie_answers/barsaat.jpg",
        title: "Barsaat",
        year: "1995",
        fact: "Bobby Deol's debut took seven years to finish, and the \
               soundtrack was a smash before the reels ever ran.",
    },
    MoviePrompt {
        id: "chup-chup-ke",
        still_path: "/assets/minigames/guess_the_movie/chup_chup_ke.webp",
        poster_path: "/assets/movie_posters/guess_the_movie_answers/chup_chup_ke.webp",
        title: "Chup Chup Ke",
        year: "2006",
        fact: "Shahid Kapoor learned sign language for the part in this \
               Malayalam-comedy remake.",
    },
];

// Targets are fixed-length (5) uppercase ASCII; the board depends on it.
pub static WORD_ENTRIES: [WordEntry; 5] = [
    WordEntry {
        word: "SHAAN",
        fact: "The playback voice behind three decades of chartbusters.",
    },
    WordEntry {
        word: "DILSE",
        fact: "Mani Ratnam's love story that gave the world Chaiyya Chaiyya.",
    },
    WordEntry {
        word: "LAMHE",
        fact: "Yash Chopra's boldest romance, years ahead of its time.",
    },
    WordEntry {
        word: "KUMAR",
        fact: "A surname shared by half the industry's leading men.",
    },
    WordEntry {
        word: "RAJAH",
        fact: "A royal title that ruled many a costume drama.",
    },
];
