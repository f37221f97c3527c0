// Background playlist. Duration labels are display strings only; real
// timing comes from the media element at runtime.
use super::Track;

pub static TRACKS: [Track; 6] = [
    Track {
        id: "tujhe-dekha-toh",
        title: "Tujhe Dekha Toh",
        artist: "Kumar Sanu & Lata Mangeshkar",
        duration_label: "5:08",
        audio_path: "/assets/background_music/tujhe_dekha_toh.mp3",
    },
    Track {
        id: "mehndi-laga-ke",
        title: "Mehndi Laga Ke Rakhna",
        artist: "Lata Mangeshkar & Udit Narayan",
        duration_label: "4:42",
        audio_path: "/assets/background_music/mehndi_laga_ke.mp3",
    },
    Track {
        id: "mere-khwabon-mein",
        title: "Mere Khwabon Mein",
        artist: "Lata Mangeshkar",
        duration_label: "4:20",
        audio_path: "/assets/background_music/mere_khwabon_mein.mp3",
    },
    Track {
        id: "ho-gaya-hai",
        title: "Ho Gaya Hai Tujhko",
        artist: "Lata Mangeshkar & Udit Narayan",
        duration_label: "5:01",
        audio_path: "/assets/background_music/ho_gaya_hai.mp3",
    },
    Track {
        id: "ghar-aaja",
        title: "Ghar Aaja Pardesi",
        artist: "Pamela Chopra",
        duration_label: "7:14",
        audio_path: "/assets/background_music/ghar_aaja.mp3",
    },
    Track {
        id: "ruk-ja",
        title: "Ruk Ja O Dil Deewane",
        artist: "Udit Narayan",
        duration_label: "3:45",
        audio_path: "/assets/background_music/ruk_ja.mp3",
    },
];
