// Gallery catalog. Descriptions are the gift-giver's own notes, kept as-is.
use super::Movie;

pub static MOVIES: [Movie; 10] = [
    Movie {
        id: "ddlj",
        title: "Dilwale Dulhania Le Jayenge",
        year: "1995",
        poster_path: "/assets/movie_posters/ddlj.jpg",
        video_path: "/assets/movie_videos/ddlj.mp4",
        description: "Overplayed but still iconic",
    },
    Movie {
        id: "kuch-kuch",
        title: "Kuch Kuch Hota Hai",
        year: "1998",
        poster_path: "/assets/movie_posters/kuch_kuch.jpg",
        video_path: "/assets/movie_videos/kuch_kuch.mp4",
        description: "An absolute banger",
    },
    Movie {
        id: "dil-to-pagal-hai",
        title: "Dil To Pagal Hai",
        year: "1997",
        poster_path: "/assets/movie_posters/dil_to_pagal_hai.jpg",
        video_path: "/assets/movie_videos/dil_to_pagal_hai.mp4",
        description: "Bapa's ringtone",
    },
    Movie {
        id: "hum-aapke",
        title: "Hum Aapke Hain Koun",
        year: "1994",
        poster_path: "/assets/movie_posters/hum_aapke.jpg",
        video_path: "/assets/movie_videos/hum_aapke.mp4",
        description: "Nobody remembers the plot, everybody remembers the songs",
    },
    Movie {
        id: "baazigar",
        title: "Baazigar",
        year: "1993",
        poster_path: "/assets/movie_posters/baazigar.jpg",
        video_path: "/assets/movie_videos/baazigar.mp4",
        description: "Best SRK evil movie",
    },
    Movie {
        id: "darr",
        title: "Darr",
        year: "1993",
        poster_path: "/assets/movie_posters/darr.jpg",
        video_path: "/assets/movie_videos/darr.mp4",
        description: "A top-ten Bollywood track, easily top fifteen",
    },
    Movie {
        id: "devdas",
        title: "Devdas",
        year: "2002",
        poster_path: "/assets/movie_posters/devdas.jpg",
        video_path: "/assets/movie_videos/devdas.mp4",
        description: "The grandest heartbreak ever filmed",
    },
    Movie {
        id: "khiladi",
        title: "Khiladi",
        year: "1992",
        poster_path: "/assets/movie_posters/khiladi.jpg",
        video_path: "/assets/movie_videos/khiladi.mp4",
        description: "Yes yes, banger",
    },
    Movie {
        id: "lamhe",
        title: "Lamhe",
        year: "1991",
        poster_path: "/assets/movie_posters/lamhe.jpg",
        video_path: "/assets/movie_videos/lamhe.mp4",
        description: "This one is A TRACK",
    },
    Movie {
        id: "saajan",
        title: "Saajan",
        year: "1991",
        poster_path: "/assets/movie_posters/saajan.jpg",
        video_path: "/assets/movie_videos/saajan.mp4",
        description: "Underrated movie, classic track",
    },
];
