//! Movie gallery: a grid of looping video cards with exclusive playback.
//!
//! Only one video plays at a time; starting one pauses the rest and raises
//! the session's `video_active` flag so the background music yields. The
//! cards keep their elements across interactions (a re-render would reset
//! playback), so clicks only retouch labels and the mute toggle.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::JsValue;
use web_sys::HtmlVideoElement;

use crate::app::{self, SiteState};
use crate::catalog::MOVIES;
use crate::dom;

pub struct GalleryState {
    pub active: Option<usize>,
    pub muted: bool,
}

impl GalleryState {
    pub fn new() -> Self {
        Self {
            active: None,
            muted: false,
        }
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new()
    }
}

fn video_element(st: &SiteState, index: usize) -> Option<HtmlVideoElement> {
    st.doc
        .get_element_by_id(&format!("bt-video-{index}"))
        .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok())
}

/// Play/pause the clicked card; playback is exclusive across cards.
pub fn toggle_video(st: &mut SiteState, index: usize) {
    if st.gallery.active == Some(index) {
        if let Some(video) = video_element(st, index) {
            video.pause().ok();
        }
        st.gallery.active = None;
        app::set_video_active(st, false);
    } else {
        if let Some(prev) = st.gallery.active {
            if let Some(video) = video_element(st, prev) {
                video.pause().ok();
            }
        }
        if let Some(video) = video_element(st, index) {
            video.set_muted(st.gallery.muted);
            let _ = video.play();
        }
        st.gallery.active = Some(index);
        app::set_video_active(st, true);
    }
    update_controls(st);
}

pub fn toggle_mute(st: &mut SiteState) {
    st.gallery.muted = !st.gallery.muted;
    if let Some(index) = st.gallery.active {
        if let Some(video) = video_element(st, index) {
            video.set_muted(st.gallery.muted);
        }
    }
    update_controls(st);
}

/// Retouch per-card button labels without rebuilding the video elements.
fn update_controls(st: &SiteState) {
    for index in 0..MOVIES.len() {
        let playing = st.gallery.active == Some(index);
        dom::set_text_by_id(
            &st.doc,
            &format!("bt-vplay-{index}"),
            if playing { "\u{23F8} Pause" } else { "\u{25B6} Play" },
        );
        if let Some(mute) = st.doc.get_element_by_id(&format!("bt-vmute-{index}")) {
            let base = "padding:8px 14px; border-radius:10px; border:1px solid \
                        rgba(255,209,102,0.4); background:rgba(40,8,14,0.7); color:#ffd166; \
                        font-size:13px;";
            mute.set_attribute(
                "style",
                &if playing {
                    base.to_string()
                } else {
                    format!("{base} display:none;")
                },
            )
            .ok();
            mute.set_text_content(Some(if st.gallery.muted {
                "\u{1F507} Unmute"
            } else {
                "\u{1F50A} Mute"
            }));
        }
    }
}

pub fn render(st: &mut SiteState) -> Result<(), JsValue> {
    let doc = st.doc.clone();
    st.root.set_inner_html("");
    st.gallery.active = None;

    let wrap = dom::styled(&doc, "div", "max-width:1100px; margin:0 auto; padding:64px 24px 120px;")?;
    let title = dom::styled(
        &doc,
        "h2",
        "text-align:center; font-size:44px; margin:0 0 8px; color:#ffd166;",
    )?;
    title.set_text_content(Some("Cinema Ki Rani"));
    wrap.append_child(&title)?;
    let blurb = dom::styled(
        &doc,
        "p",
        "text-align:center; color:#d9b98c; margin:0 0 40px; font-size:17px;",
    )?;
    blurb.set_text_content(Some(
        "Your favorite Bollywood classics. Press play on a reel to relive the magic!",
    ));
    wrap.append_child(&blurb)?;

    let grid = dom::styled(
        &doc,
        "div",
        "display:grid; grid-template-columns:repeat(auto-fit, minmax(300px, 1fr)); gap:28px;",
    )?;
    for (index, movie) in MOVIES.iter().enumerate() {
        let card = dom::styled(
            &doc,
            "div",
            "background:rgba(80,20,30,0.55); border:2px solid rgba(255,209,102,0.35); \
             border-radius:20px; padding:18px; text-align:center;",
        )?;

        let video: HtmlVideoElement = doc.create_element("video")?.dyn_into()?;
        video.set_id(&format!("bt-video-{index}"));
        video.set_src(movie.video_path);
        video.set_poster(movie.poster_path);
        video.set_loop(true);
        video.set_attribute("playsinline", "")?;
        video.set_attribute(
            "style",
            "width:100%; aspect-ratio:16/9; object-fit:cover; border-radius:12px; \
             background:#000; margin-bottom:12px;",
        )?;
        card.append_child(&video)?;

        let name = dom::styled(&doc, "h3", "margin:0 0 4px; color:#f4e3c1; font-size:20px;")?;
        name.set_text_content(Some(movie.title));
        card.append_child(&name)?;
        let year = dom::styled(&doc, "p", "margin:0 0 4px; color:#d9b98c; font-size:14px;")?;
        year.set_text_content(Some(movie.year));
        card.append_child(&year)?;
        let desc = dom::styled(&doc, "p", "margin:0 0 14px; color:#d9b98c; font-size:13px; opacity:0.85;")?;
        desc.set_text_content(Some(movie.description));
        card.append_child(&desc)?;

        let buttons = dom::styled(&doc, "div", "display:flex; justify-content:center; gap:10px;")?;
        let play = dom::styled(
            &doc,
            "button",
            "padding:8px 18px; border:none; border-radius:10px; font-size:14px; \
             font-weight:bold; color:#3a0d18; background:linear-gradient(90deg,#ffd166,#f4a259);",
        )?;
        play.set_id(&format!("bt-vplay-{index}"));
        play.set_text_content(Some("\u{25B6} Play"));
        dom::on_click(&play, move || {
            app::with_state(|st| toggle_video(st, index));
        })?;
        buttons.append_child(&play)?;

        let mute = dom::styled(
            &doc,
            "button",
            "padding:8px 14px; border-radius:10px; border:1px solid rgba(255,209,102,0.4); \
             background:rgba(40,8,14,0.7); color:#ffd166; font-size:13px; display:none;",
        )?;
        mute.set_id(&format!("bt-vmute-{index}"));
        mute.set_text_content(Some("\u{1F50A} Mute"));
        dom::on_click(&mute, || {
            app::with_state(toggle_mute);
        })?;
        buttons.append_child(&mute)?;
        card.append_child(&buttons)?;

        grid.append_child(&card)?;
    }
    wrap.append_child(&grid)?;
    st.root.append_child(&wrap)?;
    Ok(())
}
