//! Background music player: one shared `<audio>` element, a per-session
//! shuffled playlist and the transport surface (toggle / next / previous /
//! seek / volume).
//!
//! A foreground gallery video gates playback through the session's
//! `video_active` flag; the pause it causes keeps the logical playing flag
//! so closing the video resumes the music. Autoplay vetoes are silent: the
//! logical flag only flips on the element's own `play` event, so a rejected
//! attempt simply leaves the player paused.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlAudioElement, HtmlElement, MouseEvent};

use crate::app::{self, SiteState};
use crate::catalog::{TRACKS, Track};
use crate::dom;
use crate::rng::Lcg;

pub const DEFAULT_VOLUME: f64 = 0.3;

/// Pure transport state over the fixed track catalog.
pub struct Playlist {
    order: Vec<usize>,
    position: usize,
    playing: bool,
    volume: f64,
}

impl Playlist {
    /// Shuffled once per session; the order is never persisted.
    pub fn new(rng: &mut Lcg) -> Self {
        let mut order: Vec<usize> = (0..TRACKS.len()).collect();
        rng.shuffle(&mut order);
        Self {
            order,
            position: 0,
            playing: false,
            volume: DEFAULT_VOLUME,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn select(&mut self, position: usize) {
        if position < self.order.len() {
            self.position = position;
        }
    }

    pub fn current(&self) -> &'static Track {
        &TRACKS[self.order[self.position]]
    }

    pub fn track_at(&self, position: usize) -> &'static Track {
        &TRACKS[self.order[position]]
    }

    /// Advance with wraparound; the last track rolls over to the first.
    pub fn next(&mut self) {
        if !self.is_empty() {
            self.position = (self.position + 1) % self.len();
        }
    }

    /// Step back with wraparound; the first track rolls back to the last.
    pub fn previous(&mut self) {
        if !self.is_empty() {
            self.position = (self.position + self.len() - 1) % self.len();
        }
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: f64) -> f64 {
        self.volume = volume.clamp(0.0, 1.0);
        self.volume
    }

    /// Clamp an absolute seek to the current track duration. Unknown or
    /// not-yet-loaded durations pin the seek to zero.
    pub fn clamp_seek(seconds: f64, duration: f64) -> f64 {
        if duration.is_finite() && duration > 0.0 {
            seconds.clamp(0.0, duration)
        } else {
            0.0
        }
    }
}

/// Playlist plus the single shared element.
pub struct Player {
    pub list: Playlist,
    pub audio: HtmlAudioElement,
}

impl Player {
    pub fn new(audio: HtmlAudioElement, rng: &mut Lcg) -> Self {
        Self {
            list: Playlist::new(rng),
            audio,
        }
    }
}

// --- DOM shell ---------------------------------------------------------------

/// Create the hidden shared `<audio>` element and wire its lifecycle
/// events back into the site state.
pub fn init_audio(doc: &Document) -> Result<HtmlAudioElement, JsValue> {
    let audio: HtmlAudioElement = doc.create_element("audio")?.dyn_into()?;
    audio.set_id("bt-audio");
    audio.set_attribute("preload", "auto")?;
    doc.body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&audio)?;

    {
        let cb = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            app::with_state(|st| {
                st.player.list.set_playing(true);
                update_widgets(st);
            });
        }) as Box<dyn FnMut(_)>);
        audio.add_event_listener_with_callback("play", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    {
        // A gating pause (foreground video) keeps the logical flag so the
        // music can resume when the video closes; a natural track end is the
        // ended handler's business.
        let cb = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            app::with_state(|st| {
                if !st.session.video_active() && !st.player.audio.ended() {
                    st.player.list.set_playing(false);
                }
                update_widgets(st);
            });
        }) as Box<dyn FnMut(_)>);
        audio.add_event_listener_with_callback("pause", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    {
        // Auto-advance: move to the next track and keep rolling only if the
        // player is still logically playing and no video holds the floor.
        let cb = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            app::with_state(|st| {
                st.player.list.next();
                load_current(st);
                if st.player.list.playing() && !st.session.video_active() {
                    let _ = st.player.audio.play();
                }
                update_widgets(st);
            });
        }) as Box<dyn FnMut(_)>);
        audio.add_event_listener_with_callback("ended", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(audio)
}

/// Point the element at the current track and apply the stored volume.
pub fn load_current(st: &mut SiteState) {
    let track = st.player.list.current();
    st.player.audio.set_src(track.audio_path);
    st.player.audio.set_volume(st.player.list.volume());
}

/// Ask the browser to play. The promise rejection of a vetoed autoplay is
/// deliberately unobserved; the `play` event is the source of truth.
pub fn try_play(st: &mut SiteState) {
    if st.session.video_active() {
        return;
    }
    if st.player.audio.play().is_err() {
        dom::warn("audio playback unavailable");
    }
}

pub fn toggle(st: &mut SiteState) {
    if st.session.video_active() {
        return;
    }
    if st.player.list.playing() {
        st.player.audio.pause().ok();
    } else {
        try_play(st);
    }
}

pub fn next_track(st: &mut SiteState) {
    st.player.list.next();
    reload_and_continue(st);
}

pub fn previous_track(st: &mut SiteState) {
    st.player.list.previous();
    reload_and_continue(st);
}

fn reload_and_continue(st: &mut SiteState) {
    load_current(st);
    if st.player.list.playing() && !st.session.video_active() {
        let _ = st.player.audio.play();
    }
    update_widgets(st);
}

/// Playlist row click: jump to that slot and start it (a user gesture, so
/// the browser will allow it).
pub fn select_track(st: &mut SiteState, position: usize) {
    st.player.list.select(position);
    load_current(st);
    try_play(st);
    update_widgets(st);
}

pub fn seek_to(st: &mut SiteState, seconds: f64) {
    let clamped = Playlist::clamp_seek(seconds, st.player.audio.duration());
    st.player.audio.set_current_time(clamped);
}

pub fn set_volume(st: &mut SiteState, volume: f64) {
    let v = st.player.list.set_volume(volume);
    st.player.audio.set_volume(v);
    update_widgets(st);
}

// --- Corner control ----------------------------------------------------------

/// Persistent top-right control: track label, toggle button and the
/// "video playing" badge shown while the gallery holds the floor.
pub fn mount_corner(doc: &Document) -> Result<Element, JsValue> {
    let corner = dom::styled(
        doc,
        "div",
        "position:fixed; top:18px; right:18px; z-index:50; display:flex; align-items:center; \
         gap:12px; padding:10px 14px; border-radius:16px; border:2px solid rgba(255,209,102,0.5); \
         background:rgba(60,12,22,0.9);",
    )?;
    corner.set_id("bt-corner");

    let info = dom::styled(doc, "div", "text-align:right;")?;
    let title = dom::styled(doc, "div", "color:#ffd166; font-size:13px; font-weight:bold;")?;
    title.set_id("bt-corner-title");
    info.append_child(&title)?;
    let artist = dom::styled(doc, "div", "color:#d9b98c; font-size:11px;")?;
    artist.set_id("bt-corner-artist");
    info.append_child(&artist)?;
    corner.append_child(&info)?;

    let toggle_btn = dom::styled(
        doc,
        "button",
        "width:40px; height:40px; border:1px solid rgba(255,209,102,0.5); border-radius:12px; \
         background:rgba(120,30,40,0.9); color:#ffd166; font-size:16px;",
    )?;
    toggle_btn.set_id("bt-corner-toggle");
    toggle_btn.set_text_content(Some("\u{25B6}"));
    dom::on_click(&toggle_btn, || {
        app::with_state(toggle);
    })?;
    corner.append_child(&toggle_btn)?;

    let badge = dom::styled(
        doc,
        "div",
        "display:none; position:absolute; top:-10px; right:-6px; padding:2px 8px; \
         border-radius:999px; background:#f4a259; color:#3a0d18; font-size:10px; \
         font-weight:bold;",
    )?;
    badge.set_id("bt-corner-badge");
    badge.set_text_content(Some("Video Playing"));
    corner.append_child(&badge)?;
    Ok(corner)
}

/// Refresh every player widget that might be on screen.
pub fn update_widgets(st: &SiteState) {
    let doc = &st.doc;
    let track = st.player.list.current();
    dom::set_text_by_id(doc, "bt-corner-title", track.title);
    dom::set_text_by_id(doc, "bt-corner-artist", track.artist);
    let glyph = if st.player.list.playing() { "\u{23F8}" } else { "\u{25B6}" };
    dom::set_text_by_id(doc, "bt-corner-toggle", glyph);
    if let Some(badge) = doc.get_element_by_id("bt-corner-badge") {
        let shown = st.session.video_active();
        badge
            .set_attribute(
                "style",
                if shown {
                    "display:block; position:absolute; top:-10px; right:-6px; padding:2px 8px; \
                     border-radius:999px; background:#f4a259; color:#3a0d18; font-size:10px; \
                     font-weight:bold;"
                } else {
                    "display:none;"
                },
            )
            .ok();
    }
    // Music view widgets, if mounted.
    dom::set_text_by_id(doc, "bt-music-title", track.title);
    dom::set_text_by_id(doc, "bt-music-artist", track.artist);
    dom::set_text_by_id(doc, "bt-music-toggle", glyph);
    for position in 0..st.player.list.len() {
        if let Some(row) = doc.get_element_by_id(&format!("bt-row-{position}")) {
            row.set_attribute("style", row_style(position == st.player.list.position()))
                .ok();
        }
    }
    if let Some(fill) = doc.get_element_by_id("bt-music-volfill") {
        fill.set_attribute(
            "style",
            &format!(
                "height:100%; border-radius:6px; background:linear-gradient(90deg,#ffd166,#f4a259); \
                 width:{}%;",
                (st.player.list.volume() * 100.0).round()
            ),
        )
        .ok();
    }
}

fn row_style(active: bool) -> &'static str {
    if active {
        "display:flex; justify-content:space-between; align-items:center; padding:14px 16px; \
         border-radius:14px; cursor:pointer; background:rgba(130,40,50,0.6); \
         border:1px solid rgba(255,209,102,0.6);"
    } else {
        "display:flex; justify-content:space-between; align-items:center; padding:14px 16px; \
         border-radius:14px; cursor:pointer; background:rgba(60,12,22,0.5); \
         border:1px solid rgba(255,209,102,0.2);"
    }
}

// --- Music view --------------------------------------------------------------

pub fn render_music(st: &mut SiteState) -> Result<(), JsValue> {
    let doc = st.doc.clone();
    st.root.set_inner_html("");
    let wrap = dom::styled(&doc, "div", "max-width:760px; margin:0 auto; padding:64px 24px 120px;")?;

    let title = dom::styled(
        &doc,
        "h2",
        "text-align:center; font-size:42px; margin:0 0 8px; color:#ffd166;",
    )?;
    title.set_text_content(Some("\u{1F3B5} Music for the Soul"));
    wrap.append_child(&title)?;
    let blurb = dom::styled(&doc, "p", "text-align:center; color:#d9b98c; margin:0 0 32px;")?;
    blurb.set_text_content(Some("Your favorite melodies, shuffled fresh for this visit."));
    wrap.append_child(&blurb)?;

    let card = dom::styled(
        &doc,
        "div",
        "background:rgba(80,20,30,0.55); border:2px solid rgba(255,209,102,0.4); \
         border-radius:24px; padding:28px; margin-bottom:24px;",
    )?;

    let now_row = dom::styled(&doc, "div", "display:flex; align-items:center; gap:20px; margin-bottom:18px;")?;
    let disc = dom::styled(
        &doc,
        "div",
        "width:72px; height:72px; border-radius:50%; border:4px solid #3a0d18; flex:none; \
         background:radial-gradient(circle at center, #3a0d18 18%, #ffd166 19%, #f4a259 100%); \
         animation:bt-spin 10s linear infinite;",
    )?;
    now_row.append_child(&disc)?;
    let now_info = dom::styled(&doc, "div", "")?;
    let now_title = dom::styled(&doc, "h3", "margin:0; font-size:24px; color:#ffd166;")?;
    now_title.set_id("bt-music-title");
    now_info.append_child(&now_title)?;
    let now_artist = dom::styled(&doc, "p", "margin:4px 0 0; color:#d9b98c;")?;
    now_artist.set_id("bt-music-artist");
    now_info.append_child(&now_artist)?;
    now_row.append_child(&now_info)?;
    card.append_child(&now_row)?;

    // Seek bar: a click maps its offset to an absolute position.
    let bar = dom::styled(
        &doc,
        "div",
        "height:10px; border-radius:6px; background:rgba(40,8,14,0.8); cursor:pointer; \
         margin-bottom:6px; overflow:hidden;",
    )?;
    bar.set_id("bt-music-bar");
    let fill = dom::styled(
        &doc,
        "div",
        "height:100%; width:0%; border-radius:6px; pointer-events:none; \
         background:linear-gradient(90deg,#ffd166,#f4a259);",
    )?;
    fill.set_id("bt-music-fill");
    bar.append_child(&fill)?;
    {
        let bar_el: HtmlElement = bar.clone().dyn_into()?;
        dom::on_click_event(&bar, move |evt: MouseEvent| {
            let width = bar_el.offset_width() as f64;
            if width <= 0.0 {
                return;
            }
            let ratio = (evt.offset_x() as f64 / width).clamp(0.0, 1.0);
            app::with_state(|st| {
                let duration = st.player.audio.duration();
                if duration.is_finite() && duration > 0.0 {
                    seek_to(st, ratio * duration);
                }
            });
        })?;
    }
    card.append_child(&bar)?;
    let time = dom::styled(&doc, "p", "margin:0 0 18px; color:#d9b98c; font-size:13px; text-align:right;")?;
    time.set_id("bt-music-time");
    time.set_text_content(Some(&format!("0:00 / {}", st.player.list.current().duration_label)));
    card.append_child(&time)?;

    let controls = dom::styled(&doc, "div", "display:flex; justify-content:center; gap:16px; margin-bottom:18px;")?;
    for (label, id, action) in [
        ("\u{23EE}", None, 0u8),
        ("\u{25B6}", Some("bt-music-toggle"), 1u8),
        ("\u{23ED}", None, 2u8),
    ] {
        let btn = dom::styled(
            &doc,
            "button",
            "width:54px; height:54px; border-radius:50%; border:1px solid rgba(255,209,102,0.5); \
             background:rgba(120,30,40,0.9); color:#ffd166; font-size:20px;",
        )?;
        if let Some(id) = id {
            btn.set_id(id);
        }
        btn.set_text_content(Some(label));
        dom::on_click(&btn, move || {
            app::with_state(|st| match action {
                0 => previous_track(st),
                1 => toggle(st),
                _ => next_track(st),
            });
        })?;
        controls.append_child(&btn)?;
    }
    card.append_child(&controls)?;

    let vol_row = dom::styled(&doc, "div", "display:flex; align-items:center; gap:12px;")?;
    let vol_icon = dom::styled(&doc, "span", "color:#ffd166;")?;
    vol_icon.set_text_content(Some("\u{1F50A}"));
    vol_row.append_child(&vol_icon)?;
    let vol_bar = dom::styled(
        &doc,
        "div",
        "flex:1; height:8px; border-radius:6px; background:rgba(40,8,14,0.8); cursor:pointer; \
         overflow:hidden;",
    )?;
    let vol_fill = dom::styled(
        &doc,
        "div",
        &format!(
            "height:100%; border-radius:6px; pointer-events:none; \
             background:linear-gradient(90deg,#ffd166,#f4a259); width:{}%;",
            (st.player.list.volume() * 100.0).round()
        ),
    )?;
    vol_fill.set_id("bt-music-volfill");
    vol_bar.append_child(&vol_fill)?;
    {
        let vol_el: HtmlElement = vol_bar.clone().dyn_into()?;
        dom::on_click_event(&vol_bar, move |evt: MouseEvent| {
            let width = vol_el.offset_width() as f64;
            if width <= 0.0 {
                return;
            }
            let ratio = evt.offset_x() as f64 / width;
            app::with_state(|st| set_volume(st, ratio));
        })?;
    }
    vol_row.append_child(&vol_bar)?;
    card.append_child(&vol_row)?;
    wrap.append_child(&card)?;

    let list_card = dom::styled(
        &doc,
        "div",
        "background:rgba(80,20,30,0.55); border:2px solid rgba(255,209,102,0.4); \
         border-radius:24px; padding:24px;",
    )?;
    let list_title = dom::styled(&doc, "h3", "margin:0 0 16px; color:#ffd166; font-size:22px;")?;
    list_title.set_text_content(Some("Current Playlist"));
    list_card.append_child(&list_title)?;
    let rows = dom::styled(&doc, "div", "display:flex; flex-direction:column; gap:10px;")?;
    for position in 0..st.player.list.len() {
        let track = st.player.list.track_at(position);
        let row = dom::styled(&doc, "div", row_style(position == st.player.list.position()))?;
        row.set_id(&format!("bt-row-{position}"));
        let left = dom::styled(&doc, "div", "")?;
        let t = dom::styled(&doc, "div", "color:#ffd166; font-weight:bold;")?;
        t.set_text_content(Some(track.title));
        left.append_child(&t)?;
        let a = dom::styled(&doc, "div", "color:#d9b98c; font-size:13px;")?;
        a.set_text_content(Some(track.artist));
        left.append_child(&a)?;
        row.append_child(&left)?;
        let dur = dom::styled(&doc, "span", "color:#d9b98c; font-size:13px;")?;
        dur.set_text_content(Some(track.duration_label));
        row.append_child(&dur)?;
        dom::on_click(&row, move || {
            app::with_state(|st| select_track(st, position));
        })?;
        rows.append_child(&row)?;
    }
    list_card.append_child(&rows)?;
    wrap.append_child(&list_card)?;

    st.root.append_child(&wrap)?;
    update_widgets(st);
    Ok(())
}

/// Frame-loop refresh of the progress readout while the Music view is up.
pub fn tick_music(st: &mut SiteState) {
    let current = st.player.audio.current_time();
    let duration = st.player.audio.duration();
    let total = if duration.is_finite() && duration > 0.0 {
        format_time(duration)
    } else {
        st.player.list.current().duration_label.to_string()
    };
    dom::set_text_by_id(
        &st.doc,
        "bt-music-time",
        &format!("{} / {}", format_time(current), total),
    );
    if let Some(fill) = st.doc.get_element_by_id("bt-music-fill") {
        let pct = if duration.is_finite() && duration > 0.0 {
            (current / duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        fill.set_attribute(
            "style",
            &format!(
                "height:100%; border-radius:6px; pointer-events:none; \
                 background:linear-gradient(90deg,#ffd166,#f4a259); width:{pct:.1}%;"
            ),
        )
        .ok();
    }
}

pub fn format_time(seconds: f64) -> String {
    let s = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    format!("{}:{:02}", s / 60, s % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_last_to_first() {
        let mut list = Playlist::new(&mut Lcg::new(5));
        for _ in 0..list.len() - 1 {
            list.next();
        }
        assert_eq!(list.position(), list.len() - 1);
        list.next();
        assert_eq!(list.position(), 0);
    }

    #[test]
    fn previous_wraps_first_to_last() {
        let mut list = Playlist::new(&mut Lcg::new(5));
        assert_eq!(list.position(), 0);
        list.previous();
        assert_eq!(list.position(), list.len() - 1);
    }

    #[test]
    fn shuffle_covers_every_track() {
        let list = Playlist::new(&mut Lcg::new(123));
        let mut seen: Vec<usize> = (0..list.len()).map(|p| {
            TRACKS
                .iter()
                .position(|t| t.id == list.track_at(p).id)
                .unwrap()
        })
        .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..TRACKS.len()).collect::<Vec<_>>());
    }

    #[test]
    fn volume_clamps_to_unit_range() {
        let mut list = Playlist::new(&mut Lcg::new(1));
        assert_eq!(list.set_volume(1.7), 1.0);
        assert_eq!(list.set_volume(-0.4), 0.0);
        assert_eq!(list.set_volume(0.3), 0.3);
    }

    #[test]
    fn seek_clamps_to_duration() {
        assert_eq!(Playlist::clamp_seek(200.0, 120.0), 120.0);
        assert_eq!(Playlist::clamp_seek(-3.0, 120.0), 0.0);
        assert_eq!(Playlist::clamp_seek(60.0, 120.0), 60.0);
        // Unknown duration (metadata not loaded yet) pins to zero.
        assert_eq!(Playlist::clamp_seek(60.0, f64::NAN), 0.0);
    }

    #[test]
    fn time_formatting() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(61.4), "1:01");
        assert_eq!(format_time(f64::NAN), "0:00");
    }
}
