//! Root controller shell: the DOM scaffold, the thread-local site state,
//! navigation, the shared audio element and the frame loop.
//!
//! Every event listener borrows the state for one synchronous tick via
//! [`with_state`]; render helpers receive `&mut SiteState` directly and
//! never re-enter the cell.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlAudioElement, KeyboardEvent, window};

use crate::celebration::{self, CelebrationView};
use crate::dom;
use crate::gallery::{self, GalleryState};
use crate::games::{self, GamesHost};
use crate::hero;
use crate::player::{self, Player};
use crate::rng::Lcg;
use crate::session::{SessionState, View};

pub struct SiteState {
    pub doc: Document,
    pub root: Element,
    nav: Element,
    pub session: SessionState,
    pub player: Player,
    pub games: GamesHost,
    pub gallery: GalleryState,
    pub celebration: CelebrationView,
    pub greeting: Option<HtmlAudioElement>,
    pub greeting_played: bool,
}

thread_local! {
    static SITE_STATE: RefCell<Option<SiteState>> = RefCell::new(None);
}

/// Borrow the site state for one synchronous callback tick.
pub fn with_state<F: FnOnce(&mut SiteState)>(f: F) {
    SITE_STATE.with(|cell| {
        if let Some(state) = cell.borrow_mut().as_mut() {
            f(state);
        }
    });
}

/// Build the whole site into the document body and start the frame loop.
pub fn mount() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    dom::ensure_stylesheet(&doc)?;
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

    // Create / reuse the single view container.
    let root = if let Some(el) = doc.get_element_by_id("bt-root") {
        el
    } else {
        let el = dom::styled(&doc, "div", "min-height:100vh;")?;
        el.set_id("bt-root");
        body.append_child(&el)?;
        el
    };

    let nav = dom::styled(&doc, "nav", "display:none;")?;
    nav.set_id("bt-nav");
    body.append_child(&nav)?;

    let corner = player::mount_corner(&doc)?;
    body.append_child(&corner)?;

    let audio = player::init_audio(&doc)?;
    let mut rng = Lcg::from_now();
    let mut st = SiteState {
        doc: doc.clone(),
        root,
        nav,
        session: SessionState::new(),
        player: Player::new(audio, &mut rng),
        games: GamesHost::new(),
        gallery: GalleryState::new(),
        celebration: CelebrationView::new(),
        greeting: None,
        greeting_played: false,
    };
    player::load_current(&mut st);
    // First playback attempt; the browser may veto it until a user gesture.
    player::try_play(&mut st);
    refresh_after_transition(&mut st);
    SITE_STATE.with(|cell| cell.replace(Some(st)));

    attach_keyboard(&doc)?;
    start_frame_loop();
    Ok(())
}

/// Unconditional view transition plus the cleanup a switch implies: any
/// foreground video yields the floor and the finale drops its canvas.
pub fn select_view(st: &mut SiteState, view: View) {
    if st.session.video_active() {
        set_video_active(st, false);
    }
    st.gallery.active = None;
    st.celebration.deactivate();
    st.session.select_view(view);
    refresh_after_transition(st);
}

pub fn refresh_after_transition(st: &mut SiteState) {
    update_nav(st);
    render_current(st);
}

fn render_current(st: &mut SiteState) {
    let result = match st.session.current_view() {
        View::Hero => hero::render(st),
        View::Gallery => gallery::render(st),
        View::Games => games::render(st),
        View::Music => player::render_music(st),
        View::Celebration => celebration::render(st),
    };
    if result.is_err() {
        dom::warn("view render failed");
    }
    player::update_widgets(st);
}

/// Mediate the single shared playback resource: raising the flag pauses
/// the background music; clearing it resumes only a logically playing
/// player.
pub fn set_video_active(st: &mut SiteState, active: bool) {
    st.session.set_video_active(active);
    if active {
        st.player.audio.pause().ok();
    } else if st.player.list.playing() {
        let _ = st.player.audio.play();
    }
    player::update_widgets(st);
}

// --- Navigation --------------------------------------------------------------

const NAV_SHOWN: &str = "position:fixed; bottom:18px; left:50%; transform:translateX(-50%); \
                         z-index:50; display:flex; gap:6px; padding:8px; border-radius:999px; \
                         background:rgba(60,12,22,0.92); border:2px solid rgba(255,209,102,0.5);";
const NAV_BTN_ACTIVE: &str = "padding:10px 18px; border:none; border-radius:999px; font-size:14px; \
                              font-weight:bold; color:#3a0d18; \
                              background:linear-gradient(90deg,#ffd166,#f4a259);";
const NAV_BTN_IDLE: &str = "padding:10px 18px; border:none; border-radius:999px; font-size:14px; \
                            color:#d9b98c; background:transparent;";

fn nav_icon(view: View) -> &'static str {
    match view {
        View::Hero => "\u{1F3E0}",
        View::Gallery => "\u{1F3AC}",
        View::Games => "\u{1F3AE}",
        View::Music => "\u{1F3B5}",
        View::Celebration => "\u{1F496}",
    }
}

/// Rebuild the navigation bar. Hidden on the hero splash until the journey
/// has started; the active entry shows its label next to the icon.
pub fn update_nav(st: &mut SiteState) {
    if !st.session.nav_visible() {
        st.nav.set_attribute("style", "display:none;").ok();
        return;
    }
    st.nav.set_attribute("style", NAV_SHOWN).ok();
    st.nav.set_inner_html("");
    let current = st.session.current_view();
    for view in View::ALL {
        let active = view == current;
        let Ok(btn) = dom::styled(
            &st.doc,
            "button",
            if active { NAV_BTN_ACTIVE } else { NAV_BTN_IDLE },
        ) else {
            continue;
        };
        let text = if active {
            format!("{} {}", nav_icon(view), view.label())
        } else {
            nav_icon(view).to_string()
        };
        btn.set_text_content(Some(&text));
        dom::on_click(&btn, move || {
            with_state(|st| select_view(st, view));
        })
        .ok();
        st.nav.append_child(&btn).ok();
    }
}

// --- Input routing -----------------------------------------------------------

/// One document-level keydown listener feeds whichever mini-game owns
/// typed input; other views ignore the keyboard.
fn attach_keyboard(doc: &Document) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
        if evt.ctrl_key() || evt.alt_key() || evt.meta_key() {
            return;
        }
        let key = evt.key();
        with_state(|st| {
            if st.session.current_view() == View::Games {
                games::handle_key(st, &key);
            }
        });
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

// --- Frame loop --------------------------------------------------------------

type FrameCallback = std::rc::Rc<std::cell::RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_frame_loop() {
    let f: FrameCallback = std::rc::Rc::new(std::cell::RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        with_state(|st| tick(st, ts));
        if let Some(w) = window() {
            let _ =
                w.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// Per-frame work is cosmetic only: finale rotation/confetti and the music
/// progress readout. Game and session state move on input events alone.
fn tick(st: &mut SiteState, now: f64) {
    match st.session.current_view() {
        View::Celebration => celebration::tick(st, now),
        View::Music => player::tick_music(st),
        _ => {}
    }
}
