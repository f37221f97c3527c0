//! Celebration finale: score recap, achievement tier, a rotating message
//! and canvas confetti driven by the frame loop.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, window};

use crate::app::SiteState;
use crate::catalog::CELEBRATION_MESSAGES;
use crate::dom;
use crate::rng::Lcg;

const MESSAGE_INTERVAL_MS: f64 = 4_000.0;
const CONFETTI_COUNT: usize = 70;
const COLORS: [&str; 6] = ["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FECA57", "#FF9FF3"];

struct Confetto {
    x: f64,
    y: f64,
    fall: f64, // px per ms
    sway: f64, // phase offset for horizontal wobble
    size: f64,
    color: &'static str,
}

pub struct CelebrationView {
    started_ms: f64,
    last_ms: f64,
    msg_index: usize,
    confetti: Vec<Confetto>,
    surface: Option<(HtmlCanvasElement, CanvasRenderingContext2d)>,
}

impl CelebrationView {
    pub fn new() -> Self {
        Self {
            started_ms: 0.0,
            last_ms: 0.0,
            msg_index: 0,
            confetti: Vec::new(),
            surface: None,
        }
    }

    /// Drop the canvas handle and particles when the view unmounts.
    pub fn deactivate(&mut self) {
        self.surface = None;
        self.confetti.clear();
    }
}

impl Default for CelebrationView {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render(st: &mut SiteState) -> Result<(), JsValue> {
    let doc = st.doc.clone();
    st.root.set_inner_html("");

    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let width = win.inner_width()?.as_f64().unwrap_or(1280.0);
    let height = win.inner_height()?.as_f64().unwrap_or(720.0);

    let canvas: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
    canvas.set_id("bt-cele-canvas");
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    canvas.set_attribute(
        "style",
        "position:fixed; inset:0; pointer-events:none; z-index:5;",
    )?;
    st.root.append_child(&canvas)?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let wrap = dom::styled(
        &doc,
        "div",
        "position:relative; z-index:10; max-width:860px; margin:0 auto; \
         padding:64px 24px 140px; text-align:center;",
    )?;

    let title = dom::styled(
        &doc,
        "h1",
        "margin:0 0 20px; font-size:54px; color:#ffd166; animation:bt-pulse 3s ease-in-out infinite;",
    )?;
    title.set_text_content(Some("\u{1F389} CELEBRATION TIME! \u{1F389}"));
    wrap.append_child(&title)?;

    let message = dom::styled(
        &doc,
        "p",
        "min-height:64px; margin:0 0 30px; font-size:24px; line-height:1.5; color:#f4e3c1;",
    )?;
    message.set_id("bt-cele-msg");
    message.set_text_content(Some(CELEBRATION_MESSAGES[0]));
    wrap.append_child(&message)?;

    let badge = dom::styled(
        &doc,
        "div",
        "display:inline-block; background:rgba(80,20,30,0.75); border:3px solid #ffd166; \
         border-radius:24px; padding:28px 40px; margin-bottom:30px;",
    )?;
    let star = dom::styled(
        &doc,
        "div",
        "font-size:42px; margin-bottom:8px; animation:bt-spin 4s linear infinite; display:inline-block;",
    )?;
    star.set_text_content(Some("\u{2B50}"));
    badge.append_child(&star)?;
    let tier = dom::styled(&doc, "h2", "margin:0 0 4px; font-size:32px; color:#ffd166;")?;
    tier.set_text_content(Some(st.session.achievement_tier()));
    badge.append_child(&tier)?;
    let unlocked = dom::styled(&doc, "p", "margin:0 0 16px; color:#d9b98c;")?;
    unlocked.set_text_content(Some("Achievement Unlocked!"));
    badge.append_child(&unlocked)?;

    let stats = dom::styled(&doc, "div", "display:flex; gap:16px; justify-content:center;")?;
    for (value, label) in [
        (st.session.total_score().to_string(), "Total Score"),
        (
            st.session.completed_activities().len().to_string(),
            "Activities Done",
        ),
    ] {
        let chip = dom::styled(
            &doc,
            "div",
            "background:rgba(255,209,102,0.12); border-radius:14px; padding:12px 26px;",
        )?;
        let v = dom::styled(&doc, "div", "font-size:26px; font-weight:bold; color:#ffd166;")?;
        v.set_text_content(Some(&value));
        chip.append_child(&v)?;
        let l = dom::styled(&doc, "div", "font-size:13px; color:#d9b98c;")?;
        l.set_text_content(Some(label));
        chip.append_child(&l)?;
        stats.append_child(&chip)?;
    }
    badge.append_child(&stats)?;
    wrap.append_child(&badge)?;

    let wishes = dom::styled(
        &doc,
        "div",
        "display:grid; grid-template-columns:repeat(auto-fit, minmax(200px, 1fr)); gap:20px; \
         background:rgba(80,20,30,0.55); border:2px solid rgba(255,209,102,0.4); \
         border-radius:24px; padding:28px; margin-bottom:30px;",
    )?;
    for (glyph, text) in [
        ("\u{1F31F}", "May your year be filled with countless magical moments"),
        ("\u{1F49D}", "Wishing you endless joy, love, and beautiful surprises"),
        ("\u{1F308}", "Here's to new adventures and wonderful memories ahead"),
    ] {
        let cell = dom::styled(&doc, "div", "text-align:center;")?;
        let g = dom::styled(&doc, "div", "font-size:34px; margin-bottom:8px;")?;
        g.set_text_content(Some(glyph));
        cell.append_child(&g)?;
        let t = dom::styled(&doc, "p", "margin:0; color:#f4e3c1; font-size:16px; line-height:1.5;")?;
        t.set_text_content(Some(text));
        cell.append_child(&t)?;
        wishes.append_child(&cell)?;
    }
    wrap.append_child(&wishes)?;

    let card = dom::styled(
        &doc,
        "div",
        "background:rgba(80,20,30,0.75); border:3px solid rgba(255,123,123,0.6); \
         border-radius:24px; padding:32px;",
    )?;
    let heart = dom::styled(&doc, "div", "font-size:44px; margin-bottom:10px;")?;
    heart.set_text_content(Some("\u{1F496}"));
    card.append_child(&heart)?;
    let h = dom::styled(&doc, "h3", "margin:0 0 12px; font-size:30px; color:#ffd166;")?;
    h.set_text_content(Some("With All Our Love"));
    card.append_child(&h)?;
    let p = dom::styled(
        &doc,
        "p",
        "max-width:560px; margin:0 auto; font-size:17px; line-height:1.6; color:#f4e3c1;",
    )?;
    p.set_text_content(Some(
        "This little site is just a small token of the immense love and \
         gratitude we have for you. You make every day brighter, and we are \
         so blessed to have you in our lives.",
    ));
    card.append_child(&p)?;
    wrap.append_child(&card)?;

    st.root.append_child(&wrap)?;

    // Seed the confetti field and hand the surface to the frame loop.
    let now = win
        .performance()
        .map(|perf| perf.now())
        .unwrap_or(0.0);
    let mut rng = Lcg::from_now();
    st.celebration.confetti = (0..CONFETTI_COUNT)
        .map(|_| Confetto {
            x: rng.range_f64(0.0, width),
            y: rng.range_f64(-height, 0.0),
            fall: rng.range_f64(0.04, 0.14),
            sway: rng.range_f64(0.0, std::f64::consts::TAU),
            size: rng.range_f64(4.0, 9.0),
            color: COLORS[rng.index(COLORS.len())],
        })
        .collect();
    st.celebration.started_ms = now;
    st.celebration.last_ms = now;
    st.celebration.msg_index = 0;
    st.celebration.surface = Some((canvas, ctx));
    Ok(())
}

/// Frame-loop tick: rotate the message on its cadence and advance the
/// confetti field.
pub fn tick(st: &mut SiteState, now: f64) {
    let view = &mut st.celebration;
    let Some((canvas, ctx)) = &view.surface else {
        return;
    };

    let idx =
        ((now - view.started_ms) / MESSAGE_INTERVAL_MS) as usize % CELEBRATION_MESSAGES.len();
    if idx != view.msg_index {
        view.msg_index = idx;
        dom::set_text_by_id(&st.doc, "bt-cele-msg", CELEBRATION_MESSAGES[idx]);
    }

    let dt = (now - view.last_ms).clamp(0.0, 100.0);
    view.last_ms = now;
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, w, h);
    for c in &mut view.confetti {
        c.y += c.fall * dt;
        if c.y > h + 10.0 {
            c.y = -10.0;
        }
        let x = c.x + (now / 900.0 + c.sway).sin() * 14.0;
        ctx.set_fill_style_str(c.color);
        ctx.fill_rect(x, c.y, c.size, c.size * 0.6);
    }
}
