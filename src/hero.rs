//! Hero splash: the landing screen with the journey call-to-action and a
//! one-shot voice greeting.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::JsValue;
use web_sys::HtmlAudioElement;

use crate::app::{self, SiteState};
use crate::catalog::GREETING_AUDIO;
use crate::dom;
use crate::player;

/// Play the recorded greeting. The element is created lazily and never
/// attached; a missing clip or a vetoed play stays silent.
pub fn play_greeting(st: &mut SiteState) {
    if st.greeting.is_none() {
        match st.doc.create_element("audio") {
            Ok(el) => match el.dyn_into::<HtmlAudioElement>() {
                Ok(audio) => {
                    audio.set_src(GREETING_AUDIO);
                    st.greeting = Some(audio);
                }
                Err(_) => return,
            },
            Err(_) => {
                dom::warn("greeting audio unavailable");
                return;
            }
        }
    }
    if let Some(audio) = &st.greeting {
        audio.set_current_time(0.0);
        let _ = audio.play();
        st.greeting_played = true;
    }
}

pub fn render(st: &mut SiteState) -> Result<(), JsValue> {
    let doc = st.doc.clone();
    st.root.set_inner_html("");

    let wrap = dom::styled(
        &doc,
        "div",
        "position:relative; min-height:100vh; display:flex; flex-direction:column; \
         align-items:center; justify-content:center; text-align:center; padding:0 24px; \
         overflow:hidden;",
    )?;

    // Floating accents, staggered by animation delay.
    for (i, glyph) in ["\u{1F496}", "\u{2728}", "\u{1F496}", "\u{1F338}", "\u{2728}", "\u{1F496}"]
        .iter()
        .enumerate()
    {
        let spot = dom::styled(
            &doc,
            "span",
            &format!(
                "position:absolute; left:{}%; top:{}%; font-size:26px; opacity:0.7; \
                 animation:bt-float 4s ease-in-out {}s infinite;",
                8 + i * 15,
                12 + (i * 29) % 70,
                i as f64 * 0.7
            ),
        )?;
        spot.set_text_content(Some(glyph));
        wrap.append_child(&spot)?;
    }

    let title = dom::styled(
        &doc,
        "h1",
        "margin:0 0 10px; font-size:72px; color:#ffd166; letter-spacing:2px; \
         animation:bt-pulse 5s ease-in-out infinite;",
    )?;
    title.set_text_content(Some("Happy Birthday"));
    wrap.append_child(&title)?;

    let subtitle = dom::styled(&doc, "h2", "margin:0 0 18px; font-size:40px; color:#f4a259;")?;
    subtitle.set_text_content(Some("Dear Mum \u{2728}"));
    wrap.append_child(&subtitle)?;

    let blurb = dom::styled(
        &doc,
        "p",
        "max-width:620px; margin:0 0 36px; font-size:20px; line-height:1.6; color:#d9b98c;",
    )?;
    blurb.set_text_content(Some(
        "A journey through memories, movies, and moments that celebrate the \
         incredible woman you are",
    ));
    wrap.append_child(&blurb)?;

    let greeting = dom::styled(
        &doc,
        "button",
        "margin-bottom:22px; padding:14px 30px; border:none; border-radius:999px; \
         font-size:17px; font-weight:bold; color:#3a0d18; \
         background:linear-gradient(90deg,#f4a259,#ff7b7b);",
    )?;
    greeting.set_id("bt-hero-greeting");
    greeting.set_text_content(Some(if st.greeting_played {
        "\u{1F496} Replay the Special Message"
    } else {
        "\u{25B6} A Special Message for You"
    }));
    dom::on_click(&greeting, || {
        app::with_state(|st| {
            play_greeting(st);
            dom::set_text_by_id(
                &st.doc,
                "bt-hero-greeting",
                "\u{1F496} Replay the Special Message",
            );
        });
    })?;
    wrap.append_child(&greeting)?;

    let cta = dom::styled(
        &doc,
        "button",
        "padding:20px 44px; border:none; border-radius:999px; font-size:21px; \
         font-weight:bold; color:#3a0d18; background:linear-gradient(90deg,#ffd166,#f4a259); \
         animation:bt-pulse 3s ease-in-out infinite;",
    )?;
    cta.set_text_content(Some("\u{2728} Begin Your Journey \u{2728}"));
    dom::on_click(&cta, || {
        app::with_state(|st| {
            st.session.start_journey();
            // A user gesture: retry playback in case autoplay was vetoed.
            player::try_play(st);
            app::refresh_after_transition(st);
        });
    })?;
    wrap.append_child(&cta)?;

    st.root.append_child(&wrap)?;
    Ok(())
}
