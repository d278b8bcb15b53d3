use std::rc::Rc;

use gloo::events::EventListener;
use js_sys::Date;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::confetti::Confetti;
use crate::media::MediaDeck;
use crate::viewport;
use bemine_core::{confetti_burst, decor_table, layout_seed, ProposalState, CONFETTI_PIECES};

const PAGE_SEED: u64 = 0xBE_14_1E_5EED;
const VIDEO_SRC: &str = "celebration.mp4";
const QUESTION: &str = "Will you be my Valentine?";
const DECOR_SRCS: [&str; 2] = ["bfore.webp", "bfore2.webp"];

fn control_style(size: f64) -> String {
    format!(
        "font-size:{:.1}px;padding:{:.1}px {:.1}px;",
        size * 0.16,
        size * 0.12,
        size * 0.24
    )
}

fn mute_button(muted: bool, on_mute: Callback<MouseEvent>) -> Html {
    html! {
        <button class="mute-toggle" onclick={on_mute}>
            { if muted { "\u{1f507}" } else { "\u{1f50a}" } }
        </button>
    }
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let state = use_state(ProposalState::new);
    let media = use_memo((), |_| MediaDeck::new());
    let window_size = use_state(viewport::size);
    let video_ref = use_node_ref();

    // One nonce per session; every decorative position derives from it and
    // never moves again.
    let seed = *use_memo((), |_| layout_seed(PAGE_SEED, Date::now() as u64));
    let decor = use_memo(seed, |seed| decor_table(*seed));
    let confetti_pieces = use_memo(seed, |seed| confetti_burst(*seed, CONFETTI_PIECES));

    let state_value = *state;
    let window_size_value = *window_size;

    {
        // Kick the background track once at mount and again on the first
        // gesture anywhere on the page, in case autoplay was blocked.
        let media = Rc::clone(&media);
        use_effect_with((), move |_| {
            media.resume_audio();
            let mut listeners = Vec::new();
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                for event in ["click", "touchstart"] {
                    let media = Rc::clone(&media);
                    listeners.push(EventListener::once(&document, event, move |_| {
                        media.resume_audio();
                    }));
                }
            }
            move || {
                drop(listeners);
                media.release();
            }
        });
    }

    {
        let window_size = window_size.clone();
        use_effect_with((), move |_| {
            let listener = viewport::on_resize(move || {
                window_size.set(viewport::size());
            });
            move || drop(listener)
        });
    }

    {
        let media = Rc::clone(&media);
        let video_ref = video_ref.clone();
        let muted = state_value.muted;
        use_effect_with(state_value.accepted, move |accepted| {
            if *accepted {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    media.adopt_video(video, muted);
                    media.play_video();
                }
            }
            || ()
        });
    }

    let on_no = {
        let state = state.clone();
        let media = Rc::clone(&media);
        Callback::from(move |_: MouseEvent| {
            let mut next = *state;
            next.reject();
            state.set(next);
            media.resume_audio();
        })
    };
    let on_yes = {
        let state = state.clone();
        let media = Rc::clone(&media);
        Callback::from(move |_: MouseEvent| {
            let mut next = *state;
            next.accept();
            state.set(next);
            media.resume_audio();
        })
    };
    let on_mute = {
        let state = state.clone();
        let media = Rc::clone(&media);
        Callback::from(move |_: MouseEvent| {
            let mut next = *state;
            next.toggle_mute();
            state.set(next);
            media.set_muted(next.muted);
        })
    };

    if state_value.accepted {
        return html! {
            <div class="page celebrating">
                <Confetti
                    pieces={Rc::clone(&confetti_pieces)}
                    width={window_size_value.width}
                    height={window_size_value.height}
                />
                <div class="celebration">
                    <video
                        ref={video_ref}
                        class="celebration-video"
                        controls=true
                        playsinline=true
                    >
                        <source src={VIDEO_SRC} type="video/mp4" />
                        { "Your browser does not support the video tag." }
                    </video>
                    <div class="celebration-caption">
                        <div class="heart pulse">{ "\u{1f496}" }</div>
                        <h1>{ "Thank You! \u{1f979} \u{1f389}" }</h1>
                    </div>
                </div>
                <div class="success-overlay">
                    <img src="after.webp" alt="celebration" class="bounce" />
                </div>
                { mute_button(state_value.muted, on_mute) }
            </div>
        };
    }

    let no_button = if state_value.no_visible() {
        html! {
            <button
                class="no-button"
                style={control_style(state_value.no_size)}
                onclick={on_no}
            >
                { state_value.taunt() }
            </button>
        }
    } else {
        html! {}
    };

    let decor_count = state_value.decor_count();
    let decor_layer = if decor_count > 0 {
        let spots: Html = decor
            .iter()
            .take(decor_count)
            .enumerate()
            .map(|(index, spot)| {
                let style = format!(
                    "top:{:.2}%;left:{:.2}%;transform:rotate({:.1}deg);",
                    spot.top_pct, spot.left_pct, spot.rotation_deg
                );
                html! {
                    <img
                        key={index}
                        class="pleading bounce"
                        src={DECOR_SRCS[index % DECOR_SRCS.len()]}
                        alt="pleading"
                        style={style}
                    />
                }
            })
            .collect();
        html! { <div class="decor-layer">{ spots }</div> }
    } else {
        html! {}
    };

    html! {
        <div class="page asking">
            <main class="question-panel">
                <div class="heart bounce">{ "\u{1f49d}" }</div>
                <h1>{ QUESTION }</h1>
                <div class="controls">
                    <button
                        class="yes-button"
                        style={control_style(state_value.yes_size)}
                        onclick={on_yes}
                    >
                        { "Yes! \u{1f495}" }
                    </button>
                    { no_button }
                </div>
            </main>
            { decor_layer }
            { mute_button(state_value.muted, on_mute) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_root() -> web_sys::Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        root
    }

    #[wasm_bindgen_test(async)]
    async fn renders_the_asking_view() {
        set_panic_hook();
        let root = mount_root();
        let _handle = yew::Renderer::<App>::with_root(root.clone()).render();
        TimeoutFuture::new(0).await;

        let html = root.inner_html();
        assert!(html.contains(QUESTION));
        assert!(root.query_selector(".yes-button").unwrap().is_some());
        assert!(root.query_selector(".no-button").unwrap().is_some());
        assert!(root.query_selector(".decor-layer").unwrap().is_none());
    }

    #[wasm_bindgen_test(async)]
    async fn accepting_switches_to_the_celebration_view() {
        set_panic_hook();
        let root = mount_root();
        let _handle = yew::Renderer::<App>::with_root(root.clone()).render();
        TimeoutFuture::new(0).await;

        let yes = root
            .query_selector(".yes-button")
            .unwrap()
            .expect("yes button")
            .dyn_into::<web_sys::HtmlElement>()
            .expect("clickable");
        yes.click();
        TimeoutFuture::new(0).await;

        assert!(root.query_selector(".yes-button").unwrap().is_none());
        assert!(root.query_selector(".celebration-video").unwrap().is_some());
        assert!(root.query_selector(".confetti-layer").unwrap().is_some());
    }

    #[wasm_bindgen_test]
    fn wasm_smoke() {
        set_panic_hook();
        assert_eq!(1 + 1, 2);
    }
}
