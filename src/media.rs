use std::cell::RefCell;

use gloo::console;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlAudioElement, HtmlMediaElement, HtmlVideoElement};

const AUDIO_SRC: &str = "song.mp3";

/// Owns the page's two media handles. The background track is created eagerly
/// at mount and loops for the whole session; the celebration video is adopted
/// once its element exists in the DOM. Nothing else touches either handle.
pub(crate) struct MediaDeck {
    audio: Option<HtmlAudioElement>,
    video: RefCell<Option<HtmlVideoElement>>,
}

impl MediaDeck {
    pub(crate) fn new() -> Self {
        let audio = match HtmlAudioElement::new_with_src(AUDIO_SRC) {
            Ok(audio) => {
                audio.set_loop(true);
                Some(audio)
            }
            Err(err) => {
                console::warn!("audio element unavailable", err);
                None
            }
        };
        Self {
            audio,
            video: RefCell::new(None),
        }
    }

    /// Best-effort start of the background track. An autoplay rejection is
    /// logged and swallowed; the next user gesture calls this again, and the
    /// platform guarantees gesture-initiated playback is allowed.
    pub(crate) fn resume_audio(&self) {
        let Some(audio) = self.audio.as_ref() else {
            return;
        };
        if !audio.paused() {
            return;
        }
        play_ignoring_policy(audio, "audio");
    }

    pub(crate) fn adopt_video(&self, element: HtmlVideoElement, muted: bool) {
        element.set_loop(true);
        element.set_muted(muted);
        *self.video.borrow_mut() = Some(element);
    }

    pub(crate) fn play_video(&self) {
        if let Some(video) = self.video.borrow().as_ref() {
            play_ignoring_policy(video, "video");
        }
    }

    pub(crate) fn set_muted(&self, muted: bool) {
        if let Some(audio) = self.audio.as_ref() {
            audio.set_muted(muted);
        }
        if let Some(video) = self.video.borrow().as_ref() {
            video.set_muted(muted);
        }
    }

    /// Teardown for component unmount. Stops the loop; the elements are
    /// dropped with the deck.
    pub(crate) fn release(&self) {
        if let Some(audio) = self.audio.as_ref() {
            let _ = audio.pause();
        }
        self.video.borrow_mut().take();
    }
}

/// Fire-and-forget play. The promise is observed only to log a rejection;
/// there is no retry loop and no timeout.
fn play_ignoring_policy(media: &HtmlMediaElement, label: &'static str) {
    let Ok(promise) = media.play() else {
        console::warn!("play call failed", label);
        return;
    };
    spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            console::warn!("playback blocked, will retry on interaction", label, err);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn mute_propagates_to_audio_and_video() {
        let deck = MediaDeck::new();
        let video = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.create_element("video").ok())
            .and_then(|element| element.dyn_into::<HtmlVideoElement>().ok())
            .expect("video element");
        deck.adopt_video(video, false);

        deck.set_muted(true);
        assert_eq!(deck.audio.as_ref().map(|audio| audio.muted()), Some(true));
        assert_eq!(
            deck.video.borrow().as_ref().map(|video| video.muted()),
            Some(true)
        );

        deck.set_muted(false);
        assert_eq!(deck.audio.as_ref().map(|audio| audio.muted()), Some(false));
    }

    #[wasm_bindgen_test]
    fn resume_audio_survives_autoplay_rejection() {
        // No gesture has happened, so play() may reject; the call must not panic.
        let deck = MediaDeck::new();
        deck.resume_audio();
        deck.release();
    }
}
