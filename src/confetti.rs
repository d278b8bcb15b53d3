use std::rc::Rc;

use bemine_core::ConfettiPiece;
use yew::prelude::*;

const COLORS: [&str; 6] = [
    "#ff4d6d", "#ffd166", "#06d6a0", "#118ab2", "#f78c6b", "#ffffff",
];

#[derive(Properties, PartialEq)]
pub(crate) struct ConfettiProps {
    pub(crate) pieces: Rc<Vec<ConfettiPiece>>,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

/// Full-viewport particle burst shown behind the celebration view. The piece
/// table is fixed; only the layer dimensions follow the window, so a resize
/// re-renders without reshuffling anything.
#[function_component(Confetti)]
pub(crate) fn confetti(props: &ConfettiProps) -> Html {
    let fall_px = props.height.max(1.0) + 40.0;
    let layer_style = format!("width:{:.0}px;height:{:.0}px;", props.width, props.height);
    let pieces: Html = props
        .pieces
        .iter()
        .enumerate()
        .map(|(index, piece)| {
            let style = format!(
                "left:{:.2}%;width:{:.1}px;height:{:.1}px;background:{};\
                 --fall:{:.0}px;--drift:{:.0}px;--spin:{:.0}deg;\
                 animation-duration:{}ms;animation-delay:{}ms;",
                piece.left_pct,
                piece.size_px,
                piece.size_px * 0.6,
                COLORS[piece.color as usize % COLORS.len()],
                fall_px,
                piece.drift_px,
                piece.spin_deg,
                piece.fall_ms,
                piece.delay_ms,
            );
            html! { <span key={index} class="confetti-piece" style={style}></span> }
        })
        .collect();
    html! {
        <div class="confetti-layer" style={layer_style} aria-hidden="true">
            { pieces }
        </div>
    }
}
