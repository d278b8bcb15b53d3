mod app;
mod confetti;
mod media;
mod viewport;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
