mod components;
mod data;
mod geometry;
mod model;
mod router;
mod state;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
