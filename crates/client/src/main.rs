mod animation;
mod catalog;
mod components;
mod game;
mod image;
mod logger;
mod theme;

fn main() {
    logger::init();
    yew::start_app::<components::app::App>();
}
