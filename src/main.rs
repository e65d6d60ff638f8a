#![allow(non_snake_case)]

use dioxus::prelude::*;
use tracing::Level;

mod cache;
mod dom;
mod frontend;
mod performance;
mod scroll;
mod settings;
mod utils;

use frontend::App;

fn main() {
    // Init logger
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}
