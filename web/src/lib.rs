use clap::Parser;
use wasm_bindgen::prelude::*;

mod api;
mod game;
mod utils;

/// Options read from the location hash, e.g. `#-vv&--seed=42`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force the seed of the first board instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Base URL of the trivia service
    #[arg(long, default_value = api::DEFAULT_API_BASE)]
    api: String,

    /// Give up on a request after this many milliseconds
    #[arg(long, default_value_t = api::DEFAULT_TIMEOUT_MS)]
    timeout_ms: u32,
}

impl Args {
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        let args = hash.split(['#', '&']).filter(|arg| !arg.is_empty());
        Self::try_parse_from(core::iter::once(env!("CARGO_PKG_NAME")).chain(args))
    }

    fn game_props(&self) -> game::GameProps {
        game::GameProps {
            api: self.api.clone().into(),
            timeout_ms: self.timeout_ms,
            seed: self.seed,
        }
    }
}

fn location_hash(location: &web_sys::Location) -> String {
    location.hash().unwrap_or_default()
}

fn mount_point(document: &web_sys::Document) -> web_sys::Element {
    document
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element")
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = location_hash(&window().location());

    let (args, hash_error) = match Args::from_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::parse_from([env!("CARGO_PKG_NAME")]), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = hash_error {
        log::warn!("ignoring location hash {:?}: {}", location_hash, err);
    }
    log::debug!("args: {:?}", args);

    let root = mount_point(&document());

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game_props()).render();
}
