#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::{Path, PathBuf};

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::{info, warn, Level};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::StoryConfig;
use ui::data::source::{default_native_location, DATASET_ENV, DATASET_FILENAME};
use ui::views::{About, Story};

/// Optional JSON file overriding `StoryConfig` fields.
const CONFIG_ENV: &str = "CRIMESCROLL_CONFIG";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Story {},
    #[route("/about")]
    About {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme from ui/assets/theme; desktop has no assets of its own.

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::init(Level::INFO).expect("logger initialised once");
    let resource_dir = resolve_resource_dir();
    let config = load_config(&resource_dir);
    info!(dataset = %config.dataset_location, "starting desktop shell");

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Crimescroll – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .with_context(config)
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    dioxus::logger::init(Level::INFO).expect("logger initialised once");
    let config = load_config(&resolve_resource_dir());
    LaunchBuilder::server().with_context(config).launch(App);
}

fn load_config(resource_dir: &Path) -> StoryConfig {
    let base = match std::env::var_os(CONFIG_ENV) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(raw) => StoryConfig::from_json(&raw).unwrap_or_else(|err| {
                warn!("ignoring invalid config {}: {err}", PathBuf::from(&path).display());
                StoryConfig::default()
            }),
            Err(err) => {
                warn!("cannot read config {}: {err}", PathBuf::from(&path).display());
                StoryConfig::default()
            }
        },
        None => StoryConfig::default(),
    };

    let dataset = resolve_dataset(resource_dir);
    base.with_dataset_location(dataset.to_string_lossy())
}

/// `CRIMESCROLL_DATASET`, then the bundled resource directory, then the user
/// data directory.
fn resolve_dataset(resource_dir: &Path) -> PathBuf {
    if let Some(path) = std::env::var_os(DATASET_ENV) {
        return PathBuf::from(path);
    }
    let bundled = resource_dir.join(DATASET_FILENAME);
    if bundled.exists() {
        return bundled;
    }
    default_native_location().unwrap_or(bundled)
}

fn nav_story(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Story {}, "{label}" })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::About {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code; AppNavbar updates it on selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        story: nav_story,
        about: nav_about,
    });

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed by language so the routed subtree remounts with fresh strings.
        div {
            key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
