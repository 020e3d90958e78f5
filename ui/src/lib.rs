//! Shared UI crate for Crimescroll. Data loading, chart rendering and the
//! story views live here; the platform shells only add routing and config.

pub mod charts;
pub mod core;
pub mod data;
pub mod i18n;
pub mod story;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
