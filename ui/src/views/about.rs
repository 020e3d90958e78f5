use dioxus::prelude::*;

use crate::core::StoryConfig;
use crate::data::{PROPERTY_RATE_COLUMN, STATE_COLUMN, VIOLENT_RATE_COLUMN, YEAR_COLUMN};

const COLUMNS: [&str; 4] = [
    STATE_COLUMN,
    YEAR_COLUMN,
    PROPERTY_RATE_COLUMN,
    VIOLENT_RATE_COLUMN,
];

#[component]
pub fn About() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.map(|code| code()).unwrap_or_default();

    let config = try_use_context::<StoryConfig>().unwrap_or_default();
    let location = config.dataset_location.clone();
    let focus = config.focus_state.clone();
    let year = config.scatter_year.clone();

    rsx! {
        section { class: "page page-about",
            h1 { {crate::t!("about-title")} }
            p { {crate::t!("about-dataset")} }
            p { {crate::t!("about-method", state = focus.as_str(), year = year.as_str())} }

            h2 { {crate::t!("about-data-file-heading")} }
            p { {crate::t!("about-data-file")} }
            pre { class: "page-about__location", code { "{location}" } }

            ul { class: "page-about__columns",
                for column in COLUMNS {
                    li { key: "{column}", code { "{column}" } }
                }
            }
        }
    }
}
