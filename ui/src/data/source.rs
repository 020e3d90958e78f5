//! Dataset retrieval (HTTP fetch on web, filesystem on native) and the
//! per-session cache in front of it.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};

use super::dataset::{Dataset, DatasetError};

/// Environment variable that points native builds at a dataset file.
pub const DATASET_ENV: &str = "CRIMESCROLL_DATASET";

pub const DATASET_FILENAME: &str = "state_crime.csv";

#[cfg(target_arch = "wasm32")]
pub async fn fetch_text(location: &str) -> Result<String, DatasetError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Response;

    let window = web_sys::window().ok_or_else(|| DatasetError::Fetch("window unavailable".into()))?;
    let value = JsFuture::from(window.fetch_with_str(location))
        .await
        .map_err(|err| js_error(location, err))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| DatasetError::Fetch("unexpected fetch result".into()))?;

    if !response.ok() {
        return Err(DatasetError::Fetch(format!(
            "{location}: HTTP {}",
            response.status()
        )));
    }

    let body = response.text().map_err(|err| js_error(location, err))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|err| js_error(location, err))?;
    text.as_string()
        .ok_or_else(|| DatasetError::Fetch("response body is not text".into()))
}

#[cfg(target_arch = "wasm32")]
fn js_error(location: &str, err: wasm_bindgen::JsValue) -> DatasetError {
    use wasm_bindgen::JsCast;

    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{err:?}"));
    DatasetError::Fetch(format!("{location}: {message}"))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_text(location: &str) -> Result<String, DatasetError> {
    Ok(std::fs::read_to_string(location)?)
}

/// Where native builds look for the dataset when the shell does not decide:
/// `$CRIMESCROLL_DATASET`, then the per-user data directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_native_location() -> Option<std::path::PathBuf> {
    if let Some(path) = std::env::var_os(DATASET_ENV) {
        return Some(path.into());
    }
    directories::ProjectDirs::from("org", "Crimescroll", "Crimescroll")
        .map(|dirs| dirs.data_dir().join(DATASET_FILENAME))
}

/// Loads and parses the dataset once; later requests share the parsed rows.
#[derive(Debug, Clone, Default)]
pub struct DatasetCache {
    slot: Rc<RefCell<Option<Rc<Dataset>>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cached(&self) -> Option<Rc<Dataset>> {
        self.slot.borrow().clone()
    }

    pub async fn get_or_load(&self, location: &str) -> Result<Rc<Dataset>, DatasetError> {
        if let Some(dataset) = self.cached() {
            debug!(rows = dataset.len(), "dataset served from cache");
            return Ok(dataset);
        }

        let text = fetch_text(location).await?;
        let dataset = Rc::new(Dataset::parse(&text)?);
        info!(location, rows = dataset.len(), "dataset loaded");
        self.slot.replace(Some(dataset.clone()));
        Ok(dataset)
    }
}

impl PartialEq for DatasetCache {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}
