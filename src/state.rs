use std::path::PathBuf;

use crate::chart::{build_chart, ChartSpec};
use crate::data::filter::{matching_listings, Selector};
use crate::data::loader::{DataError, DatasetCache};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which informational tab of the side panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    About,
    Explore,
    Background,
}

/// The UI state plus the reactive binding, independent of rendering.
///
/// Every control change triggers exactly one synchronous
/// accessor → filter → chart cycle ([`AppState::refresh`]). The cycle is
/// all-or-nothing: the committed chart is only replaced on success, so any
/// failure leaves the previous chart displayed.
pub struct AppState {
    pub selector: Selector,
    pub active_tab: Tab,
    /// The committed chart, as shown by the central panel.
    pub chart: ChartSpec,
    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
    cache: DatasetCache,
}

impl AppState {
    /// Create the state bound to the given listings file and run the initial
    /// update cycle so the chart reflects the default selector.
    pub fn new(data_path: PathBuf) -> Self {
        let mut state = AppState {
            selector: Selector::default(),
            active_tab: Tab::About,
            chart: ChartSpec::default(),
            status_message: None,
            cache: DatasetCache::new(data_path),
        };
        state.refresh();
        state
    }

    /// One update cycle: validate the selector, load the dataset, filter,
    /// rebuild the chart, commit. On failure the previous chart is retained
    /// and the error is surfaced as a status message.
    pub fn refresh(&mut self) {
        match self.compute_chart() {
            Ok(spec) => {
                log::info!("chart updated: {} listings match", spec.points.len());
                self.chart = spec;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("update failed, keeping previous chart: {e:#}");
                self.status_message = Some(user_message(&e));
            }
        }
    }

    fn compute_chart(&mut self) -> anyhow::Result<ChartSpec> {
        self.selector.validate()?;
        let dataset = self.cache.get()?;
        let rows = matching_listings(&dataset.listings, &self.selector);
        Ok(build_chart(&rows))
    }
}

fn user_message(err: &anyhow::Error) -> String {
    if err.downcast_ref::<DataError>().is_some() {
        "Data could not be loaded.".to_string()
    } else {
        format!("Error: {err:#}")
    }
}
