//! Tracks which named screen is active. Presenters switch it to navigate.

use super::view_model::{ScreenState, SubscriptionId, ViewModel};
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewManagerState {
    pub active_view: String,
}

impl ScreenState for ViewManagerState {
    const VIEW_NAME: &'static str = "view manager";
}

#[derive(Debug, Default)]
pub struct ViewManagerModel {
    inner: ViewModel<ViewManagerState>,
}

impl ViewManagerModel {
    pub fn new(initial_view: &str) -> Self {
        Self {
            inner: ViewModel::with_state(ViewManagerState {
                active_view: initial_view.to_owned(),
            }),
        }
    }

    pub fn active_view(&self) -> String {
        self.inner.state().active_view
    }

    /// Make `view_name` the active screen and notify subscribers.
    pub fn switch_to(&self, view_name: &str) {
        info!(view = view_name, "switching view");
        self.inner.set_state(ViewManagerState {
            active_view: view_name.to_owned(),
        });
    }

    pub fn subscribe(
        &self,
        observer: impl Fn(&ViewManagerState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.inner.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }
}
