//! Output-boundary implementations. The only writers of view-model state.

pub mod change_password;
pub mod login;
pub mod logout;
pub mod signup;

pub use change_password::ChangePasswordPresenter;
pub use login::LoginPresenter;
pub use logout::LogoutPresenter;
pub use signup::SignupPresenter;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::adapters::presentation::view_model::{ScreenState, ViewModel};
    use crate::adapters::presentation::view_manager::ViewManagerModel;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Records every snapshot a view model pushes.
    pub fn record<S: ScreenState>(vm: &ViewModel<S>) -> Arc<Mutex<Vec<S>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        vm.subscribe(move |s: &S| sink.lock().push(s.clone()));
        seen
    }

    /// Records every view the manager switches to.
    pub fn record_views(manager: &ViewManagerModel) -> Arc<Mutex<Vec<String>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        manager.subscribe(move |s| sink.lock().push(s.active_view.clone()));
        seen
    }
}
