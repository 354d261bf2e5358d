//! Interface adapters between the terminal views and the use cases.
//!
//! Controllers turn UI events into input data; presenters turn use-case
//! outcomes into view-model commits.

pub mod controllers;
pub mod presenters;
pub mod state;
pub mod view_manager;
pub mod view_model;

pub use controllers::{
    ChangePasswordController, LoginController, LogoutController, SignupController,
};
pub use presenters::{ChangePasswordPresenter, LoginPresenter, LogoutPresenter, SignupPresenter};
pub use state::{
    LOGGED_IN_VIEW, LOGIN_VIEW, LoggedInState, LoggedInViewModel, LoginState, LoginViewModel,
    SIGNUP_VIEW, SignupState, SignupViewModel,
};
pub use view_manager::{ViewManagerModel, ViewManagerState};
pub use view_model::{ScreenState, SubscriptionId, ViewModel};
