//! Application use cases. Each interactor implements one input boundary and
//! reports through one output boundary.

pub mod change_password;
pub mod login;
pub mod logout;
pub mod signup;

pub use change_password::ChangePasswordInteractor;
pub use login::LoginInteractor;
pub use logout::LogoutInteractor;
pub use signup::SignupInteractor;
