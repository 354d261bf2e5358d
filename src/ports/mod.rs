//! Port traits. API boundaries around the use cases.
//!
//! - Inbound: input boundaries, called by controllers into the use cases
//! - Outbound: data access and output boundaries, called by the use cases

pub mod inbound;
pub mod outbound;

pub use inbound::{
    ChangePasswordInputBoundary, ChangePasswordInputData, InputPort, LoginInputBoundary,
    LoginInputData, LogoutInputBoundary, SignupInputBoundary, SignupInputData,
};
pub use outbound::{
    ChangePasswordOutputBoundary, ChangePasswordOutputData, ChangePasswordUserDataAccess,
    LoginOutputBoundary, LoginOutputData, LoginUserDataAccess, LogoutOutputBoundary,
    LogoutOutputData, LogoutUserDataAccess, SignupOutputBoundary, SignupOutputData,
    SignupUserDataAccess,
};
