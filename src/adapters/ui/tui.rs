//! Implements InputPort. Inquire-based screens for sign up, log in and the
//! logged-in area.
//!
//! Each screen subscribes to its view model and re-renders on every commit;
//! the prompt loop follows the view manager's active view and only talks to
//! controllers.

use crate::adapters::presentation::{
    ChangePasswordController, LOGGED_IN_VIEW, LOGIN_VIEW, LoggedInState, LoggedInViewModel,
    LoginController, LoginState, LoginViewModel, LogoutController, SIGNUP_VIEW,
    SignupController, SignupState, SignupViewModel, ViewManagerModel,
};
use crate::domain::DomainError;
use crate::ports::InputPort;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use inquire::ui::{Color as PromptColor, RenderConfig, Styled};
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};
use std::fmt;
use std::io::{Write, stdout};
use std::sync::Arc;
use tracing::{debug, warn};

/// Applies the prompt theme globally. Call once before the first prompt.
pub fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("›").with_fg(PromptColor::LightCyan))
        .with_answered_prompt_prefix(Styled::new("✓").with_fg(PromptColor::LightGreen));
    inquire::set_global_render_config(config);
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendering (pure; printed by the view-model subscribers)
// ─────────────────────────────────────────────────────────────────────────────

fn render_signup(state: &SignupState) -> Option<String> {
    state.error.as_ref().map(|e| format!("Sign up failed: {e}"))
}

fn render_login(state: &LoginState) -> Option<String> {
    match &state.error {
        Some(e) => Some(format!("Log in failed: {e}")),
        None if !state.username.is_empty() => Some(format!("Username: {}", state.username)),
        None => None,
    }
}

fn render_logged_in(state: &LoggedInState) -> Option<String> {
    match &state.password_error {
        Some(e) => Some(format!("Password not changed: {e}")),
        None if !state.username.is_empty() => Some(format!("Logged in as {}", state.username)),
        None => None,
    }
}

fn print_line(color: Color, text: &str) {
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(color));
    let _ = out.execute(Print(text));
    let _ = out.execute(Print("\r\n"));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

fn line_color(has_error: bool) -> Color {
    if has_error { Color::Red } else { Color::Green }
}

// ─────────────────────────────────────────────────────────────────────────────
// Menus
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignupAction {
    SignUp,
    GoToLogin,
    Exit,
}

impl fmt::Display for SignupAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SignUp => "Sign up",
            Self::GoToLogin => "Go to log in",
            Self::Exit => "Exit",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginAction {
    LogIn,
    GoToSignup,
    Exit,
}

impl fmt::Display for LoginAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LogIn => "Log in",
            Self::GoToSignup => "Go to sign up",
            Self::Exit => "Exit",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoggedInAction {
    ChangePassword,
    LogOut,
    Exit,
}

impl fmt::Display for LoggedInAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ChangePassword => "Change password",
            Self::LogOut => "Log out",
            Self::Exit => "Exit",
        })
    }
}

enum Step {
    Continue,
    Exit,
}

/// `Ok(None)` when the user cancels (Esc / Ctrl-C).
fn answered<T>(result: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Prompt(e.to_string())),
    }
}

fn ask_password(message: &str) -> Result<Option<String>, DomainError> {
    answered(
        Password::new(message)
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Masked)
            .prompt(),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Adapter
// ─────────────────────────────────────────────────────────────────────────────

/// View models the terminal screens render.
pub struct Screens {
    pub view_manager: Arc<ViewManagerModel>,
    pub signup: Arc<SignupViewModel>,
    pub login: Arc<LoginViewModel>,
    pub logged_in: Arc<LoggedInViewModel>,
}

/// Controllers the terminal screens invoke.
pub struct Controllers {
    pub signup: SignupController,
    pub login: LoginController,
    pub logout: LogoutController,
    pub change_password: ChangePasswordController,
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    screens: Screens,
    controllers: Controllers,
}

impl TuiInputPort {
    /// Builds the adapter and subscribes its renderers to every view model.
    pub fn new(screens: Screens, controllers: Controllers) -> Self {
        screens.view_manager.subscribe(|s| {
            print_line(Color::Cyan, &format!("── {} ──", s.active_view));
        });
        screens.signup.subscribe(|s| {
            if let Some(text) = render_signup(s) {
                print_line(line_color(true), &text);
            }
        });
        screens.login.subscribe(|s| {
            if let Some(text) = render_login(s) {
                print_line(line_color(s.error.is_some()), &text);
            }
        });
        screens.logged_in.subscribe(|s| {
            if let Some(text) = render_logged_in(s) {
                print_line(line_color(s.password_error.is_some()), &text);
            }
        });
        Self {
            screens,
            controllers,
        }
    }

    fn signup_screen(&self) -> Result<Step, DomainError> {
        let actions = vec![SignupAction::SignUp, SignupAction::GoToLogin, SignupAction::Exit];
        let Some(action) = answered(Select::new("Sign up", actions).prompt())? else {
            return Ok(Step::Exit);
        };
        match action {
            SignupAction::SignUp => {
                let state = self.screens.signup.state();
                let Some(username) = answered(
                    Text::new("Choose username:")
                        .with_initial_value(&state.username)
                        .prompt(),
                )?
                else {
                    return Ok(Step::Continue);
                };
                let Some(password) = ask_password("Choose password:")? else {
                    return Ok(Step::Continue);
                };
                let Some(repeat) = ask_password("Enter password again:")? else {
                    return Ok(Step::Continue);
                };
                self.controllers.signup.execute(&username, &password, &repeat);
            }
            SignupAction::GoToLogin => self.controllers.signup.switch_to_login_view(),
            SignupAction::Exit => return Ok(Step::Exit),
        }
        Ok(Step::Continue)
    }

    fn login_screen(&self) -> Result<Step, DomainError> {
        let actions = vec![LoginAction::LogIn, LoginAction::GoToSignup, LoginAction::Exit];
        let Some(action) = answered(Select::new("Log in", actions).prompt())? else {
            return Ok(Step::Exit);
        };
        match action {
            LoginAction::LogIn => {
                let state = self.screens.login.state();
                let Some(username) = answered(
                    Text::new("Username:")
                        .with_initial_value(&state.username)
                        .prompt(),
                )?
                else {
                    return Ok(Step::Continue);
                };
                let Some(password) = ask_password("Password:")? else {
                    return Ok(Step::Continue);
                };
                self.controllers.login.execute(&username, &password);
            }
            LoginAction::GoToSignup => self.controllers.login.switch_to_signup_view(),
            LoginAction::Exit => return Ok(Step::Exit),
        }
        Ok(Step::Continue)
    }

    fn logged_in_screen(&self) -> Result<Step, DomainError> {
        let actions = vec![
            LoggedInAction::ChangePassword,
            LoggedInAction::LogOut,
            LoggedInAction::Exit,
        ];
        let Some(action) = answered(Select::new("Account", actions).prompt())? else {
            return Ok(Step::Exit);
        };
        match action {
            LoggedInAction::ChangePassword => {
                let Some(password) = ask_password("New password:")? else {
                    return Ok(Step::Continue);
                };
                let username = self.screens.logged_in.state().username;
                self.controllers
                    .change_password
                    .execute(&username, &password);
            }
            LoggedInAction::LogOut => self.controllers.logout.execute(),
            LoggedInAction::Exit => return Ok(Step::Exit),
        }
        Ok(Step::Continue)
    }
}

impl InputPort for TuiInputPort {
    fn run(&self) -> Result<(), DomainError> {
        loop {
            let view = self.screens.view_manager.active_view();
            debug!(view = %view, "rendering screen");
            let step = match view.as_str() {
                SIGNUP_VIEW => self.signup_screen()?,
                LOGIN_VIEW => self.login_screen()?,
                LOGGED_IN_VIEW => self.logged_in_screen()?,
                other => {
                    warn!(view = other, "unknown view; falling back to sign up");
                    self.screens.view_manager.switch_to(SIGNUP_VIEW);
                    Step::Continue
                }
            };
            if let Step::Exit = step {
                return Ok(());
            }
        }
    }
}
