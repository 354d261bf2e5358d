//! Wiring & DI. Entry point: bootstrap the store, presenters and interactors,
//! hand controllers to the terminal UI and run it.
//! No business logic here.

use account_desk::adapters::persistence::InMemoryUserDataAccess;
use account_desk::adapters::presentation::{
    ChangePasswordController, ChangePasswordPresenter, LOGIN_VIEW, LoggedInViewModel,
    LoginController, LoginPresenter, LoginViewModel, LogoutController, LogoutPresenter,
    SIGNUP_VIEW, SignupController, SignupPresenter, SignupViewModel, ViewManagerModel,
};
use account_desk::adapters::ui::TuiInputPort;
use account_desk::adapters::ui::tui::{Controllers, Screens};
use account_desk::domain::{CommonUserFactory, PasswordPolicy, UserFactory};
use account_desk::ports::{InputPort, SignupUserDataAccess};
use account_desk::shared::config::{AppConfig, DEFAULT_INITIAL_VIEW, DEFAULT_LOG_FILTER};
use account_desk::usecases::{
    ChangePasswordInteractor, LoginInteractor, LogoutInteractor, SignupInteractor,
};
use dotenv::dotenv;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    let loaded = AppConfig::load();
    let log_filter = loaded
        .as_ref()
        .map(AppConfig::log_filter_or_default)
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| log_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }
    let cfg = match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config could not be loaded; using defaults");
            AppConfig::default()
        }
    };

    let policy = PasswordPolicy::new(cfg.min_password_length_or_default());
    info!(min_password_length = policy.min_length(), "password policy");
    let user_factory: Arc<dyn UserFactory> = Arc::new(CommonUserFactory);

    // --- Data access (one store, handed out per use case) ---
    let store = Arc::new(InMemoryUserDataAccess::new());
    if let Some((name, password)) = cfg.seed_account() {
        seed_account(&*store, &*user_factory, policy, &name, &password);
    }

    // --- View models ---
    let initial_view = match cfg.initial_view_or_default().as_str() {
        v @ (SIGNUP_VIEW | LOGIN_VIEW) => v.to_owned(),
        other => {
            warn!(view = other, "unknown initial view; using {}", DEFAULT_INITIAL_VIEW);
            DEFAULT_INITIAL_VIEW.to_owned()
        }
    };
    let view_manager = Arc::new(ViewManagerModel::new(&initial_view));
    let signup_vm = Arc::new(SignupViewModel::new());
    let login_vm = Arc::new(LoginViewModel::new());
    let logged_in_vm = Arc::new(LoggedInViewModel::new());

    // --- Use cases: presenter -> interactor -> controller ---
    let signup = SignupController::new(Arc::new(SignupInteractor::new(
        store.clone(),
        Arc::new(SignupPresenter::new(
            Arc::clone(&view_manager),
            Arc::clone(&signup_vm),
            Arc::clone(&logged_in_vm),
        )),
        Arc::clone(&user_factory),
        policy,
    )));
    let login = LoginController::new(Arc::new(LoginInteractor::new(
        store.clone(),
        Arc::new(LoginPresenter::new(
            Arc::clone(&view_manager),
            Arc::clone(&login_vm),
            Arc::clone(&logged_in_vm),
        )),
    )));
    let logout = LogoutController::new(Arc::new(LogoutInteractor::new(
        store.clone(),
        Arc::new(LogoutPresenter::new(
            Arc::clone(&view_manager),
            Arc::clone(&logged_in_vm),
            Arc::clone(&login_vm),
        )),
    )));
    let change_password = ChangePasswordController::new(Arc::new(ChangePasswordInteractor::new(
        store,
        Arc::new(ChangePasswordPresenter::new(Arc::clone(&logged_in_vm))),
        user_factory,
        policy,
    )));

    account_desk::adapters::ui::init_ui()?;

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        Screens {
            view_manager,
            signup: signup_vm,
            login: login_vm,
            logged_in: logged_in_vm,
        },
        Controllers {
            signup,
            login,
            logout,
            change_password,
        },
    ));

    input_port.run()?;
    info!("bye");

    Ok(())
}

/// Saves the configured demo account unless its password breaks `policy`.
fn seed_account(
    store: &dyn SignupUserDataAccess,
    factory: &dyn UserFactory,
    policy: PasswordPolicy,
    name: &str,
    password: &str,
) -> bool {
    if let Err(e) = policy.check(password) {
        warn!(username = %name, reason = %e, "demo account not seeded");
        return false;
    }
    info!(username = %name, "seeding demo account");
    store.save(factory.create(name, password));
    true
}
