//! Startup configuration for gssh.
//!
//! Values are resolved once at the top of the run and passed down by value;
//! nothing below this layer reads the environment.

/// Environment variable supplying the default ssh username.
pub const USER_ENV_VAR: &str = "GSSH_USER";

/// Default path for the remembered-selection file
const DEFAULT_STATE_PATH: &str = "~/.gssh/previous.json";

/// Resolves the effective ssh username.
///
/// An explicit override wins whenever it is set, including when it is empty:
/// an empty username means "let gcloud pick its own default user", which is
/// distinct from no override at all. Without an override the environment
/// value applies, and without either the result is empty.
///
/// # Examples
///
/// ```
/// use gssh_core::config::resolve_user;
///
/// // Explicit override beats the environment
/// let user = resolve_user(Some("admin".to_string()), Some("alice".to_string()));
/// assert_eq!(user, "admin");
///
/// // An explicitly empty override also beats the environment
/// let user = resolve_user(Some(String::new()), Some("alice".to_string()));
/// assert_eq!(user, "");
/// ```
#[must_use]
pub fn resolve_user(override_user: Option<String>, env_user: Option<String>) -> String {
    override_user.or(env_user).unwrap_or_default()
}

/// Resolves the remembered-selection file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// state path. Shell expansions like `~` are resolved.
#[must_use]
pub fn get_state_path(state_path_arg: &Option<String>) -> String {
    let state_path = match state_path_arg {
        Some(state_path) => state_path,
        None => DEFAULT_STATE_PATH,
    };

    shellexpand::tilde(state_path).to_string()
}
