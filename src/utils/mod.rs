use once_cell::sync::OnceCell;
use std::env;

static INIT_DOTENV: OnceCell<String> = OnceCell::new();

/// Loads the dotenv file into the process environment, once.
///
/// The path comes from `DOTENV_PATH` and defaults to `.env`. A missing file is
/// not an error; variables already set in the environment win. Returns the
/// path that was used, which is the first one loaded in this process.
pub fn ensure_dotenv_loaded() -> String {
    ensure_dotenv_loaded_from(None)
}

/// Same as [`ensure_dotenv_loaded`], but an explicit `path` (e.g. a CLI
/// argument of the server binary) takes precedence over `DOTENV_PATH`.
pub fn ensure_dotenv_loaded_from(path: Option<String>) -> String {
    INIT_DOTENV
        .get_or_init(|| {
            let dotenv_path = dotenv_path(path, env::var("DOTENV_PATH").ok());
            dotenv::from_filename(&dotenv_path).ok();
            dotenv_path
        })
        .clone()
}

fn dotenv_path(explicit: Option<String>, from_env: Option<String>) -> String {
    explicit
        .or(from_env)
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| ".env".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        assert_eq!(
            dotenv_path(Some(".env.production".into()), Some(".env.other".into())),
            ".env.production"
        );
    }

    #[test]
    fn env_var_is_used_without_explicit_path() {
        assert_eq!(dotenv_path(None, Some(".env.staging".into())), ".env.staging");
    }

    #[test]
    fn defaults_to_dot_env() {
        assert_eq!(dotenv_path(None, None), ".env");
        assert_eq!(dotenv_path(Some(String::new()), None), ".env");
    }
}
