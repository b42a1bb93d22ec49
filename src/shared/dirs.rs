use std::path::PathBuf;

const APP_DIR: &str = "ghpm";

/// Directory holding ghpm's config files.
///
/// `$XDG_CONFIG_HOME/ghpm` when set, otherwise `$HOME/.config/ghpm`.
/// Empty values are treated as unset per XDG Base Directory Specification.
pub fn ghpm_config_dir() -> Option<PathBuf> {
    let base = match env_path("XDG_CONFIG_HOME") {
        Some(xdg) => xdg,
        None => env_path("HOME")?.join(".config"),
    };
    Some(base.join(APP_DIR))
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_xdg_config_home_when_set() {
        temp_env::with_vars(
            [
                ("XDG_CONFIG_HOME", Some("/custom/config")),
                ("HOME", Some("/test/home")),
            ],
            || {
                assert_eq!(
                    ghpm_config_dir(),
                    Some(PathBuf::from("/custom/config/ghpm"))
                );
            },
        );
    }

    #[test]
    fn falls_back_to_home_dot_config() {
        temp_env::with_vars(
            [
                ("XDG_CONFIG_HOME", None::<&str>),
                ("HOME", Some("/test/home")),
            ],
            || {
                assert_eq!(
                    ghpm_config_dir(),
                    Some(PathBuf::from("/test/home/.config/ghpm"))
                );
            },
        );
    }

    #[test]
    fn treats_empty_xdg_as_unset() {
        temp_env::with_vars(
            [("XDG_CONFIG_HOME", Some("")), ("HOME", Some("/test/home"))],
            || {
                assert_eq!(
                    ghpm_config_dir(),
                    Some(PathBuf::from("/test/home/.config/ghpm"))
                );
            },
        );
    }

    #[test]
    fn none_without_home_or_xdg() {
        temp_env::with_vars(
            [("XDG_CONFIG_HOME", None::<&str>), ("HOME", None)],
            || {
                assert_eq!(ghpm_config_dir(), None);
            },
        );
    }
}
