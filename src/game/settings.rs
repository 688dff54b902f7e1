use anyhow::*;
use directories_next::BaseDirs;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const POPUP_MS_VAR: &'static str = "DOBON_POPUP_MS";
const TICK_MS_VAR: &'static str = "DOBON_TICK_MS";
const LIBRARY_DIR_VAR: &'static str = "DOBON_LIBRARY_DIR";

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub popup_duration: Duration,
    pub tick_interval: Duration,
    pub library_dir: Option<PathBuf>,
}

fn get_default_library_dir() -> Option<PathBuf> {
    let mut dir = BaseDirs::new()?.data_dir().to_path_buf();
    dir.push("dobon-quiz");
    Some(dir)
}

fn parse_millis(name: &str, value: &str) -> Result<Duration> {
    let millis: u64 = value
        .trim()
        .parse()
        .with_context(|| format!("{} must be a number of milliseconds, got {:?}", name, value))?;
    Ok(Duration::from_millis(millis))
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            popup_duration: Duration::from_millis(2000),
            tick_interval: Duration::from_millis(100),
            library_dir: get_default_library_dir(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Settings> {
        Settings::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        if let Some(value) = lookup(POPUP_MS_VAR) {
            settings.popup_duration = parse_millis(POPUP_MS_VAR, &value)?;
        }
        if let Some(value) = lookup(TICK_MS_VAR) {
            let tick_interval = parse_millis(TICK_MS_VAR, &value)?;
            if tick_interval == Duration::default() {
                return Err(anyhow!("{} cannot be zero", TICK_MS_VAR));
            }
            settings.tick_interval = tick_interval;
        }
        if let Some(value) = lookup(LIBRARY_DIR_VAR) {
            settings.library_dir = Some(PathBuf::from(value));
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.popup_duration, Duration::from_millis(2000));
    }

    #[test]
    fn reads_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            (POPUP_MS_VAR, "500"),
            (TICK_MS_VAR, " 20 "),
            (LIBRARY_DIR_VAR, "/tmp/quizzes"),
        ]))
        .unwrap();
        assert_eq!(settings.popup_duration, Duration::from_millis(500));
        assert_eq!(settings.tick_interval, Duration::from_millis(20));
        assert_eq!(settings.library_dir, Some(PathBuf::from("/tmp/quizzes")));
    }

    #[test]
    fn rejects_malformed_overrides() {
        assert!(Settings::from_lookup(lookup_from(&[(POPUP_MS_VAR, "soon")])).is_err());
        assert!(Settings::from_lookup(lookup_from(&[(TICK_MS_VAR, "0")])).is_err());
    }
}
