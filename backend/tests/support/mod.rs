#![allow(dead_code)]

use std::sync::Mutex;

use autopilot_parking::config::CONFIG_PATH_ENV;
use autopilot_parking::models::{CivilInstant, CIVIL_TIMEZONE};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Every variable `ServerConfig::load` reads.
pub const CONFIG_VARS: [&str; 5] = [
    CONFIG_PATH_ENV,
    "HOST",
    "PORT",
    "CIVIL_TIMEZONE",
    "SEED_LOCATIONS",
];

/// Wall-clock time in Chicago.
pub fn chicago(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> CivilInstant {
    CivilInstant::from_local(CIVIL_TIMEZONE, year, month, day, hour, minute)
        .expect("unambiguous Chicago local time")
}

/// Runs `f` with exactly `vars` set among [`CONFIG_VARS`]; the others are
/// unset so a developer's shell cannot leak into the result.
///
/// Previous values come back on drop, panics included. Calls are serialized
/// because the process environment is shared by parallel tests.
pub fn with_config_env<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _restore = ConfigEnv::install(vars);
    f()
}

struct ConfigEnv {
    saved: Vec<(&'static str, Option<String>)>,
}

impl ConfigEnv {
    fn install(vars: &[(&str, &str)]) -> Self {
        let saved = CONFIG_VARS
            .iter()
            .map(|key| (*key, std::env::var(key).ok()))
            .collect();

        for key in CONFIG_VARS {
            match vars.iter().find(|(k, _)| *k == key) {
                Some((_, value)) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }

        Self { saved }
    }
}

impl Drop for ConfigEnv {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}
