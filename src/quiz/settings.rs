use anyhow::{anyhow, Context, Result};
use log::warn;
use std::env;
use std::str::FromStr;
use std::time::Duration;

const ENV_FEEDBACK_DELAY_MS: &'static str = "QUIZORA_FEEDBACK_DELAY_MS";
const ENV_TICK_INTERVAL_MS: &'static str = "QUIZORA_TICK_INTERVAL_MS";
const ENV_PASS_PERCENTAGE: &'static str = "QUIZORA_PASS_PERCENTAGE";

const MIN_FEEDBACK_DELAY: Duration = Duration::from_millis(1500);
const MAX_FEEDBACK_DELAY: Duration = Duration::from_millis(4000);

#[derive(Clone, Debug)]
pub struct Settings {
    pub feedback_delay: Duration,
    pub tick_interval: Duration,
    pub pass_percentage: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            feedback_delay: Duration::from_millis(2500),
            tick_interval: Duration::from_millis(100),
            pass_percentage: 60,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Settings::from_lookup(|name| {
            env::var_os(name).map(|value| value.to_string_lossy().into_owned())
        })
    }

    /// Builds settings from `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(ms) = read_var::<u64, _>(&lookup, ENV_FEEDBACK_DELAY_MS)? {
            settings.feedback_delay = clamp_feedback_delay(Duration::from_millis(ms));
        }
        if let Some(ms) = read_var::<u64, _>(&lookup, ENV_TICK_INTERVAL_MS)? {
            if ms == 0 {
                return Err(anyhow!("{} must be greater than zero", ENV_TICK_INTERVAL_MS));
            }
            settings.tick_interval = Duration::from_millis(ms);
        }
        if let Some(percentage) = read_var::<u32, _>(&lookup, ENV_PASS_PERCENTAGE)? {
            if percentage > 100 {
                return Err(anyhow!("{} cannot exceed 100", ENV_PASS_PERCENTAGE));
            }
            settings.pass_percentage = percentage;
        }

        Ok(settings)
    }
}

fn read_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => {
            let parsed = value
                .trim()
                .parse::<T>()
                .with_context(|| format!("Could not parse {}={:?}", name, value))?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

fn clamp_feedback_delay(delay: Duration) -> Duration {
    if delay < MIN_FEEDBACK_DELAY {
        warn!(
            "Feedback delay of {:?} is too short to read, using {:?}",
            delay, MIN_FEEDBACK_DELAY
        );
        MIN_FEEDBACK_DELAY
    } else if delay > MAX_FEEDBACK_DELAY {
        warn!(
            "Feedback delay of {:?} is too long, using {:?}",
            delay, MAX_FEEDBACK_DELAY
        );
        MAX_FEEDBACK_DELAY
    } else {
        delay
    }
}
