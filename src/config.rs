//! Page-level settings. Defaults match the stock page; the canvas element can
//! override them with `data-*` attributes.

use std::str::FromStr;

use crate::controller::DEFAULT_GAIN;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    /// Id of the `<canvas>` element to render into.
    pub canvas_id: String,
    pub gain: f64,
    pub initial_tween: f64,
    pub log_level: log::Level,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            canvas_id: "c".to_string(),
            gain: DEFAULT_GAIN,
            initial_tween: 1.0,
            log_level: log::Level::Info,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gain.is_finite() || self.gain <= 0.0 {
            return Err(ConfigError::Gain(self.gain));
        }
        if !(0.0..=1.0).contains(&self.initial_tween) {
            return Err(ConfigError::InitialTween(self.initial_tween));
        }
        Ok(())
    }

    /// Apply a single `key = value` override. Keys are the dataset names
    /// without the `data-` prefix. Unknown keys are ignored.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut next = self.clone();
        match key {
            "gain" => next.gain = parse("gain", value)?,
            "initialTween" | "initial-tween" => {
                next.initial_tween = parse("initial-tween", value)?
            }
            "logLevel" | "log-level" => next.log_level = parse("log-level", value)?,
            _ => return Ok(()),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    /// Apply overrides one by one, keeping the previous value for any that are
    /// rejected. Returns the rejections.
    pub fn with_overrides<'a, I>(mut self, pairs: I) -> (Self, Vec<ConfigError>)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut rejected = Vec::new();
        for (key, value) in pairs {
            if let Err(err) = self.apply_override(key, value) {
                rejected.push(err);
            }
        }
        (self, rejected)
    }
}

/// Dataset keys the canvas element may carry (`data-gain`, ...).
pub const DATASET_KEYS: [&str; 3] = ["gain", "initialTween", "logLevel"];

#[cfg(target_arch = "wasm32")]
impl FieldConfig {
    /// Apply the overrides found on an element's `dataset`.
    pub fn with_dataset(self, dataset: &web_sys::DomStringMap) -> (Self, Vec<ConfigError>) {
        let pairs: Vec<(&str, String)> = DATASET_KEYS
            .into_iter()
            .filter_map(|key| dataset.get(key).map(|value| (key, value)))
            .collect();
        self.with_overrides(pairs.iter().map(|(k, v)| (*k, v.as_str())))
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Parse {
        key,
        value: value.to_string(),
    })
}
