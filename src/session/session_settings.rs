use crate::errors::FixerError;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

// ConditionallyRequiredSetting indicates a missing setting
#[derive(Debug)]
pub struct ConditionallyRequiredSetting {
    pub setting: String,
}

impl Display for ConditionallyRequiredSetting {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Conditionally Required Setting: {}", self.setting)
    }
}

impl Error for ConditionallyRequiredSetting {}

// IncorrectFormatForSetting indicates a setting that is incorrectly formatted
#[derive(Debug)]
pub struct IncorrectFormatForSetting {
    pub setting: String,
    pub value: String,
    pub err: Box<dyn Error + Send + Sync>,
}

impl Display for IncorrectFormatForSetting {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} is invalid for {}", self.value, self.setting)
    }
}

impl Error for IncorrectFormatForSetting {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.err.as_ref())
    }
}

// SessionSettings maps session settings to values with typed accessors.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    settings: HashMap<String, String>,
}

impl SessionSettings {
    // new returns a newly initialized SessionSettings instance
    pub fn new() -> Self {
        SessionSettings {
            settings: hashmap! {},
        }
    }

    // set assigns a value to a setting on SessionSettings.
    pub fn set(&mut self, setting: String, val: String) {
        let _ = self.settings.insert(setting, val);
    }

    // has_setting returns true if a setting is set, false if not
    pub fn has_setting(&self, setting: &str) -> bool {
        self.settings.contains_key(setting)
    }

    // setting is a settings string accessor. Returns an error if the setting is missing.
    pub fn setting(&self, setting: &str) -> Result<String, FixerError> {
        self.settings
            .get(setting)
            .cloned()
            .ok_or_else(|| FixerError::new_conditionally_required(setting))
    }

    // bool_setting returns the requested setting parsed as a boolean.  Returns an error if the setting is not set or cannot be parsed as a bool.
    pub fn bool_setting(&self, setting: &str) -> Result<bool, FixerError> {
        let string_val = self.setting(setting)?;

        match string_val.as_ref() {
            "Y" | "y" => Ok(true),
            "N" | "n" => Ok(false),
            _ => Err(FixerError::new_incorrect_format_for_setting_with_error(
                setting,
                &string_val,
                Box::new(simple_error!("expected Y or N")),
            )),
        }
    }

    // overlay copies every setting of overlay on top of these settings.
    pub fn overlay(&mut self, overlay: &SessionSettings) {
        for (k, v) in overlay.settings.iter() {
            let _ = self.settings.insert(k.clone(), v.clone());
        }
    }
}
