use crate::{
    config::{
        BEGIN_STRING, SENDER_COMP_ID, SENDER_LOCATION_ID, SENDER_SUB_ID, SESSION_QUALIFIER,
        TARGET_COMP_ID, TARGET_LOCATION_ID, TARGET_SUB_ID,
    },
    errors::FixerError,
    session::{session_id::SessionID, session_settings::SessionSettings},
    BEGIN_STRING_FIX40, BEGIN_STRING_FIX41, BEGIN_STRING_FIX42, BEGIN_STRING_FIX43,
    BEGIN_STRING_FIX44, BEGIN_STRING_FIXT11,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::{collections::HashMap, sync::Arc};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub static BLANK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*$").unwrap());
pub static COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*#.*").unwrap());
pub static DEFAULT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[(?i)DEFAULT\]\s*$").unwrap());
pub static SESSION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[(?i)SESSION\]\s*$").unwrap());
pub static SETTING_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([^=]*)=(.*)$").unwrap());

// Scope tracks which section of a settings file is being read.
enum Scope {
    Unset,
    Global,
    Session(SessionSettings),
}

// The Settings type represents a collection of global and session settings.
#[derive(Default, Debug, Clone)]
pub struct Settings {
    global_settings: SessionSettings,
    session_settings: HashMap<Arc<SessionID>, SessionSettings>,
}

impl Settings {
    // new creates a Settings instance.
    pub fn new() -> Self {
        Self::default()
    }

    // parse creates and initializes a Settings instance with config parsed from a Reader.
    // Returns error if the config is has parse errors.
    pub async fn parse<F>(reader: F) -> Result<Self, FixerError>
    where
        F: AsyncBufRead,
    {
        let mut s = Settings::new();
        let mut scope = Scope::Unset;
        let mut line_number = 0;

        let mut lines = Box::pin(reader).lines();

        while let Some(line) = lines.next_line().await? {
            line_number += 1;

            if COMMENT_REGEX.is_match(&line) || BLANK_REGEX.is_match(&line) {
                continue;
            }

            if DEFAULT_REGEX.is_match(&line) || SESSION_REGEX.is_match(&line) {
                if let Scope::Session(session_settings) = scope {
                    s.add_session(session_settings)?;
                }

                scope = if DEFAULT_REGEX.is_match(&line) {
                    Scope::Global
                } else {
                    Scope::Session(SessionSettings::new())
                };
                continue;
            }

            let parts = SETTING_REGEX
                .captures(&line)
                .ok_or_else(|| simple_error!("error parsing line: {}", line_number))?;

            let key = parts.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
            let val = parts.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
            if key.is_empty() {
                return Err(simple_error!(
                    "error parsing line: {}, missing setting name",
                    line_number
                )
                .into());
            }

            match scope {
                Scope::Global => s.global_settings.set(key.to_string(), val.to_string()),
                Scope::Session(ref mut session_settings) => {
                    session_settings.set(key.to_string(), val.to_string())
                }
                Scope::Unset => {
                    return Err(simple_error!(
                        "error parsing line: {}, setting outside of a section",
                        line_number
                    )
                    .into());
                }
            }
        }

        if let Scope::Session(session_settings) = scope {
            s.add_session(session_settings)?;
        }

        if s.session_settings.is_empty() {
            return Err(simple_error!("no sessions declared").into());
        }

        Ok(s)
    }

    // global_settings are default setting inherited by all session settings.
    pub fn global_settings(&self) -> &SessionSettings {
        &self.global_settings
    }

    pub fn global_settings_mut(&mut self) -> &mut SessionSettings {
        &mut self.global_settings
    }

    // session_settings return all session settings overlaying globalsettings.
    pub fn session_settings(&self) -> HashMap<Arc<SessionID>, SessionSettings> {
        self.session_settings
            .iter()
            .map(|(session_id, settings)| {
                let mut overlaid = self.global_settings.clone();
                overlaid.overlay(settings);
                (session_id.clone(), overlaid)
            })
            .collect()
    }

    // session_settings_for returns the settings of one session overlaying globalsettings,
    // or None when the session is not configured.
    pub fn session_settings_for(&self, session_id: &SessionID) -> Option<SessionSettings> {
        let settings = self.session_settings.get(session_id)?;
        let mut overlaid = self.global_settings.clone();
        overlaid.overlay(settings);
        Some(overlaid)
    }

    // add_session adds Session Settings to Settings instance. Returns an error if session settings with duplicate sessionID has already been added.
    pub fn add_session(
        &mut self,
        session_settings: SessionSettings,
    ) -> Result<Arc<SessionID>, FixerError> {
        let session_id =
            session_id_from_session_settings(&self.global_settings, &session_settings);

        match session_id.begin_string.as_str() {
            BEGIN_STRING_FIX40 | BEGIN_STRING_FIX41 | BEGIN_STRING_FIX42 | BEGIN_STRING_FIX43
            | BEGIN_STRING_FIX44 | BEGIN_STRING_FIXT11 => {}
            _ => {
                return Err(
                    simple_error!("BeginString must be FIX.4.0 to FIX.4.4 or FIXT.1.1").into(),
                );
            }
        }

        if self.session_settings.contains_key(&session_id) {
            return Err(simple_error!("duplicate session configured for {}", session_id).into());
        }

        self.session_settings
            .insert(session_id.clone(), session_settings);

        Ok(session_id)
    }
}

fn session_id_from_session_settings(
    global_settings: &SessionSettings,
    session_settings: &SessionSettings,
) -> Arc<SessionID> {
    let mut session_id = SessionID::default();

    for settings in [global_settings, session_settings] {
        let fields: [(&str, &mut String); 8] = [
            (BEGIN_STRING, &mut session_id.begin_string),
            (TARGET_COMP_ID, &mut session_id.target_comp_id),
            (TARGET_SUB_ID, &mut session_id.target_sub_id),
            (TARGET_LOCATION_ID, &mut session_id.target_location_id),
            (SENDER_COMP_ID, &mut session_id.sender_comp_id),
            (SENDER_SUB_ID, &mut session_id.sender_sub_id),
            (SENDER_LOCATION_ID, &mut session_id.sender_location_id),
            (SESSION_QUALIFIER, &mut session_id.qualifier),
        ];

        for (setting, field) in fields {
            if let Ok(value) = settings.setting(setting) {
                *field = value;
            }
        }
    }

    Arc::new(session_id)
}
