use crate::session::session_settings::{ConditionallyRequiredSetting, IncorrectFormatForSetting};
use delegate::delegate;
use simple_error::SimpleError;
use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum FixerError {
    Simple(#[from] SimpleError),
    Io(#[from] io::Error),
    ConditionallyRequiredSetting(#[from] ConditionallyRequiredSetting),
    IncorrectFormatForSetting(#[from] IncorrectFormatForSetting),
}

impl Display for FixerError {
    delegate! {
        to match self {
            Self::Simple(err) => err,
            Self::Io(err) => err,
            Self::ConditionallyRequiredSetting(err) => err,
            Self::IncorrectFormatForSetting(err) => err,
        } {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult;
        }
    }
}

impl FixerError {
    pub fn new_conditionally_required(setting: &str) -> Self {
        Self::ConditionallyRequiredSetting(ConditionallyRequiredSetting {
            setting: setting.to_string(),
        })
    }

    pub fn new_incorrect_format_for_setting(setting: &str, string_val: &str) -> Self {
        Self::IncorrectFormatForSetting(IncorrectFormatForSetting {
            setting: setting.to_string(),
            value: string_val.to_string(),
            err: Box::new(simple_error!("invalid setting")),
        })
    }

    pub fn new_incorrect_format_for_setting_with_error(
        setting: &str,
        string_val: &str,
        err: Box<dyn Error + Send + Sync>,
    ) -> Self {
        Self::IncorrectFormatForSetting(IncorrectFormatForSetting {
            setting: setting.to_string(),
            value: string_val.to_string(),
            err,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SHOW_EVENTS;

    #[test]
    fn test_fixer_error_display() {
        struct TestCase {
            err: FixerError,
            expected: &'static str,
        }

        let tests = vec![
            TestCase {
                err: FixerError::new_conditionally_required(SHOW_EVENTS),
                expected: "Conditionally Required Setting: ShowEvents",
            },
            TestCase {
                err: FixerError::new_incorrect_format_for_setting(SHOW_EVENTS, "maybe"),
                expected: "maybe is invalid for ShowEvents",
            },
            TestCase {
                err: FixerError::from(simple_error!("no sessions declared")),
                expected: "no sessions declared",
            },
            TestCase {
                err: FixerError::from(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "settings truncated",
                )),
                expected: "settings truncated",
            },
        ];

        for test in tests.iter() {
            assert_eq!(test.expected, test.err.to_string());
        }
    }

    #[test]
    fn test_incorrect_format_keeps_source() {
        let err = FixerError::new_incorrect_format_for_setting_with_error(
            SHOW_EVENTS,
            "maybe",
            Box::new(simple_error!("expected Y or N")),
        );
        let cause = err.source().and_then(|inner| inner.source());
        assert!(cause.is_some(), "Expected the parse failure to be kept");
        assert_eq!("expected Y or N", cause.unwrap().to_string());
    }
}
