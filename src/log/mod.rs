use crate::session::session_id::SessionID;
use enum_dispatch::enum_dispatch;
use null_log::{NullLog, NullLogFactory};
use ramhorns::Template;
use screen_log::{ScreenLog, ScreenLogFactory};
use std::collections::HashMap;

pub mod null_log;
pub mod screen_log;

// Log is a generic trait for logging FIX messages and events.
// Implementations never report failures to the caller.
#[enum_dispatch]
pub trait LogTrait {
    // on_incoming log incoming fix message
    fn on_incoming(&self, data: &[u8]);

    // on_outgoing log outgoing fix message
    fn on_outgoing(&self, data: &[u8]);

    // on_event log fix event
    fn on_event(&self, data: &str);

    // on_eventf log fix event according to format specifier
    fn on_eventf(&self, format: &str, params: HashMap<String, String>) {
        match Template::new(format) {
            Ok(tpl) => self.on_event(&tpl.render(&params)),
            Err(err) => {
                log::warn!("unable to render event template {:?}: {}", format, err);
                self.on_event(format);
            }
        }
    }

    // clear erases persisted log content
    fn clear(&self);

    // backup archives persisted log content
    fn backup(&self);
}

// The LogFactory trait creates global and session specific Log instances
#[enum_dispatch]
pub trait LogFactoryTrait {
    // create global log
    fn create(&self) -> LogEnum;

    // create_session_log session specific log
    fn create_session_log(&self, session_id: &SessionID) -> LogEnum;

    // destroy releases a log created by this factory
    fn destroy(&self, log: LogEnum) {
        drop(log);
    }
}

#[enum_dispatch(LogTrait)]
pub enum LogEnum {
    NullLog,
    ScreenLog,
}

#[enum_dispatch(LogFactoryTrait)]
pub enum LogFactoryEnum {
    NullLogFactory,
    ScreenLogFactory,
}
