use crate::log::{LogEnum, LogFactoryEnum, LogFactoryTrait, LogTrait};
use crate::session::session_id::SessionID;
use std::collections::HashMap;

pub struct NullLog;

impl LogTrait for NullLog {
    fn on_incoming(&self, _data: &[u8]) {}
    fn on_outgoing(&self, _data: &[u8]) {}
    fn on_event(&self, _data: &str) {}
    fn on_eventf(&self, _format: &str, _params: HashMap<String, String>) {}
    fn clear(&self) {}
    fn backup(&self) {}
}

pub struct NullLogFactory;

impl NullLogFactory {
    // new creates an instance of LogFactory that returns no-op loggers.
    pub fn new() -> LogFactoryEnum {
        LogFactoryEnum::NullLogFactory(NullLogFactory)
    }
}

impl LogFactoryTrait for NullLogFactory {
    fn create(&self) -> LogEnum {
        LogEnum::NullLog(NullLog)
    }

    fn create_session_log(&self, _session_id: &SessionID) -> LogEnum {
        LogEnum::NullLog(NullLog)
    }
}
