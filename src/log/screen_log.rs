use crate::{
    config::{SHOW_EVENTS, SHOW_INCOMING, SHOW_OUTGOING},
    errors::FixerError,
    log::{LogEnum, LogFactoryTrait, LogTrait},
    session::{session_id::SessionID, session_settings::SessionSettings},
    settings::Settings,
};
use chrono::Utc;
use log::{debug, warn};
use memmem::{Searcher, TwoWaySearcher};
use parking_lot::{const_mutex, Mutex};
use std::{
    io::{self, Write},
    sync::Arc,
};

const GLOBAL_PREFIX: &str = "GLOBAL";
const UTC_TIMESTAMP_NANOS_FORMAT: &str = "%Y%m%d-%H:%M:%S%.9f";

// HEARTBEAT_MSG_TYPE is the MsgType field of a Heartbeat as it appears on the wire.
const HEARTBEAT_MSG_TYPE: &[u8] = b"35=0";
const SOH: u8 = 0x01;

// SCREEN_LOG_MUTEX is shared by every ScreenLog so records from concurrent sessions never interleave.
pub static SCREEN_LOG_MUTEX: Mutex<()> = const_mutex(());

// is_heartbeat reports whether the raw message contains the heartbeat MsgType anywhere in its content.
pub fn is_heartbeat(data: &[u8]) -> bool {
    data.len() >= HEARTBEAT_MSG_TYPE.len()
        && TwoWaySearcher::new(HEARTBEAT_MSG_TYPE)
            .search_in(data)
            .is_some()
}

// replace_soh_with_pipe returns a copy of data with every field delimiter shown as '|'.
pub fn replace_soh_with_pipe(data: &[u8]) -> Vec<u8> {
    data.iter()
        .map(|&b| if b == SOH { b'|' } else { b })
        .collect()
}

// ScreenOutput is the destination ScreenLog records are written to.
#[derive(Debug, Clone, Default)]
pub enum ScreenOutput {
    #[default]
    Stdout,
    Memory(Arc<Mutex<Vec<u8>>>),
}

impl ScreenOutput {
    // memory creates an in-memory destination, shared between clones.
    pub fn memory() -> Self {
        ScreenOutput::Memory(Arc::new(Mutex::new(Vec::new())))
    }

    // contents returns everything written so far to a memory destination.
    pub fn contents(&self) -> Vec<u8> {
        match self {
            ScreenOutput::Stdout => Vec::new(),
            ScreenOutput::Memory(buffer) => buffer.lock().clone(),
        }
    }

    fn write_all(&self, record: &[u8]) -> io::Result<()> {
        match self {
            ScreenOutput::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(record)?;
                stdout.flush()
            }
            ScreenOutput::Memory(buffer) => {
                buffer.lock().extend_from_slice(record);
                Ok(())
            }
        }
    }
}

// ScreenLogFlags selects which record categories a ScreenLog emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLogFlags {
    pub incoming: bool,
    pub outgoing: bool,
    pub event: bool,
}

impl ScreenLogFlags {
    pub fn new(incoming: bool, outgoing: bool, event: bool) -> Self {
        ScreenLogFlags {
            incoming,
            outgoing,
            event,
        }
    }
}

impl Default for ScreenLogFlags {
    fn default() -> Self {
        ScreenLogFlags::new(true, true, true)
    }
}

pub struct ScreenLog {
    prefix: String,
    flags: ScreenLogFlags,
    output: ScreenOutput,
}

impl ScreenLog {
    // new creates the global screen log.
    pub fn new(flags: ScreenLogFlags) -> Self {
        ScreenLog {
            prefix: String::from(GLOBAL_PREFIX),
            flags,
            output: ScreenOutput::Stdout,
        }
    }

    // new_session creates a screen log prefixed with the session id.
    pub fn new_session(session_id: &SessionID, flags: ScreenLogFlags) -> Self {
        ScreenLog {
            prefix: session_id.to_string(),
            flags,
            output: ScreenOutput::Stdout,
        }
    }

    pub fn with_output(mut self, output: ScreenOutput) -> Self {
        self.output = output;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn flags(&self) -> ScreenLogFlags {
        self.flags
    }

    fn write_record(&self, kind: &str, data: &[u8]) {
        let body = replace_soh_with_pipe(data);

        let _guard = SCREEN_LOG_MUTEX.lock();
        let log_time = Utc::now();

        let mut record = format!(
            "<{}, {}, {}>\n  (",
            log_time.format(UTC_TIMESTAMP_NANOS_FORMAT),
            &self.prefix,
            kind
        )
        .into_bytes();
        record.extend_from_slice(&body);
        record.extend_from_slice(b")\n");

        if let Err(err) = self.output.write_all(&record) {
            warn!("screen log {} failed to write {} record: {}", &self.prefix, kind, err);
        }
    }
}

impl LogTrait for ScreenLog {
    fn on_incoming(&self, data: &[u8]) {
        if !self.flags.incoming || is_heartbeat(data) {
            return;
        }
        self.write_record("incoming", data);
    }

    fn on_outgoing(&self, data: &[u8]) {
        if !self.flags.outgoing || is_heartbeat(data) {
            return;
        }
        self.write_record("outgoing", data);
    }

    fn on_event(&self, data: &str) {
        if !self.flags.event {
            return;
        }
        self.write_record("event", data.as_bytes());
    }

    fn clear(&self) {}

    fn backup(&self) {}
}

enum FlagSource {
    // flags resolved per scope from ShowIncoming, ShowOutgoing and ShowEvents
    Settings(Arc<Settings>),
    Fixed(ScreenLogFlags),
}

pub struct ScreenLogFactory {
    flag_source: FlagSource,
    output: ScreenOutput,
}

impl Default for ScreenLogFactory {
    fn default() -> Self {
        ScreenLogFactory::new(true, true, true)
    }
}

impl ScreenLogFactory {
    // new creates an instance of LogFactory that writes messages and events to stdout,
    // applying the same flags to every log it creates.
    pub fn new(incoming: bool, outgoing: bool, event: bool) -> Self {
        ScreenLogFactory {
            flag_source: FlagSource::Fixed(ScreenLogFlags::new(incoming, outgoing, event)),
            output: ScreenOutput::Stdout,
        }
    }

    // with_settings creates an instance of LogFactory that writes messages and events to stdout,
    // reading ShowIncoming, ShowOutgoing and ShowEvents from the global or session settings.
    // Returns an error if any of those settings is not a boolean.
    pub fn with_settings(settings: Arc<Settings>) -> Result<Self, FixerError> {
        validate_flags(settings.global_settings())?;
        for session_settings in settings.session_settings().values() {
            validate_flags(session_settings)?;
        }

        Ok(ScreenLogFactory {
            flag_source: FlagSource::Settings(settings),
            output: ScreenOutput::Stdout,
        })
    }

    pub fn with_output(mut self, output: ScreenOutput) -> Self {
        self.output = output;
        self
    }

    fn flags_for(&self, session_id: Option<&SessionID>) -> ScreenLogFlags {
        let settings = match &self.flag_source {
            FlagSource::Fixed(flags) => return *flags,
            FlagSource::Settings(settings) => settings,
        };

        match session_id {
            None => init(settings.global_settings()),
            Some(session_id) => init(
                &settings
                    .session_settings_for(session_id)
                    .unwrap_or_default(),
            ),
        }
    }
}

impl LogFactoryTrait for ScreenLogFactory {
    fn create(&self) -> LogEnum {
        let flags = self.flags_for(None);
        debug!("creating {} screen log with {:?}", GLOBAL_PREFIX, flags);
        ScreenLog::new(flags)
            .with_output(self.output.clone())
            .into()
    }

    fn create_session_log(&self, session_id: &SessionID) -> LogEnum {
        let flags = self.flags_for(Some(session_id));
        debug!("creating {} screen log with {:?}", session_id, flags);
        ScreenLog::new_session(session_id, flags)
            .with_output(self.output.clone())
            .into()
    }

    fn destroy(&self, log: LogEnum) {
        if let LogEnum::ScreenLog(screen_log) = &log {
            debug!("destroying {} screen log", screen_log.prefix());
        }
        drop(log);
    }
}

fn validate_flags(settings: &SessionSettings) -> Result<(), FixerError> {
    for setting in [SHOW_INCOMING, SHOW_OUTGOING, SHOW_EVENTS] {
        if settings.has_setting(setting) {
            settings.bool_setting(setting)?;
        }
    }
    Ok(())
}

// init resolves flags from a settings scope, every category enabled unless overridden.
fn init(settings: &SessionSettings) -> ScreenLogFlags {
    let mut flags = ScreenLogFlags::default();

    for (setting, flag) in [
        (SHOW_INCOMING, &mut flags.incoming),
        (SHOW_OUTGOING, &mut flags.outgoing),
        (SHOW_EVENTS, &mut flags.event),
    ] {
        if !settings.has_setting(setting) {
            continue;
        }

        match settings.bool_setting(setting) {
            Ok(value) => *flag = value,
            Err(err) => warn!("ignoring {}: {}", setting, err),
        }
    }

    flags
}
