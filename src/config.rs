// Setting keys recognized in the [DEFAULT] and [SESSION] scopes of a settings file.

// BEGIN_STRING sets the session FIX version, FIX.4.0 through FIX.4.4 or FIXT.1.1.
pub const BEGIN_STRING: &str = "BeginString";
pub const SENDER_COMP_ID: &str = "SenderCompID";
pub const SENDER_SUB_ID: &str = "SenderSubID";
pub const SENDER_LOCATION_ID: &str = "SenderLocationID";
pub const TARGET_COMP_ID: &str = "TargetCompID";
pub const TARGET_SUB_ID: &str = "TargetSubID";
pub const TARGET_LOCATION_ID: &str = "TargetLocationID";
// SESSION_QUALIFIER disambiguates sessions that share the same comp ids.
pub const SESSION_QUALIFIER: &str = "SessionQualifier";

// SHOW_INCOMING toggles screen logging of received messages. Valid values: Y, N.
pub const SHOW_INCOMING: &str = "ShowIncoming";
// SHOW_OUTGOING toggles screen logging of sent messages. Valid values: Y, N.
pub const SHOW_OUTGOING: &str = "ShowOutgoing";
// SHOW_EVENTS toggles screen logging of session events. Valid values: Y, N.
pub const SHOW_EVENTS: &str = "ShowEvents";
