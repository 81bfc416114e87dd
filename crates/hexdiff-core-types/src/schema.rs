//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Comparison settings
pub const FIELD_SKIP1: &str = "skip1";
pub const FIELD_SKIP2: &str = "skip2";
pub const FIELD_MAX_LEN: &str = "max_len";

// Comparison counters
pub const FIELD_CHUNKS: &str = "chunks";
pub const FIELD_BYTES_COMPARED: &str = "bytes_compared";
pub const FIELD_DIFFERING_CHUNKS: &str = "differing_chunks";
pub const FIELD_STOP: &str = "stop";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
