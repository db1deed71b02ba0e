//! API middleware stack.
//!
//! Execution order (outermost → innermost):
//! 1. CORS — answers preflight requests
//! 2. Request log — times every request and appends it to the log store

pub mod request_log;
