//! Canonical logging macros
//!
//! Operation boundaries for callers that drive the engine (the CLI, flow
//! adapters). Field names come from `errlens_core::schema`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use errlens_core::log_op_start;
/// log_op_start!("classify");
/// log_op_start!("classify", hint = "sap");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use errlens_core::log_op_end;
/// log_op_end!("classify", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error; `$err` must expose `code()` and `Display`
///
/// # Example
///
/// ```
/// # use errlens_core::{log_op_error, errors::LensError};
/// let err = LensError::UnknownShape { id: "mainframe".to_string() };
/// log_op_error!("classify", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let err = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.code = err.code(),
            err.message = %err,
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let err = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.code = err.code(),
            err.message = %err,
            $($field)*
        );
    }};
}
