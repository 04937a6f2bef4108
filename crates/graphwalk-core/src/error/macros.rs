//! Error macros for graphwalk

/// Macro for returning an unknown vertex error
#[macro_export]
macro_rules! bail_unknown_vertex {
    ($vertex:expr) => {
        return Err($crate::error::GraphError::unknown_vertex($vertex))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}
