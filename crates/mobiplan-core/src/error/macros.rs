//! Error macros for mobiplan

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::MobiplanError::invalid_value($context, $value))
    };
}

/// Macro for returning usage errors, with `format!` arguments
#[macro_export]
macro_rules! bail_usage {
    ($($arg:tt)*) => {
        return Err($crate::error::MobiplanError::usage(format!($($arg)*)))
    };
}

/// Macro for rejecting a graph that breaks its structural invariants
#[macro_export]
macro_rules! bail_graph {
    ($($arg:tt)*) => {
        return Err($crate::error::MobiplanError::invalid_graph(format!($($arg)*)))
    };
}
