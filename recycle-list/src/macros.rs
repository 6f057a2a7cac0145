//! Crate-private logging shims.
//!
//! With the `tracing` feature every call becomes a `tracing` event under the `recycle_list`
//! target. Without it the calls expand to nothing and their arguments are never evaluated.

#[cfg(feature = "tracing")]
macro_rules! rlog {
    ($level:ident, $($tt:tt)*) => {
        tracing::event!(target: "recycle_list", tracing::Level::$level, $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! rlog {
    ($level:ident, $($tt:tt)*) => {};
}

/// Per-layout and per-scroll detail.
macro_rules! rtrace {
    ($($tt:tt)*) => {
        rlog!(TRACE, $($tt)*)
    };
}

/// Construction, option changes and pool growth.
macro_rules! rdebug {
    ($($tt:tt)*) => {
        rlog!(DEBUG, $($tt)*)
    };
}

/// Host misuse that the list recovers from.
macro_rules! rwarn {
    ($($tt:tt)*) => {
        rlog!(WARN, $($tt)*)
    };
}
