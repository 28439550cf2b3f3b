//! Adapters — the boundary surfaces around the control core.
//!
//! | Adapter           | Role                                     |
//! |-------------------|------------------------------------------|
//! | `log_sink`        | EventSink → serial log output            |
//! | `loopback`        | single-open diagnostic byte buffer       |
//! | `status`          | formatted temperature status line        |
//! | `threshold_attrs` | decimal-text threshold attribute surface |

pub mod log_sink;
pub mod loopback;
pub mod status;
pub mod threshold_attrs;
