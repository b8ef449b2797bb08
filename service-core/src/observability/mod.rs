pub mod logging;
pub mod propagation;

pub use logging::{init_tracing, shutdown_tracing};
pub use propagation::{
    PropagateTraceContext, TRACEPARENT_HEADER, TRACESTATE_HEADER, inject_trace_context,
};
