pub mod text;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// Leaves any subscriber the host application already installed in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "budget_chart=info".parse() {
            filter = filter.add_directive(directive);
        }

        let _ = fmt().with_env_filter(filter).try_init();
    });
}

/// Rounds to two decimal places, resolving ties on the exact binary value.
pub(crate) fn round_cents(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
