use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log to stderr so stdout stays clean for the seat mapping.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "seatplan_logic=debug,seatplan_simtest=debug,info"
    } else {
        "seatplan_logic=warn,seatplan_simtest=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
