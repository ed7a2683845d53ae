use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter directive for a `-v` count when `RUST_LOG` is unset.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "lump_decoder=debug,info",
        _ => "lump_decoder=trace,debug",
    }
}

/// Install the stderr subscriber.
///
/// `RUST_LOG` takes precedence over `-v`. A second call is a no-op.
pub fn init(verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_ladder() {
        assert_eq!(default_directive(0), "warn");
        assert!(default_directive(1).contains("debug"));
        assert!(default_directive(2).contains("trace"));
        assert_eq!(default_directive(7), default_directive(2));
    }

    #[test]
    fn directives_parse() {
        for v in 0..3 {
            EnvFilter::try_new(default_directive(v)).unwrap();
        }
    }
}
