use blackspots::{pipeline, PipelineConfig};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
    info!("startup");

    // ─── 2) run once; every failure is reported, never propagated ────
    let config = PipelineConfig::default();
    println!("Connecting to NYC Safety Database...");
    let outcome = pipeline::run(&config);
    if let Err(err) = &outcome {
        error!(kind = %err.kind(), "{}", err);
    }
    for line in pipeline::report(&outcome) {
        println!("{line}");
    }
}
