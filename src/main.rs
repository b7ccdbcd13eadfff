//! flocknetd - scripted demo session for the flocknet core.

use flocknet::{Config, Network};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "flocknet.toml".to_string());

    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %config_path, error = %e, "using default configuration");
            Config::default()
        }
    };

    info!(network = %config.network.name, "starting flocknetd");
    let net = Network::from_config(&config);

    let alice = net.sign_up("alice", "hunter2")?;
    let bob = net.sign_up("bob", "sekret12")?;

    net.follow(&bob, &alice)?;

    net.publish_post(&alice, "Text", "hello, world", None, None)?;
    let picture = net.publish_post(&alice, "Image", "/tmp/sunset.png", None, None)?;
    let listing = net.publish_post(
        &alice,
        "Sale",
        "vintage synth",
        Some(1000.0),
        Some("Berlin"),
    )?;

    net.like(&listing, &bob)?;
    net.comment(&listing, &bob, "still available?")?;
    net.discount(&listing, 50.0, "hunter2")?;
    net.mark_sold(&listing, "hunter2")?;

    if let Err(e) = net.render(&picture) {
        warn!(error = %e, code = e.error_code(), "picture could not be rendered");
    }

    net.log_out("bob");

    println!("{}", net.describe());
    println!("{}", bob.read().inbox_report());
    for line in net.event_lines() {
        println!("{line}");
    }

    Ok(())
}
