use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use application::{AssociationManager, PollChannel, SensorPoller, build_devices};
use domain::{GenericSubscriber, Subscriber};
use infrastructure::{driver_for, load_device_table, validate_rows};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the device table (CSV with Tipo/Tag/Descrição/Unidade/Dispositivo columns)
    #[arg(long, default_value = "config/devices.csv")]
    table: String,

    /// Poll cadence in milliseconds
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,
}

async fn run() -> Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,field_monitor=debug,domain=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🤖 Fieldwatch Monitor Starting...");
    info!("🆔 Process ID: {}", std::process::id());

    let args = Args::parse();

    // Portable directory discovery
    // Check if we are in development environment (run from workspace root)
    let dev_base = "crates/field-monitor";
    let base_dir = if Path::new(dev_base).exists() {
        dev_base
    } else {
        "."
    };

    let table_path = if Path::new(&args.table).is_absolute() {
        args.table.clone()
    } else {
        format!("{}/{}", base_dir, args.table)
    };
    info!("📂 Device table: {}", table_path);

    let rows = load_device_table(&table_path)?;
    info!("📋 Loaded {} row(s) from the device table", rows.len());

    let report = validate_rows(&rows);
    if report.is_valid() {
        info!("✅ Device table passed validation");
    } else {
        for violation in report.violations() {
            warn!("Device table: {}", violation);
        }
    }

    let devices = build_devices(&rows);
    if devices.is_empty() {
        anyhow::bail!("Device table {} holds no usable analog inputs", table_path);
    }
    info!("✅ Built {} analog input(s)", devices.len());

    // Wire a control-room subscriber to every analog input
    let manager = AssociationManager::new(devices);
    let control_room = Rc::new(GenericSubscriber::new("control-room"));
    for device in manager.devices() {
        manager.associate(device.tag(), &control_room)?;
    }

    let channels: Vec<PollChannel> = manager
        .devices()
        .iter()
        .map(|device| PollChannel::new(Rc::clone(device), driver_for(device)))
        .collect();
    let mut poller = SensorPoller::new(channels, Duration::from_millis(args.interval_ms));

    // Shutdown signal
    let cancel = CancellationToken::new();
    let watcher = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("🛑 Shutting down..."),
            Err(err) => warn!(error = %err, "Unable to listen for shutdown signal"),
        }
        watcher.cancel();
    });

    poller.run(cancel).await?;

    info!(
        "📋 Subscriber '{}' received {} notification(s). Last entries:",
        control_room.name(),
        control_room.notifications().len()
    );
    for entry in control_room.recent(5) {
        info!("  {}", entry);
    }

    info!("👋 Good bye!");
    Ok(())
}

fn main() {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build runtime");
    if let Err(e) = rt.block_on(run()) {
        eprintln!("\n❌ CRITICAL ERROR: {:?}", e);
        std::process::exit(1);
    }
}
