// src/sim/harness.rs - Drives the plugin with a synthetic print so the
// emitted M117 stream can be observed end to end.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use clap::Parser;
use tokio::sync::mpsc;

use lazy_progress::{
    config, FileOrigin, HostError, HostInterface, HostNotification, PrintEvent, PrintProgressData,
    StatusController,
};

#[derive(Parser, Debug)]
#[command(name = "progress_sim", about = "Simulate a print against the status plugin")]
struct Args {
    /// Plugin configuration file
    #[arg(long, default_value = "lazy_progress.toml")]
    config: String,

    /// Number of progress ticks to simulate
    #[arg(long, default_value_t = 20)]
    ticks: u32,

    /// Simulated total print time in seconds
    #[arg(long, default_value_t = 5400.0)]
    print_time: f64,
}

/// Stand-in for the host: logs every submitted command.
struct SimHost {
    printing: AtomicBool,
}

#[async_trait]
impl HostInterface for SimHost {
    fn is_printing(&self) -> bool {
        self.printing.load(Ordering::Relaxed)
    }

    async fn send_command(&self, gcode: &str) -> Result<(), HostError> {
        tracing::info!("printer << {}", gcode);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    let config = config::load_config(&args.config)?;

    let host = Arc::new(SimHost {
        printing: AtomicBool::new(false),
    });
    let (tx, rx) = mpsc::channel::<HostNotification>(16);
    let controller = StatusController::new(host.clone(), config);
    let plugin = tokio::spawn(lazy_progress::run(controller, rx));

    let path = "benchy.gcode".to_string();
    tx.send(HostNotification::Event(PrintEvent::Started {
        origin: FileOrigin::Local,
        path: path.clone(),
    }))
    .await?;
    host.printing.store(true, Ordering::Relaxed);

    for i in 1..=args.ticks {
        let elapsed = args.print_time * f64::from(i) / f64::from(args.ticks);
        tx.send(HostNotification::CurrentData(PrintProgressData {
            completion: Some(100.0 * f64::from(i) / f64::from(args.ticks)),
            print_time: Some(elapsed),
            print_time_left: Some(args.print_time - elapsed),
        }))
        .await?;
        tx.send(HostNotification::ProgressTick {
            storage: FileOrigin::Local,
            path: path.clone(),
            progress: (100 * i / args.ticks) as u8,
        })
        .await?;
    }

    host.printing.store(false, Ordering::Relaxed);
    tx.send(HostNotification::Event(PrintEvent::Done {
        origin: FileOrigin::Local,
        path,
    }))
    .await?;

    drop(tx);
    plugin.await?;
    Ok(())
}
