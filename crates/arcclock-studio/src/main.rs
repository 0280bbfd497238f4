mod args;
mod face_app;

use anyhow::{Context, Result};
use clap::Parser;
use winit::dpi::LogicalSize;

use arcclock_engine::device::GpuInit;
use arcclock_engine::logging::{init_logging, LoggingConfig};
use arcclock_engine::window::{Runtime, RuntimeConfig};
use arcclock_face::ClockDriver;

use crate::args::Args;
use crate::face_app::FaceApp;

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log_filter.clone(),
        ..LoggingConfig::default()
    });

    let mut driver = ClockDriver::local();
    if let Some(t) = args.time {
        driver
            .set_clock_time(t.hours, t.minutes, t.seconds, t.milliseconds)
            .context("invalid --time")?;
    }

    let surface = driver.layout().surface;
    let config = RuntimeConfig {
        title: args.title,
        initial_size: LogicalSize::new(surface.width as f64, surface.height as f64),
        ..RuntimeConfig::default()
    };
    let gpu_init = GpuInit::default().with_present_mode(args.pacing.present_mode());

    log::info!("starting clock ({:?} pacing)", args.pacing);

    Runtime::run(config, gpu_init, FaceApp::new(driver)).context("clock window failed")
}
