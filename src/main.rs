//! # Rangeline Main Entry Point
//!
//! Runs a scripted picker session: input events come from a script file or
//! stdin, the control is rendered as one line after every event and the
//! host notifications are echoed as they fire.

use anyhow::{Context, Result};
use rangeline::cmd_args::CommandLineArgs;
use rangeline::config::{self, PickerSettings};
use rangeline::{
    ChronoAdapter, PickerEvent, RangeController, ScriptEventSource, SessionController,
    TextRenderer,
};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(config::LOG_LEVEL_ENV_VAR).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

fn print_event(event: &PickerEvent<chrono::NaiveDate>) {
    match event {
        PickerEvent::Change { texts, .. } => println!("change: {:?}", texts),
        PickerEvent::CalendarChange { texts, .. } => println!("calendar-change: {:?}", texts),
        PickerEvent::OpenChange { open } => println!("open-change: {}", open),
        PickerEvent::Focus { slot } => println!("focus: {}", slot.name()),
        PickerEvent::Blur { slot } => println!("blur: {}", slot.name()),
    }
}

fn run_session<R: BufRead>(settings: PickerSettings, reader: R) -> Result<usize> {
    let adapter = ChronoAdapter::new();
    let source = ScriptEventSource::new(reader, adapter, &settings.locale, settings.parse_formats());
    let options = settings.into_options(&adapter)?;

    let mut controller = RangeController::new(adapter, options);
    controller.subscribe(Box::new(print_event));

    let renderer = TextRenderer::with_writer(io::stdout());
    SessionController::new(controller, source, renderer).run()
}

fn main() -> Result<()> {
    let args = CommandLineArgs::parse();
    init_tracing(args.verbose());

    let config_path = args
        .config()
        .map(|path| shellexpand::tilde(path).into_owned())
        .unwrap_or_else(config::get_config_path);
    let settings = PickerSettings::load(&config_path)?;

    let processed = match args.script() {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open script {}", path))?;
            run_session(settings, BufReader::new(file))?
        }
        None => run_session(settings, io::stdin().lock())?,
    };

    tracing::info!("Processed {} events", processed);
    Ok(())
}
