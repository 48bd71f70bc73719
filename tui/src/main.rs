use clap::Parser;
use color_eyre::eyre::Result;
use flashdeck::{
    App,
    cli::{Args, ExportTarget, Startup},
    logging, preferences, terminal,
};
use flashdeck_core::{DatasetStats, export};
use flashdeck_loader::DatasetSource;
use log::{info, warn};
use std::fs::File;
use std::io::{BufWriter, stdout};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    match args.log_file.clone().or_else(logging::default_log_path) {
        Some(path) => {
            if let Err(err) = logging::init(&args.log_level, &path) {
                eprintln!("warning: cannot log to {}: {}", path.display(), err);
            }
        }
        None => eprintln!("warning: no home directory, logging disabled"),
    }

    let prefs = preferences::load_preferences();
    let startup = args.startup(&prefs);

    // one-shot modes work on the startup source without a terminal UI
    if args.stats || args.export.is_some() {
        let source = match startup {
            Startup::Load(source) => source,
            Startup::Prompt(path) => DatasetSource::File(path),
        };
        let dataset = source.load().await?;

        if let Some((format, target)) = args.export_target() {
            match target {
                ExportTarget::Stdout => export(&dataset, format, stdout().lock())?,
                ExportTarget::File(path) => {
                    export(&dataset, format, BufWriter::new(File::create(&path)?))?;
                    info!("[Export] Wrote {} export to {:?}", format, path);
                    println!("Wrote {} questions to {}", dataset.len(), path.display());
                }
            }
        } else {
            println!("{}", source);
            println!("{}", DatasetStats::collect(&dataset));
        }
        return Ok(());
    }

    let tty = ratatui::init();
    terminal::enable_mouse(&mut stdout(), ratatui::restore)?;
    let result = App::new(startup, args.mode, prefs).run(tty).await;
    if let Err(err) = terminal::disable_mouse(&mut stdout()) {
        warn!("[Main] Could not disable mouse capture: {}", err);
    }
    ratatui::restore();
    result
}
