use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use log::info;
use simplelog::{ConfigBuilder, WriteLogger};

use tickoff::core::config::{self, CliOverrides, EnvOverrides, ResolvedConfig};
use tickoff::core::persistence::{PersistenceAdapter, SaveWorker};
use tickoff::core::state::App;
use tickoff::core::storage::FileStore;
use tickoff::core::store::TodoStore;
use tickoff::tui;

#[derive(Parser)]
#[command(name = "tickoff", about = "A single-screen to-do list")]
struct Args {
    /// Directory the todo list is stored in
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(short, long)]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            data_dir: self.data_dir.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

/// Initialize the file logger. The terminal belongs to the UI, so nothing
/// is logged to stdout/stderr.
fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Some(parent) = config.log_file.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("tickoff: {e} ({})", config::config_path().display());
            return Err(std::io::Error::other(e));
        }
    };
    let resolved = config::resolve(&file_config, &EnvOverrides::from_env(), &args.overrides());
    init_logging(&resolved);

    info!(
        "tickoff starting up with data dir {}",
        resolved.data_dir.display()
    );

    let adapter = PersistenceAdapter::new(Arc::new(FileStore::new(&resolved.data_dir)));
    let todos = adapter.load().await.unwrap_or_default();
    let mut app = App::new(TodoStore::from(todos));

    let saver = SaveWorker::spawn(adapter, resolved.save_debounce);
    let result = tui::run(&mut app, &saver);
    saver.shutdown().await;

    info!("tickoff shut down");
    result
}
