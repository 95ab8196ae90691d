use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use stocklist::audit::AuditLogger;
use stocklist::cli::StockMenu;
use stocklist::config::{Settings, StockPaths};
use stocklist::logging::init_cli_logger;
use stocklist::services::StockService;

#[derive(Parser)]
#[command(
    name = "stocklist",
    version,
    about = "Interactive terminal stock list",
    long_about = "stocklist keeps a list of products (name, availability, category, \
                  amount) in a flat text file and lets you add, update, remove and \
                  filter them from a numbered menu. Run without a subcommand to \
                  start the menu."
)]
struct Cli {
    /// Directory holding stock_data.txt, config.json and audit.log
    #[arg(long, env = "STOCKLIST_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Disable colored console output
    #[arg(long, global = true)]
    no_color: bool,

    /// Emit debug diagnostics on stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config.json to the data directory
    Init,

    /// Show resolved paths and settings
    Config,

    /// Show the most recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let paths = StockPaths::new(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!(
                    "Settings already exist at: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                println!("Wrote default settings to: {}", paths.settings_file().display());
            }
        }
        Some(Commands::Config) => {
            println!("stocklist Configuration");
            println!("=======================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Stock file:     {}", paths.stock_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Out of stock:    {}", settings.out_of_stock.join(", "));
            println!("  Restore amounts: {}", settings.restore_amounts);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!("  Color:           {}", settings.color);
        }
        Some(Commands::History { limit }) => {
            let logger = AuditLogger::new(paths.audit_log());
            let entries = logger.read_recent(limit)?;
            if entries.is_empty() {
                println!("No changes recorded.");
            }
            for entry in &entries {
                println!("{}", entry.format_human_readable());
            }
        }
        None => {
            let service = StockService::open(&paths, &settings);
            let stdin = io::stdin();
            let mut menu = StockMenu::new(service, stdin.lock(), io::stdout())
                .with_color(settings.color && !cli.no_color);
            menu.run()?;
        }
    }

    Ok(())
}
