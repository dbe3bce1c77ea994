use anyhow::Result;
use clap::{Parser, Subcommand};

use tally::cli::{handle_entities_command, handle_export_command, ExportArgs};
use tally::config::{paths::TallyPaths, settings::Settings};
use tally::export::ExportRegistry;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Declarative CSV export for business records",
    long_about = "tally turns JSON or YAML record sets (users, staff, clients, \
                  invoices, ...) into CSV files. Columns and cell formatting \
                  come from a per-entity export configuration."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a record set to CSV
    Export(ExportArgs),

    /// List entity types, or show the columns of one
    #[command(alias = "ls")]
    Entities {
        /// Entity type to describe
        entity: Option<String>,
    },

    /// Write default settings and create directories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    tally::logging::init(&settings.log_level);

    match cli.command {
        Some(Commands::Export(args)) => {
            let registry = ExportRegistry::load(&paths)?;
            handle_export_command(&registry, &settings, &paths, args)?;
        }
        Some(Commands::Entities { entity }) => {
            let registry = ExportRegistry::load(&paths)?;
            handle_entities_command(&registry, entity)?;
        }
        Some(Commands::Init) => {
            println!("Initializing tally-export at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!(
                "Add custom entity types in {}",
                paths.definitions_file().display()
            );
            println!("Run 'tally entities' to see the registered entity types.");
        }
        Some(Commands::Config) => {
            println!("tally-export Configuration");
            println!("==========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Definitions file:  {}", paths.definitions_file().display());
            println!();
            println!("Settings:");
            println!("  Output directory:   {}", settings.output_dir(&paths).display());
            println!("  Overwrite existing: {}", settings.overwrite_existing);
            println!("  Log level:          {}", settings.log_level);
        }
        None => {
            println!("tally - declarative CSV export for business records");
            println!();
            println!("Run 'tally --help' for usage information.");
            println!("Run 'tally entities' to see what can be exported.");
        }
    }

    Ok(())
}
