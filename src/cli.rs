//! Command-line front end. Without a subcommand the desktop window opens.

use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::{self, PathBuf};

use crate::app;
use crate::metadata;
use crate::operations;
use crate::settings::AppSettings;

#[derive(Debug, Parser)]
#[command(name = "file-inspector", version, about = "Browse a folder and inspect file metadata")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the inspector window
    Gui {
        /// Folder to open instead of the remembered one
        folder: Option<PathBuf>,
    },
    /// List the entries directly inside a folder
    List {
        folder: PathBuf,
        /// Include dot-prefixed entries
        #[arg(short, long)]
        all: bool,
    },
    /// Print the metadata report of a file or folder
    Describe { path: PathBuf },
    /// Write the metadata report of a file or folder to a text file
    Export {
        path: PathBuf,
        /// Defaults to `<name>_info.txt` in the current directory
        destination: Option<PathBuf>,
    },
    /// Print the remembered folder and item
    ShowSelection,
    /// Delete the remembered folder and item
    ForgetSelection,
}

impl Cli {
    pub fn execute(self, settings: AppSettings) -> Result<(), Box<dyn Error>> {
        match self.command.unwrap_or(Command::Gui { folder: None }) {
            Command::Gui { folder } => {
                let folder = folder.map(|f| path::absolute(&f)).transpose()?;
                app::run(settings, folder)?;
            }
            Command::List { folder, all } => {
                let folder = path::absolute(&folder)?;
                let show_hidden = all || settings.show_hidden_files;
                for entry in operations::try_list(&folder, show_hidden)? {
                    println!("{}", entry.display());
                }
            }
            Command::Describe { path } => {
                let path = path::absolute(&path)?;
                println!("{}", metadata::describe(&path).to_text().trim_end_matches('\n'));
            }
            Command::Export { path, destination } => {
                let path = path::absolute(&path)?;
                let destination = destination
                    .unwrap_or_else(|| PathBuf::from(operations::suggested_export_name(&path)));
                operations::export_report(&path, &destination)?;
                println!("Saved info to {}", destination.display());
            }
            Command::ShowSelection => {
                let state = settings.selection_store().restore();
                if state.is_empty() {
                    println!("No remembered selection");
                    return Ok(());
                }
                let show = |p: Option<PathBuf>| p.map(|p| p.display().to_string()).unwrap_or_default();
                println!("folder:\t{}", show(state.current_folder));
                println!("item:\t{}", show(state.current_item));
            }
            Command::ForgetSelection => {
                settings.selection_store().clear()?;
            }
        }
        Ok(())
    }
}
