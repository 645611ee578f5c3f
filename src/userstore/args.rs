use clap::Parser;
use std::path::PathBuf;
use userstore::api::Arguments;

#[derive(Parser, Debug)]
#[command(name = "userstore", version)]
#[command(about = "Keep user records in a JSON file", long_about = None)]
pub struct Cli {
    /// JSON store file
    #[arg(long = "fileName", value_name = "PATH")]
    pub file_name: Option<String>,

    /// Operation to execute (list, add, findById, remove)
    #[arg(long)]
    pub operation: Option<String>,

    /// Item to add, as a JSON object
    #[arg(long, value_name = "JSON")]
    pub item: Option<String>,

    /// User id to look up or remove
    #[arg(long)]
    pub id: Option<String>,

    /// Store configuration file (JSON)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn arguments(&self) -> Arguments {
        Arguments {
            file_name: self.file_name.clone(),
            operation: self.operation.clone(),
            item: self.item.clone(),
            id: self.id.clone(),
        }
    }
}
