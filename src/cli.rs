use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "photo-card-sync")]
#[command(about = "Copy new photos off a camera card and check storage for duplicates")]
pub struct Cli {
    /// Location of the photo storage directory
    #[arg(short, long)]
    pub storage: PathBuf,

    /// Location of the camera memory card directory
    #[arg(short, long)]
    pub camera: PathBuf,

    /// Staging directory the missing files get copied to
    /// (ideally inside the storage location)
    #[arg(short = 'g', long)]
    pub staging: Option<PathBuf>,

    /// Verbose output; pass twice to also list every file in the delta
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Check the storage tree for duplicated and name-colliding photos
    #[arg(long)]
    pub check_storage: bool,

    /// Check for name conflicts between the camera card and the storage tree
    #[arg(long)]
    pub check_cross: bool,
}
