use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_BRANCH: &str = "master";
pub const DEFAULT_POLICY_FILE: &str = "ROLES";

#[derive(Parser, Debug)]
#[command(
    name = "trunkcheck",
    version,
    about = "Audit a git repository's merge history against its committed access-control policy"
)]
pub struct Cli {
    /// Path to the repository to audit
    pub repository: PathBuf,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        default_value = DEFAULT_BRANCH,
        help = "Trunk branch checked against the access-control file"
    )]
    pub branch: String,
    #[arg(
        long,
        default_value = DEFAULT_POLICY_FILE,
        help = "Name of the access-control file looked up in each baseline's tree"
    )]
    pub policy_file: String,
}
