//! CLI definitions and command routing.

use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::entry::Entry;
use crate::store::{Hostfile, DEFAULT_HOSTFILE_PATH};

#[derive(Parser)]
#[command(name = "hostfile")]
#[command(about = "List, query, add, and remove hosts file entries")]
pub struct Cli {
    /// Path to the hosts file; defaults to the OS hosts file
    #[arg(short, long, global = true)]
    pub path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all entries (default command)
    #[command(visible_alias = "l")]
    List,

    /// Get entries matching an address and/or hostname
    #[command(visible_alias = "g")]
    Get {
        /// Address of entry; required if --name is not given
        #[arg(short, long)]
        ip: Option<String>,
        /// Hostname of entry; required if --ip is not given
        #[arg(short, long, required_unless_present = "ip")]
        name: Option<String>,
    },

    /// Add a single entry
    #[command(visible_alias = "a")]
    Add {
        /// Address of entry
        #[arg(short, long)]
        ip: IpAddr,
        /// Hostname of entry
        #[arg(short, long)]
        name: String,
    },

    /// Remove entries matching an address and/or hostname
    #[command(visible_alias = "r")]
    Remove {
        /// Address of entry; required if --name is not given
        #[arg(short, long)]
        ip: Option<String>,
        /// Hostname of entry; required if --ip is not given
        #[arg(short, long, required_unless_present = "ip")]
        name: Option<String>,
    },
}

/// Hosts file path for this invocation: --path flag, then HOSTFILE_PATH
/// env (e.g. in tests), then the platform default.
fn hosts_path(cli_path: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_path {
        return p;
    }
    if let Ok(p) = std::env::var("HOSTFILE_PATH") {
        return PathBuf::from(p);
    }
    PathBuf::from(DEFAULT_HOSTFILE_PATH)
}

/// Run CLI and dispatch to handlers.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let hostfile = Hostfile::open(hosts_path(cli.path))?;

    match cli.command.unwrap_or(Commands::List) {
        Commands::List => cmd_list(&hostfile),
        Commands::Get { ip, name } => cmd_get(&hostfile, ip.as_deref(), name.as_deref()),
        Commands::Add { ip, name } => cmd_add(&hostfile, ip, &name),
        Commands::Remove { ip, name } => cmd_remove(&hostfile, ip.as_deref(), name.as_deref()),
    }
}

fn print_entries(entries: &[Entry]) {
    for e in entries {
        println!("{},{}", e.address, e.hostname);
    }
}

fn cmd_list(hostfile: &Hostfile) -> Result<()> {
    print_entries(&hostfile.list()?);
    Ok(())
}

fn cmd_get(hostfile: &Hostfile, ip: Option<&str>, name: Option<&str>) -> Result<()> {
    let entries = match (ip, name) {
        (Some(ip), Some(name)) => hostfile.get(ip, name)?,
        (Some(ip), None) => hostfile.get_by_address(ip)?,
        (None, Some(name)) => hostfile.get_by_hostname(name)?,
        (None, None) => unreachable!("clap requires at least one of --ip/--name"),
    };
    print_entries(&entries);
    Ok(())
}

fn cmd_add(hostfile: &Hostfile, ip: IpAddr, name: &str) -> Result<()> {
    hostfile.add(Entry::new(ip.to_string(), name))?;
    println!("Added entry: {ip},{name}");
    Ok(())
}

fn cmd_remove(hostfile: &Hostfile, ip: Option<&str>, name: Option<&str>) -> Result<()> {
    let removed = match (ip, name) {
        (Some(ip), Some(name)) => hostfile.remove(ip, name)?,
        (Some(ip), None) => hostfile.remove_by_address(ip)?,
        (None, Some(name)) => hostfile.remove_by_hostname(name)?,
        (None, None) => unreachable!("clap requires at least one of --ip/--name"),
    };
    println!("Removed entries: {removed}");
    Ok(())
}
