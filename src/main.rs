use clap::{Parser, Subcommand};
use colored::Colorize;
use ipv4_subnet::output::{print_report, to_json};
use ipv4_subnet::{build_report, check_contains};
use std::error::Error;
use std::path::PathBuf;

/// IPv4 address and subnet calculator.
#[derive(Parser, Debug)]
#[command(name = "ipv4-subnet", version)]
struct Cli {
    /// log4rs configuration file
    #[arg(long, env = "IPV4_SUBNET_LOG_CONFIG", default_value = "log4rs.yml")]
    log_config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show an address and, given a netmask, its subnet boundaries
    Info {
        /// Address in dot notation or as an integer
        address: String,
        /// Prefix length or dotted-decimal mask
        netmask: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether a candidate address lies in a subnet
    Contains {
        address: String,
        netmask: String,
        candidate: String,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    if let Err(e) = log4rs::init_file(&cli.log_config, Default::default()) {
        eprintln!(
            "{} logging disabled, cannot load {}: {e}",
            "warning:".yellow(),
            cli.log_config.display()
        );
    }
    log::info!("#Start main()");

    match cli.command {
        Command::Info {
            address,
            netmask,
            json,
        } => {
            let report = build_report(&address, netmask.as_deref())?;
            if json {
                println!("{}", to_json(&report)?);
            } else {
                print_report(&report);
            }
        }
        Command::Contains {
            address,
            netmask,
            candidate,
        } => {
            println!("{}", check_contains(&address, &netmask, &candidate)?);
        }
    }

    Ok(())
}
