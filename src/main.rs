#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "tunepress", about = "Music library export and blog media tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Extract play-count data from a library export into blog JSON.
	Tracks(cmd::tracks::Args),
	/// Generate placeholder artwork for albums and artists.
	Placeholders(cmd::placeholders::Args),
	/// Fetch real artwork from Last.fm, with placeholder fallback.
	Fetch(cmd::fetch::Args),
	/// Reconcile .png media references against downloaded .jpg files.
	Reconcile(cmd::reconcile::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> tunepress::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Tracks(args) => cmd::tracks::run(args),
		Commands::Placeholders(args) => cmd::placeholders::run(args),
		Commands::Fetch(args) => cmd::fetch::run(args),
		Commands::Reconcile(args) => cmd::reconcile::run(args),
	}
}
