mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    add, clear, edit, export, import, init, list, move_section, preview, remove, render, status,
    templates, AddArgs, ClearArgs, EditArgs, ExportArgs, ImportArgs, InitArgs, MoveArgs,
    PreviewArgs, RemoveArgs, RenderArgs,
};
use tracing_subscriber::EnvFilter;

/// Site Builder CLI - assemble single-page sites from section templates
#[derive(Parser, Debug)]
#[command(name = "sitebuilder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a sitebuilder.config.json
    Init(InitArgs),

    /// List the section templates
    Templates,

    /// Add a section from a template
    Add(AddArgs),

    /// List sections in display order
    List,

    /// Move a section to the position of another
    Move(MoveArgs),

    /// Remove a section
    Remove(RemoveArgs),

    /// Edit a section's content
    Edit(EditArgs),

    /// Export the page as a website document
    Export(ExportArgs),

    /// Replace the page with an exported website document
    Import(ImportArgs),

    /// Remove every section and reset settings
    Clear(ClearArgs),

    /// Render the page to HTML
    Render(RenderArgs),

    /// Show builder state
    Status,

    /// Switch preview mode
    Preview(PreviewArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();

    match command {
        Command::Init(args) => init(args, &cwd),
        Command::Templates => templates(&cwd),
        Command::Add(args) => add(args, &cwd),
        Command::List => list(&cwd),
        Command::Move(args) => move_section(args, &cwd),
        Command::Remove(args) => remove(args, &cwd),
        Command::Edit(args) => edit(args, &cwd),
        Command::Export(args) => export(args, &cwd),
        Command::Import(args) => import(args, &cwd),
        Command::Clear(args) => clear(args, &cwd),
        Command::Render(args) => render(args, &cwd),
        Command::Status => status(&cwd),
        Command::Preview(args) => preview(args, &cwd),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli.command) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
