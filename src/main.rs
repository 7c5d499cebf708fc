use anyhow::Result;
use clap::Parser;
use std::env;
use std::process;

use pyinit::commands;
use pyinit::Config;

#[derive(Parser)]
#[command(name = "pyinit", version = env!("CARGO_PKG_VERSION"), about = "Creates the directory structure for my Python projects - subdirectories, __init__.py, and Makefile", long_about = None)]
struct Cli {
    /// Project name
    #[arg(short, long)]
    name: Option<String>,

    /// Remove empty (unused) directories
    #[arg(long)]
    tidy: bool,

    /// Create a standalone main.py in the current directory
    #[arg(long)]
    main: bool,
}

fn usage() {
    println!("[-n/--name] of project needs to be passed!");
    println!("usage:");
    println!("     create:");
    println!("         pyinit [-n/--name] <project>");
    println!("     tidy:");
    println!("         pyinit [-n/--name] <project> [--tidy]");
    println!("     template only:");
    println!("         pyinit [--main]");
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cwd = env::current_dir()?;

    match cli.name {
        None => {
            if cli.main {
                commands::main_file::execute(&cwd)?;
            } else {
                usage();
                process::exit(1);
            }
        }
        Some(name) if cli.tidy => {
            commands::tidy::execute(&cwd, &name)?;
        }
        Some(name) => {
            let config = Config::from_env()?;
            let exit_code = commands::new::execute(&config, &cwd, &name)?;
            if exit_code != 0 {
                process::exit(exit_code);
            }
        }
    }

    Ok(())
}
