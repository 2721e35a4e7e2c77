use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use colored::*;

mod builder;

#[derive(Parser)]
#[command(name = "vc")]
#[command(version = "0.1.0")]
struct Vc {
    /// print debug logs (overridden by `RUST_LOG`)
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Render(RenderArgs),
    Check(CheckArgs),
}

#[derive(Args)]
pub struct RenderArgs {
    /// template `.json` file path
    file: String,

    /// json data the template is rendered against
    #[arg(long)]
    data: Option<String>,

    /// output format: `html` or `tree`
    #[arg(long, default_value = "html")]
    format: String,

    /// write output to a file instead of stdout
    #[arg(long)]
    out: Option<String>,

    /// read a bare rendering code instead of a versioned template
    #[arg(long, default_value_t = false)]
    raw: bool,

    /// use quiet mode
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// template `.json` file path
    file: String,

    /// read a bare rendering code instead of a versioned template
    #[arg(long, default_value_t = false)]
    raw: bool,
}

pub fn main() {
    let cli = Vc::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match &cli.command {
        Commands::Render(args) => {
            let timer = Instant::now();
            let r = builder::build(&args.file, args.data.as_deref(), &args.format, args.raw);
            let duration = timer.elapsed();
            match r {
                Err(e) => {
                    eprintln!("[vc] Render failed: {}", format!("{e:#}").red().bold());
                    std::process::exit(1);
                }
                Ok(v) => {
                    match &args.out {
                        Some(out) => {
                            if let Err(e) = std::fs::write(out, v) {
                                eprintln!("[vc] Write failed: {}", e.to_string().red().bold());
                                std::process::exit(1);
                            }
                            if !args.quiet {
                                eprintln!("📕 {} {}", "Output File: ".green().bold(), out.purple().italic());
                            }
                        }
                        None => println!("{v}"),
                    }
                    if !args.quiet {
                        eprintln!(
                            "⌛️ {} {}",
                            "Render Time: ".purple().bold(),
                            format!("{:?}", duration).green().italic()
                        );
                    }
                }
            }
        }
        Commands::Check(args) => match builder::load_code(&args.file, args.raw) {
            Err(e) => {
                eprintln!("[vc] Check failed: {}", format!("{e:#}").red().bold());
                std::process::exit(1);
            }
            Ok(code) => {
                let holes = code.hole_count();
                println!("💎 {} {}", "Root: ".blue().bold(), code.code_name().cyan().italic());
                println!("🔰 {} {}", "Holes: ".blue().bold(), holes.to_string().cyan());
                if code.is_complete() {
                    println!("{}", "template is complete.".green().bold());
                } else {
                    println!(
                        "{}",
                        format!("template has {holes} unfinished part(s).").yellow().bold()
                    );
                }
            }
        },
    }
}
