use anyhow::{Context, anyhow};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use lindenmayer::report::{self, CsvFormatter, PrettyFormatter};
use lindenmayer::rewriting::rule::Rule;
use lindenmayer::shell::Session;
use lindenmayer::system::{LSystem, presets::PRESETS};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Expand L-system axioms by generational rewriting
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prompt for angle, axiom, rules and iteration count on the console (default)
    Interactive {
        /// Fail instead of building a generation longer than this
        #[arg(long)]
        max_length: Option<usize>,
    },
    /// Expand an L-system and print the result
    Expand {
        #[command(flatten)]
        source: Source,

        /// Number of generations to expand
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        iterations: i64,

        /// Fail instead of building a generation longer than this
        #[arg(long)]
        max_length: Option<usize>,
    },
    /// Print the length of every generation without expanding
    Stats {
        #[command(flatten)]
        source: Source,

        /// Number of generations to report
        #[arg(short = 'n', long)]
        iterations: usize,

        /// Emit CSV instead of a table
        #[arg(long)]
        csv: bool,
    },
    /// Write the L-system definition as JSON
    Save {
        #[command(flatten)]
        source: Source,

        /// Output JSON file path
        #[arg(short = 'o', long)]
        output: PathBuf,
    },
    /// List the built-in L-systems
    Presets,
}

/// Where the L-system comes from. Extra `--rule`s and `--angle` apply on top.
#[derive(Args, Debug)]
struct Source {
    /// JSON file with `angle`, `axiom` and `rules`
    #[arg(short = 's', long, conflicts_with_all = ["preset", "axiom"])]
    system: Option<PathBuf>,

    /// Built-in L-system, see `lindenmayer presets`
    #[arg(short = 'p', long, conflicts_with = "axiom")]
    preset: Option<String>,

    /// Initial symbol sequence
    #[arg(short = 'a', long)]
    axiom: Option<String>,

    /// Production as symbol followed by its replacement, e.g. `AAB` for A -> AB
    #[arg(short = 'r', long = "rule")]
    rules: Vec<String>,

    /// Turning angle in degrees, carried along with the definition
    #[arg(long, allow_negative_numbers = true)]
    angle: Option<f64>,
}

impl Source {
    fn resolve(self) -> anyhow::Result<LSystem> {
        let mut system = if let Some(path) = &self.system {
            LSystem::from_file(path)
                .with_context(|| format!("failed to load L-system from {}", path.display()))?
        } else if let Some(name) = &self.preset {
            LSystem::preset(name).ok_or_else(|| {
                anyhow!("unknown preset {name:?}, expected one of {}", PRESETS.join(", "))
            })?
        } else if let Some(axiom) = self.axiom.as_deref() {
            LSystem::new(0.0, axiom, Default::default())
        } else {
            return Err(anyhow!("no L-system given, pass one of --system, --preset or --axiom"));
        };

        for line in &self.rules {
            system.rules_mut().add_rule(Rule::parse(line)?);
        }
        if let Some(angle) = self.angle {
            system = system.with_angle(angle);
        }
        Ok(system)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lindenmayer=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Interactive { max_length: None }) {
        Command::Interactive { max_length } => {
            let stdin = io::stdin();
            Session::new(stdin.lock(), io::stdout())
                .with_limit(max_length)
                .run()?;
        }
        Command::Expand {
            source,
            iterations,
            max_length,
        } => {
            let system = source.resolve()?;
            let iterations = usize::try_from(iterations)
                .map_err(|_| lindenmayer::error::Error::NegativeIterations(iterations))?;
            let result = match max_length {
                Some(limit) => system.expand_bounded(iterations, limit)?,
                None => system.expand(iterations),
            };
            println!("Resulting characters after {iterations} expansions: {result}");
        }
        Command::Stats {
            source,
            iterations,
            csv,
        } => {
            let system = source.resolve()?;
            let stats = report::collect(system.axiom(), system.rules(), iterations);
            if csv {
                print!("{}", CsvFormatter::format(&stats)?);
            } else {
                println!("{} {}", "Axiom:".bold(), system.axiom());
                println!("{}\n{}\n", "Rules:".bold(), system.rules());
                println!("{}", PrettyFormatter::format(&stats));
            }
        }
        Command::Save { source, output } => {
            let system = source.resolve()?;
            system
                .save(&output)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("Saved L-system to {:?}", output);
        }
        Command::Presets => {
            for name in PRESETS {
                let Some(system) = LSystem::preset(name) else {
                    continue;
                };
                println!(
                    "{} (angle {}, axiom {})",
                    name.green().bold(),
                    system.angle(),
                    system.axiom()
                );
                for (symbol, replacement) in system.rules().iter() {
                    println!("  {symbol} -> {replacement}");
                }
            }
        }
    }

    Ok(())
}
