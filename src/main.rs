use std::fs;
use std::io::{self, Read};
use std::process;

use clap::{Parser, Subcommand};

use chordkit::{
    all_keys, detect_key, detect_key_first_chord, find_keys, key_signature, ChordChart,
};

#[derive(Parser)]
#[command(name = "chordkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transpose every chord in a chart
    Transpose {
        /// Chart file, or `-` for stdin
        input: String,

        /// Semitones to move (negative for down)
        #[arg(short, long, allow_hyphen_values = true, conflicts_with = "to")]
        semitones: Option<i32>,

        /// Target key; the distance is measured from the chart's key
        #[arg(long)]
        to: Option<String>,
    },
    /// Print the key of a chart
    Key {
        /// Chart file, or `-` for stdin
        input: String,

        /// Use the first chord instead of the most frequent root
        #[arg(long)]
        first_chord: bool,
    },
    /// List the chords in a chart, one per line
    Chords {
        /// Chart file, or `-` for stdin
        input: String,
    },
    /// List selectable keys
    Keys,
    /// Show the accidentals in a major key signature
    Signature { key: String },
    /// Rank keys for a singer's range
    Vocal {
        /// Lowest comfortable note, e.g. C3
        #[arg(long)]
        low: String,

        /// Highest comfortable note, e.g. C5
        #[arg(long)]
        high: String,

        /// Key the song is in now
        #[arg(long, default_value = "C")]
        key: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(message) = run(cli.command) {
        eprintln!("Error: {}", message);
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), String> {
    match command {
        Commands::Transpose {
            input,
            semitones,
            to,
        } => {
            let chart = ChordChart::parse(&read_input(&input)?).map_err(|e| e.to_string())?;
            let transposed = match (semitones, to) {
                (Some(s), _) => chart.transposed(s),
                (None, Some(target)) => chart.transposed_to(&target).map_err(|e| {
                    format!("Cannot transpose to {}: {}", target, e)
                })?,
                (None, None) => return Err("either --semitones or --to is required".to_string()),
            };
            let rendered = transposed.render().map_err(|e| e.to_string())?;
            print!("{}", rendered);
        }
        Commands::Key { input, first_chord } => {
            let chart = ChordChart::parse(&read_input(&input)?).map_err(|e| e.to_string())?;
            let key = match (&chart.metadata.key, first_chord) {
                (_, true) => detect_key_first_chord(&chart.body),
                (Some(key), false) => key.clone(),
                (None, false) => detect_key(&chart.body),
            };
            println!("{}", key);
        }
        Commands::Chords { input } => {
            let chart = ChordChart::parse(&read_input(&input)?).map_err(|e| e.to_string())?;
            for chord in chart.chords() {
                println!("{}", chord);
            }
        }
        Commands::Keys => {
            for key in all_keys() {
                println!("{:<3} {}", key.value, key.label);
            }
        }
        Commands::Signature { key } => {
            println!("{}", key_signature(&key).join(" "));
        }
        Commands::Vocal { low, high, key } => {
            let fits = find_keys(&low, &high, &key).map_err(|e| e.to_string())?;
            for fit in fits {
                let capo = if fit.capo > 0 {
                    format!("capo {}", fit.capo)
                } else {
                    String::new()
                };
                let difficulty = format!("{:?}", fit.difficulty);
                println!(
                    "{:<3} {:+3}  {:<6} {}-{}  {}",
                    fit.key, fit.semitones, difficulty, fit.low, fit.high, capo
                );
            }
        }
    }
    Ok(())
}

fn read_input(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| format!("Error reading stdin: {}", e))?;
        return Ok(source);
    }
    fs::read_to_string(path).map_err(|e| format!("Error reading file '{}': {}", path, e))
}
