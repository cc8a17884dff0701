use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use drophouse_core::Move;
use drophouse_policy::{FLAT_PLANE_IDX, PolicyTable, crazyhouse_labels, decode_index, resolve};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "drophouse",
    about = "Crazyhouse policy-plane move codec and static table generator"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build and print the flat index of every label in a label list
    Table {
        /// Newline-separated label file; defaults to the crazyhouse label list
        #[arg(long)]
        labels: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Plain)]
        format: Format,
    },
    /// Check that the embedded table matches a fresh build
    Verify,
    /// Print plane, row, column and flat index for each label
    Encode {
        #[arg(required = true)]
        labels: Vec<String>,
    },
    /// Print the move addressed by each flat index
    Decode {
        #[arg(required = true)]
        indices: Vec<usize>,
    },
    /// Print the crazyhouse label list
    Labels,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One flat index per line
    Plain,
    /// A Rust source file with the table as a static array
    Rust,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args, "parsed arguments");

    match args.command {
        Command::Table { labels, format } => {
            let (table, canonical) = match labels {
                Some(path) => (load_table(&path)?, false),
                None => (PolicyTable::crazyhouse()?, true),
            };
            info!(labels = table.len(), "policy table built");
            match format {
                Format::Plain => print!("{}", render_plain(&table.to_raw())),
                Format::Rust => print!("{}", render_rust(&table.to_raw(), canonical)),
            }
        }
        Command::Verify => {
            let table = PolicyTable::crazyhouse()?;
            if table.to_raw() != FLAT_PLANE_IDX {
                bail!("embedded FLAT_PLANE_IDX differs from the rebuilt crazyhouse table");
            }
            info!(labels = table.len(), "embedded table matches");
        }
        Command::Encode { labels } => {
            for label in labels {
                let mv = Move::from_label(&label)?;
                let coord = resolve(mv).with_context(|| format!("encoding {label}"))?;
                println!(
                    "{label}\t{}\t{}\t{}\t{}",
                    coord.plane,
                    coord.row(),
                    coord.column(),
                    coord.flat()
                );
            }
        }
        Command::Decode { indices } => {
            for index in indices {
                let mv = decode_index(index).with_context(|| format!("decoding {index}"))?;
                println!("{index}\t{mv}");
            }
        }
        Command::Labels => {
            for label in crazyhouse_labels() {
                println!("{label}");
            }
        }
    }

    Ok(())
}

/// Build a table from a newline-separated label file, ignoring blank lines.
fn load_table(path: &Path) -> Result<PolicyTable> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading label file {}", path.display()))?;
    let labels = text.lines().map(str::trim).filter(|l| !l.is_empty());
    PolicyTable::build(labels).with_context(|| format!("building table from {}", path.display()))
}

fn render_plain(raw: &[u16]) -> String {
    let mut out = String::with_capacity(raw.len() * 5);
    for entry in raw {
        let _ = writeln!(out, "{entry}");
    }
    out
}

/// Render the table in the layout of `static_table.rs`.
fn render_rust(raw: &[u16], canonical: bool) -> String {
    let len = if canonical {
        "CRAZYHOUSE_LABEL_COUNT".to_string()
    } else {
        raw.len().to_string()
    };

    let mut out = String::new();
    if canonical {
        out.push_str("//! Generated flat policy indices for the canonical crazyhouse label list.\n");
    } else {
        out.push_str("//! Generated flat policy indices for a custom label list.\n");
    }
    out.push_str("//!\n");
    out.push_str("//! Entry `i` is the flat index (`plane * 64 + row * 8 + column`) of label `i`.\n");
    out.push_str("//! Regenerate with `drophouse table --format rust`.\n");
    out.push('\n');
    if canonical {
        out.push_str("use crate::labels::CRAZYHOUSE_LABEL_COUNT;\n\n");
    }
    out.push_str("#[rustfmt::skip]\n");
    let _ = writeln!(out, "pub static FLAT_PLANE_IDX: [u16; {len}] = [");
    for chunk in raw.chunks(12) {
        let line: Vec<String> = chunk.iter().map(u16::to_string).collect();
        let _ = writeln!(out, "    {},", line.join(", "));
    }
    out.push_str("];\n");
    out
}
