use anyhow::Context;
use apispec_util::api::{self, SpecMapping};
use apispec_util::order::FeatureList;
use apispec_util::{fs, logging, tree};
use clap::{Parser, Subcommand};
use std::collections::HashSet;
use tracing::warn;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "apispec-util")]
#[command(about = "API selector and feature ordering helpers for loader generation", long_about = None)]
struct Cli {
    /// Log level for this tool when RUST_LOG is unset.
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse API selectors (e.g. "gl:core=4.6,gles2=3.2") and print them as JSON.
    Apis {
        text: String,

        /// JSON object mapping API names to specification families (replaces the default).
        #[arg(long)]
        spec_mapping: Option<String>,
    },

    /// Order the features of a feature list so requirements come first.
    Order {
        #[arg(long)]
        features: String,

        #[arg(short = 'o', long)]
        out: Option<String>,

        /// Warn about unresolved features and append them instead of failing.
        #[arg(long)]
        allow_unresolved: bool,
    },

    /// Print the text content of an XML document.
    Text {
        #[arg(long)]
        xml: String,

        /// Element names whose subtrees are skipped.
        #[arg(long)]
        ignore: Vec<String>,
    },

    /// Print the display name of an API identifier.
    Name { api: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    match cli.cmd {
        Commands::Apis { text, spec_mapping } => {
            let mapping = match spec_mapping {
                Some(path) => {
                    let raw = std::fs::read_to_string(&path)
                        .with_context(|| format!("read spec mapping {}", path))?;
                    serde_json::from_str::<SpecMapping>(&raw)
                        .with_context(|| format!("parse spec mapping {}", path))?
                }
                None => SpecMapping::default(),
            };

            let apis = api::parse_apis_with(&text, &mapping)?;
            println!("{}", serde_json::to_string_pretty(&apis)?);
        }

        Commands::Order {
            features,
            out,
            allow_unresolved,
        } => {
            let raw = std::fs::read_to_string(&features)
                .with_context(|| format!("read feature list {}", features))?;
            let list: FeatureList = serde_json::from_str(&raw)
                .with_context(|| format!("parse feature list {}", features))?;
            list.validate()?;

            let ordered = if allow_unresolved {
                let (mut placed, stalled) = list.order_partial();
                if let Some(err) = stalled {
                    for p in &err.pending {
                        warn!(
                            feature = %p.item.name,
                            unresolved = ?p.unresolved,
                            "feature has unresolved requirements"
                        );
                    }
                    placed.extend(err.pending.into_iter().map(|p| p.item));
                }
                placed
            } else {
                list.order()?
            };

            let text: String = ordered.iter().map(|f| format!("{}\n", f.name)).collect();
            match out {
                Some(out) => {
                    fs::ensure_parent_dir(&out)?;
                    std::fs::write(&out, text).with_context(|| format!("write {}", out))?;
                    println!("Wrote {}", out);
                }
                None => print!("{}", text),
            }
        }

        Commands::Text { xml, ignore } => {
            let raw =
                std::fs::read_to_string(&xml).with_context(|| format!("read xml file {}", xml))?;
            let root = tree::parse_xml(&raw).with_context(|| format!("parse xml file {}", xml))?;
            let ignore: HashSet<String> = ignore.into_iter().collect();
            let text: String = tree::itertext(&root, &ignore).collect();
            println!("{}", text);
        }

        Commands::Name { api } => {
            println!("{}", api::api_name(&api));
        }
    }

    Ok(())
}
