use anyhow::Context;
use clap::{Parser, Subcommand};
use markup_ident::ident::{self, FlatIdentifier, ResolverConfig};
use markup_ident::tree::{self, NodePath};
use markup_ident::{canon, report};
use std::io::Write;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "markup-ident")]
#[command(about = "Node identity and content equivalence for markup trees", long_about = None)]
struct Cli {
    /// Debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the hierarchical identifier of one node, or of every node.
    Identify {
        #[arg(long)]
        doc: String,

        /// Child-index path such as "[0, 1, 0]" or "0/1/0".
        #[arg(long, conflicts_with = "all", required_unless_present = "all")]
        path: Option<String>,

        #[arg(long)]
        all: bool,

        #[arg(long, default_value = ident::DEFAULT_VERSION)]
        default_version: String,

        #[arg(long)]
        json: bool,
    },

    /// Read the flat (id, rev) identifier of one node.
    Flat {
        #[arg(long)]
        doc: String,

        #[arg(long)]
        path: String,
    },

    /// Compare two documents under canonical serialization.
    Equiv {
        #[arg(long)]
        left: String,

        #[arg(long)]
        right: String,
    },

    /// Print the canonical form of a document.
    Canon {
        #[arg(long)]
        doc: String,
    },
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "markup_ident=debug,info"
    } else {
        "markup_ident=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let stdout = std::io::stdout();
    run(cli.cmd, &mut stdout.lock())
}

fn run(cmd: Commands, out: &mut impl Write) -> Result<()> {
    match cmd {
        Commands::Identify {
            doc,
            path,
            all,
            default_version,
            json,
        } => {
            let root = tree::load_document(&doc)?;
            let config = ResolverConfig { default_version };

            if all {
                let resolutions = ident::identify_all(&root, &config);
                let data = report::build_identity_report(&resolutions);
                if json {
                    writeln!(out, "{}", serde_json::to_string_pretty(&data)?)?;
                } else {
                    write!(out, "{}", report::render_text(&data))?;
                }
                return Ok(());
            }

            let Some(path) = path else {
                anyhow::bail!("either --path or --all is required");
            };
            let node_path: NodePath = path.parse()?;
            let node = node_path.resolve(&root)?;
            let id = ident::identify_with(&node, &config)
                .with_context(|| format!("identify node {} in {}", node_path, doc))?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&id)?)?;
            } else {
                writeln!(out, "{}", id)?;
            }
        }
        Commands::Flat { doc, path } => {
            let root = tree::load_document(&doc)?;
            let node_path: NodePath = path.parse()?;
            let node = node_path.resolve(&root)?;
            let id = FlatIdentifier::from_node(&node)
                .with_context(|| format!("flat identifier of node {} in {}", node_path, doc))?;
            writeln!(out, "{}", id)?;
        }
        Commands::Equiv { left, right } => {
            let x = tree::load_document(&left)?;
            let y = tree::load_document(&right)?;
            let same = canon::equivalent(&x, &y)?;
            writeln!(out, "{}", if same { "equivalent" } else { "different" })?;
        }
        Commands::Canon { doc } => {
            let root = tree::load_document(&doc)?;
            writeln!(out, "{}", canon::canonicalize(&root)?)?;
        }
    }

    Ok(())
}
