use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use upgma::{load_clusters, print_clusters, Upgma, UpgmaParams};

/// Clusters the objects in FILE with the unweighted pair-group average method.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input file: a `count=N` line followed by `ID X Y` lines
    file: PathBuf,

    /// Number of clusters to stop at
    #[arg(default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    clusters: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let target_clusters = usize::try_from(args.clusters).context("Cluster count is too large")?;

    let hp = UpgmaParams::builder().target_clusters(target_clusters).build();
    let clusters = load_clusters::<f32>(&args.file, hp.initial_capacity())
        .with_context(|| format!("Unable to load objects from {}", args.file.display()))?;
    let result = Upgma::new(clusters, hp)
        .reduce()
        .context("Clustering failed")?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    print_clusters(&mut writer, &result)?;
    writer.flush()?;
    Ok(())
}
