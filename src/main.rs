use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bacon_numbers::data_loading::{self, DataFiles};
use bacon_numbers::graph_store;
use bacon_numbers::path_index::PathIndex;
use bacon_numbers::{logging, query_loop};

/// Six degrees of Kevin Bacon: shortest co-appearance chains between actors.
#[derive(Parser, Debug)]
#[command(name = "bacon_numbers")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding actors.txt, movies.txt and movie-actors.txt
    #[arg(long, value_name = "DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Actor file (`id|name`), overrides the one in --data-dir
    #[arg(long, value_name = "FILE")]
    actors: Option<PathBuf>,

    /// Movie file (`id|title`), overrides the one in --data-dir
    #[arg(long, value_name = "FILE")]
    movies: Option<PathBuf>,

    /// Cast file (`movie id|actor id`), overrides the one in --data-dir
    #[arg(long, value_name = "FILE")]
    cast: Option<PathBuf>,

    /// Actor every chain leads to
    #[arg(long, default_value = "Kevin Bacon")]
    root: String,

    /// Print graph size and how many actors sit at each distance before querying
    #[arg(long)]
    stats: bool,

    /// Actors to look up; without any, names are read from stdin
    #[arg(value_name = "NAME")]
    names: Vec<String>,
}

impl Cli {
    fn data_files(&self) -> DataFiles {
        let defaults = DataFiles::in_dir(&self.data_dir);
        DataFiles {
            actors: self.actors.clone().unwrap_or(defaults.actors),
            movies: self.movies.clone().unwrap_or(defaults.movies),
            cast: self.cast.clone().unwrap_or(defaults.cast),
        }
    }
}

fn print_stats(index: &PathIndex<'_>) {
    let graph = index.graph();
    println!(
        "{} actors, {} co-appearances, {} connected to {}",
        graph.vertex_count(),
        graph.edge_count(),
        index.reached_count(),
        index.root()
    );
    for (distance, count) in index.distance_histogram().iter().enumerate() {
        println!("  {} number {}: {} actors", index.root(), distance, count);
    }
    println!(
        "  {} number infinite: {} actors\n",
        index.root(),
        graph.vertex_count() - index.reached_count()
    );
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let files = cli.data_files();
    let dataset =
        data_loading::load_dataset(&files).context("Failed to load the actor and movie data")?;
    let graph = graph_store::build_co_appearance_graph(&dataset);
    let index = PathIndex::build(&graph, &cli.root)
        .with_context(|| format!("Cannot search from {:?}", cli.root))?;

    if cli.stats {
        print_stats(&index);
    }

    if cli.names.is_empty() {
        let stdin = io::stdin();
        query_loop::run(&index, stdin.lock(), io::stdout().lock())
            .context("Query loop failed")?;
    } else {
        let mut out = io::stdout().lock();
        for name in &cli.names {
            writeln!(out, "{}\n", query_loop::answer(&index, name))?;
        }
    }
    Ok(())
}
