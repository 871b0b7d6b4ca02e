//! Stowage CLI: load manifests or random boxes into a container.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use stowage_engine::{Container, Packer};
use stowage_toolkit::{LoadReport, Manifest, ManifestEntry, Scene, SyntheticGenerator};

#[derive(Parser)]
#[command(name = "stowage")]
#[command(about = "Greedy first-fit 3D container loading")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ContainerArgs {
    /// Container dimensions as LENGTH WIDTH HEIGHT (default: 40 ft container)
    #[arg(long, num_args = 3, value_names = ["L", "W", "H"], default_values_t = vec![40.0, 8.0, 8.5])]
    container: Vec<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a load list into a container and print the report
    Pack {
        /// Manifest file (.csv or .json); omit to use random boxes
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Number of random boxes when no manifest is given
        #[arg(long, default_value = "70")]
        count: usize,

        /// Seed for random box generation
        #[arg(long)]
        seed: Option<u64>,

        /// Sort random boxes by weight, heaviest first
        #[arg(long)]
        sort: bool,

        #[command(flatten)]
        container: ContainerArgs,

        /// Write the full pack result as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write a markdown report
        #[arg(long)]
        report: Option<PathBuf>,

        /// Write a renderer scene as JSON
        #[arg(long)]
        scene: Option<PathBuf>,
    },

    /// Generate a synthetic manifest file
    Generate {
        /// Number of boxes to generate
        #[arg(long, default_value = "70")]
        count: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Sort by weight, heaviest first
        #[arg(long)]
        sort: bool,

        /// Output manifest path (JSON)
        output: PathBuf,
    },
}

fn generator(seed: Option<u64>) -> SyntheticGenerator {
    match seed {
        Some(seed) => SyntheticGenerator::with_seed(seed),
        None => SyntheticGenerator::new(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pack {
            manifest,
            count,
            seed,
            sort,
            container,
            output,
            report,
            scene,
        } => {
            let dims = &container.container;
            let container = Container::new(dims[0], dims[1], dims[2]);

            let boxes = match manifest {
                Some(path) => Manifest::load(&path)?.boxes(),
                None => {
                    let mut gen = generator(seed);
                    if sort {
                        gen.generate_sorted(count)
                    } else {
                        gen.generate(count)
                    }
                }
            };

            let result = Packer::default().pack(&boxes, &container)?;
            let load_report = LoadReport::new(&container, &result);
            load_report.print_summary();

            if let Some(path) = output {
                let json = serde_json::to_string_pretty(&load_report)?;
                std::fs::write(&path, json)?;
                println!("Result saved to: {}", path.display());
            }

            if let Some(path) = report {
                std::fs::write(&path, load_report.to_markdown())?;
                println!("Markdown report saved to: {}", path.display());
            }

            if let Some(path) = scene {
                Scene::new(&container, &result).save_json(&path)?;
                println!("Scene saved to: {}", path.display());
            }
        }

        Commands::Generate {
            count,
            seed,
            sort,
            output,
        } => {
            let mut gen = generator(seed);
            let boxes = if sort {
                gen.generate_sorted(count)
            } else {
                gen.generate(count)
            };

            // Manifest columns are W/H/L; `ManifestEntry::expand` maps them
            // back onto the X/Y/Z extents written here.
            let manifest = Manifest {
                entries: boxes
                    .iter()
                    .map(|b| ManifestEntry {
                        width: b.length(),
                        height: b.width(),
                        length: b.height(),
                        quantity: 1,
                        weight: b.weight(),
                    })
                    .collect(),
            };

            manifest.save_json(&output)?;
            println!("Manifest with {} boxes saved to: {}", count, output.display());
        }
    }

    Ok(())
}
