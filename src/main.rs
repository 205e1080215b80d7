use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use treesplit::config::{
    Choice, SplitCriterionChoice, SplitFinderParams, build_split_finder, load_params,
};
use treesplit::core::LabelEncoder;
use treesplit::utils::file_parsing::{CsvOptions, read_labeled_csv};

#[derive(Parser)]
#[command(name = "treesplit")]
#[command(
    author,
    version,
    about = "Find the best decision-tree split of a labeled CSV dataset",
    long_about = None
)]
struct Cli {
    /// CSV file with numeric feature columns and one label column
    #[arg(value_name = "FILE", required_unless_present_any = ["list_criteria", "print_schema"])]
    file: Option<PathBuf>,

    /// Zero-based index of the label column (default: last column)
    #[arg(long, value_name = "N")]
    label_column: Option<usize>,

    /// Treat the first line as data instead of a header
    #[arg(long)]
    no_header: bool,

    /// JSON file with split finder parameters
    #[arg(long, value_name = "JSON")]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// List the available split criteria and exit
    #[arg(long)]
    list_criteria: bool,

    /// Print the JSON schema of the config file and exit
    #[arg(long)]
    print_schema: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if cli.list_criteria {
        for (name, message) in SplitCriterionChoice::kinds() {
            println!("{name:<18} {message}");
        }
        return Ok(());
    }
    if cli.print_schema {
        let schema = schemars::schema_for!(SplitFinderParams);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let params = match &cli.config {
        Some(path) => load_params(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SplitFinderParams::default(),
    };
    let finder = build_split_finder(&params)?;

    let path = cli.file.context("missing input file")?;
    let options = CsvOptions {
        label_column: cli.label_column,
        has_header: !cli.no_header,
    };
    let data = read_labeled_csv(&path, options)
        .with_context(|| format!("failed to read {}", path.display()))?;
    tracing::info!(
        rows = data.rows.len(),
        features = data.feature_names.len(),
        "dataset loaded"
    );

    let best = finder.best_split(&data.rows, &data.labels)?;

    if cli.json {
        let out = match &best {
            Some(s) => {
                // Distribution columns follow first-seen label order.
                let (encoder, _) = LabelEncoder::fit(&data.labels);
                let classes: Vec<&String> = (0..encoder.number_of_classes())
                    .filter_map(|i| encoder.class_at(i))
                    .collect();
                json!({
                    "feature_name": data.feature_names.get(s.feature_index()),
                    "classes": classes,
                    "split": s,
                })
            }
            None => serde_json::Value::Null,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    match best {
        Some(s) => {
            let name = data
                .feature_names
                .get(s.feature_index())
                .map(String::as_str)
                .unwrap_or("?");
            println!(
                "feature={} ({name}) threshold={} merit={:.6}",
                s.feature_index(),
                s.threshold(),
                s.merit()
            );
        }
        None => println!("no split found"),
    }
    Ok(())
}
