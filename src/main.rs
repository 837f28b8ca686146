use anyhow::{Context, Result};
use clap::Parser;
use labelvec::{DatasetAssembler, ParserConfig, SparseLabelParser};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

/// Parse a labelled sparse vector file and report its contents
#[derive(Parser, Debug)]
#[command(name = "labelvec", version, about)]
struct Cli {
    /// Input file, one vector per line
    #[arg(required_unless_present = "describe")]
    input: Option<PathBuf>,

    /// JSON file with parser settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Token position always treated as a label (counting from 0)
    #[arg(long)]
    label_index: Option<usize>,

    /// Prefix marking comment lines
    #[arg(long)]
    comment: Option<String>,

    /// Print the parsed dataset as JSON
    #[arg(long)]
    json: bool,

    /// Print the accepted line format and exit
    #[arg(long)]
    describe: bool,
}

impl Cli {
    fn parser_config(&self) -> Result<ParserConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Cannot read config '{}'", path.display()))?;
                ParserConfig::from_json(&text)
                    .with_context(|| format!("Invalid config '{}'", path.display()))?
            }
            None => ParserConfig::default(),
        };

        if let Some(marker) = &self.comment {
            config = config.with_comment_marker(marker.clone());
        }
        if let Some(index) = self.label_index {
            config = config.with_label_index(index);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("labelvec=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let parser = SparseLabelParser::new(cli.parser_config()?);

    if cli.describe {
        println!("{}", parser.describe_format());
        return Ok(());
    }

    let Some(path) = &cli.input else {
        anyhow::bail!("No input file given");
    };

    let file =
        File::open(path).with_context(|| format!("Cannot open input '{}'", path.display()))?;
    let dataset = DatasetAssembler::new(parser)
        .assemble(BufReader::new(file))
        .with_context(|| format!("Failed to parse '{}'", path.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&dataset)?);
        return Ok(());
    }

    println!(
        "{} records, dimensionality {}",
        dataset.len(),
        dataset
            .dimensionality()
            .map_or_else(|| "unknown".to_string(), |d| d.to_string())
    );
    for (i, record) in dataset.iter().enumerate() {
        println!(
            "  #{} - {} coordinates, labels [{}]",
            i + 1,
            record.vector.nnz(),
            record.labels.join(", ")
        );
    }

    Ok(())
}
