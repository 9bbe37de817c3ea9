//! Newslens CLI: keyword analytics over a news CSV corpus.
//!
//! `explore` runs the full dashboard pipeline for a seed keyword;
//! `graph` builds just the co-occurrence network and emits JSON/SVG.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use newslens::analytics::{self, TimePeriod};
use newslens::config::AnalysisConfig;
use newslens::corpus;
use newslens::graph;
use newslens::layout::{force_layout, LayoutConfig};
use newslens::render::{write_network_svg, SvgOptions};
use newslens::text::{KeywordExtractor, SpaceTokenizer};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "newslens", version, about = "Keyword news analytics")]
struct Cli {
    #[command(flatten)]
    resources: ResourceArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Word-list resources the normalizer and classifiers depend on.
#[derive(Args)]
struct ResourceArgs {
    /// Stopword list, one token per line
    #[arg(long, global = true, default_value = "resources/stopwords.txt")]
    stopwords: PathBuf,

    /// Entity gazetteer (e.g. company names), one per line
    #[arg(long, global = true, default_value = "resources/companies.txt")]
    gazetteer: PathBuf,

    /// Positive sentiment lexicon
    #[arg(long, global = true, default_value = "resources/positive.txt")]
    positive: PathBuf,

    /// Negative sentiment lexicon
    #[arg(long, global = true, default_value = "resources/negative.txt")]
    negative: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analytics pipeline for a seed keyword
    Explore {
        /// News corpus CSV
        csv: PathBuf,

        /// Seed keyword anchoring the analysis
        keyword: String,

        /// Time-series granularity: date, month or year
        #[arg(long, default_value = "month")]
        period: TimePeriod,

        /// Directory for rendered artifacts
        #[arg(long, default_value = "out")]
        out_dir: PathBuf,

        /// Layout RNG seed
        #[arg(long)]
        layout_seed: Option<u64>,
    },
    /// Build only the co-occurrence network
    Graph {
        /// News corpus CSV
        csv: PathBuf,

        /// Seed keyword anchoring the network
        keyword: String,

        /// Write adjacency-list JSON here instead of stdout
        #[arg(long)]
        json: Option<PathBuf>,

        /// Also render an SVG here
        #[arg(long)]
        svg: Option<PathBuf>,

        /// Layout RNG seed
        #[arg(long)]
        layout_seed: Option<u64>,
    },
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Explore {
            ref csv,
            ref keyword,
            period,
            ref out_dir,
            layout_seed,
        } => run_explore(&cli.resources, csv, keyword, period, out_dir, layout_seed),
        Commands::Graph {
            ref csv,
            ref keyword,
            ref json,
            ref svg,
            layout_seed,
        } => run_graph(
            &cli.resources,
            csv,
            keyword,
            json.as_deref(),
            svg.as_deref(),
            layout_seed,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn load_config(resources: &ResourceArgs) -> anyhow::Result<AnalysisConfig> {
    AnalysisConfig::load(
        &resources.stopwords,
        &resources.gazetteer,
        &resources.positive,
        &resources.negative,
    )
    .context("failed to load analysis resources")
}

fn run_explore(
    resources: &ResourceArgs,
    csv: &std::path::Path,
    keyword: &str,
    period: TimePeriod,
    out_dir: &std::path::Path,
    layout_seed: Option<u64>,
) -> anyhow::Result<()> {
    let config = load_config(resources)?;
    let tokenizer = SpaceTokenizer;
    let extractor = KeywordExtractor::new(&config, &tokenizer);

    let articles = corpus::load_articles(csv)?;
    let filtered = corpus::filter_by_keyword(&articles, keyword);
    println!(
        "{} of {} articles mention \"{}\"",
        filtered.len(),
        articles.len(),
        keyword
    );

    let volumes = analytics::volumes(&filtered, &config);
    let mut sentiment_table = Table::new();
    sentiment_table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Sentiment", "Articles"]);
    sentiment_table.add_row(vec!["positive".to_string(), volumes.positive.to_string()]);
    sentiment_table.add_row(vec!["negative".to_string(), volumes.negative.to_string()]);
    sentiment_table.add_row(vec!["neutral".to_string(), volumes.neutral.to_string()]);
    println!("\nSentiment\n{sentiment_table}");

    let series = analytics::volume_over_time(&filtered, keyword, period);
    let mut volume_table = Table::new();
    volume_table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![period.to_string(), "Articles".to_string()]);
    for (bucket, count) in &series.buckets {
        volume_table.add_row(vec![bucket.clone(), count.to_string()]);
    }
    println!("\nVolume over time\n{volume_table}");
    if let Some((bucket, count)) = &series.peak {
        println!("Peak: {bucket} ({count} articles)");
    }

    if let Some((headline, count)) = corpus::most_published_headline(&filtered) {
        println!("\nMost republished headline ({count}x): {headline}");
    }

    let words = analytics::word_frequencies(&filtered, &extractor)?;
    print_top("Top keywords", &analytics::frequency::top_n(&words, 15));

    let entities = analytics::entity_mentions(&filtered, &extractor, &config)?;
    print_top("Entity mentions", &analytics::frequency::top_n(&entities, 15));

    let network = graph::build(&filtered, keyword, &extractor)?;
    let sizes = graph::node_sizes(&network);
    let layout_config = LayoutConfig {
        seed: layout_seed.unwrap_or(LayoutConfig::default().seed),
        ..LayoutConfig::default()
    };
    let positions = force_layout(&network, &layout_config);

    let svg_path = out_dir.join("network_graph.svg");
    write_network_svg(
        &network,
        &sizes,
        &positions,
        keyword,
        &SvgOptions::default(),
        &svg_path,
    )?;
    let json_path = out_dir.join("network_graph.json");
    std::fs::write(
        &json_path,
        serde_json::to_string_pretty(&network.to_json())?,
    )
    .with_context(|| format!("failed to write {}", json_path.display()))?;

    println!(
        "\nNetwork: {} nodes, {} edges -> {}",
        network.node_count(),
        network.edge_count(),
        svg_path.display()
    );
    Ok(())
}

fn run_graph(
    resources: &ResourceArgs,
    csv: &std::path::Path,
    keyword: &str,
    json: Option<&std::path::Path>,
    svg: Option<&std::path::Path>,
    layout_seed: Option<u64>,
) -> anyhow::Result<()> {
    let config = load_config(resources)?;
    let tokenizer = SpaceTokenizer;
    let extractor = KeywordExtractor::new(&config, &tokenizer);

    let articles = corpus::load_articles(csv)?;
    let filtered = corpus::filter_by_keyword(&articles, keyword);
    let network = graph::build(&filtered, keyword, &extractor)?;

    let rendered = serde_json::to_string_pretty(&network.to_json())?;
    match json {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => println!("{rendered}"),
    }

    if let Some(path) = svg {
        let sizes = graph::node_sizes(&network);
        let layout_config = LayoutConfig {
            seed: layout_seed.unwrap_or(LayoutConfig::default().seed),
            ..LayoutConfig::default()
        };
        let positions = force_layout(&network, &layout_config);
        write_network_svg(
            &network,
            &sizes,
            &positions,
            keyword,
            &SvgOptions::default(),
            path,
        )?;
    }
    Ok(())
}

fn print_top(label: &str, entries: &[(String, usize)]) {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Keyword", "Count"]);
    for (token, count) in entries {
        table.add_row(vec![token.clone(), count.to_string()]);
    }
    println!("\n{label}\n{table}");
}
