use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use yamlquery::config::{Config, OutputFormat};
use yamlquery::document::node::YamlValue;
use yamlquery::file::loader::{load_query_file, load_query_from_stdin};
use yamlquery::query::{SequenceError, YamlQuery};
use yamlquery::render::{render, render_integer, render_integers};

/// yamlquery - look up a typed value in a YAML document
#[derive(Parser)]
#[command(name = "yamlquery")]
#[command(version)]
#[command(about = "Look up a typed value in a YAML document by path", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// YAML file to query (`-` reads stdin; `.gz` files are decompressed)
    file: String,

    /// Path segments: field names, or integer indices into sequences
    path: Vec<String>,

    /// Type to extract the value as
    #[arg(short = 'a', long = "as", value_enum, default_value_t = Kind::Value)]
    kind: Kind,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Fail on malformed or non-mapping documents instead of treating them as empty
    #[arg(long)]
    strict: bool,
}

/// Extraction target selected with `--as`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    Value,
    String,
    Bool,
    Number,
    Integer,
    Object,
    Sequence,
    Strings,
    Integers,
    Numbers,
    Bools,
    Objects,
    Sequences,
}

fn init_tracing(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load();
    init_tracing(&config);

    let strict = cli.strict || config.strict;
    let format = cli.format.unwrap_or(config.output_format);

    let yq = if cli.file == "-" {
        load_query_from_stdin(strict)?
    } else {
        load_query_file(&cli.file, strict)?
    };

    let output = run_query(&yq, cli.kind, &cli.path, format)
        .with_context(|| format!("Query {:?} failed", cli.path.join(".")))?;
    println!("{}", output);

    Ok(())
}

/// Runs the query selected by `kind` and renders the result.
///
/// Integer results are rendered directly so they never lose precision in `f64`.
fn run_query(yq: &YamlQuery, kind: Kind, path: &[String], format: OutputFormat) -> Result<String> {
    let value = match kind {
        Kind::Integer => return Ok(render_integer(yq.integer(path)?)),
        Kind::Integers => return render_integers(&yq.integers(path)?, format),
        Kind::Value => yq.value(path)?.clone(),
        Kind::String => yq.string(path)?.into(),
        Kind::Bool => yq.bool(path)?.into(),
        Kind::Number => yq.number(path)?.into(),
        Kind::Object => yq.object(path)?.into(),
        Kind::Sequence => yq.sequence(path)?.into(),
        Kind::Strings => collect(yq.strings(path), YamlValue::String)?,
        Kind::Numbers => collect(yq.numbers(path), YamlValue::Number)?,
        Kind::Bools => collect(yq.bools(path), YamlValue::Boolean)?,
        Kind::Objects => collect(yq.objects(path), YamlValue::Object)?,
        Kind::Sequences => collect(yq.sequences(path), YamlValue::Sequence)?,
    };
    render(&value, format)
}

fn collect<T, F>(result: Result<Vec<T>, SequenceError<T>>, wrap: F) -> Result<YamlValue>
where
    T: std::fmt::Debug + Send + Sync + 'static,
    F: Fn(T) -> YamlValue,
{
    let items = result?;
    Ok(YamlValue::Sequence(items.into_iter().map(wrap).collect()))
}
