#![deny(missing_docs)]
//! Docgrade command-line interface.
//!
//! Scores generated documentation files in batch and renders
//! text, JSON, or Markdown reports.

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use docgrade_core::{
    CodeAnalysis, QualityScorer, ScoredDocument, render_json, render_markdown, render_text,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

pub(crate) type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// File extensions treated as scoreable documentation.
const DOC_EXTENSIONS: &[&str] = &["md", "markdown", "yaml", "yml"];

#[derive(Parser)]
#[command(name = "docgrade", version, about = "Docgrade CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(&["file", "dir", "path"])
))]
struct DocSourceArgs {
    /// File containing documentation paths (one per line).
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Directory containing documentation files to score.
    #[arg(long)]
    dir: Option<PathBuf>,
    /// Single documentation file to score.
    #[arg(long)]
    path: Option<PathBuf>,
}

#[derive(Args, Clone)]
struct ScoreArgs {
    /// Documentation type driving rubric selection.
    #[arg(long, default_value = "README")]
    doc_type: String,
    /// JSON file with the structural analysis of the documented source.
    #[arg(long)]
    code_analysis: Option<PathBuf>,
    /// Original source file, enabling the improvement delta.
    #[arg(long)]
    input_code: Option<PathBuf>,
    /// Maximum number of documents scored concurrently.
    #[arg(short = 'j', long, default_value_t = 5)]
    concurrency: usize,
    /// Exit with an error when any document scores below this value.
    #[arg(long)]
    min_score: Option<u8>,
}

#[derive(Args, Clone)]
struct OutputArgs {
    /// Output format for report data.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write the report to a file instead of stdout.
    #[arg(long = "report-output")]
    report_output: Option<PathBuf>,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

#[derive(Subcommand)]
enum Commands {
    /// Score documentation files and report per-criterion results.
    Score {
        #[command(flatten)]
        source: DocSourceArgs,
        #[command(flatten)]
        score: ScoreArgs,
        #[command(flatten)]
        report: OutputArgs,
    },
}

#[cfg(not(test))]
#[tokio::main]
async fn main() -> CliResult<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            source,
            score,
            report,
        } => run_score(source, score, report).await,
    }
}

async fn run_score(source: DocSourceArgs, args: ScoreArgs, output: OutputArgs) -> CliResult<()> {
    let paths = resolve_source_args(&source)?;
    if paths.is_empty() {
        return Err("no documentation files found".into());
    }

    let analysis = Arc::new(load_code_analysis(args.code_analysis.as_deref()).await?);
    let input_code = Arc::new(load_input_code(args.input_code.as_deref()).await?);
    let doc_type = Arc::new(args.doc_type.clone());

    let concurrency = if args.concurrency == 0 {
        1
    } else {
        args.concurrency
    };
    let semaphore = Arc::new(Semaphore::new(concurrency));
    let mut tasks = JoinSet::new();
    for (index, path) in paths.iter().cloned().enumerate() {
        let permit = semaphore.clone().acquire_owned().await?;
        let analysis = analysis.clone();
        let input_code = input_code.clone();
        let doc_type = doc_type.clone();
        tasks.spawn(async move {
            let _permit = permit;
            let scored = score_document(&path, &analysis, &doc_type, &input_code).await;
            (index, path, scored)
        });
    }

    let mut documents: Vec<(usize, ScoredDocument)> = Vec::new();
    let mut errors: Vec<String> = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        let (index, path, scored) = joined?;
        match scored {
            Ok(document) => documents.push((index, document)),
            Err(error) => errors.push(format!("{}: {error}", path.display())),
        }
    }
    documents.sort_by_key(|(index, _)| *index);
    let documents: Vec<ScoredDocument> =
        documents.into_iter().map(|(_, document)| document).collect();

    let rendered = render_report(&documents, output.format)?;
    emit_report(&rendered, output.report_output.as_deref()).await?;

    for error in &errors {
        log::error!("{error}");
        eprintln!("error: {error}");
    }
    if !errors.is_empty() {
        return Err(format!("{} document(s) could not be scored", errors.len()).into());
    }
    if let Some(min_score) = args.min_score {
        let failing: Vec<&ScoredDocument> = documents
            .iter()
            .filter(|document| document.result.score < min_score)
            .collect();
        if !failing.is_empty() {
            return Err(format!(
                "{} document(s) scored below the minimum of {min_score}",
                failing.len()
            )
            .into());
        }
    }
    Ok(())
}

async fn score_document(
    path: &Path,
    analysis: &CodeAnalysis,
    doc_type: &str,
    input_code: &str,
) -> CliResult<ScoredDocument> {
    let documentation = tokio::fs::read_to_string(path).await?;
    let result = QualityScorer::new().score(&documentation, analysis, doc_type, input_code);
    Ok(ScoredDocument::new(path.display().to_string(), result))
}

fn resolve_source_args(source: &DocSourceArgs) -> CliResult<Vec<PathBuf>> {
    if let Some(path) = &source.path {
        return Ok(vec![path.clone()]);
    }
    if let Some(file) = &source.file {
        let contents = std::fs::read_to_string(file)?;
        return Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(PathBuf::from)
            .collect());
    }
    if let Some(dir) = &source.dir {
        let mut paths = list_documentation_files(dir)?;
        paths.sort();
        return Ok(paths);
    }
    Err("a documentation source is required".into())
}

fn list_documentation_files(root: &Path) -> CliResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if is_hidden(&path) {
                continue;
            }
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                pending.push(path);
            } else if file_type.is_file() && is_documentation_file(&path) {
                files.push(path);
            }
        }
    }

    Ok(files)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn is_documentation_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            DOC_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

async fn load_code_analysis(path: Option<&Path>) -> CliResult<CodeAnalysis> {
    let Some(path) = path else {
        return Ok(CodeAnalysis::default());
    };
    let contents = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&contents)?)
}

async fn load_input_code(path: Option<&Path>) -> CliResult<String> {
    let Some(path) = path else {
        return Ok(String::new());
    };
    Ok(tokio::fs::read_to_string(path).await?)
}

fn render_report(documents: &[ScoredDocument], format: OutputFormat) -> CliResult<String> {
    let rendered = match format {
        OutputFormat::Text => render_text(documents),
        OutputFormat::Json => render_json(documents)?,
        OutputFormat::Markdown => render_markdown(documents),
    };
    Ok(rendered)
}

async fn emit_report(rendered: &str, destination: Option<&Path>) -> CliResult<()> {
    match destination {
        Some(path) => tokio::fs::write(path, rendered).await?,
        None => print!("{rendered}"),
    }
    Ok(())
}
