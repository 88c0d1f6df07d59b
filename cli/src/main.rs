use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use minisearch_core::{DocId, SearchEngine};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

const SAMPLE_DOCS: [&str; 3] = [
    "The brown fox jumped over the brown dog",
    "The lazy brown dog sat in the corner",
    "The red fox bit the lazy dog",
];
const SAMPLE_QUERIES: [&str; 3] = ["brown", "fox", "lazy dog"];

#[derive(Debug, Deserialize)]
struct InputDoc {
    body: String,
}

#[derive(Serialize)]
struct JsonHit<'a> {
    query: &'a str,
    id: DocId,
    score: f64,
    content: &'a str,
}

#[derive(Parser)]
#[command(name = "minisearch")]
#[command(about = "In-memory TF-IDF full-text search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index the three sample documents and run the sample queries
    Demo,
    /// Index documents from a file or directory, then run queries against them
    Search {
        /// Input path (file or directory). JSON/JSONL records need a "body" field;
        /// any other file contributes one document per non-empty line
        #[arg(long)]
        input: String,
        /// Query to run; repeat for several
        #[arg(long = "query", required = true)]
        queries: Vec<String>,
        /// Maximum results per query (1..=100)
        #[arg(long, default_value_t = 10)]
        k: usize,
        /// Print one JSON object per hit instead of plain lines
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Demo => run_demo(&mut out),
        Commands::Search { input, queries, k, json } => {
            let mut engine = SearchEngine::new();
            load_documents(Path::new(&input), &mut engine)?;
            run_queries(&engine, &queries, k, json, &mut out)
        }
    }
}

fn run_demo(out: &mut impl Write) -> Result<()> {
    let mut engine = SearchEngine::new();
    for text in SAMPLE_DOCS {
        engine.add_document(text);
    }
    for (i, query) in SAMPLE_QUERIES.iter().enumerate() {
        if i > 0 { writeln!(out)?; }
        writeln!(out, "Search results for '{query}':")?;
        for doc in engine.search(query) {
            writeln!(out, "Document {}: {}", doc.id(), doc.content())?;
        }
    }
    Ok(())
}

fn run_queries(engine: &SearchEngine, queries: &[String], k: usize, json: bool, out: &mut impl Write) -> Result<()> {
    let k = k.clamp(1, 100);
    for (i, query) in queries.iter().enumerate() {
        let hits = engine.search_scored(query);
        tracing::info!(query = query.as_str(), total_hits = hits.len(), "query complete");
        if json {
            for hit in hits.iter().take(k) {
                let line = JsonHit { query, id: hit.document.id(), score: hit.score, content: hit.document.content() };
                writeln!(out, "{}", serde_json::to_string(&line)?)?;
            }
            continue;
        }
        if i > 0 { writeln!(out)?; }
        writeln!(out, "Search results for '{query}':")?;
        for hit in hits.iter().take(k) {
            writeln!(out, "Document {}: {}", hit.document.id(), hit.document.content())?;
        }
    }
    Ok(())
}

fn load_documents(input: &Path, engine: &mut SearchEngine) -> Result<usize> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
    } else if input.is_file() {
        files.push(input.to_path_buf());
    } else {
        return Err(anyhow!("input path {} does not exist", input.display()));
    }

    let before = engine.len();
    for file in files {
        match file.extension().and_then(|s| s.to_str()) {
            Some("jsonl") => index_jsonl(&file, engine)?,
            Some("json") => index_json(&file, engine)?,
            _ => index_lines(&file, engine)?,
        }
    }
    let added = engine.len() - before;
    tracing::info!(num_docs = added, num_terms = engine.num_terms(), "ingested documents");
    Ok(added)
}

fn index_jsonl(file: &Path, engine: &mut SearchEngine) -> Result<()> {
    let reader = BufReader::new(File::open(file)?);
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let doc: InputDoc = serde_json::from_str(&line)?;
        engine.add_document(doc.body);
    }
    Ok(())
}

fn index_json(file: &Path, engine: &mut SearchEngine) -> Result<()> {
    let reader = BufReader::new(File::open(file)?);
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    match json {
        serde_json::Value::Array(arr) => {
            for v in arr {
                let doc: InputDoc = serde_json::from_value(v)?;
                engine.add_document(doc.body);
            }
        }
        serde_json::Value::Object(_) => {
            let doc: InputDoc = serde_json::from_value(json)?;
            engine.add_document(doc.body);
        }
        _ => return Err(anyhow!("{}: expected a JSON object or array", file.display())),
    }
    Ok(())
}

fn index_lines(file: &Path, engine: &mut SearchEngine) -> Result<()> {
    let reader = BufReader::new(File::open(file)?);
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        engine.add_document(line);
    }
    Ok(())
}
