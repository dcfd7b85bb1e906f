use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;
use tf_idf_similarity::text::{tokenize_sentences, tokenize_words};
use tf_idf_similarity::{
    DefaultTFIDFEngine, DocumentIndex, Result, SearchConfig, StopWordSource, SublinearTFIDFEngine,
    TFIDFEngine, Weighting,
};

/// Hits shown per query when neither `--top-k` nor the config sets a limit
const DEFAULT_TOP_K: usize = 10;

/// Rank documents by TF-IDF cosine similarity.
#[derive(Parser, Debug)]
#[command(name = "tfidf", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank the lines of a document file against one or more queries
    Search {
        /// document file, one document per non-empty line; `-` reads stdin
        #[arg(short, long)]
        docs: PathBuf,
        /// free-text query, may be repeated
        #[arg(short, long = "query", required = true)]
        queries: Vec<String>,
        /// show only the best K hits per query [default: 10]
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
        /// stopword list file (overrides the config)
        #[arg(long, conflicts_with = "no_stopwords")]
        stopwords: Option<PathBuf>,
        /// keep stopwords
        #[arg(long)]
        no_stopwords: bool,
        /// use 1 + ln(count) term frequency
        #[arg(long)]
        sublinear: bool,
        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// print hits as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show word tokens, sentences and the analyzed form of a text
    Tokenize {
        /// text to tokenize; stdin when omitted
        #[arg(short, long)]
        text: Option<String>,
        /// JSON config file for the analyzer
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct QueryReport<'a> {
    query: &'a str,
    hits: Vec<HitReport<'a>>,
}

#[derive(Serialize)]
struct HitReport<'a> {
    doc_id: usize,
    score: f64,
    text: &'a str,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error ({}): {}", err.kind(), err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Search { docs, queries, top_k, stopwords, no_stopwords, sublinear, config, json } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(path) = stopwords {
                config.stopwords = StopWordSource::File(path);
            }
            if no_stopwords {
                config.stopwords = StopWordSource::None;
            }
            if sublinear {
                config.weighting = Weighting::Sublinear;
            }
            config.top_k = top_k.or(config.top_k).or(Some(DEFAULT_TOP_K));
            config.validate()?;
            let texts = read_documents(&docs)?;
            info!("loaded {} documents", texts.len());
            match config.weighting {
                Weighting::Raw => search::<DefaultTFIDFEngine>(&config, &texts, &queries, json),
                Weighting::Sublinear => search::<SublinearTFIDFEngine>(&config, &texts, &queries, json),
            }
        }
        Command::Tokenize { text, config } => {
            let analyzer = load_config(config.as_deref())?.build_analyzer()?;
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            println!("Word tokens:\n{}\n", quoted_list(&tokenize_words(&text)));
            println!("Sentence tokens:\n{}\n", quoted_list(&tokenize_sentences(&text)));
            let preprocessed: Vec<String> = tokenize_sentences(&text)
                .iter()
                .map(|sentence| analyzer.analyze(sentence).join(" "))
                .collect();
            println!("Preprocessed sentences:\n{}", quoted_list(&preprocessed));
            Ok(())
        }
    }
}

fn search<E>(config: &SearchConfig, texts: &[String], queries: &[String], json: bool) -> Result<()>
where
    E: TFIDFEngine + Send + Sync,
{
    let index: DocumentIndex<f64, E> = DocumentIndex::build(texts, config.build_analyzer()?)?;
    let mut reports = Vec::with_capacity(queries.len());
    for query in queries {
        let mut hits = index.search(query)?;
        if let Some(k) = config.top_k {
            hits = hits.top_k(k);
        }
        let report = QueryReport {
            query,
            hits: hits
                .iter()
                .map(|hit| HitReport {
                    doc_id: hit.doc_id,
                    score: hit.score,
                    text: index.text(hit.doc_id).unwrap_or_default(),
                })
                .collect(),
        };
        if !json {
            println!("Top for query: \"{}\"", report.query);
            for hit in &report.hits {
                println!("Doc {} -> {:.4}: {}", hit.doc_id, hit.score, hit.text);
            }
        }
        reports.push(report);
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    match path {
        Some(path) => SearchConfig::load(path),
        None => Ok(SearchConfig::default()),
    }
}

fn read_documents(path: &Path) -> Result<Vec<String>> {
    let raw = if path == Path::new("-") {
        read_stdin()?
    } else {
        fs::read_to_string(path)?
    };
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn quoted_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{item}'")).collect();
    format!("[{}]", quoted.join(", "))
}
