mod cli;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use histrank::config::{self, Config};
use histrank::highlight;
use histrank::{input, parse_query, rank, Candidate, Ranked, RankingEngine};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank(args) => cmd_rank(args),
        Commands::Explain(args) => cmd_explain(args),
        Commands::Config => cmd_config(),
    }
}

fn cmd_rank(args: cli::RankArgs) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let engine = config.engine();
    let now = parse_time(args.now.as_deref())?;
    let combine = args.combine.unwrap_or(config.combine);
    let limit = args.limit.unwrap_or(config.max_results);
    let terms = parse_query(&args.query);

    let candidates = input::load_candidates(&args.input).context("Failed to load candidates")?;
    let total = candidates.len();

    let mut results = rank(&engine, &terms, candidates, combine, now);
    log::info!("{} of {} candidates matched {:?}", results.len(), total, terms);
    results.truncate(limit);

    if args.json {
        let json = serde_json::to_string_pretty(&results)?;
        println!("{}", json);
        return Ok(());
    }

    if results.is_empty() {
        eprintln!(
            "{} No entries matching \"{}\" among {} candidates",
            "Info:".blue(),
            args.query,
            total
        );
        return Ok(());
    }

    print_results_plain(&engine, &terms, &results, config.highlight);
    Ok(())
}

fn cmd_explain(args: cli::ExplainArgs) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let engine = config.engine();
    let now = parse_time(args.now.as_deref())?;
    let last_accessed = match args.last_accessed.as_deref() {
        Some(raw) => parse_time(Some(raw))?,
        None => now,
    };
    let candidate = Candidate::new(args.url, args.title.as_deref(), last_accessed);
    let terms = parse_query(&args.query);

    let fields = [candidate.url.as_str(), candidate.title().unwrap_or_default()];
    println!("{} {}", "matches:".bold(), engine.matches(&terms, &fields));

    for term in &terms {
        let url = engine.score_term(term, &candidate.url);
        print!(
            "  {} url: score {} matched {}/{}",
            term.yellow(),
            url.score,
            url.matched,
            candidate.url.chars().count()
        );
        if let Some(title) = candidate.title() {
            let t = engine.score_term(term, title);
            print!(
                "  title: score {} matched {}/{}",
                t.score,
                t.matched,
                title.chars().count()
            );
        }
        println!();
    }

    let relevancy = engine.word_relevancy(&terms, &candidate.url, candidate.title());
    let recency = engine.recency_score_at(candidate.last_accessed, now);
    println!("{} {:.4}", "relevancy:".bold(), relevancy);
    println!("{} {:.4}", "recency:".bold(), recency);
    println!(
        "{} {:.4} ({:?})",
        "score:".bold(),
        config.combine.apply(relevancy, recency),
        config.combine
    );

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let path = config::config_path()?;

    println!("{} {}\n", "Config file:".bold(), path.display());
    println!("{}", toml::to_string_pretty(&config)?);

    if !path.exists() {
        println!(
            "\n{} No config file found. Creating default at {}",
            "Note:".yellow(),
            path.display()
        );
        config.save().context("Failed to write config file")?;
    }

    Ok(())
}

/// Parses an optional RFC 3339 timestamp, defaulting to the current time.
fn parse_time(raw: Option<&str>) -> Result<DateTime<Utc>> {
    match raw {
        Some(raw) => Ok(DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("Invalid RFC 3339 timestamp: {}", raw))?
            .to_utc()),
        None => Ok(Utc::now()),
    }
}

/// Prints ranked results in plain text format
fn print_results_plain(engine: &RankingEngine, terms: &[String], results: &[Ranked], highlight: bool) {
    for (i, result) in results.iter().enumerate() {
        let title = result.candidate.title().unwrap_or("(no title)");

        println!(
            "{}. {} (score: {:.4})",
            (i + 1).to_string().bold(),
            emphasize(engine, terms, title, highlight),
            result.score
        );
        println!(
            "   {} {}",
            emphasize(engine, terms, &result.candidate.url, highlight).green(),
            result
                .candidate
                .last_accessed
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .blue()
        );
        println!(
            "   {}",
            format!(
                "relevancy {:.4}  recency {:.4}",
                result.relevancy, result.recency
            )
            .dimmed()
        );
        println!();
    }
}

fn emphasize(engine: &RankingEngine, terms: &[String], text: &str, highlight: bool) -> String {
    if !highlight {
        return text.to_string();
    }
    let ranges = highlight::match_ranges(engine, terms, text);
    highlight::segments(text, &ranges)
        .into_iter()
        .map(|(piece, hit)| {
            if hit {
                piece.bold().yellow().to_string()
            } else {
                piece.to_string()
            }
        })
        .collect()
}
