//! `RhymeFlow` command line: rhyme schemes and statistics for lyrics files.
//!
//! Usage:
//!   rhymeflow scheme <file> [--json] [--vocab <path>]
//!   rhymeflow stats [<file|dir>] [--json] [--vocab <path>]

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use rhymeflow::clustering::legend;
use rhymeflow::config::Config;
use rhymeflow::services::LyricsLibrary;
use rhymeflow::{vocabulary, RhymeAnalyzer, Token, Vocabulary};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: rhymeflow <scheme|stats> [<file|dir>] [--json] [--vocab <path>]";

/// Parsed command line.
struct Args {
    command: String,
    target: Option<PathBuf>,
    json: bool,
    vocab: Option<PathBuf>,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let Some(command) = args.next() else { bail!(USAGE) };
        let mut parsed = Self { command, target: None, json: false, vocab: None };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => parsed.json = true,
                "--vocab" => {
                    let path = args.next().context("--vocab needs a path")?;
                    parsed.vocab = Some(PathBuf::from(shellexpand::tilde(&path).to_string()));
                }
                flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
                _ if parsed.target.is_none() => parsed.target = Some(PathBuf::from(&arg)),
                _ => bail!("unexpected argument {arg}\n{USAGE}"),
            }
        }
        Ok(parsed)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse(std::env::args().skip(1))?;
    let config = Config::load().context("Failed to load configuration")?;

    let vocab_path = args
        .vocab
        .clone()
        .or_else(|| config.vocabulary_path.clone())
        .context("No vocabulary file: pass --vocab or set RHYMEFLOW_VOCABULARY")?;
    let vocabulary = vocabulary::load(&vocab_path)
        .with_context(|| format!("Failed to load vocabulary from {}", vocab_path.display()))?;
    let analyzer = config.analyzer();

    match args.command.as_str() {
        "scheme" => {
            let path = args.target.as_deref().context("scheme needs a lyrics file")?;
            print_scheme(path, &vocabulary, &analyzer, args.json)
        }
        "stats" => {
            let path = args
                .target
                .or_else(|| config.lyrics_dir.clone())
                .context("stats needs a file or directory (or RHYMEFLOW_LYRICS_DIR)")?;
            print_stats(&path, &vocabulary, &analyzer, args.json)
        }
        other => bail!("unknown command {other}\n{USAGE}"),
    }
}

fn read_lyrics(path: &Path) -> Result<String> {
    fs_err::read_to_string(path).context("Failed to read lyrics")
}

fn print_scheme(
    path: &Path,
    vocabulary: &Vocabulary,
    analyzer: &RhymeAnalyzer,
    json: bool,
) -> Result<()> {
    let lyrics = read_lyrics(path)?;
    let lines = analyzer.rhyme_scheme(&lyrics, vocabulary);

    if json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
        return Ok(());
    }

    print!("{}", render_scheme(&lines));
    if !lyrics.ends_with('\n') {
        println!();
    }
    for group in legend(&lines) {
        println!("{}: {} ({})", group.label, group.words.join(", "), group.count);
    }
    Ok(())
}

/// Lyrics text with each labeled word suffixed by `[label]`.
fn render_scheme(lines: &[Vec<Token>]) -> String {
    let mut out = String::new();
    for token in lines.iter().flatten() {
        out.push_str(&token.text);
        if let Some(label) = token.rhyme_group {
            out.push('[');
            out.push_str(label.as_str());
            out.push(']');
        }
    }
    out
}

fn print_stats(
    path: &Path,
    vocabulary: &Vocabulary,
    analyzer: &RhymeAnalyzer,
    json: bool,
) -> Result<()> {
    if path.is_dir() {
        let library = LyricsLibrary::scan(path)?;
        let report = library.analyze(vocabulary, analyzer);
        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }
        for song in &report.songs {
            println!("== {} ==", song.title);
            print_statistics_text(&song.statistics);
            println!();
        }
        let t = &report.totals;
        println!("== Library ({} songs) ==", t.songs);
        println!("rhymable words:  {}", t.total_rhymable_words);
        println!("perfect rhymes:  {}", t.perfect_rhymes);
        println!("near rhymes:     {}", t.near_rhymes);
        println!("sounds like:     {}", t.sounds_like);
        println!("internal rhymes: {}", t.internal_rhymes);
        println!("avg density:     {:.1}%", t.average_density);
        return Ok(());
    }

    let lyrics = read_lyrics(path)?;
    let stats = analyzer.statistics(&lyrics, vocabulary);
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_statistics_text(&stats);
    }
    Ok(())
}

fn print_statistics_text(stats: &rhymeflow::Statistics) {
    println!("rhymable words:  {}", stats.total_rhymable_words);
    println!("perfect rhymes:  {}", stats.perfect_rhymes);
    println!("near rhymes:     {}", stats.near_rhymes);
    println!("sounds like:     {}", stats.sounds_like);
    println!("internal rhymes: {}", stats.internal_rhymes);
    println!("rhyme density:   {:.1}%", stats.rhyme_density);
    for group in &stats.rhyme_groups {
        println!("  {}: {}", group.label, group.words.join(", "));
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        Args::parse(list.iter().map(|s| (*s).to_string()))
    }

    #[test]
    fn test_parse_args() {
        let parsed = args(&["scheme", "song.txt", "--json", "--vocab", "/tmp/v.json"]).unwrap();
        assert_eq!(parsed.command, "scheme");
        assert_eq!(parsed.target, Some(PathBuf::from("song.txt")));
        assert!(parsed.json);
        assert_eq!(parsed.vocab, Some(PathBuf::from("/tmp/v.json")));

        assert!(args(&[]).is_err());
        assert!(args(&["stats", "--vocab"]).is_err());
        assert!(args(&["stats", "a", "b"]).is_err());
        assert!(args(&["stats", "--verbose"]).is_err());
    }

    #[test]
    fn test_render_scheme_keeps_text() {
        let vocab: Vocabulary = [("cat", "K AE1 T"), ("hat", "HH AE1 T"), ("sat", "S AE1 T")]
            .iter()
            .map(|(w, p)| ((*w).to_string(), (*p).to_string()))
            .collect();
        let lines = RhymeAnalyzer::default().rhyme_scheme("the cat\nin a hat\nsat", &vocab);
        assert_eq!(render_scheme(&lines), "the cat[A]\nin a hat[A]\nsat[A]");
    }
}
