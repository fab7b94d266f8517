//! Annotext CLI - render annotated text documents to markup

mod io;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use annotext_core::{RenderedDocument, SemanticAnnotation, TypographicAnnotation};

#[derive(Parser)]
#[command(name = "annotext")]
#[command(version, about = "Render annotated text to markup", long_about = None)]
#[command(after_help = "EXAMPLES:
    annotext doc.json                    Render each line of an annotated document
    annotext notes.txt -s 0:5:h1         Style the first five chars as a heading
    annotext notes.txt -m 3:9:ref --whole --json")]
struct Cli {
    /// Annotated document (.json) or plain text file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Add a typographic annotation
    #[arg(short, long = "style", value_name = "START:END:STYLE", value_parser = parse_style)]
    styles: Vec<TypographicAnnotation>,

    /// Add a semantic annotation
    #[arg(short, long = "mark", value_name = "START:END:ID", value_parser = parse_mark)]
    marks: Vec<SemanticAnnotation>,

    /// Render the whole content as one segment instead of line by line
    #[arg(short, long)]
    whole: bool,

    /// Print the rendered segments as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let mut doc = io::load_file(&cli.input)?;
    log::info!(
        "loaded {} ({} chars, {} typographic, {} semantic)",
        cli.input.display(),
        doc.char_count(),
        doc.typography.len(),
        doc.semantics.len()
    );

    for style in cli.styles {
        doc.add_typography(style);
    }
    for mark in cli.marks {
        doc.add_semantic(mark);
    }

    let rendered = if cli.whole {
        RenderedDocument::whole(&doc)
    } else {
        RenderedDocument::by_line(&doc)
    };

    if cli.json {
        println!("{}", annotext_core::rendered_to_json(&rendered)?);
    } else {
        for segment in &rendered.segments {
            println!("{}", segment.markup);
        }
    }

    Ok(())
}

/// Split `START:END:REST`, keeping any further colons in REST
fn parse_triple(value: &str) -> Result<(i64, i64, String), String> {
    let mut parts = value.splitn(3, ':');
    let (Some(start), Some(end), Some(rest)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected START:END:NAME, got '{value}'"));
    };
    let start = start
        .trim()
        .parse()
        .map_err(|e| format!("invalid start '{start}': {e}"))?;
    let end = end
        .trim()
        .parse()
        .map_err(|e| format!("invalid end '{end}': {e}"))?;
    Ok((start, end, rest.to_string()))
}

fn parse_style(value: &str) -> Result<TypographicAnnotation, String> {
    let (start, end, style_id) = parse_triple(value)?;
    Ok(TypographicAnnotation::new(start, end, style_id))
}

fn parse_mark(value: &str) -> Result<SemanticAnnotation, String> {
    let (start, end, id) = parse_triple(value)?;
    Ok(SemanticAnnotation::new(start, end, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_style_argument() {
        assert_eq!(parse_style("0:5:h1"), Ok(TypographicAnnotation::new(0, 5, "h1")));
    }

    #[test]
    fn mark_id_may_contain_colons() {
        assert_eq!(
            parse_mark("-2:7:ref:a"),
            Ok(SemanticAnnotation::new(-2, 7, "ref:a"))
        );
    }

    #[test]
    fn rejects_malformed_triples() {
        assert!(parse_style("0:5").is_err());
        assert!(parse_style("x:5:b").is_err());
    }

    #[test]
    fn cli_collects_repeated_annotations() {
        let cli = Cli::try_parse_from([
            "annotext", "in.txt", "-s", "0:2:b", "--style", "1:2:i", "-m", "0:1:n", "--json",
        ])
        .unwrap();
        assert_eq!(cli.styles.len(), 2);
        assert_eq!(cli.marks, vec![SemanticAnnotation::new(0, 1, "n")]);
        assert!(cli.json);
        assert!(!cli.whole);
    }
}
