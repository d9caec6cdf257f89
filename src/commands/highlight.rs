//! Highlight command - render a snippet as markup

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use log::debug;

use codetint::config::Config;
use codetint::output::{HighlightResult, OutputMode};

/// Highlight a file (or stdin) and print the result
pub fn highlight(
    config: &Config,
    file: Option<&Path>,
    lang: Option<&str>,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let file = file.filter(|f| f.as_os_str() != "-");

    let source = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
            buf
        },
    };

    let grammar = match lang {
        Some(lang) => config.resolve(lang),
        None => {
            let hint = file.and_then(|f| f.file_name()).and_then(|n| n.to_str());
            let detected = config.detect(hint, &source);
            debug!("detected grammar: {detected}");
            detected
        },
    };

    let highlighted = config.highlighter().highlight(&source, grammar);
    HighlightResult::from(highlighted).render(output_mode);
    Ok(())
}
