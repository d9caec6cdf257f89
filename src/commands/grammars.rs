//! Grammars command - list the grammar table

use codetint::highlight::Grammar;
use codetint::output::{GrammarInfo, GrammarListResult, OutputMode};

/// List every grammar
pub fn grammars(output_mode: OutputMode) -> anyhow::Result<()> {
    let result = GrammarListResult {
        grammars: Grammar::all().into_iter().map(GrammarInfo::describe).collect(),
    };
    result.render(output_mode);
    Ok(())
}
