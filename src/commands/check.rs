//! Check command - validate the grammar table

use codetint::highlight::{Grammar, validate_all};
use codetint::output::{CheckResult, OutputMode};

/// Validate every grammar; fails if any rule can split a placeholder
pub fn check(output_mode: OutputMode) -> anyhow::Result<()> {
    let errors = validate_all();
    let result = CheckResult::new(Grammar::all().len(), &errors);
    result.render(output_mode);

    if !result.passed {
        anyhow::bail!("{} grammar rule(s) failed validation", errors.len());
    }
    Ok(())
}
