use crate::domain::models::JsonOut;
use crate::services::ledger::IssueLedger;

/// Categories with more evidence than this report only their count, to
/// keep the text output bounded.
const MAX_LISTED_EVIDENCE: usize = 5;

pub fn print_report(json: bool, ledger: &IssueLedger) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: ledger.report()
            })?
        );
        return Ok(());
    }

    println!("Analysis complete.");
    if ledger.is_empty() {
        println!("No issues found in repository.");
        return Ok(());
    }
    println!("Issues found in repository:");
    for (kind, evidence) in ledger.entries() {
        if evidence.len() <= MAX_LISTED_EVIDENCE {
            let plural = if evidence.len() == 1 { "" } else { "s" };
            println!("  {} ({} count{})", kind.label(), evidence.len(), plural);
            for note in evidence.iter().flatten() {
                println!("    {note}");
            }
        } else {
            println!("  {} ({} counts, not listed)", kind.label(), evidence.len());
        }
    }
    Ok(())
}
