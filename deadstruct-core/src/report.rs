//! Output formatting - plaintext and JSON.

use serde_json::json;

use crate::analyze::AnalysisOutcome;

/// Prints the unused-struct report in plain text format.
///
/// A fixed header line followed by one name per line, in first-declaration
/// order. The header is printed even when nothing is unused, matching the
/// scan's interactive output contract.
pub fn print_plain(outcome: &AnalysisOutcome) {
    println!("Non used structs found:");
    for name in &outcome.unused {
        println!("{name}");
    }
}

/// Prints the full outcome in JSON format.
///
/// Falls back to a simple diagnostic if serialization fails (should never
/// happen with string arrays, but the failure path is still handled).
pub fn print_json(outcome: &AnalysisOutcome) {
    let doc = json!({
        "root": outcome.root.display().to_string(),
        "files_scanned": outcome.files_scanned,
        "declared_count": outcome.declared.len(),
        "unused": outcome.unused,
        "file_errors": outcome.file_errors.iter().map(|e| {
            json!({
                "path": e.path.display().to_string(),
                "message": e.message,
            })
        }).collect::<Vec<_>>(),
    });

    match serde_json::to_string_pretty(&doc) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {e}");
            println!("{{\"unused\": {:?}}}", outcome.unused);
        }
    }
}
