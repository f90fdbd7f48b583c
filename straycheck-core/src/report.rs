//! Output formatting - plaintext and JSON.

use serde_json::json;

use crate::finding::Finding;

/// Prints findings in plain text format, one line per finding.
pub fn print_plain(findings: &[Finding]) {
    if findings.is_empty() {
        println!("No suspicious constructs found.");
    } else {
        for f in findings {
            println!("{}: {}", f.span, f.message);
        }
    }
}

/// Prints findings in JSON format.
///
/// Falls back to an empty document if serialization fails (should never
/// happen for plain finding data, but the output must stay well-formed).
pub fn print_json(findings: &[Finding]) {
    match serde_json::to_string_pretty(&json!({ "findings": findings })) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            println!("{{\"findings\": []}}");
        }
    }
}

/// Process exit status for a finished run: non-zero iff findings exist.
pub fn exit_status(findings: &[Finding]) -> i32 {
    if findings.is_empty() {
        0
    } else {
        1
    }
}
