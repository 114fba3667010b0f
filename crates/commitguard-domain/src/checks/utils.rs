use crate::fingerprint::fingerprint_for_header;
use crate::message::CommitMessage;
use crate::policy::CheckPolicy;
use commitguard_types::{Finding, Location};
use serde_json::{Value, json};

/// Build a finding anchored at `line` (1-based) of `message`.
#[allow(clippy::too_many_arguments)]
pub fn finding(
    message: &CommitMessage,
    policy: &CheckPolicy,
    check_id: &str,
    code: &str,
    text: String,
    line: u32,
    help: &str,
    data: Value,
) -> Finding {
    Finding {
        severity: policy.severity,
        check_id: check_id.to_string(),
        code: code.to_string(),
        message: text,
        location: Some(Location {
            commit: message.commit.clone(),
            line: Some(line),
            col: None,
        }),
        help: Some(help.to_string()),
        url: None,
        fingerprint: Some(fingerprint_for_header(check_id, code, &message.header.raw)),
        data,
    }
}

/// Common payload describing the header a finding is about.
pub fn header_data(message: &CommitMessage) -> Value {
    let header = &message.header;
    json!({
        "header": header.raw,
        "type": header.commit_type,
        "scope": header.scope,
        "subject": header.subject,
    })
}
