use super::utils::finding;
use crate::message::CommitMessage;
use crate::policy::EffectiveConfig;
use commitguard_types::{Finding, ids};
use serde_json::json;

pub fn run(message: &CommitMessage, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_HEADER_MAX_LENGTH) else {
        return;
    };

    let length = message.header.raw.chars().count();
    if length > cfg.header_max_length {
        out.push(finding(
            message,
            policy,
            ids::CHECK_HEADER_MAX_LENGTH,
            ids::CODE_HEADER_TOO_LONG,
            format!(
                "header must not be longer than {} characters, current length is {}",
                cfg.header_max_length, length
            ),
            1,
            "Shorten the subject and move details into the body.",
            json!({
                "header": message.header.raw,
                "length": length,
                "max_length": cfg.header_max_length,
            }),
        ));
    }
}
