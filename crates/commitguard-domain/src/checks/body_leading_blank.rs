use super::utils::{finding, header_data};
use crate::message::CommitMessage;
use crate::policy::EffectiveConfig;
use commitguard_types::{Finding, ids};

pub fn run(message: &CommitMessage, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_BODY_LEADING_BLANK) else {
        return;
    };

    if message.body.is_none() {
        return;
    }

    if message.line_after_header() != Some("") {
        out.push(finding(
            message,
            policy,
            ids::CHECK_BODY_LEADING_BLANK,
            ids::CODE_BODY_MISSING_LEADING_BLANK,
            "body must have leading blank line".to_string(),
            2,
            "Insert an empty line between the header and the body.",
            header_data(message),
        ));
    }
}
