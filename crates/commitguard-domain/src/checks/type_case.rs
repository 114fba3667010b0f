use super::utils::{finding, header_data};
use crate::message::CommitMessage;
use crate::policy::EffectiveConfig;
use commitguard_types::{Finding, ids};

pub fn run(message: &CommitMessage, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_TYPE_CASE) else {
        return;
    };
    let Some(commit_type) = message.header.commit_type.as_deref() else {
        return;
    };

    if commit_type.to_lowercase() != commit_type {
        out.push(finding(
            message,
            policy,
            ids::CHECK_TYPE_CASE,
            ids::CODE_TYPE_NOT_LOWER_CASE,
            "type must be lower-case".to_string(),
            1,
            "Write the commit type in lower-case letters.",
            header_data(message),
        ));
    }
}
