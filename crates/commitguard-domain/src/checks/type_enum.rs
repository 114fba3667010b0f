use super::utils::{finding, header_data};
use crate::message::CommitMessage;
use crate::policy::EffectiveConfig;
use commitguard_types::{Finding, ids};

pub fn run(message: &CommitMessage, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_TYPE_ENUM) else {
        return;
    };
    let Some(commit_type) = message.header.commit_type.as_deref() else {
        return;
    };

    if !cfg.types.iter().any(|t| t == commit_type) {
        out.push(finding(
            message,
            policy,
            ids::CHECK_TYPE_ENUM,
            ids::CODE_TYPE_NOT_ALLOWED,
            format!("type must be one of [{}]", cfg.types.join(", ")),
            1,
            "Use one of the configured commit types, or extend `types` in commitguard.toml.",
            header_data(message),
        ));
    }
}
