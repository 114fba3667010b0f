use super::utils::{finding, header_data};
use crate::message::CommitMessage;
use crate::policy::EffectiveConfig;
use crate::scope_policy::{ScopeVerdict, evaluator_for};
use commitguard_types::{Finding, ids};

pub fn run(message: &CommitMessage, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_SCOPE_ISSUE_ID) else {
        return;
    };

    let ScopeVerdict::Fail(reason) = evaluator_for(cfg.variant).evaluate(&message.header) else {
        return;
    };

    let mut data = header_data(message);
    data["variant"] = cfg.variant.as_str().into();

    out.push(finding(
        message,
        policy,
        ids::CHECK_SCOPE_ISSUE_ID,
        reason.code(),
        reason.message().to_string(),
        1,
        "Use `type(ISSUE-123): subject`; reverts wrap the full reverted header, e.g. `revert(ISSUE-124): feat(ISSUE-123): subject`.",
        data,
    ));
}
