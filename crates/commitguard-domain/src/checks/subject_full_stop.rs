use super::utils::{finding, header_data};
use crate::message::CommitMessage;
use crate::policy::EffectiveConfig;
use commitguard_types::{Finding, ids};

pub fn run(message: &CommitMessage, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_SUBJECT_FULL_STOP) else {
        return;
    };
    let Some(subject) = message.header.subject.as_deref() else {
        return;
    };

    if subject.ends_with('.') {
        out.push(finding(
            message,
            policy,
            ids::CHECK_SUBJECT_FULL_STOP,
            ids::CODE_SUBJECT_FULL_STOP,
            "subject may not end with full stop".to_string(),
            1,
            "Remove the trailing `.` from the subject.",
            header_data(message),
        ));
    }
}
