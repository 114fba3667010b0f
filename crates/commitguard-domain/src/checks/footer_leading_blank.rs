use super::utils::{finding, header_data};
use crate::message::CommitMessage;
use crate::policy::EffectiveConfig;
use commitguard_types::{Finding, ids};

pub fn run(message: &CommitMessage, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_FOOTER_LEADING_BLANK) else {
        return;
    };

    let (Some(start), Some(_)) = (message.footer_start, message.footer.as_ref()) else {
        return;
    };

    // footer_start is never 0: the header is not a footer.
    let before = message.lines.get(start - 1).map(String::as_str);
    if before != Some("") {
        out.push(finding(
            message,
            policy,
            ids::CHECK_FOOTER_LEADING_BLANK,
            ids::CODE_FOOTER_MISSING_LEADING_BLANK,
            "footer must have leading blank line".to_string(),
            start as u32 + 1,
            "Insert an empty line before the first footer line.",
            header_data(message),
        ));
    }
}
