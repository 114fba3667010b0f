use crate::message::CommitMessage;
use crate::policy::EffectiveConfig;
use commitguard_types::Finding;

mod body_leading_blank;
mod footer_leading_blank;
mod header_max_length;
mod scope_issue_id;
mod subject_case;
mod subject_full_stop;
mod type_case;
mod type_enum;
mod utils;

#[cfg(test)]
mod tests;

/// Run every enabled check in registry order.
///
/// The order is part of the output contract: findings are reported in the order the
/// checks run, so the first error a user sees is stable.
pub fn run_all(message: &CommitMessage, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    body_leading_blank::run(message, cfg, out);
    footer_leading_blank::run(message, cfg, out);
    header_max_length::run(message, cfg, out);
    subject_case::run(message, cfg, out);
    subject_full_stop::run(message, cfg, out);
    type_case::run(message, cfg, out);
    type_enum::run(message, cfg, out);
    scope_issue_id::run(message, cfg, out);
}

/// Number of checks the registry knows about.
pub const CHECK_COUNT: usize = 8;
