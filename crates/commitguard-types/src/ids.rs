//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks (registry order)
pub const CHECK_BODY_LEADING_BLANK: &str = "body.leading_blank";
pub const CHECK_FOOTER_LEADING_BLANK: &str = "footer.leading_blank";
pub const CHECK_HEADER_MAX_LENGTH: &str = "header.max_length";
pub const CHECK_SUBJECT_CASE: &str = "subject.case";
pub const CHECK_SUBJECT_FULL_STOP: &str = "subject.full_stop";
pub const CHECK_TYPE_CASE: &str = "type.case";
pub const CHECK_TYPE_ENUM: &str = "type.enum";
pub const CHECK_SCOPE_ISSUE_ID: &str = "scope.issue_id";

// Codes: body.leading_blank
pub const CODE_BODY_MISSING_LEADING_BLANK: &str = "body_missing_leading_blank";

// Codes: footer.leading_blank
pub const CODE_FOOTER_MISSING_LEADING_BLANK: &str = "footer_missing_leading_blank";

// Codes: header.max_length
pub const CODE_HEADER_TOO_LONG: &str = "header_too_long";

// Codes: subject.case
pub const CODE_SUBJECT_FORBIDDEN_CASE: &str = "subject_forbidden_case";

// Codes: subject.full_stop
pub const CODE_SUBJECT_FULL_STOP: &str = "subject_full_stop";

// Codes: type.case
pub const CODE_TYPE_NOT_LOWER_CASE: &str = "type_not_lower_case";

// Codes: type.enum
pub const CODE_TYPE_NOT_ALLOWED: &str = "type_not_allowed";

// Codes: scope.issue_id
pub const CODE_SCOPE_NOT_UPPERCASE: &str = "scope_not_uppercase";
pub const CODE_REVERT_MISSING_FULL_HEADER: &str = "revert_missing_full_header";
pub const CODE_SCOPE_REQUIRED: &str = "scope_required";
pub const CODE_REVERT_MISSING_ID: &str = "revert_missing_id";
pub const CODE_SUBJECT_REQUIRED: &str = "subject_required";
pub const CODE_SCOPE_NOT_ISSUE_ID: &str = "scope_not_issue_id";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
