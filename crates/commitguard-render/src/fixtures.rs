use crate::{
    RenderableData, RenderableFinding, RenderableLocation, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};

pub fn passing_report() -> RenderableReport {
    RenderableReport {
        verdict: RenderableVerdictStatus::Pass,
        findings: Vec::new(),
        data: RenderableData {
            profile: "flexible".to_string(),
            variant: "flexible".to_string(),
            messages_checked: 1,
            messages_ignored: 0,
            errors: 0,
            warnings: 0,
        },
    }
}

pub fn failing_report() -> RenderableReport {
    RenderableReport {
        verdict: RenderableVerdictStatus::Fail,
        findings: vec![
            RenderableFinding {
                severity: RenderableSeverity::Warning,
                check_id: Some("body.leading_blank".to_string()),
                code: "body_missing_leading_blank".to_string(),
                message: "body must have leading blank line".to_string(),
                header: Some("feat: add export".to_string()),
                location: Some(RenderableLocation {
                    commit: Some("abc1234".to_string()),
                    line: Some(2),
                }),
                help: Some("Separate the header from the body with an empty line.".to_string()),
                url: None,
            },
            RenderableFinding {
                severity: RenderableSeverity::Error,
                check_id: Some("scope.issue_id".to_string()),
                code: "scope_required".to_string(),
                message: "a scope must be set".to_string(),
                header: Some("feat: add export".to_string()),
                location: Some(RenderableLocation {
                    commit: Some("abc1234".to_string()),
                    line: Some(1),
                }),
                help: None,
                url: None,
            },
        ],
        data: RenderableData {
            profile: "strict".to_string(),
            variant: "strict".to_string(),
            messages_checked: 2,
            messages_ignored: 1,
            errors: 1,
            warnings: 1,
        },
    }
}
