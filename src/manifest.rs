//! Declarative file table for the generated project.
//!
//! Every file the scaffolder writes is one [`FileEntry`]: a relative path
//! plus its content. Payloads are embedded at compile time from
//! `resources/templates/`, which mirrors the generated layout.
//!
//! Files named `.docx` / `.xlsx` hold plain text or CSV, not office
//! documents. Filenames are kept as-is so existing consumers still find them.

use std::fmt;

/// Placeholder substituted with the generation date.
pub const DATE_PLACEHOLDER: &str = "{date}";

mod embedded {
    pub const TEST_PLAN: &str =
        include_str!("../resources/templates/docs/test_plan/test_plan.docx");
    pub const RISK_ASSESSMENT: &str =
        include_str!("../resources/templates/docs/test_plan/risk_assessment.xlsx");
    pub const SRS: &str = include_str!("../resources/templates/docs/requirements/srs.docx");
    pub const TRACEABILITY_MATRIX: &str =
        include_str!("../resources/templates/docs/traceability/traceability_matrix.xlsx");

    pub const LOGIN_TESTS: &str =
        include_str!("../resources/templates/test_artifacts/test_cases/login_tests.xlsx");
    pub const RECORD_TESTS: &str =
        include_str!("../resources/templates/test_artifacts/test_cases/record_tests.xlsx");
    pub const LOGOUT_TESTS: &str =
        include_str!("../resources/templates/test_artifacts/test_cases/logout_tests.xlsx");
    pub const PATIENT_DATA: &str =
        include_str!("../resources/templates/test_artifacts/test_data/patient_data.csv");
    pub const EXECUTION_LOG: &str = include_str!(
        "../resources/templates/test_artifacts/execution_logs/test_execution_log.xlsx.tmpl"
    );
    pub const DEFECT_LOG: &str =
        include_str!("../resources/templates/test_artifacts/defect_reports/defect_log.xlsx");

    pub const TEST_SUMMARY_REPORT: &str =
        include_str!("../resources/templates/reports/test_summary_report.docx");
    pub const COMPLIANCE_REPORT: &str =
        include_str!("../resources/templates/reports/compliance_report.docx");
    pub const LESSONS_LEARNED: &str =
        include_str!("../resources/templates/reports/lessons_learned.docx");

    pub const ENV_CONFIG: &str = include_str!("../resources/templates/environments/env_config.docx");
    pub const TEST_CASE_TEMPLATE: &str =
        include_str!("../resources/templates/templates/test_case_template.xlsx");
    pub const DEFECT_REPORT_TEMPLATE: &str =
        include_str!("../resources/templates/templates/defect_report_template.xlsx");
    pub const JIRA_CONFIG: &str = include_str!("../resources/templates/tools/jira_config.md");
    pub const README: &str = include_str!("../resources/templates/README.md");
}

/// Content of one generated file.
#[derive(Clone, Copy)]
pub enum Content {
    /// Written verbatim.
    Static(&'static str),
    /// Produced from the `YYYY-MM-DD` date of the current run.
    Dated(fn(&str) -> String),
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Static(text) => f.debug_tuple("Static").field(&text.len()).finish(),
            Content::Dated(_) => f.write_str("Dated"),
        }
    }
}

/// One row of the file table.
#[derive(Debug, Clone, Copy)]
pub struct FileEntry {
    /// Path relative to the project root, `/`-separated.
    pub path: &'static str,
    pub content: Content,
}

impl FileEntry {
    const fn fixed(path: &'static str, text: &'static str) -> Self {
        Self {
            path,
            content: Content::Static(text),
        }
    }

    const fn dated(path: &'static str, render: fn(&str) -> String) -> Self {
        Self {
            path,
            content: Content::Dated(render),
        }
    }

    /// Final bytes for this file given the run date.
    pub fn render(&self, date: &str) -> String {
        match self.content {
            Content::Static(text) => text.to_string(),
            Content::Dated(render) => render(date),
        }
    }

    pub fn is_dated(&self) -> bool {
        matches!(self.content, Content::Dated(_))
    }
}

fn execution_log(date: &str) -> String {
    embedded::EXECUTION_LOG.replace(DATE_PLACEHOLDER, date)
}

/// Every file written by the scaffolder.
pub const FILES: &[FileEntry] = &[
    FileEntry::fixed("docs/test_plan/test_plan.docx", embedded::TEST_PLAN),
    FileEntry::fixed("docs/test_plan/risk_assessment.xlsx", embedded::RISK_ASSESSMENT),
    FileEntry::fixed("docs/requirements/srs.docx", embedded::SRS),
    FileEntry::fixed(
        "docs/traceability/traceability_matrix.xlsx",
        embedded::TRACEABILITY_MATRIX,
    ),
    FileEntry::fixed("test_artifacts/test_cases/login_tests.xlsx", embedded::LOGIN_TESTS),
    FileEntry::fixed("test_artifacts/test_cases/record_tests.xlsx", embedded::RECORD_TESTS),
    FileEntry::fixed("test_artifacts/test_cases/logout_tests.xlsx", embedded::LOGOUT_TESTS),
    FileEntry::fixed("test_artifacts/test_data/patient_data.csv", embedded::PATIENT_DATA),
    FileEntry::dated(
        "test_artifacts/execution_logs/test_execution_log.xlsx",
        execution_log,
    ),
    FileEntry::fixed("test_artifacts/defect_reports/defect_log.xlsx", embedded::DEFECT_LOG),
    FileEntry::fixed("reports/test_summary_report.docx", embedded::TEST_SUMMARY_REPORT),
    FileEntry::fixed("reports/compliance_report.docx", embedded::COMPLIANCE_REPORT),
    FileEntry::fixed("reports/lessons_learned.docx", embedded::LESSONS_LEARNED),
    FileEntry::fixed("environments/env_config.docx", embedded::ENV_CONFIG),
    FileEntry::fixed("templates/test_case_template.xlsx", embedded::TEST_CASE_TEMPLATE),
    FileEntry::fixed(
        "templates/defect_report_template.xlsx",
        embedded::DEFECT_REPORT_TEMPLATE,
    ),
    FileEntry::fixed("tools/jira_config.md", embedded::JIRA_CONFIG),
    FileEntry::fixed("README.md", embedded::README),
];

/// Look up a table entry by its relative path.
pub fn find(path: &str) -> Option<&'static FileEntry> {
    FILES.iter().find(|entry| entry.path == path)
}

/// Render the whole table for one date.
pub fn render_all(date: &str) -> Vec<(&'static str, String)> {
    FILES
        .iter()
        .map(|entry| (entry.path, entry.render(date)))
        .collect()
}
