use ferrous_zonecheck_application::use_cases::ZoneCheckReport;
use ferrous_zonecheck_domain::ReportFormat;

pub fn render(report: &ZoneCheckReport, format: ReportFormat) -> anyhow::Result<String> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        ReportFormat::Text => Ok(render_text(report)),
    }
}

fn render_text(report: &ZoneCheckReport) -> String {
    if report.is_clean() {
        return "No record set issues found.".to_string();
    }

    report.messages().join("\n")
}
