use crate::model::ReportData;

/// Render the report as pretty-printed JSON.
pub fn render_json_report(data: &ReportData) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(data)?;
    json.push('\n');
    Ok(json)
}
