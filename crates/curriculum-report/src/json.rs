use curriculum_model::CheckRun;

/// Serialize the full run, every discrepancy included.
pub fn render_json(run: &CheckRun) -> serde_json::Result<String> {
    serde_json::to_string_pretty(run)
}
