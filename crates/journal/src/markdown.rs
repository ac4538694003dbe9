use runlog_core::DecisionRecord;

/// Renders one decision entry. The block starts with a blank line and ends
/// with a `---` separator line.
pub fn render_decision(time_of_day: &str, record: &DecisionRecord) -> String {
    let options = record
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| format!("{}. {}", i + 1, option))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\n## [{time}] Decision: {title}\n\
         **Context**: {context}\n\
         **Options Considered**: \n\
         {options}\n\
         **Choice**: {choice}\n\
         **Reasoning**: {reasoning}\n\
         **Risk Assessment**: {risk}\n\
         **Scripts Called**: {scripts}\n\
         ---\n",
        time = time_of_day,
        title = record.title,
        context = record.context,
        options = options,
        choice = record.choice,
        reasoning = record.reasoning,
        risk = record.risk,
        scripts = record.scripts.join(", "),
    )
}
