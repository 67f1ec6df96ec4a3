use crate::scoring::score_breakdown;
use crate::types::connection::Connection;

const ANALYSIS_QUESTIONS: [&str; 5] = [
    "How engaged does the other person seem, judging by message length, questions asked and reply timing?",
    "Which topics produced the warmest responses, and which fell flat?",
    "Are there any red flags or signs of fading interest?",
    "What is a natural next step to move the relationship forward?",
    "Suggest two or three concrete messages I could send next.",
];

/// Labelled plain-text summary of the connection; absent fields are skipped.
pub fn format_connection_context(connection: &Connection) -> String {
    let mut lines = vec![
        format!("Nickname: {}", connection.nickname),
        format!("Platform: {}", connection.platform),
        format!("Stage: {}", connection.current_stage),
    ];

    let info = &connection.basic_info;
    if let Some(age) = info.age {
        lines.push(format!("Age: {age}"));
    }
    push_text(&mut lines, "Occupation", info.occupation.as_deref());
    push_text(&mut lines, "Location", info.location.as_deref());
    push_list(&mut lines, "Hobbies", info.hobbies.as_deref());

    let communication = &connection.communication;
    push_text(&mut lines, "Contact frequency", communication.frequency.as_deref());
    push_text(&mut lines, "Response time", communication.response_time.as_deref());
    push_text(
        &mut lines,
        "Communication style",
        communication.communication_style.as_deref(),
    );
    push_text(&mut lines, "Last contact", communication.last_contact.as_deref());

    let feelings = &connection.user_feelings;
    push_text(&mut lines, "My expectations", feelings.expectations.as_deref());
    push_list(
        &mut lines,
        "What I find attractive",
        feelings.attractive_points.as_deref(),
    );
    push_list(&mut lines, "My concerns", feelings.concerns.as_deref());

    let breakdown = score_breakdown(connection);
    lines.push(format!(
        "Relationship score: {}/100 (stage {}, communication {}, compatibility {}, emotional {})",
        breakdown.total,
        breakdown.stage,
        breakdown.communication,
        breakdown.compatibility,
        breakdown.emotional
    ));

    lines.join("\n")
}

fn push_text(lines: &mut Vec<String>, label: &str, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) {
        lines.push(format!("{label}: {value}"));
    }
}

fn push_list(lines: &mut Vec<String>, label: &str, values: Option<&[String]>) {
    if let Some(values) = values.filter(|values| !values.is_empty()) {
        lines.push(format!("{label}: {}", values.join(", ")));
    }
}

/// Builds an analysis prompt over an imported chat transcript. Only the last
/// `max_chat_chars` characters of the transcript are kept.
pub fn build_analysis_prompt(connection: &Connection, chat: &str, max_chat_chars: usize) -> String {
    let mut output = String::new();
    output.push_str(
        "You are a thoughtful dating coach. Analyse the conversation below between me and a match \
and give honest, kind advice.\n\n",
    );
    output.push_str("## Connection\n\n");
    output.push_str(&format_connection_context(connection));
    output.push_str("\n\n## Chat transcript\n\n");

    let chat = chat.trim();
    if chat.is_empty() {
        output.push_str("(no chat data was supplied; base the analysis on the profile above)\n");
    } else {
        let (excerpt, truncated) = tail_chars(chat, max_chat_chars);
        if truncated {
            output.push_str("(earlier messages omitted)\n");
        }
        output.push_str(excerpt);
        output.push('\n');
    }

    output.push_str("\n## Questions\n\n");
    for (index, question) in ANALYSIS_QUESTIONS.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, question));
    }
    output
}

fn tail_chars(text: &str, max_chars: usize) -> (&str, bool) {
    let count = text.chars().count();
    if count <= max_chars {
        return (text, false);
    }
    let skip = count - max_chars;
    match text.char_indices().nth(skip) {
        Some((offset, _)) => (&text[offset..], true),
        None => (text, false),
    }
}
