use crate::types::report::{ScoreReport, WeeklyHopeReport};

pub fn scores_to_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str("# Connection Scores\n\n");
    output.push_str(&format!("Average score: {}\n\n", report.average_score));
    output.push_str("## Connections\n\n");
    if report.entries.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    for entry in &report.entries {
        let b = &entry.breakdown;
        output.push_str(&format!(
            "- {} [{}] {}: {} (stage {}, communication {}, compatibility {}, emotional {})\n",
            entry.nickname,
            entry.connection_id,
            entry.stage,
            b.total,
            b.stage,
            b.communication,
            b.compatibility,
            b.emotional
        ));
    }
    output
}

pub fn weekly_to_markdown(report: &WeeklyHopeReport) -> String {
    let mut output = String::new();
    output.push_str("# Weekly Hope Report\n\n");
    output.push_str(&format!(
        "Week: {} to {}\n\nTrend: {}\n\n",
        report.week_start, report.week_end, report.trend
    ));
    match report.average_hope {
        Some(average) => output.push_str(&format!("Average hope: {average:.1}\n\n")),
        None => output.push_str("Average hope: no data\n\n"),
    }

    output.push_str("## Best Connection\n\n");
    match &report.best_connection {
        Some(best) => output.push_str(&format!(
            "- {} [{}] HIS {:.1}\n\n",
            best.nickname, best.connection_id, best.his
        )),
        None => output.push_str("- none\n\n"),
    }

    output.push_str("## Recent Events\n\n");
    if report.recent_events.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for event in &report.recent_events {
            output.push_str(&format!(
                "- {} {} [{}] intensity {}, impact {:+}",
                event.timestamp.format("%Y-%m-%d %H:%M"),
                event.event_type,
                event.connection_id,
                event.intensity,
                event.his_impact
            ));
            if let Some(note) = &event.note {
                output.push_str(&format!(": {note}"));
            }
            output.push('\n');
        }
        output.push('\n');
    }

    output.push_str("## Recommendations\n\n");
    for recommendation in &report.recommendations {
        output.push_str(&format!("- {recommendation}\n"));
    }
    output
}
