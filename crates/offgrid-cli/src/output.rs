use comfy_table::{Cell, Color, Table};
use offgrid_core::models::{GameEntry, RiskAssessment, RiskLabel, ScanReport};
use owo_colors::OwoColorize;

fn label_color(label: RiskLabel) -> Color {
    match label {
        RiskLabel::LikelyOffline => Color::Green,
        RiskLabel::RiskyOffline => Color::Yellow,
        RiskLabel::UnlikelyOffline => Color::Red,
    }
}

/// Print the full scan report: summary line, game table sorted riskiest
/// first, reasons, and any parse faults.
pub fn print_scan_report(report: &ScanReport, show_noise: bool) {
    println!();
    println!("  {}", "offgrid".bold());
    println!("  {}", "Offline Playability Audit".dimmed());
    println!();
    println!(
        "  {} manifests · {} games · {} support entries · {} parse faults",
        report.manifest_count.to_string().bold(),
        report.games.len().to_string().bold(),
        report.noise.len(),
        report.faults.len(),
    );
    println!();

    if !report.games.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["App ID", "Title", "Score", "Verdict"]);

        // Riskiest first.
        let mut sorted: Vec<&GameEntry> = report.games.iter().collect();
        sorted.sort_by(|a, b| b.risk.score.cmp(&a.risk.score));

        for entry in &sorted {
            let c = label_color(entry.risk.label);
            table.add_row(vec![
                Cell::new(&entry.record.app_id),
                Cell::new(&entry.record.name),
                Cell::new(entry.risk.score).fg(c),
                Cell::new(entry.risk.label.as_str()).fg(c),
            ]);
        }
        println!("{table}");

        for entry in &sorted {
            if entry.risk.reasons.is_empty() {
                continue;
            }
            println!();
            println!("  {}", entry.record.name.bold());
            for reason in &entry.risk.reasons {
                println!("    {} {reason}", "·".dimmed());
            }
        }
    }

    if show_noise && !report.noise.is_empty() {
        println!();
        println!("  {}", "Support entries (not scored)".dimmed());
        for record in &report.noise {
            println!("    {} {} ({})", "·".dimmed(), record.name, record.app_id);
        }
    }

    if !report.faults.is_empty() {
        println!();
        println!("  {}", "Parse faults".bold());
        for fault in &report.faults {
            println!("    {} {}", "!".red(), fault.message);
        }
    }

    println!();
}

/// Print one ad-hoc risk assessment.
pub fn print_risk_assessment(name: &str, risk: &RiskAssessment) {
    let score_colored = match risk.label {
        RiskLabel::LikelyOffline => risk.score.to_string().green().to_string(),
        RiskLabel::RiskyOffline => risk.score.to_string().yellow().to_string(),
        RiskLabel::UnlikelyOffline => risk.score.to_string().red().to_string(),
    };

    println!();
    println!(
        "  {} {} {}/100 {}",
        "▸".bold(),
        name.bold(),
        score_colored,
        format_args!("({})", risk.label).dimmed(),
    );
    for reason in &risk.reasons {
        println!("    {} {reason}", "·".dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_colors_follow_severity() {
        assert_eq!(label_color(RiskLabel::LikelyOffline), Color::Green);
        assert_eq!(label_color(RiskLabel::RiskyOffline), Color::Yellow);
        assert_eq!(label_color(RiskLabel::UnlikelyOffline), Color::Red);
    }
}
