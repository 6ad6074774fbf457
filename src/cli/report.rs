use crate::config::CrackConfig;
use crate::crack::{CrackOutcome, CrackReport, SaveStatus};
use colored::Colorize;

/// Startup banner listing the run options
pub fn render_banner(config: &CrackConfig) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", format!("> HashCrack v{}", crate::VERSION).yellow()));
    let lines = [
        format!("Hash type: {}", config.hash),
        format!("Key terms: '{}'", config.key_terms.join(",")),
        format!("Gen-file: '{}'", config.generated_path.display()),
        format!(
            "Use: '{}'",
            config
                .preload_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        ),
        format!("Input hash: {}", config.target.as_deref().unwrap_or("")),
        format!("Max candidates: {}", config.max_candidates),
    ];
    for line in lines {
        output.push_str(&format!("{}\n", line.bright_white()));
    }

    output
}

/// Human readable summary of a finished run
pub fn render_report(report: &CrackReport) -> String {
    let mut output = String::new();
    output.push('\n');

    if report.capped {
        output.push_str(&format!(
            "{}\n",
            format!("Generation stopped at {} candidates (maximum reached).", report.candidates)
                .yellow()
        ));
    }

    match &report.outcome {
        CrackOutcome::Generated => {
            output.push_str(&format!(
                "{}\n",
                format!("Generated {} passwords.", report.candidates).bright_green()
            ));
        }
        CrackOutcome::Cracked { plaintext, index } => {
            output.push_str(&format!(
                "{}\n",
                format!("Password cracked: {}", plaintext).bright_green()
            ));
            output.push_str(&format!(
                "{}\n",
                format!("Found at candidate {} of {}.", index + 1, report.candidates).bright_white()
            ));
        }
        CrackOutcome::Exhausted => {
            output.push_str(&format!(
                "{}\n",
                format!(
                    "Failed to crack password. Generated {} passwords.",
                    report.candidates
                )
                .bright_red()
            ));
        }
        CrackOutcome::Interrupted { during } => {
            output.push_str(&format!(
                "{}\n",
                format!(
                    "Interrupted while {}, saved {} passwords.",
                    during, report.candidates
                )
                .bright_yellow()
            ));
        }
    }

    match &report.save {
        SaveStatus::Saved { path, count } => {
            output.push_str(&format!(
                "{}\n",
                format!("Saved {} passwords to {}", count, path.display()).bright_white()
            ));
        }
        SaveStatus::Failed { path, error } => {
            output.push_str(&format!(
                "{}\n",
                format!("Failed to save passwords to {}: {}", path.display(), error)
                    .bright_yellow()
            ));
        }
    }

    output
}
