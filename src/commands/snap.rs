//! `ghpm thanos-snap`: make every eligible public repository private.

use std::io::{self, Write};

use super::common::{cancel_on_ctrl_c, open_session};
use crate::privacy::{SwitchReport, switch_all_public_to_private};
use crate::shared::config::Config;
use crate::shared::env_var::EnvVars;
use crate::shared::table::{column_width, pad_or_truncate};

const MAX_REPO_WIDTH: usize = 48;
const MAX_RESULT_WIDTH: usize = 24;

pub async fn run(config: &Config, env: &EnvVars) -> anyhow::Result<()> {
    let session = open_session(config, env).await?;
    let cancel = cancel_on_ctrl_c();

    let result = switch_all_public_to_private(&session, &cancel).await;
    let mut stdout = io::stdout().lock();
    match result {
        Ok(report) => {
            render_report(&mut stdout, &report)?;
            Ok(())
        }
        Err(aborted) => {
            render_report(&mut stdout, &aborted.report)?;
            Err(aborted.into())
        }
    }
}

/// One row per repository followed by the summary line.
fn render_report<W: Write>(writer: &mut W, report: &SwitchReport) -> io::Result<()> {
    if report.outcomes.is_empty() {
        writeln!(writer, "No public repositories to switch.")?;
        return writeln!(writer, "{}", report.summary());
    }

    let repo_width = column_width(
        "REPOSITORY",
        report.outcomes.iter().map(|o| o.full_name.as_str()),
        MAX_REPO_WIDTH,
    );
    let result_width = column_width(
        "RESULT",
        report.outcomes.iter().map(|o| o.kind.label()),
        MAX_RESULT_WIDTH,
    );

    writeln!(
        writer,
        "{} {} DETAIL",
        pad_or_truncate("REPOSITORY", repo_width),
        pad_or_truncate("RESULT", result_width)
    )?;
    for outcome in &report.outcomes {
        let line = format!(
            "{} {} {}",
            pad_or_truncate(&outcome.full_name, repo_width),
            pad_or_truncate(outcome.kind.label(), result_width),
            outcome.detail.as_deref().unwrap_or_default()
        );
        writeln!(writer, "{}", line.trim_end())?;
    }
    writeln!(writer)?;
    writeln!(writer, "{}", report.summary())?;
    if report.failed() > 0 {
        let failures: Vec<String> = report
            .counts()
            .into_iter()
            .filter(|(kind, _)| kind.is_failure())
            .map(|(kind, count)| format!("{kind}: {count}"))
            .collect();
        writeln!(writer, "Failures by kind: {}", failures.join(", "))?;
    }
    Ok(())
}
