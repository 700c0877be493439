use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{SyncLogic, SyncOptions, SyncReport};
use crate::errors::AppResult;
use crate::models::LocalDate;
use crate::remote::MiteClient;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::{expand_tilde, parse_window, plural};

/// Handle the `sync` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sync { file, only_pull } = cmd {
        cfg.ensure_ready()?;

        // il FILE posizionale vince su --timesheet / config
        let path = expand_tilde(file.as_deref().unwrap_or(cfg.timesheet.as_str()));
        let window = parse_window(&cfg.history)?;
        let client = MiteClient::new(&cfg.url, &cfg.token)?;

        let options = SyncOptions {
            document: path.clone(),
            only_pull: *only_pull,
            window,
            today: LocalDate::today(),
        };

        header(format!("Syncing {}", path.display()));

        let mut logic = SyncLogic::new(&client, options);
        let report = logic.run()?;
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &SyncReport) {
    match &report.push {
        Some(push) if push.total() == 0 => info("Nothing to push for the current month."),
        Some(push) => success(format!(
            "Pushed {}: {} created, {} updated, {} deleted",
            plural(push.total(), "entry change"),
            push.created,
            push.updated,
            push.deleted
        )),
        None => info("Push skipped (--only-pull)."),
    }

    let pull = &report.pull;
    if pull.entries == 0 {
        warning(format!("No entries on mite between {} and {}", pull.from, pull.to));
    }
    success(format!(
        "Pulled {} from {} to {} ({}, {} projects, {} services)",
        plural(pull.entries, "entry"),
        pull.from,
        pull.to,
        plural(pull.months.len(), "month"),
        pull.projects,
        pull.services
    ));
}
