use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use legacyping_frame::{ParsedStatus, Variant};
use legacyping_probe::ProbeError;
use legacyping_transport::format_target;
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// Everything known about one ping, ready to print.
pub struct PingReport<'a> {
    pub host: &'a str,
    pub port: u16,
    pub variant: Variant,
    pub outcome: Result<&'a ParsedStatus, &'a ProbeError>,
}

#[derive(Serialize)]
struct PingOutput<'a> {
    host: &'a str,
    port: u16,
    protocol: Variant,
    online: bool,
    reachable: bool,
    status: Option<&'a ParsedStatus>,
    error: Option<String>,
}

pub fn print_report(report: &PingReport<'_>, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(&json_output(report)).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            println!("{}", table_output(report));
        }
        OutputFormat::Pretty => {
            println!("{}", pretty_line(report));
        }
        OutputFormat::Raw => match report.outcome {
            Ok(status) => println!("{}", status.motd()),
            Err(_) => println!(),
        },
    }
}

fn json_output<'a>(report: &'a PingReport<'a>) -> PingOutput<'a> {
    PingOutput {
        host: report.host,
        port: report.port,
        protocol: report.variant,
        online: report.outcome.is_ok(),
        reachable: match report.outcome {
            Ok(_) => true,
            Err(err) => !err.is_unreachable(),
        },
        status: report.outcome.ok(),
        error: report.outcome.err().map(ToString::to_string),
    }
}

/// One line in the classic check format:
/// `host:port ([version], motd): OK`, `host:port (motd): OK` or `host:port: N/A`.
pub fn pretty_line(report: &PingReport<'_>) -> String {
    let target = format_target(report.host, report.port);
    match report.outcome {
        Ok(status) => match status.version() {
            Some(version) => format!("{target} ([{version}], {}): OK", status.motd()),
            None => format!("{target} ({}): OK", status.motd()),
        },
        Err(_) => format!("{target}: N/A"),
    }
}

fn table_output(report: &PingReport<'_>) -> Table {
    let target = format_target(report.host, report.port);
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "TARGET", "PROTOCOL", "VERSION", "MOTD", "PLAYERS", "STATUS",
        ]);

    match report.outcome {
        Ok(status) => {
            table.add_row(vec![
                target,
                report.variant.to_string(),
                status.version().unwrap_or("-").to_string(),
                status.motd().to_string(),
                format!("{}/{}", status.num_players(), status.max_players()),
                "OK".to_string(),
            ]);
        }
        Err(_) => {
            table.add_row(vec![
                target,
                report.variant.to_string(),
                "-".to_string(),
                "-".to_string(),
                "-".to_string(),
                "N/A".to_string(),
            ]);
        }
    }
    table
}
