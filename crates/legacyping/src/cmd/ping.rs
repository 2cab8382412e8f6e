use std::time::Duration;

use legacyping_frame::Variant;
use legacyping_probe::{probe, ProbeConfig, DEFAULT_PORT};

use crate::cmd::PingArgs;
use crate::exit::{probe_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_report, OutputFormat, PingReport};

pub fn run(args: PingArgs, format: OutputFormat) -> CliResult<i32> {
    let config = resolve_config(&args)?;
    let result = probe(&config);

    let report = PingReport {
        host: &config.host,
        port: config.port,
        variant: config.variant,
        outcome: result.as_ref(),
    };
    print_report(&report, format);

    match result {
        Ok(_) => Ok(SUCCESS),
        Err(err) => Err(probe_error("ping failed", err)),
    }
}

/// Build the probe configuration from positionals, then apply flags on top.
///
/// Accepted positional forms:
/// `host`, `host port`, `host port timeout`, `host port timeout protocol`,
/// `host:port`, `host:port timeout`, `host:port timeout protocol`.
fn resolve_config(args: &PingArgs) -> CliResult<ProbeConfig> {
    let (host, inline_port) = split_target(&args.target)?;
    let mut config = ProbeConfig::new(host, inline_port.unwrap_or(DEFAULT_PORT));

    let mut rest = args.rest.iter();
    if inline_port.is_none() {
        if let Some(port) = rest.next() {
            config.port = parse_port(port)?;
        }
    }
    if let Some(timeout) = rest.next() {
        config.timeout = parse_timeout(timeout)?;
    }
    if let Some(protocol) = rest.next() {
        config.variant = parse_protocol(protocol)?;
    }
    if let Some(extra) = rest.next() {
        return Err(CliError::new(
            USAGE,
            format!("unexpected argument after protocol: {extra}"),
        ));
    }

    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(timeout) = &args.timeout {
        config.timeout = parse_timeout(timeout)?;
    }
    if let Some(protocol) = &args.protocol {
        config.variant = parse_protocol(protocol)?;
    }

    Ok(config)
}

/// Split `host`, `host:port` or `[v6]:port`. A bare IPv6 literal has no port.
fn split_target(target: &str) -> CliResult<(String, Option<u16>)> {
    let target = target.trim();

    let (host, port) = if let Some(bracketed) = target.strip_prefix('[') {
        let (host, after) = bracketed
            .split_once(']')
            .ok_or_else(|| CliError::new(USAGE, format!("unterminated '[' in target: {target}")))?;
        match after {
            "" => (host, None),
            _ => match after.strip_prefix(':') {
                Some(port) => (host, Some(parse_port(port)?)),
                None => {
                    return Err(CliError::new(USAGE, format!("invalid target: {target}")));
                }
            },
        }
    } else if target.matches(':').count() == 1 {
        let (host, port) = target
            .split_once(':')
            .ok_or_else(|| CliError::new(USAGE, format!("invalid target: {target}")))?;
        (host, Some(parse_port(port)?))
    } else {
        (target, None)
    };

    if host.is_empty() {
        return Err(CliError::new(USAGE, "host must not be empty"));
    }
    Ok((host.to_string(), port))
}

fn parse_port(input: &str) -> CliResult<u16> {
    match input.trim().parse::<u16>() {
        Ok(0) => Err(CliError::new(USAGE, "port must be greater than zero")),
        Ok(port) => Ok(port),
        Err(_) => Err(CliError::new(USAGE, format!("invalid port: {input}"))),
    }
}

fn parse_protocol(input: &str) -> CliResult<Variant> {
    input
        .parse::<Variant>()
        .map_err(|err| CliError::new(USAGE, err.to_string()))
}

/// Parse `1.7` (seconds), `2s` or `500ms`.
fn parse_timeout(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "timeout must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "s")
    };

    let value: f64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid timeout value: {input}")))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(CliError::new(USAGE, "timeout must be greater than zero"));
    }

    let secs = match unit {
        "ms" => value / 1000.0,
        _ => value,
    };
    let timeout = Duration::try_from_secs_f64(secs)
        .map_err(|_| CliError::new(USAGE, format!("timeout out of range: {input}")))?;
    if timeout.is_zero() {
        return Err(CliError::new(
            USAGE,
            format!("timeout below one nanosecond: {input}"),
        ));
    }
    Ok(timeout)
}
