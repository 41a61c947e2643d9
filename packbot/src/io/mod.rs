use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::EPOCH;
use anyhow::{Context, Result, ensure};
use log::{LevelFilter, info};
use serde::Serialize;

pub mod cli;

/// Fetches the raw JSON string from a source: `http(s)://` sources over the
/// network, anything else as a local file path.
pub fn fetch_json(source: &str) -> Result<String> {
    if source.starts_with("http://") || source.starts_with("https://") {
        http_fetch_json(source)
    } else {
        fs::read_to_string(source)
            .with_context(|| format!("could not open source path: {source}"))
    }
}

fn http_fetch_json(url: &str) -> Result<String> {
    let response = reqwest::blocking::Client::new()
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .with_context(|| format!("could not fetch source url: {url}"))?;

    let status = response.status();
    let body = response.text().unwrap_or_default();
    ensure!(
        status.is_success(),
        "request error (status: {status}, body: {body})"
    );
    Ok(body)
}

pub fn write_json<T: Serialize>(data: &T, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, data)
        .with_context(|| format!("could not write json to: {}", path.display()))?;
    info!("json written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

/// Logs go to stderr: stdout carries only the final report.
pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stderr())
        .apply()?;
    info!("epoch: {}", jiff::Zoned::now());
    Ok(())
}
