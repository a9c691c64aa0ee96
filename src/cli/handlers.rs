use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
    time::Instant,
};

use chrono::{SecondsFormat, Utc};
use tracing::{debug, info};

use crate::{
    core::{
        config::Config,
        data::parse,
        error::{ConvertError, Result},
        geometry::compute_geometry,
    },
    render::emit,
};

use super::parse::Cli;

pub fn convert(a: &Cli) -> Result<()> {
    let t_start = Instant::now();

    let content = read_input(a)?;
    info!("Reading {}...", a.input.display());

    let chart = parse(&content);
    info!(
        "Parsed chart: \"{}\" with {} points.",
        chart.title,
        chart.series.len()
    );

    let cfg = Config::builder()
        .modified(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
        .build()?;
    let geometry = compute_geometry(&chart, &cfg.canvas);
    let xml = emit(&chart, &geometry, &cfg);

    write_output(a, &xml)?;
    debug!(
        bytes = xml.len(),
        elapsed_us = t_start.elapsed().as_micros(),
        "conversion finished"
    );
    if !a.writes_stdout() {
        info!("Successfully created {}!", a.output.display());
        info!("You can now open this file in https://app.diagrams.net/");
    }
    Ok(())
}

fn read_input(a: &Cli) -> Result<String> {
    let path = a.input.as_path();
    if a.reads_stdin() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| read_error(path, source))?;
        return Ok(buf);
    }
    if !path.exists() {
        return Err(ConvertError::InputNotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| read_error(path, source))
}

fn write_output(a: &Cli, xml: &str) -> Result<()> {
    let path = a.output.as_path();
    let res = if a.writes_stdout() {
        let mut out = io::stdout().lock();
        out.write_all(xml.as_bytes()).and_then(|()| out.flush())
    } else {
        fs::write(path, xml)
    };
    res.map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn read_error(path: &Path, source: io::Error) -> ConvertError {
    ConvertError::Read {
        path: path.to_path_buf(),
        source,
    }
}
