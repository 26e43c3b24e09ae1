use crate::{
    error::{Result, SimError},
    simulation::LandingAttempt,
};
use chrono::Local;
use csv::WriterBuilder;
use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

pub fn export_to_csv_with_path(
    attempts: &[LandingAttempt],
    output_dir: Option<&Path>,
) -> Result<PathBuf> {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let filename = format!("landings_{timestamp}.csv");

    let file_path = if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir).map_err(|e| SimError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        dir.join(&filename)
    } else {
        filename.into()
    };

    let file = File::create(&file_path).map_err(|e| SimError::CreateFile {
        path: file_path.clone(),
        source: e,
    })?;

    let writer = BufWriter::new(file);
    #[allow(unused_mut)]
    let mut builder = WriterBuilder::new();
    #[cfg(windows)]
    {
        use csv::Terminator;
        builder = builder.terminator(Terminator::CRLF);
    }

    let mut wtr = builder.from_writer(writer);

    wtr.write_record(["Rocket", "RocketId", "X", "Y", "Status", "Timestamp"])?;
    for attempt in attempts {
        let id = attempt.rocket_id.to_string();
        let x = attempt.point.x.to_string();
        let y = attempt.point.y.to_string();
        let ts = attempt.timestamp.format(TIMESTAMP_FORMAT).to_string();
        wtr.write_record([
            attempt.rocket.as_str(),
            id.as_str(),
            x.as_str(),
            y.as_str(),
            attempt.status.description(),
            ts.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(file_path)
}
