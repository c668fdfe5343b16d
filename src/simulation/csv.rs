// src/simulation/csv.rs

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::SimError;
use crate::simulation::integrator::{Mode, Snapshot};

pub const CSV_HEADER: &str = "time(s),x(m),x_dot(m/s),theta(rad),theta_dot(rad/s),u,frozen\n";

/// CSV出力の設定とヘッダーの書き込み
pub fn setup_csv_output(path: impl AsRef<Path>) -> Result<BufWriter<File>, SimError> {
    let path = path.as_ref();
    let io_error = |source| SimError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    write_csv_header(&mut writer).map_err(io_error)?;
    Ok(writer)
}

/// CSVヘッダーの書き込み
pub fn write_csv_header<W: Write>(writer: &mut W) -> Result<(), std::io::Error> {
    writer.write_all(CSV_HEADER.as_bytes())
}

/// CSV行の作成
pub fn create_csv_row(time: f64, snapshot: &Snapshot) -> String {
    format!(
        "{},{},{},{},{},{},{}\n",
        time,
        snapshot.x,
        snapshot.x_dot,
        snapshot.theta,
        snapshot.theta_dot,
        snapshot.u,
        snapshot.mode == Mode::Frozen
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_csv_row() {
        let snapshot = Snapshot {
            x: 0.5,
            x_dot: -1.0,
            theta: 0.25,
            theta_dot: 2.0,
            u: 3.0,
            mode: Mode::Frozen,
        };
        assert_eq!(create_csv_row(0.125, &snapshot), "0.125,0.5,-1,0.25,2,3,true\n");
    }

    #[test]
    fn test_header_matches_row_width() {
        let mut buffer = Vec::new();
        write_csv_header(&mut buffer).unwrap();
        let header = String::from_utf8(buffer).unwrap();

        let snapshot = Snapshot {
            x: 0.0,
            x_dot: 0.0,
            theta: 0.0,
            theta_dot: 0.0,
            u: 0.0,
            mode: Mode::Active,
        };
        let row = create_csv_row(0.0, &snapshot);
        assert_eq!(header.split(',').count(), row.split(',').count());
    }
}
