use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use crate::{
    error::{AppError, AppResult},
    models::SimilarityMatrix,
};

/// Header of the label column in the persisted matrix
pub const INDEX_COLUMN: &str = "drama_name";

/// Persists a matrix as CSV: a header of titles, then one labeled row per title
///
/// The file is written to a sibling temporary path and renamed into place, so
/// a failed write never leaves a truncated artifact behind.
pub fn save_matrix(matrix: &SimilarityMatrix, path: impl AsRef<Path>) -> AppResult<()> {
    let path = path.as_ref();
    let tmp_path = path.with_extension("csv.tmp");

    let written = File::create(&tmp_path)
        .map_err(AppError::from)
        .and_then(|file| write_matrix(matrix, file))
        .and_then(|()| std::fs::rename(&tmp_path, path).map_err(AppError::from));

    if let Err(e) = written {
        if let Err(cleanup) = std::fs::remove_file(&tmp_path) {
            tracing::debug!(path = %tmp_path.display(), error = %cleanup, "No temporary matrix to remove");
        }
        return Err(e);
    }

    tracing::info!(path = %path.display(), series = matrix.len(), "Similarity matrix saved");
    Ok(())
}

pub fn write_matrix<W: Write>(matrix: &SimilarityMatrix, sink: W) -> AppResult<()> {
    let mut writer = csv::Writer::from_writer(sink);

    let mut header = Vec::with_capacity(matrix.len() + 1);
    header.push(INDEX_COLUMN.to_string());
    header.extend(matrix.labels().iter().cloned());
    writer.write_record(&header)?;

    for (i, label) in matrix.labels().iter().enumerate() {
        let mut row = Vec::with_capacity(matrix.len() + 1);
        row.push(label.clone());
        row.extend(matrix.row(i).iter().map(|v| format!("{:?}", v)));
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

pub fn load_matrix(path: impl AsRef<Path>) -> AppResult<SimilarityMatrix> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        AppError::Configuration(format!(
            "cannot open similarity matrix {}: {}",
            path.display(),
            e
        ))
    })?;

    let matrix = read_matrix(file)?;
    tracing::info!(path = %path.display(), series = matrix.len(), "Similarity matrix loaded");
    Ok(matrix)
}

/// Reads a matrix, checking that row labels repeat the header and every row is full
pub fn read_matrix<R: Read>(source: R) -> AppResult<SimilarityMatrix> {
    // Row widths are checked below so a ragged row surfaces as a data error
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(source);

    let labels: Vec<String> = reader.headers()?.iter().skip(1).map(str::to_string).collect();
    let n = labels.len();
    let mut values = Vec::with_capacity(n * n);
    let mut rows = 0;

    for result in reader.records() {
        let record = result?;
        if rows >= n {
            return Err(AppError::Data(format!(
                "similarity matrix has more than {} rows",
                n
            )));
        }

        let label = record.get(0).unwrap_or_default();
        if label != labels[rows] {
            return Err(AppError::Data(format!(
                "row {} is labeled '{}' but column {} is '{}'",
                rows + 1,
                label,
                rows + 1,
                labels[rows]
            )));
        }

        if record.len() != n + 1 {
            return Err(AppError::Data(format!(
                "row '{}' has {} similarity values, expected {}",
                label,
                record.len().saturating_sub(1),
                n
            )));
        }

        for cell in record.iter().skip(1) {
            let value: f64 = cell.trim().parse().map_err(|_| {
                AppError::Data(format!("invalid similarity '{}' in row '{}'", cell, label))
            })?;
            values.push(value);
        }
        rows += 1;
    }

    if rows != n {
        return Err(AppError::Data(format!(
            "similarity matrix has {} columns but {} rows",
            n, rows
        )));
    }

    SimilarityMatrix::new(labels, values)
}
