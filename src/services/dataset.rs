use std::{fs::File, io::Read, path::Path};

use crate::{
    error::{AppError, AppResult},
    models::{SeriesRecord, REQUIRED_COLUMNS},
};

/// Loads raw series records from a CSV file with a header row
///
/// Fails with a configuration error before parsing any row when a required
/// column is absent, so a bad input never produces a partial artifact.
pub fn load_records(path: impl AsRef<Path>) -> AppResult<Vec<SeriesRecord>> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "Loading series records");

    let file = File::open(path).map_err(|e| {
        AppError::Configuration(format!("cannot open dataset {}: {}", path.display(), e))
    })?;
    read_records(file)
}

/// Reads raw series records from any CSV source
pub fn read_records<R: Read>(source: R) -> AppResult<Vec<SeriesRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();

    if !missing.is_empty() {
        return Err(AppError::Configuration(format!(
            "dataset is missing required columns: {}",
            missing.join(", ")
        )));
    }

    let mut records = Vec::new();
    for result in reader.deserialize::<SeriesRecord>() {
        let record = result.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or_default();
            AppError::Data(format!("malformed record at line {}: {}", line, e))
        })?;
        records.push(record);
    }

    tracing::info!(count = records.len(), "Series records loaded");

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "kdrama_id,drama_name,year,director,country,type,tot_eps,duration,content_rt,synopsis,rank,pop";

    #[test]
    fn test_read_records_parses_and_ignores_extra_columns() {
        let csv = format!(
            "{}\nKD1,Star Struck,2023,Someone,South Korea,Drama,16,3900,15+ - Teens,A star meets a fan.,120,900\n",
            HEADER
        );

        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].drama_name.as_deref(), Some("Star Struck"));
        assert_eq!(records[0].series_type.as_deref(), Some("Drama"));
        assert_eq!(records[0].duration, Some(3900.0));
        assert_eq!(records[0].pop, Some(900.0));
    }

    #[test]
    fn test_empty_cells_are_missing() {
        let csv = format!(
            "{}\nKD2,Queenmaker,2023,,South Korea,Drama,11,,18+ Restricted (violence & profanity),,45,300\n",
            HEADER
        );

        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records[0].duration, None);
        assert_eq!(records[0].synopsis, None);
    }

    #[test]
    fn test_quoted_fields_with_commas() {
        let csv = format!(
            "{}\nKD3,\"Love, Again\",2020,X,South Korea,Drama,16,3600,15+ - Teens,\"Two people, one story.\",10,20\n",
            HEADER
        );

        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records[0].drama_name.as_deref(), Some("Love, Again"));
        assert_eq!(records[0].synopsis.as_deref(), Some("Two people, one story."));
    }

    #[test]
    fn test_missing_columns_is_configuration_error() {
        let csv = "drama_name,country,type\nStar Struck,South Korea,Drama\n";

        let err = read_records(csv.as_bytes()).unwrap_err();
        match err {
            AppError::Configuration(msg) => {
                assert!(msg.contains("synopsis"));
                assert!(msg.contains("content_rt"));
                assert!(!msg.contains("drama_name"));
            }
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_value_is_data_error() {
        let csv = format!(
            "{}\nKD1,Star Struck,twenty,X,South Korea,Drama,16,3900,15+ - Teens,Plot.,120,900\n",
            HEADER
        );

        let err = read_records(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::Data(_)));
    }

    #[test]
    fn test_load_records_missing_file() {
        let err = load_records("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
