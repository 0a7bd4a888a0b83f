mod common;

use drama_recs::{
    error::AppError,
    models::QueryError,
    services::{build_matrix_file, matrix_store, RatingEncoding, Recommender},
};

#[test]
fn test_build_persist_and_query() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = common::write_dataset(dir.path());
    let output = dir.path().join("matrix.csv");

    let built = build_matrix_file(&dataset, &output, RatingEncoding::Sorted).unwrap();
    assert_eq!(built.report.loaded, 6);
    assert_eq!(built.report.durations_imputed, 1);
    assert_eq!(built.report.dropped_missing_synopsis, 1);
    assert_eq!(built.matrix.len(), 5);

    let loaded = matrix_store::load_matrix(&output).unwrap();
    assert_eq!(loaded, built.matrix);

    let recommender = Recommender::new(loaded);
    let recs = recommender.recommend("Star Struck", 3).unwrap();
    assert_eq!(recs.recommendations.len(), 3);
    assert!(!recs.titles().contains(&"Star Struck"));
    let scores: Vec<f64> = recs.recommendations.iter().map(|r| r.similarity).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_matrix_properties() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = common::write_dataset(dir.path());
    let output = dir.path().join("matrix.csv");

    let matrix = build_matrix_file(&dataset, &output, RatingEncoding::Sorted)
        .unwrap()
        .matrix;

    for i in 0..matrix.len() {
        assert!((matrix.get(i, i) - 1.0).abs() < 1e-9);
        for j in 0..matrix.len() {
            let v = matrix.get(i, j);
            assert!((0.0..=1.0).contains(&v));
            assert!((v - matrix.get(j, i)).abs() < 1e-12);
        }
    }
}

#[test]
fn test_query_properties() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = common::write_dataset(dir.path());
    let output = dir.path().join("matrix.csv");
    let matrix = build_matrix_file(&dataset, &output, RatingEncoding::Sorted)
        .unwrap()
        .matrix;
    let recommender = Recommender::new(matrix);

    assert_eq!(
        recommender.recommend("Star-Struck!!", 2).unwrap().recommendations,
        recommender.recommend("star struck", 2).unwrap().recommendations
    );

    let all = recommender.recommend("Queenmaker", 50).unwrap();
    assert_eq!(all.recommendations.len(), 4);

    assert_eq!(
        recommender.recommend("Nonexistent Show Xyz", 2).unwrap_err(),
        QueryError::NotFound {
            query: "Nonexistent Show Xyz".to_string()
        }
    );
}

#[test]
fn test_missing_column_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = dir.path().join("broken.csv");
    std::fs::write(&dataset, "drama_name,country\nStar Struck,South Korea\n").unwrap();
    let output = dir.path().join("matrix.csv");

    let err = build_matrix_file(&dataset, &output, RatingEncoding::Sorted).unwrap_err();
    assert!(matches!(err, AppError::Configuration(_)));
    assert!(!output.exists());
}

#[test]
fn test_empty_dataset_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = dir.path().join("empty.csv");
    std::fs::write(
        &dataset,
        "drama_name,country,type,synopsis,year,tot_eps,duration,content_rt,rank,pop\nA,South Korea,Drama,,2020,16,3600,G,1,1\n",
    )
    .unwrap();
    let output = dir.path().join("matrix.csv");

    let err = build_matrix_file(&dataset, &output, RatingEncoding::Sorted).unwrap_err();
    assert!(matches!(err, AppError::Data(msg) if msg.contains("empty dataset")));
    assert!(!output.exists());
}
