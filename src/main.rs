use anyhow::Context;
use drama_recs::{
    api::{create_router, AppState},
    config::Config,
    logging,
    models::SimilarityMatrix,
    services::{build_matrix_file, matrix_store, RatingEncoding, Recommender},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing("info");

    let config = Config::from_env()?;
    let matrix = load_or_build(&config)?;
    let state = AppState::new(Recommender::new(matrix), config.default_count);

    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_or_build(config: &Config) -> anyhow::Result<SimilarityMatrix> {
    if !config.matrix_path.exists() && config.build_on_start {
        tracing::info!(
            dataset = %config.dataset_path.display(),
            "Similarity matrix missing, building from dataset"
        );
        let encoding = config
            .rating_categories
            .clone()
            .map(RatingEncoding::Declared)
            .unwrap_or_default();
        let built = build_matrix_file(&config.dataset_path, &config.matrix_path, encoding)
            .context("Failed to build similarity matrix")?;
        return Ok(built.matrix);
    }

    matrix_store::load_matrix(&config.matrix_path).context("Failed to load similarity matrix")
}
