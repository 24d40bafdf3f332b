#[tokio::main]
async fn main() -> anyhow::Result<()> {
    emoji_catalog_explorer::cli::run().await
}
