//! Serves the Retrieval-Augmented Conversational Recommendation demo page.

use nlrec_demos::{init_tracing, serve};
use nlrec_rarec::RaRecPage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    serve(RaRecPage, 8081).await
}
