//! Serves the Elaborative Query Reformulation demo page.

use nlrec_demos::{init_tracing, serve};
use nlrec_eqr::EqrPage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    serve(EqrPage, 8080).await
}
