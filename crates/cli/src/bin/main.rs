use have_it_diagnostics::Result;

#[tokio::main(flavor = "current_thread")]
pub async fn main() -> Result<()> {
    have_it_cli::run_cli().await
}
