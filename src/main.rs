#[tokio::main]
async fn main() -> std::io::Result<()> {
    race_calendar::run().await
}
