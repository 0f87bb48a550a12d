#[tokio::main]
async fn main() {
    boat_booking_backend::run().await;
}
