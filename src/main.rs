fn load_dotenv() {
    // Endpoint and log settings come from a .env file in dev; plain
    // environment variables always apply.
    let _ = dotenvy::dotenv();
}

fn main() {
    load_dotenv();
    tracing_subscriber::fmt::init();

    #[cfg(any(feature = "web", feature = "desktop", feature = "mobile"))]
    dioxus::launch(finch::ui::App);

    #[cfg(not(any(feature = "web", feature = "desktop", feature = "mobile")))]
    tracing::error!("finch was built without a UI platform feature");
}
