fn main() {
    projexbuzz::app::cli::run();
}
