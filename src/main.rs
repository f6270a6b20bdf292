fn main() {
    projmeta::app::cli::run();
}
