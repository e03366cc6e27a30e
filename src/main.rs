fn main() {
    swa_push::app::cli::run();
}
