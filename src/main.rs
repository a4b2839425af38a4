fn main() {
    prompt_enhancer::app::cli::run();
}
