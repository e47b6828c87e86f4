fn main() -> anyhow::Result<()> {
    artwork_browser::cli::run()
}
