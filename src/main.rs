fn main() -> anyhow::Result<()> {
    nsdebug::run()
}
