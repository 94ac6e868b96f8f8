fn main() -> anyhow::Result<()> {
    bench_setup::run()
}
