use sentiplot::{run_dashboard, DashboardConfig};

fn main() -> eframe::Result<()> {
    // RUST_LOG controls verbosity; default to info so loads and exports show.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run_dashboard(DashboardConfig::default())
}
