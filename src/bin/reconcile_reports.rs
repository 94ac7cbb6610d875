use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    reconcile::apps::run_reconcile_reports(std::env::args().skip(1))
}
