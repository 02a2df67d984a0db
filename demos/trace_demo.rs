use sortrace::generator::generate_with_seed;
use sortrace::{Algorithm, Cursor, SortTrace};
use std::env;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let algorithm: Algorithm = match env::args().nth(1) {
        Some(name) => match name.parse() {
            Ok(a) => a,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(2);
            }
        },
        None => Algorithm::default(),
    };

    let values = match generate_with_seed(2024, 8, 1, 50) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let info = algorithm.info();
    println!(
        "{} (best {}, average {}, worst {}, space {})",
        info.name,
        info.time_complexity.best,
        info.time_complexity.average,
        info.time_complexity.worst,
        info.space_complexity
    );

    let trace = values.sort_trace(algorithm);

    for (i, step) in Cursor::new(&trace).enumerate() {
        let kind = format!("{:?}", step.kind);
        println!("{:>4} {:<9} {:?}  {}", i, kind, step.values(), step.description);
    }

    println!(
        "{} steps, {} comparisons, {} swaps",
        trace.len(),
        trace.stats.comparisons,
        trace.stats.swaps
    );
}
