use minfind::objective::{reference, reference_interval};
use minfind::report::{render, Row};
use minfind::search::{Method, SearchError};
use minfind::wrap::RealFn;

/// Tolerances reported, each with the significant digits its bounds print at.
const TOLERANCES: [(f64, usize); 3] = [(0.1, 2), (0.01, 3), (0.001, 4)];

fn main() -> Result<(), SearchError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let f = RealFn::new(&reference);
    let interval = reference_interval();

    let mut sections = Vec::with_capacity(Method::ALL.len());
    for &method in Method::ALL.iter() {
        let rows = TOLERANCES
            .iter()
            .map(|&(epsilon, digits)| Row::evaluate(method, &f, &interval, epsilon, digits))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(%method, runs = rows.len(), "search finished");
        sections.push(render(method, &rows));
    }

    print!("{}", sections.join("\n\n"));
    Ok(())
}
