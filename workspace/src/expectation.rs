use std::io;
use qstates::{
    config::Config,
    expectation::{ self, Evaluation },
};

mod plot;
use plot::Series;

// compare two eigenstates of the same potential

fn main() -> anyhow::Result<()> {
    let config = Config::prompt(io::stdin().lock(), io::stdout())?;

    // both evaluations finish before anything is printed, so a bad argument
    // produces no partial output
    let ev1: Evaluation = expectation::evaluate(config.n1, config.potential)?;
    let ev2: Evaluation = expectation::evaluate(config.n2, config.potential)?;

    ev1.summary("n1").iter()
        .chain(ev2.summary("n2").iter())
        .for_each(|line| println!("{}", line));
    println!();

    plot::line_chart(
        &format!("Probability Densities of Eigenfunctions ({})", config.potential),
        "x",
        "|ψ|²",
        &[
            Series {
                label: format!("n1 = {}", ev1.n),
                x: ev1.x.view(),
                y: ev1.density.view(),
            },
            Series {
                label: format!("n2 = {}", ev2.n),
                x: ev2.x.view(),
                y: ev2.density.view(),
            },
        ],
    );

    let (k1, p1) = ev1.momentum_shifted();
    let (k2, p2) = ev2.momentum_shifted();
    plot::line_chart(
        &format!("Momentum Distributions of Eigenfunctions ({})", config.potential),
        "momentum k",
        "|ψ(k)|²",
        &[
            Series {
                label: format!("n1 = {}", ev1.n),
                x: k1.view(),
                y: p1.view(),
            },
            Series {
                label: format!("n2 = {}", ev2.n),
                x: k2.view(),
                y: p2.view(),
            },
        ],
    );

    Ok(())
}
