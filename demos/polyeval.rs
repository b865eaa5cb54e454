// Copyright 2025-2026 Cornell University
// released under MIT license
// author: Kevin Laeufer <laeufer@cornell.edu>

use clap::Parser;
use polycalc::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "polyeval")]
#[command(version)]
#[command(about = "Combines polynomials in canonical form and evaluates the result.", long_about = None)]
struct Args {
    #[arg(long, value_name = "VAR=VALUE", value_parser = parse_binding, help = "Assign a variable, e.g. `--set a=3`.")]
    set: Vec<(Var, i64)>,
    #[arg(long, value_name = "POLY", help = "Multiply by another polynomial.")]
    mul: Vec<String>,
    #[arg(long, value_name = "POLY", help = "Add another polynomial.")]
    add: Vec<String>,
    #[arg(long, help = "Raise the result to this power.")]
    pow: Option<u32>,
    #[arg(long, value_name = "POLY", help = "Divide the result by a constant polynomial.")]
    div: Option<String>,
    #[arg(value_name = "POLY", index = 1)]
    poly: String,
}

fn parse_binding(s: &str) -> Result<(Var, i64), String> {
    let (name, value) = s.split_once('=').ok_or("expected VAR=VALUE")?;
    let mut letters = name.trim().chars();
    let var = match (letters.next(), letters.next()) {
        (Some(letter), None) => Var::try_from(letter).map_err(|e| e.to_string())?,
        _ => return Err(format!("{name:?} is not a single letter")),
    };
    let value = value.trim().parse().map_err(|e| format!("{e}"))?;
    Ok((var, value))
}

fn parse(text: &str) -> Polynom<i64> {
    text.parse().unwrap_or_else(|e| {
        eprintln!("failed to parse {text:?}: {e}");
        std::process::exit(1);
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut session = Session::<i64>::new();
    for (var, value) in args.set {
        session.assign(var, value);
    }

    let mut poly = parse(&args.poly);
    for other in &args.add {
        poly = poly.add(&parse(other));
    }
    for other in &args.mul {
        poly = poly.mul(&parse(other));
    }
    if let Some(n) = args.pow {
        poly = poly.pow(n);
    }
    if let Some(divisor) = &args.div {
        match session.divide(&poly, &parse(divisor)) {
            Some(p) => poly = p,
            None => std::process::exit(1),
        }
    }

    poly.print();
    if poly.has_all_referenced_variables_assigned(session.vars()) || poly.is_constant() {
        println!("= {}", session.evaluate(&poly));
    } else {
        let missing: Vec<_> = poly
            .variables()
            .filter(|&v| !session.vars().is_assigned(v))
            .map(|v| v.to_string())
            .collect();
        println!("= undefined (unassigned: {})", missing.join(", "));
    }
}
