use colored::Colorize;
use std::error::Error;
use std::io::{self, BufRead};
use subnet_explain::output::{print_explanation, print_summary, to_json};
use subnet_explain::report;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = log4rs::init_file("log4rs.yml", Default::default()) {
        eprintln!("Warning: logging disabled, log4rs init failed: {e}");
    }
    log::info!("#Start main()");

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.first().map(|a| a == "--json").unwrap_or(false);
    if json {
        args.remove(0);
    }

    // Inputs come from argv, or stdin lines when argv is empty.
    let inputs: Vec<String> = if args.is_empty() {
        io::stdin().lock().lines().collect::<Result<_, _>>()?
    } else {
        args
    };

    let mut number = 1;
    for raw in inputs.iter().filter(|line| !line.trim().is_empty()) {
        // One bad entry must not abort the batch.
        match report(raw) {
            Ok(r) if json => println!("{}", to_json(&r)?),
            Ok(r) => {
                print_summary(&r.descriptor, &format!("INPUT #{number} '{}'", r.input));
                print_explanation(r.subnet, &r.trace);
            }
            Err(e) => eprintln!("{} {e}", format!("INPUT #{number} ERROR:").red().bold()),
        }
        number += 1;
    }
    log::info!("#End main() processed {} input(s)", number - 1);

    Ok(())
}
