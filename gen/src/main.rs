use clap::Parser;
use color_print::cprintln;
use irgen::SymbolMap;

#[derive(Debug, clap::Parser)]
#[clap(author, version, about)]
struct Args {
    /// Input file
    #[clap(default_value = "main.prog")]
    input: String,

    /// Write the IR and symbol map as YAML
    #[clap(short, long)]
    output: Option<String>,

    /// Print the IR listing
    #[clap(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    println!("1. Read File");
    println!("  < {}", args.input);
    let code = match std::fs::read_to_string(&args.input) {
        Ok(code) => code,
        Err(e) => {
            cprintln!("<red,bold>error</>: Failed to open file: {}: {}", args.input, e);
            std::process::exit(1);
        }
    };

    println!("2. Parse & Build IR");
    let program = match irgen::parse(&args.input, &code) {
        Ok(program) => program,
        Err(e) => {
            e.print_diag(&args.input, &code);
            std::process::exit(1);
        }
    };
    cprintln!(
        "  <g>{}</> nodes, <g>{}</> cells, <g>{}</> inputs",
        program.arena.len(),
        program.memory.len(),
        program.inputs.len()
    );

    if args.verbose {
        program.print();
    }

    if let Some(output) = &args.output {
        println!("3. Write Symbol Map");
        println!("  > {}", output);
        let written = SymbolMap::generate(&program)
            .to_yaml()
            .map_err(irgen::Error::from)
            .and_then(|yaml| std::fs::write(output, yaml).map_err(irgen::Error::from));
        if let Err(e) = written {
            cprintln!("<red,bold>error</>: {}", e);
            std::process::exit(1);
        }
    }
}
