use clap::Parser;
use color_print::cprintln;

use iremu::hooks::{console::Console, dump::Dump, trace::Trace};
use iremu::Hook;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Runner for flow-graph IR programs")]
struct Args {
    #[arg(short = 't', long)]
    tmax: Option<u64>,

    #[arg(short, long)]
    dump_cfg: Option<String>,

    #[arg(short = 'a', long)]
    dump_all: bool,

    /// Print every executed node
    #[arg(long)]
    trace: bool,

    #[arg(default_value = "main.prog")]
    input_file: String,
}

fn main() {
    let args = Args::parse();

    println!("+-----------------------------------------------+");
    println!("| {:<45} |", args.input_file);
    println!("+-----------------------------------------------+");

    // ------------------------------------------------------------------------
    // Build program
    let code = match std::fs::read_to_string(&args.input_file) {
        Ok(code) => code,
        Err(e) => {
            cprintln!("<red,bold>error</>: Failed to open file: {}: {}", args.input_file, e);
            std::process::exit(1);
        }
    };
    let program = match irgen::parse(&args.input_file, &code) {
        Ok(program) => program,
        Err(e) => {
            e.print_diag(&args.input_file, &code);
            std::process::exit(1);
        }
    };

    // ------------------------------------------------------------------------
    // Initialize hooks
    println!("[INIT]");
    let dump = match Dump::arg(args.dump_cfg, args.dump_all) {
        Ok(dump) => dump,
        Err(e) => {
            cprintln!("<red,bold>error</>: {}", e);
            std::process::exit(1);
        }
    };
    let mut hooks: Vec<Box<dyn Hook>> = vec![
        Box::new(Trace::arg(args.trace)),
        Box::new(dump),
        Box::new(Console::new(true)),
    ];

    // ------------------------------------------------------------------------
    // Main loop
    println!("[RUN]");
    match iremu::run_with(&program, args.tmax, &mut hooks) {
        Ok(state) => {
            println!("=================================================");
            cprintln!(
                "<g>halted</>: {} outputs, {} inputs left",
                state.outputs().len(),
                state.remaining_inputs()
            );
        }
        Err(e) => {
            println!("=================================================");
            cprintln!("<red,bold>error</>: {}", e);
            std::process::exit(1);
        }
    }
}
