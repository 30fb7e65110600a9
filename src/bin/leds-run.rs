use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use leds_rs::{assemble, disasm::source_listing, exec::LedExecutor, Cpu, CpuConfig, LedPanel};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run blinking-LED programs and print the LED states")]
struct Opts {
    /// JSON machine config: { "reset_a": 0, "reset_b": 0, "step_limit": null }
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Trap a program after this many instructions (overrides the config)
    #[arg(long)]
    max_steps: Option<u64>,
    /// Print each assembled program to stderr before running it
    #[arg(long)]
    listing: bool,
    #[arg(value_name = "PROGRAM", required = true)]
    inputs: Vec<PathBuf>,
}

fn load_config(opts: &Opts) -> Result<CpuConfig> {
    let mut cfg = match &opts.config {
        Some(path) => {
            let txt = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&txt).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => CpuConfig::default(),
    };
    if opts.max_steps.is_some() {
        cfg.step_limit = opts.max_steps;
    }
    Ok(cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let cfg = load_config(&opts)?;

    let stdout = std::io::stdout();
    let mut panel = LedPanel::new(stdout.lock());
    let mut trapped = 0usize;

    for input in &opts.inputs {
        let src = std::fs::read_to_string(input)
            .with_context(|| format!("reading {}", input.display()))?;
        let asm = assemble(&src);
        for d in &asm.diagnostics {
            eprintln!("{}:{}: skipped: {}", input.display(), d.line_no, d.error);
        }
        if opts.listing {
            eprint!("{}", source_listing(&asm.program));
        }

        let mut cpu = Cpu::new(cfg);
        if let Err(trap) = cpu.run(&asm.program, &mut panel, &LedExecutor) {
            eprintln!("TRAP: {trap}");
            trapped += 1;
        }
    }

    anyhow::ensure!(trapped == 0, "{trapped} program(s) trapped");
    Ok(())
}
