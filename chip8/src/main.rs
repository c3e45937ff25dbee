use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, LevelFilter};

use pulse8_core::constants::DEFAULT_INSTRUCTIONS_PER_TICK;
use pulse8_core::{Chip8, Config};

#[cfg(feature = "sdl")]
mod keymap;
mod run;

use run::{list_rom, read_rom, run_headless, RunError};

#[derive(Parser, Debug)]
#[command(version, about = "A host-driven CHIP-8 interpreter")]
struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    /// Instructions executed per 60Hz tick
    #[arg(short, long, default_value_t = DEFAULT_INSTRUCTIONS_PER_TICK)]
    instructions_per_tick: u32,

    /// Size multiplier for each pixel of the window
    #[arg(short, long, default_value_t = 10)]
    #[cfg_attr(not(feature = "sdl"), allow(dead_code))]
    scale: u32,

    /// Log the registers as the ROM runs, Tab toggles it in the window
    #[arg(long)]
    debug: bool,

    /// Print the ROM as address, hex and binary instruction words, then exit
    #[arg(long)]
    list: bool,

    /// Run without a window and print the final frame
    #[arg(long)]
    headless: bool,

    /// Emulated seconds to run for when headless
    #[arg(long, default_value_t = 5)]
    seconds: u32,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if args.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), RunError> {
    let rom = read_rom(&args.rom)?;
    let mut chip8 = Chip8::with_config(Config {
        instructions_per_tick: args.instructions_per_tick,
    });

    if args.list {
        println!("{}", list_rom(&mut chip8, &rom));
        return Ok(());
    }

    if args.headless || !cfg!(feature = "sdl") {
        let frame = run_headless(&mut chip8, &rom, args.seconds, args.debug)?;
        println!("{}", frame);
        return Ok(());
    }

    #[cfg(feature = "sdl")]
    run::run_window(&mut chip8, &rom, args.scale, args.debug)?;

    Ok(())
}
