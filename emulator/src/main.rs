mod rom;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cpu6502::{Bus, ClockConfig, Cpu, Executor};

/// Runs a MOS 6502 ROM image against the cycle-paced instruction
/// interpreter, executing until the next opcode is BRK.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the ROM image. Raw bytes are copied starting at 0x8000; no
    /// header is parsed. The reset vector at 0xFFFC/0xFFFD must already be
    /// populated by the ROM.
    rom: PathBuf,

    /// Reference clock rate in Hz. Defaults to 2 MHz (0.5 microseconds per
    /// cycle); NES-era parts typically want 1 MHz instead.
    #[arg(long, default_value_t = 2_000_000.0)]
    clock_hz: f64,

    /// Halt on the first unknown opcode instead of logging it and
    /// resuming at the next byte.
    #[arg(long)]
    halt_on_unknown_opcode: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    // clap's own `parse()` exits with status 2 on a usage error; spec.md
    // requires status 1 for a missing ROM path, so the error is handled
    // here instead of letting clap do its own exit.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::from(1);
        }
    };

    let bytes = match rom::load(&args.rom) {
        Ok(bytes) => bytes,
        Err(error) => {
            eprintln!("usage: emulator <rom>\n{error}");
            return ExitCode::FAILURE;
        }
    };

    let mut bus = Bus::new();
    bus.load_rom(&bytes);

    let cpu = Cpu::new(bus);
    let mut executor = Executor::new(cpu, ClockConfig::from_hz(args.clock_hz));

    if args.halt_on_unknown_opcode {
        run_halting_on_unknown_opcode(&mut executor);
    } else {
        executor.run();
    }

    ExitCode::SUCCESS
}

fn run_halting_on_unknown_opcode(executor: &mut Executor) {
    loop {
        if executor.cpu.bus.read_u8(executor.cpu.pc) == 0x00 {
            break;
        }
        match executor.step() {
            Ok(_) => {}
            Err(error) => {
                log::error!("{error}");
                break;
            }
        }
    }
}
