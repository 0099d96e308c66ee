// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![allow(clippy::uninlined_format_args)]

use std::path::Path;

use pwa_icons::Rasterizer;

fn main() {
    if let Err(e) = process() {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

fn process() -> Result<(), String> {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            println!("{}", HELP);
            return Err(e);
        }
    };

    if !args.quiet {
        if let Ok(()) = log::set_logger(&LOGGER) {
            log::set_max_level(log::LevelFilter::Warn);
        }
    }

    if !args.unused.is_empty() {
        log::warn!("Unused arguments: {:?}.", args.unused);
    }

    let rasterizer = make_rasterizer(&args);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    pwa_icons::generate(Path::new("."), rasterizer.as_deref(), &mut out)
        .map_err(|e| e.to_string())?;

    Ok(())
}

const HELP: &str = "\
pwa-icons renders icon.svg from the current directory into PWA icons.

USAGE:
  pwa-icons [OPTIONS]

  Writes icon-192.png and icon-512.png next to icon.svg.
  Existing files are overwritten.
  Other arguments are ignored.

OPTIONS:
      --help                    Prints this help
  -V, --version                 Prints version

  --perf                        Prints performance stats
  --quiet                       Disables warnings
";

#[derive(Debug)]
struct Args {
    perf: bool,
    quiet: bool,
    unused: Vec<std::ffi::OsString>,
}

fn parse_args() -> Result<Args, String> {
    let mut input = pico_args::Arguments::from_env();

    if input.contains("--help") {
        print!("{}", HELP);
        std::process::exit(0);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    Ok(Args {
        perf: input.contains("--perf"),
        quiet: input.contains("--quiet"),
        unused: input.finish(),
    })
}

#[cfg(feature = "raster")]
fn make_rasterizer(args: &Args) -> Option<Box<dyn Rasterizer>> {
    let rasterizer = pwa_icons::SvgRasterizer { perf: args.perf };
    Some(Box::new(rasterizer))
}

#[cfg(not(feature = "raster"))]
fn make_rasterizer(args: &Args) -> Option<Box<dyn Rasterizer>> {
    if args.perf {
        log::warn!("--perf has no effect without the raster feature.");
    }

    pwa_icons::default_rasterizer()
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let line = record.line().unwrap_or(0);
            let args = record.args();

            match record.level() {
                log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, args),
                log::Level::Warn => eprintln!("Warning (in {}:{}): {}", target, line, args),
                log::Level::Info => eprintln!("Info (in {}:{}): {}", target, line, args),
                log::Level::Debug => eprintln!("Debug (in {}:{}): {}", target, line, args),
                log::Level::Trace => eprintln!("Trace (in {}:{}): {}", target, line, args),
            }
        }
    }

    fn flush(&self) {}
}
