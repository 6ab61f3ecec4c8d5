use std::path::PathBuf;

use platina::{Endianness, Env, HostInfo, Os, Platform};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    match run(&config) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

struct CliConfig {
    input: Option<String>,
    ldd: Option<PathBuf>,
    strict: bool,
    id_only: bool,
}

fn run(config: &CliConfig) -> Result<(), platina::UnsupportedPlatformError> {
    let (platform, env) = match &config.input {
        Some(text) => {
            let platform = if config.strict {
                Platform::try_classify(text)?
            } else {
                Platform::classify(text)
            };
            let env = match platform.os() {
                Some(os) => Env::fixed_for(os).or_else(|| Env::classify(text)),
                None => Env::classify(text),
            };
            (platform, env)
        }
        None => {
            let host = HostInfo::detect();
            let platform = if config.strict {
                Platform::try_current(&host)?
            } else {
                Platform::current(&host)
            };
            let env = platform.os().and_then(|os| Env::current_with(os, config.ldd.as_deref()));
            (platform, env)
        }
    };

    if config.id_only {
        println!("{platform}");
        return Ok(());
    }

    println!("platform  {platform}");
    println!("os        {}", platform.os().map_or("unknown", Os::id));
    let arch = platform.arch();
    print!("arch      {arch}");
    if !arch.is_unknown() {
        let endian = arch.endianness().map_or("", Endianness::id);
        print!("  ({} family, {}-bit, {endian})", arch.family(), arch.bitness().unwrap_or(0));
    }
    println!();
    println!("env       {}", env.map_or("unknown", Env::id));
    Ok(())
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut ldd: Option<PathBuf> = None;
    let mut strict = false;
    let mut id_only = false;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("platina {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--strict" => strict = true,
            "--id" => id_only = true,
            "--ldd" => {
                let value = args.next().ok_or_else(|| "error: --ldd expects a path".to_string())?;
                ldd = Some(PathBuf::from(value));
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--ldd=") => {
                ldd = Some(PathBuf::from(arg.trim_start_matches("--ldd=")));
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    Ok(CliConfig { input, ldd, strict, id_only })
}

fn help_text() -> String {
    format!(
        "platina {version}

Classify a platform identifier string into OS, architecture, and
C-runtime environment. Without input, classifies the running host.

Usage:
  platina [OPTIONS] [--] <input...>
  platina [OPTIONS]

Options:
  --id               Print only the canonical platform identifier.
  --strict           Fail on unknown dimensions instead of printing
                     'unknown'.
  --ldd <path>       Probe executable for environment detection on the
                     running host (default: ldd from PATH).
  -h, --help         Show this help message.
  -V, --version      Print version information.

Exit codes:
  0  Success.
  1  Strict classification failure.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
