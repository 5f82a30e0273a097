//! Interactive composition demo.
//!
//! Reads lines from stdin, classifies each character, and drives a
//! composer, maintaining a host buffer through the patch protocol so the
//! whole result contract is exercised end to end.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zizao_engine::CodeTable;
use zizao_im::{Composer, InputSymbol, apply_patch};

/// zizao interactive demo
#[derive(Parser, Debug)]
#[command(name = "zizao")]
#[command(about = "Structural input method demo", long_about = None)]
struct Args {
    /// Path to a custom code table (JSON); bundled table if omitted
    #[arg(short, long)]
    table: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "zizao=debug,zizao_im=debug,zizao_engine=debug"
    } else {
        "zizao=info,zizao_im=info,zizao_engine=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let table = match &args.table {
        Some(path) => CodeTable::from_json_file(path)?,
        None => CodeTable::bundled(),
    };
    println!("code table: {} entries", table.len());
    println!("type key codes (a-z), 1-9 to pick a candidate, space/enter to commit.");
    println!("'<' acts as backspace. :q quits, :r resets the buffer.");

    let mut engine = Composer::new(Arc::new(table));
    let mut buffer = String::new();
    let mut caret = 0usize;

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim_end() {
            ":q" => break,
            ":r" => {
                engine.reset();
                buffer.clear();
                caret = 0;
                continue;
            }
            _ => {}
        }

        for ch in line.trim_end().chars() {
            let symbol = if ch == '<' {
                Some(InputSymbol::Backspace)
            } else {
                InputSymbol::from_char(ch)
            };
            let Some(symbol) = symbol else {
                continue;
            };
            if let Some(result) = engine.process(symbol) {
                let (next, next_caret) = apply_patch(&buffer, caret, &result);
                buffer = next;
                caret = next_caret;
            } else if symbol == InputSymbol::Backspace && caret > 0 {
                // Not composing: ordinary deletion on the host buffer.
                let mut chars: Vec<char> = buffer.chars().collect();
                chars.remove(caret - 1);
                buffer = chars.into_iter().collect();
                caret -= 1;
            }
        }

        println!("buffer:  {}", buffer);
        if engine.is_composing() {
            println!("keys:    {}", engine.progress_display());
            for (i, candidate) in engine.current_candidates().iter().enumerate() {
                println!("  {}. {}", i + 1, candidate);
            }
        }
    }

    Ok(())
}
