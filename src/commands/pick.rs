use anyhow::{anyhow, bail, Context, Result};
use std::io::Write;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::session::Session;

/// Interactive page picking over stdin/stdout. Commands mutate one session;
/// a failed command prints its error and leaves the session untouched.
pub async fn run(path: &Path) -> Result<()> {
    let mut session = Session::open(path)?;
    println!(
        "Loaded {} ({} page(s))",
        session.source().display(),
        session.page_count()
    );
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            prompt()?;
            continue;
        }

        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        if matches!(command, "quit" | "exit") {
            break;
        }

        let result = match command {
            "pages" => select_pages(&mut session, arg),
            "toggle" => toggle_page(&mut session, arg),
            "show" => {
                show_selection(&session);
                Ok(())
            }
            "clear" => {
                session.clear_selection();
                println!("selection cleared");
                Ok(())
            }
            "write" => write_selection(&session, arg),
            "open" => open_document(&mut session, arg),
            "help" => {
                print_help();
                Ok(())
            }
            other => Err(anyhow!("Unknown command: {} (try \"help\")", other)),
        };

        if let Err(e) = result {
            eprintln!("error: {:#}", e);
        }
        prompt()?;
    }

    Ok(())
}

fn select_pages(session: &mut Session, expr: &str) -> Result<()> {
    session.select_expression(expr)?;
    show_selection(session);
    Ok(())
}

fn toggle_page(session: &mut Session, arg: &str) -> Result<()> {
    let page: u32 = arg
        .parse()
        .map_err(|_| anyhow!("Invalid page number: {}", arg))?;
    let selected = session.toggle(page)?;
    println!(
        "page {} {}",
        page,
        if selected { "selected" } else { "deselected" }
    );
    show_selection(session);
    Ok(())
}

fn show_selection(session: &Session) {
    if session.selection().is_empty() {
        println!("selected: (none)");
    } else {
        println!("selected: {}", session.selection().to_expression());
    }
}

fn write_selection(session: &Session, arg: &str) -> Result<()> {
    let bytes = session.export()?;
    let output = if arg.is_empty() {
        session.default_output_name()
    } else {
        arg.into()
    };
    std::fs::write(&output, &bytes)
        .with_context(|| format!("Failed to save PDF: {}", output.display()))?;
    println!(
        "Wrote {} page(s) to {}",
        session.selection().len(),
        output.display()
    );
    Ok(())
}

fn open_document(session: &mut Session, arg: &str) -> Result<()> {
    if arg.is_empty() {
        bail!("Usage: open <file.pdf>");
    }
    let pages = session.reload(arg)?;
    println!("Loaded {} ({} page(s))", arg, pages);
    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  pages <expr>   select pages by expression, e.g. 1-5,8");
    println!("  toggle <n>     toggle a single page");
    println!("  show           print the current selection");
    println!("  clear          empty the selection");
    println!("  write [file]   write selected pages to a new PDF");
    println!("  open <file>    load a different PDF (resets the selection)");
    println!("  quit           leave without writing");
}

fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}
