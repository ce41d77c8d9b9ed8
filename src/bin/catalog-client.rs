//! Interactive terminal client for the catalog server.
//!
//! Commands: `list`, `add`, `edit <id>`, `save`, `cancel`, `delete <id>`,
//! `help`, `quit`.

use std::io::{self, BufRead, Write};

use library_catalog::client::{Controller, LibraryClient, Notice};

const HELP: &str = "\
Commands:
  list          show all books
  add           fill the form and add a book (or update, while editing)
  save          same as add
  edit <id>     load a book into the form for editing
  cancel        leave edit mode
  delete <id>   delete a book after confirmation
  quit          exit";

fn prompt(label: &str, current: &str) -> io::Result<String> {
    if current.is_empty() {
        print!("{}: ", label);
    } else {
        print!("{} [{}]: ", label, current);
    }
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let line = line.trim_end_matches(['\r', '\n']);
    Ok(if line.is_empty() { current.to_string() } else { line.to_string() })
}

fn print_notice(controller: &mut Controller) {
    match controller.notice() {
        Some(Notice::Success(msg)) => println!("OK: {}", msg),
        Some(Notice::Error(msg)) => println!("Error: {}", msg),
        None => return,
    }
    controller.dismiss_notice();
}

fn parse_id(arg: Option<&str>) -> Option<i64> {
    arg.and_then(|a| a.trim().parse().ok())
}

async fn fill_and_submit(controller: &mut Controller) -> io::Result<()> {
    println!("-- {} --", controller.form_title());
    let form = controller.form().clone();
    let title = prompt("Title", &form.title)?;
    let genre = prompt("Genre", &form.genre)?;
    let year = prompt("Published year", &form.published_year)?;
    let rating = prompt("Rating (1-5)", &form.rating)?;

    let form = controller.form_mut();
    form.title = title;
    form.genre = genre;
    form.published_year = year;
    form.rating = rating;

    if controller.submit().await {
        print!("{}", controller.rendered());
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_catalog=error".into()),
        )
        .with_writer(io::stderr)
        .init();

    let base_url =
        std::env::var("LIBRARY_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let mut controller = Controller::new(LibraryClient::new(base_url));

    if controller.refresh().await {
        print!("{}", controller.rendered());
    }
    print_notice(&mut controller);
    println!("{}", HELP);

    let stdin = io::stdin();
    loop {
        print!("{}> ", controller.form_title());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let arg = parts.next();

        match command {
            "" => continue,
            "list" => {
                if controller.refresh().await {
                    print!("{}", controller.rendered());
                }
            }
            "add" | "save" => fill_and_submit(&mut controller).await?,
            "edit" => match parse_id(arg) {
                Some(id) => {
                    if controller.begin_update(id).await {
                        fill_and_submit(&mut controller).await?;
                    }
                }
                None => println!("Usage: edit <id>"),
            },
            "cancel" => {
                controller.cancel_update();
                println!("Edit cancelled");
            }
            "delete" => match parse_id(arg) {
                Some(id) => {
                    let mut ask = |question: &str| {
                        prompt(&format!("{} (y/N)", question), "")
                            .map(|answer| answer.trim().eq_ignore_ascii_case("y"))
                            .unwrap_or(false)
                    };
                    if controller.delete(id, &mut ask).await {
                        print!("{}", controller.rendered());
                    }
                }
                None => println!("Usage: delete <id>"),
            },
            "help" => println!("{}", HELP),
            "quit" | "exit" => break,
            other => println!("Unknown command: {}", other),
        }
        print_notice(&mut controller);
    }

    Ok(())
}
