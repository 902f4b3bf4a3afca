use std::io::{self, BufRead, Write};

use strata::config::StrataConfig;
use strata::{Error, SampleOutcome, Session, EMPTY_RESULT_WARNING, NO_UPLOAD_MESSAGE};

const HELP: &str = "\
commands:
  load <path>        load a CSV file
  columns            list the columns of the loaded file
  column <name>      choose the category column
  percent <1-100>    percentage of rows to keep per category
  preview            show the first rows of the loaded file
  sample             draw the stratified sample
  save [dir]         write the sample as CSV (default: current directory)
  help               show this help
  quit               leave";

enum Flow {
    Continue,
    Quit,
}

fn main() {
    let config = match StrataConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warning: {}; using default settings", e);
            StrataConfig::default()
        }
    };

    // RUST_LOG, when set, takes precedence over the configured level
    env_logger::Builder::new()
        .parse_filters(&config.logging.level)
        .parse_default_env()
        .init();

    log::info!("strata starting with seed {}", config.sampling.seed);

    let mut session = Session::new(config);
    println!("CSV Data Sampler by Category");
    println!("{}", NO_UPLOAD_MESSAGE);
    println!("type 'help' for commands");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: {}", e);
            break;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("error: {}", e);
                break;
            }
            None => break,
        };

        match handle(&mut session, line.trim()) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            // Nothing a command does ends the session
            Err(e) => {
                if !e.is_user_facing() {
                    log::error!("{:?}", e);
                }
                println!("error: {}", e);
            }
        }
    }
}

fn handle(session: &mut Session, line: &str) -> Result<Flow, Error> {
    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "load" => {
            if arg.is_empty() {
                return Err(Error::InvalidInput("usage: load <path>".to_string()));
            }
            let (rows, columns) = session.upload_path(arg)?;
            println!("Dataset Shape: {} rows, {} columns", rows, columns);
            println!("Preview of Data");
            print!("{}", session.preview()?);
            if let Some(column) = session.selected_column() {
                println!("category column: {}", column);
            }
        }
        "columns" => {
            for name in session.columns() {
                let marker = if session.selected_column() == Some(name.as_str()) {
                    "*"
                } else {
                    " "
                };
                println!("{} {}", marker, name);
            }
        }
        "column" => {
            session.select_column(arg)?;
            println!("category column: {}", arg);
        }
        "percent" => {
            let percent: u32 = arg.parse().map_err(|_| {
                Error::InvalidInput(format!("'{}' is not a whole number between 1 and 100", arg))
            })?;
            session.set_percent(percent)?;
            println!("sampling {}% per category", percent);
        }
        "preview" => print!("{}", session.preview()?),
        "sample" => match session.run()? {
            SampleOutcome::Sampled(report) => {
                let max_rows = session.config().display.max_rows;
                println!("Sampled Data");
                println!("Sampled Dataset Shape: {} rows", report.table.row_count());
                print!("{}", report.table.to_text(max_rows));
                println!("Output Statistics");
                print!("{}", report.counts.to_dataframe()?.to_text(max_rows));
            }
            SampleOutcome::Empty => println!("warning: {}", EMPTY_RESULT_WARNING),
        },
        "save" => {
            let dir = if arg.is_empty() { "." } else { arg };
            let path = session.save_download(dir)?;
            println!(
                "saved {} ({})",
                path.display(),
                session.config().output.mime_type
            );
        }
        "help" => println!("{}", HELP),
        "quit" | "exit" => return Ok(Flow::Quit),
        other => {
            return Err(Error::InvalidInput(format!(
                "unknown command '{}', try 'help'",
                other
            )))
        }
    }

    Ok(Flow::Continue)
}
