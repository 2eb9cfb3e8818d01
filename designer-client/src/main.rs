use clap::Parser;
use layout_designer_client::{command, Command, Config, Reply, Result, Session};
use std::io::{self, BufRead, Lines, StdinLock, Write};

fn main() -> Result<()> {
    let config = Config::parse();
    config.init_logging();

    let mut session = Session::open(&config)?;
    println!(
        "Layout designer: {} elements loaded. Type 'help' for commands.",
        session.designer().store().len()
    );

    let mut lines = io::stdin().lock().lines();

    while let Some(line) = next_line(&mut lines, "> ")? {
        let command = match command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e.to_string().trim_end());
                continue;
            }
        };

        match run(&mut session, command, &mut lines)? {
            Flow::Continue => {}
            Flow::Quit => break,
        }
    }

    log::info!("Session ended");
    Ok(())
}

enum Flow {
    Continue,
    Quit,
}

fn run(
    session: &mut Session,
    command: Command,
    lines: &mut Lines<StdinLock<'static>>,
) -> Result<Flow> {
    let reply = match session.execute(command) {
        Ok(reply) => reply,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(Flow::Continue);
        }
    };

    match reply {
        Reply::Message(text) => println!("{}", text),
        Reply::ConfirmRestart => {
            let answer = next_line(lines, "Remove every element and the saved layout? [y/N] ")?;
            let confirmed = answer
                .map(|answer| matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
                .unwrap_or(false);

            if confirmed {
                return run(session, Command::Restart { yes: true }, lines);
            }
            println!("Restart cancelled");
        }
        Reply::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

fn next_line(lines: &mut Lines<StdinLock<'static>>, prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    Ok(lines.next().transpose()?)
}
