mod command;

use std::env;
use std::fs::File;
use std::sync::Arc;

use roster_lib::LoadOutcome;
use roster_lib::PendingLoad;
use roster_lib::RosterClient;
use roster_lib::view::Action;
use roster_lib::view::TableSnapshot;
use roster_lib::view::TableState;
use simplelog::{Config, LevelFilter, WriteLogger};
use tokio::io::{AsyncBufReadExt, BufReader};

use command::{Command, USAGE};

#[tokio::main]
async fn main() {
    let log_file = File::create("roster.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run().await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = RosterClient::builder();
    if let Some(url) = env::args().nth(1) {
        builder = builder.url(url);
    }
    let client = builder.build()?;

    let mut state = TableState::default();
    println!("{}\n", TableSnapshot::capture(&state));

    let load = PendingLoad::spawn(Arc::new(client));
    tokio::select! {
        outcome = load.finish(&mut state) => {
            if outcome == LoadOutcome::Failed {
                log::warn!("starting with an empty table");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            log::info!("interrupted during load");
            return Ok(());
        }
    }

    println!("{}\n", TableSnapshot::capture(&state));
    println!("type `help` for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                println!("{USAGE}");
                continue;
            }
            Ok(Command::Show) => {}
            Ok(Command::Apply(action)) => state.apply(action),
            Ok(Command::CommitDraft(id)) => {
                if let Some(name) = state.member(&id).map(|m| m.name.clone()) {
                    state.apply(Action::CommitName { id, name });
                }
            }
            Err(e) => {
                println!("{e}\n{USAGE}");
                continue;
            }
        }
        println!("{}\n", TableSnapshot::capture(&state));
    }

    Ok(())
}
