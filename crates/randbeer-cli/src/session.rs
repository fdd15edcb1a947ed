//! Interactive and one-shot sessions.
//!
//! The interactive loop multiplexes stdin commands with settled fetches.
//! Each fetch runs as its own task; results are applied in the order they
//! resolve with no cancellation or de-duplication.

use std::sync::Arc;

use anyhow::Context as _;
use randbeer_catalog::{CatalogClient, CatalogError, RawCatalogRecord};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;

use crate::controller::{Controller, FetchOutcome};
use crate::view::render;

type FetchResult = Result<Option<RawCatalogRecord>, CatalogError>;

/// A single line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fetch,
    Toggle,
    Retry,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "n" | "next" => Some(Self::Fetch),
            "b" | "brewery" | "back" => Some(Self::Toggle),
            "r" | "retry" => Some(Self::Retry),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Runs the interactive browser on stdin until `q` or end of input.
pub async fn run_interactive(client: Arc<CatalogClient>) -> anyhow::Result<()> {
    drive(client, BufReader::new(tokio::io::stdin())).await?;
    Ok(())
}

/// Mounts a controller and applies commands read from `input` until `q` or
/// end of input, returning the controller in its final state.
///
/// On end of input, fetches still in flight are allowed to settle and are
/// rendered before returning. On `q` they are aborted.
pub async fn drive<R>(client: Arc<CatalogClient>, input: R) -> anyhow::Result<Controller>
where
    R: AsyncBufRead + Unpin,
{
    let mut controller = Controller::new();
    let mut in_flight: JoinSet<FetchResult> = JoinSet::new();
    let mut lines = input.lines();
    let mut input_open = true;

    spawn_fetch(&mut controller, &client, &mut in_flight);
    print_view(&controller);

    loop {
        if !input_open && in_flight.is_empty() {
            break;
        }

        tokio::select! {
            Some(joined) = in_flight.join_next() => {
                let result = joined.context("fetch task panicked")?;
                apply_result(&mut controller, result);
            }
            line = lines.next_line(), if input_open => {
                let Some(line) = line.context("failed to read input")? else {
                    input_open = false;
                    continue;
                };
                match Command::parse(&line) {
                    Some(Command::Fetch | Command::Retry) => {
                        spawn_fetch(&mut controller, &client, &mut in_flight);
                        print_view(&controller);
                    }
                    Some(Command::Toggle) => {
                        controller.toggle_showing_beer();
                        print_view(&controller);
                    }
                    Some(Command::Quit) => break,
                    None => println!("unknown command '{}': use n, b, r or q", line.trim()),
                }
            }
        }
    }

    in_flight.abort_all();
    Ok(controller)
}

/// Fetches one beer, prints it and exits.
///
/// # Errors
///
/// Returns an error when the fetch fails, so the process exits non-zero.
pub async fn run_show(
    client: &CatalogClient,
    brewery: bool,
    json: bool,
) -> anyhow::Result<()> {
    let mut controller = Controller::new();
    if let FetchOutcome::Failed { alert } = controller.mount(client).await {
        anyhow::bail!(alert);
    }
    if brewery {
        controller.toggle_showing_beer();
    }

    if json {
        let record = controller.state().record.clone().unwrap_or_default();
        let value = if brewery {
            serde_json::to_string_pretty(&record.brewery)?
        } else {
            serde_json::to_string_pretty(&record)?
        };
        println!("{value}");
    } else {
        print!("{}", render(controller.state(), &mut rand::rng()));
    }
    Ok(())
}

/// Concurrent counterpart of [`Controller::fetch_random`] and
/// [`Controller::retry`]: the request runs as its own task and its result is
/// applied later by [`apply_result`].
fn spawn_fetch(
    controller: &mut Controller,
    client: &Arc<CatalogClient>,
    in_flight: &mut JoinSet<FetchResult>,
) {
    controller.begin_fetch();
    let client = Arc::clone(client);
    in_flight.spawn(async move { client.fetch_random().await });
    tracing::debug!(in_flight = in_flight.len(), "fetch started");
}

fn apply_result(controller: &mut Controller, result: FetchResult) {
    if let FetchOutcome::Failed { alert } = controller.finish_fetch(result) {
        eprintln!("!! {alert}");
    }
    print_view(controller);
}

fn print_view(controller: &Controller) {
    println!("{}", render(controller.state(), &mut rand::rng()));
}
