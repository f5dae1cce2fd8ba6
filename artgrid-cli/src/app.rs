//! Interactive loop: stdin commands in, frames out.
//!
//! Page fetches run on spawned tasks and report back through a channel, so
//! commands keep being accepted while a page is loading. The session drops
//! results of superseded requests.

use std::error::Error;

use artgrid_lib::model::RecordId;
use artgrid_lib::session::FetchOutcome;
use artgrid_lib::session::FetchStatus;
use artgrid_lib::session::PendingFetch;
use artgrid_lib::{Session, SessionEvent};
use log::{debug, info};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::command::{self, Command, HELP};
use crate::render;

pub struct App {
    session: Session,
    outcomes: mpsc::UnboundedSender<FetchOutcome>,
}

/// What to do after a command.
enum Flow {
    Continue,
    Quit,
}

impl App {
    pub async fn run(session: Session) -> Result<(), Box<dyn Error>> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = App {
            session,
            outcomes: tx,
        };
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        let first = app.session.start()?;
        app.spawn(first);
        println!("Type `help` for commands.");

        loop {
            tokio::select! {
                Some(outcome) = rx.recv() => {
                    let page = outcome.ticket.page();
                    match app.session.apply(outcome) {
                        FetchStatus::Stale => debug!("Dropped stale result for page {}", page),
                        _ => app.redraw(),
                    }
                }
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        info!("stdin closed");
                        break;
                    };
                    match command::parse(&line) {
                        Ok(command) => {
                            if let Flow::Quit = app.execute(command) {
                                break;
                            }
                        }
                        Err(command::ParseError::Empty) => {}
                        Err(e) => eprintln!("{e}"),
                    }
                }
            }
        }

        info!("Exiting with {} records selected", app.session.ledger().count());
        Ok(())
    }

    fn spawn(&self, fetch: PendingFetch) {
        let tx = self.outcomes.clone();
        tokio::spawn(async move {
            let outcome = fetch.run().await;
            // The receiver only goes away on shutdown.
            let _ = tx.send(outcome);
        });
    }

    fn execute(&mut self, command: Command) -> Flow {
        debug!("Command: {:?}", command);
        let pager = self.session.pagination();
        let page = pager.page_number();

        let events = match command {
            Command::Quit => return Flow::Quit,
            Command::Help => {
                println!("{HELP}");
                return Flow::Continue;
            }
            Command::Show => {
                self.redraw();
                return Flow::Continue;
            }
            Command::Selected => {
                let ids: Vec<String> = self
                    .session
                    .ledger()
                    .included()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                println!("{} selected: {}", ids.len(), ids.join(", "));
                return Flow::Continue;
            }
            Command::Next => {
                if !pager.has_next() {
                    eprintln!("Already on the last page");
                    return Flow::Continue;
                }
                vec![SessionEvent::PageChange(page + 1)]
            }
            Command::Prev => {
                if !pager.has_previous() {
                    eprintln!("Already on the first page");
                    return Flow::Continue;
                }
                vec![SessionEvent::PageChange(page - 1)]
            }
            Command::Page(n) => vec![SessionEvent::PageChange(n)],
            Command::Select(ids) => self.on_page(ids).map(SessionEvent::RowSelect).collect(),
            Command::Unselect(ids) => self.on_page(ids).map(SessionEvent::RowUnselect).collect(),
            Command::Toggle(rows) => self.toggle_rows(&rows),
            Command::All => vec![SessionEvent::SelectAllToggle(true)],
            Command::None => vec![SessionEvent::SelectAllToggle(false)],
            Command::BulkToggle => vec![SessionEvent::BulkToggle],
            Command::Bulk(n) => vec![
                SessionEvent::BulkInput(Some(n)),
                SessionEvent::BulkCountSubmit(Some(n)),
            ],
        };

        for event in events {
            match self.session.handle(event) {
                Ok(Some(fetch)) => self.spawn(fetch),
                Ok(None) => {}
                Err(e) => eprintln!("{e}"),
            }
        }
        self.redraw();
        Flow::Continue
    }

    /// Keeps the ids of records on the current page.
    fn on_page(&self, ids: Vec<RecordId>) -> impl Iterator<Item = RecordId> + '_ {
        ids.into_iter().filter(move |&id| {
            let shown = self.session.page().contains(id);
            if !shown {
                eprintln!("No record {} on this page", id);
            }
            shown
        })
    }

    /// Row numbers are 1-based positions on the current page.
    fn toggle_rows(&self, rows: &[usize]) -> Vec<SessionEvent> {
        let records = self.session.page().records();
        let mut events = Vec::new();
        for &row in rows {
            let Some(record) = row.checked_sub(1).and_then(|i| records.get(i)) else {
                eprintln!("No row {} on this page", row);
                continue;
            };
            if self.session.ledger().is_selected(record.id) {
                events.push(SessionEvent::RowUnselect(record.id));
            } else {
                events.push(SessionEvent::RowSelect(record.id));
            }
        }
        events
    }

    fn redraw(&self) {
        print!("{}", render::frame(&self.session.view()));
    }
}
