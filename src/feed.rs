use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use crate::match_fetch;
use crate::state::{Delta, ProviderCommand};

/// One background thread serving fetch commands. Requests are independent;
/// nothing here dedupes or cancels, the UI just applies whichever delta
/// arrives last.
pub fn spawn_provider(tx: Sender<Delta>, cmd_rx: Receiver<ProviderCommand>) {
    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                ProviderCommand::FetchMatches {
                    player_id,
                    game_type,
                    before,
                } => {
                    let paging = before.is_some();
                    match match_fetch::fetch_match_list(&player_id, game_type, before.as_deref()) {
                        Ok(records) => {
                            let rows = match_fetch::parse_match_rows(&records);
                            let _ = tx.send(Delta::Log(format!(
                                "[INFO] {game_type} matches for {player_id}: {} records",
                                rows.len()
                            )));
                            let delta = if paging {
                                Delta::AppendMatches(rows)
                            } else {
                                Delta::SetMatches(rows)
                            };
                            if tx.send(delta).is_err() {
                                return;
                            }
                        }
                        Err(err) => {
                            let _ = tx.send(Delta::FetchFailed(format!(
                                "{game_type} matches for {player_id}: {err}"
                            )));
                        }
                    }
                }
            }
        }
    });
}
