use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use tessera_config::BoardConfig;
use tessera_grid::utils::strip_ansi;
use tessera_grid::{
    Board, BoardBuilder, Event, FrameTheme, ScheduledTick, TaskCard, TaskStatus, TextCard,
};
use tracing::{debug, info};

use super::config::effective_config;
use crate::cli::RenderArgs;
use crate::keys::parse_script;

const SERVICES: [&str; 6] = ["api", "worker", "scheduler", "cache", "gateway", "search"];

/// Demo cards: every third card is an animated task, the rest are text.
fn demo_board(config: &BoardConfig, args: &RenderArgs) -> Board {
    let interval = Duration::from_millis(config.spinner_interval_ms);
    let mut builder = BoardBuilder::from_config(config);
    builder.viewport(args.width.into(), args.height.into());
    if args.plain {
        builder.theme(FrameTheme::PLAIN);
    }

    for i in 0..args.cards {
        let name = SERVICES[i % SERVICES.len()];
        if i % 3 == 2 {
            builder.card(
                TaskCard::new(format!("deploy {name}"), interval)
                    .finish_after(i + 1, TaskStatus::Succeeded),
            );
        } else {
            builder.card(
                TextCard::new([
                    format!("service: {name}"),
                    format!("replicas: {}", i % 4 + 1),
                    "status: healthy".to_string(),
                ])
                .with_title(format!("#{i} {name}")),
            );
        }
    }
    builder.build()
}

/// Deliver up to `limit` ticks in request order, following any rescheduling.
fn run_ticks(board: &mut Board, mut pending: VecDeque<ScheduledTick>, limit: usize) {
    let mut delivered = 0;
    while delivered < limit {
        let Some(next) = pending.pop_front() else {
            break;
        };
        pending.extend(board.update(Event::Tick(next.tick)));
        delivered += 1;
    }
    debug!(delivered, remaining = pending.len(), "ticks delivered");
}

/// Execute render subcommand
pub fn execute(args: RenderArgs) -> Result<String> {
    let config = effective_config(&args.board)?;
    let keys = parse_script(&args.keys)?;

    let mut board = demo_board(&config, &args);
    let mut pending: VecDeque<_> = board.drain_scheduled().into();

    for key in keys {
        pending.extend(board.update(Event::Key(key)));
    }
    if let Some(text) = &args.modal {
        board.open_modal(Some("Modal".to_string()), text.as_str());
    }
    run_ticks(&mut board, pending, args.ticks);

    info!(
        cards = board.len(),
        columns = board.columns(),
        focused = ?board.focused(),
        selected = ?board.selected(),
        "rendering board"
    );
    let output = board.render();
    Ok(if args.plain { strip_ansi(&output) } else { output })
}
