//! Event command handler

use super::confirm;
use crate::args::{EventKindArg, EventSubcommand};
use chrono::NaiveDate;
use student_planner::models::event::parse_clock_time;
use student_planner::models::EventDraft;
use student_planner::schedule::{add_event, group_by_date, remove_event};
use student_planner::store::Store;
use student_planner::{debug, error};

/// Dispatch event subcommands
pub fn run(subcommand: EventSubcommand, store: &Store, today: NaiveDate) {
    match subcommand {
        EventSubcommand::Add {
            title,
            kind,
            date,
            time,
        } => handle_add(store, title, kind, date.unwrap_or(today), time.as_deref()),
        EventSubcommand::List => handle_list(store),
        EventSubcommand::Remove { id, yes } => handle_remove(store, &id, yes),
    }
}

fn handle_add(
    store: &Store,
    title: String,
    kind: EventKindArg,
    date: NaiveDate,
    time: Option<&str>,
) {
    // An empty --time means "no time", same as omitting it
    let time = match time.map(str::trim).filter(|t| !t.is_empty()) {
        None => None,
        Some(raw) => match parse_clock_time(raw) {
            Ok(t) => Some(t),
            Err(e) => {
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
        },
    };

    let mut events = store.load_events();
    let draft = EventDraft {
        title,
        kind: kind.into(),
        date,
        time,
    };

    let added = match add_event(&mut events, draft) {
        Ok(event) => event.clone(),
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = store.save_events(&events) {
        error!("Failed to save events: {e}");
        eprintln!("✗ Failed to save events: {e}");
        std::process::exit(1);
    }

    let at = added
        .time_label()
        .map_or_else(String::new, |t| format!(" at {t}"));
    println!(
        "✓ Added {} '{}' on {}{at} [id {}]",
        added.kind.display_name(),
        added.title,
        added.date,
        added.id
    );
}

fn handle_list(store: &Store) {
    let events = store.load_events();
    debug!("Listing {} event(s)", events.len());

    if events.is_empty() {
        println!("No events scheduled. Add one with `studentplanner event add`.");
        return;
    }

    for (date, day_events) in group_by_date(&events) {
        println!("\n{}", date.format("%A %Y-%m-%d"));
        for event in day_events {
            println!(
                "  {:<14} {:>5}  {:<11} {}",
                event.id,
                event.time_label().unwrap_or_default(),
                event.kind.display_name(),
                event.title
            );
        }
    }
}

fn handle_remove(store: &Store, id: &str, yes: bool) {
    let mut events = store.load_events();
    let Some(event) = events.iter().find(|e| e.id == id) else {
        eprintln!("✗ No event with id '{id}'");
        std::process::exit(1);
    };

    if !yes && !confirm(&format!("Delete event '{}'?", event.title)) {
        println!("✗ Delete cancelled");
        return;
    }

    remove_event(&mut events, id);
    if let Err(e) = store.save_events(&events) {
        error!("Failed to save events: {e}");
        eprintln!("✗ Failed to save events: {e}");
        std::process::exit(1);
    }
    println!("✓ Removed event {id}");
}
