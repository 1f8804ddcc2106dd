//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `todolist_core` linkage.
//! - Print a deterministic-shape JSON snapshot of the seeded list route.

use todolist_core::{list_view, TaskStore};

fn main() {
    println!("todolist_core ping={}", todolist_core::ping());
    println!("todolist_core version={}", todolist_core::core_version());

    let store = TaskStore::seeded();
    match serde_json::to_string_pretty(&list_view(store.list())) {
        Ok(snapshot) => println!("{snapshot}"),
        Err(err) => {
            eprintln!("todolist_core snapshot failed: {err}");
            std::process::exit(1);
        }
    }
}
