//! Habit Quest entry point
//!
//! On the web this only sets up logging and the theme; the page drives the
//! app through `HabitQuestApp`. Natively it runs a short demo week.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }

    log::info!("Habit Quest starting...");
    if let Err(e) = habit_quest::web::restore_theme() {
        log::warn!("Theme not restored: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Habit Quest (native) starting...");
    log::info!("Native mode keeps data in memory - run with `trunk serve` for the web version");

    demo_week();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_week() {
    use habit_quest::HabitTracker;
    use habit_quest::platform::{Clock, FixedClock, MemoryStore, SystemClock};

    let clock = FixedClock::on(SystemClock.today());
    let mut tracker = HabitTracker::load(MemoryStore::new(), clock);
    tracker.add_habit("Read");
    tracker.add_habit("Stretch");

    let ids: Vec<String> = tracker.habits().into_iter().map(|v| v.habit.id).collect();
    for day in 0..7 {
        for (i, id) in ids.iter().enumerate() {
            // Skip stretching on day 4 to show a streak reset
            if i == 1 && day == 4 {
                continue;
            }
            tracker.check_habit(id);
        }
        tracker.clock_mut().advance_days(1);
    }

    println!("\nAfter one week:");
    for view in tracker.habits() {
        println!(
            "  {:<10} streak {:>2}  total {:>2}",
            view.habit.name, view.habit.streak, view.habit.total
        );
    }
    println!(
        "  points {}  level {}  ({}% to {})",
        tracker.points(),
        tracker.level(),
        tracker.progress_to_next(),
        tracker.next_level_at()
    );
    for a in tracker.achievements() {
        let mark = if a.unlocked { "x" } else { " " };
        println!("  [{}] {} {}", mark, a.emoji, a.title);
    }
}
