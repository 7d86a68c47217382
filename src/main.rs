use std::env;
use std::process::ExitCode;

use scenery_graph::{Layout, LayoutValidation, Places, Topology, TrackItemKind, TrackItems};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: scenery-check <layout.json>");
        return ExitCode::from(2);
    };

    let mut layout = match Layout::load(&path) {
        Ok(layout) => layout,
        Err(err) => {
            log::error!("Cannot load {path}: {err}");
            return ExitCode::FAILURE;
        }
    };
    layout.options = layout.options.with_env_overrides();

    let scenery = match layout.into_scenery() {
        Ok(scenery) => scenery,
        Err(err) => {
            log::error!("Cannot bind {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("{path}: {} track items", scenery.len());
    for kind in TrackItemKind::ALL {
        let count = scenery.items_of_kind(kind).count();
        if count > 0 {
            println!("  {kind}: {count}");
        }
    }
    println!("  places: {}", scenery.places().count());
    println!("  track networks: {}", scenery.connected_components());
    println!("  default max speed: {} m/s", scenery.options().default_max_speed);

    let issues = scenery.validate();
    for issue in &issues {
        log::warn!("{issue}");
    }
    if issues.is_empty() {
        println!("No issues found");
        ExitCode::SUCCESS
    } else {
        println!("{} issue(s) found", issues.len());
        ExitCode::FAILURE
    }
}
