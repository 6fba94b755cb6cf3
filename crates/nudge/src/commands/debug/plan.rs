use clap::Args;
use rand::SeedableRng;
use rand::rngs::StdRng;

use nudge_core::Rect;
use nudge_core::planner::{self, MovementLimits, TaskbarState};

/// Arguments for the `debug plan` subcommand.
#[derive(Args)]
pub struct PlanArgs {
    /// Window left edge in pixels
    #[arg(long, allow_negative_numbers = true)]
    left: i32,
    /// Window top edge in pixels
    #[arg(long, allow_negative_numbers = true)]
    top: i32,
    /// Window right edge in pixels (exclusive)
    #[arg(long, allow_negative_numbers = true)]
    right: i32,
    /// Window bottom edge in pixels (exclusive)
    #[arg(long, allow_negative_numbers = true)]
    bottom: i32,
    /// Monitor bounds as LEFT,TOP,RIGHT,BOTTOM
    #[arg(long, default_value = "0,0,1920,1080", allow_hyphen_values = true, value_parser = parse_rect)]
    monitor: Rect,
    /// Largest horizontal move in pixels
    #[arg(long, default_value_t = 50)]
    max_x: i32,
    /// Largest vertical move in pixels
    #[arg(long, default_value_t = 50)]
    max_y: i32,
    /// Taskbar height in pixels
    #[arg(long, default_value_t = 0)]
    taskbar_height: i32,
    /// Treat the taskbar as auto-hidden
    #[arg(long)]
    auto_hide: bool,
    /// Seed for reproducible results
    #[arg(long)]
    seed: Option<u64>,
    /// Number of positions to plan
    #[arg(long, default_value_t = 1)]
    samples: u32,
}

pub fn execute(args: &PlanArgs) {
    if args.right < args.left || args.bottom < args.top {
        eprintln!("Error: window right/bottom must not be less than left/top.");
        std::process::exit(1);
    }

    let window = Rect::new(args.left, args.top, args.right, args.bottom);
    let limits = MovementLimits {
        max_x: args.max_x,
        max_y: args.max_y,
    };
    let taskbar = TaskbarState {
        auto_hidden: args.auto_hide,
        height: args.taskbar_height,
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let radius_x = planner::movement_radius(limits.max_x, args.monitor.width(), window.width());
    let radius_y = planner::movement_radius(limits.max_y, args.monitor.height(), window.height());

    println!("Window   {window}");
    println!("Monitor  {}", args.monitor);
    println!("Radius   ±{radius_x} x, ±{radius_y} y");
    for _ in 0..args.samples {
        let target = planner::plan(&window, &args.monitor, limits, taskbar, &mut rng);
        println!(
            "Planned  {target}  offset ({:+}, {:+})",
            target.x.saturating_sub(window.left),
            target.y.saturating_sub(window.top)
        );
    }
}

/// Parses `LEFT,TOP,RIGHT,BOTTOM` into a rectangle.
fn parse_rect(s: &str) -> Result<Rect, String> {
    let parts: Vec<i32> = s
        .split(',')
        .map(|p| p.trim().parse::<i32>().map_err(|e| format!("{p:?}: {e}")))
        .collect::<Result<_, _>>()?;

    let &[left, top, right, bottom] = parts.as_slice() else {
        return Err(format!("expected LEFT,TOP,RIGHT,BOTTOM, got {s:?}"));
    };
    if right < left || bottom < top {
        return Err("right/bottom must not be less than left/top".into());
    }
    Ok(Rect::new(left, top, right, bottom))
}
