//! One enumeration pass: nudge every eligible window once.
//!
//! Failures are contained per window. A window whose state can't be read
//! is skipped, a window that refuses to move is counted, and the pass
//! carries on with the next handle either way.

use std::error::Error;
use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::config::{AnimationConfig, Config, MonitorConfig};
use crate::desktop::Desktop;
use crate::planner::{self, MovementLimits};
use crate::{Point, log_debug, log_error, log_warn};

/// Why a window could not be nudged.
#[derive(Debug, thiserror::Error)]
pub enum PassError {
    /// The window list itself could not be read.
    #[error("failed to enumerate windows: {source}")]
    Enumerate { source: Box<dyn Error> },
    /// Reading window, monitor, or taskbar state failed.
    #[error("failed to query window 0x{handle:X}: {source}")]
    Query {
        handle: usize,
        source: Box<dyn Error>,
    },
    /// The OS refused to move the window.
    #[error("failed to move window 0x{handle:X}: {source}")]
    Apply {
        handle: usize,
        source: Box<dyn Error>,
    },
}

/// What happened to a single window during a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Moved { from: Point, to: Point },
    Maximized,
    MonitorDisabled,
}

/// Per-pass counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PassReport {
    pub visited: usize,
    pub moved: usize,
    pub skipped_maximized: usize,
    pub skipped_disabled: usize,
    pub query_failed: usize,
    pub apply_failed: usize,
    pub enumeration_failed: bool,
}

impl fmt::Display for PassReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.enumeration_failed {
            return write!(f, "enumeration failed");
        }
        write!(
            f,
            "visited {}, moved {}, maximized {}, monitor disabled {}, query failed {}, move failed {}",
            self.visited,
            self.moved,
            self.skipped_maximized,
            self.skipped_disabled,
            self.query_failed,
            self.apply_failed
        )
    }
}

/// Settings a pass needs, extracted from [`Config`].
#[derive(Debug, Clone, Default)]
pub struct PassOptions {
    pub limits: MovementLimits,
    pub animation: AnimationConfig,
    pub monitors: MonitorConfig,
}

impl PassOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            limits: config.movement,
            animation: config.animation.clone(),
            monitors: config.monitors.clone(),
        }
    }
}

/// Runs one pass over all visible windows.
///
/// Never fails as a whole: every error is logged and tallied in the
/// returned report.
pub fn run_pass<D, R>(desktop: &D, options: &PassOptions, rng: &mut R) -> PassReport
where
    D: Desktop + ?Sized,
    R: Rng,
{
    let mut report = PassReport::default();

    let handles = match desktop.visible_windows() {
        Ok(handles) => handles,
        Err(source) => {
            log_error!("{}", PassError::Enumerate { source });
            report.enumeration_failed = true;
            return report;
        }
    };

    for handle in handles {
        report.visited += 1;
        match nudge_window(desktop, handle, options, rng) {
            Ok(Outcome::Moved { .. }) => report.moved += 1,
            Ok(Outcome::Maximized) => report.skipped_maximized += 1,
            Ok(Outcome::MonitorDisabled) => report.skipped_disabled += 1,
            Err(e @ PassError::Apply { .. }) => {
                log_warn!("{e}");
                report.apply_failed += 1;
            }
            Err(e) => {
                log_warn!("{e}");
                report.query_failed += 1;
            }
        }
    }

    report
}

/// Plans and applies a new position for one window.
pub fn nudge_window<D, R>(
    desktop: &D,
    handle: usize,
    options: &PassOptions,
    rng: &mut R,
) -> Result<Outcome, PassError>
where
    D: Desktop + ?Sized,
    R: Rng,
{
    let query = |source| PassError::Query { handle, source };

    let placement = desktop.placement(handle).map_err(query)?;
    if placement.maximized {
        return Ok(Outcome::Maximized);
    }

    let monitor = desktop.monitor_for(handle).map_err(query)?;
    if !options.monitors.is_enabled(&monitor) {
        log_debug!(
            "Window 0x{handle:X}: monitor {} ({}) is disabled",
            monitor.name,
            monitor.friendly_name
        );
        return Ok(Outcome::MonitorDisabled);
    }

    let taskbar = desktop.taskbar().map_err(query)?;
    let from = placement.rect.top_left();
    let to = planner::plan(&placement.rect, &monitor.bounds, options.limits, taskbar, rng);

    log_debug!(
        "Window 0x{handle:X}: taskbar hidden={} height={}px, {} -> {}",
        taskbar.auto_hidden,
        taskbar.height,
        from,
        to
    );

    desktop
        .move_window(handle, to)
        .map_err(|source| PassError::Apply { handle, source })?;

    if options.animation.enabled
        && let Err(e) = desktop.animate(handle, options.animation.duration_ms)
    {
        log_warn!("Window 0x{handle:X}: animation failed: {e}");
    }

    Ok(Outcome::Moved { from, to })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    use crate::Rect;
    use crate::desktop::{Monitor, Placement, WindowResult};
    use crate::planner::TaskbarState;

    #[derive(Default)]
    struct FakeDesktop {
        windows: Vec<(usize, Placement)>,
        monitors: Vec<Monitor>,
        taskbar: TaskbarState,
        unreadable: Vec<usize>,
        immovable: Vec<usize>,
        enumeration_broken: bool,
        animation_broken: bool,
        moves: RefCell<Vec<(usize, Point)>>,
        animations: RefCell<Vec<usize>>,
    }

    impl FakeDesktop {
        fn with_windows(rects: &[Rect]) -> Self {
            Self {
                windows: rects
                    .iter()
                    .enumerate()
                    .map(|(i, rect)| {
                        let placement = Placement {
                            rect: *rect,
                            maximized: false,
                        };
                        (0x100 + i, placement)
                    })
                    .collect(),
                monitors: vec![monitor("\\\\.\\DISPLAY1", Rect::new(0, 0, 1920, 1080))],
                ..Default::default()
            }
        }
    }

    fn monitor(name: &str, bounds: Rect) -> Monitor {
        Monitor {
            name: name.into(),
            device_id: String::new(),
            friendly_name: "Generic PnP Monitor".into(),
            bounds,
            work_area: bounds,
            primary: bounds.left == 0 && bounds.top == 0,
        }
    }

    impl Desktop for FakeDesktop {
        fn visible_windows(&self) -> WindowResult<Vec<usize>> {
            if self.enumeration_broken {
                return Err("EnumWindows failed".into());
            }
            Ok(self.windows.iter().map(|(h, _)| *h).collect())
        }

        fn placement(&self, handle: usize) -> WindowResult<Placement> {
            if self.unreadable.contains(&handle) {
                return Err("access denied".into());
            }
            self.windows
                .iter()
                .find(|(h, _)| *h == handle)
                .map(|(_, p)| *p)
                .ok_or_else(|| "no such window".into())
        }

        fn monitor_for(&self, handle: usize) -> WindowResult<Monitor> {
            let rect = self.placement(handle)?.rect;
            self.monitors
                .iter()
                .find(|m| m.bounds.left <= rect.left && rect.left < m.bounds.right)
                .or(self.monitors.first())
                .cloned()
                .ok_or_else(|| "no monitors".into())
        }

        fn taskbar_auto_hidden(&self) -> WindowResult<bool> {
            Ok(self.taskbar.auto_hidden)
        }

        fn taskbar_height(&self) -> WindowResult<i32> {
            Ok(self.taskbar.height)
        }

        fn move_window(&self, handle: usize, to: Point) -> WindowResult<()> {
            if self.immovable.contains(&handle) {
                return Err("SetWindowPos failed".into());
            }
            self.moves.borrow_mut().push((handle, to));
            Ok(())
        }

        fn animate(&self, handle: usize, _duration_ms: u32) -> WindowResult<()> {
            if self.animation_broken {
                return Err("AnimateWindow failed".into());
            }
            self.animations.borrow_mut().push(handle);
            Ok(())
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    #[test]
    fn moves_every_visible_window() {
        // Arrange
        let desktop = FakeDesktop::with_windows(&[
            Rect::new(100, 100, 300, 200),
            Rect::new(800, 400, 1200, 700),
        ]);

        // Act
        let report = run_pass(&desktop, &PassOptions::default(), &mut rng());

        // Assert
        assert_eq!(report.visited, 2);
        assert_eq!(report.moved, 2);
        let moves = desktop.moves.borrow();
        assert_eq!(moves.len(), 2);
        assert!((50..=150).contains(&moves[0].1.x));
        assert!((750..=850).contains(&moves[1].1.x));
    }

    #[test]
    fn maximized_windows_are_left_alone() {
        // Arrange
        let mut desktop = FakeDesktop::with_windows(&[
            Rect::new(0, 0, 1920, 1040),
            Rect::new(100, 100, 300, 200),
        ]);
        desktop.windows[0].1.maximized = true;

        // Act
        let report = run_pass(&desktop, &PassOptions::default(), &mut rng());

        // Assert
        assert_eq!(report.skipped_maximized, 1);
        assert_eq!(report.moved, 1);
        assert_eq!(desktop.moves.borrow()[0].0, 0x101);
    }

    #[test]
    fn unreadable_window_does_not_stop_the_pass() {
        // Arrange
        let mut desktop = FakeDesktop::with_windows(&[
            Rect::new(100, 100, 300, 200),
            Rect::new(400, 100, 600, 200),
        ]);
        desktop.unreadable.push(0x100);

        // Act
        let report = run_pass(&desktop, &PassOptions::default(), &mut rng());

        // Assert
        assert_eq!(report.query_failed, 1);
        assert_eq!(report.moved, 1);
    }

    #[test]
    fn move_failure_is_counted_and_pass_continues() {
        // Arrange
        let mut desktop = FakeDesktop::with_windows(&[
            Rect::new(100, 100, 300, 200),
            Rect::new(400, 100, 600, 200),
        ]);
        desktop.immovable.push(0x100);

        // Act
        let report = run_pass(&desktop, &PassOptions::default(), &mut rng());

        // Assert
        assert_eq!(report.apply_failed, 1);
        assert_eq!(report.moved, 1);
        assert_eq!(report.query_failed, 0);
    }

    #[test]
    fn animation_failure_still_counts_as_moved() {
        // Arrange
        let mut desktop = FakeDesktop::with_windows(&[Rect::new(100, 100, 300, 200)]);
        desktop.animation_broken = true;

        // Act
        let report = run_pass(&desktop, &PassOptions::default(), &mut rng());

        // Assert
        assert_eq!(report.moved, 1);
        assert_eq!(report.apply_failed, 0);
    }

    #[test]
    fn animation_can_be_disabled() {
        // Arrange
        let desktop = FakeDesktop::with_windows(&[Rect::new(100, 100, 300, 200)]);
        let options = PassOptions {
            animation: AnimationConfig {
                enabled: false,
                ..Default::default()
            },
            ..Default::default()
        };

        // Act
        run_pass(&desktop, &options, &mut rng());

        // Assert
        assert_eq!(desktop.moves.borrow().len(), 1);
        assert!(desktop.animations.borrow().is_empty());
    }

    #[test]
    fn windows_on_disabled_monitors_are_skipped() {
        // Arrange
        let mut desktop = FakeDesktop::with_windows(&[
            Rect::new(100, 100, 300, 200),
            Rect::new(2000, 100, 2200, 200),
        ]);
        desktop
            .monitors
            .push(monitor("\\\\.\\DISPLAY2", Rect::new(1920, 0, 3840, 1080)));
        let options = PassOptions {
            monitors: MonitorConfig {
                disabled: vec!["\\\\.\\display2".into()],
            },
            ..Default::default()
        };

        // Act
        let report = run_pass(&desktop, &options, &mut rng());

        // Assert
        assert_eq!(report.skipped_disabled, 1);
        assert_eq!(report.moved, 1);
        assert_eq!(desktop.moves.borrow()[0].0, 0x100);
    }

    #[test]
    fn monitors_disabled_by_device_id_are_skipped() {
        // Arrange
        let mut desktop = FakeDesktop::with_windows(&[
            Rect::new(100, 100, 300, 200),
            Rect::new(2000, 100, 2200, 200),
        ]);
        let mut secondary = monitor("\\\\.\\DISPLAY3", Rect::new(1920, 0, 3840, 1080));
        secondary.device_id = "MONITOR\\DEL40B5\\{4d36e96e}\\0001".into();
        desktop.monitors.push(secondary);
        let options = PassOptions {
            monitors: MonitorConfig {
                disabled: vec!["MONITOR\\DEL40B5\\{4d36e96e}\\0001".into()],
            },
            ..Default::default()
        };

        // Act
        let report = run_pass(&desktop, &options, &mut rng());

        // Assert
        assert_eq!(report.skipped_disabled, 1);
        assert_eq!(report.moved, 1);
        assert_eq!(desktop.moves.borrow()[0].0, 0x100);
    }

    #[test]
    fn enumeration_failure_yields_empty_report() {
        // Arrange
        let mut desktop = FakeDesktop::with_windows(&[Rect::new(100, 100, 300, 200)]);
        desktop.enumeration_broken = true;

        // Act
        let report = run_pass(&desktop, &PassOptions::default(), &mut rng());

        // Assert
        assert!(report.enumeration_failed);
        assert_eq!(report.visited, 0);
        assert_eq!(report.to_string(), "enumeration failed");
    }

    #[test]
    fn auto_hidden_taskbar_is_honoured() {
        // Arrange
        let mut desktop = FakeDesktop::with_windows(&[Rect::new(100, 0, 300, 100)]);
        desktop.taskbar = TaskbarState {
            auto_hidden: true,
            height: 40,
        };

        for seed in 0..100 {
            // Act
            let outcome = nudge_window(
                &desktop,
                0x100,
                &PassOptions::default(),
                &mut StdRng::seed_from_u64(seed),
            )
            .unwrap();

            // Assert
            let Outcome::Moved { from, to } = outcome else {
                panic!("expected a move, got {outcome:?}");
            };
            assert_eq!(from, Point::new(100, 0));
            assert!(to.y >= 40);
        }
    }

    #[test]
    fn report_display_lists_counters() {
        let report = PassReport {
            visited: 3,
            moved: 2,
            skipped_maximized: 1,
            ..Default::default()
        };

        assert_eq!(
            report.to_string(),
            "visited 3, moved 2, maximized 1, monitor disabled 0, query failed 0, move failed 0"
        );
    }
}
