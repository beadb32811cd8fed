//! `studymate timer` command.

use std::io::{self, Write};
use std::time::Duration;

use super::block_on;
use crate::cli::TimerArgs;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::ports::Notifier;
use crate::timer::{Completion, SessionTimer, TimerEvent};

const BAR_WIDTH: u32 = 20;

/// Execute the `timer` command: run `args.cycles` intervals back to back,
/// starting from `args.mode`.
///
/// # Errors
///
/// Returns an error string if the async runtime cannot start.
pub fn run(ctx: &mut ServiceContext, config: &Config, args: &TimerArgs) -> Result<(), String> {
    if args.quiet {
        ctx.mute();
    }
    let period = config.tick_interval();
    tracing::debug!(mode = %args.mode, cycles = args.cycles, ?period, "starting timer");
    block_on(run_cycles(ctx.notifier.as_ref(), period, args))
}

async fn run_cycles(notifier: &dyn Notifier, period: Duration, args: &TimerArgs) {
    let mut timer = SessionTimer::new(notifier, period);
    timer.switch_mode(args.mode);

    for _ in 0..args.cycles {
        let state = timer.state();
        let duration = state.mode().duration_secs();
        println!("{} ({})", state.mode().label(), state.clock_face());
        timer.start();
        while let Some(event) = timer.next_event().await {
            match event {
                TimerEvent::Tick { remaining } => render(remaining, duration),
                TimerEvent::Completed(completion) => {
                    render(0, completion.finished.duration_secs());
                    println!();
                    println!("{}", completion_message(&completion));
                }
            }
        }
    }
}

fn render(remaining: u32, duration: u32) {
    let elapsed = duration - remaining.min(duration);
    let filled = (elapsed * BAR_WIDTH / duration) as usize;
    let width = BAR_WIDTH as usize;
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(width - filled));
    print!(
        "\r{:02}:{:02} [{bar}] {:>3}%",
        remaining / 60,
        remaining % 60,
        elapsed * 100 / duration
    );
    let _ = io::stdout().flush();
}

fn completion_message(completion: &Completion) -> String {
    format!(
        "{} complete. Focus sessions completed: {}. Next: {}",
        completion.finished.label(),
        completion.completed_focus_sessions,
        completion.next.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Mode;

    #[test]
    fn completion_message_names_both_intervals() {
        let completion = Completion {
            finished: Mode::Focus,
            next: Mode::ShortBreak,
            completed_focus_sessions: 3,
        };
        assert_eq!(
            completion_message(&completion),
            "Focus Session complete. Focus sessions completed: 3. Next: Short Break"
        );
    }
}
