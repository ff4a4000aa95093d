// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::stdout;

use clap::Parser;
use crossterm::{event::read, style::Stylize, terminal};
use miette::IntoDiagnostic;
use r3bl_otp_field::{CommonResult, HasCellFocus, InputEvent, ModifierKeysMask,
                     OtpChild, OtpCoordinator, OtpFieldProps,
                     RawMode, Size, SpecialKey, SystemClipboard, keypress, otp_cells,
                     paint_render_ops, render_otp_field, render_window_too_small,
                     setup_default_miette_global_report_handler, size,
                     try_initialize_logging_global};
use tracing_core::LevelFilter;

use crate::clap_config::CliArg;

const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

fn main() -> CommonResult<()> {
    let cli_arg = CliArg::parse();

    setup_default_miette_global_report_handler(ISSUES_URL);

    let enable_logging = cli_arg.global_options.enable_logging;
    enable_logging.then(|| {
        try_initialize_logging_global(LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    // The terminal is restored before anything is printed below.
    let maybe_completed_code = run_otp_field(&cli_arg)?;

    match ExitOutcome::new(maybe_completed_code, cli_arg.expected.as_deref()) {
        ExitOutcome::Matches(code) => {
            println!("{}", format!("✅ Code {code} matches.").green());
        }
        ExitOutcome::DoesNotMatch(code) => {
            println!("{}", format!("❌ Code {code} does not match.").red());
        }
        ExitOutcome::Entered(code) => {
            println!("{}", format!("🔢 Code entered: {code}").cyan());
        }
        ExitOutcome::Cancelled => println!("{}", "Code entry cancelled.".dark_grey()),
    }

    enable_logging.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    Ok(())
}

/// Runs the field full screen until <kbd>Esc</kbd> or <kbd>Ctrl+C</kbd> is pressed.
/// Returns the code if it was complete at that point.
fn run_otp_field(cli_arg: &CliArg) -> CommonResult<Option<String>> {
    let children: Vec<OtpChild> = otp_cells(usize::from(cli_arg.digits));

    let mut coordinator = OtpCoordinator::new(&children, !cli_arg.numeric)?
        .with_props(OtpFieldProps::default().with_label(&cli_arg.label))
        .with_on_complete(|code| {
            // % is Display, ? is Debug.
            tracing::info!(message = "✅ Code complete", code = %code);
        });
    let mut focus = HasCellFocus::new(coordinator.number_of_digits());
    let mut clipboard = SystemClipboard;

    let exit_keys = [
        keypress! { @special SpecialKey::Esc },
        keypress! { @char ModifierKeysMask::new().with_ctrl(), 'c' },
    ];
    let reset_key = keypress! { @char ModifierKeysMask::new().with_ctrl(), 'r' };

    let raw_mode = RawMode::try_enter()?;

    let (columns, rows) = terminal::size().into_diagnostic()?;
    let mut window_size = size(columns, rows);
    repaint(&coordinator, &children, &focus, window_size)?;

    loop {
        let Ok(input_event) = InputEvent::try_from(read().into_diagnostic()?) else {
            continue;
        };

        if input_event.matches_any_of_these_keypresses(&exit_keys) {
            break;
        }

        if input_event.matches_keypress(reset_key) {
            coordinator.reset(&mut focus);
            repaint(&coordinator, &children, &focus, window_size)?;
            continue;
        }

        if let InputEvent::Resize(new_size) = input_event {
            window_size = new_size;
            repaint(&coordinator, &children, &focus, window_size)?;
            continue;
        }

        let response = coordinator.apply_event(input_event, &mut focus, &mut clipboard);
        if response.is_code_changed() {
            repaint(&coordinator, &children, &focus, window_size)?;
        }
    }

    drop(raw_mode);

    Ok(code_on_screen_if_complete(&coordinator))
}

/// The code currently held by the field, if every cell is filled. Edits that keep the
/// code full don't fire the completion callback, so this reads the live value.
fn code_on_screen_if_complete(coordinator: &OtpCoordinator) -> Option<String> {
    coordinator.is_complete().then(|| coordinator.value())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ExitOutcome {
    Matches(String),
    DoesNotMatch(String),
    Entered(String),
    Cancelled,
}

impl ExitOutcome {
    fn new(maybe_code: Option<String>, maybe_expected: Option<&str>) -> Self {
        match (maybe_code, maybe_expected) {
            (Some(code), Some(expected)) if code == expected => Self::Matches(code),
            (Some(code), Some(_)) => Self::DoesNotMatch(code),
            (Some(code), None) => Self::Entered(code),
            (None, _) => Self::Cancelled,
        }
    }
}

fn repaint(
    coordinator: &OtpCoordinator,
    children: &[OtpChild],
    focus: &HasCellFocus,
    window_size: Size,
) -> CommonResult<()> {
    let views = coordinator.render(children)?;
    let render_ops =
        match render_otp_field(&views, coordinator.props(), window_size, focus.maybe_index)
        {
            Ok(render_ops) => render_ops,
            Err(report) => {
                tracing::debug!(message = "repaint -> field doesn't fit", report = %report);
                render_window_too_small(window_size)
            }
        };
    paint_render_ops(&render_ops, &mut stdout().lock())
}

mod clap_config {
    use clap::{Args, Parser};

    /// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
    #[derive(Debug, Parser)]
    #[command(bin_name = "otp")]
    #[command(about = "🔢 Enter a one-time passcode, one character per cell")]
    #[command(version)]
    #[command(next_line_help = true)]
    #[command(arg_required_else_help(false))]
    /// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
    #[command(
        help_template = "{about}\nVersion: {bin} {version} 💻\n\nType or paste the code. Backspace clears, Ctrl+R starts over, Esc or Ctrl+C exits.\nUSAGE 📓:\n  otp [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
    )]
    pub struct CliArg {
        #[arg(
            long,
            short = 'd',
            default_value_t = 6,
            value_parser = clap::value_parser!(u8).range(1..=16),
            help = "Number of cells in the code."
        )]
        pub digits: u8,

        #[arg(long, short = 'n', help = "Hint that the code is made of digits only.")]
        pub numeric: bool,

        #[arg(
            long,
            short = 'e',
            help = "Report whether the entered code matches this one on exit."
        )]
        pub expected: Option<String>,

        #[arg(
            long,
            default_value = "Enter the one-time passcode",
            help = "Shown above the cells."
        )]
        pub label: String,

        #[command(flatten)]
        pub global_options: GlobalOption,
    }

    #[derive(Debug, Args)]
    pub struct GlobalOption {
        #[arg(
            global = true,
            long,
            short = 'l',
            help = "Log app output to a file named `otp_log.txt` for debugging."
        )]
        pub enable_logging: bool,
    }
}
