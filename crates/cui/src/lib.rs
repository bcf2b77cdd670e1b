mod actions;
mod app;
mod input;
mod layout;
mod persistence;
mod view;

use anyhow::{Context, Result};
use app::App;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as CEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use patience_core::RngState;
use persistence::load_replay_file;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout, IsTerminal};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub seed: Option<u64>,
    pub replay_json: Option<PathBuf>,
}

pub fn run(options: LaunchOptions) -> Result<()> {
    let mut seed_value = options.seed;
    let mut scripted = None;
    if let Some(path) = options.replay_json.as_ref() {
        let script = load_replay_file(path)
            .with_context(|| format!("load replay script from {}", path.display()))?;
        if seed_value.is_none() {
            seed_value = script.seed;
        }
        scripted = Some(script.clicks);
    }

    let seed = seed_value.unwrap_or_else(|| RngState::from_entropy().seed());
    let mut app = App::new(seed);
    if let Some(clicks) = scripted {
        app.apply_script(&clicks);
    }

    ensure_interactive_terminal()?;

    enable_raw_mode().map_err(|err| {
        anyhow::anyhow!(
            "failed to enable raw mode; ensure the process owns an interactive terminal: {err}"
        )
    })?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("enter alternate screen with mouse capture")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let run_result = run_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    run_result
}

pub fn run_with_args(args: &[String]) -> Result<()> {
    let options = parse_options(args);
    run(options)
}

fn parse_options(args: &[String]) -> LaunchOptions {
    let mut seed = std::env::var("PATIENCE_SEED")
        .ok()
        .and_then(|value| value.parse::<u64>().ok());
    let mut replay_json = None;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--seed" | "-s" => {
                if let Some(value) = args.get(idx + 1) {
                    seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            "--replay-json" | "--replay" => {
                if let Some(value) = args.get(idx + 1) {
                    replay_json = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    LaunchOptions { seed, replay_json }
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(120);
    while !app.should_quit {
        terminal.draw(|frame| view::draw(frame, app))?;
        if event::poll(tick_rate)? {
            match event::read()? {
                CEvent::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    actions::dispatch(app, input::map_key(key));
                }
                CEvent::Mouse(mouse) => {
                    actions::dispatch(app, input::map_mouse(mouse));
                }
                _ => {}
            }
        }
    }
    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;
    Ok(())
}

fn ensure_interactive_terminal() -> Result<()> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        return Ok(());
    }
    anyhow::bail!(
        "patience-cui requires an interactive TTY (run directly in a terminal, not a piped/headless shell)"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_seed_and_replay_flags() {
        let args: Vec<String> = ["--seed", "42", "--replay-json", "clicks.json"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let options = parse_options(&args);
        assert_eq!(options.seed, Some(42));
        assert_eq!(options.replay_json, Some(PathBuf::from("clicks.json")));
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let args: Vec<String> = ["--wat", "--seed", "7"].iter().map(|s| s.to_string()).collect();
        let options = parse_options(&args);
        assert_eq!(options.seed, Some(7));
    }
}
