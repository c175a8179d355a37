//! App state and main loop: input handling, timer ticks, and drawing.

use std::{
    io,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Terminal,
};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::time::sleep;

use crate::actions::Action;
use crate::config::Settings;
use crate::console::Console;
use crate::router::Route;
use crate::schedule::{TimerEvent, ViewTimer};
use crate::ui::{
    configuration::draw_configuration, control::draw_control, dashboard::draw_dashboard,
    header::draw_header, theme::MUTED, toast::draw_toast,
};
use crate::wizard::Wizard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    console: Console,
    timer: ViewTimer,
    ticks: UnboundedReceiver<TimerEvent>,
    should_quit: bool,
}

impl App {
    pub fn new(settings: &Settings, initial: Route, seed: Option<u64>) -> Self {
        let (tx, ticks) = unbounded_channel();
        Self {
            console: Console::new(settings, initial, seed),
            timer: ViewTimer::new(settings.periods(), tx),
            ticks,
            should_quit: false,
        }
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub async fn run(&mut self) -> Result<()> {
        // Terminal setup
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        // Main loop
        let res = self.event_loop(&mut terminal).await;

        // Teardown
        self.timer.cancel();
        disable_raw_mode()?;
        let backend = terminal.backend_mut();
        execute!(backend, DisableMouseCapture, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        tracing::info!(route = %self.console.route(), "console started");
        self.timer.retarget(self.console.route());
        loop {
            // Input (non-blocking)
            while event::poll(Duration::from_millis(10))? {
                if let Event::Key(k) = event::read()? {
                    if handle_key(&mut self.console, k, Instant::now()) == Flow::Quit {
                        self.should_quit = true;
                    }
                }
            }
            if self.should_quit {
                break;
            }

            // Keep the ticker on whatever page is showing now
            self.timer.retarget(self.console.route());

            while let Ok(ev) = self.ticks.try_recv() {
                self.console.on_timer(ev);
            }

            let now = Instant::now();
            self.console.prune_notice(now);
            terminal.draw(|f| draw(f, &self.console, now))?;

            sleep(Duration::from_millis(50)).await;
        }
        tracing::info!("console stopped");
        Ok(())
    }
}

/// Apply one key press to the console.
pub fn handle_key(c: &mut Console, k: KeyEvent, now: Instant) -> Flow {
    if k.kind != KeyEventKind::Press {
        return Flow::Continue;
    }
    if k.modifiers.contains(KeyModifiers::CONTROL) && matches!(k.code, KeyCode::Char('c')) {
        return Flow::Quit;
    }
    match k.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Flow::Quit,
        KeyCode::Char('1') => {
            c.navigate(Route::Dashboard);
        }
        KeyCode::Char('2') => {
            c.navigate(Route::Configuration);
        }
        KeyCode::Char('3') => {
            c.navigate(Route::Control);
        }
        KeyCode::Tab => {
            let next = c.route().next();
            c.navigate(next);
        }
        KeyCode::Up => c.move_cursor(-1),
        KeyCode::Down => c.move_cursor(1),
        KeyCode::Home => c.move_cursor(isize::MIN),
        KeyCode::End => c.move_cursor(isize::MAX),
        KeyCode::Enter => c.activate(now),
        KeyCode::Backspace => c.dismiss_notice(),
        _ => page_key(c, k.code, now),
    }
    Flow::Continue
}

fn page_key(c: &mut Console, code: KeyCode, now: Instant) {
    match (c.route(), code) {
        (Route::Dashboard, KeyCode::Char('n')) => c.perform_action(Action::DeployNewService, now),
        (Route::Dashboard, KeyCode::Char('l')) => c.perform_action(Action::MonitorLogs, now),
        (Route::Dashboard | Route::Control, KeyCode::Char('b')) => c.perform_action(Action::CreateBackup, now),
        (Route::Dashboard | Route::Control, KeyCode::Char('s')) => c.perform_action(Action::SecurityScan, now),
        (Route::Control, KeyCode::Char('r')) => c.perform_action(Action::RefreshAll, now),
        (Route::Configuration, KeyCode::Char('g')) => {
            c.wizard.cycle_region();
        }
        (Route::Configuration, KeyCode::Char('z')) => {
            c.wizard.cycle_zone();
        }
        (Route::Configuration, KeyCode::Char(']')) => c.wizard.tab = c.wizard.tab.next(),
        (Route::Configuration, KeyCode::Char('[')) => c.wizard.tab = c.wizard.tab.prev(),
        (Route::Configuration, KeyCode::Char(' ')) => {
            if let Some(cfg) = Wizard::config_at(c.cursor()) {
                c.select_machine(cfg.id, now).ok();
            }
        }
        (Route::Configuration, KeyCode::Char('c')) => {
            // rejection already surfaces as an error notice
            c.create_instance(now).ok();
        }
        (Route::Configuration, KeyCode::Char('x')) => c.cancel_wizard(now),
        _ => {}
    }
}

fn footer_hint(route: Route) -> &'static str {
    match route {
        Route::Dashboard => "1/2/3 or Tab: pages   ↑/↓: card   Enter: open   n/b/l/s: actions",
        Route::Configuration => "1/2/3 or Tab: pages   ↑/↓: series   Enter: select   g: region   z: zone   c: create   x: cancel",
        Route::Control => "1/2/3 or Tab: pages   ↑/↓: agent   Enter: restart   r/b/s: actions",
    }
}

pub fn draw(f: &mut ratatui::Frame<'_>, c: &Console, now: Instant) {
    let area = f.area();

    // Root rows: nav, active page, key hints
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(8), Constraint::Length(1)])
        .split(area);

    draw_header(f, rows[0], c.router(), chrono::Local::now());

    let e = &c.engine;
    match c.route() {
        Route::Dashboard => draw_dashboard(f, rows[1], e.dashboard(), e.dashboard_score(), c.cursors.dashboard),
        Route::Configuration => draw_configuration(f, rows[1], &c.wizard, c.cursors.configuration),
        Route::Control => draw_control(
            f,
            rows[1],
            e.gauges(),
            e.thresholds(),
            e.system_score(),
            c.scores(),
            c.cursors.control,
        ),
    }

    let hint = Paragraph::new(Line::from(Span::styled(footer_hint(c.route()), Style::default().fg(MUTED))));
    f.render_widget(hint, rows[2]);

    if let Some((notice, phase)) = c.notice(now) {
        draw_toast(f, area, notice, phase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn console() -> Console {
        Console::new(&Settings::default(), Route::Dashboard, Some(3))
    }

    fn screen(c: &Console, now: Instant) -> String {
        let mut term = Terminal::new(TestBackend::new(120, 40)).unwrap();
        term.draw(|f| draw(f, c, now)).unwrap();
        let buf = term.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn quit_keys() {
        let mut c = console();
        let now = Instant::now();
        assert_eq!(handle_key(&mut c, key(KeyCode::Char('q')), now), Flow::Quit);
        assert_eq!(handle_key(&mut c, key(KeyCode::Esc), now), Flow::Quit);
        assert_eq!(
            handle_key(&mut c, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), now),
            Flow::Quit
        );
    }

    #[test]
    fn space_selects_row_and_c_creates() {
        let mut c = console();
        let now = Instant::now();
        handle_key(&mut c, key(KeyCode::Char('2')), now);
        handle_key(&mut c, key(KeyCode::Char('c')), now);
        assert_eq!(c.notice(now).map(|(n, _)| n.title.as_str()), Some("No Configuration Selected"));

        handle_key(&mut c, key(KeyCode::Down), now);
        handle_key(&mut c, key(KeyCode::Char(' ')), now);
        assert_eq!(c.wizard.selected().map(|m| m.id), Wizard::config_at(1).map(|m| m.id));
        handle_key(&mut c, key(KeyCode::Char('c')), now);
        assert_eq!(c.notice(now).map(|(n, _)| n.title.as_str()), Some("Instance Created Successfully!"));
    }

    #[test]
    fn digits_and_tab_switch_pages() {
        let mut c = console();
        let now = Instant::now();
        handle_key(&mut c, key(KeyCode::Char('3')), now);
        assert_eq!(c.route(), Route::Control);
        handle_key(&mut c, key(KeyCode::Tab), now);
        assert_eq!(c.route(), Route::Dashboard);
        handle_key(&mut c, key(KeyCode::Char('2')), now);
        assert_eq!(c.route(), Route::Configuration);
    }

    #[test]
    fn page_letters_are_scoped() {
        let mut c = console();
        let now = Instant::now();
        // 'r' means nothing on the dashboard
        let before = c.engine.gauges().to_vec();
        handle_key(&mut c, key(KeyCode::Char('r')), now);
        assert_eq!(c.engine.gauges(), &before[..]);
        assert_eq!(c.notices_raised(), 0);

        handle_key(&mut c, key(KeyCode::Char('n')), now);
        assert_eq!(c.engine.dashboard().active_services, 13);
    }

    #[test]
    fn renders_dashboard() {
        let c = console();
        let s = screen(&c, Instant::now());
        assert!(s.contains("CloudManager"));
        assert!(s.contains("Active Services"));
        assert!(s.contains("847"));
        assert!(s.contains("Create a VM"));
    }

    #[test]
    fn renders_control_with_score_and_agents() {
        let mut c = console();
        c.navigate(Route::Control);
        let s = screen(&c, Instant::now());
        assert!(s.contains("Score: 36"));
        assert!(s.contains("CPU Usage"));
        assert!(s.contains("Analytics Agent"));
        assert!(s.contains("Firewall"));
    }

    #[test]
    fn renders_rejection_toast() {
        let mut c = console();
        c.navigate(Route::Configuration);
        let now = Instant::now();
        handle_key(&mut c, key(KeyCode::Char('c')), now);
        let s = screen(&c, now);
        assert!(s.contains("No Configuration Selected"));
        assert!(!screen(&c, now + Duration::from_secs(5)).contains("No Configuration Selected"));
    }
}
