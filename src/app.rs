//! Application state and core logic

use crate::config::StudioConfig;
use crate::contact::{ContactSession, SystemClock};
use crate::services::{self, EmailJsClient, GeminiClient};
use crate::state::{
    catalog, AppState, ContactField, ProjectFocus, SplashState, View, ViewParams,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;

/// Width of the navigation sidebar
pub const SIDEBAR_WIDTH: u16 = 20;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Contact form and its outbound work
    pub contact: ContactSession,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Intro animation state
    pub splash_state: Option<SplashState>,
    /// Terminal size for grid calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
    spinner_frame: usize,
}

impl App {
    /// Create the app with live service clients built from config
    pub fn new(config: &StudioConfig) -> Result<Self> {
        let http = services::http_client(config.request_timeout())?;

        let credentials = config.email_credentials();
        if credentials.is_none() {
            tracing::warn!("EmailJS credentials are not configured; sending will fail");
        }
        if config.gemini_api_key.is_none() {
            tracing::warn!("Gemini API key is not configured; refining will fail");
        }

        let email = EmailJsClient::new(http.clone(), config.emailjs_endpoint.clone(), credentials);
        let generator = GeminiClient::new(
            http,
            config.gemini_endpoint.clone(),
            config.gemini_model.clone(),
            config.gemini_api_key.clone(),
        );
        let contact =
            ContactSession::new(Arc::new(email), Arc::new(generator), Arc::new(SystemClock));

        Ok(Self::with_session(contact, !config.skip_intro()))
    }

    /// Create the app around an existing contact session
    pub fn with_session(contact: ContactSession, show_intro: bool) -> Self {
        let mut state = AppState::default();
        let splash_state = if show_intro {
            state.current_view = View::Splash;
            Some(SplashState::new(Instant::now()))
        } else {
            None
        };

        Self {
            state,
            contact,
            quit: false,
            copy_message: None,
            splash_state,
            terminal_size: None,
            spinner_frame: 0,
        }
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.finish_intro();
                return true;
            }
        }
        false
    }

    fn finish_intro(&mut self) {
        self.splash_state = None;
        self.state.current_view = View::Home;
    }

    /// Advance per-frame state. Returns true when something visible changed.
    pub fn tick(&mut self) -> bool {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);

        if self.state.current_view == View::Project && self.state.current_project().is_none() {
            self.redirect_unknown_project();
        }

        self.contact.poll()
    }

    /// Current spinner glyph
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// Whether the UI should redraw at animation speed
    pub fn is_animating(&self) -> bool {
        self.in_splash() || self.contact.is_busy()
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Get the sidebar width (hidden during the intro)
    pub fn sidebar_width(&self) -> u16 {
        if self.in_splash() {
            0
        } else {
            SIDEBAR_WIDTH
        }
    }

    /// Calculate number of columns for the works grid based on terminal width
    pub fn calculate_grid_columns(&self) -> usize {
        // terminal_size is (height, width)
        let width = self.terminal_size.map(|(_, w)| w).unwrap_or(80);

        // Subtract sidebar and outer borders (2)
        let usable_width = width.saturating_sub(self.sidebar_width() + 2);

        const MIN_CARD_WIDTH: u16 = 24;
        const CARD_SPACING_H: u16 = 1;

        let columns = if usable_width >= MIN_CARD_WIDTH {
            ((usable_width + CARD_SPACING_H) / (MIN_CARD_WIDTH + CARD_SPACING_H)) as usize
        } else {
            1
        };
        // Never more than three columns
        columns.clamp(1, 3)
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Lightbox is modal over the project page
        if self.state.lightbox.is_some() {
            self.handle_lightbox_key(key);
            return Ok(());
        }

        // Clear any status messages on key press
        self.copy_message = None;

        match self.state.current_view {
            View::Splash => self.finish_intro(),
            View::Contact => self.handle_contact_key(key),
            view => {
                if !self.handle_global_key(key) {
                    match view {
                        View::Home => self.handle_home_key(key),
                        View::Works => self.handle_works_key(key),
                        View::Project => self.handle_project_key(key),
                        View::Splash | View::Contact => {}
                    }
                }
            }
        }

        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View, params: ViewParams) {
        if self.state.current_view == view && self.state.view_params == params {
            return;
        }
        self.state.view_history.push((self.state.current_view, self.state.view_params));
        self.enter(view, params);
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        while let Some((view, params)) = self.state.view_history.pop() {
            if view == View::Splash {
                continue;
            }
            self.enter(view, params);
            return;
        }
    }

    /// Open a project page, or the works gallery for an unknown id
    pub fn open_project(&mut self, id: u32) {
        if catalog::find_project(id).is_some() {
            self.navigate(View::Project, ViewParams::project(id));
        } else {
            tracing::debug!(id, "Unknown project id, redirecting to works");
            self.navigate(View::Works, ViewParams::default());
        }
    }

    fn enter(&mut self, view: View, params: ViewParams) {
        self.state.current_view = view;
        self.state.view_params = params;
        self.state.project_focus = ProjectFocus::default();
        self.state.close_lightbox();
        self.state.reset_selection();
    }

    fn redirect_unknown_project(&mut self) {
        tracing::debug!(
            id = ?self.state.view_params.project_id,
            "Unknown project id, redirecting to works"
        );
        self.enter(View::Works, ViewParams::default());
    }

    /// Keys shared by every view outside text entry. Returns true when handled.
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('g') => self.navigate(View::Home, ViewParams::default()),
            KeyCode::Char('w') => self.navigate(View::Works, ViewParams::default()),
            KeyCode::Char('c') => self.navigate(View::Contact, ViewParams::default()),
            KeyCode::Esc => self.go_back(),
            _ => return false,
        }
        true
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        let featured = catalog::featured_projects();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(featured.len()),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('d') | KeyCode::PageDown => self.state.scroll_down(),
            KeyCode::Char('u') | KeyCode::PageUp => self.state.scroll_up(),
            KeyCode::Enter => {
                if let Some(project) = featured.get(self.state.selected_index) {
                    self.open_project(project.id);
                }
            }
            KeyCode::Char('y') => {
                self.copy_to_clipboard(catalog::COLLABORATE_URL, "collaborate link")
            }
            _ => {}
        }
    }

    fn handle_works_key(&mut self, key: KeyEvent) {
        let total = self.state.visible_projects().len();
        let columns = self.calculate_grid_columns();
        match key.code {
            KeyCode::Tab | KeyCode::Char(']') => self.state.next_category(),
            KeyCode::BackTab | KeyCode::Char('[') => self.state.prev_category(),
            KeyCode::Char('h') | KeyCode::Left => self.state.move_selection_left(columns),
            KeyCode::Char('l') | KeyCode::Right => {
                self.state.move_selection_right(columns, total)
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up_grid(columns),
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.move_selection_down_grid(columns, total)
            }
            KeyCode::Enter => {
                let selected = self
                    .state
                    .visible_projects()
                    .get(self.state.selected_index)
                    .map(|p| p.id);
                if let Some(id) = selected {
                    self.open_project(id);
                }
            }
            _ => {}
        }
    }

    fn handle_project_key(&mut self, key: KeyEvent) {
        let Some(project) = self.state.current_project() else {
            self.redirect_unknown_project();
            return;
        };
        let related = catalog::related_projects(project.id);
        let len = match self.state.project_focus {
            ProjectFocus::Gallery => project.gallery.len(),
            ProjectFocus::Related => related.len(),
        };

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.state.project_focus.toggle();
                self.state.selected_index = 0;
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(len),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Enter => match self.state.project_focus {
                ProjectFocus::Gallery => {
                    self.state.open_lightbox(self.state.selected_index);
                }
                ProjectFocus::Related => {
                    if let Some(next) = related.get(self.state.selected_index) {
                        self.open_project(next.id);
                    }
                }
            },
            _ => {}
        }
    }

    fn handle_lightbox_key(&mut self, key: KeyEvent) {
        let Some(lightbox) = self.state.lightbox.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => lightbox.prev(),
            KeyCode::Right | KeyCode::Char('l') => lightbox.next(),
            KeyCode::Char('y') => {
                let source = lightbox.current();
                self.copy_to_clipboard(source, "image link");
            }
            KeyCode::Esc | KeyCode::Char('q') => self.state.close_lightbox(),
            _ => {}
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Tab => self.contact.focus_next(),
            KeyCode::BackTab => self.contact.focus_prev(),
            KeyCode::Char('s') if ctrl => {
                self.contact.submit();
            }
            KeyCode::Char('r') if ctrl => {
                // Disabled trigger: ignored rather than reported
                if self.contact.can_refine() {
                    self.contact.refine();
                }
            }
            KeyCode::Enter => {
                if self.contact.form().focused() == ContactField::Message {
                    self.contact.insert_char('\n');
                } else {
                    self.contact.focus_next();
                }
            }
            KeyCode::Backspace => self.contact.delete_char(),
            KeyCode::Char(c) if !ctrl => self.contact.insert_char(c),
            _ => {}
        }
    }

    fn copy_to_clipboard(&mut self, text: &str, what: &str) {
        match Self::write_clipboard(text) {
            Ok(()) => self.copy_message = Some(format!("Copied {what}")),
            Err(err) => {
                tracing::warn!("Clipboard write failed: {err:#}");
                self.push_error(format!("Could not copy {what}: {err}"));
            }
        }
    }

    fn write_clipboard(text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    /// Abort outstanding contact work before exit
    pub fn shutdown(&mut self) {
        self.contact.teardown();
    }
}
