//! Application controller and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, FieldId, FieldValue, FileInfo, View};
use crate::submit::{
    EnrollmentClient, EnrollmentClientTrait, EnrollmentSubmission, SubmissionReceipt, SubmitError,
    DEFAULT_SUBMIT_DELAY,
};
use crate::validate::format::{check_upload, content_type_for_path, format_phone};
use crate::validate::rules;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Main application struct: one controller per form instance.
///
/// All element references are explicit fields rather than implicit
/// lookups, so the whole submission workflow is unit-testable with a
/// mocked client and no live terminal.
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Submission client behind the mockable trait seam; shared so the
    /// in-flight call can run on its own task
    client: Arc<dyn EnrollmentClientTrait>,
    /// Path being typed into the profile picture field
    pub file_path_input: String,
    /// The in-flight submission call, polled from the event loop
    pending_submit: Option<JoinHandle<Result<SubmissionReceipt, SubmitError>>>,
    /// When the pending submission started, for spinner animation
    submit_started: Option<Instant>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance with the configured client
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load()?;
        let delay = config
            .submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SUBMIT_DELAY);
        let client = EnrollmentClient::new(config.endpoint).with_delay(delay);
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an App around an arbitrary client (used by tests)
    pub fn with_client(client: Arc<dyn EnrollmentClientTrait>) -> Self {
        Self {
            state: AppState::default(),
            client,
            file_path_input: String::new(),
            pending_submit: None,
            submit_started: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a submission call is in flight
    pub fn is_submitting(&self) -> bool {
        self.state.submitting
    }

    /// Current spinner frame for the loading indicator
    pub fn spinner_frame(&self) -> &'static str {
        let elapsed = self
            .submit_started
            .map(|t| t.elapsed().as_millis())
            .unwrap_or(0);
        SPINNER_FRAMES[(elapsed / 80) as usize % SPINNER_FRAMES.len()]
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Modal error dialog swallows everything except dismissal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Form => self.handle_form_key(key)?,
            View::Success => self.handle_success_key(key),
        }
        Ok(())
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab => {
                self.blur_active_field();
                self.state.form.next_field();
                self.state.reset_group_cursor();
            }
            KeyCode::BackTab => {
                self.blur_active_field();
                self.state.form.prev_field();
                self.state.reset_group_cursor();
            }
            // Submit from anywhere (Ctrl+S / Cmd+S)
            KeyCode::Char('s') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.submit();
            }
            KeyCode::Esc => {
                // Drop focus back to the first field
                self.blur_active_field();
                self.state.form.active_field_index = 0;
                self.state.reset_group_cursor();
            }
            KeyCode::Up => self.state.scroll_up(),
            KeyCode::Down => self.state.scroll_down(),
            KeyCode::Left => self.move_group_cursor(-1),
            KeyCode::Right => self.move_group_cursor(1),
            KeyCode::Enter => self.handle_enter(),
            KeyCode::Char(' ') => self.handle_space(),
            KeyCode::Char(c) => self.input_char(c),
            KeyCode::Backspace => self.backspace(),
            _ => {}
        }
        Ok(())
    }

    fn handle_success_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Enter | KeyCode::Esc) {
            self.quit = true;
        }
    }

    /// Enter submits on the submit button, attaches on the file field,
    /// inserts a newline in the multiline textarea, and otherwise selects
    /// in group fields.
    fn handle_enter(&mut self) {
        if self.state.form.is_submit_active() {
            self.submit();
            return;
        }
        match self.state.form.active_id() {
            Some(FieldId::ProfilePicture) => self.attach_file_from_input(),
            Some(FieldId::PastWorkDetails) => {
                self.state.form.field_mut(FieldId::PastWorkDetails).push_char('\n');
            }
            Some(id) => {
                if self.is_group_field(id) {
                    self.activate_group_option(id);
                }
            }
            None => {}
        }
    }

    fn handle_space(&mut self) {
        match self.state.form.active_id() {
            Some(id) if self.is_group_field(id) => self.activate_group_option(id),
            Some(_) => self.input_char(' '),
            None => {}
        }
    }

    /// Typing into a field clears its error first, then applies the
    /// identity-keyed formatter (phone digits).
    fn input_char(&mut self, c: char) {
        let Some(id) = self.state.form.active_id() else {
            return;
        };
        match id {
            FieldId::ProfilePicture => {
                self.state.form.clear_error(id);
                self.file_path_input.push(c);
            }
            _ if self.is_group_field(id) => {}
            FieldId::Phone => {
                self.state.form.clear_error(id);
                let field = self.state.form.field_mut(id);
                field.push_char(c);
                let formatted = format_phone(field.as_text());
                field.set_text(formatted);
            }
            _ => {
                self.state.form.clear_error(id);
                self.state.form.field_mut(id).push_char(c);
            }
        }
    }

    fn backspace(&mut self) {
        let Some(id) = self.state.form.active_id() else {
            return;
        };
        self.state.form.clear_error(id);
        if id == FieldId::ProfilePicture {
            self.file_path_input.pop();
        } else {
            self.state.form.field_mut(id).pop_char();
        }
    }

    /// Validate the field losing focus, mirroring blur-driven feedback
    fn blur_active_field(&mut self) {
        if let Some(id) = self.state.form.active_id() {
            rules::validate_field(&mut self.state.form, id);
        }
    }

    fn is_group_field(&self, id: FieldId) -> bool {
        matches!(
            self.state.form.field(id).value,
            FieldValue::Choice(_) | FieldValue::Checks(_)
        )
    }

    /// Options available in the focused group (radio groups offer yes/no)
    fn group_option_count(&self, id: FieldId) -> usize {
        match &self.state.form.field(id).value {
            FieldValue::Checks(opts) => opts.len(),
            FieldValue::Choice(_) => 2,
            _ => 0,
        }
    }

    fn move_group_cursor(&mut self, delta: isize) {
        let Some(id) = self.state.form.active_id() else {
            return;
        };
        let count = self.group_option_count(id);
        if count == 0 {
            return;
        }
        let cursor = self.state.group_cursor as isize + delta;
        self.state.group_cursor = cursor.clamp(0, count as isize - 1) as usize;
    }

    /// Toggle or select the highlighted option of the focused group
    fn activate_group_option(&mut self, id: FieldId) {
        self.state.form.clear_error(id);
        match &self.state.form.field(id).value {
            FieldValue::Checks(_) => {
                self.state.form.toggle_check(id, self.state.group_cursor);
            }
            FieldValue::Choice(_) => {
                let choice = if self.state.group_cursor == 0 {
                    crate::state::PAST_WORK_YES
                } else {
                    crate::state::PAST_WORK_NO
                };
                self.state.form.select_choice(id, choice);
            }
            _ => {}
        }
    }

    /// Resolve the typed path into an upload, gate it, and attach or
    /// reject with an inline error. Rejection clears the selection.
    fn attach_file_from_input(&mut self) {
        let path = self.file_path_input.trim().to_string();
        if path.is_empty() {
            return;
        }
        match std::fs::metadata(&path) {
            Ok(meta) => {
                let file_name = path
                    .rsplit(['/', '\\'])
                    .next()
                    .unwrap_or(path.as_str())
                    .to_string();
                let info = FileInfo {
                    file_name,
                    size: meta.len(),
                    content_type: content_type_for_path(&path),
                };
                self.attach_upload(info);
            }
            Err(e) => {
                self.state.form.clear_file();
                self.state
                    .form
                    .set_error(FieldId::ProfilePicture, format!("Cannot read file: {e}"));
            }
        }
        self.file_path_input.clear();
    }

    /// Gate an upload and update the field accordingly. Split out from
    /// the filesystem walk so the policy is testable directly.
    pub fn attach_upload(&mut self, info: FileInfo) {
        match check_upload(&info) {
            Ok(()) => {
                self.state.form.clear_error(FieldId::ProfilePicture);
                self.state.form.attach_file(info);
            }
            Err(message) => {
                self.state.form.clear_file();
                self.state.form.set_error(FieldId::ProfilePicture, message);
            }
        }
    }

    /// Start the submission lifecycle: validate, enter the loading state,
    /// and hand the client call to its own task. The draw loop keeps
    /// running while the call is in flight, so the spinner and the
    /// disabled submit control actually render; the result is presented
    /// by [`App::poll_submission`].
    pub fn submit(&mut self) {
        // The disabled submit control: ignore re-entry while in flight
        if self.state.submitting {
            return;
        }
        if !rules::validate_form(&mut self.state.form) {
            tracing::debug!("validation failed, submission not attempted");
            return;
        }

        self.state.submitting = true;
        self.submit_started = Some(Instant::now());
        let submission = EnrollmentSubmission::from_form(&self.state.form);
        let client = Arc::clone(&self.client);
        self.pending_submit = Some(tokio::spawn(async move {
            client.submit_enrollment(&submission).await
        }));
    }

    /// Present the in-flight submission's result once its task has
    /// finished. Called from the event loop between draws; a no-op while
    /// the call is still pending.
    pub async fn poll_submission(&mut self) {
        if self
            .pending_submit
            .as_ref()
            .is_some_and(|handle| handle.is_finished())
        {
            self.finish_submission().await;
        }
    }

    /// Leave the loading state and present success or failure. The
    /// loading flag is cleared before the result is handled, on every
    /// path.
    async fn finish_submission(&mut self) {
        let Some(handle) = self.pending_submit.take() else {
            return;
        };
        let result = handle.await;
        self.state.submitting = false;
        self.submit_started = None;

        match result {
            Ok(Ok(receipt)) => {
                tracing::info!(confirmation_id = %receipt.confirmation_id, "submission succeeded");
                self.state.receipt = Some(receipt);
                self.state.current_view = View::Success;
                self.state.scroll_to_top();
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, "submission failed");
                self.state.push_error(e.user_message());
            }
            Err(e) => {
                tracing::error!(error = %e, "submission task failed");
                self.state
                    .push_error(SubmitError::Transport(e.to_string()).user_message());
            }
        }
    }
}
