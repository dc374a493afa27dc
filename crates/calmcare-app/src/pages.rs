//! Page-local UI state
//!
//! Each page that reacts to input owns a small state machine here. The
//! whole [`PageState`] is rebuilt from scratch whenever the route changes,
//! so nothing survives leaving a page.

use calmcare_core::{DashboardSource, Mood, PatientSummary, Route};

/// Page-local state for the route currently shown
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Mental(MoodSelector),
    ProviderPatients(PatientBrowser),
    ProviderOverview(RowCursor),
    SignIn(AuthForm),
    SignUp(AuthForm),
    /// Pages without interactive state
    Static,
}

impl PageState {
    /// Fresh state for a newly mounted route
    pub fn mount(route: Route, source: &dyn DashboardSource) -> Self {
        match route {
            Route::MentalHealth => PageState::Mental(MoodSelector::new()),
            Route::ProviderPatients => {
                PageState::ProviderPatients(PatientBrowser::new(source.patients()))
            }
            Route::ProviderDashboard => {
                PageState::ProviderOverview(RowCursor::new(source.patients().len()))
            }
            Route::SignIn => PageState::SignIn(AuthForm::new(AuthKind::SignIn)),
            Route::SignUp => PageState::SignUp(AuthForm::new(AuthKind::SignUp)),
            Route::Landing
            | Route::PatientDashboard
            | Route::Activity
            | Route::Sleep
            | Route::Nutrition
            | Route::Fitness => PageState::Static,
        }
    }

    /// True while keystrokes go into a text field rather than to bindings
    pub fn is_text_entry(&self) -> bool {
        match self {
            PageState::SignIn(_) | PageState::SignUp(_) => true,
            PageState::ProviderPatients(browser) => browser.editing_notes(),
            _ => false,
        }
    }

    pub fn auth_form_mut(&mut self) -> Option<&mut AuthForm> {
        match self {
            PageState::SignIn(form) | PageState::SignUp(form) => Some(form),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Mood Selector
// ─────────────────────────────────────────────────────────────────────────────

/// Exactly one mood is active at a time; starts at Happy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoodSelector {
    selected: Mood,
}

impl MoodSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Mood {
        self.selected
    }

    pub fn is_active(&self, mood: Mood) -> bool {
        self.selected == mood
    }

    pub fn select(&mut self, mood: Mood) {
        self.selected = mood;
    }

    pub fn cycle(&mut self, delta: i32) {
        self.selected = self.selected.cycle(delta);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Row Cursor
// ─────────────────────────────────────────────────────────────────────────────

/// Highlighted row in a fixed-length list; clamps at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCursor {
    index: usize,
    len: usize,
}

impl RowCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn move_by(&mut self, delta: i32) {
        if self.len == 0 {
            return;
        }
        let target = self.index as i64 + delta as i64;
        self.index = target.clamp(0, self.len as i64 - 1) as usize;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Patient Browser
// ─────────────────────────────────────────────────────────────────────────────

/// Provider roster with a list view and a per-patient detail view
#[derive(Debug, Clone, PartialEq)]
pub struct PatientBrowser {
    patients: Vec<PatientSummary>,
    cursor: RowCursor,
    /// Roster index of the patient whose detail view is open
    open: Option<usize>,
    notes: String,
    editing_notes: bool,
}

impl PatientBrowser {
    pub fn new(patients: Vec<PatientSummary>) -> Self {
        let cursor = RowCursor::new(patients.len());
        Self {
            patients,
            cursor,
            open: None,
            notes: String::new(),
            editing_notes: false,
        }
    }

    pub fn patients(&self) -> &[PatientSummary] {
        &self.patients
    }

    pub fn cursor(&self) -> usize {
        self.cursor.index()
    }

    pub fn move_cursor(&mut self, delta: i32) {
        if self.open.is_none() {
            self.cursor.move_by(delta);
        }
    }

    /// Switch to the detail view. Out-of-range indices are ignored.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.patients.len() {
            return false;
        }
        self.open = Some(index);
        true
    }

    pub fn open_selected(&mut self) -> bool {
        self.open(self.cursor.index())
    }

    /// Back to the list. Notes typed for the closed patient are dropped.
    pub fn close(&mut self) {
        self.open = None;
        self.notes.clear();
        self.editing_notes = false;
    }

    /// Patient whose detail view is open
    pub fn selected(&self) -> Option<&PatientSummary> {
        self.open.and_then(|i| self.patients.get(i))
    }

    pub fn is_detail(&self) -> bool {
        self.open.is_some()
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn editing_notes(&self) -> bool {
        self.editing_notes
    }

    pub fn focus_notes(&mut self) {
        self.editing_notes = self.is_detail();
    }

    pub fn blur_notes(&mut self) {
        self.editing_notes = false;
    }

    pub fn push_note(&mut self, c: char) {
        if self.editing_notes {
            self.notes.push(c);
        }
    }

    pub fn pop_note(&mut self) {
        if self.editing_notes {
            self.notes.pop();
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Auth Forms
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    SignIn,
    SignUp,
}

impl AuthKind {
    pub fn heading(self) -> &'static str {
        match self {
            AuthKind::SignIn => "Welcome Back",
            AuthKind::SignUp => "Create Account",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthKind::SignIn => "Sign In",
            AuthKind::SignUp => "Sign Up",
        }
    }

    /// Prompt and link text pointing at the other form
    pub fn switch_prompt(self) -> (&'static str, &'static str) {
        match self {
            AuthKind::SignIn => ("Don’t have an account?", "Create Account"),
            AuthKind::SignUp => ("Already have an account?", "Sign In"),
        }
    }

    /// Route of the other form
    pub fn other(self) -> Route {
        match self {
            AuthKind::SignIn => Route::SignUp,
            AuthKind::SignUp => Route::SignIn,
        }
    }
}

/// One labelled input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    /// Rendered masked
    pub secret: bool,
}

impl FormField {
    fn new(label: &'static str, placeholder: &'static str, secret: bool) -> Self {
        Self {
            label,
            placeholder,
            value: String::new(),
            secret,
        }
    }

    /// Value to draw, masked if secret
    pub fn display(&self) -> String {
        if self.secret {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

/// Sign-in or sign-up form; values are never sent anywhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthForm {
    kind: AuthKind,
    fields: Vec<FormField>,
    focus: usize,
}

impl AuthForm {
    pub fn new(kind: AuthKind) -> Self {
        let mut fields = Vec::with_capacity(3);
        if kind == AuthKind::SignUp {
            fields.push(FormField::new("Full Name", "Enter your name", false));
        }
        fields.push(FormField::new("Email", "Enter your email", false));
        fields.push(FormField::new(
            "Password",
            match kind {
                AuthKind::SignIn => "Enter your password",
                AuthKind::SignUp => "Create a password",
            },
            true,
        ));
        Self {
            kind,
            fields,
            focus: 0,
        }
    }

    pub fn kind(&self) -> AuthKind {
        self.kind
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused(&self) -> Option<&FormField> {
        self.fields.get(self.focus)
    }

    pub fn input(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.pop();
        }
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }
}
