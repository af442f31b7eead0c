//! Page routes and in-memory navigation history
//!
//! Paths mirror a small web app: `/`, `/:id`, `/pending`, `/success`,
//! `/fail`, and a catch-all not-found page. Each navigation carries an
//! opaque [`NavigationState`] that the receiving page reads with defaults.

use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Payment form, optionally pre-filled from an order lookup
    Pay { order_id: Option<String> },
    Pending,
    Success,
    Fail,
    NotFound,
}

impl Route {
    /// Static paths win over `/:id` and match case-insensitively. Query
    /// string and fragment are ignored. An order id is one segment of ASCII
    /// letters, digits or `_`; anything else is not found.
    pub fn parse(path: &str) -> Self {
        let path = path.trim();
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        match trimmed.to_ascii_lowercase().as_str() {
            "" => return Route::Pay { order_id: None },
            "pending" => return Route::Pending,
            "success" => return Route::Success,
            "fail" => return Route::Fail,
            _ => {}
        }
        if is_order_id(trimmed) {
            Route::Pay {
                order_id: Some(trimmed.to_string()),
            }
        } else {
            Route::NotFound
        }
    }
}

fn is_order_id(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// State handed from one page to the next. Never validated on arrival.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub amount: Option<String>,
    pub note: Option<String>,
    pub mobile: Option<String>,
    pub app: Option<String>,
    pub reason: Option<String>,
}

impl NavigationState {
    pub fn payment(amount: &str, note: &str, mobile: &str) -> Self {
        Self {
            amount: Some(amount.to_string()),
            note: Some(note.to_string()),
            mobile: Some(mobile.to_string()),
            ..Default::default()
        }
    }

    pub fn with_app(mut self, app: Option<&str>) -> Self {
        self.app = app.map(str::to_string);
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// The payment fields only, dropping app and reason.
    pub fn carry_payment(&self) -> Self {
        Self {
            amount: self.amount.clone(),
            note: self.note.clone(),
            mobile: self.mobile.clone(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
struct HistoryEntry {
    path: String,
    route: Route,
    state: NavigationState,
}

/// Back-stack of visited pages. Every push or pop bumps the generation so
/// the app can tear down the old page and mount the new one.
#[derive(Debug)]
pub struct Navigator {
    history: Vec<HistoryEntry>,
    generation: u64,
}

impl Navigator {
    pub fn new(initial_path: &str) -> Self {
        let path = normalize(initial_path);
        Self {
            history: vec![HistoryEntry {
                route: Route::parse(&path),
                path,
                state: NavigationState::default(),
            }],
            generation: 0,
        }
    }

    fn top(&self) -> &HistoryEntry {
        // history is never empty: `back` refuses to pop the last entry
        &self.history[self.history.len() - 1]
    }

    pub fn route(&self) -> &Route {
        &self.top().route
    }

    pub fn path(&self) -> &str {
        &self.top().path
    }

    pub fn state(&self) -> &NavigationState {
        &self.top().state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    pub fn navigate(&mut self, path: &str, state: NavigationState) {
        let path = normalize(path);
        let route = Route::parse(&path);
        debug!(path = %path, route = ?route, "Navigating");
        self.history.push(HistoryEntry { path, route, state });
        self.generation += 1;
    }

    /// Pops one page. Returns false when already at the first page.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.history.pop();
        self.generation += 1;
        debug!(path = %self.path(), "Navigated back");
        true
    }
}

fn normalize(path: &str) -> String {
    let path = path.trim();
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}
