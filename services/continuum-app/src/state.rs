//! View state machines
//!
//! [`Screen`] is the state of a route's primary entity. [`DetailModal`] and
//! [`QueryPanel`] hold an on-demand fetch each. Both hand out a [`Ticket`]
//! per request and only apply the resolution that carries the current
//! ticket, so a slow response can never overwrite a newer one or reopen a
//! closed modal. [`RoutedScreen`] does the same for a routed screen whose
//! parameters change while its entity is loading. [`request`] wires one of
//! them to a single fetch.

use std::future::Future;

use crate::fetch::FetchError;

/// Primary entity of a screen
#[derive(Debug, Clone, PartialEq)]
pub enum Screen<T> {
    Loading,
    Ready(T),
    NotFound,
}

impl<T> Screen<T> {
    /// Any fetch failure ends in the terminal not-found state
    pub fn from_fetch(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => Screen::Ready(value),
            Err(e) => {
                tracing::debug!("primary fetch failed: {}", e);
                Screen::NotFound
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Screen::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Screen::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Identifies one request issued by a modal or panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
struct RequestSequence {
    current: u64,
}

impl RequestSequence {
    fn issue(&mut self) -> Ticket {
        self.current += 1;
        Ticket(self.current)
    }

    fn invalidate(&mut self) {
        self.current += 1;
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current
    }
}

/// [`Screen`] of the route currently shown
///
/// The routed dashboards call [`RoutedScreen::begin`] whenever their route
/// parameters change. A response carrying the ticket of a route the user has
/// since left is dropped. A screen seeded with the server's entity skips the
/// first fetch for the route it was seeded for.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedScreen<K, T> {
    route: Option<K>,
    screen: Screen<T>,
    sequence: RequestSequence,
}

impl<K, T> Default for RoutedScreen<K, T> {
    fn default() -> Self {
        Self {
            route: None,
            screen: Screen::Loading,
            sequence: RequestSequence::default(),
        }
    }
}

impl<K: PartialEq, T> RoutedScreen<K, T> {
    /// Start from the screen the server rendered for `route`
    pub fn seeded(route: K, screen: Screen<T>) -> Self {
        Self {
            route: Some(route),
            screen,
            sequence: RequestSequence::default(),
        }
    }

    /// Show `route`; returns the ticket of the fetch to issue, or `None`
    /// when the seeded entity already covers it
    pub fn begin(&mut self, route: K) -> Option<Ticket> {
        let untouched = self.sequence.current == 0 && !self.screen.is_loading();
        if untouched && self.route.as_ref() == Some(&route) {
            return None;
        }
        self.route = Some(route);
        self.screen = Screen::Loading;
        Some(self.sequence.issue())
    }

    /// Apply a fetch outcome; returns false when the route changed since
    pub fn resolve(&mut self, ticket: Ticket, result: Result<T, FetchError>) -> bool {
        if !self.sequence.is_current(ticket) {
            tracing::debug!("discarding response for a previous route {:?}", ticket);
            return false;
        }
        self.screen = Screen::from_fetch(result);
        true
    }

    pub fn route(&self) -> Option<&K> {
        self.route.as_ref()
    }

    pub fn screen(&self) -> &Screen<T> {
        &self.screen
    }
}

/// Modal showing data fetched for a selected entity
#[derive(Debug, Clone, PartialEq)]
pub struct DetailModal<S, D> {
    visible: bool,
    loading: bool,
    selection: Option<S>,
    data: D,
    sequence: RequestSequence,
}

impl<S, D: Default> Default for DetailModal<S, D> {
    fn default() -> Self {
        Self {
            visible: false,
            loading: false,
            selection: None,
            data: D::default(),
            sequence: RequestSequence::default(),
        }
    }
}

impl<S, D: Default> DetailModal<S, D> {
    /// Show the modal for `selection` and start loading; previous data is
    /// kept until the new response arrives
    pub fn open(&mut self, selection: S) -> Ticket {
        self.visible = true;
        self.loading = true;
        self.selection = Some(selection);
        self.sequence.issue()
    }

    /// Apply a fetch outcome; returns false when the ticket is stale
    pub fn resolve(&mut self, ticket: Ticket, result: Result<D, FetchError>) -> bool {
        if !self.sequence.is_current(ticket) {
            tracing::debug!("discarding stale modal response {:?}", ticket);
            return false;
        }
        self.data = result.unwrap_or_else(|e| {
            tracing::debug!("detail fetch failed: {}", e);
            D::default()
        });
        self.loading = false;
        true
    }

    /// Hide the modal, drop selection and data, ignore pending responses
    pub fn close(&mut self) {
        self.visible = false;
        self.loading = false;
        self.selection = None;
        self.data = D::default();
        self.sequence.invalidate();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selection(&self) -> Option<&S> {
        self.selection.as_ref()
    }

    pub fn data(&self) -> &D {
        &self.data
    }
}

/// Query form with its own parameters, loading flag and result
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPanel<Q, R> {
    pub query: Q,
    loading: bool,
    result: R,
    sequence: RequestSequence,
}

impl<Q, R: Default> QueryPanel<Q, R> {
    pub fn new(query: Q) -> Self {
        Self {
            query,
            loading: false,
            result: R::default(),
            sequence: RequestSequence::default(),
        }
    }

    /// Start a request with the current parameters
    pub fn submit(&mut self) -> Ticket {
        self.loading = true;
        self.sequence.issue()
    }

    /// Replace the result; failures become an empty result
    pub fn resolve(&mut self, ticket: Ticket, result: Result<R, FetchError>) -> bool {
        if !self.sequence.is_current(ticket) {
            tracing::debug!("discarding stale panel response {:?}", ticket);
            return false;
        }
        self.result = result.unwrap_or_else(|e| {
            tracing::debug!("panel fetch failed: {}", e);
            R::default()
        });
        self.loading = false;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// False until the form is submitted for the first time
    pub fn has_submitted(&self) -> bool {
        self.sequence.current > 0
    }

    pub fn result(&self) -> &R {
        &self.result
    }
}

/// One fetch driven by a state machine
///
/// `start` updates the state and hands out the ticket; when it declines, no
/// request is made and `None` is returned. Otherwise `fetch` is called once
/// and the returned task passes its outcome to `finish` with that ticket.
pub fn request<D, Fut>(
    start: impl FnOnce() -> Option<Ticket>,
    fetch: impl FnOnce() -> Fut,
    finish: impl FnOnce(Ticket, Result<D, FetchError>),
) -> Option<impl Future<Output = ()>>
where
    Fut: Future<Output = Result<D, FetchError>>,
{
    let ticket = start()?;
    let pending = fetch();
    Some(async move {
        finish(ticket, pending.await);
    })
}
