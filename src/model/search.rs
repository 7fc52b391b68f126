//! Search Model
//!
//! Raw input, the debounced term, and the state of the latest search.
//!
//! Every issued search gets a new generation number. Responses carry the
//! generation they were issued with and are dropped unless it is still the
//! latest, so a slow response for an old term never overwrites a newer one.

use std::time::{Duration, Instant};

use super::types::{ErrorNotice, SearchPhase};
use crate::api::MovieSummary;
use crate::debounce::Debouncer;
use crate::error::CatalogError;
use crate::logic;

#[derive(Clone, Debug)]
pub struct SearchModel {
    // ============================================
    // INPUT
    // ============================================
    /// What the user has typed so far
    pub term: String,

    /// Settles `term` into the debounced term
    pub debouncer: Debouncer<String>,

    // ============================================
    // LATEST SEARCH
    // ============================================
    /// Term of the most recently issued search (the debounced term)
    pub active_term: Option<String>,

    /// Generation of the most recently issued search
    pub generation: u64,

    pub loading: bool,

    pub phase: SearchPhase,

    pub error: Option<ErrorNotice>,

    pub results: Vec<MovieSummary>,

    /// Highlighted card
    pub selected: Option<usize>,
}

impl SearchModel {
    pub fn new(debounce: Duration) -> Self {
        Self {
            term: String::new(),
            // The empty term is searched on mount, not via the debouncer
            debouncer: Debouncer::with_initial(debounce, String::new()),
            active_term: None,
            generation: 0,
            loading: false,
            phase: SearchPhase::Idle,
            error: None,
            results: Vec::new(),
            selected: None,
        }
    }

    /// Replace the raw term and re-arm the debounce timer.
    ///
    /// The debouncer sees the trimmed term: surrounding whitespace never
    /// changes the search, so it must not settle into a new one.
    pub fn set_term(&mut self, term: String, now: Instant) {
        self.debouncer.push(term.trim().to_string(), now);
        self.term = term;
    }

    pub fn push_char(&mut self, c: char, now: Instant) {
        let mut term = self.term.clone();
        term.push(c);
        self.set_term(term, now);
    }

    pub fn pop_char(&mut self, now: Instant) {
        let mut term = self.term.clone();
        if term.pop().is_some() {
            self.set_term(term, now);
        }
    }

    pub fn clear_term(&mut self, now: Instant) {
        if !self.term.is_empty() {
            self.set_term(String::new(), now);
        }
    }

    /// The debounced term, once it has settled on a new value
    pub fn poll_debounced(&mut self, now: Instant) -> Option<String> {
        self.debouncer.poll(now)
    }

    /// Start a search cycle for `term`; returns its generation
    pub fn begin(&mut self, term: String) -> u64 {
        self.generation += 1;
        self.active_term = Some(term);
        self.loading = true;
        self.error = None;
        self.phase = SearchPhase::Loading;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Apply a finished search. Returns false (and changes nothing) when the
    /// response belongs to a superseded search.
    pub fn apply_result(
        &mut self,
        generation: u64,
        result: &Result<Vec<MovieSummary>, CatalogError>,
    ) -> bool {
        if !self.is_current(generation) {
            return false;
        }

        self.loading = false;
        match result {
            Ok(movies) => {
                self.results = movies.clone();
                self.error = None;
                self.phase = SearchPhase::Success;
                self.selected = logic::navigation::clamp_selection(None, self.results.len());
            }
            Err(e) => {
                self.results.clear();
                self.error = Some(logic::errors::error_notice(e));
                self.phase = logic::errors::classify_error(e);
                self.selected = None;
            }
        }
        true
    }

    pub fn select_next(&mut self) {
        self.selected = logic::navigation::next_selection(self.selected, self.results.len());
    }

    pub fn select_prev(&mut self) {
        self.selected = logic::navigation::prev_selection(self.selected, self.results.len());
    }

    pub fn select_page_down(&mut self, page_size: usize) {
        self.selected = logic::navigation::page_down(self.selected, self.results.len(), page_size);
    }

    pub fn select_page_up(&mut self, page_size: usize) {
        self.selected = logic::navigation::page_up(self.selected, self.results.len(), page_size);
    }

    pub fn select_first(&mut self) {
        self.selected = logic::navigation::clamp_selection(Some(0), self.results.len());
    }

    pub fn select_last(&mut self) {
        self.selected = logic::navigation::clamp_selection(Some(usize::MAX), self.results.len());
    }

    pub fn selected_movie(&self) -> Option<&MovieSummary> {
        self.selected.and_then(|idx| self.results.get(idx))
    }
}
