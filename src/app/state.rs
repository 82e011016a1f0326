use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::http::{Harness, Invocation, TimingResult};

/// What the render loop should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum DashboardAction {
    Quit,
    Trigger(Vec<usize>),
    Redraw,
    Ignore,
}

/// A finished invocation travelling back to its panel.
#[derive(Debug)]
pub(super) struct Settlement {
    pub(super) index: usize,
    pub(super) result: TimingResult,
}

pub(super) struct DashboardState {
    harnesses: Vec<Harness>,
    selected: usize,
}

impl DashboardState {
    pub(super) const fn new(harnesses: Vec<Harness>) -> Self {
        Self {
            harnesses,
            selected: 0,
        }
    }

    pub(super) fn harnesses(&self) -> &[Harness] {
        &self.harnesses
    }

    pub(super) const fn selected(&self) -> usize {
        self.selected
    }

    fn last_index(&self) -> usize {
        self.harnesses.len().saturating_sub(1)
    }

    pub(super) fn select_next(&mut self) {
        self.selected = self.selected.saturating_add(1).min(self.last_index());
    }

    pub(super) const fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(super) fn handle_key(&mut self, key: KeyEvent) -> DashboardAction {
        if key.kind == KeyEventKind::Release {
            return DashboardAction::Ignore;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                DashboardAction::Quit
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => DashboardAction::Quit,
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                DashboardAction::Redraw
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.select_next();
                DashboardAction::Redraw
            }
            KeyCode::Home => {
                self.selected = 0;
                DashboardAction::Redraw
            }
            KeyCode::End => {
                self.selected = self.last_index();
                DashboardAction::Redraw
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.harnesses.is_empty() {
                    DashboardAction::Ignore
                } else {
                    DashboardAction::Trigger(vec![self.selected])
                }
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                DashboardAction::Trigger((0..self.harnesses.len()).collect())
            }
            KeyCode::Backspace
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::BackTab
            | KeyCode::Delete
            | KeyCode::Insert
            | KeyCode::F(_)
            | KeyCode::Char(_)
            | KeyCode::Null
            | KeyCode::CapsLock
            | KeyCode::ScrollLock
            | KeyCode::NumLock
            | KeyCode::PrintScreen
            | KeyCode::Pause
            | KeyCode::Menu
            | KeyCode::KeypadBegin
            | KeyCode::Media(_)
            | KeyCode::Modifier(_) => DashboardAction::Ignore,
        }
    }

    /// Starts the harness at `index`; `None` when it is busy or out of range.
    pub(super) fn begin(&mut self, index: usize) -> Option<Invocation> {
        self.harnesses.get_mut(index).and_then(Harness::begin)
    }

    pub(super) fn settle(&mut self, settlement: Settlement) -> bool {
        match self.harnesses.get_mut(settlement.index) {
            Some(harness) => harness.settle(settlement.result),
            None => {
                tracing::warn!("Result for unknown panel {}", settlement.index);
                false
            }
        }
    }
}
