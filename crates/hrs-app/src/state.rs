// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{AppMode, TabKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub mode: AppMode,
    pub active_tab: TabKind,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Nav,
            active_tab: TabKind::Home,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    NextTab,
    PrevTab,
    SelectTab(TabKind),
    BeginSearch,
    EndSearch,
    BeginContact,
    ExitToNav,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ModeChanged(AppMode),
    TabChanged(TabKind),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn with_start_tab(tab: TabKind) -> Self {
        Self {
            active_tab: tab,
            ..Self::default()
        }
    }

    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::NextTab => self.rotate_tab(1),
            AppCommand::PrevTab => self.rotate_tab(-1),
            AppCommand::SelectTab(tab) => self.select_tab(tab),
            AppCommand::BeginSearch => {
                if self.active_tab != TabKind::Inventory {
                    let mut events = self.select_tab(TabKind::Inventory);
                    events.extend(self.set_mode(AppMode::Search));
                    return events;
                }
                self.set_mode(AppMode::Search)
            }
            AppCommand::EndSearch => self.set_mode(AppMode::Nav),
            AppCommand::BeginContact => {
                if self.active_tab != TabKind::Contact {
                    let mut events = self.select_tab(TabKind::Contact);
                    events.extend(self.set_mode(AppMode::Contact));
                    return events;
                }
                self.set_mode(AppMode::Contact)
            }
            AppCommand::ExitToNav => {
                let mut events = self.set_mode(AppMode::Nav);
                events.push(self.set_status("nav"));
                events
            }
            AppCommand::SetStatus(message) => vec![self.set_status(&message)],
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn rotate_tab(&mut self, delta: isize) -> Vec<AppEvent> {
        let tabs = TabKind::ALL;
        let current = self.active_tab.position() as isize;
        let len = tabs.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.select_tab(tabs[next])
    }

    fn select_tab(&mut self, tab: TabKind) -> Vec<AppEvent> {
        if tab == self.active_tab {
            return Vec::new();
        }
        self.active_tab = tab;
        let mut events = vec![AppEvent::TabChanged(tab)];
        events.extend(self.set_mode(AppMode::Nav));
        events
    }

    fn set_mode(&mut self, mode: AppMode) -> Vec<AppEvent> {
        if self.mode == mode {
            return Vec::new();
        }
        self.mode = mode;
        vec![AppEvent::ModeChanged(mode)]
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}
