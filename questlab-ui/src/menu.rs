//! A menu bar whose items are bound to callbacks.
//!
//! Items are addressed by path, `"File/Save"`. Triggering an item runs its
//! callback and returns the status-bar message it produced.

use crate::{UiError, UiResult, View};
use tracing::info;

type Action = Box<dyn FnMut() -> String>;

struct MenuItem {
    label: String,
    shortcut: Option<String>,
    enabled: bool,
    action: Action,
}

struct Menu {
    title: String,
    items: Vec<MenuItem>,
}

#[derive(Default)]
pub struct MenuBar {
    menus: Vec<Menu>,
}

impl std::fmt::Debug for MenuBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuBar")
            .field("paths", &self.paths())
            .finish()
    }
}

fn split_path(path: &str) -> UiResult<(&str, &str)> {
    match path.split_once('/') {
        Some((menu, item)) if !menu.is_empty() && !item.is_empty() && !item.contains('/') => {
            Ok((menu, item))
        }
        _ => Err(UiError::InvalidMenuPath(path.to_string())),
    }
}

impl MenuBar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `action` to `path`, creating the menu if needed. Binding an
    /// existing path replaces its action.
    pub fn bind<F>(&mut self, path: &str, shortcut: Option<&str>, action: F) -> UiResult<()>
    where
        F: FnMut() -> String + 'static,
    {
        let (menu_title, label) = split_path(path)?;
        let menu = match self.menus.iter().position(|m| m.title == menu_title) {
            Some(i) => &mut self.menus[i],
            None => {
                self.menus.push(Menu {
                    title: menu_title.to_string(),
                    items: Vec::new(),
                });
                let last = self.menus.len() - 1;
                &mut self.menus[last]
            }
        };
        let item = MenuItem {
            label: label.to_string(),
            shortcut: shortcut.map(str::to_string),
            enabled: true,
            action: Box::new(action),
        };
        match menu.items.iter_mut().find(|i| i.label == label) {
            Some(existing) => *existing = item,
            None => menu.items.push(item),
        }
        Ok(())
    }

    fn item_mut(&mut self, path: &str) -> UiResult<&mut MenuItem> {
        let (menu_title, label) = split_path(path)?;
        self.menus
            .iter_mut()
            .filter(|m| m.title == menu_title)
            .flat_map(|m| m.items.iter_mut())
            .find(|i| i.label == label)
            .ok_or_else(|| UiError::UnknownAction(path.to_string()))
    }

    /// Greys an item out, or enables it again.
    pub fn set_enabled(&mut self, path: &str, enabled: bool) -> UiResult<()> {
        self.item_mut(path)?.enabled = enabled;
        Ok(())
    }

    /// Runs the action bound to `path`.
    pub fn trigger(&mut self, path: &str) -> UiResult<String> {
        let item = self.item_mut(path)?;
        if !item.enabled {
            return Err(UiError::ActionDisabled(path.to_string()));
        }
        let message = (item.action)();
        info!(path, %message, "Menu action");
        Ok(message)
    }

    /// Runs the action bound to a keyboard shortcut such as `"Ctrl+S"`.
    pub fn trigger_shortcut(&mut self, shortcut: &str) -> UiResult<String> {
        let path = self
            .menus
            .iter()
            .flat_map(|m| {
                m.items
                    .iter()
                    .filter(|i| i.shortcut.as_deref() == Some(shortcut))
                    .map(move |i| format!("{}/{}", m.title, i.label))
            })
            .next()
            .ok_or_else(|| UiError::UnknownAction(shortcut.to_string()))?;
        self.trigger(&path)
    }

    /// Every bound path, in menu order.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.menus
            .iter()
            .flat_map(|m| m.items.iter().map(move |i| format!("{}/{}", m.title, i.label)))
            .collect()
    }
}

impl View for MenuBar {
    fn title(&self) -> &str {
        "Menu"
    }

    /// `File: New, Save (Ctrl+S) | Help: About`; disabled items are in
    /// brackets.
    fn render(&self) -> String {
        self.menus
            .iter()
            .map(|m| {
                let items: Vec<String> = m
                    .items
                    .iter()
                    .map(|i| {
                        let mut text = i.label.clone();
                        if let Some(shortcut) = &i.shortcut {
                            text.push_str(&format!(" ({shortcut})"));
                        }
                        if i.enabled { text } else { format!("[{text}]") }
                    })
                    .collect();
                format!("{}: {}", m.title, items.join(", "))
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
