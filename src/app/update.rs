use super::messages::Message;
use super::state::App;
use crate::toolbar::{Shortcut, ToolbarError};
use iced::keyboard::{self, Key, Modifiers};
use iced::{Subscription, Task, window};
use tracing::{debug, info, warn};

/// Work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    WriteClipboard(String),
    ReadClipboard,
}

impl App {
    /// Query the real window size once the window exists.
    pub fn startup() -> Task<Message> {
        window::get_latest()
            .and_then(window::get_size)
            .map(Message::WindowResized)
    }

    pub fn subscription(_app: &App) -> Subscription<Message> {
        Subscription::batch([
            window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
            keyboard::on_key_press(accelerator),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.reduce(message);
        let effects = std::mem::take(&mut self.session.pending);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }

    pub(super) fn reduce(&mut self, message: Message) {
        match message {
            Message::Activate(id) => {
                self.open_menu = None;
                let outcome = self.toolbars.activate(id, &mut self.session);
                self.report(outcome);
            }
            Message::OpenMenu(id) => {
                if self.toolbars.menu_labels(id).is_empty() {
                    self.open_menu = None;
                } else {
                    debug!(%id, "Opened control menu");
                    self.open_menu = Some(id);
                }
            }
            Message::CloseMenu => {
                self.open_menu = None;
            }
            Message::MenuEntry(id, index) => {
                self.open_menu = None;
                let outcome = self
                    .toolbars
                    .activate_menu_entry(id, index, &mut self.session);
                self.report(outcome);
            }
            Message::SelectToolbar(kind) => {
                debug!(?kind, "Switched toolbar");
                self.active_toolbar = kind;
                self.open_menu = None;
            }
            Message::ExpressionEdited(text) => {
                self.session.expression = text;
            }
            Message::Pasted(Some(text)) => {
                self.session.expression.push_str(&text);
            }
            Message::Pasted(None) => {
                debug!("Clipboard was empty");
            }
            Message::WindowResized(size) => {
                self.display_width = size.width;
                let relocation = self.toolbars.refresh_layout(size.width);
                debug!(width = size.width, ?relocation, "Window resized");
            }
            Message::Accelerator(accelerator) => {
                let Some(shortcut) = self.toolbars.accelerated(&accelerator) else {
                    debug!(%accelerator, "No control bound to accelerator");
                    return;
                };
                info!(%accelerator, ?shortcut, "Accelerator pressed");
                self.open_menu = None;
                let outcome = match shortcut {
                    Shortcut::Control(id) => self.toolbars.activate(id, &mut self.session),
                    Shortcut::MenuEntry(id, index) => {
                        self.toolbars
                            .activate_menu_entry(id, index, &mut self.session)
                    }
                };
                self.report(outcome);
            }
        }
    }

    fn report(&mut self, outcome: Result<(), ToolbarError>) {
        match outcome {
            Ok(()) => self.status = None,
            Err(err) => {
                warn!("Toolbar action failed: {err}");
                self.status = Some(err.to_string());
            }
        }
    }

    fn run_effect(&self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::WriteClipboard(text) => iced::clipboard::write(text),
            Effect::ReadClipboard => iced::clipboard::read().map(Message::Pasted),
        }
    }
}

fn accelerator(key: Key, modifiers: Modifiers) -> Option<Message> {
    if !modifiers.command() {
        return None;
    }
    match key.as_ref() {
        Key::Character(ch) => Some(Message::Accelerator(format!(
            "<ctrl>{}",
            ch.to_lowercase()
        ))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::toolbar::{EngineConfig, Item, Surface, ToolbarKind};
    use iced::Size;

    fn app(width: f32) -> App {
        let config = AppConfig {
            window_width: width,
            icon_paths: Vec::new(),
            ..AppConfig::default()
        };
        App::bootstrap(&config).unwrap()
    }

    fn cyclic_ids(app: &App, kind: Option<ToolbarKind>) -> Vec<crate::toolbar::ControlId> {
        let group = match kind {
            Some(kind) => app.toolbars.group(kind),
            None => app.toolbars.alternate().unwrap(),
        };
        group
            .iter()
            .filter(|entry| matches!(entry.item(), Item::Cyclic(_)))
            .map(|entry| entry.id())
            .collect()
    }

    #[test]
    fn resize_moves_options_strip() {
        let mut app = app(800.0);
        assert_eq!(app.toolbars.misc().placement(), Some(Surface::Home));
        app.reduce(Message::WindowResized(Size::new(1300.0, 400.0)));
        assert_eq!(app.toolbars.misc().placement(), Some(Surface::Alternate));
        assert_eq!(cyclic_ids(&app, None).len(), 4);
        assert!(cyclic_ids(&app, Some(ToolbarKind::Misc)).is_empty());
    }

    #[test]
    fn notation_press_updates_engine() {
        let mut app = app(800.0);
        let notation = cyclic_ids(&app, Some(ToolbarKind::Misc))[1];
        app.reduce(Message::Activate(notation));
        assert_eq!(app.session.engine.notation(), crate::toolbar::Notation::Exponent);
        assert!(app.status.is_none());
    }

    #[test]
    fn copy_accelerator_queues_clipboard_write() {
        let mut app = app(800.0);
        app.reduce(Message::ExpressionEdited("6*7".into()));
        app.reduce(Message::Accelerator("<ctrl>c".into()));
        assert_eq!(app.session.pending, [Effect::WriteClipboard("6*7".into())]);
    }

    #[test]
    fn cut_accelerator_runs_menu_entry() {
        let mut app = app(800.0);
        app.reduce(Message::ExpressionEdited("2**10".into()));
        app.reduce(Message::Accelerator("<ctrl>x".into()));
        assert!(app.session.expression.is_empty());
        assert_eq!(app.session.pending, [Effect::WriteClipboard("2**10".into())]);
        assert!(app.status.is_none());
    }

    #[test]
    fn menus_only_open_for_controls_with_entries() {
        let mut app = app(800.0);
        let angle = cyclic_ids(&app, Some(ToolbarKind::Misc))[0];
        app.reduce(Message::OpenMenu(angle));
        assert!(app.open_menu.is_none());

        let sqrt = app
            .toolbars
            .group(ToolbarKind::Algebra)
            .iter()
            .nth(1)
            .map(|entry| entry.id())
            .unwrap();
        app.reduce(Message::OpenMenu(sqrt));
        assert_eq!(app.open_menu, Some(sqrt));
        app.reduce(Message::MenuEntry(sqrt, 0));
        assert!(app.open_menu.is_none());
        assert_eq!(app.session.expression, "help(sqrt)");
    }
}
