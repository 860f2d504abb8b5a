use super::update::Effect;
use crate::config::AppConfig;
use crate::engine::CalcEngine;
use crate::icons::IconTheme;
use crate::toolbar::host::DIGIT_PALETTE;
use crate::toolbar::{
    ClipboardOp, ConfigurationBridge, ControlGroup, ControlId, DigitColor, EngineConfig,
    InsertKind, ToolbarError, ToolbarHost, ToolbarKind, Toolbars,
};
use std::rc::Rc;
use tracing::debug;

/// What toolbar callbacks can reach: the engine, the expression line and the
/// digit colours. Clipboard work is queued as effects for the update loop.
pub struct Session {
    pub(super) engine: CalcEngine,
    pub(super) expression: String,
    pub(super) digit_colors: [DigitColor; 10],
    pub(super) pending: Vec<Effect>,
}

impl Session {
    pub fn new(engine: CalcEngine) -> Self {
        Self {
            engine,
            expression: String::new(),
            digit_colors: [DIGIT_PALETTE[0]; 10],
            pending: Vec::new(),
        }
    }
}

impl ToolbarHost for Session {
    fn engine(&mut self) -> &mut dyn EngineConfig {
        &mut self.engine
    }

    fn insert(&mut self, kind: InsertKind, text: &str) {
        match kind {
            InsertKind::PostOperator | InsertKind::Text => self.expression.push_str(text),
            InsertKind::Function => {
                self.expression.push_str(text);
                self.expression.push('(');
            }
        }
        debug!(?kind, text, "Inserted into expression");
    }

    fn clipboard(&mut self, op: ClipboardOp) {
        match op {
            ClipboardOp::Copy => self
                .pending
                .push(Effect::WriteClipboard(self.expression.clone())),
            ClipboardOp::Cut => {
                let text = std::mem::take(&mut self.expression);
                self.pending.push(Effect::WriteClipboard(text));
            }
            ClipboardOp::Paste => self.pending.push(Effect::ReadClipboard),
        }
    }

    fn digit_color_changed(&mut self, digit: u8, color: DigitColor) {
        if let Some(slot) = self.digit_colors.get_mut(usize::from(digit)) {
            *slot = color;
            debug!(digit, %color, "Digit colour changed");
        }
    }
}

/// Core application state.
pub struct App {
    pub(super) toolbars: Toolbars<Session>,
    pub(super) session: Session,
    pub(super) icons: IconTheme,
    pub(super) active_toolbar: ToolbarKind,
    pub(super) open_menu: Option<ControlId>,
    pub(super) display_width: f32,
    pub(super) status: Option<String>,
}

impl App {
    pub fn bootstrap(config: &AppConfig) -> Result<Self, ToolbarError> {
        let icons = IconTheme::new(config.icon_paths.clone());
        let engine = CalcEngine::from_config(config);
        let toolbars = Toolbars::build(
            Rc::new(ConfigurationBridge::default()),
            &engine,
            &icons,
            Some(ControlGroup::new("main")),
            config.layout_policy(),
            config.window_width,
        )?;

        Ok(Self {
            toolbars,
            session: Session::new(engine),
            icons,
            active_toolbar: ToolbarKind::Algebra,
            open_menu: None,
            display_width: config.window_width,
            status: None,
        })
    }
}
