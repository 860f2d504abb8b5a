//! Pressable toolbar controls.
//!
//! A [`StaticControl`] fires one callback. A [`CyclicControl`] walks through a
//! [`DisplayOptionSet`] on every press and hands the new selection to its
//! consumer. Callbacks receive the host context `H` and may fail; failures are
//! returned to whoever activated the control.

use super::error::ToolbarError;
use super::glyph::{Glyph, IconResolver};
use super::options::{DisplayOption, DisplayOptionSet};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::debug;

pub type Callback<H> = Box<dyn Fn(&mut H) -> Result<(), ToolbarError>>;
pub type Consumer<H> = Box<dyn Fn(&mut H, Selection<'_>) -> Result<(), ToolbarError>>;

pub const HELP_LABEL: &str = "Help";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(u32);

impl ControlId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(1);
        ControlId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a cyclic control reports a new selection to its consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    Payload,
    Index,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Payload(&'a str),
    Index(usize),
}

impl<'a> Selection<'a> {
    pub fn payload(self) -> Option<&'a str> {
        match self {
            Selection::Payload(payload) => Some(payload),
            Selection::Index(_) => None,
        }
    }

    pub fn index(self) -> Option<usize> {
        match self {
            Selection::Index(index) => Some(index),
            Selection::Payload(_) => None,
        }
    }
}

pub struct MenuEntry<H> {
    label: String,
    accelerator: Option<String>,
    action: Callback<H>,
}

pub struct StaticControl<H> {
    glyph: Glyph,
    tooltip: String,
    accelerator: Option<String>,
    on_activate: Callback<H>,
    menu: Vec<MenuEntry<H>>,
    help: Option<Callback<H>>,
}

impl<H> StaticControl<H> {
    pub fn builder(
        icon: &str,
        tooltip: &str,
        on_activate: impl Fn(&mut H) -> Result<(), ToolbarError> + 'static,
    ) -> StaticControlBuilder<H> {
        StaticControlBuilder {
            icon: icon.to_string(),
            tooltip: tooltip.to_string(),
            fallback: None,
            accelerator: None,
            on_activate: Box::new(on_activate),
            menu: Vec::new(),
            help: None,
        }
    }

    pub fn glyph(&self) -> &Glyph {
        &self.glyph
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn accelerator(&self) -> Option<&str> {
        self.accelerator.as_deref()
    }

    pub fn has_help(&self) -> bool {
        self.help.is_some()
    }

    pub fn activate(&self, host: &mut H) -> Result<(), ToolbarError> {
        (self.on_activate)(host)
    }

    /// Labels of the popup menu: extra entries first, then "Help" if a help
    /// action exists.
    pub fn menu_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.menu.iter().map(|entry| entry.label.as_str()).collect();
        if self.help.is_some() {
            labels.push(HELP_LABEL);
        }
        labels
    }

    /// Index of the popup entry bound to `accelerator`, if any.
    pub fn menu_entry_for(&self, accelerator: &str) -> Option<usize> {
        self.menu
            .iter()
            .position(|entry| entry.accelerator.as_deref() == Some(accelerator))
    }

    /// Run the popup entry at `index`, as ordered by [`Self::menu_labels`].
    /// Returns `None` when there is no such entry.
    pub fn activate_menu_entry(
        &self,
        index: usize,
        host: &mut H,
    ) -> Option<Result<(), ToolbarError>> {
        if let Some(entry) = self.menu.get(index) {
            return Some((entry.action)(host));
        }
        match &self.help {
            Some(help) if index == self.menu.len() => Some(help(host)),
            _ => None,
        }
    }
}

pub struct StaticControlBuilder<H> {
    icon: String,
    tooltip: String,
    fallback: Option<String>,
    accelerator: Option<String>,
    on_activate: Callback<H>,
    menu: Vec<MenuEntry<H>>,
    help: Option<Callback<H>>,
}

impl<H> StaticControlBuilder<H> {
    pub fn fallback(mut self, markup: &str) -> Self {
        self.fallback = Some(markup.to_string());
        self
    }

    pub fn accelerator(mut self, accelerator: &str) -> Self {
        self.accelerator = Some(accelerator.to_string());
        self
    }

    pub fn help(mut self, help: impl Fn(&mut H) -> Result<(), ToolbarError> + 'static) -> Self {
        self.help = Some(Box::new(help));
        self
    }

    pub fn menu_entry(
        mut self,
        label: &str,
        accelerator: Option<&str>,
        action: impl Fn(&mut H) -> Result<(), ToolbarError> + 'static,
    ) -> Self {
        self.menu.push(MenuEntry {
            label: label.to_string(),
            accelerator: accelerator.map(str::to_string),
            action: Box::new(action),
        });
        self
    }

    /// Resolve the glyph against the icon theme and finish the control.
    pub fn build(self, icons: &dyn IconResolver) -> StaticControl<H> {
        StaticControl {
            glyph: Glyph::resolve(&self.icon, self.fallback.as_deref(), icons),
            tooltip: self.tooltip,
            accelerator: self.accelerator,
            on_activate: self.on_activate,
            menu: self.menu,
            help: self.help,
        }
    }
}

pub struct CyclicControl<H> {
    options: DisplayOptionSet,
    selected: usize,
    description: String,
    mode: ReportMode,
    consumer: Consumer<H>,
}

impl<H> CyclicControl<H> {
    pub fn new(
        options: DisplayOptionSet,
        description: &str,
        mode: ReportMode,
        consumer: impl Fn(&mut H, Selection<'_>) -> Result<(), ToolbarError> + 'static,
    ) -> Self {
        Self {
            options,
            selected: 0,
            description: description.to_string(),
            mode,
            consumer: Box::new(consumer),
        }
    }

    pub fn options(&self) -> &DisplayOptionSet {
        &self.options
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn mode(&self) -> ReportMode {
        self.mode
    }

    pub fn current(&self) -> &DisplayOption {
        &self.options[self.selected]
    }

    pub fn current_payload(&self) -> &str {
        self.current().payload()
    }

    /// Jump to `index` without notifying the consumer.
    pub fn reset_to(&mut self, index: usize) -> Result<(), ToolbarError> {
        self.options.at(index)?;
        self.selected = index;
        Ok(())
    }

    /// Advance to the next option (wrapping) and report it. The control shows
    /// the new option before the consumer runs.
    pub fn activate(&mut self, host: &mut H) -> Result<(), ToolbarError> {
        self.selected = (self.selected + 1) % self.options.len();
        let option = &self.options[self.selected];
        debug!(
            control = %self.description,
            selected = self.selected,
            payload = option.payload(),
            "Cyclic control advanced"
        );

        let selection = match self.mode {
            ReportMode::Payload => Selection::Payload(option.payload()),
            ReportMode::Index => Selection::Index(self.selected),
        };
        (self.consumer)(host, selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolbar::options::OptionSpec;

    struct NoIcons;

    impl IconResolver for NoIcons {
        fn icon_exists(&self, _name: &str) -> bool {
            false
        }
    }

    #[derive(Default)]
    struct Log(Vec<String>);

    fn set(payloads: &[&'static str]) -> DisplayOptionSet {
        let specs: Vec<OptionSpec> = payloads.iter().map(|p| OptionSpec::new("", *p)).collect();
        DisplayOptionSet::resolve(&specs, "test", &NoIcons).unwrap()
    }

    fn recording(payloads: &[&'static str], mode: ReportMode) -> CyclicControl<Log> {
        CyclicControl::new(set(payloads), "test", mode, |log: &mut Log, selection| {
            log.0.push(match selection {
                Selection::Payload(payload) => payload.to_string(),
                Selection::Index(index) => index.to_string(),
            });
            Ok(())
        })
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for n in 1..=5 {
            let payloads: Vec<&'static str> = ["a", "b", "c", "d", "e"][..n].to_vec();
            let mut control = recording(&payloads, ReportMode::Payload);
            let mut log = Log::default();
            for _ in 0..n {
                control.activate(&mut log).unwrap();
            }
            assert_eq!(control.selected(), 0);
            assert_eq!(control.current_payload(), "a");
            assert_eq!(log.0.last().map(String::as_str), Some("a"));
        }
    }

    #[test]
    fn selection_is_activation_count_mod_len() {
        let mut control = recording(&["9", "12", "15", "6"], ReportMode::Payload);
        let mut log = Log::default();
        for k in 1..=11 {
            control.activate(&mut log).unwrap();
            assert_eq!(control.selected(), k % 4);
        }
        assert_eq!(log.0[..4], ["12", "15", "6", "9"]);
    }

    #[test]
    fn index_mode_reports_positions() {
        let mut control = recording(&["x", "y", "z"], ReportMode::Index);
        let mut log = Log::default();
        for _ in 0..4 {
            control.activate(&mut log).unwrap();
        }
        assert_eq!(log.0, ["1", "2", "0", "1"]);
    }

    #[test]
    fn consumer_sees_updated_state_and_errors_propagate() {
        let mut control: CyclicControl<Log> = CyclicControl::new(
            set(&["10", "2"]),
            "base",
            ReportMode::Payload,
            |_, selection| Err(ToolbarError::InvalidBase(selection.payload().unwrap().into())),
        );
        let err = control.activate(&mut Log::default()).unwrap_err();
        assert_eq!(err, ToolbarError::InvalidBase("2".into()));
        assert_eq!(control.current_payload(), "2");
    }

    #[test]
    fn reset_is_bounds_checked() {
        let mut control = recording(&["deg", "rad"], ReportMode::Payload);
        control.reset_to(1).unwrap();
        assert_eq!(control.current_payload(), "rad");
        assert_eq!(
            control.reset_to(2),
            Err(ToolbarError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(control.selected(), 1);
    }

    #[test]
    fn help_entry_only_exists_when_supplied() {
        let plain = StaticControl::builder("boolean-eq", "Equals", |log: &mut Log| {
            log.0.push("==".into());
            Ok(())
        })
        .build(&NoIcons);
        assert!(plain.menu_labels().is_empty());
        assert!(plain.activate_menu_entry(0, &mut Log::default()).is_none());

        let with_help = StaticControl::builder("edit-copy", "Copy", |log: &mut Log| {
            log.0.push("copy".into());
            Ok(())
        })
        .menu_entry("Cut", Some("<ctrl>x"), |log: &mut Log| {
            log.0.push("cut".into());
            Ok(())
        })
        .help(|log: &mut Log| {
            log.0.push("help".into());
            Ok(())
        })
        .build(&NoIcons);
        assert_eq!(with_help.menu_labels(), ["Cut", HELP_LABEL]);
        assert_eq!(with_help.menu_entry_for("<ctrl>x"), Some(0));
        assert_eq!(with_help.menu_entry_for("<ctrl>c"), None);
        assert_eq!(plain.menu_entry_for("<ctrl>x"), None);

        let mut log = Log::default();
        with_help.activate(&mut log).unwrap();
        with_help.activate_menu_entry(0, &mut log).unwrap().unwrap();
        with_help.activate_menu_entry(1, &mut log).unwrap().unwrap();
        assert!(with_help.activate_menu_entry(2, &mut log).is_none());
        assert_eq!(log.0, ["copy", "cut", "help"]);
    }

    #[test]
    fn glyph_is_resolved_once_at_build() {
        use std::cell::Cell;

        struct Flaky(Cell<bool>);
        impl IconResolver for Flaky {
            fn icon_exists(&self, _name: &str) -> bool {
                self.0.get()
            }
        }

        let theme = Flaky(Cell::new(false));
        let control = StaticControl::builder("edit-paste", "Paste", |_: &mut Log| Ok(()))
            .fallback("Paste")
            .accelerator("<ctrl>v")
            .build(&theme);
        theme.0.set(true);
        assert_eq!(control.glyph(), &Glyph::Markup("Paste".into()));
        assert_eq!(control.accelerator(), Some("<ctrl>v"));
    }
}
