//! The calculator's toolbars, assembled from static tables.

use super::bridge::{ConfigurationBridge, Setting};
use super::control::{ControlId, CyclicControl, ReportMode, StaticControl};
use super::engine::EngineConfig;
use super::error::ToolbarError;
use super::glyph::{Glyph, IconResolver};
use super::group::{ControlGroup, Item};
use super::host::InsertKind::{Function, PostOperator, Text};
use super::host::{ClipboardOp, DIGIT_PALETTE, InsertKind, ToolbarHost};
use super::options::{DisplayOption, DisplayOptionSet, OptionSpec};
use super::relocate::{LayoutPolicy, MiscToolbar, Relocation};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy)]
struct ButtonSpec {
    icon: &'static str,
    tooltip: &'static str,
    kind: InsertKind,
    insert: &'static str,
    help: Option<&'static str>,
    fallback: Option<&'static str>,
}

impl ButtonSpec {
    const fn new(
        icon: &'static str,
        tooltip: &'static str,
        kind: InsertKind,
        insert: &'static str,
    ) -> Self {
        Self {
            icon,
            tooltip,
            kind,
            insert,
            help: None,
            fallback: None,
        }
    }

    const fn help(mut self, topic: &'static str) -> Self {
        self.help = Some(topic);
        self
    }

    const fn fallback(mut self, markup: &'static str) -> Self {
        self.fallback = Some(markup);
        self
    }

    fn build<H: ToolbarHost + 'static>(self, icons: &dyn IconResolver) -> StaticControl<H> {
        let Self { kind, insert, .. } = self;
        let mut builder = StaticControl::builder(self.icon, self.tooltip, move |host: &mut H| {
            host.insert(kind, insert);
            Ok(())
        });
        if let Some(topic) = self.help {
            builder = builder.help(move |host: &mut H| {
                host.insert(InsertKind::Text, &format!("help({topic})"));
                Ok(())
            });
        }
        if let Some(markup) = self.fallback {
            builder = builder.fallback(markup);
        }
        builder.build(icons)
    }
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Button(ButtonSpec),
    Separator,
}

const fn func(icon: &'static str, tooltip: &'static str, name: &'static str) -> ButtonSpec {
    ButtonSpec::new(icon, tooltip, Function, name).help(name)
}

const ALGEBRA: &[Slot] = &[
    Slot::Button(
        ButtonSpec::new("algebra-square", "Square", PostOperator, "**2")
            .help("square")
            .fallback("x<sup>2</sup>"),
    ),
    Slot::Button(func("algebra-sqrt", "Square root", "sqrt").fallback("√x")),
    Slot::Button(
        ButtonSpec::new("algebra-xinv", "Inverse", PostOperator, "**-1")
            .help("inv")
            .fallback("x<sup>-1</sup>"),
    ),
    Slot::Separator,
    Slot::Button(func("algebra-exp", "e to the power x", "exp").fallback("e<sup>x</sup>")),
    Slot::Button(func("algebra-xpowy", "x to the power y", "pow").fallback("x<sup>y</sup>")),
    Slot::Button(func("algebra-ln", "Natural logarithm", "ln")),
    Slot::Separator,
    Slot::Button(func("algebra-fac", "Factorial", "factorial")),
];

const TRIGONOMETRY: &[Slot] = &[
    Slot::Button(func("trigonometry-sin", "Sine", "sin")),
    Slot::Button(func("trigonometry-cos", "Cosine", "cos")),
    Slot::Button(func("trigonometry-tan", "Tangent", "tan")),
    Slot::Separator,
    Slot::Button(func("trigonometry-asin", "Arc sine", "asin")),
    Slot::Button(func("trigonometry-acos", "Arc cosine", "acos")),
    Slot::Button(func("trigonometry-atan", "Arc tangent", "atan")),
    Slot::Separator,
    Slot::Button(func("trigonometry-sinh", "Hyperbolic sine", "sinh")),
    Slot::Button(func("trigonometry-cosh", "Hyperbolic cosine", "cosh")),
    Slot::Button(func("trigonometry-tanh", "Hyperbolic tangent", "tanh")),
];

const BOOLEAN: &[Slot] = &[
    Slot::Button(ButtonSpec::new("boolean-and", "Logical and", PostOperator, "&").help("And")),
    Slot::Button(ButtonSpec::new("boolean-or", "Logical or", PostOperator, "|").help("Or")),
    Slot::Separator,
    Slot::Button(ButtonSpec::new("boolean-eq", "Equals", PostOperator, "==")),
    Slot::Button(ButtonSpec::new("boolean-neq", "Not equals", PostOperator, "!=")),
];

const CONSTANTS: &[Slot] = &[
    Slot::Button(ButtonSpec::new("constants-pi", "Pi", Text, "pi").fallback("π")),
    Slot::Button(ButtonSpec::new("constants-e", "e", Text, "e")),
    Slot::Button(ButtonSpec::new(
        "constants-eulersconstant",
        "γ",
        Text,
        "0.577215664901533",
    )),
    Slot::Button(ButtonSpec::new(
        "constants-goldenratio",
        "φ",
        Text,
        "1.618033988749895",
    )),
];

const PLOT: ButtonSpec = func("plot", "Plot", "plot");

pub const ANGLE_OPTIONS: &[OptionSpec] = &[
    OptionSpec::new("format-deg", "deg").with_tooltip("Degrees"),
    OptionSpec::new("format-rad", "rad").with_tooltip("Radians"),
];

pub const NOTATION_OPTIONS: &[OptionSpec] = &[
    OptionSpec::new("format-sci", "sci"),
    OptionSpec::new("format-exp", "exp"),
];

pub const DIGIT_OPTIONS: &[OptionSpec] = &[
    OptionSpec::new("digits-9", "9"),
    OptionSpec::new("digits-12", "12"),
    OptionSpec::new("digits-15", "15"),
    OptionSpec::new("digits-6", "6"),
];

pub const BASE_OPTIONS: &[OptionSpec] = &[
    OptionSpec::new("base-10", "10"),
    OptionSpec::new("base-2", "2"),
    OptionSpec::new("base-16", "16"),
    OptionSpec::new("base-8", "8"),
];

const SETTINGS: [(Setting, &[OptionSpec], &str); 4] = [
    (Setting::AngleUnit, ANGLE_OPTIONS, "Degrees / Radians"),
    (Setting::Notation, NOTATION_OPTIONS, "Exponent / Scientific notation"),
    (Setting::DigitLimit, DIGIT_OPTIONS, "Number of shown digits"),
    (Setting::IntegerBase, BASE_OPTIONS, "Integer formatting base"),
];

fn build_group<H: ToolbarHost + 'static>(
    name: &str,
    slots: &[Slot],
    icons: &dyn IconResolver,
) -> ControlGroup<H> {
    let mut group = ControlGroup::new(name);
    append_slots(&mut group, slots, icons);
    debug!(group = name, controls = group.len(), "Built toolbar");
    group
}

fn append_slots<H: ToolbarHost + 'static>(
    group: &mut ControlGroup<H>,
    slots: &[Slot],
    icons: &dyn IconResolver,
) {
    for slot in slots {
        match slot {
            Slot::Button(spec) => group.insert(Item::Static(spec.build(icons))),
            Slot::Separator => group.separator(),
        };
    }
}

pub fn edit_toolbar<H: ToolbarHost + 'static>(icons: &dyn IconResolver) -> ControlGroup<H> {
    let mut group = ControlGroup::new("edit");
    let copy = StaticControl::builder("edit-copy", "Copy", |host: &mut H| {
        host.clipboard(ClipboardOp::Copy);
        Ok(())
    })
    .fallback("Copy")
    .accelerator("<ctrl>c")
    .menu_entry("Cut", Some("<ctrl>x"), |host: &mut H| {
        host.clipboard(ClipboardOp::Cut);
        Ok(())
    })
    .build(icons);
    group.insert(Item::Static(copy));

    let paste = StaticControl::builder("edit-paste", "Paste", |host: &mut H| {
        host.clipboard(ClipboardOp::Paste);
        Ok(())
    })
    .fallback("Paste")
    .build(icons);
    group.insert(Item::Static(paste));
    group
}

pub fn algebra_toolbar<H: ToolbarHost + 'static>(icons: &dyn IconResolver) -> ControlGroup<H> {
    build_group("algebra", ALGEBRA, icons)
}

pub fn trigonometry_toolbar<H: ToolbarHost + 'static>(icons: &dyn IconResolver) -> ControlGroup<H> {
    build_group("trigonometry", TRIGONOMETRY, icons)
}

pub fn boolean_toolbar<H: ToolbarHost + 'static>(icons: &dyn IconResolver) -> ControlGroup<H> {
    build_group("boolean", BOOLEAN, icons)
}

/// One button per digit; each press steps the digit through
/// [`DIGIT_PALETTE`] and reports the new colour to the host.
pub fn color_toolbar<H: ToolbarHost + 'static>(
    icons: &dyn IconResolver,
) -> Result<ControlGroup<H>, ToolbarError> {
    let mut group = ControlGroup::new("colors");
    for digit in 0..=9u8 {
        let markup = format!("<b><big>{digit}</big></b>");
        let tooltip = format!("Change color of digit {digit}");
        let glyph = Glyph::resolve("", Some(&markup), icons);
        let options = DisplayOptionSet::new(
            DIGIT_PALETTE
                .iter()
                .map(|color| DisplayOption::new(glyph.clone(), tooltip.as_str(), color.to_string()))
                .collect(),
        )?;
        let control = CyclicControl::new(
            options,
            &tooltip,
            ReportMode::Index,
            move |host: &mut H, selection| {
                if let Some(color) = selection.index().and_then(|index| DIGIT_PALETTE.get(index)) {
                    host.digit_color_changed(digit, *color);
                }
                Ok(())
            },
        );
        group.insert(Item::Cyclic(control));
    }
    Ok(group)
}

/// A cyclic control bound to an engine setting, starting at the option that
/// matches the engine's current value.
pub fn setting_control<H: ToolbarHost + 'static>(
    setting: Setting,
    specs: &[OptionSpec],
    description: &str,
    bridge: &Rc<ConfigurationBridge>,
    engine: &dyn EngineConfig,
    icons: &dyn IconResolver,
) -> Result<CyclicControl<H>, ToolbarError> {
    let options = DisplayOptionSet::resolve(specs, description, icons)?;
    let start = bridge.initial_index(setting, &options, engine);
    let bridge = Rc::clone(bridge);
    let mut control = CyclicControl::new(
        options,
        description,
        ReportMode::Payload,
        move |host: &mut H, selection| {
            let payload = selection.payload().unwrap_or_default();
            bridge.apply(setting, host.engine(), payload)
        },
    );
    control.reset_to(start)?;
    Ok(control)
}

/// Constants on the home strip plus the relocatable options strip.
pub fn misc_toolbar<H: ToolbarHost + 'static>(
    bridge: &Rc<ConfigurationBridge>,
    engine: &dyn EngineConfig,
    icons: &dyn IconResolver,
    alternate: Option<ControlGroup<H>>,
    policy: LayoutPolicy,
    display_width: f32,
) -> Result<MiscToolbar<H>, ToolbarError> {
    let mut home = ControlGroup::new("misc");
    append_slots(&mut home, CONSTANTS, icons);

    let mut members = vec![
        Item::Separator,
        Item::Static(PLOT.build(icons)),
        Item::Separator,
    ];
    for (setting, specs, description) in SETTINGS {
        members.push(Item::Cyclic(setting_control(
            setting,
            specs,
            description,
            bridge,
            engine,
            icons,
        )?));
    }
    members.push(Item::Separator);

    Ok(MiscToolbar::new(home, alternate, members, policy, display_width))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarKind {
    Edit,
    Algebra,
    Trigonometry,
    Boolean,
    Misc,
    Colors,
}

impl ToolbarKind {
    pub const ALL: [ToolbarKind; 6] = [
        ToolbarKind::Edit,
        ToolbarKind::Algebra,
        ToolbarKind::Trigonometry,
        ToolbarKind::Boolean,
        ToolbarKind::Misc,
        ToolbarKind::Colors,
    ];
}

impl fmt::Display for ToolbarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolbarKind::Edit => write!(f, "Edit"),
            ToolbarKind::Algebra => write!(f, "Algebra"),
            ToolbarKind::Trigonometry => write!(f, "Trigonometry"),
            ToolbarKind::Boolean => write!(f, "Boolean"),
            ToolbarKind::Misc => write!(f, "Miscellaneous"),
            ToolbarKind::Colors => write!(f, "Colors"),
        }
    }
}

/// What a keyboard accelerator triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Control(ControlId),
    MenuEntry(ControlId, usize),
}

/// All toolbars of the calculator.
pub struct Toolbars<H> {
    edit: ControlGroup<H>,
    algebra: ControlGroup<H>,
    trigonometry: ControlGroup<H>,
    boolean: ControlGroup<H>,
    colors: ControlGroup<H>,
    misc: MiscToolbar<H>,
}

impl<H: ToolbarHost + 'static> Toolbars<H> {
    pub fn build(
        bridge: Rc<ConfigurationBridge>,
        engine: &dyn EngineConfig,
        icons: &dyn IconResolver,
        alternate: Option<ControlGroup<H>>,
        policy: LayoutPolicy,
        display_width: f32,
    ) -> Result<Self, ToolbarError> {
        let toolbars = Self {
            edit: edit_toolbar(icons),
            algebra: algebra_toolbar(icons),
            trigonometry: trigonometry_toolbar(icons),
            boolean: boolean_toolbar(icons),
            colors: color_toolbar(icons)?,
            misc: misc_toolbar(&bridge, engine, icons, alternate, policy, display_width)?,
        };
        info!(
            threshold = policy.width_threshold(),
            placement = ?toolbars.misc.placement(),
            "Toolbars ready"
        );
        Ok(toolbars)
    }
}

impl<H> Toolbars<H> {
    pub fn group(&self, kind: ToolbarKind) -> &ControlGroup<H> {
        match kind {
            ToolbarKind::Edit => &self.edit,
            ToolbarKind::Algebra => &self.algebra,
            ToolbarKind::Trigonometry => &self.trigonometry,
            ToolbarKind::Boolean => &self.boolean,
            ToolbarKind::Misc => self.misc.home(),
            ToolbarKind::Colors => &self.colors,
        }
    }

    pub fn misc(&self) -> &MiscToolbar<H> {
        &self.misc
    }

    /// The host-supplied strip the options move to on wide displays.
    pub fn alternate(&self) -> Option<&ControlGroup<H>> {
        self.misc.alternate()
    }

    pub fn refresh_layout(&mut self, display_width: f32) -> Relocation {
        self.misc.refresh_layout(display_width)
    }

    pub fn owner_of(&self, id: ControlId) -> Option<&ControlGroup<H>> {
        [&self.edit, &self.algebra, &self.trigonometry, &self.boolean, &self.colors]
            .into_iter()
            .find(|group| group.contains(id))
            .or_else(|| self.misc.owner_of(id))
    }

    /// The control or popup entry bound to a keyboard accelerator such as
    /// `<ctrl>c`.
    pub fn accelerated(&self, accelerator: &str) -> Option<Shortcut> {
        ToolbarKind::ALL
            .into_iter()
            .map(|kind| self.group(kind))
            .chain(self.alternate())
            .flat_map(|group| group.iter())
            .find_map(|entry| match entry.item() {
                Item::Static(control) if control.accelerator() == Some(accelerator) => {
                    Some(Shortcut::Control(entry.id()))
                }
                Item::Static(control) => control
                    .menu_entry_for(accelerator)
                    .map(|index| Shortcut::MenuEntry(entry.id(), index)),
                _ => None,
            })
    }

    pub fn activate(&mut self, id: ControlId, host: &mut H) -> Result<(), ToolbarError> {
        for group in [
            &mut self.edit,
            &mut self.algebra,
            &mut self.trigonometry,
            &mut self.boolean,
            &mut self.colors,
        ] {
            if group.contains(id) {
                return group.activate(id, host);
            }
        }
        self.misc.activate(id, host)
    }

    pub fn menu_labels(&self, id: ControlId) -> Vec<&str> {
        self.owner_of(id)
            .map(|group| group.menu_labels(id))
            .unwrap_or_default()
    }

    pub fn activate_menu_entry(
        &self,
        id: ControlId,
        index: usize,
        host: &mut H,
    ) -> Result<(), ToolbarError> {
        match self.owner_of(id) {
            Some(group) => group.activate_menu_entry(id, index, host),
            None => Err(ToolbarError::UnknownControl {
                id,
                group: "toolbars".to_string(),
            }),
        }
    }
}
