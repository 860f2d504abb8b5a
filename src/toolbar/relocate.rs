//! Width-driven placement of the options strip.
//!
//! The miscellaneous toolbar owns a fixed run of controls (plot button, the
//! cyclic display options and their separators). On narrow displays they sit
//! at the end of the miscellaneous toolbar itself; on wide displays they move
//! to an alternate strip supplied by the host. Entries are moved by value, so
//! a control can never be on both surfaces at once.

use super::control::ControlId;
use super::error::ToolbarError;
use super::group::{ControlGroup, Entry, Item};
use tracing::{debug, info};

pub const DEFAULT_GRID_CELL_SIZE: f32 = 75.0;
pub const DEFAULT_THRESHOLD_CELLS: f32 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutPolicy {
    pub grid_cell_size: f32,
    pub threshold_cells: f32,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self {
            grid_cell_size: DEFAULT_GRID_CELL_SIZE,
            threshold_cells: DEFAULT_THRESHOLD_CELLS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Home,
    Alternate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relocation {
    Unchanged(Surface),
    /// `from` is `None` for the very first placement.
    Moved { from: Option<Surface>, to: Surface },
}

impl LayoutPolicy {
    pub fn width_threshold(&self) -> f32 {
        self.threshold_cells * self.grid_cell_size
    }

    pub fn target(&self, display_width: f32, has_alternate: bool) -> Surface {
        if display_width < self.width_threshold() || !has_alternate {
            Surface::Home
        } else {
            Surface::Alternate
        }
    }
}

pub struct MiscToolbar<H> {
    home: ControlGroup<H>,
    alternate: Option<ControlGroup<H>>,
    members: Vec<ControlId>,
    pending: Vec<Entry<H>>,
    placement: Option<Surface>,
    policy: LayoutPolicy,
}

impl<H> MiscToolbar<H> {
    /// Take ownership of both surfaces and the relocatable controls, then
    /// place the controls for `display_width`.
    pub fn new(
        mut home: ControlGroup<H>,
        mut alternate: Option<ControlGroup<H>>,
        members: Vec<Item<H>>,
        policy: LayoutPolicy,
        display_width: f32,
    ) -> Self {
        let pending: Vec<Entry<H>> = members.into_iter().map(Entry::new).collect();
        let members: Vec<ControlId> = pending.iter().map(Entry::id).collect();
        home.allow_relocation(&members);
        if let Some(alternate) = alternate.as_mut() {
            alternate.allow_relocation(&members);
        }

        let mut toolbar = Self {
            home,
            alternate,
            members,
            pending,
            placement: None,
            policy,
        };
        toolbar.refresh_layout(display_width);
        toolbar
    }

    pub fn home(&self) -> &ControlGroup<H> {
        &self.home
    }

    pub fn alternate(&self) -> Option<&ControlGroup<H>> {
        self.alternate.as_ref()
    }

    /// The relocatable controls in their canonical order.
    pub fn members(&self) -> &[ControlId] {
        &self.members
    }

    pub fn placement(&self) -> Option<Surface> {
        self.placement
    }

    pub fn policy(&self) -> LayoutPolicy {
        self.policy
    }

    pub fn surface(&self, surface: Surface) -> Option<&ControlGroup<H>> {
        match surface {
            Surface::Home => Some(&self.home),
            Surface::Alternate => self.alternate.as_ref(),
        }
    }

    /// Re-evaluate placement for the current display width. Safe to call on
    /// every resize; nothing moves unless the target surface changes.
    pub fn refresh_layout(&mut self, display_width: f32) -> Relocation {
        let target = self
            .policy
            .target(display_width, self.alternate.is_some());

        if self.pending.is_empty() && self.holds_all(target) {
            debug!(?target, display_width, "Options strip already placed");
            return Relocation::Unchanged(target);
        }

        let mut moving = std::mem::take(&mut self.pending);
        take_members(&mut self.home, &self.members, &mut moving);
        if let Some(alternate) = self.alternate.as_mut() {
            take_members(alternate, &self.members, &mut moving);
        }
        debug_assert_eq!(moving.len(), self.members.len());

        let members = &self.members;
        moving.sort_by_key(|entry| members.iter().position(|id| *id == entry.id()));

        let destination = match target {
            Surface::Alternate => self.alternate.as_mut().unwrap_or(&mut self.home),
            Surface::Home => &mut self.home,
        };
        for entry in moving {
            destination.insert_entry(entry);
        }

        let from = self.placement.replace(target);
        info!(?from, to = ?target, display_width, "Relocated options strip");
        Relocation::Moved { from, to: target }
    }

    /// Press a control on either surface.
    pub fn activate(&mut self, id: ControlId, host: &mut H) -> Result<(), ToolbarError> {
        if let Some(alternate) = self.alternate.as_mut() {
            if alternate.contains(id) {
                return alternate.activate(id, host);
            }
        }
        self.home.activate(id, host)
    }

    pub fn owner_of(&self, id: ControlId) -> Option<&ControlGroup<H>> {
        match self.alternate.as_ref() {
            Some(alternate) if alternate.contains(id) => Some(alternate),
            _ if self.home.contains(id) => Some(&self.home),
            _ => None,
        }
    }

    fn holds_all(&self, surface: Surface) -> bool {
        let Some(group) = self.surface(surface) else {
            return false;
        };
        let present: Vec<ControlId> = group
            .ids()
            .filter(|id| self.members.contains(id))
            .collect();
        present == self.members
    }
}

/// Pull every relocatable entry out of `group`, completing all removals
/// before anything is inserted elsewhere.
fn take_members<H>(group: &mut ControlGroup<H>, members: &[ControlId], out: &mut Vec<Entry<H>>) {
    for id in members {
        if !group.contains(*id) {
            continue;
        }
        match group.remove(*id) {
            Ok(entry) => out.push(entry),
            Err(err) => debug!(group = group.name(), "Could not detach control: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolbar::control::StaticControl;
    use crate::toolbar::glyph::IconResolver;

    struct NoIcons;

    impl IconResolver for NoIcons {
        fn icon_exists(&self, _name: &str) -> bool {
            false
        }
    }

    type Host = Vec<&'static str>;

    fn button(label: &'static str) -> Item<Host> {
        Item::Static(
            StaticControl::builder(label, label, move |log: &mut Host| {
                log.push(label);
                Ok(())
            })
            .build(&NoIcons),
        )
    }

    fn options_strip() -> Vec<Item<Host>> {
        vec![
            Item::Separator,
            button("plot"),
            Item::Separator,
            button("angle"),
            button("notation"),
            button("digits"),
            button("base"),
            Item::Separator,
        ]
    }

    fn misc(alternate: bool, width: f32) -> MiscToolbar<Host> {
        let mut home = ControlGroup::new("misc");
        home.insert(button("pi"));
        home.insert(button("e"));
        let alternate = alternate.then(|| {
            let mut main = ControlGroup::new("main");
            main.insert(button("activity"));
            main
        });
        MiscToolbar::new(home, alternate, options_strip(), LayoutPolicy::default(), width)
    }

    fn member_count(group: Option<&ControlGroup<Host>>, members: &[ControlId]) -> usize {
        group.map_or(0, |g| g.ids().filter(|id| members.contains(id)).count())
    }

    fn assert_not_split(toolbar: &MiscToolbar<Host>) {
        let members = toolbar.members();
        let home = member_count(Some(toolbar.home()), members);
        let alternate = member_count(toolbar.alternate(), members);
        assert!(
            (home == members.len() && alternate == 0) || (alternate == members.len() && home == 0),
            "split strip: home={home} alternate={alternate}"
        );
    }

    #[test]
    fn threshold_is_fourteen_cells() {
        let policy = LayoutPolicy::default();
        assert_eq!(policy.width_threshold(), 14.0 * 75.0);
        assert_eq!(policy.target(1049.0, true), Surface::Home);
        assert_eq!(policy.target(1050.0, true), Surface::Alternate);
        assert_eq!(policy.target(5000.0, false), Surface::Home);

        let dense = LayoutPolicy {
            grid_cell_size: 55.0,
            ..LayoutPolicy::default()
        };
        assert_eq!(dense.target(800.0, true), Surface::Alternate);
    }

    #[test]
    fn narrow_display_keeps_strip_home() {
        let toolbar = misc(true, 600.0);
        assert_eq!(toolbar.placement(), Some(Surface::Home));
        assert_eq!(toolbar.home().len(), 2 + 8);
        assert_eq!(toolbar.alternate().map(ControlGroup::len), Some(1));
        let tail: Vec<ControlId> = toolbar.home().ids().skip(2).collect();
        assert_eq!(tail, toolbar.members());
    }

    #[test]
    fn wide_display_moves_strip_to_alternate() {
        let toolbar = misc(true, 1400.0);
        assert_eq!(toolbar.placement(), Some(Surface::Alternate));
        assert_eq!(toolbar.home().len(), 2);
        let main = toolbar.alternate().unwrap();
        let tail: Vec<ControlId> = main.ids().skip(1).collect();
        assert_eq!(tail, toolbar.members());
        assert_not_split(&toolbar);
    }

    #[test]
    fn without_alternate_width_is_ignored() {
        let mut toolbar = misc(false, 4000.0);
        assert_eq!(toolbar.placement(), Some(Surface::Home));
        assert_eq!(toolbar.refresh_layout(9000.0), Relocation::Unchanged(Surface::Home));
    }

    #[test]
    fn refresh_is_idempotent() {
        let mut toolbar = misc(true, 1400.0);
        let before: Vec<ControlId> = toolbar.alternate().unwrap().ids().collect();
        assert_eq!(
            toolbar.refresh_layout(1400.0),
            Relocation::Unchanged(Surface::Alternate)
        );
        assert_eq!(
            toolbar.refresh_layout(1500.0),
            Relocation::Unchanged(Surface::Alternate)
        );
        let after: Vec<ControlId> = toolbar.alternate().unwrap().ids().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn resizing_back_and_forth_never_splits() {
        let mut toolbar = misc(true, 500.0);
        for width in [1200.0, 1300.0, 700.0, 1050.0, 1049.9, 300.0, 2000.0] {
            toolbar.refresh_layout(width);
            assert_not_split(&toolbar);
            let expected = LayoutPolicy::default().target(width, true);
            let owner = toolbar.surface(expected).unwrap();
            let present: Vec<ControlId> = owner
                .ids()
                .filter(|id| toolbar.members().contains(id))
                .collect();
            assert_eq!(present, toolbar.members());
        }
        assert_eq!(
            toolbar.refresh_layout(400.0),
            Relocation::Moved {
                from: Some(Surface::Alternate),
                to: Surface::Home
            }
        );
    }

    #[test]
    fn surfaces_keep_their_own_controls() {
        let mut toolbar = misc(true, 1400.0);
        let pi = toolbar.home().ids().next().unwrap();
        let activity = toolbar.alternate().unwrap().ids().next().unwrap();
        assert!(matches!(
            toolbar.home.remove(pi),
            Err(ToolbarError::PinnedControl { id, .. }) if id == pi
        ));
        let main = toolbar.alternate.as_mut().unwrap();
        assert!(matches!(
            main.remove(activity),
            Err(ToolbarError::PinnedControl { group, .. }) if group == "main"
        ));

        toolbar.refresh_layout(600.0);
        assert_eq!(toolbar.home().len(), 2 + 8);
        assert_eq!(toolbar.alternate().map(ControlGroup::len), Some(1));
        assert_not_split(&toolbar);
    }

    #[test]
    fn controls_stay_usable_after_moving() {
        let mut toolbar = misc(true, 400.0);
        let plot = toolbar.members()[1];
        let mut log = Vec::new();
        toolbar.activate(plot, &mut log).unwrap();
        toolbar.refresh_layout(1600.0);
        assert_eq!(toolbar.owner_of(plot).map(ControlGroup::name), Some("main"));
        toolbar.activate(plot, &mut log).unwrap();
        assert_eq!(log, ["plot", "plot"]);
    }
}
