use super::control::{ControlId, CyclicControl, StaticControl};
use super::error::ToolbarError;
use tracing::debug;

pub enum Item<H> {
    Static(StaticControl<H>),
    Cyclic(CyclicControl<H>),
    Separator,
}

impl<H> Item<H> {
    pub fn is_separator(&self) -> bool {
        matches!(self, Item::Separator)
    }
}

pub struct Entry<H> {
    id: ControlId,
    item: Item<H>,
}

impl<H> Entry<H> {
    pub(crate) fn new(item: Item<H>) -> Self {
        Self {
            id: ControlId::next(),
            item,
        }
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn item(&self) -> &Item<H> {
        &self.item
    }
}

/// An ordered toolbar of controls and separators.
///
/// Membership is fixed once built, except for controls the responsive
/// relocator has registered as movable; only those can be taken out again.
pub struct ControlGroup<H> {
    name: String,
    movable: Vec<ControlId>,
    entries: Vec<Entry<H>>,
}

impl<H> ControlGroup<H> {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            movable: Vec::new(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_movable(&self, id: ControlId) -> bool {
        self.movable.contains(&id)
    }

    pub(crate) fn allow_relocation(&mut self, ids: &[ControlId]) {
        for id in ids {
            if !self.movable.contains(id) {
                self.movable.push(*id);
            }
        }
    }

    /// Append a control at the end of the group.
    pub fn insert(&mut self, item: Item<H>) -> ControlId {
        let entry = Entry::new(item);
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    pub fn separator(&mut self) -> ControlId {
        self.insert(Item::Separator)
    }

    pub(crate) fn insert_entry(&mut self, entry: Entry<H>) {
        self.entries.push(entry);
    }

    /// Detach a movable control. Everything else stays put.
    pub(crate) fn remove(&mut self, id: ControlId) -> Result<Entry<H>, ToolbarError> {
        let index = self.position(id).ok_or_else(|| self.unknown(id))?;
        if !self.is_movable(id) {
            return Err(ToolbarError::PinnedControl {
                id,
                group: self.name.clone(),
            });
        }
        debug!(group = %self.name, %id, "Removed control");
        Ok(self.entries.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry<H>> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.entries.iter().map(|entry| entry.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: ControlId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn get(&self, id: ControlId) -> Option<&Item<H>> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.item)
    }

    pub fn cyclic(&self, id: ControlId) -> Option<&CyclicControl<H>> {
        match self.get(id)? {
            Item::Cyclic(control) => Some(control),
            _ => None,
        }
    }

    /// Press the control `id`. Separators ignore presses.
    pub fn activate(&mut self, id: ControlId, host: &mut H) -> Result<(), ToolbarError> {
        let index = self.position(id).ok_or_else(|| self.unknown(id))?;
        match &mut self.entries[index].item {
            Item::Static(control) => control.activate(host),
            Item::Cyclic(control) => control.activate(host),
            Item::Separator => Ok(()),
        }
    }

    /// Popup menu labels for `id`; empty for controls without a menu.
    pub fn menu_labels(&self, id: ControlId) -> Vec<&str> {
        match self.get(id) {
            Some(Item::Static(control)) => control.menu_labels(),
            _ => Vec::new(),
        }
    }

    pub fn activate_menu_entry(
        &self,
        id: ControlId,
        index: usize,
        host: &mut H,
    ) -> Result<(), ToolbarError> {
        let Some(item) = self.get(id) else {
            return Err(self.unknown(id));
        };
        let outcome = match item {
            Item::Static(control) => control.activate_menu_entry(index, host),
            _ => None,
        };
        outcome.unwrap_or(Err(ToolbarError::UnknownMenuEntry { id, index }))
    }

    fn unknown(&self, id: ControlId) -> ToolbarError {
        ToolbarError::UnknownControl {
            id,
            group: self.name.clone(),
        }
    }
}
