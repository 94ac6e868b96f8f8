//! Selectable component model shared by the catalogue, status probes,
//! installer and TUI.

use bench_error::{SetupError, SetupResult};
use std::fmt;

/// Installation status as reported by the status probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComponentStatus {
    Installed,
    NotInstalled,
    /// Present but not usable yet (missing credentials or setup step).
    NeedsCredentials,
    #[default]
    Unknown,
}

impl ComponentStatus {
    /// Installed for the purposes of toggling: the component exists on disk,
    /// whether or not it still needs credentials.
    pub fn is_installed(&self) -> bool {
        matches!(
            self,
            ComponentStatus::Installed | ComponentStatus::NeedsCredentials
        )
    }
}

/// Pending operation for a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComponentAction {
    Install,
    Uninstall,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentCategory {
    Bench,
    Assistant,
    Tool,
}

/// One selectable entry in a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ComponentCategory,
    pub status: ComponentStatus,
    pub checked: bool,
    pub action: ComponentAction,
    pub is_separator: bool,
}

impl Entry {
    pub fn new(id: &str, name: &str, description: &str, category: ComponentCategory) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category,
            status: ComponentStatus::Unknown,
            checked: false,
            action: ComponentAction::None,
            is_separator: false,
        }
    }

    pub fn separator(id: &str, category: ComponentCategory) -> Self {
        Self {
            is_separator: true,
            ..Self::new(id, "", "", category)
        }
    }

    pub fn with_status(mut self, status: ComponentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_installed(&self) -> bool {
        self.status.is_installed()
    }
}

/// The three top-level groupings, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Benches,
    Assistants,
    Tools,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Benches, Section::Assistants, Section::Tools];

    pub fn index(&self) -> usize {
        match self {
            Section::Benches => 0,
            Section::Assistants => 1,
            Section::Tools => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Section> {
        Self::ALL.get(index).copied()
    }

    pub fn prev(&self) -> Option<Section> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn next(&self) -> Option<Section> {
        Self::from_index(self.index() + 1)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Benches => "DEV BENCHES",
            Section::Assistants => "AI ASSISTANTS",
            Section::Tools => "TOOLS",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Benches => write!(f, "Benches"),
            Section::Assistants => write!(f, "Assistants"),
            Section::Tools => write!(f, "Tools"),
        }
    }
}

/// Install/uninstall counts across all sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingChanges {
    pub selected: usize,
    pub installs: usize,
    pub uninstalls: usize,
}

/// The item collection: three ordered entry sequences.
///
/// Entries are never added, removed or reordered once built; the only
/// mutation is replacing a single entry in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    benches: Vec<Entry>,
    assistants: Vec<Entry>,
    tools: Vec<Entry>,
}

impl Sections {
    /// Build the collection, enforcing the layout contract: separators may
    /// only appear in Assistants and never as the first entry, so a section
    /// switch (which lands on index 0) always focuses a real entry.
    pub fn new(
        benches: Vec<Entry>,
        assistants: Vec<Entry>,
        tools: Vec<Entry>,
    ) -> SetupResult<Self> {
        for (section, entries) in [
            (Section::Benches, &benches),
            (Section::Tools, &tools),
        ] {
            if let Some(entry) = entries.iter().find(|e| e.is_separator) {
                return Err(SetupError::InvalidLayout(format!(
                    "separator {} is only allowed in Assistants, found in {}",
                    entry.id, section
                )));
            }
        }
        if let Some(first) = assistants.first() {
            if first.is_separator {
                return Err(SetupError::InvalidLayout(format!(
                    "separator {} cannot be the first Assistants entry",
                    first.id
                )));
            }
        }
        Ok(Self {
            benches,
            assistants,
            tools,
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self, section: Section) -> &[Entry] {
        match section {
            Section::Benches => &self.benches,
            Section::Assistants => &self.assistants,
            Section::Tools => &self.tools,
        }
    }

    pub fn len(&self, section: Section) -> usize {
        self.entries(section).len()
    }

    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.len(*s) == 0)
    }

    pub fn get(&self, section: Section, index: usize) -> Option<&Entry> {
        self.entries(section).get(index)
    }

    /// Replace the entry at `(section, index)`, leaving the rest of the
    /// section untouched. Returns the previous entry.
    pub fn replace(&mut self, section: Section, index: usize, entry: Entry) -> SetupResult<Entry> {
        let entries = match section {
            Section::Benches => &mut self.benches,
            Section::Assistants => &mut self.assistants,
            Section::Tools => &mut self.tools,
        };
        let len = entries.len();
        match entries.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, entry)),
            None => Err(SetupError::IndexOutOfRange {
                section: section.to_string(),
                index,
                len,
            }),
        }
    }

    /// All entries in section order, separators included.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &Entry)> {
        Section::ALL
            .into_iter()
            .flat_map(move |s| self.entries(s).iter().map(move |e| (s, e)))
    }

    /// Mutable access for the one-shot status probe pass. Layout is preserved
    /// because only entry fields can change through this iterator.
    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut Entry> {
        self.benches
            .iter_mut()
            .chain(self.assistants.iter_mut())
            .chain(self.tools.iter_mut())
    }

    pub fn pending_changes(&self) -> PendingChanges {
        let mut changes = PendingChanges::default();
        for (_, entry) in self.iter().filter(|(_, e)| !e.is_separator) {
            if entry.checked {
                changes.selected += 1;
            }
            match entry.action {
                ComponentAction::Install => changes.installs += 1,
                ComponentAction::Uninstall => changes.uninstalls += 1,
                ComponentAction::None => {}
            }
        }
        changes
    }
}
