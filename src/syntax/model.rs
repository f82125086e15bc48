//! The document model.
//!
//! A [`Model`] maps each [`SectionType`] to its ordered instances. Every
//! instance carries a stable [`Handle`]; its *position* is its index among
//! the instances of its type and is derived, never stored. Subsections and
//! comment records are filed under the `SubSection` and `Comments`
//! pseudo-types and point at their owner by handle, so removing a section
//! never requires re-indexing the records of other sections.

use indexmap::IndexMap;

use crate::base::SectionType;

/// Stable identity of an instance for the lifetime of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Handle(u32);

impl Handle {
    pub fn index(&self) -> u32 {
        self.0
    }
}

/// A `SubSection "name" ... EndSubSection` block
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct SubSectionRecord {
    pub owner_type: SectionType,
    pub owner: Handle,
    pub name: String,
    pub lines: Vec<String>,
}

/// What a comment record is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum CommentOwner {
    Section(Handle),
    SubSection(Handle),
    /// A commented-out section; written after the live sections of its type
    Detached,
}

/// `#`-prefixed lines kept out of live content
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct CommentRecord {
    pub owner_type: SectionType,
    pub owner: CommentOwner,
    pub lines: Vec<String>,
}

/// Content of one instance
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum Content {
    Section(Vec<String>),
    SubSection(SubSectionRecord),
    Comments(CommentRecord),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Instance {
    pub handle: Handle,
    pub content: Content,
}

impl Instance {
    /// Raw lines of a regular section
    pub fn lines(&self) -> Option<&[String]> {
        match &self.content {
            Content::Section(lines) => Some(lines),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Model {
    sections: IndexMap<SectionType, Vec<Instance>>,
    free_comments: Vec<String>,
    #[cfg_attr(feature = "interchange", serde(skip))]
    next_handle: u32,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> Handle {
        let handle = Handle(self.next_handle);
        self.next_handle += 1;
        handle
    }

    /// Whether the model holds no sections and no comments at all
    pub fn is_empty(&self) -> bool {
        self.free_comments.is_empty() && self.sections.values().all(Vec::is_empty)
    }

    // ── Free comments ───────────────────────────────────────────────

    pub fn free_comments(&self) -> &[String] {
        &self.free_comments
    }

    pub fn push_free_comment(&mut self, line: impl Into<String>) {
        self.free_comments.push(line.into());
    }

    // ── Sections ────────────────────────────────────────────────────

    /// Section types in first-seen order, pseudo-types excluded
    pub fn section_types(&self) -> impl Iterator<Item = SectionType> + '_ {
        self.sections.keys().copied().filter(|ty| !ty.is_pseudo())
    }

    pub fn instances(&self, section: SectionType) -> &[Instance] {
        self.sections.get(&section).map_or(&[], Vec::as_slice)
    }

    pub fn count(&self, section: SectionType) -> usize {
        self.instances(section).len()
    }

    pub fn handle_at(&self, section: SectionType, position: usize) -> Option<Handle> {
        self.instances(section).get(position).map(|i| i.handle)
    }

    pub fn position_of(&self, section: SectionType, handle: Handle) -> Option<usize> {
        self.instances(section).iter().position(|i| i.handle == handle)
    }

    pub fn lines(&self, section: SectionType, position: usize) -> Option<&[String]> {
        self.instances(section).get(position)?.lines()
    }

    pub fn lines_mut(&mut self, section: SectionType, position: usize) -> Option<&mut Vec<String>> {
        match &mut self.sections.get_mut(&section)?.get_mut(position)?.content {
            Content::Section(lines) => Some(lines),
            _ => None,
        }
    }

    pub fn lines_of_mut(&mut self, section: SectionType, handle: Handle) -> Option<&mut Vec<String>> {
        let position = self.position_of(section, handle)?;
        self.lines_mut(section, position)
    }

    /// Append a section instance; returns its handle
    pub fn push_section(&mut self, section: SectionType, lines: Vec<String>) -> Handle {
        debug_assert!(!section.is_pseudo(), "pseudo-types hold records, not sections");
        let handle = self.allocate();
        self.sections.entry(section).or_default().push(Instance {
            handle,
            content: Content::Section(lines),
        });
        handle
    }

    /// Remove a section together with its subsections and comment records
    pub fn remove_section(&mut self, section: SectionType, handle: Handle) -> bool {
        let Some(instances) = self.sections.get_mut(&section) else {
            return false;
        };
        let before = instances.len();
        instances.retain(|i| i.handle != handle);
        if instances.len() == before {
            return false;
        }

        let owned: Vec<Handle> = self.subsections_of(handle).map(|(h, _)| h).collect();
        for sub in owned {
            self.remove_subsection(sub);
        }
        self.retain_records(SectionType::Comments, |content| {
            !matches!(content, Content::Comments(c) if c.owner == CommentOwner::Section(handle))
        });
        true
    }

    fn retain_records(&mut self, pseudo: SectionType, mut keep: impl FnMut(&Content) -> bool) {
        if let Some(records) = self.sections.get_mut(&pseudo) {
            records.retain(|i| keep(&i.content));
        }
    }

    // ── Subsections ─────────────────────────────────────────────────

    pub fn subsections(&self) -> impl Iterator<Item = (Handle, &SubSectionRecord)> {
        self.instances(SectionType::SubSection)
            .iter()
            .filter_map(|i| match &i.content {
                Content::SubSection(record) => Some((i.handle, record)),
                _ => None,
            })
    }

    /// Subsections owned by one section, in creation order
    pub fn subsections_of(&self, owner: Handle) -> impl Iterator<Item = (Handle, &SubSectionRecord)> {
        self.subsections().filter(move |(_, r)| r.owner == owner)
    }

    /// The first subsection of `owner` named `name` (case-insensitive)
    pub fn find_subsection(&self, owner: Handle, name: &str) -> Option<Handle> {
        self.subsections_of(owner)
            .find(|(_, r)| r.name.eq_ignore_ascii_case(name))
            .map(|(h, _)| h)
    }

    pub fn subsection(&self, handle: Handle) -> Option<&SubSectionRecord> {
        self.subsections().find(|(h, _)| *h == handle).map(|(_, r)| r)
    }

    pub fn subsection_mut(&mut self, handle: Handle) -> Option<&mut SubSectionRecord> {
        self.sections
            .get_mut(&SectionType::SubSection)?
            .iter_mut()
            .find(|i| i.handle == handle)
            .and_then(|i| match &mut i.content {
                Content::SubSection(record) => Some(record),
                _ => None,
            })
    }

    pub fn push_subsection(
        &mut self,
        owner_type: SectionType,
        owner: Handle,
        name: impl Into<String>,
        lines: Vec<String>,
    ) -> Handle {
        let handle = self.allocate();
        let record = SubSectionRecord {
            owner_type,
            owner,
            name: name.into(),
            lines,
        };
        self.sections
            .entry(SectionType::SubSection)
            .or_default()
            .push(Instance {
                handle,
                content: Content::SubSection(record),
            });
        handle
    }

    /// Remove a subsection and its comment record
    pub fn remove_subsection(&mut self, handle: Handle) -> bool {
        let Some(records) = self.sections.get_mut(&SectionType::SubSection) else {
            return false;
        };
        let before = records.len();
        records.retain(|i| i.handle != handle);
        let removed = records.len() != before;
        self.retain_records(SectionType::Comments, |content| {
            !matches!(content, Content::Comments(c) if c.owner == CommentOwner::SubSection(handle))
        });
        removed
    }

    // ── Comment records ─────────────────────────────────────────────

    pub fn comment_records(&self) -> impl Iterator<Item = &CommentRecord> {
        self.instances(SectionType::Comments)
            .iter()
            .filter_map(|i| match &i.content {
                Content::Comments(record) => Some(record),
                _ => None,
            })
    }

    /// Comment lines attached to an owner (empty when there are none)
    pub fn comments_for(&self, owner: CommentOwner) -> &[String] {
        self.comment_records()
            .find(|r| r.owner == owner)
            .map_or(&[], |r| r.lines.as_slice())
    }

    /// Commented-out sections of one type
    pub fn detached_comments(&self, section: SectionType) -> impl Iterator<Item = &CommentRecord> {
        self.comment_records()
            .filter(move |r| r.owner == CommentOwner::Detached && r.owner_type == section)
    }

    /// Append a comment line to the record of a section or subsection
    pub fn push_comment(&mut self, owner_type: SectionType, owner: CommentOwner, line: impl Into<String>) {
        let line = line.into();
        let records = self.sections.entry(SectionType::Comments).or_default();
        let existing = records.iter_mut().find_map(|i| match &mut i.content {
            Content::Comments(record) if record.owner == owner && owner != CommentOwner::Detached => {
                Some(record)
            }
            _ => None,
        });
        if let Some(record) = existing {
            record.lines.push(line);
            return;
        }
        self.push_comment_record(CommentRecord {
            owner_type,
            owner,
            lines: vec![line],
        });
    }

    pub fn push_comment_record(&mut self, record: CommentRecord) -> Handle {
        let handle = self.allocate();
        self.sections
            .entry(SectionType::Comments)
            .or_default()
            .push(Instance {
                handle,
                content: Content::Comments(record),
            });
        handle
    }

    // ── Equality by position ────────────────────────────────────────

    /// Handle-free view of the model, ordered by type and position
    fn canonical(&self) -> Canonical {
        let mut sections: Vec<(SectionType, Vec<Vec<String>>)> = self
            .section_types()
            .filter(|ty| self.count(*ty) > 0)
            .map(|ty| {
                let lines = self
                    .instances(ty)
                    .iter()
                    .filter_map(|i| i.lines().map(<[String]>::to_vec))
                    .collect();
                (ty, lines)
            })
            .collect();
        sections.sort_by_key(|(ty, _)| *ty);

        let owner_position = |ty: SectionType, handle: Handle| self.position_of(ty, handle);

        let mut subsections: Vec<_> = self
            .subsections()
            .map(|(handle, r)| {
                (
                    r.owner_type,
                    owner_position(r.owner_type, r.owner),
                    r.name.clone(),
                    r.lines.clone(),
                    self.comments_for(CommentOwner::SubSection(handle)).to_vec(),
                )
            })
            .collect();
        subsections.sort();

        let mut comments: Vec<_> = self
            .comment_records()
            .filter_map(|r| match r.owner {
                CommentOwner::Section(h) => {
                    Some((r.owner_type, owner_position(r.owner_type, h), r.lines.clone()))
                }
                CommentOwner::Detached => Some((r.owner_type, None, r.lines.clone())),
                CommentOwner::SubSection(_) => None,
            })
            .filter(|(_, _, lines)| !lines.is_empty())
            .collect();
        comments.sort();

        Canonical {
            free_comments: self.free_comments.clone(),
            sections,
            subsections,
            comments,
        }
    }
}

type CanonicalSubSection = (SectionType, Option<usize>, String, Vec<String>, Vec<String>);

#[derive(PartialEq, Eq)]
struct Canonical {
    free_comments: Vec<String>,
    sections: Vec<(SectionType, Vec<Vec<String>>)>,
    subsections: Vec<CanonicalSubSection>,
    comments: Vec<(SectionType, Option<usize>, Vec<String>)>,
}

/// Two models are equal when every type holds the same instances at the same
/// positions with the same subsections and comments; handles are ignored.
impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Model {}
