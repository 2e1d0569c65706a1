use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Fully-qualified dotted name of a loadable unit (e.g. `com.example.LoginTest`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Build an identifier from a namespace prefix and a simple name.
    /// An empty prefix yields the bare name.
    pub fn join(prefix: &str, name: &str) -> Self {
        if prefix.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{prefix}.{name}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last dotted segment.
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Namespace part (everything before the last dot), empty for top-level units.
    pub fn namespace(&self) -> &str {
        self.0.rfind('.').map(|idx| &self.0[..idx]).unwrap_or("")
    }

    /// Whether this identifier lives in `namespace` or one of its sub-namespaces.
    ///
    /// Matching is done on segment boundaries: `com.example.Foo` is within
    /// `com.example` but `com.examples.Foo` is not. Every identifier is within
    /// the empty namespace.
    pub fn is_within(&self, namespace: &str) -> bool {
        if namespace.is_empty() {
            return true;
        }
        match self.0.strip_prefix(namespace) {
            Some(rest) => rest.starts_with('.'),
            None => false,
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Opaque marker attached to a unit or member. Only presence is consulted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

pub type TagSet = BTreeSet<Tag>;

/// Tag inspection over anything that carries a tag set.
pub trait Tagged {
    fn tags(&self) -> &TagSet;

    fn has_tag(&self, tag: &Tag) -> bool {
        self.tags().contains(tag)
    }
}

/// Named sub-element of a unit (e.g. one test method).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    #[serde(default)]
    pub tags: TagSet,
    /// Identifier of the owning unit.
    #[serde(skip)]
    pub owner: Option<ComponentId>,
}

impl Member {
    pub fn new(name: impl Into<String>, tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            name: name.into(),
            tags: tags.into_iter().collect(),
            owner: None,
        }
    }
}

impl Tagged for Member {
    fn tags(&self) -> &TagSet {
        &self.tags
    }
}

/// Loaded, inspectable form of a [`ComponentId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: ComponentId,
    #[serde(default)]
    pub tags: TagSet,
    /// The runner this unit is declared to be executed by, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runner: Option<Tag>,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Unit {
    pub fn new(id: impl Into<ComponentId>) -> Self {
        Self {
            id: id.into(),
            tags: TagSet::new(),
            runner: None,
            members: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_runner(mut self, runner: impl Into<Tag>) -> Self {
        self.runner = Some(runner.into());
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Members with their `owner` set to this unit.
    pub fn members(&self) -> impl Iterator<Item = Member> + '_ {
        self.members.iter().map(|m| Member {
            owner: Some(self.id.clone()),
            ..m.clone()
        })
    }
}

impl Tagged for Unit {
    fn tags(&self) -> &TagSet {
        &self.tags
    }
}
