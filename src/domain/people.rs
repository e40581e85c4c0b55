//! Hierarchy builder: flat people listing to hierarchy document.

use std::collections::{BTreeMap, HashMap, HashSet};

use itertools::Itertools;
use serde::Deserialize;
use tracing::{instrument, warn};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::hierarchy::{HierarchyNode, NodeText};

/// Flat person entry as it appears in the people listing.
///
/// `sector` and `shift` are accepted as part of the listing format but do
/// not surface in the generated document.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PersonRecord {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub shift: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Names of this person's supervisors (may be several).
    #[serde(default)]
    pub supervisors: Vec<String>,
}

/// Constructs a hierarchy document from a flat people listing.
///
/// Supervisor links are resolved by exact (trimmed) name; links to unknown
/// names are skipped. Subordinates are ordered by name. A visited set
/// guarantees each person appears at most once in the output, which also
/// renders multi-supervisor structures and accidental cycles as trees:
/// the first traversal wins.
pub struct HierarchyBuilder {
    people: BTreeMap<String, PersonRecord>,
    subordinates: HashMap<String, Vec<String>>,
    visited: HashSet<String>,
}

impl HierarchyBuilder {
    pub fn new(records: Vec<PersonRecord>) -> Self {
        let mut people: BTreeMap<String, PersonRecord> = BTreeMap::new();
        for mut record in records {
            record.name = record.name.trim().to_string();
            if record.name.is_empty() {
                warn!("skipping person record without a name");
                continue;
            }
            let name = record.name.clone();
            if people.insert(name.clone(), record).is_some() {
                warn!(name = %name, "duplicate person record, last one wins");
            }
        }

        let mut subordinates: HashMap<String, Vec<String>> = HashMap::new();
        for person in people.values() {
            for supervisor in &person.supervisors {
                let supervisor = supervisor.trim();
                if supervisor.is_empty() {
                    continue;
                }
                if !people.contains_key(supervisor) {
                    warn!(
                        person = %person.name,
                        supervisor,
                        "supervisor not in listing, link skipped"
                    );
                    continue;
                }
                subordinates
                    .entry(supervisor.to_string())
                    .or_default()
                    .push(person.name.clone());
            }
        }
        // Deterministic output: subordinates ordered by name
        for children in subordinates.values_mut() {
            *children = children.iter().cloned().sorted().dedup().collect();
        }

        Self {
            people,
            subordinates,
            visited: HashSet::new(),
        }
    }

    /// People without any resolvable supervisor, in name order.
    pub fn root_candidates(&self) -> Vec<&str> {
        self.people
            .values()
            .filter(|p| {
                !p.supervisors
                    .iter()
                    .any(|s| self.people.contains_key(s.trim()))
            })
            .map(|p| p.name.as_str())
            .collect()
    }

    /// Build the tree rooted at the named person.
    #[instrument(level = "debug", skip(self))]
    pub fn build(&mut self, root_name: &str) -> DomainResult<HierarchyNode> {
        self.visited.clear();
        let root_name = root_name.trim();
        if !self.people.contains_key(root_name) {
            return Err(DomainError::RootNotFound(root_name.to_string()));
        }
        self.build_node(root_name)
            .ok_or_else(|| DomainError::RootNotFound(root_name.to_string()))
    }

    /// Build the tree rooted at the unique person without supervisors.
    pub fn build_auto(&mut self) -> DomainResult<HierarchyNode> {
        let candidates = self.root_candidates();
        match candidates.as_slice() {
            [] => Err(DomainError::NoRootCandidate),
            [single] => {
                let root = single.to_string();
                self.build(&root)
            }
            many => Err(DomainError::AmbiguousRoot(many.join(", "))),
        }
    }

    fn build_node(&mut self, name: &str) -> Option<HierarchyNode> {
        // Duplicate guard: the first traversal of a person wins
        if !self.visited.insert(name.to_string()) {
            return None;
        }
        let person = self.people.get(name)?.clone();

        let child_names = self.subordinates.get(name).cloned().unwrap_or_default();
        let children = child_names
            .iter()
            .filter_map(|child| self.build_node(child))
            .collect();

        Some(HierarchyNode {
            name: None,
            text: Some(NodeText {
                name: Some(person.name),
                title: Some(person.title.unwrap_or_default()),
                image: person.image,
                extra: Default::default(),
            }),
            children,
            extra: Default::default(),
        })
    }
}

/// Wrap a tree under an umbrella root node.
pub fn wrap_root(tree: HierarchyNode, name: &str, title: Option<&str>) -> HierarchyNode {
    HierarchyNode {
        name: None,
        text: Some(NodeText {
            name: Some(name.to_string()),
            title: title.map(str::to_string),
            image: None,
            extra: Default::default(),
        }),
        children: vec![tree],
        extra: Default::default(),
    }
}
