use std::collections::HashMap;

use feedjoin_shared_kernel::Record;
use serde_json::Value;

use crate::relation::Relation;

/// Children grouped by the canonical value of their foreign key.
///
/// Built once per join and dropped with it. Within a group, children keep
/// the order in which they were fetched.
#[derive(Debug, Clone, Default)]
pub struct GroupingIndex {
    groups: HashMap<String, Vec<Record>>,
    unkeyed: usize,
}

impl GroupingIndex {
    pub fn build(children: Vec<Record>, foreign_key: &str) -> Self {
        let mut groups: HashMap<String, Vec<Record>> = HashMap::new();
        let mut unkeyed = 0;
        for child in children {
            match child.key_of(foreign_key) {
                Some(key) => groups.entry(key).or_default().push(child),
                None => unkeyed += 1,
            }
        }
        Self { groups, unkeyed }
    }

    pub fn children_of(&self, key: &str) -> &[Record] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of distinct foreign-key values.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Children dropped because their foreign key was missing, an array or an object.
    pub fn unkeyed(&self) -> usize {
        self.unkeyed
    }
}

/// Attaches to every parent the children that reference its `id`.
///
/// Output follows parent order; each parent gets `relation.attach_as` set to
/// an array (empty when nothing matches). Orphaned children are dropped.
pub fn join(parents: Vec<Record>, children: Vec<Record>, relation: &Relation) -> Vec<Record> {
    let index = GroupingIndex::build(children, relation.foreign_key);
    parents
        .into_iter()
        .map(|parent| {
            let matched = parent
                .key_of("id")
                .map(|id| index.children_of(&id).iter().cloned().map(Value::from).collect())
                .unwrap_or_default();
            parent.with_field(relation.attach_as, Value::Array(matched))
        })
        .collect()
}
