//! Reporting hierarchy built from roster rows.
//!
//! Supervisors live in an arena of [`StaffGroup`]s addressed by [`GroupId`],
//! in first-appearance order, with a string index on the side. After all rows
//! are consumed a chain-walk pass fills in each group's `indirect_total`.
use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};

use crate::core::params::ChartParams;
use crate::error::{Error, Result};
use crate::types::{PersonKey, Row};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub usize);

/// One person's line in their supervisor's table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub title: String,
    /// Hire year, empty when the hire date carries no 4-digit run
    pub year: String,
    pub key: PersonKey,
}

/// Everyone reporting directly to one supervisor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffGroup {
    pub key: String,
    /// Input order, never reordered
    pub members: Vec<Member>,
    pub direct_count: usize,
    /// Own direct count plus the direct counts of every group beneath
    pub indirect_total: usize,
}

impl StaffGroup {
    fn new(key: String) -> Self {
        Self {
            key,
            members: Vec::new(),
            direct_count: 0,
            indirect_total: 0,
        }
    }

    /// True when no other supervisor reports into this group.
    pub fn is_leaf(&self) -> bool {
        self.indirect_total == self.direct_count
    }
}

#[derive(Debug, Clone)]
pub struct Hierarchy {
    groups: Vec<StaffGroup>,
    index: HashMap<String, GroupId>,
    reports_to: HashMap<String, GroupId>,
    titles: HashSet<String>,
    people: usize,
    root_key: String,
}

impl Hierarchy {
    /// Accumulate rows into staff groups, then compute indirect totals.
    pub fn from_rows(rows: &[Row], params: &ChartParams) -> Result<Self> {
        let header = PersonKey::normalize(&params.header_sentinel);
        let excluded = params.excluded_keys();

        let mut hierarchy = Hierarchy {
            groups: Vec::new(),
            index: HashMap::new(),
            reports_to: HashMap::new(),
            titles: HashSet::new(),
            people: 0,
            root_key: params.root_key.clone(),
        };

        for (i, row) in rows.iter().enumerate() {
            let row_number = i + 1;
            let person = PersonKey::normalize(&row.name);
            if person == header || excluded.contains(&person) {
                debug!("Skipping row {}: {}", row_number, row.name);
                continue;
            }
            if person.is_empty() {
                return Err(Error::UnnamedPerson { row: row_number });
            }

            let supervisor = PersonKey::normalize(&row.supervisor);
            let supervisor_key = if supervisor == person || supervisor.is_empty() {
                hierarchy.root_key.clone()
            } else {
                supervisor.as_str().to_string()
            };

            hierarchy.titles.insert(row.title.clone());
            let id = hierarchy.group_id_or_insert(supervisor_key);
            let group = &mut hierarchy.groups[id.0];
            group.members.push(Member {
                name: row.name.clone(),
                title: row.title.clone(),
                year: row.hire_year().unwrap_or_default().to_string(),
                key: person.clone(),
            });
            group.direct_count += 1;

            if let Some(previous) = hierarchy.reports_to.insert(person.as_str().to_string(), id) {
                warn!(
                    "Person key {} appears more than once (row {}); reporting to {} instead of {}",
                    person, row_number, hierarchy.groups[id.0].key, hierarchy.groups[previous.0].key
                );
            }
            hierarchy.people += 1;
        }

        hierarchy.accumulate_totals()?;
        info!(
            "Built hierarchy: {} people, {} supervisors, {} distinct titles",
            hierarchy.people,
            hierarchy.groups.len(),
            hierarchy.titles.len()
        );
        Ok(hierarchy)
    }

    fn group_id_or_insert(&mut self, key: String) -> GroupId {
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = GroupId(self.groups.len());
        debug!("New supervisor group: {}", key);
        self.index.insert(key.clone(), id);
        self.groups.push(StaffGroup::new(key));
        id
    }

    /// Walk every group's chain up to its root, adding the group's direct count
    /// to each ancestor. A walk longer than the number of groups is a cycle.
    fn accumulate_totals(&mut self) -> Result<()> {
        let parents: Vec<Option<GroupId>> = self
            .groups
            .iter()
            .map(|g| self.reports_to.get(&g.key).copied())
            .collect();

        for group in &mut self.groups {
            group.indirect_total = group.direct_count;
        }

        let limit = self.groups.len();
        for start in 0..self.groups.len() {
            let count = self.groups[start].direct_count;
            let mut current = parents[start];
            let mut hops = 0;
            while let Some(GroupId(ancestor)) = current {
                hops += 1;
                if hops > limit {
                    return Err(Error::ReportingCycle {
                        key: self.groups[start].key.clone(),
                    });
                }
                self.groups[ancestor].indirect_total += count;
                current = parents[ancestor];
            }
        }
        Ok(())
    }

    /// Groups in first-appearance order
    pub fn groups(&self) -> &[StaffGroup] {
        &self.groups
    }

    pub fn group(&self, key: &str) -> Option<&StaffGroup> {
        self.index.get(key).map(|id| &self.groups[id.0])
    }

    /// The group a person reports into
    pub fn supervisor_of(&self, person: &str) -> Option<&StaffGroup> {
        self.reports_to.get(person).map(|id| &self.groups[id.0])
    }

    /// Supervisor → group pairs for every group that is not a root, in group order.
    pub fn edges(&self) -> impl Iterator<Item = (&StaffGroup, &StaffGroup)> + '_ {
        self.groups
            .iter()
            .filter_map(|g| self.supervisor_of(&g.key).map(|sup| (sup, g)))
    }

    pub fn root_key(&self) -> &str {
        &self.root_key
    }

    pub fn people(&self) -> usize {
        self.people
    }

    pub fn supervisor_count(&self) -> usize {
        self.groups.len()
    }

    pub fn distinct_titles(&self) -> usize {
        self.titles.len()
    }

    /// People per supervisor; 0.0 for an empty roster
    pub fn average_span(&self) -> f64 {
        if self.groups.is_empty() {
            0.0
        } else {
            self.people as f64 / self.groups.len() as f64
        }
    }
}
