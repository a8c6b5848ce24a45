use crate::models::Record;

/// Which record attribute to group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Status,
    Shift,
    Department,
}

/// Label-to-count mapping with keys kept in first-occurrence order.
///
/// Rebuilt from scratch on every aggregation pass, never updated
/// incrementally. Lookup is a linear scan; label sets stay in the single
/// digits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountMap {
    entries: Vec<(String, u64)>,
}

impl CountMap {
    pub fn bump(&mut self, label: &str) {
        match self.entries.iter_mut().find(|(key, _)| key == label) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((label.to_string(), 1)),
        }
    }

    pub fn get(&self, label: &str) -> u64 {
        self.entries
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }

    pub fn values(&self) -> Vec<u64> {
        self.entries.iter().map(|(_, count)| *count).collect()
    }
}

/// Count records per distinct value of the chosen attribute, in the order
/// the values first appear during the scan.
pub fn group_counts<'a, I>(records: I, by: GroupBy) -> CountMap
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts = CountMap::default();
    for record in records {
        let label = match by {
            GroupBy::Status => record.status.as_str(),
            GroupBy::Shift => record.shift.as_str(),
            GroupBy::Department => record.department.as_str(),
        };
        counts.bump(label);
    }
    counts
}
