//! Core graph structure — insertion-ordered members + symmetric neighbor lists.

use std::collections::{HashMap, HashSet};

use crate::types::{GraphError, GraphResult, Member};

/// The in-memory undirected social graph.
///
/// Members are kept in first-seen order, which fixes the iteration order of
/// every query built on top of the store. Each member's neighbor list is a
/// bookkeeping sequence: adding the same edge twice appends twice, and
/// [`friends_of`](SocialGraph::friends_of) exposes the list exactly as
/// stored. Queries that need the underlying edge relation
/// ([`neighbors`](SocialGraph::neighbors), the common-neighbor math in the
/// analytics engine) work on the distinct neighbors in first-append order.
pub struct SocialGraph {
    /// All members in first-seen order.
    members: Vec<Member>,
    /// Membership set for O(1) lookups.
    present: HashSet<Member>,
    /// Bookkeeping neighbor lists, duplicates preserved.
    friends: HashMap<Member, Vec<Member>>,
}

impl SocialGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            present: HashSet::new(),
            friends: HashMap::new(),
        }
    }

    /// Number of members.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Total neighbor-list entries across all members. Every ingested edge
    /// contributes two entries.
    pub fn entry_count(&self) -> usize {
        self.friends.values().map(Vec::len).sum()
    }

    /// True when the graph has no members at all.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// True when at least one member has a neighbor.
    pub fn has_edges(&self) -> bool {
        self.friends.values().any(|list| !list.is_empty())
    }

    /// Whether a token names a known member.
    pub fn contains(&self, member: &str) -> bool {
        self.present.contains(member)
    }

    /// All members in first-seen order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// The raw bookkeeping list for a member, duplicates as stored.
    pub fn friends_of(&self, member: &str) -> GraphResult<&[Member]> {
        self.friends
            .get(member)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::MemberNotFound(Member::new(member)))
    }

    /// Like `friends_of`, but yields an empty slice for unknown members.
    /// Used by the analytics engine when iterating members it already knows
    /// are present.
    pub(crate) fn raw_friends(&self, member: &str) -> &[Member] {
        self.friends.get(member).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct neighbors of a member in first-append order.
    pub fn neighbors(&self, member: &str) -> GraphResult<Vec<&Member>> {
        let list = self.friends_of(member)?;
        let mut seen: HashSet<&str> = HashSet::new();
        Ok(list.iter().filter(|m| seen.insert(m.as_str())).collect())
    }

    /// Distinct neighbors of a member as a set, for intersection math.
    pub(crate) fn neighbor_set(&self, member: &str) -> GraphResult<HashSet<&str>> {
        Ok(self.friends_of(member)?.iter().map(Member::as_str).collect())
    }

    /// Add an undirected edge, registering unseen endpoints in first-seen
    /// order. The appends are unconditional: a repeated edge shows up twice
    /// in both bookkeeping lists, and a self-loop contributes both symmetric
    /// entries to the same list.
    pub fn add_edge(&mut self, u: impl Into<Member>, v: impl Into<Member>) {
        let u = u.into();
        let v = v.into();
        self.ensure_member(&u);
        self.ensure_member(&v);
        if let Some(list) = self.friends.get_mut(&u) {
            list.push(v.clone());
        }
        if let Some(list) = self.friends.get_mut(&v) {
            list.push(u);
        }
    }

    /// Remove one occurrence of the edge from both endpoints' lists.
    ///
    /// Fails with [`GraphError::EdgeNotFound`] if either side has no
    /// occurrence to remove, in which case the graph is left unchanged.
    /// Members are never removed, only list entries.
    pub fn remove_edge(&mut self, u: &str, v: &str) -> GraphResult<()> {
        let missing = || GraphError::EdgeNotFound {
            a: Member::new(u),
            b: Member::new(v),
        };

        if u == v {
            // A self-loop occupies two entries in the same list.
            let list = self.friends.get_mut(u).ok_or_else(missing)?;
            let hits: Vec<usize> = list
                .iter()
                .enumerate()
                .filter(|(_, m)| m.as_str() == v)
                .map(|(i, _)| i)
                .collect();
            if hits.len() < 2 {
                return Err(missing());
            }
            list.remove(hits[1]);
            list.remove(hits[0]);
            return Ok(());
        }

        let pos_u = self
            .friends
            .get(u)
            .and_then(|list| list.iter().position(|m| m.as_str() == v));
        let pos_v = self
            .friends
            .get(v)
            .and_then(|list| list.iter().position(|m| m.as_str() == u));

        match (pos_u, pos_v) {
            (Some(i), Some(j)) => {
                if let Some(list) = self.friends.get_mut(u) {
                    list.remove(i);
                }
                if let Some(list) = self.friends.get_mut(v) {
                    list.remove(j);
                }
                Ok(())
            }
            _ => Err(missing()),
        }
    }

    fn ensure_member(&mut self, member: &Member) {
        if self.present.insert(member.clone()) {
            self.members.push(member.clone());
            self.friends.insert(member.clone(), Vec::new());
        }
    }
}

impl Default for SocialGraph {
    fn default() -> Self {
        Self::new()
    }
}
