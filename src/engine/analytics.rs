//! Analytics queries — pure reads over a graph snapshot.

use std::collections::HashSet;

use serde::Serialize;

use crate::graph::SocialGraph;
use crate::types::{GraphResult, Member};

/// One row of the common-friends matrix.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixRow {
    /// The member this row belongs to.
    pub member: Member,
    /// Common-neighbor counts against every member, aligned to the graph's
    /// member order. The diagonal entry is 0.
    pub counts: Vec<usize>,
}

/// A member together with its friend count, as produced by the
/// least-connected ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedMember {
    pub member: Member,
    pub count: usize,
}

/// The analytics engine supports all read-only queries.
///
/// Stateless: every query takes the graph it reads, and none of them mutate
/// it. Common-neighbor counts are computed against the distinct neighbor
/// relation, so duplicate edge ingestion never inflates them. Friend counts
/// deliberately use the raw bookkeeping lists instead (multiplicity policy,
/// matching what ingestion recorded).
pub struct Analytics;

impl Analytics {
    /// Create a new analytics engine.
    pub fn new() -> Self {
        Self
    }

    /// Number of distinct members adjacent to both `a` and `b`.
    ///
    /// Zero when `a == b` by definition rather than by intersection with
    /// itself. Fails with `MemberNotFound` if either member is unknown,
    /// including in the `a == b` case.
    pub fn common_neighbors(&self, graph: &SocialGraph, a: &str, b: &str) -> GraphResult<usize> {
        let set_a = graph.neighbor_set(a)?;
        let set_b = graph.neighbor_set(b)?;
        if a == b {
            return Ok(0);
        }
        Ok(set_a.intersection(&set_b).count())
    }

    /// The full n×n common-friends matrix, rows and columns in member order.
    ///
    /// Computed directly for every ordered pair; the relation is symmetric
    /// but the computation does not rely on it.
    pub fn common_friends_matrix(&self, graph: &SocialGraph) -> Vec<MatrixRow> {
        let members = graph.members();
        let sets: Vec<HashSet<&str>> = members
            .iter()
            .map(|m| graph.raw_friends(m.as_str()).iter().map(Member::as_str).collect())
            .collect();

        members
            .iter()
            .enumerate()
            .map(|(i, member)| {
                let counts = sets
                    .iter()
                    .enumerate()
                    .map(|(j, other)| {
                        if i == j {
                            0
                        } else {
                            sets[i].intersection(other).count()
                        }
                    })
                    .collect();
                MatrixRow {
                    member: member.clone(),
                    counts,
                }
            })
            .collect()
    }

    /// Recommend one friend for `member`: the distinct neighbor sharing the
    /// most common neighbors with `member`.
    ///
    /// Candidates are the distinct neighbors in first-append order, so a
    /// duplicated edge never repeats a candidate; ties go to the first
    /// maximum in that order. A self-loop is never a candidate. Yields
    /// `None` when the member has no neighbors.
    pub fn recommend_friend(
        &self,
        graph: &SocialGraph,
        member: &str,
    ) -> GraphResult<Option<Member>> {
        let mut best: Option<(Member, usize)> = None;
        for candidate in graph.neighbors(member)? {
            if candidate.as_str() == member {
                continue;
            }
            let shared = self.common_neighbors(graph, member, candidate.as_str())?;
            if best.as_ref().map_or(true, |(_, top)| shared > *top) {
                best = Some((candidate.clone(), shared));
            }
        }
        Ok(best.map(|(m, _)| m))
    }

    /// A recommendation for every member, in member order.
    pub fn recommendations(&self, graph: &SocialGraph) -> GraphResult<Vec<(Member, Option<Member>)>> {
        graph
            .members()
            .iter()
            .map(|m| Ok((m.clone(), self.recommend_friend(graph, m.as_str())?)))
            .collect()
    }

    /// Number of entries in a member's bookkeeping list.
    ///
    /// This is the raw multiplicity: a duplicated edge counts once per
    /// ingestion, not once per distinct neighbor.
    pub fn friend_count(&self, graph: &SocialGraph, member: &str) -> GraphResult<usize> {
        Ok(graph.friends_of(member)?.len())
    }

    /// All members ranked ascending by friend count, truncated to `limit`.
    ///
    /// Uses the same raw-multiplicity policy as
    /// [`friend_count`](Analytics::friend_count). The sort is stable, so
    /// ties keep first-seen member order. Empty when the graph has no
    /// members; a graph whose members all have zero friends still yields
    /// rows, each with count 0.
    pub fn least_connected(&self, graph: &SocialGraph, limit: usize) -> Vec<RankedMember> {
        let mut ranked: Vec<RankedMember> = graph
            .members()
            .iter()
            .map(|m| RankedMember {
                member: m.clone(),
                count: graph.raw_friends(m.as_str()).len(),
            })
            .collect();
        ranked.sort_by_key(|entry| entry.count);
        ranked.truncate(limit);
        ranked
    }
}

impl Default for Analytics {
    fn default() -> Self {
        Self::new()
    }
}
