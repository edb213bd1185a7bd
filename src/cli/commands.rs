//! CLI command implementations.

use std::path::Path;

use crate::engine::{Analytics, MatrixRow, RankedMember};
use crate::graph::SocialGraph;
use crate::ingest::{self, IngestReport};
use crate::types::{GraphResult, Member};

fn load(path: &Path) -> GraphResult<(SocialGraph, IngestReport)> {
    let mut graph = SocialGraph::new();
    let report = ingest::load_file(path, &mut graph)?;
    Ok((graph, report))
}

/// Print every member's neighbor list, duplicates as stored.
pub fn cmd_show(path: &Path, json: bool) -> GraphResult<()> {
    let (graph, _) = load(path)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&network_json(&graph)?).unwrap_or_default()
        );
    } else {
        print_network(&graph)?;
    }
    Ok(())
}

/// Print the all-pairs common-friends matrix.
pub fn cmd_matrix(path: &Path, json: bool) -> GraphResult<()> {
    let (graph, _) = load(path)?;
    let rows = Analytics::new().common_friends_matrix(&graph);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).unwrap_or_default()
        );
    } else {
        print_matrix(&rows);
    }
    Ok(())
}

/// Print a friend recommendation for one member, or for everyone.
pub fn cmd_recommend(path: &Path, member: Option<&str>, json: bool) -> GraphResult<()> {
    let (graph, _) = load(path)?;
    let engine = Analytics::new();
    let pairs: Vec<(Member, Option<Member>)> = match member {
        Some(m) => vec![(Member::new(m), engine.recommend_friend(&graph, m)?)],
        None => engine.recommendations(&graph)?,
    };
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&recommendations_json(&pairs)).unwrap_or_default()
        );
    } else {
        print_recommendations(&pairs);
    }
    Ok(())
}

/// Print one member's friend count.
pub fn cmd_friends(path: &Path, member: &str, json: bool) -> GraphResult<()> {
    let (graph, _) = load(path)?;
    let count = Analytics::new().friend_count(&graph, member)?;
    if json {
        let info = serde_json::json!({ "member": member, "friends": count });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("{} has {} friends.", member, count);
    }
    Ok(())
}

/// Print the members with the fewest friends.
pub fn cmd_least(path: &Path, limit: usize, json: bool) -> GraphResult<()> {
    let (graph, _) = load(path)?;
    let ranked = Analytics::new().least_connected(&graph, limit);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&least_json(&graph, &ranked)).unwrap_or_default()
        );
    } else {
        print_least(&graph, &ranked);
    }
    Ok(())
}

/// Run every query in sequence over one file.
pub fn cmd_report(path: &Path, limit: usize, json: bool) -> GraphResult<()> {
    let (graph, report) = load(path)?;
    let engine = Analytics::new();
    let rows = engine.common_friends_matrix(&graph);
    let pairs = engine.recommendations(&graph)?;
    let ranked = engine.least_connected(&graph, limit);

    if json {
        let out = serde_json::json!({
            "ingest": report,
            "network": network_json(&graph)?,
            "common_friends": rows,
            "recommendations": recommendations_json(&pairs),
            "least_connected": least_json(&graph, &ranked),
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!(
            "Ingested {} edges ({} declared, {} malformed lines)",
            report.edges_added,
            report.declared,
            report.malformed.len()
        );
        println!();
        println!("Social network:");
        print_network(&graph)?;
        println!();
        println!("Common friends:");
        print_matrix(&rows);
        println!();
        println!("Recommended friends:");
        print_recommendations(&pairs);
        println!();
        print_least(&graph, &ranked);
    }
    Ok(())
}

fn print_network(graph: &SocialGraph) -> GraphResult<()> {
    for member in graph.members() {
        let friends: Vec<&str> = graph
            .friends_of(member.as_str())?
            .iter()
            .map(Member::as_str)
            .collect();
        println!("{} -> {}", member, friends.join(", "));
    }
    Ok(())
}

fn print_matrix(rows: &[MatrixRow]) {
    for row in rows {
        let counts: Vec<String> = row.counts.iter().map(usize::to_string).collect();
        println!("{} -> [{}]", row.member, counts.join(", "));
    }
}

fn print_recommendations(pairs: &[(Member, Option<Member>)]) {
    for (member, recommended) in pairs {
        match recommended {
            Some(friend) => println!("{}'s recommended friend is {}", member, friend),
            None => println!("{} has no friends to recommend from", member),
        }
    }
}

fn print_least(graph: &SocialGraph, ranked: &[RankedMember]) {
    if graph.is_empty() {
        println!("No members in the network.");
    } else if !graph.has_edges() {
        println!("No friends in the network.");
    } else {
        println!("Members with least friends:");
        for entry in ranked {
            println!("{} has {} friends.", entry.member, entry.count);
        }
    }
}

fn network_json(graph: &SocialGraph) -> GraphResult<serde_json::Value> {
    let mut listing = Vec::new();
    for member in graph.members() {
        listing.push(serde_json::json!({
            "member": member,
            "friends": graph.friends_of(member.as_str())?,
        }));
    }
    Ok(serde_json::Value::Array(listing))
}

fn recommendations_json(pairs: &[(Member, Option<Member>)]) -> serde_json::Value {
    let listing: Vec<serde_json::Value> = pairs
        .iter()
        .map(|(member, recommended)| {
            serde_json::json!({ "member": member, "recommended": recommended })
        })
        .collect();
    serde_json::Value::Array(listing)
}

fn least_json(graph: &SocialGraph, ranked: &[RankedMember]) -> serde_json::Value {
    // "no members" and "members but no friends" stay distinguishable here.
    serde_json::json!({
        "members": graph.member_count(),
        "has_edges": graph.has_edges(),
        "ranking": ranked,
    })
}
