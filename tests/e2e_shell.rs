//! End-to-end tests for the interactive shell.
//!
//! Each test feeds a scripted session through `Shell` and checks the
//! printed transcript.

use social_graph::Network;
use social_graph::shell::{SamplePolicy, Shell, ShellConfig};

// ============================================================================
// Helper: run a scripted session and return (transcript, network).
// ============================================================================

fn session(config: ShellConfig, lines: &[&str]) -> (String, Network) {
    let mut script = lines.join("\n");
    script.push('\n');

    let network = Network::new();
    let mut shell = Shell::new(network.clone(), script.as_bytes(), Vec::new(), config);
    shell.run().unwrap();
    let out = String::from_utf8(shell.into_output()).unwrap();
    (out, network)
}

fn empty() -> ShellConfig {
    ShellConfig { sample: SamplePolicy::Skip, json_stats: false }
}

fn sample() -> ShellConfig {
    ShellConfig { sample: SamplePolicy::Load, json_stats: false }
}

// ============================================================================
// 1. Building a network by hand
// ============================================================================

#[test]
fn test_add_users_and_friendship() {
    let (out, network) = session(
        empty(),
        &[
            "1", "  Alice ",
            "1", "alice",
            "1", "   ",
            "1", "bob",
            "2", "ALICE", "bob", "4",
            "2", "alice", "bob", "1",
            "2", "alice", "alice", "1",
            "2", "alice", "zoe", "1",
            "2", "alice", "bob", "zero",
            "3", "bob",
            "0",
        ],
    );

    assert!(out.contains("User 'alice' added successfully!"));
    assert!(out.contains("Error: User already exists!"));
    assert!(out.contains("Error: Invalid username!"));
    assert!(out.contains("Friendship created between 'alice' and 'bob' with weight 4!"));
    assert!(out.contains("Error: Users are already friends!"));
    assert!(out.contains("Error: A user cannot be friends with themselves!"));
    assert!(out.contains("Error: One or both users do not exist!"));
    assert!(out.contains("Error: Weight must be a positive integer!"));
    assert!(out.contains("'bob' is friends with: alice (4)"));
    assert!(out.ends_with("Thank you for using Social Network Graph Explorer!\n"));

    assert_eq!(network.users().len(), 2);
    assert_eq!(network.weight_of("alice", "bob").map(|w| w.get()), Some(4));
}

// ============================================================================
// 2. Menu input handling
// ============================================================================

#[test]
fn test_bad_menu_input_keeps_running() {
    let (out, _) = session(empty(), &["abc", "42", "7", "0"]);
    assert!(out.contains("Please enter a valid number."));
    assert!(out.contains("Invalid option. Please try again."));
    assert!(out.contains("No users in the network yet."));
    assert!(out.ends_with("Thank you for using Social Network Graph Explorer!\n"));
}

#[test]
fn test_end_of_input_mid_prompt() {
    let (out, _) = session(empty(), &["2", "alice"]);
    assert!(out.contains("Enter second user: "));
    assert!(out.ends_with("Thank you for using Social Network Graph Explorer!\n"));
}

#[test]
fn test_sample_prompt() {
    let ask = ShellConfig { sample: SamplePolicy::Ask, json_stats: false };
    let (out, network) = session(ask.clone(), &["YES", "0"]);
    assert!(out.contains("Would you like to load sample data? (y/n): "));
    assert!(out.contains("Sample data loaded successfully!"));
    assert_eq!(network.users().len(), 10);

    let (_, network) = session(ask, &["n", "0"]);
    assert!(network.users().is_empty());
}

// ============================================================================
// 3. Queries over the sample network
// ============================================================================

#[test]
fn test_connection_checks() {
    let (out, _) = session(
        sample(),
        &["4", "alice", "bob", "4", "Charlie", "FRANK", "4", "alice", "nobody", "0"],
    );
    assert!(out.contains("'alice' and 'bob' are directly connected (friends)."));
    assert!(out.contains("'charlie' and 'frank' are connected through mutual friends."));
    assert!(out.contains("Error: One or both users do not exist!"));
}

#[test]
fn test_mutuals_and_suggestions() {
    let (out, _) = session(
        sample(),
        &["5", "bob", "heidi", "5", "diana", "judy", "6", "alice", "0"],
    );
    assert!(out.contains("Mutual friends of 'bob' and 'heidi': alice, grace"));
    assert!(out.contains("'diana' and 'judy' have no mutual friends."));
    assert!(out.contains("Friend suggestions for 'alice': diana, eve, grace, ivan"));
}

#[test]
fn test_paths() {
    let (out, _) = session(
        sample(),
        &["9", "charlie", "ivan", "10", "charlie", "ivan", "9", "eve", "eve", "0"],
    );
    assert!(out.contains("Shortest path from 'charlie' to 'ivan':\ncharlie -> alice -> heidi -> ivan\n"));
    assert!(out.contains("Distance: 3 degrees of separation"));
    assert!(out.contains(
        "Lightest path from 'charlie' to 'ivan':\ncharlie -> alice -> bob -> grace -> heidi -> ivan\n"
    ));
    assert!(out.contains("Total weight: 11"));
    assert!(out.contains("Same user provided!"));
}

#[test]
fn test_no_path_between_components() {
    let (out, _) = session(
        empty(),
        &["1", "a", "1", "b", "9", "a", "b", "10", "a", "b", "0"],
    );
    assert_eq!(out.matches("No connection path found between 'a' and 'b'.").count(), 2);
}

// ============================================================================
// 4. Listing and statistics
// ============================================================================

#[test]
fn test_show_all_users_and_stats() {
    let (out, _) = session(sample(), &["7", "8", "0"]);
    assert!(out.contains("All users in the network:\n- alice (3 friends)\n- bob (3 friends)\n"));
    assert!(out.contains("- judy (2 friends)\n"));
    assert!(out.contains("Total users: 10"));
    assert!(out.contains("Total friendships: 12"));
    assert!(out.contains("Average friends per user: 2.40"));
    assert!(out.contains("Total edge weight: 31"));
    assert!(out.contains("Average edge weight: 2.58"));
    assert!(out.contains("Most popular user(s): alice, bob, grace, heidi (3 friends)"));
}

#[test]
fn test_json_stats() {
    let config = ShellConfig { sample: SamplePolicy::Load, json_stats: true };
    let (out, _) = session(config, &["8", "0"]);

    let start = out.find('{').unwrap();
    let end = out.rfind('}').unwrap();
    let stats: serde_json::Value = serde_json::from_str(&out[start..=end]).unwrap();
    assert_eq!(stats["user_count"], 10);
    assert_eq!(stats["total_weight"], 31);
    assert_eq!(stats["most_popular"]["friends"], 3);
    assert_eq!(stats["ranking"][0][0], "alice");
}
