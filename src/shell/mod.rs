//! Interactive menu shell.
//!
//! A thin I/O layer over [`Network`]: prompts for names, normalizes them for
//! display, and prints each query's result. Generic over its input and
//! output so it can be driven from tests.

mod config;

pub use config::{SamplePolicy, ShellConfig};

use std::io::{BufRead, Write};

use crate::model::{Path, Weight};
use crate::storage::{ConnectOutcome, RegisterOutcome, Rejection};
use crate::{Error, Identity, Network, Result};

const MENU: &str = "\
Social Network Graph Explorer Menu:
1. Add user
2. Add friendship
3. Show user's friends
4. Check if users are connected
5. Find mutual friends
6. Get friend suggestions
7. Show all users
8. Show network statistics
9. Find shortest path between users
10. Find lightest (weighted) path between users
0. Exit";

// ============================================================================
// Menu choices
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    AddUser,
    AddFriendship,
    ShowFriends,
    CheckConnection,
    MutualFriends,
    Suggestions,
    ShowAllUsers,
    Stats,
    ShortestPath,
    LightestPath,
}

impl TryFrom<u32> for MenuChoice {
    type Error = Error;

    fn try_from(n: u32) -> Result<Self> {
        Ok(match n {
            0 => Self::Exit,
            1 => Self::AddUser,
            2 => Self::AddFriendship,
            3 => Self::ShowFriends,
            4 => Self::CheckConnection,
            5 => Self::MutualFriends,
            6 => Self::Suggestions,
            7 => Self::ShowAllUsers,
            8 => Self::Stats,
            9 => Self::ShortestPath,
            10 => Self::LightestPath,
            _ => return Err(Error::InvalidChoice(n.to_string())),
        })
    }
}

/// Parse a weight typed at the prompt. Must be a positive integer.
pub fn parse_weight(raw: &str) -> Result<Weight> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(Weight::new)
        .ok_or_else(|| Error::InvalidWeight(raw.trim().to_string()))
}

/// Whether the session keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

// ============================================================================
// Shell
// ============================================================================

pub struct Shell<R, W> {
    network: Network,
    input: R,
    output: W,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(network: Network, input: R, output: W, config: ShellConfig) -> Self {
        Self { network, input, output, config }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Give back the output sink (tests read what was printed).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the session until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to Social Network Graph Explorer!")?;
        if self.offer_sample_data()? == Flow::Exit {
            return self.farewell();
        }

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{MENU}")?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                break;
            };

            let choice = match line.trim().parse::<u32>() {
                Ok(n) => MenuChoice::try_from(n),
                Err(_) => {
                    writeln!(self.output, "Please enter a valid number.")?;
                    continue;
                }
            };
            let Ok(choice) = choice else {
                writeln!(self.output, "Invalid option. Please try again.")?;
                continue;
            };

            tracing::debug!(?choice, "menu choice");
            if self.dispatch(choice)? == Flow::Exit {
                break;
            }
        }

        self.farewell()
    }

    fn farewell(&mut self) -> Result<()> {
        writeln!(self.output, "Thank you for using Social Network Graph Explorer!")?;
        self.output.flush()?;
        Ok(())
    }

    fn offer_sample_data(&mut self) -> Result<Flow> {
        let load = match self.config.sample {
            SamplePolicy::Load => true,
            SamplePolicy::Skip => false,
            SamplePolicy::Ask => {
                let Some(answer) = self.prompt("Would you like to load sample data? (y/n): ")? else {
                    return Ok(Flow::Exit);
                };
                matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
            }
        };
        if load {
            self.network.load_sample_data();
            writeln!(self.output, "Sample data loaded successfully!")?;
        }
        Ok(Flow::Continue)
    }

    /// Print `message` and read one line. `None` on end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt for two names. `None` on end of input.
    fn prompt_pair(&mut self, first: &str, second: &str) -> Result<Option<(String, String)>> {
        let Some(a) = self.prompt(first)? else {
            return Ok(None);
        };
        let Some(b) = self.prompt(second)? else {
            return Ok(None);
        };
        Ok(Some((a, b)))
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Exit => Ok(Flow::Exit),
            MenuChoice::AddUser => self.add_user(),
            MenuChoice::AddFriendship => self.add_friendship(),
            MenuChoice::ShowFriends => self.show_friends(),
            MenuChoice::CheckConnection => self.check_connection(),
            MenuChoice::MutualFriends => self.mutual_friends(),
            MenuChoice::Suggestions => self.suggestions(),
            MenuChoice::ShowAllUsers => self.show_all_users().map(|()| Flow::Continue),
            MenuChoice::Stats => self.show_stats().map(|()| Flow::Continue),
            MenuChoice::ShortestPath => self.path(false),
            MenuChoice::LightestPath => self.path(true),
        }
    }

    // ========================================================================
    // Handlers
    // ========================================================================

    fn add_user(&mut self) -> Result<Flow> {
        let Some(raw) = self.prompt("Enter username to add: ")? else {
            return Ok(Flow::Exit);
        };
        match self.network.register(&raw) {
            RegisterOutcome::Registered(id) => {
                writeln!(self.output, "User '{id}' added successfully!")?
            }
            RegisterOutcome::AlreadyExists(_) => writeln!(self.output, "Error: User already exists!")?,
            RegisterOutcome::Invalid => writeln!(self.output, "Error: Invalid username!")?,
        }
        Ok(Flow::Continue)
    }

    fn add_friendship(&mut self) -> Result<Flow> {
        let Some((a, b)) = self.prompt_pair("Enter first user: ", "Enter second user: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(raw_weight) = self.prompt("Enter connection weight (positive integer): ")? else {
            return Ok(Flow::Exit);
        };
        let weight = match parse_weight(&raw_weight) {
            Ok(w) => w,
            Err(e) => {
                tracing::debug!(error = %e, "weight rejected");
                writeln!(self.output, "Error: Weight must be a positive integer!")?;
                return Ok(Flow::Continue);
            }
        };

        match self.network.connect(&a, &b, i64::from(weight.get())) {
            ConnectOutcome::Connected { a, b, weight } => writeln!(
                self.output,
                "Friendship created between '{a}' and '{b}' with weight {weight}!"
            )?,
            ConnectOutcome::Invalid => writeln!(self.output, "Error: Invalid usernames!")?,
            ConnectOutcome::Rejected(why) => {
                let message = match why {
                    Rejection::SelfLoop(_) => "A user cannot be friends with themselves!",
                    Rejection::UnknownUser(_) => "One or both users do not exist!",
                    Rejection::AlreadyFriends(..) => "Users are already friends!",
                    Rejection::NonPositiveWeight(_) => "Weight must be a positive integer!",
                };
                writeln!(self.output, "Error: {message}")?
            }
        }
        Ok(Flow::Continue)
    }

    fn show_friends(&mut self) -> Result<Flow> {
        let Some(raw) = self.prompt("Enter username: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = self.existing(&raw) else {
            writeln!(self.output, "Error: User does not exist!")?;
            return Ok(Flow::Continue);
        };

        let friends = self.network.neighbors_with_weights(id.as_str());
        if friends.is_empty() {
            writeln!(self.output, "'{id}' has no friends yet.")?;
        } else {
            let listed: Vec<String> = friends.iter().map(|(f, w)| format!("{f} ({w})")).collect();
            writeln!(self.output, "'{id}' is friends with: {}", listed.join(", "))?;
        }
        Ok(Flow::Continue)
    }

    fn check_connection(&mut self) -> Result<Flow> {
        let Some((a, b)) = self.prompt_pair("Enter first user: ", "Enter second user: ")? else {
            return Ok(Flow::Exit);
        };
        let Some((a, b)) = self.existing_pair(&a, &b)? else {
            return Ok(Flow::Continue);
        };

        if self.network.are_friends(a.as_str(), b.as_str()) {
            writeln!(self.output, "'{a}' and '{b}' are directly connected (friends).")?;
        } else if self.network.are_connected(a.as_str(), b.as_str()) {
            writeln!(self.output, "'{a}' and '{b}' are connected through mutual friends.")?;
        } else {
            writeln!(self.output, "'{a}' and '{b}' are not connected.")?;
        }
        Ok(Flow::Continue)
    }

    fn mutual_friends(&mut self) -> Result<Flow> {
        let Some((a, b)) = self.prompt_pair("Enter first user: ", "Enter second user: ")? else {
            return Ok(Flow::Exit);
        };
        let Some((a, b)) = self.existing_pair(&a, &b)? else {
            return Ok(Flow::Continue);
        };

        let mutual = self.network.mutual_friends(a.as_str(), b.as_str());
        if mutual.is_empty() {
            writeln!(self.output, "'{a}' and '{b}' have no mutual friends.")?;
        } else {
            writeln!(self.output, "Mutual friends of '{a}' and '{b}': {}", join(&mutual))?;
        }
        Ok(Flow::Continue)
    }

    fn suggestions(&mut self) -> Result<Flow> {
        let Some(raw) = self.prompt("Enter username for suggestions: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = self.existing(&raw) else {
            writeln!(self.output, "Error: User does not exist!")?;
            return Ok(Flow::Continue);
        };

        let suggested = self.network.suggest_friends(id.as_str());
        if suggested.is_empty() {
            writeln!(self.output, "No friend suggestions available for '{id}'.")?;
        } else {
            writeln!(self.output, "Friend suggestions for '{id}': {}", join(&suggested))?;
        }
        Ok(Flow::Continue)
    }

    fn show_all_users(&mut self) -> Result<()> {
        let stats = self.network.stats();
        if stats.user_count == 0 {
            writeln!(self.output, "No users in the network yet.")?;
            return Ok(());
        }
        let mut users = stats.ranking;
        users.sort_by(|(a, _), (b, _)| a.cmp(b));

        writeln!(self.output, "All users in the network:")?;
        for (user, friends) in users {
            writeln!(self.output, "- {user} ({friends} friends)")?;
        }
        Ok(())
    }

    fn show_stats(&mut self) -> Result<()> {
        let stats = self.network.stats();
        if self.config.json_stats {
            serde_json::to_writer_pretty(&mut self.output, &stats)?;
            writeln!(self.output)?;
        } else {
            writeln!(self.output)?;
            write!(self.output, "{stats}")?;
        }
        Ok(())
    }

    fn path(&mut self, weighted: bool) -> Result<Flow> {
        let Some((a, b)) = self.prompt_pair("Enter starting user: ", "Enter destination user: ")? else {
            return Ok(Flow::Exit);
        };
        let Some((a, b)) = self.existing_pair(&a, &b)? else {
            return Ok(Flow::Continue);
        };

        let found: Option<Path> = if weighted {
            self.network.lightest_path(a.as_str(), b.as_str())
        } else {
            self.network.shortest_path(a.as_str(), b.as_str())
        };

        match found {
            None => writeln!(self.output, "No connection path found between '{a}' and '{b}'.")?,
            Some(path) if path.is_trivial() => writeln!(self.output, "Same user provided!")?,
            Some(path) => {
                let kind = if weighted { "Lightest" } else { "Shortest" };
                writeln!(self.output, "{kind} path from '{a}' to '{b}':")?;
                writeln!(self.output, "{path}")?;
                match path.total_weight {
                    Some(total) => writeln!(self.output, "Total weight: {total}")?,
                    None => writeln!(self.output, "Distance: {} degrees of separation", path.hops())?,
                }
            }
        }
        Ok(Flow::Continue)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn existing(&self, raw: &str) -> Option<Identity> {
        Identity::parse(raw).filter(|id| self.network.exists(id.as_str()))
    }

    /// Resolve both names, printing the shared error if either is unknown.
    fn existing_pair(&mut self, a: &str, b: &str) -> Result<Option<(Identity, Identity)>> {
        match (self.existing(a), self.existing(b)) {
            (Some(a), Some(b)) => Ok(Some((a, b))),
            _ => {
                writeln!(self.output, "Error: One or both users do not exist!")?;
                Ok(None)
            }
        }
    }
}

fn join<'a>(ids: impl IntoIterator<Item = &'a Identity>) -> String {
    ids.into_iter().map(Identity::as_str).collect::<Vec<_>>().join(", ")
}
