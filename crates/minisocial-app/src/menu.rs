//! Interactive numbered menu over a [`SocialNetwork`].
//!
//! Input is read line by line and trimmed. A blank answer to a required
//! prompt is rejected here, before any operation runs. End of input behaves
//! like choosing "0".

use std::io::{self, BufRead, Write};

use minisocial_core::Attribute;
use minisocial_graph::SocialStore;

use crate::network::SocialNetwork;
use crate::render;

const MENU: &str = "\n=== MINI SOCIAL NETWORK ===
1. Add person
2. List all people
3. Search person
4. Create friendship
5. View friends of a person
6. Delete friendship
7. City-based recommendations
8. Recommendations by hobby
9. Statistics
0. Exit";

const SEARCH_NAME: &[&str] = &["Enter name to search: "];
const PERSON_NAME: &[&str] = &["Enter person's name: "];
const TWO_NAMES: &[&str] = &["Enter first person's name: ", "Enter second person's name: "];

enum Flow {
    Continue,
    Exit,
}

enum Fields {
    Filled(Vec<String>),
    Blank,
    Closed,
}

/// Read the given prompts, or leave the current action early.
macro_rules! read_or_return {
    ($menu:expr, $labels:expr) => {
        match $menu.read_fields($labels)? {
            Fields::Filled(values) => values,
            Fields::Blank => return Ok(Flow::Continue),
            Fields::Closed => return Ok(Flow::Exit),
        }
    };
}

/// Console session bound to an input and an output stream.
pub struct Menu<'a, S, R, W> {
    network: &'a SocialNetwork<S>,
    input: R,
    output: W,
}

impl<'a, S, R, W> Menu<'a, S, R, W>
where
    S: SocialStore,
    R: BufRead,
    W: Write,
{
    pub fn new(network: &'a SocialNetwork<S>, input: R, output: W) -> Self {
        Self {
            network,
            input,
            output,
        }
    }

    /// Run until the user picks "0" or input ends.
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.read_line("\nChoose an option: ")? else {
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.add_person().await?,
                "2" => self.list_people().await?,
                "3" => self.search_person().await?,
                "4" => self.create_friendship().await?,
                "5" => self.view_friends().await?,
                "6" => self.delete_friendship().await?,
                "7" => self.recommend(Attribute::City).await?,
                "8" => self.recommend(Attribute::Hobby).await?,
                "9" => self.statistics().await?,
                "0" => Flow::Exit,
                _ => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()
    }

    async fn add_person(&mut self) -> io::Result<Flow> {
        let fields = read_or_return!(self, &["Enter name: ", "Enter city: ", "Enter hobby: "]);
        match self
            .network
            .add_person(&fields[0], &fields[1], &fields[2])
            .await
        {
            Ok(p) => writeln!(self.output, "Person '{}' added successfully!", p.name)?,
            Err(e) => writeln!(self.output, "Error adding person: {e}")?,
        }
        Ok(Flow::Continue)
    }

    async fn list_people(&mut self) -> io::Result<Flow> {
        match self.network.list_people().await {
            Ok(people) => render::people(
                &mut self.output,
                "All People",
                &people,
                "No people found in the network.",
            )?,
            Err(e) => writeln!(self.output, "Error listing people: {e}")?,
        }
        Ok(Flow::Continue)
    }

    async fn search_person(&mut self) -> io::Result<Flow> {
        let name = read_or_return!(self, SEARCH_NAME).remove(0);
        match self.network.search_person(&name).await {
            Ok(found) => render::search_result(&mut self.output, &name, found.as_ref())?,
            Err(e) => writeln!(self.output, "Error searching person: {e}")?,
        }
        Ok(Flow::Continue)
    }

    async fn create_friendship(&mut self) -> io::Result<Flow> {
        let names = read_or_return!(self, TWO_NAMES);
        match self.network.add_friendship(&names[0], &names[1]).await {
            Ok(()) => writeln!(
                self.output,
                "Friendship created between '{}' and '{}'!",
                names[0], names[1]
            )?,
            Err(e) => writeln!(self.output, "Error creating friendship: {e}")?,
        }
        Ok(Flow::Continue)
    }

    async fn view_friends(&mut self) -> io::Result<Flow> {
        let name = read_or_return!(self, PERSON_NAME).remove(0);
        match self.network.friends_of(&name).await {
            Ok(friends) => render::people(
                &mut self.output,
                &format!("Friends of {name}"),
                &friends,
                &format!("{name} has no friends yet."),
            )?,
            Err(e) => writeln!(self.output, "Error getting friends: {e}")?,
        }
        Ok(Flow::Continue)
    }

    async fn delete_friendship(&mut self) -> io::Result<Flow> {
        let names = read_or_return!(self, TWO_NAMES);
        match self.network.remove_friendship(&names[0], &names[1]).await {
            Ok(()) => writeln!(
                self.output,
                "Friendship deleted between '{}' and '{}'!",
                names[0], names[1]
            )?,
            Err(e) => writeln!(self.output, "Error deleting friendship: {e}")?,
        }
        Ok(Flow::Continue)
    }

    async fn recommend(&mut self, attribute: Attribute) -> io::Result<Flow> {
        let name = read_or_return!(self, PERSON_NAME).remove(0);
        let kind = match attribute {
            Attribute::City => "City-based",
            Attribute::Hobby => "Hobby-based",
        };
        match self.network.recommend(&name, attribute).await {
            Ok(people) => render::people(
                &mut self.output,
                &format!("{kind} Recommendations for {name}"),
                &people,
                &format!("No {} recommendations for {name}.", kind.to_lowercase()),
            )?,
            Err(e) => writeln!(self.output, "Error getting recommendations: {e}")?,
        }
        Ok(Flow::Continue)
    }

    async fn statistics(&mut self) -> io::Result<Flow> {
        match self.network.statistics().await {
            Ok(stats) => render::statistics(&mut self.output, &stats)?,
            Err(e) => writeln!(self.output, "Error getting statistics: {e}")?,
        }
        Ok(Flow::Continue)
    }

    /// Prompt for each label in turn. Any blank answer rejects the whole set.
    fn read_fields(&mut self, labels: &[&str]) -> io::Result<Fields> {
        let mut values = Vec::with_capacity(labels.len());
        for label in labels {
            match self.read_line(label)? {
                Some(value) => values.push(value),
                None => return Ok(Fields::Closed),
            }
        }
        if values.iter().any(String::is_empty) {
            let msg = if values.len() > 1 {
                "Error: All fields are required!"
            } else {
                "Error: A name is required!"
            };
            writeln!(self.output, "{msg}")?;
            return Ok(Fields::Blank);
        }
        Ok(Fields::Filled(values))
    }

    /// Print a prompt and read one trimmed line. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use minisocial_graph::MemoryStore;

    use super::*;

    async fn session(network: &SocialNetwork<MemoryStore>, script: &str) -> String {
        let mut out = Vec::new();
        Menu::new(network, Cursor::new(script.to_string()), &mut out)
            .run()
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn network() -> SocialNetwork<MemoryStore> {
        SocialNetwork::new(MemoryStore::new())
    }

    #[tokio::test]
    async fn test_add_and_list() {
        let net = network();
        let out = session(
            &net,
            "1\nLuis\nMadrid\nchess\n1\nAna\nMadrid\nchess\n2\n0\n",
        )
        .await;

        assert!(out.contains("Person 'Luis' added successfully!"));
        assert!(out.contains("Person 'Ana' added successfully!"));
        let ana = out.find("- Ana (City: Madrid, Hobby: chess)").unwrap();
        let luis = out.find("- Luis (City: Madrid, Hobby: chess)").unwrap();
        assert!(ana < luis);
        assert!(out.trim_end().ends_with("Goodbye!"));
    }

    #[tokio::test]
    async fn test_blank_field_rejected_before_store() {
        let net = network();
        let out = session(&net, "1\nAna\n   \nchess\n0\n").await;
        assert!(out.contains("Error: All fields are required!"));
        assert_eq!(net.statistics().await.unwrap().people, 0);
    }

    #[tokio::test]
    async fn test_blank_name_rejected_for_search() {
        let net = network();
        let out = session(&net, "3\n\n0\n").await;
        assert!(out.contains("Error: A name is required!"));
        assert!(!out.contains("not found"));
    }

    #[tokio::test]
    async fn test_operation_errors_are_one_line() {
        let net = network();
        net.add_person("Ana", "Madrid", "chess").await.unwrap();
        let out = session(&net, "4\nAna\nAna\n6\nAna\nLuis\n0\n").await;
        assert!(out.contains(
            "Error creating friendship: Invalid argument: cannot create friendship with oneself\n"
        ));
        assert!(out.contains(
            "Error deleting friendship: Friendship between 'Ana' and 'Luis' not found\n"
        ));
    }

    #[tokio::test]
    async fn test_friends_recommendations_and_stats() {
        let net = network();
        net.add_person("Ana", "Madrid", "chess").await.unwrap();
        net.add_person("Luis", "Madrid", "chess").await.unwrap();
        net.add_person("Eva", "Sevilla", "chess").await.unwrap();

        let out = session(&net, "7\nAna\n4\nAna\nLuis\n5\nLuis\n7\nAna\n8\nAna\n9\n0\n").await;

        assert!(out.contains("--- City-based Recommendations for Ana ---\n- Luis"));
        assert!(out.contains("Friendship created between 'Ana' and 'Luis'!"));
        assert!(out.contains("--- Friends of Luis ---\n- Ana (City: Madrid, Hobby: chess)"));
        assert!(out.contains("No city-based recommendations for Ana."));
        assert!(out.contains("--- Hobby-based Recommendations for Ana ---\n- Eva"));
        assert!(out.contains("Total People: 3"));
        assert!(out.contains("Total Friendships: 1"));
    }

    #[tokio::test]
    async fn test_name_prompts() {
        let net = network();
        let out = session(&net, "3\nAna\n5\nAna\n7\nAna\n8\nAna\n0\n").await;
        assert_eq!(out.matches("Enter name to search: ").count(), 1);
        assert_eq!(out.matches("Enter person's name: ").count(), 3);
    }

    #[tokio::test]
    async fn test_invalid_option_and_end_of_input() {
        let net = network();
        let out = session(&net, "42\n").await;
        assert!(out.contains("Invalid option. Please try again."));
        assert!(out.trim_end().ends_with("Goodbye!"));
    }

    #[tokio::test]
    async fn test_end_of_input_mid_prompt_exits() {
        let net = network();
        let out = session(&net, "1\nAna\n").await;
        assert!(out.trim_end().ends_with("Goodbye!"));
        assert_eq!(net.statistics().await.unwrap().people, 0);
    }
}
