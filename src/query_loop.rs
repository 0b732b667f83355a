use std::io::{self, BufRead, Write};

use log::debug;

use crate::path_index::{PathError, PathIndex, Reach};

pub const PROMPT: &str = "Enter the name of an actor: ";

/// Renders the answer to one query, one line per hop after the headline.
pub fn answer(index: &PathIndex<'_>, name: &str) -> String {
    let root = index.root();
    match index.find(name) {
        Err(PathError::ActorNotFound(_)) => format!("{name} is not in our database."),
        Err(PathError::RootNotFound(_)) => unreachable!("find never reports a missing root"),
        Ok(Reach::Unreachable) => format!("{name}'s {root} number is infinite."),
        Ok(Reach::Connected(path)) => {
            let mut lines = vec![format!("{name}'s {root} number is {}.", path.distance())];
            lines.extend(path.hops.iter().map(ToString::to_string));
            lines.join("\n")
        }
    }
}

/// Prompts for actor names on `input` until it runs dry, answering each on `output`.
pub fn run<R: BufRead, W: Write>(
    index: &PathIndex<'_>,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?; // leave the terminal on a fresh line at EOF
            return Ok(());
        }
        let name = line.trim();
        if name.is_empty() {
            continue;
        }

        debug!("query for {:?}", name);
        writeln!(output, "{}", answer(index, name))?;
        writeln!(output)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_store::build_co_appearance_graph;
    use crate::graph_store::tests::dataset;
    use crate::graph_store::GraphStore;
    use std::io::Cursor;

    fn bacon_graph() -> GraphStore {
        build_co_appearance_graph(&dataset(
            &[("1", "Kevin Bacon"), ("2", "Tom Hanks"), ("3", "Meg Ryan"), ("4", "Loner")],
            &[("10", "Apollo 13"), ("11", "Sleepless in Seattle")],
            &[("10", "1"), ("10", "2"), ("11", "2"), ("11", "3")],
        ))
    }

    #[test]
    fn test_answer_connected() {
        let graph = bacon_graph();
        let index = PathIndex::build(&graph, "Kevin Bacon").unwrap();

        assert_eq!(
            answer(&index, "Meg Ryan"),
            "Meg Ryan's Kevin Bacon number is 2.\n\
             Meg Ryan appeared in Sleepless in Seattle with Tom Hanks\n\
             Tom Hanks appeared in Apollo 13 with Kevin Bacon"
        );
        assert_eq!(answer(&index, "Kevin Bacon"), "Kevin Bacon's Kevin Bacon number is 0.");
    }

    #[test]
    fn test_answer_infinite_and_missing() {
        let graph = bacon_graph();
        let index = PathIndex::build(&graph, "Kevin Bacon").unwrap();

        assert_eq!(answer(&index, "Loner"), "Loner's Kevin Bacon number is infinite.");
        assert_eq!(answer(&index, "Nobody"), "Nobody is not in our database.");
    }

    #[test]
    fn test_answer_uses_root_name() {
        let graph = bacon_graph();
        let index = PathIndex::build(&graph, "Meg Ryan").unwrap();

        assert_eq!(
            answer(&index, "Tom Hanks"),
            "Tom Hanks's Meg Ryan number is 1.\n\
             Tom Hanks appeared in Sleepless in Seattle with Meg Ryan"
        );
    }

    #[test]
    fn test_run_until_eof() {
        let graph = bacon_graph();
        let index = PathIndex::build(&graph, "Kevin Bacon").unwrap();
        let input = Cursor::new("Tom Hanks\n\n  Loner  \r\nNobody\n");
        let mut output = Vec::new();

        run(&index, input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "Enter the name of an actor: Tom Hanks's Kevin Bacon number is 1.\n\
             Tom Hanks appeared in Apollo 13 with Kevin Bacon\n\n\
             Enter the name of an actor: \
             Enter the name of an actor: Loner's Kevin Bacon number is infinite.\n\n\
             Enter the name of an actor: Nobody is not in our database.\n\n\
             Enter the name of an actor: \n"
        );
    }
}
