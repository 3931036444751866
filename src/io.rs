use std::fmt;
use std::fs::File;
use std::path::Path;
use std::io::{BufRead, BufReader, Write};
use log::info;

/// The contents of an edge-list file.
pub struct EdgeList {
    /// Number of nodes: one plus the largest node index seen in the file.
    pub node_count: usize,

    /// Edges in file order, duplicates included.
    pub edges: Vec<(usize, usize)>,
}

/// Errors thrown while reading an edge-list file.
#[derive(Debug)]
pub enum ParseError {
    /// The file could not be opened or read.
    Io(std::io::Error),

    /// A line did not hold exactly two node indices.
    Malformed { line: usize, content: String },

    /// An edge connects a node to itself.
    SelfLoop { line: usize, node: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io(error) => write!(f, "cannot read the edge list ({error})"),
            ParseError::Malformed { line, content } => write!(
                f,
                "line {line} does not hold exactly two node indices: {content:?}",
            ),
            ParseError::SelfLoop { line, node } => write!(
                f,
                "line {line} connects node {node} to itself, self loops are not supported",
            ),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<std::io::Error> for ParseError {
    fn from(error: std::io::Error) -> Self {
        ParseError::Io(error)
    }
}

/// Read an edge-list file and output the node count along with the edge set.
///
/// Each line holds exactly two whitespace-separated node indices. Nodes are
/// numbered from zero and the node count is derived from the largest index
/// in the file, so a node mentioned nowhere below that index still counts
/// as an isolated node.
pub fn read_edge_list(file_path: &Path) -> Result<EdgeList, ParseError> {
    let file = File::open(file_path)?;
    let mut edges = Vec::new();
    let mut max_node_index: Option<usize> = None;

    for (line_index, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let mut tokens = line.split_whitespace();
        let (node1, node2) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(first), Some(second), None) => {
                let node1 = first.parse::<usize>().map_err(|_| ParseError::Malformed {
                    line: line_index + 1,
                    content: line.clone(),
                })?;
                let node2 = second.parse::<usize>().map_err(|_| ParseError::Malformed {
                    line: line_index + 1,
                    content: line.clone(),
                })?;
                (node1, node2)
            }
            _ => {
                return Err(ParseError::Malformed {
                    line: line_index + 1,
                    content: line,
                })
            }
        };

        if node1 == node2 {
            return Err(ParseError::SelfLoop {
                line: line_index + 1,
                node: node1,
            });
        }

        let line_max = node1.max(node2);
        max_node_index = Some(max_node_index.map_or(line_max, |current| current.max(line_max)));
        edges.push((node1, node2));
    }

    let node_count = max_node_index.map_or(0, |max_index| max_index + 1);
    info!(
        "Imported {} nodes with {} edges from {}",
        node_count,
        edges.len(),
        file_path.display()
    );

    Ok(EdgeList { node_count, edges })
}

/// Write the partition array to a file.
pub fn write_partition_data_to_file(partition: &[usize], file_name: &str) -> std::io::Result<()> {
    let mut file = File::create(file_name)?;
    for vertex_id in 0..partition.len() {
        writeln!(file, "vertex {} => community {}", vertex_id, partition[vertex_id])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;
    use std::path::Path;
    use tempfile::tempdir;
    use super::*;

    fn create_mock_file(dir: &Path, filename: &str, content: &str) -> String {
        let file_path = dir.join(filename);
        let mut file = File::create(&file_path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file_path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_read_edge_list() -> Result<(), std::io::Error> {
        // Arrange
        let temp_dir = tempdir()?;
        let content = "0 1\n1 2\n2 3\n";
        let file_path = create_mock_file(temp_dir.path(), "path.txt", content);

        // Act
        let edge_list = read_edge_list(Path::new(&file_path)).unwrap();

        // Assert
        assert_eq!(edge_list.node_count, 4);
        assert_eq!(edge_list.edges, vec![(0, 1), (1, 2), (2, 3)]);

        Ok(())
    }

    #[test]
    fn test_read_edge_list_accepts_tabs_and_repeated_separators() -> Result<(), std::io::Error> {
        // Arrange
        let temp_dir = tempdir()?;
        let content = "0\t1\n4   2\n";
        let file_path = create_mock_file(temp_dir.path(), "spaced.txt", content);

        // Act
        let edge_list = read_edge_list(Path::new(&file_path)).unwrap();

        // Assert
        assert_eq!(edge_list.node_count, 5);
        assert_eq!(edge_list.edges, vec![(0, 1), (4, 2)]);

        Ok(())
    }

    #[test]
    fn test_read_edge_list_rejects_blank_lines() -> Result<(), std::io::Error> {
        // Arrange
        let temp_dir = tempdir()?;
        let content = "0 1\n\n1 2\n";
        let file_path = create_mock_file(temp_dir.path(), "blank.txt", content);

        // Act
        let result = read_edge_list(Path::new(&file_path));

        // Assert
        assert!(matches!(result, Err(ParseError::Malformed { line: 2, .. })));

        Ok(())
    }

    #[test]
    fn test_read_edge_list_rejects_a_line_with_three_tokens() -> Result<(), std::io::Error> {
        // Arrange
        let temp_dir = tempdir()?;
        let content = "0 1\n1 2 7\n";
        let file_path = create_mock_file(temp_dir.path(), "triple.txt", content);

        // Act
        let result = read_edge_list(Path::new(&file_path));

        // Assert
        assert!(matches!(result, Err(ParseError::Malformed { line: 2, .. })));

        Ok(())
    }

    #[test]
    fn test_read_edge_list_rejects_non_numeric_tokens() -> Result<(), std::io::Error> {
        // Arrange
        let temp_dir = tempdir()?;
        let content = "zero one\n";
        let file_path = create_mock_file(temp_dir.path(), "words.txt", content);

        // Act
        let result = read_edge_list(Path::new(&file_path));

        // Assert
        assert!(matches!(result, Err(ParseError::Malformed { line: 1, .. })));

        Ok(())
    }

    #[test]
    fn test_read_edge_list_rejects_self_loops() -> Result<(), std::io::Error> {
        // Arrange
        let temp_dir = tempdir()?;
        let content = "0 1\n3 3\n";
        let file_path = create_mock_file(temp_dir.path(), "loop.txt", content);

        // Act
        let result = read_edge_list(Path::new(&file_path));

        // Assert
        assert!(matches!(result, Err(ParseError::SelfLoop { line: 2, node: 3 })));

        Ok(())
    }

    #[test]
    fn test_read_edge_list_of_an_empty_file() -> Result<(), std::io::Error> {
        // Arrange
        let temp_dir = tempdir()?;
        let file_path = create_mock_file(temp_dir.path(), "empty.txt", "");

        // Act
        let edge_list = read_edge_list(Path::new(&file_path)).unwrap();

        // Assert
        assert_eq!(edge_list.node_count, 0);
        assert!(edge_list.edges.is_empty());

        Ok(())
    }

    #[test]
    fn test_write_partition_data_to_file() -> Result<(), std::io::Error> {
        // Arrange
        let temp_dir = tempdir()?;
        let file_path = temp_dir.path().join("partition.txt");
        let partition = [1, 0, 1];

        // Act
        write_partition_data_to_file(&partition, file_path.to_str().unwrap())?;

        // Assert
        let content = std::fs::read_to_string(&file_path)?;
        assert_eq!(
            content,
            "vertex 0 => community 1\nvertex 1 => community 0\nvertex 2 => community 1\n"
        );

        Ok(())
    }
}
